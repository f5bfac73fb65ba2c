use std::cmp::Ordering;
use chrono::{DateTime, Local};
use crate::models::{Decision, RawTrainRow, TrainRecord, TrainStatus};

/// Order trains by descending priority score
///
/// The sort is stable: trains with equal scores keep their dataset order.
#[must_use]
pub fn rank_trains(trains: &[TrainRecord]) -> Vec<TrainRecord> {
    let mut ranked = trains.to_vec();
    ranked.sort_by(|a, b| {
        b.priority_score
            .partial_cmp(&a.priority_score)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

/// Per-status counts for the overview panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub held: usize,
    pub ibl: usize,
    /// Statuses present in the collection, in order of first appearance
    pub slices: Vec<(TrainStatus, usize)>,
}

impl StatusSummary {
    #[must_use]
    pub fn from_trains(trains: &[TrainRecord]) -> Self {
        let mut summary = Self {
            total: trains.len(),
            ..Self::default()
        };

        for train in trains {
            match train.status {
                TrainStatus::Pending => summary.pending += 1,
                TrainStatus::Approved => summary.approved += 1,
                TrainStatus::Held => summary.held += 1,
                TrainStatus::Ibl => summary.ibl += 1,
            }

            if let Some(slice) = summary.slices.iter_mut().find(|(s, _)| *s == train.status) {
                slice.1 += 1;
            } else {
                summary.slices.push((train.status, 1));
            }
        }

        summary
    }

    #[must_use]
    pub const fn count(&self, status: TrainStatus) -> usize {
        match status {
            TrainStatus::Pending => self.pending,
            TrainStatus::Approved => self.approved,
            TrainStatus::Held => self.held,
            TrainStatus::Ibl => self.ibl,
        }
    }
}

/// Session state for the induction planner page
///
/// Owns the normalized trains, the train currently being explained and the time
/// of the most recent decision. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannerState {
    trains: Vec<TrainRecord>,
    selected_id: Option<String>,
    last_decision: Option<DateTime<Local>>,
}

impl PlannerState {
    #[must_use]
    pub const fn new(trains: Vec<TrainRecord>) -> Self {
        Self {
            trains,
            selected_id: None,
            last_decision: None,
        }
    }

    #[must_use]
    pub fn from_rows(rows: &[RawTrainRow]) -> Self {
        Self::new(TrainRecord::from_rows(rows))
    }

    /// Trains in dataset order
    #[must_use]
    pub fn trains(&self) -> &[TrainRecord] {
        &self.trains
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TrainRecord> {
        self.trains.iter().find(|t| t.id == id)
    }

    /// Trains ranked for induction, recomputed from the current collection
    #[must_use]
    pub fn ranked(&self) -> Vec<TrainRecord> {
        rank_trains(&self.trains)
    }

    /// Apply a planner decision to every train with `id`
    ///
    /// Ids come from the trainset column, so a dataset listing a trainset twice
    /// yields duplicates; all of them take the new status. Other trains are left
    /// untouched. Any transition is allowed, including repeating the current
    /// one. The last-decision time is overwritten on every call. Returns whether
    /// any train matched.
    pub fn update_status(&mut self, id: &str, decision: Decision, at: DateTime<Local>) -> bool {
        self.last_decision = Some(at);

        let mut matched = false;
        for train in self.trains.iter_mut().filter(|t| t.id == id) {
            train.status = decision.status();
            matched = true;
        }
        matched
    }

    #[must_use]
    pub const fn last_decision(&self) -> Option<DateTime<Local>> {
        self.last_decision
    }

    pub fn select(&mut self, id: &str) {
        self.selected_id = Some(id.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// The train being explained, as it currently stands
    #[must_use]
    pub fn selected(&self) -> Option<&TrainRecord> {
        self.selected_id.as_deref().and_then(|id| self.get(id))
    }

    #[must_use]
    pub fn summary(&self) -> StatusSummary {
        StatusSummary::from_trains(&self.trains)
    }

    /// (name, score) pairs for the score chart, highest first
    #[must_use]
    pub fn score_bars(&self) -> Vec<(String, f64)> {
        self.ranked()
            .into_iter()
            .map(|t| (t.name, t.priority_score))
            .collect()
    }
}

/// Render the last-decision time as `dd/mm/yyyy, hh:mm:ss am`, or `--` if none
#[must_use]
pub fn format_last_decision(at: Option<DateTime<Local>>) -> String {
    at.map_or_else(
        || "--".to_string(),
        |t| t.format("%d/%m/%Y, %I:%M:%S %P").to_string(),
    )
}
