use crate::constants::{
    BAY_COUNT, BRANDING_CRITICAL_ABOVE, BRANDING_HIGH_ABOVE, CLEANING_SCORE_FACTOR, NOT_AVAILABLE,
};
use super::raw::{coerce_finite_or_zero, coerce_number, is_exactly_one, text_or, value_to_text, RawTrainRow};

/// Induction status of a trainset for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrainStatus {
    #[default]
    Pending,
    Approved,
    Held,
    Ibl,
}

impl TrainStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Approved, Self::Held, Self::Ibl];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Held => "Held",
            Self::Ibl => "IBL",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

impl std::fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status a planner can assign; `Pending` is only ever the initial state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Approved,
    Held,
    Ibl,
}

impl Decision {
    pub const ALL: [Self; 3] = [Self::Approved, Self::Held, Self::Ibl];

    #[must_use]
    pub const fn status(self) -> TrainStatus {
        match self {
            Self::Approved => TrainStatus::Approved,
            Self::Held => TrainStatus::Held,
            Self::Ibl => TrainStatus::Ibl,
        }
    }

    /// Button label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approve",
            Self::Held => "Hold",
            Self::Ibl => "IBL",
        }
    }
}

impl From<Decision> for TrainStatus {
    fn from(decision: Decision) -> Self {
        decision.status()
    }
}

/// Branding contract tier derived from the raw branding priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrandingTier {
    Critical,
    High,
    Normal,
}

impl BrandingTier {
    /// Tier for a raw priority value; both thresholds are exclusive
    #[must_use]
    pub fn from_priority(priority: Option<f64>) -> Self {
        match priority {
            Some(p) if p > BRANDING_CRITICAL_ABOVE => Self::Critical,
            Some(p) if p > BRANDING_HIGH_ABOVE => Self::High,
            _ => Self::Normal,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Normal => "Normal",
        }
    }
}

impl std::fmt::Display for BrandingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-ready trainset derived from one dataset row
#[derive(Debug, Clone, PartialEq)]
pub struct TrainRecord {
    pub id: String,
    pub name: String,
    pub odometer_km: f64,
    pub fitness_valid: bool,
    pub jobcards_open: u32,
    pub branding_priority: BrandingTier,
    pub cleaning_score: f64,
    pub bay: usize,
    pub ai_recommendation: String,
    pub status_name: String,
    pub priority_score: f64,
    pub status: TrainStatus,
}

impl TrainRecord {
    /// Normalize a dataset row at position `index`
    ///
    /// Never fails: malformed fields coerce to 0, `false` or `"N/A"`. The status
    /// always starts as `Pending` whatever the row says.
    #[must_use]
    pub fn from_raw(row: &RawTrainRow, index: usize) -> Self {
        let name = value_to_text(&row.trainset);

        let fitness_valid = is_exactly_one(&row.rolling_cert)
            && is_exactly_one(&row.signal_cert)
            && is_exactly_one(&row.telecom_cert);

        // Float-to-int casts saturate, so negatives land on 0
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let jobcards_open = coerce_finite_or_zero(&row.job_card_open) as u32;

        Self {
            id: name.clone(),
            name,
            odometer_km: coerce_finite_or_zero(&row.mileage),
            fitness_valid,
            jobcards_open,
            branding_priority: BrandingTier::from_priority(coerce_number(&row.branding_priority)),
            cleaning_score: coerce_finite_or_zero(&row.cleaning_status) * CLEANING_SCORE_FACTOR,
            bay: index % BAY_COUNT,
            ai_recommendation: text_or(&row.ai_recommendation, NOT_AVAILABLE),
            status_name: text_or(&row.status_name, NOT_AVAILABLE),
            priority_score: coerce_finite_or_zero(&row.priority_score),
            status: TrainStatus::Pending,
        }
    }

    /// Normalize a whole dataset in order
    #[must_use]
    pub fn from_rows(rows: &[RawTrainRow]) -> Vec<Self> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| Self::from_raw(row, index))
            .collect()
    }
}
