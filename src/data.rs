use crate::logging::{log, log_warn};
use crate::models::{RawScheduleRow, RawTrainRow, ScheduleRecord, TrainRecord};

const RECOMMENDATIONS_JSON: &str = include_str!("../data/kmrl_daily_recommendations.json");
const SCHEDULE_JSON: &str = include_str!("../data/kmrl_daily_schedule.json");

/// Parse the bundled daily recommendations and normalize every row
#[must_use]
pub fn load_trains() -> Vec<TrainRecord> {
    match parse_train_rows(RECOMMENDATIONS_JSON) {
        Ok(rows) => {
            log!("Loaded {} recommendation rows", rows.len());
            TrainRecord::from_rows(&rows)
        }
        Err(e) => {
            log_warn!("Recommendations dataset unreadable: {}", e);
            Vec::new()
        }
    }
}

/// Parse the bundled daily schedule and normalize every row, in file order
#[must_use]
pub fn load_schedule() -> Vec<ScheduleRecord> {
    match parse_schedule_rows(SCHEDULE_JSON) {
        Ok(rows) => {
            log!("Loaded {} schedule rows", rows.len());
            rows.iter()
                .enumerate()
                .map(|(index, row)| ScheduleRecord::from_raw(row, index))
                .collect()
        }
        Err(e) => {
            log_warn!("Schedule dataset unreadable: {}", e);
            Vec::new()
        }
    }
}

/// Parse a recommendations JSON array
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of objects.
pub fn parse_train_rows(json: &str) -> Result<Vec<RawTrainRow>, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse recommendations: {e}"))
}

/// Parse a schedule JSON array, detecting each row's shape
///
/// # Errors
///
/// Returns an error if the text is not a JSON array or any element is not an object.
pub fn parse_schedule_rows(json: &str) -> Result<Vec<RawScheduleRow>, String> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| format!("Failed to parse schedule: {e}"))?;

    values.into_iter().map(RawScheduleRow::from_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrainStatus;

    #[test]
    fn test_bundled_recommendations_load() {
        let trains = load_trains();
        assert!(!trains.is_empty());
        assert!(trains.iter().all(|t| t.status == TrainStatus::Pending));
    }

    #[test]
    fn test_bundled_schedule_load() {
        let schedule = load_schedule();
        assert!(!schedule.is_empty());
        assert!(schedule.iter().all(|r| matches!(r, ScheduleRecord::Service(_))));
    }

    #[test]
    fn test_parse_train_rows_rejects_non_array() {
        assert!(parse_train_rows(r#"{"Trainset": 1}"#).is_err());
    }

    #[test]
    fn test_parse_schedule_rows_mixed_shapes() {
        let rows = parse_schedule_rows(
            r#"[
                {"Trainset": 1, "Start_Time": "06:00", "Warnings": "None"},
                {"Trainset": 2, "Line": "Blue", "Departure_Time": "06:10", "Arrival_Time": "07:00"}
            ]"#,
        )
        .expect("valid schedule");

        assert_eq!(rows.len(), 2);
        assert!(matches!(rows[0], RawScheduleRow::Service(_)));
        assert!(matches!(rows[1], RawScheduleRow::Timetable(_)));
    }

    #[test]
    fn test_parse_schedule_rows_rejects_scalar_element() {
        assert!(parse_schedule_rows("[1, 2]").is_err());
    }
}
