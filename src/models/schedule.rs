use crate::constants::{
    DEFAULT_TIMETABLE_STATUS, DEFAULT_TRIPS, DELAY_KEYWORDS, NOT_AVAILABLE, NO_WARNINGS,
};
use super::raw::{is_falsy, text_or, value_to_text, RawScheduleRow, RawServiceRow, RawTimetableRow};

/// On-time classification for a planned service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punctuality {
    OnTime,
    Delayed,
}

impl Punctuality {
    /// Classify free-text warnings
    ///
    /// Any case-insensitive occurrence of a delay keyword marks the service as
    /// delayed; missing warnings are on time.
    #[must_use]
    pub fn from_warnings(warnings: Option<&str>) -> Self {
        let Some(text) = warnings else { return Self::OnTime };
        let lowered = text.to_lowercase();
        if DELAY_KEYWORDS.iter().any(|keyword| lowered.contains(keyword)) {
            Self::Delayed
        } else {
            Self::OnTime
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnTime => "On Time",
            Self::Delayed => "Delayed",
        }
    }
}

impl std::fmt::Display for Punctuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Planned service in the service-plan shape
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRecord {
    pub id: String,
    pub trainset: String,
    pub start_time: String,
    pub trips: String,
    pub route: String,
    pub schedule_type: Option<String>,
    pub reasoning: String,
    pub warnings: String,
    pub punctuality: Punctuality,
}

impl ServiceRecord {
    #[must_use]
    pub fn from_raw(row: &RawServiceRow, index: usize) -> Self {
        let warnings_text = (!is_falsy(&row.warnings)).then(|| value_to_text(&row.warnings));

        Self {
            id: row_id(&row.trainset, index),
            trainset: text_or(&row.trainset, ""),
            start_time: text_or(&row.start_time, NOT_AVAILABLE),
            trips: text_or(&row.expected_trips, DEFAULT_TRIPS),
            route: text_or(&row.route_assignment, NOT_AVAILABLE),
            schedule_type: (!is_falsy(&row.schedule_type)).then(|| value_to_text(&row.schedule_type)),
            reasoning: text_or(&row.reasoning, ""),
            punctuality: Punctuality::from_warnings(warnings_text.as_deref()),
            warnings: warnings_text.unwrap_or_else(|| NO_WARNINGS.to_string()),
        }
    }

    /// Whether the warning line should be shown
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.warnings != NO_WARNINGS
    }
}

/// Timetabled service in the departure/arrival shape
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableRecord {
    pub id: String,
    pub trainset: String,
    pub line: String,
    pub departure: String,
    pub arrival: String,
    pub status: String,
}

impl TimetableRecord {
    #[must_use]
    pub fn from_raw(row: &RawTimetableRow, index: usize) -> Self {
        let line = if is_falsy(&row.line) { &row.route } else { &row.line };

        Self {
            id: row_id(&row.trainset, index),
            trainset: text_or(&row.trainset, ""),
            line: text_or(line, NOT_AVAILABLE),
            departure: text_or(&row.departure_time, NOT_AVAILABLE),
            arrival: text_or(&row.arrival_time, NOT_AVAILABLE),
            status: text_or(&row.status, DEFAULT_TIMETABLE_STATUS),
        }
    }
}

/// One row of the daily schedule in whichever shape it was shipped
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleRecord {
    Service(ServiceRecord),
    Timetable(TimetableRecord),
}

impl ScheduleRecord {
    #[must_use]
    pub fn from_raw(row: &RawScheduleRow, index: usize) -> Self {
        match row {
            RawScheduleRow::Service(service) => Self::Service(ServiceRecord::from_raw(service, index)),
            RawScheduleRow::Timetable(timetable) => {
                Self::Timetable(TimetableRecord::from_raw(timetable, index))
            }
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Service(s) => &s.id,
            Self::Timetable(t) => &t.id,
        }
    }

    #[must_use]
    pub fn trainset(&self) -> &str {
        match self {
            Self::Service(s) => &s.trainset,
            Self::Timetable(t) => &t.trainset,
        }
    }

    /// Start string used for ordering the board
    #[must_use]
    pub fn start_time(&self) -> &str {
        match self {
            Self::Service(s) => &s.start_time,
            Self::Timetable(t) => &t.departure,
        }
    }
}

/// Trainset text, or the row position when the trainset is missing
fn row_id(trainset: &serde_json::Value, index: usize) -> String {
    if is_falsy(trainset) {
        index.to_string()
    } else {
        value_to_text(trainset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service(value: serde_json::Value) -> ServiceRecord {
        let row: RawServiceRow = serde_json::from_value(value).expect("valid row");
        ServiceRecord::from_raw(&row, 4)
    }

    #[test]
    fn test_punctuality_keywords() {
        assert_eq!(Punctuality::from_warnings(Some("Fitness cert pending")), Punctuality::Delayed);
        assert_eq!(Punctuality::from_warnings(Some("None")), Punctuality::OnTime);
        assert_eq!(Punctuality::from_warnings(Some("EXPIRED cert")), Punctuality::Delayed);
        assert_eq!(Punctuality::from_warnings(Some("2 open Job Card(s)")), Punctuality::Delayed);
        assert_eq!(Punctuality::from_warnings(Some("Low sand level")), Punctuality::OnTime);
        assert_eq!(Punctuality::from_warnings(None), Punctuality::OnTime);
    }

    #[test]
    fn test_service_row_defaults() {
        let record = service(json!({"Schedule_Type": "Primary Service"}));
        assert_eq!(record.id, "4");
        assert_eq!(record.start_time, "N/A");
        assert_eq!(record.trips, "0");
        assert_eq!(record.route, "N/A");
        assert_eq!(record.reasoning, "");
        assert_eq!(record.warnings, "None");
        assert!(!record.has_warnings());
        assert_eq!(record.punctuality, Punctuality::OnTime);
        assert_eq!(record.schedule_type.as_deref(), Some("Primary Service"));
    }

    #[test]
    fn test_service_row_pass_through() {
        let record = service(json!({
            "Trainset": 12,
            "Start_Time": "05:45",
            "Expected_Trips": 9,
            "Route_Assignment": "Aluva - Pettah",
            "AI Reasoning": "Highest fitness margin",
            "Warnings": "Telecom cert expired"
        }));
        assert_eq!(record.id, "12");
        assert_eq!(record.trainset, "12");
        assert_eq!(record.trips, "9");
        assert_eq!(record.route, "Aluva - Pettah");
        assert_eq!(record.reasoning, "Highest fitness margin");
        assert!(record.has_warnings());
        assert_eq!(record.punctuality, Punctuality::Delayed);
        assert_eq!(record.schedule_type, None);
    }

    #[test]
    fn test_timetable_row_defaults_to_scheduled() {
        let row: RawTimetableRow =
            serde_json::from_value(json!({"Trainset": 3, "Route": "Blue", "Departure_Time": "07:10"}))
                .expect("valid row");
        let record = TimetableRecord::from_raw(&row, 0);
        assert_eq!(record.line, "Blue");
        assert_eq!(record.departure, "07:10");
        assert_eq!(record.arrival, "N/A");
        assert_eq!(record.status, "Scheduled");
    }

    #[test]
    fn test_timetable_status_passes_through() {
        let row: RawTimetableRow =
            serde_json::from_value(json!({"Trainset": 3, "Line": "Blue", "Status": "Cancelled"}))
                .expect("valid row");
        let record = TimetableRecord::from_raw(&row, 0);
        assert_eq!(record.status, "Cancelled");
    }
}
