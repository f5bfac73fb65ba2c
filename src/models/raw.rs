use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Coerce a loosely typed dataset value into a number
///
/// Numbers pass through, strings are trimmed and parsed (an empty string is 0),
/// booleans are 1/0 and `null` is 0. Everything else, including a missing field,
/// is not a number.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce into a finite number, falling back to 0
#[must_use]
pub fn coerce_finite_or_zero(value: &Value) -> f64 {
    coerce_number(value).filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// True only for the JSON number 1 (no string or boolean coercion)
#[must_use]
pub fn is_exactly_one(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| n == 1.0)
}

/// Whether a value counts as "missing" for text fallbacks: absent, null,
/// false, 0 or the empty string
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Render a dataset value as display text
///
/// Whole numbers print without a fractional part so `12` and `12.0` both read `12`.
#[must_use]
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n
            .as_f64()
            .map_or_else(|| n.to_string(), format_number),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Text of a value, or `fallback` when it is falsy
#[must_use]
pub fn text_or(value: &Value, fallback: &str) -> String {
    if is_falsy(value) {
        fallback.to_string()
    } else {
        value_to_text(value)
    }
}

/// Format a number the way the dashboard prints plain numbers
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = n as i64;
        whole.to_string()
    } else {
        n.to_string()
    }
}

/// Digits that cover the full decimal expansion of any finite `f64`
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Format with a fixed number of decimals, rounding exact ties away from zero
///
/// Rounding works on the exact binary value, so `0.15` (stored just below
/// 0.15) gives `0.1` while `72.25` (stored exactly) gives `72.3`. Negative
/// values keep their sign even when they round to zero.
#[must_use]
pub fn format_fixed(n: f64, digits: usize) -> String {
    if !n.is_finite() || digits >= EXACT_FRACTION_DIGITS {
        return format!("{n:.digits$}");
    }

    let magnitude = n.abs();
    let exact = format!("{magnitude:.EXACT_FRACTION_DIGITS$}");
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let (kept, rest) = fraction.split_at(digits.min(fraction.len()));
    let is_tie = rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0');

    let rounded = if is_tie {
        round_up_last_digit(whole, kept)
    } else {
        format!("{magnitude:.digits$}")
    };

    if n < 0.0 {
        format!("-{rounded}")
    } else {
        rounded
    }
}

/// Add one unit in the last kept place of `whole.kept`
fn round_up_last_digit(whole: &str, kept: &str) -> String {
    let mut number: Vec<u8> = whole.bytes().chain(kept.bytes()).collect();
    let mut carry = true;
    for digit in number.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        number.insert(0, b'1');
    }

    let split = number.len() - kept.len();
    let text: String = number.into_iter().map(char::from).collect();
    if kept.is_empty() {
        text
    } else {
        format!("{}.{}", &text[..split], &text[split..])
    }
}

/// One row of the daily recommendations dataset, as shipped
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTrainRow {
    #[serde(rename = "Trainset", default)]
    pub trainset: Value,
    #[serde(rename = "Mileage", default)]
    pub mileage: Value,
    #[serde(rename = "Rolling_Cert", default)]
    pub rolling_cert: Value,
    #[serde(rename = "Signal_Cert", default)]
    pub signal_cert: Value,
    #[serde(rename = "Telecom_Cert", default)]
    pub telecom_cert: Value,
    #[serde(rename = "Job_Card_Open", default)]
    pub job_card_open: Value,
    #[serde(rename = "Branding_Priority", default)]
    pub branding_priority: Value,
    #[serde(rename = "Cleaning_Status", default)]
    pub cleaning_status: Value,
    #[serde(rename = "AI_Recommendation", default)]
    pub ai_recommendation: Value,
    #[serde(rename = "Status_Name", default)]
    pub status_name: Value,
    #[serde(rename = "Priority_Score", default)]
    pub priority_score: Value,
}

/// Schedule row in the service-plan shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawServiceRow {
    #[serde(rename = "Trainset", default)]
    pub trainset: Value,
    #[serde(rename = "Start_Time", default)]
    pub start_time: Value,
    #[serde(rename = "Expected_Trips", default)]
    pub expected_trips: Value,
    #[serde(rename = "Route_Assignment", default)]
    pub route_assignment: Value,
    #[serde(rename = "Schedule_Type", default)]
    pub schedule_type: Value,
    #[serde(rename = "AI Reasoning", default)]
    pub reasoning: Value,
    #[serde(rename = "Warnings", default)]
    pub warnings: Value,
}

/// Schedule row in the timetable shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTimetableRow {
    #[serde(rename = "Trainset", default)]
    pub trainset: Value,
    #[serde(rename = "Line", default)]
    pub line: Value,
    #[serde(rename = "Route", default)]
    pub route: Value,
    #[serde(rename = "Departure_Time", default)]
    pub departure_time: Value,
    #[serde(rename = "Arrival_Time", default)]
    pub arrival_time: Value,
    #[serde(rename = "Status", default)]
    pub status: Value,
}

/// A schedule row in either of the two shipped shapes
#[derive(Debug, Clone, PartialEq)]
pub enum RawScheduleRow {
    Service(RawServiceRow),
    Timetable(RawTimetableRow),
}

const SERVICE_KEYS: [&str; 6] = [
    "Start_Time",
    "Expected_Trips",
    "Route_Assignment",
    "Schedule_Type",
    "AI Reasoning",
    "Warnings",
];

const TIMETABLE_KEYS: [&str; 5] = ["Line", "Route", "Departure_Time", "Arrival_Time", "Status"];

impl RawScheduleRow {
    /// Pick the row shape from the keys present
    ///
    /// Any service-plan key selects the service shape; otherwise a timetable key
    /// selects the timetable shape. A row with neither is read as a service row,
    /// which then falls back to its defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let Value::Object(map) = value else {
            return Err(format!("Schedule row is not an object: {value}"));
        };

        if is_timetable_shape(&map) {
            serde_json::from_value(Value::Object(map))
                .map(Self::Timetable)
                .map_err(|e| format!("Invalid timetable row: {e}"))
        } else {
            serde_json::from_value(Value::Object(map))
                .map(Self::Service)
                .map_err(|e| format!("Invalid service row: {e}"))
        }
    }
}

fn is_timetable_shape(map: &Map<String, Value>) -> bool {
    let has_service_key = SERVICE_KEYS.iter().any(|k| map.contains_key(*k));
    let has_timetable_key = TIMETABLE_KEYS.iter().any(|k| map.contains_key(*k));
    !has_service_key && has_timetable_key
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_number_variants() {
        assert_eq!(coerce_number(&json!(17)), Some(17.0));
        assert_eq!(coerce_number(&json!(" 12.5 ")), Some(12.5));
        assert_eq!(coerce_number(&json!("")), Some(0.0));
        assert_eq!(coerce_number(&json!(true)), Some(1.0));
        assert_eq!(coerce_number(&Value::Null), Some(0.0));
        assert_eq!(coerce_number(&json!("abc")), None);
        assert_eq!(coerce_number(&json!([1])), None);
    }

    #[test]
    fn test_coerce_finite_or_zero_rejects_infinity() {
        assert_eq!(coerce_finite_or_zero(&json!("inf")), 0.0);
        assert_eq!(coerce_finite_or_zero(&json!("nope")), 0.0);
        assert_eq!(coerce_finite_or_zero(&json!("42")), 42.0);
    }

    #[test]
    fn test_is_exactly_one_is_strict() {
        assert!(is_exactly_one(&json!(1)));
        assert!(is_exactly_one(&json!(1.0)));
        assert!(!is_exactly_one(&json!("1")));
        assert!(!is_exactly_one(&json!(true)));
        assert!(!is_exactly_one(&json!(0)));
        assert!(!is_exactly_one(&Value::Null));
    }

    #[test]
    fn test_value_to_text() {
        assert_eq!(value_to_text(&json!(12)), "12");
        assert_eq!(value_to_text(&json!(12.0)), "12");
        assert_eq!(value_to_text(&json!(37.5)), "37.5");
        assert_eq!(value_to_text(&json!("T-07")), "T-07");
    }

    #[test]
    fn test_format_fixed_rounds_exact_ties_up() {
        assert_eq!(format_fixed(72.25, 1), "72.3");
        assert_eq!(format_fixed(12.5, 0), "13");
        assert_eq!(format_fixed(0.5, 0), "1");
        assert_eq!(format_fixed(9.5, 0), "10");
        assert_eq!(format_fixed(99.75, 1), "99.8");
    }

    #[test]
    fn test_format_fixed_uses_stored_value() {
        // 0.15 and 1.005 sit just below their decimal spelling
        assert_eq!(format_fixed(0.15, 1), "0.1");
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(72.24, 1), "72.2");
    }

    #[test]
    fn test_format_fixed_pads_and_signs() {
        assert_eq!(format_fixed(81.0, 1), "81.0");
        assert_eq!(format_fixed(0.0, 1), "0.0");
        assert_eq!(format_fixed(-2.25, 1), "-2.3");
        assert_eq!(format_fixed(-0.04, 1), "-0.0");
    }

    #[test]
    fn test_text_or_falls_back_on_falsy() {
        assert_eq!(text_or(&Value::Null, "N/A"), "N/A");
        assert_eq!(text_or(&json!(""), "N/A"), "N/A");
        assert_eq!(text_or(&json!(0), "0"), "0");
        assert_eq!(text_or(&json!("Aluva"), "N/A"), "Aluva");
    }

    #[test]
    fn test_missing_fields_default_to_null() {
        let row: RawTrainRow = serde_json::from_str(r#"{"Trainset": 3}"#).expect("valid row");
        assert_eq!(row.trainset, json!(3));
        assert_eq!(row.priority_score, Value::Null);
    }

    #[test]
    fn test_schedule_shape_detection() {
        let service = RawScheduleRow::from_value(json!({
            "Trainset": 1, "Start_Time": "06:00", "Warnings": "None"
        }))
        .expect("object");
        assert!(matches!(service, RawScheduleRow::Service(_)));

        let timetable = RawScheduleRow::from_value(json!({
            "Trainset": 1, "Line": "Blue", "Departure_Time": "06:00"
        }))
        .expect("object");
        assert!(matches!(timetable, RawScheduleRow::Timetable(_)));

        assert!(RawScheduleRow::from_value(json!(5)).is_err());
    }
}
