/// Number of stabling bays trains are spread across by dataset position
pub const BAY_COUNT: usize = 6;

/// Raw branding priority above which a train is `Critical`
pub const BRANDING_CRITICAL_ABOVE: f64 = 15.0;

/// Raw branding priority above which a train is `High`
pub const BRANDING_HIGH_ABOVE: f64 = 12.0;

/// Raw cleaning status is scaled by this factor into a cleaning score
pub const CLEANING_SCORE_FACTOR: f64 = 50.0;

/// Explanation delta shown for a train with all three certificates valid
pub const FITNESS_VALID_DELTA: i64 = 45;

/// Explanation delta shown for a train missing any certificate
pub const FITNESS_INVALID_DELTA: i64 = -80;

/// Explanation penalty per open job card
pub const JOBCARD_PENALTY: i64 = -8;

/// Schedule start time that always sorts after concrete times
pub const ON_CALL: &str = "On-Call";

/// Warning keywords (lowercase) that mark a scheduled service as delayed
pub const DELAY_KEYWORDS: [&str; 3] = ["pending", "expired", "job card"];

/// Fallback for missing free-text fields
pub const NOT_AVAILABLE: &str = "N/A";

/// Fallback for a missing warnings field
pub const NO_WARNINGS: &str = "None";

/// Fallback for a missing timetable status
pub const DEFAULT_TIMETABLE_STATUS: &str = "Scheduled";

/// Fallback for a missing trip count
pub const DEFAULT_TRIPS: &str = "0";
