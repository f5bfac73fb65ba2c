mod raw;
mod schedule;
mod train;

pub use raw::{
    coerce_finite_or_zero, coerce_number, format_fixed, format_number, is_exactly_one, is_falsy, text_or,
    value_to_text, RawScheduleRow, RawServiceRow, RawTimetableRow, RawTrainRow,
};
pub use schedule::{Punctuality, ScheduleRecord, ServiceRecord, TimetableRecord};
pub use train::{BrandingTier, Decision, TrainRecord, TrainStatus};
