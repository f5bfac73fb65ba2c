#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod explain_panel;
pub mod planner_page;
pub mod ranked_list;
pub mod schedule_page;
pub mod status_badge;
pub mod summary_panel;
pub mod toast;
