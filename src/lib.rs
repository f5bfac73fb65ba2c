#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

pub mod logging;
pub mod constants;
pub mod models;
pub mod data;
pub mod planner;
pub mod explain;
pub mod schedule;
pub mod theme;
pub mod components;

pub use components::app::App;
