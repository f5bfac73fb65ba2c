use leptos::{create_effect, create_signal, on_cleanup, ReadSignal, SignalSet};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::models::{Punctuality, TrainStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }

    const fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }
}

/// Hook that follows the system colour scheme
///
/// Stays on `Light` when the browser has no media query support.
#[must_use]
pub fn use_theme() -> ReadSignal<Theme> {
    let (theme, set_theme) = create_signal(Theme::Light);

    create_effect(move |_| {
        let Some(window) = web_sys::window() else { return };
        let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") else { return };

        set_theme.set(Theme::from_dark(media_query.matches()));

        let closure = Closure::wrap(Box::new(move |event: JsValue| {
            let Ok(matches) = js_sys::Reflect::get(&event, &"matches".into()) else { return };
            let Some(is_dark) = matches.as_bool() else { return };
            set_theme.set(Theme::from_dark(is_dark));
        }) as Box<dyn FnMut(_)>);

        if media_query
            .add_listener_with_opt_callback(Some(closure.as_ref().unchecked_ref()))
            .is_err()
        {
            crate::log_warn!("Colour scheme listener could not be attached");
        }

        on_cleanup(move || {
            let _ = media_query.remove_listener_with_opt_callback(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        });
    });

    theme
}

const NEUTRAL_BADGE: &str = "badge badge-neutral";

/// Badge style for a train status
#[must_use]
pub const fn status_badge_class(status: TrainStatus) -> &'static str {
    match status {
        TrainStatus::Pending => NEUTRAL_BADGE,
        TrainStatus::Approved => "badge badge-green",
        TrainStatus::Held => "badge badge-yellow",
        TrainStatus::Ibl => "badge badge-rose",
    }
}

/// Badge style for a status given as text, grey when unrecognized
#[must_use]
pub fn status_text_badge_class(status: &str) -> &'static str {
    TrainStatus::parse(status).map_or(NEUTRAL_BADGE, status_badge_class)
}

/// Pie slice colour for a train status
#[must_use]
pub const fn status_chart_color(status: TrainStatus) -> &'static str {
    match status {
        TrainStatus::Pending => "#94a3b8",
        TrainStatus::Approved => "#22c55e",
        TrainStatus::Held => "#facc15",
        TrainStatus::Ibl => "#f43f5e",
    }
}

/// Badge style for a schedule type, grey when unrecognized or missing
#[must_use]
pub fn schedule_type_badge_class(schedule_type: Option<&str>) -> &'static str {
    match schedule_type {
        Some("Primary Service") => "badge badge-green",
        Some("Standby/Relief") => "badge badge-yellow",
        _ => NEUTRAL_BADGE,
    }
}

#[must_use]
pub const fn punctuality_badge_class(punctuality: Punctuality) -> &'static str {
    match punctuality {
        Punctuality::OnTime => "badge badge-green",
        Punctuality::Delayed => "badge badge-rose",
    }
}

/// Badge style for a timetable status, grey when unrecognized
#[must_use]
pub fn timetable_status_badge_class(status: &str) -> &'static str {
    match status {
        "Scheduled" => "badge badge-indigo",
        "Running" | "On Time" => "badge badge-green",
        "Delayed" => "badge badge-rose",
        "Cancelled" => "badge badge-yellow",
        _ => NEUTRAL_BADGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badges_are_distinct() {
        let classes: std::collections::HashSet<_> =
            TrainStatus::ALL.into_iter().map(status_badge_class).collect();
        assert_eq!(classes.len(), TrainStatus::ALL.len());
    }

    #[test]
    fn test_unknown_status_text_falls_back() {
        assert_eq!(status_text_badge_class("Approved"), "badge badge-green");
        assert_eq!(status_text_badge_class("Scrapped"), NEUTRAL_BADGE);
    }

    #[test]
    fn test_schedule_type_fallback() {
        assert_eq!(schedule_type_badge_class(Some("Primary Service")), "badge badge-green");
        assert_eq!(schedule_type_badge_class(Some("Charter")), NEUTRAL_BADGE);
        assert_eq!(schedule_type_badge_class(None), NEUTRAL_BADGE);
    }

    #[test]
    fn test_timetable_status_fallback() {
        assert_eq!(timetable_status_badge_class("Scheduled"), "badge badge-indigo");
        assert_eq!(timetable_status_badge_class("Unknown"), NEUTRAL_BADGE);
    }

    #[test]
    fn test_theme_class() {
        assert_eq!(Theme::from_dark(true).class(), "theme-dark");
        assert_eq!(Theme::from_dark(false).class(), "theme-light");
    }
}
