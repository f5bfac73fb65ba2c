use leptos::{component, view, IntoView};
use crate::models::TrainStatus;
use crate::theme::status_badge_class;

#[component]
#[must_use]
pub fn StatusBadge(status: TrainStatus) -> impl IntoView {
    view! {
        <span class=status_badge_class(status)>{status.as_str()}</span>
    }
}
