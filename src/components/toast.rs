use std::time::Duration;
use leptos::{component, view, IntoView, ReadSignal, SignalGet, SignalSet, SignalUpdate, WriteSignal};
use crate::models::Decision;

const TOAST_VISIBLE_FOR: Duration = Duration::from_millis(2500);

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Toast {
    pub message: String,
    pub visible: bool,
}

impl Toast {
    #[must_use]
    pub fn new(message: String) -> Self {
        Self {
            message,
            visible: true,
        }
    }

    /// Confirmation shown after a planner decision
    #[must_use]
    pub fn for_decision(train_name: &str, decision: Decision) -> Self {
        Self::new(format!("Train {train_name} marked {}", decision.status()))
    }
}

/// Show a toast and hide it again after a short delay
pub fn show_toast(set_toast: WriteSignal<Toast>, toast: Toast) {
    let message = toast.message.clone();
    set_toast.set(toast);
    leptos::set_timeout(
        move || {
            // A newer toast keeps its own timer
            set_toast.update(|current| {
                if current.message == message {
                    current.visible = false;
                }
            });
        },
        TOAST_VISIBLE_FOR,
    );
}

#[component]
#[must_use]
pub fn ToastNotification(toast: ReadSignal<Toast>) -> impl IntoView {
    view! {
        {move || {
            let t = toast.get();
            if t.visible {
                view! {
                    <div class="toast toast-visible" role="status">
                        {t.message}
                    </div>
                }.into_view()
            } else {
                view! { <div class="toast"></div> }.into_view()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_toast_message() {
        let toast = Toast::for_decision("7", Decision::Ibl);
        assert!(toast.visible);
        assert_eq!(toast.message, "Train 7 marked IBL");
    }

    #[test]
    fn test_default_toast_hidden() {
        assert!(!Toast::default().visible);
    }
}
