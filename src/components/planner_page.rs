use leptos::{
    component, create_memo, create_signal, view, IntoView, Signal, SignalGet, SignalUpdate,
    SignalWith,
};
use leptos_router::{use_navigate, NavigateOptions};
use crate::components::{
    explain_panel::ExplainPanel,
    ranked_list::RankedList,
    summary_panel::SummaryPanel,
    toast::{show_toast, Toast, ToastNotification},
};
use crate::data::load_trains;
use crate::explain::Explanation;
use crate::logging::log;
use crate::models::Decision;
use crate::planner::{format_last_decision, PlannerState};

#[component]
#[must_use]
pub fn PlannerPage() -> impl IntoView {
    let (state, set_state) = create_signal(PlannerState::new(load_trains()));
    let (toast, set_toast) = create_signal(Toast::default());

    let ranked = create_memo(move |_| state.with(PlannerState::ranked));
    let summary = create_memo(move |_| state.with(PlannerState::summary));
    let scores = Signal::derive(move || state.with(PlannerState::score_bars));
    let explanation = create_memo(move |_| state.with(|s| s.selected().map(Explanation::for_train)));

    let on_explain = move |id: String| {
        set_state.update(|s| s.select(&id));
    };

    let on_decide = move |id: String, decision: Decision| {
        let mut matched = None;
        set_state.update(|s| {
            if s.update_status(&id, decision, chrono::Local::now()) {
                matched = s.get(&id).map(|t| t.name.clone());
            }
        });
        if let Some(name) = matched {
            log!("Train {} set to {}", name, decision.status());
            show_toast(set_toast, Toast::for_decision(&name, decision));
        }
    };

    let on_close_explanation = move || set_state.update(PlannerState::clear_selection);

    let navigate = use_navigate();

    view! {
        <div class="page planner-page">
            <div class="page-nav">
                <button class="nav-button" on:click=move |_| navigate("/schedule", NavigateOptions::default())>
                    <i class="fa-solid fa-calendar"></i>
                    " Go to Schedule"
                </button>
            </div>

            <header class="page-header">
                <div>
                    <h1>"KMRL - Induction Planner"</h1>
                    <p class="subtitle">"AI-powered recommendations for daily induction"</p>
                </div>
                <div class="last-decision">
                    "Last decision: "
                    <span class="last-decision-time">
                        {move || format_last_decision(state.with(PlannerState::last_decision))}
                    </span>
                </div>
            </header>

            <div class="planner-grid">
                <RankedList ranked=ranked on_explain=on_explain on_decide=on_decide />
                {move || match explanation.get() {
                    Some(explanation) => view! {
                        <ExplainPanel explanation=explanation on_close=on_close_explanation />
                    }.into_view(),
                    None => view! {
                        <SummaryPanel summary=summary scores=scores />
                    }.into_view(),
                }}
            </div>

            <ToastNotification toast=toast />
        </div>
    }
}
