use leptos::{component, view, IntoView, Memo, SignalGet, CollectView};
use crate::components::status_badge::StatusBadge;
use crate::models::{format_fixed, Decision, TrainRecord};

fn decision_button_class(decision: Decision) -> &'static str {
    match decision {
        Decision::Approved => "action-button action-approve",
        Decision::Held => "action-button action-hold",
        Decision::Ibl => "action-button action-ibl",
    }
}

#[component]
fn TrainCard(
    rank: usize,
    train: TrainRecord,
    on_explain: impl Fn(String) + 'static + Copy,
    on_decide: impl Fn(String, Decision) + 'static + Copy,
) -> impl IntoView {
    let explain_id = train.id.clone();

    view! {
        <div class="train-card">
            <div class="train-card-header">
                <div>
                    <div class="train-name">{format!("{rank}. {}", train.name)}</div>
                    <div class="train-meta">
                        {format!("Score: {} • {}", format_fixed(train.priority_score, 1), train.status_name)}
                    </div>
                </div>
                <StatusBadge status=train.status />
            </div>
            <div class="train-actions">
                <button
                    class="action-button action-explain"
                    on:click=move |_| on_explain(explain_id.clone())
                >
                    <i class="fa-solid fa-circle-info"></i>
                    " Explain"
                </button>
                {Decision::ALL.into_iter().map(|decision| {
                    let id = train.id.clone();
                    view! {
                        <button
                            class=decision_button_class(decision)
                            on:click=move |_| on_decide(id.clone(), decision)
                        >
                            {decision.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
#[must_use]
pub fn RankedList(
    ranked: Memo<Vec<TrainRecord>>,
    on_explain: impl Fn(String) + 'static + Copy,
    on_decide: impl Fn(String, Decision) + 'static + Copy,
) -> impl IntoView {
    view! {
        <div class="panel ranked-list">
            <h3 class="panel-title">"Ranked Induction List"</h3>
            <div class="ranked-list-items">
                {move || {
                    let trains = ranked.get();
                    if trains.is_empty() {
                        view! { <p class="empty-list">"No recommendations available"</p> }.into_view()
                    } else {
                        trains.into_iter().enumerate().map(|(idx, train)| view! {
                            <TrainCard
                                rank=idx + 1
                                train=train
                                on_explain=on_explain
                                on_decide=on_decide
                            />
                        }).collect_view()
                    }
                }}
            </div>
        </div>
    }
}
