use leptos::{component, view, IntoView, CollectView};
use crate::explain::Explanation;

#[component]
#[must_use]
pub fn ExplainPanel(
    explanation: Explanation,
    on_close: impl Fn() + 'static + Copy,
) -> impl IntoView {
    let heading = explanation.heading();

    view! {
        <div class="panel explain-panel">
            <h3 class="panel-title">{heading}</h3>
            <ul class="factor-list">
                {explanation.factors.into_iter().map(|factor| view! {
                    <li class="factor-row">
                        <span>{factor.label}</span>
                        <span class="factor-value">{factor.value.to_string()}</span>
                    </li>
                }).collect_view()}
            </ul>
            <button class="close-button" on:click=move |_| on_close()>"Close"</button>
        </div>
    }
}
