use leptos::{component, view, IntoView, SignalGet};
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::{Route, Router, Routes};
use crate::components::{planner_page::PlannerPage, schedule_page::SchedulePage};
use crate::theme::use_theme;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let theme = use_theme();

    view! {
        <Stylesheet id="leptos" href="/style/main.css"/>
        <Title text="KMRL Induction Planner"/>

        <div class=move || format!("app {}", theme.get().class())>
            <Router>
                <main>
                    <Routes>
                        <Route path="/" view=PlannerPage/>
                        <Route path="/schedule" view=SchedulePage/>
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
