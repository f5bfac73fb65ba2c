use leptos::{component, view, IntoView, CollectView};
use leptos_router::A;
use crate::data::load_schedule;
use crate::models::{Punctuality, ScheduleRecord, ServiceRecord, TimetableRecord};
use crate::schedule::build_board;
use crate::theme::{punctuality_badge_class, schedule_type_badge_class, timetable_status_badge_class};

const fn punctuality_icon(punctuality: Punctuality) -> &'static str {
    match punctuality {
        Punctuality::OnTime => "fa-solid fa-circle-check",
        Punctuality::Delayed => "fa-solid fa-circle-xmark",
    }
}

#[component]
fn ServiceCard(position: usize, service: ServiceRecord) -> impl IntoView {
    let type_label = service.schedule_type.clone().unwrap_or_default();
    let type_class = schedule_type_badge_class(service.schedule_type.as_deref());
    let warnings = service.has_warnings().then(|| service.warnings.clone());
    let reasoning = (!service.reasoning.is_empty()).then(|| service.reasoning.clone());

    view! {
        <div class="service-card">
            <div class="service-card-header">
                <div>
                    <div class="train-name">{format!("{position}. Train {}", service.trainset)}</div>
                    <div class="service-meta">
                        <i class="fa-solid fa-clock"></i>
                        {format!(" Start: {}", service.start_time)}
                    </div>
                    <div class="service-meta">
                        <i class="fa-solid fa-list-check"></i>
                        {format!(" Expected Trips: {}", service.trips)}
                    </div>
                    <div class="service-meta">
                        <i class="fa-solid fa-location-dot"></i>
                        {format!(" Route: {}", service.route)}
                    </div>
                    {warnings.map(|w| view! {
                        <div class="service-warning">
                            <i class="fa-solid fa-triangle-exclamation"></i>
                            {format!(" {w}")}
                        </div>
                    })}
                </div>
                <div class="service-badges">
                    <span class=type_class>{type_label}</span>
                    <span class=punctuality_badge_class(service.punctuality)>
                        <i class=punctuality_icon(service.punctuality)></i>
                        {format!(" {}", service.punctuality)}
                    </span>
                </div>
            </div>
            {reasoning.map(|r| view! { <p class="service-reasoning">{r}</p> })}
        </div>
    }
}

#[component]
fn TimetableCard(position: usize, entry: TimetableRecord) -> impl IntoView {
    view! {
        <div class="service-card">
            <div class="service-card-header">
                <div>
                    <div class="train-name">{format!("{position}. Train {}", entry.trainset)}</div>
                    <div class="service-meta">
                        <i class="fa-solid fa-location-dot"></i>
                        {format!(" Line: {}", entry.line)}
                    </div>
                    <div class="service-meta">
                        <i class="fa-solid fa-clock"></i>
                        {format!(" {} → {}", entry.departure, entry.arrival)}
                    </div>
                </div>
                <span class=timetable_status_badge_class(&entry.status)>{entry.status.clone()}</span>
            </div>
        </div>
    }
}

#[component]
#[must_use]
pub fn SchedulePage() -> impl IntoView {
    let board = build_board(load_schedule());

    view! {
        <div class="page schedule-page">
            <div class="page-nav">
                <A href="/" class="nav-button">
                    <i class="fa-solid fa-arrow-left"></i>
                    " Back to Planner"
                </A>
            </div>

            <header class="page-header">
                <h1>
                    <i class="fa-solid fa-calendar"></i>
                    " KMRL - Daily Service Plan"
                </h1>
                <p class="subtitle">"Showing planned train trips, routes, and punctuality status"</p>
            </header>

            <div class="panel">
                <h3 class="panel-title">"Train Services"</h3>
                <div class="service-list">
                    {board.into_iter().enumerate().map(|(idx, record)| match record {
                        ScheduleRecord::Service(service) => view! {
                            <ServiceCard position=idx + 1 service=service />
                        }.into_view(),
                        ScheduleRecord::Timetable(entry) => view! {
                            <TimetableCard position=idx + 1 entry=entry />
                        }.into_view(),
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
