use std::f64::consts::{PI, TAU};
use leptos::{component, view, IntoView, Memo, Signal, SignalGet, CollectView};
use crate::models::{format_fixed, TrainStatus};
use crate::planner::StatusSummary;
use crate::theme::status_chart_color;

const PIE_CENTER: f64 = 100.0;
const PIE_RADIUS: f64 = 80.0;
const BAR_CHART_WIDTH: f64 = 320.0;
const BAR_CHART_HEIGHT: f64 = 160.0;
const BAR_GAP: f64 = 2.0;

/// One slice of the status pie
#[derive(Debug, Clone, PartialEq)]
pub struct PieArc {
    pub status: TrainStatus,
    pub color: &'static str,
    /// SVG path data; `None` when the slice is the whole pie
    pub path: Option<String>,
    pub label: String,
}

/// Lay out pie slices clockwise from twelve o'clock
#[must_use]
pub fn pie_arcs(slices: &[(TrainStatus, usize)]) -> Vec<PieArc> {
    let total: usize = slices.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return Vec::new();
    }

    #[allow(clippy::cast_precision_loss)]
    let total = total as f64;
    let mut start = -PI / 2.0;

    slices
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|&(status, count)| {
            #[allow(clippy::cast_precision_loss)]
            let share = count as f64 / total;
            let sweep = share * TAU;
            let end = start + sweep;

            let path = (share < 1.0).then(|| {
                let (x1, y1) = point_on_circle(start);
                let (x2, y2) = point_on_circle(end);
                let large_arc = u8::from(sweep > PI);
                format!(
                    "M {PIE_CENTER} {PIE_CENTER} L {x1:.3} {y1:.3} A {PIE_RADIUS} {PIE_RADIUS} 0 {large_arc} 1 {x2:.3} {y2:.3} Z"
                )
            });
            start = end;

            PieArc {
                status,
                color: status_chart_color(status),
                path,
                label: format!("{} {}%", status.as_str(), format_fixed(share * 100.0, 0)),
            }
        })
        .collect()
}

fn point_on_circle(angle: f64) -> (f64, f64) {
    (
        PIE_CENTER + PIE_RADIUS * angle.cos(),
        PIE_CENTER + PIE_RADIUS * angle.sin(),
    )
}

/// One column of the score chart
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub name: String,
    pub score: f64,
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

/// Scale scores to the chart; negative scores draw as empty columns
#[must_use]
pub fn score_bars(scores: &[(String, f64)]) -> Vec<Bar> {
    if scores.is_empty() {
        return Vec::new();
    }

    let max = scores
        .iter()
        .map(|(_, score)| *score)
        .fold(0.0_f64, f64::max);
    let max = if max > 0.0 { max } else { 1.0 };

    #[allow(clippy::cast_precision_loss)]
    let slot = BAR_CHART_WIDTH / scores.len() as f64;

    scores
        .iter()
        .enumerate()
        .map(|(i, (name, score))| {
            #[allow(clippy::cast_precision_loss)]
            let x = i as f64 * slot;
            Bar {
                name: name.clone(),
                score: *score,
                x,
                width: (slot - BAR_GAP).max(1.0),
                height: (score / max).clamp(0.0, 1.0) * BAR_CHART_HEIGHT,
            }
        })
        .collect()
}

#[component]
#[must_use]
pub fn SummaryPanel(
    summary: Memo<StatusSummary>,
    scores: Signal<Vec<(String, f64)>>,
) -> impl IntoView {
    let stat = move |label: &'static str, class: &'static str, value: Signal<usize>| {
        view! {
            <div class=format!("stat-card {class}")>
                <p class="stat-label">{label}</p>
                <p class="stat-value">{move || value.get()}</p>
            </div>
        }
    };

    view! {
        <div class="panel summary-panel">
            <h3 class="panel-title">"Overview"</h3>

            <div class="stat-grid">
                {stat("Total Trains", "stat-indigo", Signal::derive(move || summary.get().total))}
                {stat("Approved", "stat-green", Signal::derive(move || summary.get().approved))}
                {stat("On Hold", "stat-yellow", Signal::derive(move || summary.get().held))}
                {stat("IBL", "stat-rose", Signal::derive(move || summary.get().ibl))}
            </div>

            <svg class="pie-chart" viewBox="0 0 200 200" role="img" aria-label="Status breakdown">
                {move || {
                    pie_arcs(&summary.get().slices).into_iter().map(|arc| {
                        let title = arc.label.clone();
                        match arc.path {
                            Some(d) => view! {
                                <path d=d fill=arc.color><title>{title}</title></path>
                            }.into_view(),
                            None => view! {
                                <circle cx=PIE_CENTER cy=PIE_CENTER r=PIE_RADIUS fill=arc.color>
                                    <title>{title}</title>
                                </circle>
                            }.into_view(),
                        }
                    }).collect_view()
                }}
            </svg>
            <ul class="pie-legend">
                {move || {
                    pie_arcs(&summary.get().slices).into_iter().map(|arc| view! {
                        <li>
                            <span class="legend-swatch" style=format!("background: {}", arc.color)></span>
                            {arc.label}
                        </li>
                    }).collect_view()
                }}
            </ul>

            <svg
                class="bar-chart"
                viewBox=format!("0 0 {BAR_CHART_WIDTH} {BAR_CHART_HEIGHT}")
                preserveAspectRatio="none"
                role="img"
                aria-label="Priority scores"
            >
                {move || {
                    score_bars(&scores.get()).into_iter().map(|bar| {
                        let title = format!("{}: {}", bar.name, format_fixed(bar.score, 1));
                        view! {
                            <rect
                                x=bar.x
                                y=BAR_CHART_HEIGHT - bar.height
                                width=bar.width
                                height=bar.height
                                fill="#6366f1"
                            >
                                <title>{title}</title>
                            </rect>
                        }
                    }).collect_view()
                }}
            </svg>
        </div>
    }
}
