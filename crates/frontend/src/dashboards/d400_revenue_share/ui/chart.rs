use crate::domain::a003_order::ui::admin_list::AdminOrdersViewModel;
use crate::shared::number_format::format_twd;
use contracts::dashboards::d400_revenue_share::{chart_segments, ChartMode, ChartSegment};
use leptos::prelude::*;
use std::f64::consts::{FRAC_PI_2, TAU};

/// SVG path of one pie slice in a unit circle centred at the origin
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub title: String,
    pub color: String,
    pub path: String,
}

const FULL_CIRCLE: &str = "M 0 -1 A 1 1 0 1 1 0 1 A 1 1 0 1 1 0 -1 Z";

/// Slices start at 12 o'clock and run clockwise. Empty segments are skipped.
pub fn pie_slices(segments: &[ChartSegment]) -> Vec<PieSlice> {
    let mut slices = Vec::new();
    let mut start = -FRAC_PI_2;
    let visible: Vec<&ChartSegment> = segments.iter().filter(|s| s.share > 0.0).collect();
    // a single arc cannot draw a full circle
    let whole = visible.len() == 1;

    for segment in visible {
        let path = if whole {
            FULL_CIRCLE.to_string()
        } else {
            let end = start + segment.share * TAU;
            let large_arc = if segment.share > 0.5 { 1 } else { 0 };
            format!(
                "M 0 0 L {:.4} {:.4} A 1 1 0 {} 1 {:.4} {:.4} Z",
                start.cos(),
                start.sin(),
                large_arc,
                end.cos(),
                end.sin()
            )
        };
        start += segment.share * TAU;

        slices.push(PieSlice {
            title: segment.title.clone(),
            color: segment.color.clone(),
            path,
        });
    }

    slices
}

fn format_share(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

/// Круговая диаграмма доли выручки
#[component]
pub fn RevenueShareChart(vm: AdminOrdersViewModel) -> impl IntoView {
    let (mode, set_mode) = signal(ChartMode::Product);
    let segments = Memo::new(move |_| chart_segments(&vm.chart_buckets(mode.get())));

    let mode_button = move |target: ChartMode| {
        view! {
            <button
                class="button button--secondary"
                class:button--active=move || mode.get() == target
                on:click=move |_| set_mode.set(target)
            >
                {target.label()}
            </button>
        }
    };

    view! {
        <section class="section-chart">
            <h3 class="section-title">{move || mode.get().label()}</h3>
            <div class="chart-modes">
                {mode_button(ChartMode::Product)}
                {mode_button(ChartMode::Category)}
            </div>

            <Show
                when=move || segments.with(|s| !s.is_empty())
                fallback=|| view! { <p class="chart-empty">"尚無營收資料"</p> }
            >
                <div class="chart">
                    <svg width="240" height="240" viewBox="-1 -1 2 2" aria-hidden="true">
                        {move || pie_slices(&segments.get()).into_iter().map(|slice| view! {
                            <path d=slice.path fill=slice.color stroke="#FFFFFF" stroke-width="0.01"/>
                        }).collect_view()}
                    </svg>
                    <ul class="chart-legend">
                        {move || segments.get().into_iter().map(|s| view! {
                            <li>
                                <span class="chart-legend__swatch" style=format!("background: {}", s.color)></span>
                                <span class="chart-legend__title">{s.title.clone()}</span>
                                <span class="chart-legend__value">
                                    {format!("{} ({})", format_twd(s.total_price), format_share(s.share))}
                                </span>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </Show>
        </section>
    }
}
