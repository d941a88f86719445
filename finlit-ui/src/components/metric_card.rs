//! Metric Card Component
//!
//! One headline indicator with its change and trend arrow.

use leptos::*;

use finlit::data::MetricRecord;
use finlit::motion::{CARD_HOVER, ITEM_RISE};
use finlit::style::trend_style;

use super::IconSvg;

#[component]
pub fn MetricCard(
    metric: &'static MetricRecord,
    /// Position in the grid, drives the entrance delay
    index: usize,
) -> impl IntoView {
    let (_, gradient) = metric.color.style();
    let trend = trend_style(metric.trend);

    view! {
        <div
            class=format!("metric-card group {}", CARD_HOVER.class())
            style=ITEM_RISE.staggered(index).style()
        >
            <div class="flex items-start justify-between mb-4">
                <div class=format!(
                    "w-12 h-12 rounded-lg bg-gradient-to-br {} flex items-center justify-center group-hover:scale-110 transition-transform duration-200",
                    gradient,
                )>
                    <IconSvg icon=metric.icon class="w-6 h-6" />
                </div>
                <div class=format!("flex items-center space-x-1 text-sm font-medium {}", trend.text)>
                    <IconSvg icon=trend.icon class="w-4 h-4" />
                    <span>{metric.change}</span>
                </div>
            </div>

            <div class="space-y-2">
                <h3 class="text-sm font-medium text-gray-600">{metric.title}</h3>
                <p class="text-3xl font-bold text-gray-900">{metric.value}</p>
                <p class="text-sm text-gray-500">{metric.description}</p>
            </div>
        </div>
    }
}
