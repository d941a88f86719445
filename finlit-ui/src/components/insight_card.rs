//! Insight Card Component
//!
//! Observation card tinted by insight type, and the key-finding lists.

use leptos::*;

use finlit::data::{FindingGroup, InsightRecord};
use finlit::motion::{CARD_HOVER, ICON_HOVER, ITEM_RISE};

use super::IconSvg;

#[component]
pub fn InsightCard(insight: &'static InsightRecord, index: usize) -> impl IntoView {
    let style = insight.kind.style();

    view! {
        <div
            class=format!("card border-2 {} {} {}", style.border, style.bg, CARD_HOVER.class())
            style=ITEM_RISE.staggered(index).style()
        >
            <div class="flex items-start space-x-4">
                <div class=format!("flex-shrink-0 {} {}", style.icon, ICON_HOVER.class())>
                    <IconSvg icon=insight.icon class="w-6 h-6" />
                </div>
                <div class="flex-1">
                    <div class="flex items-center justify-between mb-2">
                        <h3 class="text-lg font-semibold text-gray-900">{insight.title}</h3>
                        <span class=format!("px-2 py-1 text-xs font-medium rounded-full {}", style.badge)>
                            {insight.impact} " Impact"
                        </span>
                    </div>
                    <p class="text-gray-700 mb-3">{insight.description}</p>
                    <span class="text-xs text-gray-500 bg-gray-100 px-2 py-1 rounded">
                        {insight.category}
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn FindingCard(finding: &'static FindingGroup, index: usize) -> impl IntoView {
    view! {
        <div class="card" style=ITEM_RISE.staggered(index).style()>
            <div class="flex items-center space-x-3 mb-4">
                <div class="w-10 h-10 bg-primary-100 rounded-lg flex items-center justify-center text-primary-600">
                    <IconSvg icon=finding.icon class="w-5 h-5" />
                </div>
                <h3 class="text-lg font-semibold text-gray-900">{finding.title}</h3>
            </div>
            <ul class="space-y-2">
                {finding
                    .points
                    .iter()
                    .map(|point| view! {
                        <li class="flex items-start space-x-2">
                            <div class="w-2 h-2 bg-primary-500 rounded-full mt-2 flex-shrink-0" />
                            <span class="text-gray-700 text-sm">{*point}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
