//! Insights and key findings

use leptos::*;

use finlit::data::insights::{INSIGHTS_SUBTITLE, INSIGHTS_TITLE};
use finlit::data::{INSIGHTS, KEY_FINDINGS};

use crate::components::{FindingCard, InsightCard, SectionHeading};

#[component]
pub fn InsightsSection() -> impl IntoView {
    view! {
        <section id="insights" class="space-y-8">
            <SectionHeading title=INSIGHTS_TITLE subtitle=INSIGHTS_SUBTITLE />

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                {INSIGHTS
                    .iter()
                    .enumerate()
                    .map(|(index, insight)| view! { <InsightCard insight=insight index=index /> })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {KEY_FINDINGS
                    .iter()
                    .enumerate()
                    .map(|(index, finding)| view! { <FindingCard finding=finding index=index /> })
                    .collect_view()}
            </div>
        </section>
    }
}
