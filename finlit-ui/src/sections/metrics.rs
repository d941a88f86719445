//! Key metrics grid

use leptos::*;

use finlit::data::metrics::{METRICS_SUBTITLE, METRICS_TITLE};
use finlit::data::METRICS;

use crate::components::{MetricCard, SectionHeading};

#[component]
pub fn MetricsSection() -> impl IntoView {
    view! {
        <section id="metrics" class="space-y-6">
            <SectionHeading title=METRICS_TITLE subtitle=METRICS_SUBTITLE />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {METRICS
                    .iter()
                    .enumerate()
                    .map(|(index, metric)| view! { <MetricCard metric=metric index=index /> })
                    .collect_view()}
            </div>
        </section>
    }
}
