//! Recommendations and the implementation roadmap

use leptos::*;

use finlit::data::recommendations::{
    RECOMMENDATIONS_SUBTITLE, RECOMMENDATIONS_TITLE, ROADMAP_TITLE,
};
use finlit::data::{RecommendationRecord, IMPLEMENTATION_STEPS, RECOMMENDATIONS};
use finlit::motion::{roadmap_step, ITEM_RISE, ROW_HOVER};
use finlit::Icon;

use crate::components::{IconSvg, SectionHeading};

#[component]
fn RecommendationCard(rec: &'static RecommendationRecord, index: usize) -> impl IntoView {
    let priority = rec.priority.style();

    view! {
        <div
            class=format!("card hover:shadow-xl transition-all duration-300 {}", ROW_HOVER.class())
            style=ITEM_RISE.staggered(index).style()
        >
            <div class="flex items-start justify-between mb-4">
                <div class="flex items-center space-x-3">
                    <div class="w-10 h-10 bg-gradient-to-br from-primary-500 to-primary-600 rounded-lg flex items-center justify-center">
                        <IconSvg icon=rec.icon class="w-5 h-5 text-white" />
                    </div>
                    <h3 class="text-lg font-semibold text-gray-900">{rec.title}</h3>
                </div>
                <span class=format!("px-2 py-1 text-xs font-medium rounded-full border {}", priority.classes)>
                    {rec.priority.as_tag()} " Priority"
                </span>
            </div>

            <p class="text-gray-700 mb-4">{rec.description}</p>

            <div class="space-y-3 mb-4">
                <h4 class="text-sm font-medium text-gray-900">"Key Actions:"</h4>
                <ul class="space-y-1">
                    {rec
                        .actions
                        .iter()
                        .map(|action| view! {
                            <li class="flex items-start space-x-2">
                                <IconSvg icon=Icon::ArrowRight class="w-3 h-3 text-primary-500 mt-1 flex-shrink-0" />
                                <span class="text-sm text-gray-600">{*action}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>

            <div class="flex items-center justify-between text-sm text-gray-500 pt-4 border-t border-gray-100">
                <span>"Timeline: " {rec.timeline}</span>
                <span>"Impact: " {rec.impact}</span>
            </div>

            <div class="mt-3 flex flex-wrap gap-1">
                {rec
                    .stakeholders
                    .iter()
                    .map(|who| view! {
                        <span class="px-2 py-1 text-xs bg-gray-100 text-gray-600 rounded">{*who}</span>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn RecommendationsSection() -> impl IntoView {
    view! {
        <section id="recommendations" class="space-y-8">
            <SectionHeading title=RECOMMENDATIONS_TITLE subtitle=RECOMMENDATIONS_SUBTITLE />

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                {RECOMMENDATIONS
                    .iter()
                    .enumerate()
                    .map(|(index, rec)| view! { <RecommendationCard rec=rec index=index /> })
                    .collect_view()}
            </div>

            <div class="card bg-gradient-to-r from-primary-50 to-blue-50 border-primary-200">
                <div class="flex items-center space-x-3 mb-6">
                    <IconSvg icon=Icon::Lightbulb class="w-6 h-6 text-primary-600" />
                    <h3 class="text-xl font-semibold text-gray-900">{ROADMAP_TITLE}</h3>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                    {IMPLEMENTATION_STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| view! {
                            <div class="relative" style=roadmap_step(index).style()>
                                <div class="flex items-center space-x-2 mb-2">
                                    <div class="w-8 h-8 bg-primary-600 text-white rounded-full flex items-center justify-center text-sm font-bold">
                                        {step.step}
                                    </div>
                                    <h4 class="font-medium text-gray-900">{step.title}</h4>
                                </div>
                                <p class="text-sm text-gray-600 mb-2">{step.description}</p>
                                <span class="text-xs text-primary-600 font-medium">{step.duration}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
