//! Section heading with the drop-in entrance

use leptos::*;

use finlit::motion::HEADING_DROP;

#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div style=HEADING_DROP.style()>
            <h2 class="text-3xl font-bold text-gray-900 mb-2">{title}</h2>
            <p class="text-gray-600">{subtitle}</p>
        </div>
    }
}
