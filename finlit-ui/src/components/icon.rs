//! Icon Component
//!
//! Inline 24x24 stroke icons.

use leptos::*;

use finlit::Icon;

#[component]
pub fn IconSvg(
    icon: Icon,
    /// Size and color classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {icon.svg_paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
