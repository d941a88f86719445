//! Header Component
//!
//! Sticky title bar with the section nav. Clicking a button only moves the
//! highlight.

use leptos::*;

use finlit::data::site::{NAV_ITEMS, SITE_TAGLINE, SITE_TITLE};
use finlit::motion::{BUTTON_PRESS, CARD_HOVER, HEADER_SLIDE};
use finlit::selection::NavSelection;
use finlit::Icon;

use super::IconSvg;

#[component]
pub fn Header(nav: RwSignal<NavSelection>) -> impl IntoView {
    view! {
        <header
            class="bg-white shadow-sm border-b border-gray-200 sticky top-0 z-50"
            style=HEADER_SLIDE.style()
        >
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between py-4">
                    <div class=format!("flex items-center space-x-3 {}", CARD_HOVER.class())>
                        <div class="w-10 h-10 bg-gradient-to-br from-primary-500 to-primary-600 rounded-lg flex items-center justify-center">
                            <IconSvg icon=Icon::TrendingUp class="w-6 h-6 text-white" />
                        </div>
                        <div>
                            <h1 class="text-2xl font-bold text-gray-900">{SITE_TITLE}</h1>
                            <p class="text-sm text-gray-600">{SITE_TAGLINE}</p>
                        </div>
                    </div>

                    <nav class="hidden md:flex space-x-1">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <button
                                        on:click=move |_| nav.update(|n| n.select(id))
                                        class=move || {
                                            let base = format!(
                                                "flex items-center space-x-2 px-4 py-2 rounded-lg font-medium transition-all duration-200 {}",
                                                BUTTON_PRESS.class(),
                                            );
                                            if nav.with(|n| n.is_active(id)) {
                                                format!("{} bg-primary-100 text-primary-700 shadow-sm", base)
                                            } else {
                                                format!("{} text-gray-600 hover:text-gray-900 hover:bg-gray-100", base)
                                            }
                                        }
                                    >
                                        <IconSvg icon=item.icon class="w-4 h-4" />
                                        <span>{item.label}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}
