//! Footer Component
//!
//! About blurb with social links, resources, data sources, copyright and the
//! data freshness line. The three columns rise in one after another.

use leptos::*;

use finlit::data::site::{
    data_updated_label, ABOUT_TEXT, COPYRIGHT, DATA_SOURCES, RESOURCE_LINKS, SITE_TITLE,
    SOCIAL_LINKS,
};
use finlit::motion::{footer_column, ICON_HOVER, PAGE_FADE};

use super::IconSvg;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-12 mt-16" style=PAGE_FADE.style()>
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div style=footer_column(0).style()>
                        <h3 class="text-xl font-bold mb-4">{SITE_TITLE}</h3>
                        <p class="text-gray-300 mb-4">{ABOUT_TEXT}</p>
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| view! {
                                    <a
                                        href=link.url
                                        class=format!(
                                            "w-10 h-10 bg-gray-800 rounded-lg flex items-center justify-center hover:bg-gray-700 transition-colors duration-200 {}",
                                            ICON_HOVER.class(),
                                        )
                                        aria-label=link.name
                                    >
                                        <IconSvg icon=link.icon class="w-5 h-5" />
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div style=footer_column(1).style()>
                        <h3 class="text-lg font-semibold mb-4">"Resources"</h3>
                        <ul class="space-y-2">
                            {RESOURCE_LINKS
                                .iter()
                                .map(|link| view! {
                                    <li>
                                        <a
                                            href=link.url
                                            class="flex items-center space-x-2 text-gray-300 hover:text-white transition-colors duration-200"
                                        >
                                            <IconSvg icon=link.icon class="w-4 h-4" />
                                            <span>{link.name}</span>
                                        </a>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div style=footer_column(2).style()>
                        <h3 class="text-lg font-semibold mb-4">"Data Sources"</h3>
                        <ul class="space-y-2 text-gray-300 text-sm">
                            {DATA_SOURCES.iter().map(|source| view! { <li>{*source}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="border-t border-gray-800 mt-8 pt-8 flex flex-col md:flex-row justify-between items-center">
                    <p class="text-gray-400 text-sm">{COPYRIGHT}</p>
                    <p class="text-gray-400 text-sm mt-2 md:mt-0">{data_updated_label()}</p>
                </div>
            </div>
        </footer>
    }
}
