//! App Root Component
//!
//! Page shell: injects theme tokens and animation keyframes, owns the nav
//! selection, and stacks the sections in page order.

use leptos::*;
use leptos_router::*;

use finlit::motion::{self, ITEM_RISE, PAGE_FADE};
use finlit::selection::NavSelection;
use finlit::Theme;

use crate::components::{Footer, Header};
use crate::sections::{ChartsSection, InsightsSection, MetricsSection, RecommendationsSection};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Header highlight only; no other section reads it
    let nav = create_rw_signal(NavSelection::default());
    let css = format!("{}\n{}", Theme::default().css_variables(), motion::stylesheet());

    view! {
        <Router>
            <style>{css}</style>
            <div class="min-h-screen bg-gradient-to-br from-gray-50 to-blue-50" style=PAGE_FADE.style()>
                <Header nav=nav />

                <main class="container mx-auto px-4 py-8 space-y-12">
                    <Routes>
                        <Route path="/" view=DashboardPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// The four content sections, rising one after another
#[component]
fn DashboardPage() -> impl IntoView {
    view! {
        <div style=ITEM_RISE.staggered(0).style()>
            <MetricsSection />
        </div>
        <div style=ITEM_RISE.staggered(1).style()>
            <ChartsSection />
        </div>
        <div style=ITEM_RISE.staggered(2).style()>
            <InsightsSection />
        </div>
        <div style=ITEM_RISE.staggered(3).style()>
            <RecommendationsSection />
        </div>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <h1 class="text-4xl font-bold text-gray-900 mb-4">"404"</h1>
            <p class="text-gray-600 mb-8">"Page not found"</p>
            <A href="/" class="px-6 py-3 bg-primary-600 hover:bg-primary-700 text-white rounded-lg transition">
                "Back to Dashboard"
            </A>
        </div>
    }
}
