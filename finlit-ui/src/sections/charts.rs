//! Chart Section
//!
//! Tab row plus the active chart. The section owns its chart selection; the
//! chart container is rebuilt on every switch so the swap animation replays.

use leptos::*;

use finlit::charts::{CHARTS, CHARTS_SUBTITLE, CHARTS_TITLE};
use finlit::motion::{BUTTON_PRESS, CHART_SWAP};
use finlit::plot::{self, Size};
use finlit::selection::ChartSelection;

use crate::components::{FigureSvg, SectionHeading};

#[component]
pub fn ChartsSection() -> impl IntoView {
    let selection = create_rw_signal(ChartSelection::default());

    let tabs = CHARTS
        .iter()
        .map(|spec| {
            let id = spec.id;
            view! {
                <button
                    on:click=move |_| selection.update(|s| s.set(id))
                    class=move || {
                        let base = format!(
                            "flex items-center space-x-2 px-4 py-2 rounded-lg font-medium transition-all duration-200 {}",
                            BUTTON_PRESS.class(),
                        );
                        if selection.get().is_active(id) {
                            format!("{} bg-primary-600 text-white shadow-lg", base)
                        } else {
                            format!("{} bg-white text-gray-700 hover:bg-gray-50 border border-gray-200", base)
                        }
                    }
                >
                    <span>{spec.icon}</span>
                    <span>{spec.label}</span>
                </button>
            }
        })
        .collect_view();

    let active_chart = move || {
        selection.get().spec().map(|spec| {
            let figure = plot::render(spec, spec.id.dataset(), Size::default());
            view! {
                <div class="chart-container" style=CHART_SWAP.style()>
                    <h3 class="text-xl font-semibold text-gray-900 mb-4">{spec.label}</h3>
                    <FigureSvg figure=figure />
                </div>
            }
        })
    };

    view! {
        <section id="charts" class="space-y-6">
            <SectionHeading title=CHARTS_TITLE subtitle=CHARTS_SUBTITLE />
            <div class="flex flex-wrap gap-2 mb-6">{tabs}</div>
            {active_chart}
        </section>
    }
}
