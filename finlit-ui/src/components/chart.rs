//! Chart Component
//!
//! Draws a laid-out [`Figure`] as inline SVG: dashed gridlines, axis labels,
//! then the data marks. Hovering a mark shows its value via `<title>`.

use leptos::*;

use finlit::plot::{fmt_num, Figure, AXIS_FONT_SIZE, AXIS_STROKE, GRID_DASH, GRID_STROKE, LINE_WIDTH};

#[component]
pub fn FigureSvg(figure: Figure) -> impl IntoView {
    let view_box = figure.view_box();

    let grid = figure
        .grid
        .iter()
        .map(|s| view! {
            <line
                x1=fmt_num(s.x1) y1=fmt_num(s.y1) x2=fmt_num(s.x2) y2=fmt_num(s.y2)
                stroke=GRID_STROKE stroke-dasharray=GRID_DASH
            />
        })
        .collect_view();

    let axes = figure
        .axes
        .iter()
        .map(|s| view! {
            <line x1=fmt_num(s.x1) y1=fmt_num(s.y1) x2=fmt_num(s.x2) y2=fmt_num(s.y2) stroke=AXIS_STROKE />
        })
        .collect_view();

    let labels = figure
        .labels
        .iter()
        .map(|label| view! {
            <text
                x=fmt_num(label.x) y=fmt_num(label.y)
                text-anchor=label.anchor.as_str()
                font-size=fmt_num(AXIS_FONT_SIZE)
                fill=AXIS_STROKE
            >
                {label.text.clone()}
            </text>
        })
        .collect_view();

    let bars = figure
        .bars
        .iter()
        .map(|bar| view! {
            <path d=bar.path.clone() fill=bar.fill>
                <title>{format!("{}: {}", bar.category, bar.tooltip)}</title>
            </path>
        })
        .collect_view();

    let slices = figure
        .slices
        .iter()
        .map(|slice| view! {
            <g>
                <path d=slice.path.clone() fill=slice.fill stroke="white" stroke-width="2">
                    <title>{slice.label.text.clone()}</title>
                </path>
                <text
                    x=fmt_num(slice.label.x) y=fmt_num(slice.label.y)
                    text-anchor=slice.label.anchor.as_str()
                    font-size=fmt_num(AXIS_FONT_SIZE)
                    fill=slice.fill
                >
                    {slice.label.text.clone()}
                </text>
            </g>
        })
        .collect_view();

    let lines = figure
        .lines
        .iter()
        .map(|line| view! {
            <path d=line.path.clone() fill="none" stroke=line.color stroke-width=fmt_num(LINE_WIDTH) />
        })
        .collect_view();

    let dots = figure
        .dots
        .iter()
        .map(|dot| view! {
            <circle cx=fmt_num(dot.cx) cy=fmt_num(dot.cy) r=fmt_num(dot.r) fill=dot.fill>
                <title>{dot.tooltip.clone()}</title>
            </circle>
        })
        .collect_view();

    let legend = (!figure.legend.is_empty()).then(|| {
        let entries = figure
            .legend
            .iter()
            .map(|entry| view! {
                <div class="flex items-center space-x-2">
                    <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", entry.color) />
                    <span class="text-sm text-gray-600">{entry.name}</span>
                </div>
            })
            .collect_view();
        view! { <div class="flex justify-center flex-wrap gap-4 mt-4">{entries}</div> }
    });

    view! {
        <div class="w-full">
            <svg viewBox=view_box class="w-full h-auto" preserveAspectRatio="xMidYMid meet" role="img">
                <g>{grid}</g>
                <g>{axes}</g>
                <g>{bars}{slices}{lines}{dots}</g>
                <g>{labels}</g>
            </svg>
            {legend}
        </div>
    }
}
