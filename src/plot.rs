//! Chart Geometry
//!
//! Turns a chart spec and its dataset into a [`Figure`]: gridlines, axes,
//! labels and data marks in pixel coordinates. The browser front-end draws a
//! figure as SVG; the terminal renderer only reads its domain.
//!
//! Layout rules:
//! - value axis runs from 0 to a rounded maximum with [`TICK_COUNT`] ticks
//! - bars fill 80% of their band, top (vertical) or right (horizontal)
//!   corners rounded
//! - pie slices start at 12 o'clock and run clockwise
//! - lines use monotone cubic segments so they never overshoot a data point

use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::charts::{ChartKind, ChartRow, ChartSpec, Dataset, Series};

pub const GRID_STROKE: &str = "#f1f5f9";
pub const GRID_DASH: &str = "3 3";
pub const AXIS_STROKE: &str = "#64748b";
pub const AXIS_FONT_SIZE: f64 = 12.0;
pub const TICK_COUNT: usize = 5;
pub const CATEGORY_AXIS_WIDTH: f64 = 80.0;
pub const BAR_RADIUS: f64 = 4.0;
pub const PIE_OUTER_RADIUS: f64 = 120.0;
pub const LINE_WIDTH: f64 = 3.0;
pub const DOT_RADIUS: f64 = 4.0;

const BAR_FILL_RATIO: f64 = 0.8;
const NICE_STEPS: [f64; 10] = [1.0, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0];

/// Canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Margin {
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
}

const MARGIN: Margin = Margin {
    top: 20.0,
    right: 30.0,
    bottom: 30.0,
    left: 40.0,
};

/// Inner rectangle where marks are drawn
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlotArea {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    fn new(size: Size, left: f64) -> Self {
        Self {
            x: left,
            y: MARGIN.top,
            width: (size.width - left - MARGIN.right).max(0.0),
            height: (size.height - MARGIN.top - MARGIN.bottom).max(0.0),
        }
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }

    fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Straight line between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// SVG `text-anchor`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub category: &'static str,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Outline with rounded corners
    pub path: String,
    pub fill: &'static str,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub name: &'static str,
    pub value: f64,
    /// Share of the pie total
    pub fraction: f64,
    /// Radians, screen coordinates (0 = 3 o'clock, growing clockwise)
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
    pub fill: &'static str,
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub points: Vec<(f64, f64)>,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dot {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: &'static str,
    pub tooltip: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub name: &'static str,
    pub color: &'static str,
}

/// Everything needed to draw one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub kind: ChartKind,
    pub size: Size,
    /// Top of the value axis; `None` for pies
    pub domain_max: Option<f64>,
    pub grid: Vec<Segment>,
    pub axes: Vec<Segment>,
    pub labels: Vec<Label>,
    pub bars: Vec<Bar>,
    pub slices: Vec<Slice>,
    pub lines: Vec<LineSeries>,
    pub dots: Vec<Dot>,
    pub legend: Vec<LegendEntry>,
}

impl Figure {
    fn empty(kind: ChartKind, size: Size) -> Self {
        Self {
            kind,
            size,
            domain_max: None,
            grid: Vec::new(),
            axes: Vec::new(),
            labels: Vec::new(),
            bars: Vec::new(),
            slices: Vec::new(),
            lines: Vec::new(),
            dots: Vec::new(),
            legend: Vec::new(),
        }
    }

    /// Number of data marks: bars, slices, or points per line
    pub fn mark_count(&self) -> usize {
        match self.kind {
            ChartKind::VerticalBar | ChartKind::HorizontalBar => self.bars.len(),
            ChartKind::Pie => self.slices.len(),
            ChartKind::Line => self.lines.first().map(|l| l.points.len()).unwrap_or(0),
        }
    }

    /// SVG `viewBox` attribute
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", fmt_num(self.size.width), fmt_num(self.size.height))
    }
}

/// Lay out a chart
pub fn render(spec: &ChartSpec, dataset: Dataset, size: Size) -> Figure {
    match spec.kind {
        ChartKind::VerticalBar => vertical_bars(spec, dataset, size),
        ChartKind::HorizontalBar => horizontal_bars(spec, dataset, size),
        ChartKind::Pie => pie(spec, dataset, size),
        ChartKind::Line => lines(spec, dataset, size),
    }
}

/// Evenly spaced ticks from 0 covering `max`, on a 1/1.5/2/2.5/3/4/5/6/8 step
pub fn nice_ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(2);
    if !max.is_finite() || max <= 0.0 {
        return (0..count).map(|i| i as f64).collect();
    }

    let raw = max / (count - 1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = NICE_STEPS
        .iter()
        .copied()
        .find(|step| *step >= residual - 1e-9)
        .unwrap_or(10.0);
    let step = nice * magnitude;

    (0..count).map(|i| i as f64 * step).collect()
}

/// Compact number formatting for labels and path data
pub fn fmt_num(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Rectangle outline with per-corner radii `[top_left, top_right, bottom_right, bottom_left]`
pub fn rounded_rect(x: f64, y: f64, width: f64, height: f64, radii: [f64; 4]) -> String {
    let limit = (width.min(height) / 2.0).max(0.0);
    let [tl, tr, br, bl] = radii.map(|r| r.clamp(0.0, limit));

    let mut d = format!("M{},{}", fmt_num(x + tl), fmt_num(y));
    d.push_str(&format!(" H{}", fmt_num(x + width - tr)));
    if tr > 0.0 {
        d.push_str(&format!(" Q{},{} {},{}", fmt_num(x + width), fmt_num(y), fmt_num(x + width), fmt_num(y + tr)));
    }
    d.push_str(&format!(" V{}", fmt_num(y + height - br)));
    if br > 0.0 {
        d.push_str(&format!(
            " Q{},{} {},{}",
            fmt_num(x + width),
            fmt_num(y + height),
            fmt_num(x + width - br),
            fmt_num(y + height)
        ));
    }
    d.push_str(&format!(" H{}", fmt_num(x + bl)));
    if bl > 0.0 {
        d.push_str(&format!(" Q{},{} {},{}", fmt_num(x), fmt_num(y + height), fmt_num(x), fmt_num(y + height - bl)));
    }
    d.push_str(&format!(" V{}", fmt_num(y + tl)));
    if tl > 0.0 {
        d.push_str(&format!(" Q{},{} {},{}", fmt_num(x), fmt_num(y), fmt_num(x + tl), fmt_num(y)));
    }
    d.push_str(" Z");
    d
}

/// Cubic Bézier piece of a smoothed line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub from: (f64, f64),
    pub c1: (f64, f64),
    pub c2: (f64, f64),
    pub to: (f64, f64),
}

/// Monotone cubic interpolation (Fritsch-Carlson) through `points`
///
/// Points must be sorted by x. Each segment stays within the y range of its
/// two endpoints.
pub fn monotone_segments(points: &[(f64, f64)]) -> Vec<CubicSegment> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let secants: Vec<f64> = points
        .windows(2)
        .map(|w| {
            let dx = w[1].0 - w[0].0;
            if dx == 0.0 {
                0.0
            } else {
                (w[1].1 - w[0].1) / dx
            }
        })
        .collect();

    let mut tangents = vec![0.0; n];
    tangents[0] = secants[0];
    tangents[n - 1] = secants[n - 2];
    for k in 1..n - 1 {
        let (before, after) = (secants[k - 1], secants[k]);
        tangents[k] = if before * after <= 0.0 {
            0.0
        } else {
            (before + after) / 2.0
        };
    }

    for k in 0..n - 1 {
        let d = secants[k];
        if d == 0.0 {
            tangents[k] = 0.0;
            tangents[k + 1] = 0.0;
            continue;
        }
        let alpha = tangents[k] / d;
        let beta = tangents[k + 1] / d;
        let norm = alpha * alpha + beta * beta;
        if norm > 9.0 {
            let tau = 3.0 / norm.sqrt();
            tangents[k] = tau * alpha * d;
            tangents[k + 1] = tau * beta * d;
        }
    }

    points
        .windows(2)
        .enumerate()
        .map(|(k, w)| {
            let h = w[1].0 - w[0].0;
            CubicSegment {
                from: w[0],
                c1: (w[0].0 + h / 3.0, w[0].1 + tangents[k] * h / 3.0),
                c2: (w[1].0 - h / 3.0, w[1].1 - tangents[k + 1] * h / 3.0),
                to: w[1],
            }
        })
        .collect()
}

/// SVG path for [`monotone_segments`]
pub fn monotone_path(points: &[(f64, f64)]) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut d = format!("M{},{}", fmt_num(first.0), fmt_num(first.1));
    for seg in monotone_segments(points) {
        d.push_str(&format!(
            " C{},{} {},{} {},{}",
            fmt_num(seg.c1.0),
            fmt_num(seg.c1.1),
            fmt_num(seg.c2.0),
            fmt_num(seg.c2.1),
            fmt_num(seg.to.0),
            fmt_num(seg.to.1)
        ));
    }
    d
}

fn primary_series(spec: &ChartSpec) -> Option<&'static Series> {
    spec.series.first()
}

fn column_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

fn vertical_bars(spec: &ChartSpec, dataset: Dataset, size: Size) -> Figure {
    let mut figure = Figure::empty(spec.kind, size);
    let Some(series) = primary_series(spec) else {
        return figure;
    };

    let rows = dataset.rows();
    let values = dataset.column(series.key);
    let ticks = nice_ticks(column_max(&values), TICK_COUNT);
    let top = ticks.last().copied().unwrap_or(1.0);
    let area = PlotArea::new(size, MARGIN.left);
    figure.domain_max = Some(top);

    for tick in &ticks {
        let y = area.bottom() - area.height * tick / top;
        figure.grid.push(Segment { x1: area.x, y1: y, x2: area.right(), y2: y });
        figure.labels.push(Label {
            x: area.x - 8.0,
            y: y + 4.0,
            text: fmt_num(*tick),
            anchor: Anchor::End,
        });
    }
    figure.axes.push(Segment { x1: area.x, y1: area.bottom(), x2: area.right(), y2: area.bottom() });
    figure.axes.push(Segment { x1: area.x, y1: area.y, x2: area.x, y2: area.bottom() });

    if rows.is_empty() {
        return figure;
    }

    let band = area.width / rows.len() as f64;
    for (idx, (row, value)) in rows.iter().zip(&values).enumerate() {
        let width = band * BAR_FILL_RATIO;
        let x = area.x + band * idx as f64 + (band - width) / 2.0;
        let height = area.height * value / top;
        let y = area.bottom() - height;

        figure.bars.push(Bar {
            category: row.category(),
            value: *value,
            x,
            y,
            width,
            height,
            path: rounded_rect(x, y, width, height, [BAR_RADIUS, BAR_RADIUS, 0.0, 0.0]),
            fill: series.color,
            tooltip: format!("{}: {}", series.name, fmt_num(*value)),
        });
        figure.labels.push(Label {
            x: x + width / 2.0,
            y: area.bottom() + 18.0,
            text: row.category().to_string(),
            anchor: Anchor::Middle,
        });
    }

    figure
}

fn horizontal_bars(spec: &ChartSpec, dataset: Dataset, size: Size) -> Figure {
    let mut figure = Figure::empty(spec.kind, size);
    let Some(series) = primary_series(spec) else {
        return figure;
    };

    let rows = dataset.rows();
    let values = dataset.column(series.key);
    let ticks = nice_ticks(column_max(&values), TICK_COUNT);
    let top = ticks.last().copied().unwrap_or(1.0);
    let area = PlotArea::new(size, CATEGORY_AXIS_WIDTH + 10.0);
    figure.domain_max = Some(top);

    for tick in &ticks {
        let x = area.x + area.width * tick / top;
        figure.grid.push(Segment { x1: x, y1: area.y, x2: x, y2: area.bottom() });
        figure.labels.push(Label {
            x,
            y: area.bottom() + 18.0,
            text: fmt_num(*tick),
            anchor: Anchor::Middle,
        });
    }
    figure.axes.push(Segment { x1: area.x, y1: area.bottom(), x2: area.right(), y2: area.bottom() });
    figure.axes.push(Segment { x1: area.x, y1: area.y, x2: area.x, y2: area.bottom() });

    if rows.is_empty() {
        return figure;
    }

    let band = area.height / rows.len() as f64;
    for (idx, (row, value)) in rows.iter().zip(&values).enumerate() {
        let height = band * BAR_FILL_RATIO;
        let y = area.y + band * idx as f64 + (band - height) / 2.0;
        let width = area.width * value / top;
        let x = area.x;

        figure.bars.push(Bar {
            category: row.category(),
            value: *value,
            x,
            y,
            width,
            height,
            path: rounded_rect(x, y, width, height, [0.0, BAR_RADIUS, BAR_RADIUS, 0.0]),
            fill: series.color,
            tooltip: format!("{}: {}", series.name, fmt_num(*value)),
        });
        figure.labels.push(Label {
            x: area.x - 8.0,
            y: y + height / 2.0 + 4.0,
            text: row.category().to_string(),
            anchor: Anchor::End,
        });
    }

    figure
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

fn pie(spec: &ChartSpec, dataset: Dataset, size: Size) -> Figure {
    let mut figure = Figure::empty(spec.kind, size);
    let Some(series) = primary_series(spec) else {
        return figure;
    };

    let rows = dataset.rows();
    let values = dataset.column(series.key);
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return figure;
    }

    let cx = size.width / 2.0;
    let cy = size.height / 2.0;
    let r = PIE_OUTER_RADIUS.min(size.width.min(size.height) / 2.0 - 10.0).max(0.0);

    let mut start = -FRAC_PI_2;
    for (row, value) in rows.iter().zip(&values) {
        let fraction = value / total;
        let sweep = fraction * TAU;
        let end = start + sweep;

        let path = if fraction >= 1.0 - 1e-9 {
            format!(
                "M{},{} A{},{} 0 1 1 {},{} A{},{} 0 1 1 {},{} Z",
                fmt_num(cx - r),
                fmt_num(cy),
                fmt_num(r),
                fmt_num(r),
                fmt_num(cx + r),
                fmt_num(cy),
                fmt_num(r),
                fmt_num(r),
                fmt_num(cx - r),
                fmt_num(cy)
            )
        } else {
            let (x0, y0) = polar(cx, cy, r, start);
            let (x1, y1) = polar(cx, cy, r, end);
            let large_arc = if sweep > PI { 1 } else { 0 };
            format!(
                "M{},{} L{},{} A{},{} 0 {} 1 {},{} Z",
                fmt_num(cx),
                fmt_num(cy),
                fmt_num(x0),
                fmt_num(y0),
                fmt_num(r),
                fmt_num(r),
                large_arc,
                fmt_num(x1),
                fmt_num(y1)
            )
        };

        let mid = start + sweep / 2.0;
        let (lx, ly) = polar(cx, cy, r + 24.0, mid);
        let anchor = if mid.cos() >= 0.0 { Anchor::Start } else { Anchor::End };

        figure.slices.push(Slice {
            name: row.category(),
            value: *value,
            fraction,
            start_angle: start,
            end_angle: end,
            path,
            fill: row.color().unwrap_or(series.color),
            label: Label {
                x: lx,
                y: ly,
                text: format!("{}: {}%", row.category(), fmt_num(*value)),
                anchor,
            },
        });

        start = end;
    }

    figure
}

fn lines(spec: &ChartSpec, dataset: Dataset, size: Size) -> Figure {
    let mut figure = Figure::empty(spec.kind, size);
    let rows = dataset.rows();

    let max = spec
        .series
        .iter()
        .map(|s| column_max(&dataset.column(s.key)))
        .fold(0.0, f64::max);
    let ticks = nice_ticks(max, TICK_COUNT);
    let top = ticks.last().copied().unwrap_or(1.0);
    let area = PlotArea::new(size, MARGIN.left);
    figure.domain_max = Some(top);

    for tick in &ticks {
        let y = area.bottom() - area.height * tick / top;
        figure.grid.push(Segment { x1: area.x, y1: y, x2: area.right(), y2: y });
        figure.labels.push(Label {
            x: area.x - 8.0,
            y: y + 4.0,
            text: fmt_num(*tick),
            anchor: Anchor::End,
        });
    }
    figure.axes.push(Segment { x1: area.x, y1: area.bottom(), x2: area.right(), y2: area.bottom() });
    figure.axes.push(Segment { x1: area.x, y1: area.y, x2: area.x, y2: area.bottom() });

    let x_at = |idx: usize| -> f64 {
        if rows.len() <= 1 {
            area.x + area.width / 2.0
        } else {
            area.x + area.width * idx as f64 / (rows.len() - 1) as f64
        }
    };

    for (idx, row) in rows.iter().enumerate() {
        figure.labels.push(Label {
            x: x_at(idx),
            y: area.bottom() + 18.0,
            text: row.category().to_string(),
            anchor: Anchor::Middle,
        });
    }

    for series in spec.series {
        let points: Vec<(f64, f64)> = dataset
            .column(series.key)
            .iter()
            .enumerate()
            .map(|(idx, value)| (x_at(idx), area.bottom() - area.height * value / top))
            .collect();

        for (row, (cx, cy)) in rows.iter().zip(&points) {
            let value = row.value(series.key).unwrap_or(0.0);
            figure.dots.push(Dot {
                cx: *cx,
                cy: *cy,
                r: DOT_RADIUS,
                fill: series.color,
                tooltip: format!("{} {}: {}", row.category(), series.name, fmt_num(value)),
            });
        }

        figure.lines.push(LineSeries {
            key: series.key,
            name: series.name,
            color: series.color,
            path: monotone_path(&points),
            points,
        });
        figure.legend.push(LegendEntry {
            name: series.name,
            color: series.color,
        });
    }

    figure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartId;

    fn figure(id: ChartId) -> Figure {
        render(id.spec(), id.dataset(), Size::default())
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(31.0, 5), vec![0.0, 8.0, 16.0, 24.0, 32.0]);
        assert_eq!(nice_ticks(42.0, 5), vec![0.0, 15.0, 30.0, 45.0, 60.0]);
        assert_eq!(nice_ticks(72.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0]);
        assert_eq!(nice_ticks(0.0, 5), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(42.0), "42");
        assert_eq!(fmt_num(12.5), "12.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.33");
        assert_eq!(fmt_num(-4.0), "-4");
    }

    #[test]
    fn test_vertical_bars_follow_rows() {
        let fig = figure(ChartId::Demographics);
        assert_eq!(fig.mark_count(), 6);
        assert_eq!(fig.domain_max, Some(32.0));
        assert_eq!(fig.grid.len(), TICK_COUNT);

        let categories: Vec<&str> = fig.bars.iter().map(|b| b.category).collect();
        assert_eq!(categories, vec!["18-25", "26-35", "36-45", "46-55", "56-65", "65+"]);

        // Left to right, tallest first, all inside the plot
        assert!(fig.bars.windows(2).all(|w| w[0].x < w[1].x));
        assert!(fig.bars.windows(2).all(|w| w[0].height >= w[1].height));
        for bar in &fig.bars {
            assert!(bar.y >= MARGIN.top - 1e-9);
            assert!(bar.x + bar.width <= Size::default().width);
            assert_eq!(bar.fill, "#0ea5e9");
        }
    }

    #[test]
    fn test_horizontal_bars_keep_kerala_on_top() {
        let fig = figure(ChartId::States);
        assert_eq!(fig.mark_count(), 10);
        assert_eq!(fig.bars[0].category, "Kerala");
        assert_eq!(fig.bars[0].value, 42.0);
        assert_eq!(fig.bars[9].category, "Bihar");
        assert!(fig.bars.windows(2).all(|w| w[0].y < w[1].y));
        assert!(fig.bars[0].width > fig.bars[9].width);
        assert!(fig.bars.iter().all(|b| b.x == CATEGORY_AXIS_WIDTH + 10.0));
        assert_eq!(fig.bars[0].tooltip, "literacy: 42");
    }

    #[test]
    fn test_pie_slices_cover_full_circle() {
        let fig = figure(ChartId::Gender);
        assert_eq!(fig.mark_count(), 3);
        assert_eq!(fig.domain_max, None);

        let sweep: f64 = fig.slices.iter().map(|s| s.end_angle - s.start_angle).sum();
        assert!((sweep - TAU).abs() < 1e-9);
        let fractions: f64 = fig.slices.iter().map(|s| s.fraction).sum();
        assert!((fractions - 1.0).abs() < 1e-9);

        let values: f64 = fig.slices.iter().map(|s| s.value).sum();
        assert_eq!(values, 56.0);

        assert_eq!(fig.slices[0].label.text, "Male: 31%");
        assert_eq!(fig.slices[1].fill, "#ec4899");
        assert!((fig.slices[0].start_angle + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_lines_pass_through_every_point() {
        let fig = figure(ChartId::Trends);
        assert_eq!(fig.lines.len(), 3);
        assert_eq!(fig.mark_count(), 7);
        assert_eq!(fig.dots.len(), 21);
        assert_eq!(fig.legend[1].name, "Digital Adoption");

        for line in &fig.lines {
            for (x, y) in &line.points {
                let point = format!("{},{}", fmt_num(*x), fmt_num(*y));
                assert!(line.path.contains(&point), "{} misses {}", line.name, point);
            }
        }
    }

    #[test]
    fn test_monotone_segments_do_not_overshoot() {
        let points = [(0.0, 24.0), (1.0, 25.0), (2.0, 26.0), (3.0, 27.0), (4.0, 27.0), (5.0, 28.0), (6.0, 27.0)];
        let segments = monotone_segments(&points);
        assert_eq!(segments.len(), 6);

        for seg in segments {
            let lo = seg.from.1.min(seg.to.1) - 1e-9;
            let hi = seg.from.1.max(seg.to.1) + 1e-9;
            assert!(seg.c1.1 >= lo && seg.c1.1 <= hi, "{:?}", seg);
            assert!(seg.c2.1 >= lo && seg.c2.1 <= hi, "{:?}", seg);
        }
    }

    #[test]
    fn test_monotone_path_degenerate_inputs() {
        assert_eq!(monotone_path(&[]), "");
        assert_eq!(monotone_path(&[(1.0, 2.0)]), "M1,2");
        assert!(monotone_segments(&[(1.0, 2.0)]).is_empty());
    }

    #[test]
    fn test_rounded_rect_clamps_radius() {
        let d = rounded_rect(0.0, 0.0, 4.0, 100.0, [10.0, 10.0, 0.0, 0.0]);
        assert!(d.starts_with("M2,0"));
        assert!(d.ends_with('Z'));
    }
}
