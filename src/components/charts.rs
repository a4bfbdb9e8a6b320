//! Inline-SVG chart primitives for dashboard panels.
//!
//! DESIGN
//! ======
//! Panels pass precomputed series; the layout math lives in pure helpers so
//! scaling behavior is unit-testable without a renderer. Visual fidelity is
//! explicitly not a goal; these are lightweight sparkline-grade charts.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

/// A labeled bar value.
#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

/// A single line series for [`TrendChart`].
#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// A donut slice with its display color.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

/// Pixel rectangle for one bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out bars across `width`, scaled so the maximum value fills `height`.
pub fn bar_layout(values: &[f64], width: f64, height: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let slot = width / values.len() as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let bar_height = if max > 0.0 { value / max * height } else { 0.0 };
            BarRect {
                x: i as f64 * slot + slot * 0.1,
                y: height - bar_height,
                width: slot * 0.8,
                height: bar_height,
            }
        })
        .collect()
}

/// Build an SVG `points` attribute for a polyline over `values`, scaled to
/// `max` (so multiple series on one chart share a scale).
pub fn polyline_points(values: &[f64], max: f64, width: f64, height: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let step = if values.len() > 1 { width / (values.len() - 1) as f64 } else { 0.0 };
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let y = if max > 0.0 { height - value / max * height } else { height };
            format!("{:.1},{:.1}", i as f64 * step, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize slice values to `(start, length)` fractions of a full turn.
pub fn donut_segments(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().copied().filter(|v| *v > 0.0).sum();
    if total <= 0.0 {
        return vec![(0.0, 0.0); values.len()];
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|&value| {
            let length = if value > 0.0 { value / total } else { 0.0 };
            let segment = (start, length);
            start += length;
            segment
        })
        .collect()
}

/// Vertical bar chart with labels underneath.
#[component]
pub fn BarChart(
    data: Vec<BarDatum>,
    #[prop(default = "#1b4965")] color: &'static str,
) -> impl IntoView {
    const WIDTH: f64 = 320.0;
    const HEIGHT: f64 = 150.0;
    const LABEL_BAND: f64 = 18.0;

    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let rects = bar_layout(&values, WIDTH, HEIGHT);
    let bars = rects
        .iter()
        .zip(&data)
        .map(|(rect, datum)| {
            view! {
                <g>
                    <rect
                        x=rect.x
                        y=rect.y
                        width=rect.width
                        height=rect.height
                        rx="3"
                        fill=color
                    />
                    <text
                        x=rect.x + rect.width / 2.0
                        y=HEIGHT + LABEL_BAND - 4.0
                        text-anchor="middle"
                        class="chart__label"
                    >
                        {datum.label.clone()}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg
            class="chart chart--bar"
            viewBox=format!("0 0 {WIDTH} {}", HEIGHT + LABEL_BAND)
            preserveAspectRatio="none"
        >
            {bars}
        </svg>
    }
}

/// Multi-series line chart on a shared scale.
#[component]
pub fn TrendChart(series: Vec<LineSeries>, labels: Vec<String>) -> impl IntoView {
    const WIDTH: f64 = 320.0;
    const HEIGHT: f64 = 150.0;
    const LABEL_BAND: f64 = 18.0;

    let max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0_f64, f64::max);
    let lines = series
        .iter()
        .map(|s| {
            let points = polyline_points(&s.values, max, WIDTH, HEIGHT);
            view! {
                <polyline points=points fill="none" stroke=s.color stroke-width="2"/>
            }
        })
        .collect::<Vec<_>>();
    let step = if labels.len() > 1 { WIDTH / (labels.len() - 1) as f64 } else { 0.0 };
    let ticks = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <text
                    x=i as f64 * step
                    y=HEIGHT + LABEL_BAND - 4.0
                    text-anchor="middle"
                    class="chart__label"
                >
                    {label.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg
            class="chart chart--trend"
            viewBox=format!("0 0 {WIDTH} {}", HEIGHT + LABEL_BAND)
            preserveAspectRatio="none"
        >
            {lines}
            {ticks}
        </svg>
    }
}

/// Donut chart drawn with stroked circle segments.
#[component]
pub fn DonutChart(slices: Vec<DonutSlice>) -> impl IntoView {
    const SIZE: f64 = 160.0;
    const RADIUS: f64 = 60.0;
    let circumference = std::f64::consts::TAU * RADIUS;

    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let rings = donut_segments(&values)
        .into_iter()
        .zip(&slices)
        .map(|((start, length), slice)| {
            let dash = format!("{:.2} {:.2}", length * circumference, circumference);
            let offset = format!("{:.2}", -start * circumference);
            view! {
                <circle
                    cx=SIZE / 2.0
                    cy=SIZE / 2.0
                    r=RADIUS
                    fill="none"
                    stroke=slice.color
                    stroke-width="22"
                    stroke-dasharray=dash
                    stroke-dashoffset=offset
                    transform=format!("rotate(-90 {0} {0})", SIZE / 2.0)
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="chart chart--donut" viewBox=format!("0 0 {SIZE} {SIZE}")>
            {rings}
        </svg>
    }
}
