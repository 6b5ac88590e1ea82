//! Minimal SVG chart rendering for the mood history view.
//!
//! DESIGN
//! ======
//! The geometry helpers are pure string/number shaping over the series
//! produced by `util::chart_data`; the components wrap them in fixed-size
//! `<svg>` viewports. Anything fancier than a polyline, bars, and a donut is
//! out of scope.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

use crate::util::chart_data::LinePoint;
use crate::util::mood::MOOD_SCALE;

const VIEW_WIDTH: f64 = 640.0;
const VIEW_HEIGHT: f64 = 240.0;
const PAD: f64 = 16.0;

/// SVG polyline `points` attribute for day averages on the 1..=5 scale.
/// A single point is centered; an empty series yields an empty string.
fn polyline_points(averages: &[f64], width: f64, height: f64) -> String {
    let span_x = width - 2.0 * PAD;
    let span_y = height - 2.0 * PAD;
    let n = averages.len();
    averages
        .iter()
        .enumerate()
        .map(|(i, avg)| {
            #[allow(clippy::cast_precision_loss)]
            let x = if n == 1 {
                width / 2.0
            } else {
                PAD + span_x * (i as f64) / ((n - 1) as f64)
            };
            let y = PAD + span_y * (5.0 - avg.clamp(1.0, 5.0)) / 4.0;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cumulative `(start, end)` fractions of the whole for each non-zero
/// bucket, paired with the bucket's level. Empty when nothing was counted.
fn donut_segments(counts: &[u32; 5]) -> Vec<(u8, f64, f64)> {
    let total: u32 = counts.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut segments = Vec::new();
    let mut start = 0.0;
    for (i, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let fraction = f64::from(count) / f64::from(total);
        #[allow(clippy::cast_possible_truncation)]
        segments.push((i as u8 + 1, start, start + fraction));
        start += fraction;
    }
    segments
}

/// SVG arc path for a donut segment spanning `start..end` turn fractions.
fn arc_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    let angle = |frac: f64| (frac * std::f64::consts::TAU) - std::f64::consts::FRAC_PI_2;
    let (x0, y0) = (cx + radius * angle(start).cos(), cy + radius * angle(start).sin());
    let (x1, y1) = (cx + radius * angle(end).cos(), cy + radius * angle(end).sin());
    let large_arc = i32::from(end - start > 0.5);
    format!("M {x0:.1} {y0:.1} A {radius:.1} {radius:.1} 0 {large_arc} 1 {x1:.1} {y1:.1}")
}

/// Day-average trend line.
#[component]
pub fn MoodLineChart(points: Vec<LinePoint>) -> impl IntoView {
    let averages: Vec<f64> = points.iter().map(|p| p.average).collect();
    let line = polyline_points(&averages, VIEW_WIDTH, VIEW_HEIGHT);
    view! {
        <svg
            class="chart chart--line"
            viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
            role="img"
        >
            <polyline points=line fill="none" stroke="#667eea" stroke-width="3"></polyline>
        </svg>
    }
}

/// Entry counts per mood level.
#[component]
pub fn MoodBarChart(counts: [u32; 5]) -> impl IntoView {
    let max = f64::from(counts.iter().copied().max().unwrap_or(0).max(1));
    let slot = (VIEW_WIDTH - 2.0 * PAD) / 5.0;
    let bars = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            #[allow(clippy::cast_precision_loss)]
            let x = PAD + slot * (i as f64) + slot * 0.15;
            let height = (VIEW_HEIGHT - 2.0 * PAD) * f64::from(count) / max;
            let y = VIEW_HEIGHT - PAD - height;
            view! {
                <rect
                    x=format!("{x:.1}")
                    y=format!("{y:.1}")
                    width=format!("{:.1}", slot * 0.7)
                    height=format!("{height:.1}")
                    fill=MOOD_SCALE[i].color
                ></rect>
            }
        })
        .collect::<Vec<_>>();
    view! {
        <svg
            class="chart chart--bar"
            viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
            role="img"
        >
            {bars}
        </svg>
    }
}

/// Mood distribution donut.
#[component]
pub fn MoodDoughnutChart(counts: [u32; 5]) -> impl IntoView {
    let (cx, cy, radius) = (VIEW_HEIGHT / 2.0, VIEW_HEIGHT / 2.0, VIEW_HEIGHT / 2.0 - PAD);
    let arcs = donut_segments(&counts)
        .into_iter()
        .map(|(level, start, end)| {
            view! {
                <path
                    d=arc_path(cx, cy, radius, start, end)
                    fill="none"
                    stroke=crate::util::mood::mood_color(level)
                    stroke-width="28"
                ></path>
            }
        })
        .collect::<Vec<_>>();
    view! {
        <svg
            class="chart chart--doughnut"
            viewBox=format!("0 0 {VIEW_HEIGHT} {VIEW_HEIGHT}")
            role="img"
        >
            {arcs}
        </svg>
    }
}
