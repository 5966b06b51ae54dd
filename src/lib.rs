//! A scrollable horizontal bar chart widget for druid
//!
//! Build a [`BarChartData`] from [`BarEntry`] values (usually behind a
//! `Lens`), drop a [`BarChart`] in your widget tree, and call
//! [`theme::add_to_env`] when launching the app. Bars are sized against the
//! largest value in the data; cell widths either auto-fit the chart's box or
//! take a fixed width, in which case the chart scrolls inside
//! [`BarChart::scrolled`].
use druid::Color;

mod bar;
mod bar_chart;
mod entry;
pub mod theme;

pub use bar_chart::{BarChart, BarChartData, BarWidth, CellWidth};
pub use entry::{max_value, BarEntry};

/// A color cycle for callers assigning per-entry colors.
pub fn new_color(idx: usize) -> Color {
    let idx = idx as f64;
    // use a number that is fairly coprime with 360.
    Color::hlc(idx * 140.0, 50.0, 50.0)
}
