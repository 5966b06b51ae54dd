use druid::{ArcStr, Color, Data};

/// A single bar: a title, the value that sizes it, and an optional fill
/// color.
///
/// When `color` is `None` the bar is filled with [`theme::BAR_COLOR`].
///
/// [`theme::BAR_COLOR`]: crate::theme::BAR_COLOR
#[derive(Debug, Clone, Data)]
pub struct BarEntry {
    pub title: ArcStr,
    pub value: f64,
    pub color: Option<Color>,
}

impl BarEntry {
    pub fn new(title: impl Into<ArcStr>, value: f64) -> Self {
        BarEntry {
            title: title.into(),
            value,
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Returns the largest value among the entries.
///
/// Bars are normalized against this: a bar's height is its value over this
/// maximum. NaN and negative values are ignored, so the result is always
/// finite and `>= 0`; an empty set gives `0`.
pub fn max_value<'a>(entries: impl Iterator<Item = &'a BarEntry>) -> f64 {
    let mut max = 0.;
    for entry in entries {
        // NaN comparisons are false, so NaN values are skipped.
        if entry.value > max {
            max = entry.value;
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(values: &[f64]) -> Vec<BarEntry> {
        values.iter().map(|&v| BarEntry::new("x", v)).collect()
    }

    #[test]
    fn max_value_scan() {
        assert_eq!(max_value(entries(&[1., 4., 2.]).iter()), 4.);
        assert_eq!(max_value(entries(&[]).iter()), 0.);
        // all-negative data normalizes against 0, not the largest negative
        assert_eq!(max_value(entries(&[-3., -1.]).iter()), 0.);
        assert_eq!(max_value(entries(&[2., f64::NAN, 5.]).iter()), 5.);
        assert_eq!(max_value(entries(&[f64::NAN]).iter()), 0.);
    }
}
