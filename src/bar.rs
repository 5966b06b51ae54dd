//! The per-bar "cell": a grey rounded track with the value bar rising from
//! its foot and a title label underneath.

use druid::{
    kurbo::Rect, ArcStr, Color, Env, PaintCtx, RenderContext, TextLayout, UpdateCtx,
};

use crate::BarEntry;

/// Visual constants for a cell, resolved against the `Env` once per paint.
#[derive(Debug, Clone)]
pub(crate) struct CellStyle {
    pub padding: f64,
    pub label_height: f64,
    pub corner_radius: f64,
    pub track_color: Color,
    /// Fill for entries without a color of their own.
    pub bar_color: Color,
}

/// Retained state for a single bar.
pub(crate) struct BarCell {
    label_layout: TextLayout<ArcStr>,
}

impl BarCell {
    pub fn new() -> Self {
        let mut label_layout = TextLayout::new();
        label_layout.set_text_size(12.);
        BarCell { label_layout }
    }

    pub fn set_title(&mut self, title: ArcStr) {
        self.label_layout.set_text(title);
    }

    pub fn needs_rebuild_after_update(&mut self, ctx: &mut UpdateCtx) -> bool {
        self.label_layout.needs_rebuild_after_update(ctx)
    }

    pub fn rebuild_if_needed(&mut self, ctx: &mut PaintCtx, env: &Env) {
        self.label_layout.rebuild_if_needed(ctx.text(), env);
    }

    /// Paint this cell into `cell_bounds`.
    ///
    /// `max` is the value all bars are normalized against, `bar_width` the
    /// already-resolved width of the track.
    pub fn paint(
        &mut self,
        ctx: &mut PaintCtx,
        cell_bounds: Rect,
        entry: &BarEntry,
        max: f64,
        bar_width: f64,
        style: &CellStyle,
    ) {
        let geom = cell_geometry(
            cell_bounds,
            bar_width,
            style.padding,
            style.label_height,
            entry.value,
            max,
        );
        let track = geom.track.to_rounded_rect(style.corner_radius);
        ctx.fill(track, &style.track_color);
        let bar_color = entry.color.clone().unwrap_or_else(|| style.bar_color.clone());
        ctx.with_save(|ctx| {
            // the track clips the bar so their rounded corners agree
            ctx.clip(track);
            ctx.fill(geom.bar.to_rounded_rect(style.corner_radius), &bar_color);
        });

        // label, centered under the bar
        let label_width = self.label_layout.size().width;
        self.label_layout.draw(
            ctx,
            (
                cell_bounds.x0 + (cell_bounds.width() - label_width) * 0.5,
                geom.label_top,
            ),
        );
    }
}

pub(crate) struct CellGeometry {
    /// Full-height background the bar rises inside.
    pub track: Rect,
    /// The filled portion, bottom-aligned in the track.
    pub bar: Rect,
    /// Where the top of the title label goes.
    pub label_top: f64,
}

/// Split a cell rect into track, bar and label strip.
///
/// The track is horizontally centered at `bar_width` wide and runs from the
/// cell top to `padding` above the label strip, which occupies the bottom
/// `label_height` of the cell (inset by `padding`).
pub(crate) fn cell_geometry(
    cell: Rect,
    bar_width: f64,
    padding: f64,
    label_height: f64,
    value: f64,
    max: f64,
) -> CellGeometry {
    let label_top = cell.y1 - padding - label_height;
    let track_x0 = cell.x0 + (cell.width() - bar_width) * 0.5;
    // a cell shorter than the label strip and padding leaves no room for a
    // track; collapse it rather than inverting the rect
    let track_y1 = (label_top - padding).max(cell.y0);
    let track = Rect::new(track_x0, cell.y0, track_x0 + bar_width, track_y1);
    let height = bar_height(value, max, track.height());
    let bar = Rect::new(track.x0, track.y1 - height, track.x1, track.y1);
    CellGeometry {
        track,
        bar,
        label_top,
    }
}

/// Height of the filled bar for `value` against `max` in a track of
/// `track_height`.
///
/// Returns 0 for non-positive or NaN inputs (in particular when `max` is 0,
/// i.e. the data set is empty or all-zero), and never exceeds the track.
pub(crate) fn bar_height(value: f64, max: f64, track_height: f64) -> f64 {
    if !(value > 0.) || !(max > 0.) || !(track_height > 0.) {
        return 0.;
    }
    (value / max * track_height).min(track_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_height_proportional() {
        assert_eq!(bar_height(5., 10., 200.), 100.);
        assert_eq!(bar_height(10., 10., 200.), 200.);
        assert_eq!(bar_height(0., 10., 200.), 0.);
    }

    #[test]
    fn bar_height_degenerate() {
        // unguarded in naive form, these all divide by zero or go negative
        assert_eq!(bar_height(5., 0., 200.), 0.);
        assert_eq!(bar_height(-5., 10., 200.), 0.);
        assert_eq!(bar_height(f64::NAN, 10., 200.), 0.);
        assert_eq!(bar_height(5., f64::NAN, 200.), 0.);
        assert_eq!(bar_height(5., f64::INFINITY, 200.), 0.);
        // values above the max clamp to the track
        assert_eq!(bar_height(20., 10., 200.), 200.);
    }

    #[test]
    fn geometry_splits_cell() {
        let cell = Rect::new(10., 0., 50., 132.);
        let geom = cell_geometry(cell, 20., 4., 24., 5., 10.);
        // label strip: bottom 24px, inset by the 4px padding
        assert_eq!(geom.label_top, 132. - 4. - 24.);
        // track: centered, 20 wide, from the top to a padding above the label
        assert_eq!(geom.track, Rect::new(20., 0., 40., 100.));
        // bar: half the track height, sitting on its foot
        assert_eq!(geom.bar, Rect::new(20., 50., 40., 100.));
    }

    #[test]
    fn geometry_collapses_in_short_cells() {
        // not even room for the label strip: track and bar collapse to
        // zero-height rects at the cell top instead of inverting
        let cell = Rect::new(0., 0., 40., 20.);
        let geom = cell_geometry(cell, 20., 4., 24., 5., 10.);
        assert_eq!(geom.track, Rect::new(10., 0., 30., 0.));
        assert_eq!(geom.bar, Rect::new(10., 0., 30., 0.));
    }
}
