use druid::{
    im::Vector,
    kurbo::Rect,
    widget::Scroll,
    ArcStr, BoxConstraints, Color, Data, Env, Event, EventCtx, KeyOrValue, LayoutCtx, LifeCycle,
    LifeCycleCtx, PaintCtx, Size, TextLayout, UpdateCtx, Widget,
};
use itertools::izip;
use std::iter;

use crate::{
    bar::{BarCell, CellStyle},
    entry::{max_value, BarEntry},
    theme,
};

/// Vertical space reserved for the chart title.
const TITLE_HEIGHT: f64 = 40.0;

/// A row of bars, one per entry, each scaled against the largest value.
#[derive(Debug, Clone, Data)]
pub struct BarChartData {
    pub title: ArcStr,
    pub entries: Vector<BarEntry>,
}

impl BarChartData {
    /// The value bars are normalized against. See [`max_value`].
    pub fn max_value(&self) -> f64 {
        max_value(self.entries.iter())
    }
}

/// How wide each bar's cell is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellWidth {
    /// Divide the available width evenly between the entries, so everything
    /// fits without scrolling.
    Auto,
    /// A fixed width per cell. The chart then reports its full content width
    /// from `layout`, so wrap it in a horizontal [`Scroll`] (or use
    /// [`BarChart::scrolled`]) to reach the overflow.
    Fixed(f64),
}

/// How wide the bar is within its cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarWidth {
    /// The bar (and its track) spans the whole cell.
    FillCell,
    /// A fixed bar width, centered in the cell.
    Fixed(f64),
}

/// A horizontal bar chart.
///
/// Every entry is drawn as a rounded track with a filled bar whose height is
/// `value / max_value` of the track, with the entry title underneath. Colors
/// and metrics resolve through [`theme`] keys unless overridden here.
pub struct BarChart {
    cell_width: CellWidth,
    bar_width: BarWidth,
    bar_spacing: KeyOrValue<f64>,
    cell_padding: KeyOrValue<f64>,
    label_height: KeyOrValue<f64>,
    corner_radius: KeyOrValue<f64>,
    track_color: KeyOrValue<Color>,
    bar_color: KeyOrValue<Color>,
    // retained state
    title_layout: TextLayout<ArcStr>,
    cells: Vec<BarCell>,
    max_value: Option<f64>,
}

impl BarChart {
    pub fn new() -> Self {
        let mut title_layout = TextLayout::new();
        title_layout.set_text_size(20.);
        BarChart {
            cell_width: CellWidth::Auto,
            bar_width: BarWidth::FillCell,
            bar_spacing: theme::BAR_SPACING.into(),
            cell_padding: theme::CELL_PADDING.into(),
            label_height: theme::LABEL_HEIGHT.into(),
            corner_radius: theme::CORNER_RADIUS.into(),
            track_color: theme::TRACK_COLOR.into(),
            bar_color: theme::BAR_COLOR.into(),
            title_layout,
            cells: vec![],
            max_value: None,
        }
    }

    pub fn with_cell_width(mut self, cell_width: CellWidth) -> Self {
        self.cell_width = cell_width;
        self
    }

    pub fn with_bar_width(mut self, bar_width: BarWidth) -> Self {
        self.bar_width = bar_width;
        self
    }

    pub fn with_bar_spacing(mut self, spacing: impl Into<KeyOrValue<f64>>) -> Self {
        self.bar_spacing = spacing.into();
        self
    }

    pub fn with_corner_radius(mut self, radius: impl Into<KeyOrValue<f64>>) -> Self {
        self.corner_radius = radius.into();
        self
    }

    pub fn with_track_color(mut self, color: impl Into<KeyOrValue<Color>>) -> Self {
        self.track_color = color.into();
        self
    }

    pub fn with_bar_color(mut self, color: impl Into<KeyOrValue<Color>>) -> Self {
        self.bar_color = color.into();
        self
    }

    /// Wrap the chart in a horizontal [`Scroll`].
    ///
    /// Only useful together with [`CellWidth::Fixed`]; in `Auto` mode the
    /// chart always fits its box.
    pub fn scrolled(self) -> Scroll<BarChartData, Self> {
        Scroll::new(self).horizontal()
    }

    fn rebuild_if_needed(&mut self, ctx: &mut PaintCtx, data: &BarChartData, env: &Env) {
        self.title_layout.rebuild_if_needed(ctx.text(), env);
        for cell in self.cells.iter_mut() {
            cell.rebuild_if_needed(ctx, env);
        }
        if self.max_value.is_none() {
            self.max_value = Some(data.max_value());
        }
    }

    fn resolve_style(&self, env: &Env) -> CellStyle {
        CellStyle {
            padding: self.cell_padding.resolve(env),
            label_height: self.label_height.resolve(env),
            corner_radius: self.corner_radius.resolve(env),
            track_color: self.track_color.resolve(env),
            bar_color: self.bar_color.resolve(env),
        }
    }
}

impl Widget<BarChartData> for BarChart {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut BarChartData, env: &Env) {}

    fn lifecycle(
        &mut self,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &BarChartData,
        env: &Env,
    ) {
        match event {
            LifeCycle::WidgetAdded => {
                self.title_layout.set_text(data.title.clone());
                self.cells = data
                    .entries
                    .iter()
                    .map(|entry| {
                        let mut cell = BarCell::new();
                        cell.set_title(entry.title.clone());
                        cell
                    })
                    .collect();
            }
            _ => (),
        }
    }

    fn update(
        &mut self,
        ctx: &mut UpdateCtx,
        old_data: &BarChartData,
        data: &BarChartData,
        env: &Env,
    ) {
        if !old_data.title.same(&data.title) {
            self.title_layout.set_text(data.title.clone());
        }
        if self.title_layout.needs_rebuild_after_update(ctx) {
            ctx.request_paint();
        }
        if !old_data.entries.same(&data.entries) {
            // If we don't have enough cells add some on the end.
            //
            // Note that we might have too many. That is why we only zip the
            // first `entries.len()` cells during paint.
            if self.cells.len() < data.entries.len() {
                let missing = data.entries.len() - self.cells.len();
                self.cells.extend(iter::repeat_with(BarCell::new).take(missing));
            }
            for (entry, cell) in izip!(&data.entries, &mut self.cells) {
                cell.set_title(entry.title.clone());
            }
            self.max_value = None;
            if old_data.entries.len() != data.entries.len() {
                // content width depends on the entry count in fixed mode
                ctx.request_layout();
            }
            // a value or color change on its own reaches no layout, so ask
            // for the repaint explicitly
            ctx.request_paint();
        }
        for cell in self.cells.iter_mut() {
            if cell.needs_rebuild_after_update(ctx) {
                ctx.request_paint();
            }
        }
    }

    fn layout(
        &mut self,
        ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        data: &BarChartData,
        env: &Env,
    ) -> Size {
        match self.cell_width {
            CellWidth::Auto => bc.max(),
            CellWidth::Fixed(width) => {
                let spacing = self.bar_spacing.resolve(env);
                let content = content_width(data.entries.len(), width, spacing);
                bc.constrain((content, bc.max().height))
            }
        }
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &BarChartData, env: &Env) {
        self.rebuild_if_needed(ctx, data, env);
        let size = ctx.size();

        // title
        let title_width = self.title_layout.size().width;
        self.title_layout
            .draw(ctx, ((size.width - title_width) * 0.5, 10.0));

        // data
        if data.entries.is_empty() {
            return;
        }
        let style = self.resolve_style(env);
        let spacing = self.bar_spacing.resolve(env);
        let cell_width = match self.cell_width {
            CellWidth::Auto => {
                estimated_cell_width(size.width, data.entries.len(), style.padding, spacing)
            }
            CellWidth::Fixed(width) => width,
        };
        // give up if the area is too small.
        if cell_width <= 0. {
            log::trace!("not enough width for {} bars, skipping", data.entries.len());
            return;
        }
        let bar_width = match self.bar_width {
            BarWidth::FillCell => cell_width,
            BarWidth::Fixed(width) => width.min(cell_width),
        };
        let max = self.max_value.unwrap();
        let mut x = 0.;
        for (entry, cell) in izip!(&data.entries, &mut self.cells) {
            let cell_bounds = Rect::new(x, TITLE_HEIGHT, x + cell_width, size.height);
            cell.paint(ctx, cell_bounds, entry, max, bar_width, &style);
            x += cell_width + spacing;
        }
    }
}

/// Evenly divide `avail` between `count` cells, the auto sizing mode.
///
/// One `padding` is reserved at either edge and a `spacing` per cell.
/// Never negative; 0 when there are no cells.
pub(crate) fn estimated_cell_width(avail: f64, count: usize, padding: f64, spacing: f64) -> f64 {
    if count == 0 {
        return 0.;
    }
    let count = count as f64;
    let full = avail - 2. * padding - count * spacing;
    (full / count).max(0.)
}

/// Total width of `count` fixed-width cells and the gaps between them.
pub(crate) fn content_width(count: usize, cell_width: f64, spacing: f64) -> f64 {
    if count == 0 {
        return 0.;
    }
    count as f64 * cell_width + (count - 1) as f64 * spacing
}

#[cfg(test)]
mod tests {
    use super::*;
    use druid::im::vector;

    #[test]
    fn estimated_width_divides_evenly() {
        // 400 wide, 10 bars: (400 - 2*4 - 10*2) / 10
        assert_eq!(estimated_cell_width(400., 10, 4., 2.), 37.2);
        assert_eq!(estimated_cell_width(400., 1, 0., 0.), 400.);
    }

    #[test]
    fn estimated_width_degenerate() {
        assert_eq!(estimated_cell_width(400., 0, 4., 2.), 0.);
        // more spacing than space
        assert_eq!(estimated_cell_width(10., 10, 4., 2.), 0.);
    }

    #[test]
    fn fixed_mode_content_width() {
        assert_eq!(content_width(0, 30., 2.), 0.);
        assert_eq!(content_width(1, 30., 2.), 30.);
        assert_eq!(content_width(5, 30., 2.), 158.);
    }

    #[test]
    fn chart_max_value() {
        let data = BarChartData {
            title: "t".into(),
            entries: vector![
                BarEntry::new("a", 3.),
                BarEntry::new("b", 7.),
                BarEntry::new("c", 5.),
            ],
        };
        assert_eq!(data.max_value(), 7.);
    }

    #[test]
    fn value_change_is_a_data_change() {
        // a value edit keeps the count and titles, so update only sees it
        // through `same`; it must register so the repaint request fires
        let old = BarChartData {
            title: "t".into(),
            entries: vector![BarEntry::new("a", 3.), BarEntry::new("b", 7.)],
        };
        let mut updated = old.clone();
        updated.entries[1].value = 9.;
        assert!(!old.entries.same(&updated.entries));
        assert_eq!(updated.max_value(), 9.);

        // a color-only edit counts as a change too
        let mut recolored = old.clone();
        recolored.entries[0].color = Some(Color::rgb8(0xff, 0x00, 0x00));
        assert!(!old.entries.same(&recolored.entries));
    }
}
