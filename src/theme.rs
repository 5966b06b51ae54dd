use druid::{Color, Env, Key};

/// Gap between neighbouring bar cells.
pub const BAR_SPACING: Key<f64> = Key::new("org.derekdreery.druid-bar-chart.theme.bar_spacing");
/// Padding between a cell's edge and its track.
pub const CELL_PADDING: Key<f64> = Key::new("org.derekdreery.druid-bar-chart.theme.cell_padding");
/// Height of the title label strip under each bar.
pub const LABEL_HEIGHT: Key<f64> = Key::new("org.derekdreery.druid-bar-chart.theme.label_height");
/// Corner radius of the track and the bar it clips.
pub const CORNER_RADIUS: Key<f64> =
    Key::new("org.derekdreery.druid-bar-chart.theme.corner_radius");
/// Color of the track behind each bar.
pub const TRACK_COLOR: Key<Color> = Key::new("org.derekdreery.druid-bar-chart.theme.track_color");
/// Fill color for entries that don't specify their own.
pub const BAR_COLOR: Key<Color> = Key::new("org.derekdreery.druid-bar-chart.theme.bar_color");

/// Important: call this before doing anything else.
pub fn add_to_env(env: &mut Env) {
    env.set(BAR_SPACING, 2.);
    env.set(CELL_PADDING, 4.);
    env.set(LABEL_HEIGHT, 24.);
    env.set(CORNER_RADIUS, 4.);
    env.set(TRACK_COLOR, Color::grey(0.8));
    env.set(BAR_COLOR, Color::rgb8(0x00, 0x7a, 0xff));
}
