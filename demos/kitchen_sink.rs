use anyhow::Error;
use druid::im::Vector;
use druid::widget::{Flex, Label, Painter, ViewSwitcher};
use druid::{
    AppLauncher, Color, Data, Env, Lens, LocalizedString, RenderContext, Widget, WidgetExt,
    WindowDesc,
};
use druid_bar_chart::{new_color, theme, BarChart, BarChartData, BarEntry, BarWidth, CellWidth};

const WINDOW_TITLE: LocalizedString<DemoState> = LocalizedString::new("Bar chart");

#[derive(Debug, Clone, Data, Lens)]
struct DemoState {
    active_tab_idx: usize,
    rainfall: RainfallData,
}

fn main() {
    // describe the main window
    let main_window = WindowDesc::new(build_root_widget())
        .title(WINDOW_TITLE)
        .window_size((600.0, 400.0));

    // create the initial app state
    let initial_state = DemoState {
        active_tab_idx: 0,
        rainfall: RainfallData::load().unwrap(),
    };

    // start the application
    AppLauncher::with_window(main_window)
        .configure_env(|env, _state| theme::add_to_env(env))
        .launch(initial_state)
        .expect("Failed to launch application");
}

fn build_root_widget() -> impl Widget<DemoState> {
    let tab_labels = ["Auto fit", "Fixed width + scroll"];

    let mut tabs = Flex::row();
    for (idx, label) in tab_labels.iter().enumerate() {
        tabs = tabs.with_flex_child(
            Label::new(*label)
                .padding((24.0, 8.0))
                .background(make_background(idx))
                .on_click(move |_ctx, data: &mut DemoState, _env| {
                    data.active_tab_idx = idx;
                }),
            1.0,
        );
    }

    let main_content = ViewSwitcher::new(
        |state: &DemoState, _env| state.active_tab_idx,
        move |tab_idx, _state, _env| match *tab_idx {
            0 => BarChart::new().lens(RainfallLens).boxed(),
            1 => BarChart::new()
                .with_cell_width(CellWidth::Fixed(56.0))
                .with_bar_width(BarWidth::Fixed(24.0))
                .scrolled()
                .lens(ColoredRainfallLens)
                .boxed(),
            _ => unreachable!(),
        },
    );

    Flex::column()
        .with_child(tabs)
        .with_flex_child(main_content, 1.0)
}

fn make_background(idx: usize) -> Painter<DemoState> {
    Painter::new(move |ctx, data: &DemoState, _env| {
        let bounds = ctx.size().to_rect();
        if data.active_tab_idx == idx {
            ctx.fill(bounds, &Color::hlc(0.0, 20.0, 0.0));
        } else {
            ctx.fill(bounds, &Color::hlc(0.0, 40.0, 0.0));
        }
    })
}

struct RainfallLens;

impl Lens<DemoState, BarChartData> for RainfallLens {
    fn with<V, F: FnOnce(&BarChartData) -> V>(&self, data: &DemoState, f: F) -> V {
        f(&data.rainfall.chart_data(false))
    }
    fn with_mut<V, F: FnOnce(&mut BarChartData) -> V>(&self, data: &mut DemoState, f: F) -> V {
        f(&mut data.rainfall.chart_data(false))
    }
}

struct ColoredRainfallLens;

impl Lens<DemoState, BarChartData> for ColoredRainfallLens {
    fn with<V, F: FnOnce(&BarChartData) -> V>(&self, data: &DemoState, f: F) -> V {
        f(&data.rainfall.chart_data(true))
    }
    fn with_mut<V, F: FnOnce(&mut BarChartData) -> V>(&self, data: &mut DemoState, f: F) -> V {
        f(&mut data.rainfall.chart_data(true))
    }
}

// load rainfall data

#[derive(Debug, Default, Clone, Data)]
struct RainfallData {
    months: Vector<String>,
    millimetres: Vector<f64>,
}

impl RainfallData {
    fn load() -> Result<Self, Error> {
        let mut data = Self::default();

        let mut rdr = csv::Reader::from_path("demos/rainfall.csv")?;
        for result in rdr.records() {
            let record = result?;
            data.months.push_back(record.get(0).unwrap().to_string());
            data.millimetres.push_back(record.get(1).unwrap().parse()?);
        }
        Ok(data)
    }

    fn chart_data(&self, colored: bool) -> BarChartData {
        let entries = self
            .months
            .iter()
            .zip(self.millimetres.iter())
            .enumerate()
            .map(|(idx, (month, mm))| {
                let entry = BarEntry::new(month.as_str(), *mm);
                if colored {
                    entry.with_color(new_color(idx))
                } else {
                    entry
                }
            })
            .collect();
        BarChartData {
            title: "Monthly rainfall (mm)".into(),
            entries,
        }
    }
}
