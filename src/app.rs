//! Population viewer application.
//!
//! Two views share one layout: a heading, a bar chart of the current series,
//! and a range filter under it. The continents view drills down into a
//! countries view when a bar is clicked.

use std::cell::Cell;
use std::rc::Rc;

use popviz_ui::constants::HEADING_FONT_SIZE;
use popviz_ui::prelude::*;

use crate::data::{Country, Series, countries_in_region};
use crate::message::Message;

/// Padding around the whole view
const VIEW_PADDING: f32 = 16.0;

/// Which chart is on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Continents,
    Countries(String),
}

pub struct PopvizApp {
    countries: Vec<Country>,
    view: View,
    series: Series,
    range: RangeState,
    chart: BarChartState,
    /// Filter the chart hover was recorded under
    chart_filter: (f64, f64),
    /// Committed filter, written by the range's change notification
    filter: Rc<Cell<(f64, f64)>>,
}

impl PopvizApp {
    pub fn new(countries: Vec<Country>) -> Self {
        let series = Series::continents(&countries);
        let (min, max) = series.value_bounds();
        log::info!(
            "Showing {} continents from {} countries",
            series.points.len(),
            countries.len()
        );
        Self {
            countries,
            view: View::Continents,
            series,
            range: RangeState::new(min, max),
            chart: BarChartState::new(),
            chart_filter: (min, max),
            filter: Rc::new(Cell::new((min, max))),
        }
    }

    pub fn view_kind(&self) -> &View {
        &self.view
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn range(&self) -> &RangeState {
        &self.range
    }

    pub fn chart(&self) -> &BarChartState {
        &self.chart
    }

    /// Current `(min, max)` filter applied to the chart
    pub fn filter(&self) -> (f64, f64) {
        self.filter.get()
    }

    /// Points of the current series inside the filter
    pub fn visible(&self) -> Series {
        let (min, max) = self.filter.get();
        self.series.filtered(min, max)
    }

    /// Switch to the countries of `region`. Returns false for unknown regions.
    pub fn open_region(&mut self, region: &str) -> bool {
        if countries_in_region(&self.countries, region).is_empty() {
            log::warn!("No countries in region '{}'", region);
            return false;
        }
        log::info!("Opening region '{}'", region);
        self.show(
            View::Countries(region.to_string()),
            Series::countries(&self.countries, region),
        );
        true
    }

    pub fn back_to_continents(&mut self) {
        log::info!("Back to continents");
        self.show(View::Continents, Series::continents(&self.countries));
    }

    /// Replace the series and reseed the filter from its bounds
    fn show(&mut self, view: View, series: Series) {
        let (min, max) = series.value_bounds();
        self.view = view;
        self.series = series;
        self.range = RangeState::new(min, max);
        self.chart = BarChartState::new();
        self.chart_filter = (min, max);
        self.filter.set((min, max));
    }

    fn select_bar(&mut self, index: usize) {
        if self.view != View::Continents {
            return;
        }
        let visible = self.visible();
        match visible.points.get(index) {
            Some((region, _)) => {
                self.open_region(region);
            }
            None => log::debug!("Ignoring click on missing bar {}", index),
        }
    }
}

impl Application for PopvizApp {
    type Message = Message;

    fn title(&self) -> String {
        "Population Viewer".to_string()
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::RangeChanged(state) => {
                self.range = state;
                // Bar indices shift when the filter changes
                let filter = self.filter.get();
                if filter != self.chart_filter {
                    self.chart = BarChartState::new();
                    self.chart_filter = filter;
                }
            }
            Message::ChartHover(state) => self.chart = state,
            Message::SelectBar(index) => self.select_bar(index),
            Message::BackToContinents => self.back_to_continents(),
        }
    }

    fn view(&self) -> Element<Message> {
        let visible = self.visible();
        let unit = self.series.unit;

        let mut layout = column(vec![Element::new(
            text(self.series.label.clone()).size(HEADING_FONT_SIZE),
        )]);

        if let View::Countries(_) = self.view {
            layout = layout.push(Element::new(
                button("Back to Continents").on_click(Message::BackToContinents),
            ));
        }

        let filter = Rc::clone(&self.filter);
        let layout = layout
            .push(Element::new(
                bar_chart(visible.points)
                    .unit(unit)
                    .axis_title(self.series.axis_title())
                    .state(&self.chart)
                    .on_change(Message::ChartHover)
                    .on_bar_click(Message::SelectBar),
            ))
            .push(Element::new(
                range(&self.range)
                    .unit(unit)
                    .on_change(Message::RangeChanged)
                    .on_range_change(move |min, max| filter.set((min, max))),
            ))
            .padding(VIEW_PADDING)
            .width(Length::Fill)
            .align_x(Alignment::Center);

        Element::new(layout)
    }
}
