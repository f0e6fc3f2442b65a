//! Vertical bar chart widget

use crate::callback::Callback;
use crate::constants::{
    format_number, line_height, text_width, CHART_AXIS_WIDTH, CHART_BAR_FILL, CHART_DEFAULT_WIDTH,
    CHART_HEIGHT, CHART_LABEL_HEIGHT, CHART_MIN_BAR_HEIGHT, CHART_TICK_COUNT, CHART_TOP_MARGIN,
    SMALL_FONT_SIZE,
};
use crate::event::{Event, MouseButton};
use crate::layout::{Bounds, Length, Size};
use crate::renderer::{Color, Renderer};
use crate::state::BarChartState;
use crate::widget::Widget;

use super::range::Unit;

/// One bar per labeled value, scaled to the largest value
pub struct BarChart<M> {
    points: Vec<(String, f64)>,
    unit: Unit,
    axis_title: Option<String>,
    state: BarChartState,
    width: Length,
    on_change: Callback<BarChartState, M>,
    on_bar_click: Callback<usize, M>,
}

impl<M> BarChart<M> {
    pub fn new(points: Vec<(String, f64)>) -> Self {
        Self {
            points,
            unit: Unit::default(),
            axis_title: None,
            state: BarChartState::default(),
            width: Length::Fill,
            on_change: Callback::none(),
            on_bar_click: Callback::none(),
        }
    }

    /// Set the value suffix for ticks and tooltips
    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the y-axis title
    pub fn axis_title(mut self, title: impl Into<String>) -> Self {
        self.axis_title = Some(title.into());
        self
    }

    /// Set the hover state
    pub fn state(mut self, state: &BarChartState) -> Self {
        self.state = *state;
        self
    }

    /// Set the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Receive hover updates
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(BarChartState) -> M + 'static,
    {
        self.on_change = Callback::new(f);
        self
    }

    /// Receive the index of a clicked bar
    pub fn on_bar_click<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) -> M + 'static,
    {
        self.on_bar_click = Callback::new(f);
        self
    }

    fn max_value(&self) -> f64 {
        self.points
            .iter()
            .map(|(_, v)| *v)
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }

    fn plot_area(&self, bounds: Bounds) -> Bounds {
        let title_height = if self.axis_title.is_some() {
            line_height(SMALL_FONT_SIZE)
        } else {
            0.0
        };
        let top = bounds.y + CHART_TOP_MARGIN + title_height;
        Bounds::new(
            bounds.x + CHART_AXIS_WIDTH,
            top,
            (bounds.width - CHART_AXIS_WIDTH).max(0.0),
            (bounds.bottom() - CHART_LABEL_HEIGHT - top).max(0.0),
        )
    }

    fn bar_bounds(&self, index: usize, plot: Bounds, max: f64) -> Bounds {
        let slot = plot.width / self.points.len().max(1) as f32;
        let bar_width = slot * CHART_BAR_FILL;
        let value = self.points[index].1;
        let ratio = if max > 0.0 && value.is_finite() {
            (value / max).clamp(0.0, 1.0) as f32
        } else {
            0.0
        };
        let mut height = plot.height * ratio;
        if value > 0.0 {
            height = height.max(CHART_MIN_BAR_HEIGHT);
        }
        Bounds::new(
            plot.x + slot * index as f32 + (slot - bar_width) / 2.0,
            plot.bottom() - height,
            bar_width,
            height,
        )
    }

    /// Bar whose column is under the pointer
    fn bar_at(&self, x: f32, y: f32, bounds: Bounds) -> Option<usize> {
        let plot = self.plot_area(bounds);
        if self.points.is_empty() || !plot.contains(x, y) {
            return None;
        }
        let max = self.max_value();
        (0..self.points.len()).find(|&i| {
            let bar = self.bar_bounds(i, plot, max);
            x >= bar.x && x <= bar.right()
        })
    }

    fn tooltip(&self, index: usize) -> String {
        format!(
            "{:.1} {} inhabitants",
            self.points[index].1,
            self.unit.suffix()
        )
    }
}

impl<M: 'static> Widget<M> for BarChart<M> {
    fn layout(&mut self, available: Size) -> Size {
        Size::new(
            self.width.resolve(available.width, CHART_DEFAULT_WIDTH),
            CHART_HEIGHT,
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let plot = self.plot_area(bounds);
        let max = self.max_value();
        let font = SMALL_FONT_SIZE;

        if let Some(title) = &self.axis_title {
            renderer.text(title, bounds.x, bounds.y, font, Color::TEXT_SECONDARY);
        }

        // Y axis with ticks from zero to the largest value
        renderer.line(plot.x, plot.y, plot.x, plot.bottom(), Color::BORDER, 1.0);
        renderer.line(
            plot.x,
            plot.bottom(),
            plot.right(),
            plot.bottom(),
            Color::BORDER,
            1.0,
        );
        for i in 0..=CHART_TICK_COUNT {
            let fraction = i as f64 / CHART_TICK_COUNT as f64;
            let y = plot.bottom() - plot.height * fraction as f32;
            let label = format!("{} {}", format_number(max * fraction), self.unit.suffix());
            let label_x = plot.x - 6.0 - text_width(&label, font);
            renderer.line(plot.x - 4.0, y, plot.x, y, Color::BORDER, 1.0);
            let label_y = y - line_height(font) / 2.0;
            renderer.text(&label, label_x, label_y, font, Color::TEXT_SECONDARY);
        }

        for (index, (name, _)) in self.points.iter().enumerate() {
            let bar = self.bar_bounds(index, plot, max);
            let fill = if self.state.hovered == Some(index) {
                Color::BAR_BORDER
            } else {
                Color::BAR_FILL
            };
            renderer.fill_rect(bar, fill);
            renderer.stroke_rect(bar, Color::BAR_BORDER, 1.0);
            renderer.text(name, bar.x, plot.bottom() + 4.0, font, Color::TEXT_PRIMARY);
        }

        if let Some(index) = self.state.hovered.filter(|&i| i < self.points.len()) {
            let bar = self.bar_bounds(index, plot, max);
            let label = self.tooltip(index);
            let height = line_height(font) + 6.0;
            let tip = Bounds::new(
                bar.x,
                (bar.y - height - 4.0).max(bounds.y),
                text_width(&label, font) + 8.0,
                height,
            );
            renderer.fill_rect(tip, Color::TOOLTIP_BG);
            renderer.text(&label, tip.x + 4.0, tip.y + 3.0, font, Color::WHITE);
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        match event {
            Event::MouseMove { position, .. } => {
                let hovered = self.bar_at(position.0, position.1, bounds);
                if hovered == self.state.hovered {
                    return None;
                }
                self.state.hovered = hovered;
                self.on_change.call(self.state)
            }
            Event::MousePress {
                button: MouseButton::Left,
                position,
                ..
            } => {
                let index = self.bar_at(position.0, position.1, bounds)?;
                log::debug!("BarChart: clicked bar {} ({})", index, self.points[index].0);
                self.on_bar_click.call(index)
            }
            _ => None,
        }
    }
}

/// Helper function to create a bar chart
pub fn bar_chart<M>(points: Vec<(String, f64)>) -> BarChart<M> {
    BarChart::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyModifiers;

    #[derive(Debug, PartialEq)]
    enum Msg {
        Hover(BarChartState),
        Click(usize),
    }

    fn chart() -> BarChart<Msg> {
        bar_chart(vec![
            ("Asia".to_string(), 4.6),
            ("Europe".to_string(), 0.7),
            ("Oceania".to_string(), 0.0),
        ])
        .unit(Unit::Billions)
        .axis_title("Population (billions)")
        .on_change(Msg::Hover)
        .on_bar_click(Msg::Click)
    }

    const BOUNDS: Bounds = Bounds {
        x: 0.0,
        y: 0.0,
        width: 380.0,
        height: CHART_HEIGHT,
    };

    fn bar_center(chart: &BarChart<Msg>, index: usize) -> (f32, f32) {
        let plot = chart.plot_area(BOUNDS);
        let bar = chart.bar_bounds(index, plot, chart.max_value());
        (bar.x + bar.width / 2.0, plot.bottom() - 1.0)
    }

    #[test]
    fn test_bars_scale_to_maximum() {
        let c = chart();
        let plot = c.plot_area(BOUNDS);
        let tallest = c.bar_bounds(0, plot, c.max_value());
        assert!((tallest.height - plot.height).abs() < 1e-3);
        let empty = c.bar_bounds(2, plot, c.max_value());
        assert_eq!(empty.height, 0.0);
    }

    #[test]
    fn test_axis_and_tick_labels() {
        let c = chart();
        let mut renderer = Renderer::new(380, 320);
        c.draw(&mut renderer, BOUNDS);
        assert!(renderer.find_text("Population (billions)").is_some());
        assert!(renderer.find_text("0 B").is_some());
        assert!(renderer.find_text("4.6 B").is_some());
        assert!(renderer.find_text("Europe").is_some());
    }

    #[test]
    fn test_hover_shows_tooltip() {
        let mut c = chart();
        let (x, y) = bar_center(&c, 1);
        let event = Event::MouseMove {
            position: (x, y),
            modifiers: KeyModifiers::default(),
        };
        let state = match c.on_event(&event, BOUNDS) {
            Some(Msg::Hover(state)) => state,
            other => panic!("expected hover, got {:?}", other),
        };
        assert_eq!(state.hovered, Some(1));

        let hovered = chart().state(&state);
        let mut renderer = Renderer::new(380, 320);
        hovered.draw(&mut renderer, BOUNDS);
        assert!(renderer.find_text("0.7 B inhabitants").is_some());
    }

    #[test]
    fn test_click_reports_index() {
        let mut c = chart();
        let (x, y) = bar_center(&c, 0);
        let event = Event::MousePress {
            button: MouseButton::Left,
            position: (x, y),
            modifiers: KeyModifiers::default(),
        };
        assert_eq!(c.on_event(&event, BOUNDS), Some(Msg::Click(0)));

        let miss = Event::MousePress {
            button: MouseButton::Left,
            position: (5.0, 5.0),
            modifiers: KeyModifiers::default(),
        };
        assert_eq!(c.on_event(&miss, BOUNDS), None);
    }

    #[test]
    fn test_empty_chart_draws_axis_only() {
        let c: BarChart<Msg> = bar_chart(Vec::new());
        let mut renderer = Renderer::new(380, 320);
        c.draw(&mut renderer, BOUNDS);
        assert!(renderer.find_text("0 M").is_some());
    }
}
