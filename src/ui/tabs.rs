//! Tab bar and the per-tab time-series charts.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Tabs as RataTabs};
use ratatui::Frame;

use crate::modules::dashboard::{Dashboard, TAB_TAX, TAB_UNION, TAB_WEALTH};
use crate::ui::widgets::{TabSpec, TabsState, GROUP_COLORS};
use crate::view;

const DIVIDER: &str = " │ ";

fn tab_title(index: usize, tab: &TabSpec) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}:", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(tab.title),
    ])
}

/// Draw the tab bar above the chart area. With an unregistered active
/// key nothing is highlighted.
pub fn draw_tab_bar(f: &mut Frame, area: Rect, tabs: &TabsState) {
    let titles: Vec<Line> = tabs
        .tabs()
        .iter()
        .enumerate()
        .map(|(index, tab)| tab_title(index, tab))
        .collect();

    let widget = RataTabs::new(titles)
        .style(Style::default().fg(Color::White))
        .divider(DIVIDER);

    let widget = match tabs.selected_index() {
        Some(selected) => widget.select(selected).highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        None => widget,
    };

    f.render_widget(widget, area);
}

/// The tab under a clicked column, mirroring how the Tabs widget lays
/// titles out: one cell of padding around each title and the divider
/// between them.
pub fn tab_at_column(tabs: &TabsState, area: Rect, column: u16) -> Option<usize> {
    let divider_width = DIVIDER.chars().count() as u16;
    let mut x = area.x;
    let count = tabs.tabs().len();
    for (index, tab) in tabs.tabs().iter().enumerate() {
        x = x.saturating_add(1);
        // Shortcut prefix "N:" plus the title text.
        let width = tab.title.chars().count() as u16 + 2;
        if column >= x && column < x.saturating_add(width) {
            return Some(index);
        }
        x = x.saturating_add(width).saturating_add(1);
        if index + 1 < count {
            x = x.saturating_add(divider_width);
        }
    }
    None
}

/// Render whichever chart panel is mounted. Panels for inactive keys
/// are never built; an unregistered active key leaves the area empty.
pub fn draw_active_chart(f: &mut Frame, area: Rect, dashboard: &Dashboard, marker: Marker) {
    let tabs = dashboard.tabs();
    let _ = tabs.content_with(TAB_WEALTH, || draw_wealth_chart(f, area, dashboard, marker));
    let _ = tabs.content_with(TAB_TAX, || draw_tax_chart(f, area, dashboard, marker));
    let _ = tabs.content_with(TAB_UNION, || draw_union_chart(f, area, dashboard, marker));
}

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
}

fn year_axis(dashboard: &Dashboard) -> Axis<'static> {
    let dataset = dashboard.dataset();
    let labels: Vec<Span> = view::tick_years(dataset)
        .into_iter()
        .map(|year| Span::raw(year.to_string()))
        .collect();
    Axis::default()
        .style(Style::default().fg(Color::DarkGray))
        .bounds([
            f64::from(dataset.min_year()),
            f64::from(dataset.max_year()),
        ])
        .labels(labels)
}

fn percent_axis(max: f64, step: f64) -> Axis<'static> {
    let mut labels = Vec::new();
    let mut value = 0.0;
    while value <= max + f64::EPSILON {
        labels.push(Span::raw(format!("{value:.0}")));
        value += step;
    }
    Axis::default()
        .style(Style::default().fg(Color::DarkGray))
        .bounds([0.0, max])
        .labels(labels)
}

fn draw_wealth_chart(f: &mut Frame, area: Rect, dashboard: &Dashboard, marker: Marker) {
    let bands = view::stacked_wealth_series(dashboard.dataset());
    let names = ["Top 1%", "Next 9%", "Next 40%", "Bottom 50%"];

    let datasets: Vec<Dataset> = bands
        .iter()
        .zip(names.iter().zip(GROUP_COLORS.iter()))
        .map(|(points, (name, color))| {
            Dataset::default()
                .name(*name)
                .marker(marker)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(chart_block("Wealth Distribution Trends (1925-2025)"))
        .x_axis(year_axis(dashboard))
        .y_axis(percent_axis(view::WEALTH_AXIS_MAX, 25.0));

    f.render_widget(chart, area);
}

fn draw_tax_chart(f: &mut Frame, area: Rect, dashboard: &Dashboard, marker: Marker) {
    let points = view::series(dashboard.dataset(), |r| r.top_tax_rate);
    let datasets = vec![Dataset::default()
        .name("Top Marginal Tax Rate")
        .marker(marker)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::LightMagenta))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(chart_block("Top Marginal Tax Rates (1925-2025)"))
        .x_axis(year_axis(dashboard))
        .y_axis(percent_axis(view::TAX_AXIS_MAX, 25.0));

    f.render_widget(chart, area);
}

fn draw_union_chart(f: &mut Frame, area: Rect, dashboard: &Dashboard, marker: Marker) {
    let points = view::series(dashboard.dataset(), |r| r.union_rate);
    let datasets = vec![Dataset::default()
        .name("Union Membership Rate")
        .marker(marker)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::LightBlue))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(chart_block("Union Membership Rates (1925-2025)"))
        .x_axis(year_axis(dashboard))
        .y_axis(percent_axis(view::UNION_AXIS_MAX, 10.0));

    f.render_widget(chart, area);
}
