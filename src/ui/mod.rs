use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod tabs;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel};
use crate::view;
use widgets::{PieChart, SliderTrack, GROUP_COLORS};

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    draw_slider(f, areas.slider, app);
    draw_pie_card(f, areas.pie_card, app);
    draw_indicators_card(f, areas.indicators_card, app);
    tabs::draw_tab_bar(f, areas.tab_bar, app.dashboard.tabs());
    tabs::draw_active_chart(f, areas.chart, &app.dashboard, app.marker);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size);
    }
}

fn card_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "Wealthscope",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "U.S. Wealth Distribution & Economic Metrics",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let right_line = Line::from(vec![
        Span::styled("Range ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(
            "{} - {}  ",
            app.dashboard.dataset().min_year(),
            app.dashboard.dataset().max_year()
        )),
        Span::styled("Year ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.dashboard.selected_year().to_string()),
    ]);
    let right = Paragraph::new(right_line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_slider(f: &mut Frame, area: Rect, app: &App) {
    let block = card_block(format!("Select Year: {}", app.dashboard.selected_year()));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(SliderTrack::new(app.dashboard.slider()), inner);
}

fn draw_pie_card(f: &mut Frame, area: Rect, app: &App) {
    let record = app.dashboard.resolved();
    let block = card_block(format!("Wealth Distribution in {}", record.year));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let description = Paragraph::new(Span::styled(
        "Percentage of total wealth held by each group",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(description, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let slices = view::pie_slices(record);
    f.render_widget(PieChart::new(&slices).colors(&GROUP_COLORS), body[0]);

    let legend: Vec<Line> = slices
        .iter()
        .zip(GROUP_COLORS.iter())
        .map(|(slice, color)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(*color)),
                Span::raw(slice.name),
                Span::raw(format!("  {}", view::format_percent(slice.value))),
            ])
        })
        .collect();
    let legend = Paragraph::new(Text::from(legend)).alignment(Alignment::Left);
    f.render_widget(legend, body[1]);
}

fn draw_indicators_card(f: &mut Frame, area: Rect, app: &App) {
    let record = app.dashboard.resolved();
    let block = card_block(format!("Key Economic Indicators in {}", record.year));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let description = Paragraph::new(Span::styled(
        "Tax rates and union membership",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(description, rows[0]);

    f.render_widget(heading("Top Marginal Tax Rate"), rows[2]);
    let tax = Gauge::default()
        .gauge_style(Style::default().fg(Color::LightMagenta))
        .ratio(view::tax_gauge_ratio(record))
        .label(view::format_percent(record.top_tax_rate));
    f.render_widget(tax, rows[3]);

    f.render_widget(heading("Union Membership"), rows[5]);
    let union = Gauge::default()
        .gauge_style(Style::default().fg(Color::LightBlue))
        .ratio(view::union_gauge_ratio(record))
        .label(view::format_percent(record.union_rate));
    f.render_widget(union, rows[6]);

    f.render_widget(heading("Wealth Tax Status"), rows[8]);
    let (status, in_effect) = view::wealth_tax_status(record);
    let color = if in_effect {
        Color::LightGreen
    } else {
        Color::LightRed
    };
    let status = Paragraph::new(Span::styled(status, Style::default().fg(color)));
    f.render_widget(status, rows[9]);
}

fn heading(text: &str) -> Paragraph<'_> {
    Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let tabs = app.dashboard.tabs();
    let chart = tabs
        .selected_index()
        .map(|idx| tabs.tabs()[idx].title.to_string())
        .unwrap_or_else(|| format!("({})", tabs.active()));

    let line = Line::from(vec![
        Span::styled("Year ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.dashboard.selected_year())),
        Span::styled("Record ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.dashboard.resolved().year)),
        Span::styled("Chart ", Style::default().fg(Color::DarkGray)),
        Span::raw(chart),
    ]);

    let paragraph = Paragraph::new(line)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("year", "Jump to a year, e.g. year 1968"),
        ("yr", "Jump to a year"),
        ("tab", "Switch chart: wealth-over-time | tax-rates | union-membership"),
        ("copy", "Copy the year summary"),
        ("quit", "Exit"),
    ];

    for (cmd, desc) in commands {
        if cmd.starts_with(&input) {
            return Some(desc);
        }
    }
    None
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input);
            let hint_text = hint.unwrap_or("commands: year N | tab KEY | copy | quit");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(&app.command.input),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text, Style::default().fg(color)),
                ])
            } else {
                action_hints()
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints() -> Line<'static> {
    Line::from(vec![
        Span::styled("←/→", Style::default().fg(Color::LightCyan)),
        Span::raw(" Year  "),
        Span::styled("Shift+←/→", Style::default().fg(Color::LightCyan)),
        Span::raw(" ±10  "),
        Span::styled("Tab", Style::default().fg(Color::LightCyan)),
        Span::raw(" Chart  "),
        Span::styled("1-3", Style::default().fg(Color::LightCyan)),
        Span::raw(" Chart  "),
        Span::styled("/", Style::default().fg(Color::LightCyan)),
        Span::raw(" Command  "),
        Span::styled("y", Style::default().fg(Color::LightCyan)),
        Span::raw(" Copy  "),
        Span::styled("?", Style::default().fg(Color::LightCyan)),
        Span::raw(" Help  "),
        Span::styled("q", Style::default().fg(Color::LightCyan)),
        Span::raw(" Quit"),
    ])
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(72, 64, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Year selection"),
        Line::from("  Left / Right   Step one year (h / l)"),
        Line::from("  Shift+arrows   Step ten years (H / L)"),
        Line::from("  Home / End     First / last year (g / G)"),
        Line::from("  Mouse          Click or drag the slider, wheel steps"),
        Line::from(""),
        Line::from("Charts"),
        Line::from("  Tab / ]        Next chart"),
        Line::from("  Shift+Tab / [  Previous chart"),
        Line::from("  1-3            Jump to chart"),
        Line::from("  Click          Select a tab"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  /              Command mode (year N, tab KEY, copy, quit)"),
        Line::from("  y              Copy the selected year summary"),
        Line::from("  ?              Toggle help"),
        Line::from("  q              Quit"),
        Line::from(""),
        Line::from("Data notes"),
        Line::from(
            "  Data is compiled from multiple historical sources including the \
             Federal Reserve, IRS, Bureau of Labor Statistics, and academic \
             research. Some data points are interpolated between available years.",
        ),
        Line::from(""),
        Line::from(
            "  The wealth tax status indicates the presence of significant federal \
             estate/inheritance taxes, not direct wealth taxation which has not \
             been implemented at the federal level in the US.",
        ),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
