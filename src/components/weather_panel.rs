//! The page region the weather renders into.
//!
//! One component, five views: placeholder, loading, report (with forecast
//! cards), the yellow "no data" notice, and the red error notice.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::action::Action;
use crate::component::Component;
use crate::event::EventKind;
use crate::state::{AppState, ForecastDay, Phase, WeatherReport};

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Initial display text, restored by the clear control.
pub const PLACEHOLDER: &str = "Select a city and press Enter to get the weather.";

/// Stand-in for absent report fields.
const NOT_AVAILABLE: &str = "N/A";

pub struct WeatherPanelProps<'a> {
    pub state: &'a AppState,
}

#[derive(Default)]
pub struct WeatherPanel;

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        // Both action controls are disabled while loading; that gate is the
        // widget's only re-entrancy guard.
        if !props.state.controls_enabled() {
            return None;
        }

        let EventKind::Key(key) = event else {
            return None;
        };
        match key.code {
            KeyCode::Char('r') | KeyCode::F(5) => Some(Action::WeatherFetch),
            KeyCode::Char('c') => Some(Action::DisplayClear),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let loading_indicator = if state.phase.is_loading() {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            format!("{spinner} ")
        } else {
            String::new()
        };
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" Weather {loading_indicator}"))
            .title_style(Style::default().fg(Color::Cyan).bold());
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        match &state.phase {
            Phase::Idle => render_centered_note(
                frame,
                inner,
                &[(PLACEHOLDER, Style::default().fg(Color::Gray))],
            ),
            Phase::Loading { .. } => {
                let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
                let line = Line::from(vec![
                    Span::styled(spinner, Style::default().fg(Color::Cyan)),
                    Span::styled(" Fetching weather data...", Style::default().fg(Color::Gray)),
                ])
                .centered();
                frame.render_widget(Paragraph::new(vec![Line::from(""), line]), inner);
            }
            Phase::Ready { city, report } => {
                render_report(frame, inner, &city.to_string(), report);
            }
            Phase::NoData { city } => render_centered_note(
                frame,
                inner,
                &[
                    (
                        &format!("No weather data available for {city}."),
                        Style::default().fg(Color::Yellow).bold(),
                    ),
                    (
                        "The API might not have information for this city.",
                        Style::default().fg(Color::LightYellow),
                    ),
                ],
            ),
            Phase::Failed { message, .. } => render_centered_note(
                frame,
                inner,
                &[
                    (message, Style::default().fg(Color::Red).bold()),
                    (
                        "Please check your internet connection or try again later.",
                        Style::default().fg(Color::LightRed),
                    ),
                    ("", Style::default()),
                    ("Press r to retry.", Style::default().fg(Color::DarkGray)),
                ],
            ),
        }
    }
}

fn render_centered_note(frame: &mut Frame, area: Rect, lines: &[(&str, Style)]) {
    let mut text = vec![Line::from("")];
    text.extend(
        lines
            .iter()
            .map(|(content, style)| Line::styled((*content).to_owned(), *style).centered()),
    );
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), area);
}

fn render_report(frame: &mut Frame, area: Rect, city: &str, report: &WeatherReport) {
    let header = vec![
        Line::styled(
            format!("{city} Weather"),
            Style::default().fg(Color::Cyan).bold(),
        )
        .centered(),
        Line::from(""),
        field_line("Temperature", report.temperature.as_deref()),
        field_line("Wind", report.wind.as_deref()),
        field_line("Description", report.description.as_deref()),
        Line::from(""),
    ];

    let chunks = Layout::vertical([
        Constraint::Length(header.len() as u16),
        Constraint::Min(0),
    ])
    .split(area);

    frame.render_widget(Paragraph::new(header), chunks[0]);
    render_forecast(frame, chunks[1], &report.forecast);
}

fn field_line(label: &str, value: Option<&str>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::Cyan).bold()),
        Span::raw(value.unwrap_or(NOT_AVAILABLE).to_owned()),
    ])
}

fn render_forecast(frame: &mut Frame, area: Rect, forecast: &[ForecastDay]) {
    if forecast.is_empty() {
        frame.render_widget(
            Paragraph::new(
                Line::styled(
                    "No detailed forecast available.",
                    Style::default().fg(Color::Gray),
                )
                .centered(),
            ),
            area,
        );
        return;
    }

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);
    frame.render_widget(
        Paragraph::new(Line::styled(
            "Next 3 Days Forecast:",
            Style::default().fg(Color::Cyan).bold(),
        )),
        chunks[0],
    );

    // One card per entry, side by side, in input order.
    let card_areas =
        Layout::horizontal(vec![Constraint::Ratio(1, forecast.len() as u32); forecast.len()])
            .split(chunks[1]);
    for (day, card_area) in forecast.iter().zip(card_areas.iter().copied()) {
        render_forecast_card(frame, card_area, day);
    }
}

fn render_forecast_card(frame: &mut Frame, area: Rect, day: &ForecastDay) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(format!(" Day {} ", day.day.as_deref().unwrap_or(NOT_AVAILABLE)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        field_line("Temperature", day.temperature.as_deref()),
        field_line("Wind", day.wind.as_deref()),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
