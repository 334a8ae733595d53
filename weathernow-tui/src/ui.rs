use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use weathernow_core::CurrentWeather;

use crate::app::App;

pub fn render(app: &App, frame: &mut Frame) {
    let [header_area, input_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header_area);
    render_input(app, frame, input_area);

    // The error line and the result panel are mutually exclusive: applying a
    // finished lookup always clears the other one.
    if let Some(error) = &app.error {
        render_error(error, frame, body_area);
    } else if let Some(weather) = &app.weather {
        render_weather(weather, frame, body_area);
    }

    render_footer(frame, footer_area);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" WeatherNow ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(title), area);
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let input = Paragraph::new(app.input.as_str())
        .block(Block::default().borders(Borders::ALL).title(" Enter city name "));

    frame.render_widget(input, area);

    // Place the cursor after the typed text, inside the borders.
    let x = area.x + 1 + app.input.chars().count().min(area.width.saturating_sub(2) as usize) as u16;
    frame.set_cursor_position((x, area.y + 1));
}

fn render_error(error: &str, frame: &mut Frame, area: Rect) {
    let message = Paragraph::new(error).style(Style::default().fg(Color::Red));

    frame.render_widget(message, area);
}

fn render_weather(weather: &CurrentWeather, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(format!("Temperature: {:.1}°C", weather.temperature_c)),
        Line::from(format!("Weather: {}", weather.condition)),
        Line::from(format!("Humidity: {}%", weather.humidity_pct)),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", weather.location_name)),
    );

    frame.render_widget(panel, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" Enter ", Style::default().fg(Color::Cyan)),
        Span::raw("search  "),
        Span::styled("Esc ", Style::default().fg(Color::Cyan)),
        Span::raw("quit"),
    ]);

    frame.render_widget(Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)), area);
}
