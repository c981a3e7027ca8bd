use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::domain::models::Field;
use crate::tui::app::App;

const GREEN: Color = Color::Rgb(0x6e, 0xd4, 0x6e);
const ORANGE: Color = Color::Rgb(0xff, 0xa5, 0x00);
const RED: Color = Color::Rgb(0xff, 0x6b, 0x6b);

/// Three-way banner rule: green for a result naming "Normal", orange for
/// "Anormal", red for everything else (validation and error messages).
/// Case-sensitive: "Anormal" must not satisfy the "Normal" scan.
pub fn banner_color(result: &str) -> Color {
    if result.contains("Normal") {
        GREEN
    } else if result.contains("Anormal") {
        ORANGE
    } else {
        RED
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(Field::ALL.len() as u16 + 2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("Spine Risk Analysis")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    draw_fields(f, chunks[1], app);
    draw_submit(f, chunks[2]);
    draw_status(f, chunks[3], app);
    draw_banner(f, chunks[4], app);

    let help = Paragraph::new("Tab: next field | Shift+Tab: previous | Enter: compute | Esc: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[6]);
}

fn draw_fields(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        let focused = app.focus == field;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value = app.form.value(field);

        let mut spans = vec![
            Span::raw(marker),
            Span::styled(format!("{:<25}", field.label()), label_style),
        ];
        if value.is_empty() && !focused {
            spans.push(Span::styled(
                field.placeholder(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::styled(
                value.to_string(),
                Style::default().fg(Color::Yellow),
            ));
        }
        if focused {
            // Block cursor after the entry.
            spans.push(Span::styled(" ", Style::default().bg(Color::Yellow)));
        }
        lines.push(Line::from(spans));
    }

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Measurements"),
    );
    f.render_widget(form, area);
}

fn draw_submit(f: &mut Frame, area: Rect) {
    let button = Paragraph::new(Line::from(Span::styled(
        "[ Compute Prediction ]",
        Style::default()
            .fg(Color::White)
            .bg(RED)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(button, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    if app.pending {
        let notice = Paragraph::new("Consulting the prediction service...")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(notice, area);
    }
}

fn draw_banner(f: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.result.as_deref() else {
        return;
    };
    let banner = Paragraph::new(vec![Line::raw(""), Line::from(result.to_string())])
        .style(
            Style::default()
                .fg(Color::White)
                .bg(banner_color(result))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(banner, area);
}
