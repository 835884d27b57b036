use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::{GOLD, ScreenLayout};
use crate::app::{App, Feedback};
use crate::models::Question;

const OPTION_BG: Color = Color::Rgb(0x0b, 0x1d, 0x5b);
const SUCCESS: Color = Color::Rgb(0x00, 0xd0, 0x84);
const FAILURE: Color = Color::Rgb(0xff, 0x68, 0x68);

pub fn render(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let snapshot = app.snapshot();

    render_title(frame, layout.title);
    if let Some(question) = app.displayed_question() {
        render_prompt(frame, layout.prompt, &question.prompt);
        render_options(frame, &layout.options, question, app.options_enabled());
    }
    if let Some(feedback) = app.feedback() {
        render_feedback(frame, layout.feedback, feedback);
    }
    render_score(frame, layout.score, snapshot.score, app.displayed_index(), snapshot.total);
    if app.replay_visible() {
        render_replay(frame, layout.replay);
    }
    render_controls(frame, layout.controls, app.replay_visible());
}

fn render_title(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("¿QUIÉN QUIERE SER MILLONARIO?")
        .alignment(Alignment::Center)
        .style(Style::default().fg(GOLD).bold())
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, areas: &[Rect; 4], question: &Question, enabled: bool) {
    let (text, border) = if enabled {
        (Style::default().fg(Color::White).bg(OPTION_BG).bold(), Color::Cyan)
    } else {
        (Style::default().fg(Color::DarkGray).bg(OPTION_BG), Color::DarkGray)
    };

    for (area, option) in areas.iter().zip(question.options.iter()) {
        let widget = Paragraph::new(option.as_str())
            .alignment(Alignment::Center)
            .style(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border)),
            );
        frame.render_widget(widget, *area);
    }
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: Feedback) {
    let color = if feedback.is_success() { SUCCESS } else { FAILURE };
    let widget = Paragraph::new(feedback.text())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).bold());
    frame.render_widget(widget, area);
}

fn render_score(frame: &mut Frame, area: Rect, score: u32, index: usize, total: usize) {
    let number = (index + 1).min(total);
    let line = Line::from(vec![
        Span::styled(format!("Puntos: {score}"), Style::default().fg(GOLD).bold()),
        Span::styled(
            format!("   ·   Pregunta {number} de {total}"),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_replay(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("🔄 Volver a jugar")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(Color::Green).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, replay_visible: bool) {
    let hint = if replay_visible {
        "r volver a jugar  ·  esc salir"
    } else {
        "a/b/c/d responder  ·  esc salir"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
