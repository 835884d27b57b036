use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use super::GOLD;
use crate::app::EndDialog;

/// Modal end-of-game summary drawn over the board.
pub fn render(frame: &mut Frame, area: Rect, end: &EndDialog) {
    let accent = if end.won { GOLD } else { Color::Red };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            end.message(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Aceptar",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(format!(" {} ", end.title()))
            .title_style(Style::default().fg(accent).bold())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}
