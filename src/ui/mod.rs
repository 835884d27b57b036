mod board;
mod dialog;
mod layout;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;

pub use layout::ScreenLayout;

pub const GOLD: Color = Color::Rgb(255, 215, 0);

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Black), area);

    let layout = ScreenLayout::new(area);
    board::render(frame, &layout, app);

    if let Some(end) = app.dialog() {
        dialog::render(frame, layout.dialog, end);
    }
}
