use ratatui::prelude::*;

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 7;
const REPLAY_WIDTH: u16 = 26;

/// Screen regions shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub prompt: Rect,
    /// Option buttons in A, B, C, D order.
    pub options: [Rect; 4],
    pub feedback: Rect,
    pub score: Rect,
    pub replay: Rect,
    pub controls: Rect,
    pub dialog: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Prompt
            Constraint::Length(7), // Options grid
            Constraint::Length(2), // Feedback
            Constraint::Length(1), // Score
            Constraint::Length(1),
            Constraint::Length(3), // Replay
            Constraint::Fill(1),
            Constraint::Length(1), // Controls
        ])
        .margin(1)
        .split(area);

        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(chunks[2]);
        let columns = |row: Rect| {
            Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(2),
                Constraint::Fill(1),
            ])
            .split(row)
        };
        let top = columns(rows[0]);
        let bottom = columns(rows[2]);

        Self {
            title: chunks[0],
            prompt: chunks[1],
            options: [top[0], top[2], bottom[0], bottom[2]],
            feedback: chunks[3],
            score: chunks[4],
            replay: centered(chunks[6], REPLAY_WIDTH, chunks[6].height),
            controls: chunks[8],
            dialog: centered(area, DIALOG_WIDTH, DIALOG_HEIGHT),
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
