use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

use crate::audio::{Cue, CuePlayer};
use crate::config::Settings;
use crate::game::{AnswerOutcome, GamePhase, GameSnapshot, GameState, SCORE_AWARD};
use crate::models::{LETTERS, Letter, Question};
use crate::timer::OneShot;
use crate::ui::ScreenLayout;

/// A transition deferred until the feedback delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    NextQuestion,
    EndGame,
}

/// Transient result line shown under the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { correct: Letter },
}

impl Feedback {
    pub fn text(self) -> String {
        match self {
            Self::Correct => format!("✅ ¡Correcto! +{SCORE_AWARD}"),
            Self::Incorrect { correct } => format!("❌ Incorrecto. Era {correct}"),
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// The blocking end-of-game summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndDialog {
    pub won: bool,
    pub score: u32,
}

impl EndDialog {
    pub fn title(&self) -> &'static str {
        if self.won { "🎉 ¡Ganaste!" } else { "Juego terminado" }
    }

    pub fn message(&self) -> String {
        format!("Puntaje final: {}", self.score)
    }
}

/// Owns the game and turns input and timer events into transitions.
pub struct App {
    game: GameState,
    audio: Box<dyn CuePlayer>,
    timer: OneShot<Transition>,
    rng: StdRng,
    feedback_delay: Duration,
    feedback: Option<Feedback>,
    dialog: Option<EndDialog>,
    replay_visible: bool,
    viewport: Rect,
    should_quit: bool,
}

impl App {
    /// Build a session over `questions`, shuffled once up front.
    pub fn new(questions: Vec<Question>, audio: Box<dyn CuePlayer>, settings: &Settings) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let game = GameState::shuffled(questions, &mut rng);

        Self {
            game,
            audio,
            timer: OneShot::new(),
            rng,
            feedback_delay: settings.feedback_delay,
            feedback: None,
            dialog: None,
            replay_visible: false,
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.game.current_question()
    }

    /// Index of the question on the board. During the feedback pause and
    /// after a win this is the one just answered, not the next one.
    pub fn displayed_index(&self) -> usize {
        match self.game.phase() {
            GamePhase::Advancing | GamePhase::Won => self.game.index().saturating_sub(1),
            GamePhase::AwaitingAnswer | GamePhase::Lost => self.game.index(),
        }
    }

    pub fn displayed_question(&self) -> Option<&Question> {
        self.game.questions().get(self.displayed_index())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn dialog(&self) -> Option<&EndDialog> {
        self.dialog.as_ref()
    }

    pub fn replay_visible(&self) -> bool {
        self.replay_visible
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Option buttons accept input only while an answer is awaited.
    pub fn options_enabled(&self) -> bool {
        self.dialog.is_none() && self.game.phase() == GamePhase::AwaitingAnswer
    }

    /// When the pending transition is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Record the area the last frame was drawn into, for mouse hit-testing.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Esc => self.quit(),
            KeyCode::Enter | KeyCode::Char(' ') => self.dismiss_dialog(),
            KeyCode::Char('r' | 'R') => self.restart(),
            KeyCode::Char(c) => {
                if let Some(letter) = Letter::from_char(c) {
                    self.select(letter, now);
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);
        let layout = ScreenLayout::new(self.viewport);

        if self.dialog.is_some() {
            if layout.dialog.contains(position) {
                self.dismiss_dialog();
            }
            return;
        }

        if self.replay_visible && layout.replay.contains(position) {
            self.restart();
            return;
        }

        let clicked = layout
            .options
            .iter()
            .zip(LETTERS)
            .find(|(area, _)| area.contains(position));
        if let Some((_, letter)) = clicked {
            self.select(letter, now);
        }
    }

    /// Submit `letter` for the current question.
    pub fn select(&mut self, letter: Letter, now: Instant) {
        if !self.options_enabled() {
            return;
        }
        let Some(outcome) = self.game.submit_answer(letter) else {
            return;
        };

        match outcome {
            AnswerOutcome::Correct { last } => {
                self.audio.play(Cue::Correct);
                self.feedback = Some(Feedback::Correct);
                let transition = if last {
                    Transition::EndGame
                } else {
                    Transition::NextQuestion
                };
                self.timer.schedule(now, self.feedback_delay, transition);
            }
            AnswerOutcome::Incorrect { correct } => {
                self.audio.play(Cue::Incorrect);
                self.feedback = Some(Feedback::Incorrect { correct });
                self.timer
                    .schedule(now, self.feedback_delay, Transition::EndGame);
            }
        }
    }

    /// Run the pending transition if its delay has elapsed.
    pub fn fire_due(&mut self, now: Instant) {
        let Some(transition) = self.timer.take_due(now) else {
            return;
        };
        debug!(?transition, "delayed transition");

        match transition {
            Transition::NextQuestion => {
                self.game.advance();
                self.feedback = None;
            }
            Transition::EndGame => self.end_game(),
        }
    }

    fn end_game(&mut self) {
        let won = self.game.phase() == GamePhase::Won;
        self.audio
            .play(if won { Cue::GameOver } else { Cue::Incorrect });
        let dialog = EndDialog {
            won,
            score: self.game.score(),
        };
        info!(won, score = dialog.score, "game over");
        self.dialog = Some(dialog);
    }

    /// Close the end-of-game dialog and reveal the replay control.
    pub fn dismiss_dialog(&mut self) {
        if self.dialog.take().is_some() {
            self.replay_visible = true;
        }
    }

    /// Start over with a reshuffled set. Only available once the replay
    /// control is visible.
    pub fn restart(&mut self) {
        if !self.replay_visible {
            return;
        }
        self.timer.cancel();
        self.game.reset(&mut self.rng);
        self.feedback = None;
        self.replay_visible = false;
        info!("new game");
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
