//! # millonario
//!
//! A terminal trivia game in the style of "¿Quién quiere ser millonario?".
//!
//! ## Usage
//!
//! ```rust,no_run
//! use millonario::{Quiz, QuizError, Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Questions come from preguntas.json, sounds from the working directory
//!     let quiz = Quiz::from_settings(&Settings::default());
//!
//!     // Run the game in the terminal
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod audio;
mod config;
mod data;
mod game;
mod models;
pub mod terminal;
mod timer;
mod ui;

use std::future;
use std::io;
use std::time::Instant;

use crossterm::event::EventStream;
use futures_util::StreamExt;
use tracing::info;

pub use app::{App, EndDialog, Feedback, Transition};
pub use config::{DEFAULT_FEEDBACK_DELAY, DEFAULT_LOG_FILE, Settings};
pub use data::{
    DEFAULT_QUESTIONS_PATH, LoadError, fallback_question, load_or_fallback,
    load_questions_from_path, parse_questions,
};
pub use game::{AnswerOutcome, GamePhase, GameSnapshot, GameState, SCORE_AWARD};
pub use models::{InvalidQuestion, LETTERS, Letter, Question};
pub use timer::OneShot;
pub use ui::ScreenLayout;

/// Error type for quiz operations.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// Terminal IO failed while running the game.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz session that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Wrap an already configured app.
    pub fn new(app: App) -> Self {
        Self { app }
    }

    /// Load questions and sounds as described by `settings`.
    ///
    /// Never fails: missing questions fall back to the built-in one and
    /// missing audio leaves the game silent.
    pub fn from_settings(settings: &Settings) -> Self {
        info!(
            questions = %settings.questions_path.display(),
            sounds = %settings.sounds_dir.display(),
            "starting quiz"
        );
        let questions = load_or_fallback(&settings.questions_path);
        let audio = audio::init(&settings.sounds_dir, settings.sound_enabled);
        Self::new(App::new(questions, audio, settings))
    }

    /// Run the game in the terminal.
    ///
    /// This will take over the terminal and return when the player closes
    /// the window with Esc or Ctrl+C.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app).await;
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
) -> Result<(), QuizError> {
    let mut events = EventStream::new();

    while !app.should_quit() {
        let frame = terminal.draw(|frame| ui::render(frame, app))?;
        app.set_viewport(frame.area);

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(event)) => app.handle_event(event, Instant::now()),
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            () = sleep_until(app.next_deadline()) => app.fire_due(Instant::now()),
        }
    }

    Ok(())
}

/// Wait for the pending transition, or forever when none is scheduled.
async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
        None => future::pending().await,
    }
}
