//! Quiz progression: score, position in the question set and phase.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::models::{Letter, Question};

/// Points awarded for each correct answer.
pub const SCORE_AWARD: u32 = 100;

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Options are enabled and an answer is expected.
    AwaitingAnswer,
    /// A correct answer is being shown before the next question.
    Advancing,
    /// Every question was answered correctly.
    Won,
    /// A wrong answer ended the game.
    Lost,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// `last` is set when the answered question closed the set.
    Correct { last: bool },
    Incorrect { correct: Letter },
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub score: u32,
    pub index: usize,
    pub total: usize,
    pub phase: GamePhase,
}

pub struct GameState {
    questions: Vec<Question>,
    score: u32,
    index: usize,
    phase: GamePhase,
}

impl GameState {
    /// Start a game over `questions` in the given order.
    ///
    /// The caller guarantees the set is non-empty (see
    /// [`crate::data::load_or_fallback`]).
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            score: 0,
            index: 0,
            phase: GamePhase::AwaitingAnswer,
        }
    }

    /// Start a game over a shuffled copy of `questions`.
    pub fn shuffled<R: Rng + ?Sized>(questions: Vec<Question>, rng: &mut R) -> Self {
        let mut game = Self::new(questions);
        game.questions.shuffle(rng);
        game
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            score: self.score,
            index: self.index,
            total: self.questions.len(),
            phase: self.phase,
        }
    }

    /// Answer the current question.
    ///
    /// Returns `None` without touching any state unless the game is waiting
    /// for an answer.
    pub fn submit_answer(&mut self, letter: Letter) -> Option<AnswerOutcome> {
        if self.phase != GamePhase::AwaitingAnswer {
            return None;
        }
        let question = self.current_question()?;

        if question.is_correct(letter) {
            self.score += SCORE_AWARD;
            self.index += 1;
            let last = self.index >= self.questions.len();
            self.phase = if last {
                GamePhase::Won
            } else {
                GamePhase::Advancing
            };
            debug!(%letter, score = self.score, last, "correct answer");
            Some(AnswerOutcome::Correct { last })
        } else {
            let correct = question.answer;
            self.phase = GamePhase::Lost;
            debug!(%letter, %correct, score = self.score, "wrong answer");
            Some(AnswerOutcome::Incorrect { correct })
        }
    }

    /// Leave the feedback pause and show the next question.
    pub fn advance(&mut self) {
        if self.phase != GamePhase::Advancing {
            return;
        }
        self.phase = if self.index >= self.questions.len() {
            GamePhase::Won
        } else {
            GamePhase::AwaitingAnswer
        };
    }

    /// Zero the score, rewind and reshuffle the whole set.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.score = 0;
        self.index = 0;
        self.phase = GamePhase::AwaitingAnswer;
        self.questions.shuffle(rng);
    }
}
