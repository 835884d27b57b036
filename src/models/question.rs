use std::fmt;

use serde::Deserialize;

/// Labels of the four answer buttons, in display order.
pub const LETTERS: [Letter; 4] = [Letter::A, Letter::B, Letter::C, Letter::D];

/// One of the four answer labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    A,
    B,
    C,
    D,
}

impl Letter {
    /// Parse a letter, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let letter = Self::from_char(chars.next()?)?;
        chars.next().is_none().then_some(letter)
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        LETTERS.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A validated quiz item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: [String; 4],
    pub answer: Letter,
}

impl Question {
    pub fn new(prompt: impl Into<String>, options: [&str; 4], answer: Letter) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.map(String::from),
            answer,
        }
    }

    /// Whether `letter` is the correct answer.
    pub fn is_correct(&self, letter: Letter) -> bool {
        self.answer == letter
    }
}

/// A question record as it appears in the JSON file.
#[derive(Debug, Deserialize)]
pub struct RawQuestion {
    #[serde(alias = "prompt")]
    pub pregunta: String,
    #[serde(alias = "options")]
    pub opciones: Vec<String>,
    #[serde(alias = "answer")]
    pub respuesta: String,
}

/// Why a raw record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidQuestion {
    #[error("expected 4 options, found {0}")]
    OptionCount(usize),
    #[error("answer {0:?} is not one of A, B, C, D")]
    Answer(String),
}

impl TryFrom<RawQuestion> for Question {
    type Error = InvalidQuestion;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let answer =
            Letter::parse(&raw.respuesta).ok_or_else(|| InvalidQuestion::Answer(raw.respuesta))?;
        let count = raw.opciones.len();
        let options: [String; 4] = raw
            .opciones
            .try_into()
            .map_err(|_| InvalidQuestion::OptionCount(count))?;

        Ok(Self {
            prompt: raw.pregunta,
            options,
            answer,
        })
    }
}
