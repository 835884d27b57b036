mod question;

pub use question::{InvalidQuestion, LETTERS, Letter, Question, RawQuestion};
