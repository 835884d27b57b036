mod loader;

pub use loader::{
    DEFAULT_QUESTIONS_PATH, LoadError, fallback_question, load_or_fallback,
    load_questions_from_path, parse_questions,
};
