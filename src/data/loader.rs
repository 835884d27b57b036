use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::models::{Letter, Question, RawQuestion};

pub const DEFAULT_QUESTIONS_PATH: &str = "preguntas.json";

/// Error reading or parsing a question file as a whole.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse question file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question file must contain a JSON array")]
    NotAList,
}

/// The built-in question used when no valid question could be loaded.
pub fn fallback_question() -> Question {
    Question::new(
        "¿Capital de Colombia?",
        ["A) Bogotá", "B) Lima", "C) Quito", "D) Caracas"],
        Letter::A,
    )
}

/// Load the valid questions from `path`, in file order.
///
/// Never fails: an unreadable or malformed file yields an empty vector and a
/// logged warning.
pub fn load_questions_from_path<P: AsRef<Path>>(path: P) -> Vec<Question> {
    let path = path.as_ref();

    match read_questions(path) {
        Ok(questions) => {
            info!(path = %path.display(), count = questions.len(), "loaded questions");
            questions
        }
        Err(err) => {
            warn!(path = %path.display(), "{err}");
            Vec::new()
        }
    }
}

/// Like [`load_questions_from_path`], substituting the fallback question when
/// nothing usable was loaded.
pub fn load_or_fallback<P: AsRef<Path>>(path: P) -> Vec<Question> {
    let questions = load_questions_from_path(path);
    if questions.is_empty() {
        info!("no valid questions, using the built-in fallback");
        vec![fallback_question()]
    } else {
        questions
    }
}

fn read_questions(path: &Path) -> Result<Vec<Question>, LoadError> {
    let json_content = fs::read_to_string(path)?;
    parse_questions(&json_content)
}

/// Parse a JSON array of question records, dropping invalid records.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let Value::Array(records) = serde_json::from_str::<Value>(json)? else {
        return Err(LoadError::NotAList);
    };

    let questions = records
        .into_iter()
        .enumerate()
        .filter_map(|(position, record)| match parse_record(record) {
            Ok(question) => Some(question),
            Err(reason) => {
                debug!(position, %reason, "dropping question record");
                None
            }
        })
        .collect();

    Ok(questions)
}

fn parse_record(record: Value) -> Result<Question, String> {
    let raw: RawQuestion = serde_json::from_value(record).map_err(|err| err.to_string())?;
    Question::try_from(raw).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const TWO_PLUS_TWO: &str =
        r#"{"pregunta":"2+2?","opciones":["A) 3","B) 4","C) 5","D) 6"],"respuesta":"B"}"#;

    #[test]
    fn test_parse_keeps_file_order() {
        let json = r#"[
            {"pregunta":"uno","opciones":["A) 1","B) 2","C) 3","D) 4"],"respuesta":"a"},
            {"pregunta":"dos","opciones":["A) 1","B) 2","C) 3","D) 4"],"respuesta":" d "}
        ]"#;
        let questions = parse_questions(json).unwrap();
        let prompts: Vec<&str> = questions.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, ["uno", "dos"]);
        assert_eq!(questions[1].answer, Letter::D);
    }

    #[test]
    fn test_parse_drops_incomplete_records() {
        let json = format!(
            r#"[
                {TWO_PLUS_TWO},
                {{"pregunta":"sin respuesta","opciones":["A) 1","B) 2","C) 3","D) 4"]}},
                {{"pregunta":"pocas","opciones":["A) 1","B) 2","C) 3"],"respuesta":"A"}},
                {{"opciones":["A) 1","B) 2","C) 3","D) 4"],"respuesta":"A"}},
                {{"pregunta":"mala","opciones":["A) 1","B) 2","C) 3","D) 4"],"respuesta":"Z"}},
                "not an object",
                42
            ]"#
        );
        let questions = parse_questions(&json).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "2+2?");
    }

    #[test]
    fn test_parse_accepts_english_keys() {
        let json = r#"[{"prompt":"2+2?","options":["A) 3","B) 4","C) 5","D) 6"],"answer":"B"}]"#;
        let questions = parse_questions(json).unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(matches!(
            parse_questions(TWO_PLUS_TWO),
            Err(LoadError::NotAList)
        ));
        assert!(matches!(parse_questions("{ broken"), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let questions = load_questions_from_path(dir.path().join("preguntas.json"));
        assert!(questions.is_empty());
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"pregunta\": ").unwrap();

        let questions = load_or_fallback(file.path());
        assert_eq!(questions, vec![fallback_question()]);
    }

    #[test]
    fn test_empty_array_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        let questions = load_or_fallback(file.path());
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options[0], "A) Bogotá");
    }

    #[test]
    fn test_valid_file_loads_without_fallback() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{TWO_PLUS_TWO}]").unwrap();

        let questions = load_or_fallback(file.path());
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "2+2?");
    }
}
