use std::path::PathBuf;
use std::time::Duration;

use crate::data::DEFAULT_QUESTIONS_PATH;

/// How long answer feedback stays on screen before the next transition.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(900);

pub const DEFAULT_LOG_FILE: &str = "millonario.log";

/// Runtime settings for a quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// JSON file holding the question records.
    pub questions_path: PathBuf,
    /// Directory containing the cue sound files.
    pub sounds_dir: PathBuf,
    pub sound_enabled: bool,
    pub feedback_delay: Duration,
    /// Fixed seed for the question shuffle; random when unset.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            questions_path: PathBuf::from(DEFAULT_QUESTIONS_PATH),
            sounds_dir: PathBuf::from("."),
            sound_enabled: true,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            seed: None,
        }
    }
}
