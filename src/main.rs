use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use millonario::{DEFAULT_LOG_FILE, DEFAULT_QUESTIONS_PATH, Quiz, Settings};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Directory holding correcto.mp3, incorrecto.mp3 and fin_juego.mp3
    #[arg(short, long, default_value = ".")]
    sounds_dir: PathBuf,

    /// Play without sound
    #[arg(long)]
    mute: bool,

    /// How long answer feedback stays on screen, in milliseconds
    #[arg(long, default_value_t = 900)]
    delay_ms: u64,

    /// Seed for the question order
    #[arg(long)]
    seed: Option<u64>,

    /// File that receives diagnostic logs
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            questions_path: self.questions.clone(),
            sounds_dir: self.sounds_dir.clone(),
            sound_enabled: !self.mute,
            feedback_delay: Duration::from_millis(self.delay_ms),
            seed: self.seed,
        }
    }
}

// The terminal belongs to the game, so logs go to a file.
fn init_logging(path: &Path) {
    let file = match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled, cannot open {}: {}", path.display(), e);
            return;
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "millonario=info".into()))
        .init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&args.log_file);

    let quiz = Quiz::from_settings(&args.settings());

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
