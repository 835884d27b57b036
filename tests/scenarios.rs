use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use std::time::{Duration, Instant};

use millonario::audio::{Cue, CuePlayer};
use millonario::{App, Feedback, GamePhase, Letter, Settings, load_or_fallback};
use tempfile::NamedTempFile;

const TWO_PLUS_TWO: &str =
    r#"[{"pregunta":"2+2?","opciones":["A) 3","B) 4","C) 5","D) 6"],"respuesta":"B"}]"#;

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<Cue>>>);

impl CuePlayer for Recorder {
    fn play(&self, cue: Cue) {
        self.0.borrow_mut().push(cue);
    }
}

fn question_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn start(settings: &Settings) -> (App, Recorder) {
    let recorder = Recorder::default();
    let questions = load_or_fallback(&settings.questions_path);
    let app = App::new(questions, Box::new(recorder.clone()), settings);
    (app, recorder)
}

fn settings_for(file: &NamedTempFile) -> Settings {
    Settings {
        questions_path: file.path().to_path_buf(),
        seed: Some(42),
        ..Settings::default()
    }
}

#[test]
fn correct_answer_on_last_question_wins() {
    let file = question_file(TWO_PLUS_TWO);
    let (mut app, recorder) = start(&settings_for(&file));
    let now = Instant::now();

    assert_eq!(app.current_question().unwrap().prompt, "2+2?");
    app.select(Letter::B, now);
    assert_eq!(app.feedback(), Some(Feedback::Correct));
    assert_eq!(app.snapshot().score, 100);
    assert_eq!(app.snapshot().phase, GamePhase::Won);
    assert!(app.current_question().is_none());

    app.fire_due(now + Duration::from_millis(900));
    let dialog = app.dialog().copied().unwrap();
    assert!(dialog.won);
    assert_eq!(dialog.message(), "Puntaje final: 100");
    assert_eq!(*recorder.0.borrow(), [Cue::Correct, Cue::GameOver]);
}

#[test]
fn wrong_answer_loses_and_reveals_correct_letter() {
    let file = question_file(TWO_PLUS_TWO);
    let (mut app, recorder) = start(&settings_for(&file));
    let now = Instant::now();

    app.select(Letter::A, now);
    assert_eq!(app.feedback(), Some(Feedback::Incorrect { correct: Letter::B }));
    assert_eq!(app.feedback().unwrap().text(), "❌ Incorrecto. Era B");
    assert!(!app.options_enabled());

    app.fire_due(now + Duration::from_millis(900));
    let dialog = app.dialog().copied().unwrap();
    assert!(!dialog.won);
    assert_eq!(dialog.message(), "Puntaje final: 0");
    assert_eq!(*recorder.0.borrow(), [Cue::Incorrect, Cue::Incorrect]);
}

#[test]
fn missing_file_plays_fallback_question() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        questions_path: dir.path().join("preguntas.json"),
        ..Settings::default()
    };
    let (mut app, _) = start(&settings);
    let now = Instant::now();

    let question = app.current_question().unwrap();
    assert_eq!(question.options[0], "A) Bogotá");
    assert_eq!(app.snapshot().total, 1);

    app.select(Letter::A, now);
    app.fire_due(now + Duration::from_secs(1));
    let dialog = app.dialog().copied().unwrap();
    assert!(dialog.won);
    assert_eq!(dialog.score, 100);
}

#[test]
fn invalid_records_are_never_shown() {
    let file = question_file(
        r#"[
            {"pregunta":"tres opciones","opciones":["A) 1","B) 2","C) 3"],"respuesta":"A"},
            {"pregunta":"sin respuesta","opciones":["A) 1","B) 2","C) 3","D) 4"]},
            {"pregunta":"valida","opciones":["A) 1","B) 2","C) 3","D) 4"],"respuesta":" c "}
        ]"#,
    );
    let (app, _) = start(&settings_for(&file));

    assert_eq!(app.snapshot().total, 1);
    assert_eq!(app.current_question().unwrap().prompt, "valida");
}

#[test]
fn replay_reshuffles_and_resets_score() {
    let file = question_file(
        r#"[
            {"pregunta":"uno","opciones":["A) 1","B) 2","C) 3","D) 4"],"respuesta":"A"},
            {"pregunta":"dos","opciones":["A) 1","B) 2","C) 3","D) 4"],"respuesta":"A"},
            {"pregunta":"tres","opciones":["A) 1","B) 2","C) 3","D) 4"],"respuesta":"A"}
        ]"#,
    );
    let (mut app, _) = start(&settings_for(&file));
    let mut now = Instant::now();

    for _ in 0..3 {
        app.select(Letter::A, now);
        now += Duration::from_secs(1);
        app.fire_due(now);
    }
    assert_eq!(app.dialog().unwrap().score, 300);

    app.dismiss_dialog();
    assert!(app.replay_visible());
    app.restart();

    let snapshot = app.snapshot();
    assert_eq!((snapshot.score, snapshot.index, snapshot.total), (0, 0, 3));
    assert_eq!(snapshot.phase, GamePhase::AwaitingAnswer);
    assert!(!app.replay_visible());
}
