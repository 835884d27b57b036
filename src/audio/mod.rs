//! Optional sound cues.
//!
//! Audio is a best-effort capability: when the output device or any clip is
//! missing the game keeps running silently.

mod clip;

use std::path::Path;

use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::{info, warn};

pub use clip::SoundClip;

/// Error raised while opening the device or playing a clip.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("no audio output available: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("failed to read sound file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode sound: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
    #[error("failed to start playback: {0}")]
    Play(#[from] rodio::PlayError),
}

/// Game events that have a sound attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Correct,
    Incorrect,
    GameOver,
}

impl Cue {
    pub const ALL: [Cue; 3] = [Cue::Correct, Cue::Incorrect, Cue::GameOver];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Correct => "correcto.mp3",
            Self::Incorrect => "incorrecto.mp3",
            Self::GameOver => "fin_juego.mp3",
        }
    }
}

/// Something that can play the game's cues.
pub trait CuePlayer {
    fn play(&self, cue: Cue);
}

/// Plays nothing. Used when audio is disabled or unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl CuePlayer for SilentPlayer {
    fn play(&self, _cue: Cue) {}
}

/// Plays cues on the default output device.
pub struct RodioPlayer {
    // Dropping the stream stops all sound.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    correct: Option<SoundClip>,
    incorrect: Option<SoundClip>,
    game_over: Option<SoundClip>,
}

impl RodioPlayer {
    /// Open the default output device and load the cue clips from `dir`.
    pub fn open(dir: &Path) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        let load = |cue: Cue| SoundClip::load(dir.join(cue.file_name()));

        Ok(Self {
            _stream: stream,
            handle,
            correct: load(Cue::Correct),
            incorrect: load(Cue::Incorrect),
            game_over: load(Cue::GameOver),
        })
    }

    fn clip(&self, cue: Cue) -> Option<&SoundClip> {
        match cue {
            Cue::Correct => self.correct.as_ref(),
            Cue::Incorrect => self.incorrect.as_ref(),
            Cue::GameOver => self.game_over.as_ref(),
        }
    }

    /// Play `clip` if present. Playback errors are logged and dropped.
    pub fn play_clip(&self, clip: Option<&SoundClip>) {
        let Some(clip) = clip else {
            return;
        };
        if let Err(err) = self.try_play(clip) {
            warn!(sound = clip.name(), "{err}");
        }
    }

    fn try_play(&self, clip: &SoundClip) -> Result<(), AudioError> {
        let sink = Sink::try_new(&self.handle)?;
        sink.append(clip.decoder()?);
        sink.detach();
        Ok(())
    }
}

impl CuePlayer for RodioPlayer {
    fn play(&self, cue: Cue) {
        self.play_clip(self.clip(cue));
    }
}

/// Pick the cue player for this session.
pub fn init(sounds_dir: &Path, enabled: bool) -> Box<dyn CuePlayer> {
    if !enabled {
        info!("sound disabled");
        return Box::new(SilentPlayer);
    }

    match RodioPlayer::open(sounds_dir) {
        Ok(player) => Box::new(player),
        Err(err) => {
            warn!("sound disabled: {err}");
            Box::new(SilentPlayer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_file_names() {
        let names: Vec<&str> = Cue::ALL.iter().map(|cue| cue.file_name()).collect();
        assert_eq!(names, ["correcto.mp3", "incorrecto.mp3", "fin_juego.mp3"]);
    }

    #[test]
    fn test_disabled_audio_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let player = init(dir.path(), false);
        for cue in Cue::ALL {
            player.play(cue);
        }
    }
}
