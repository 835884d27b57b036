use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use rodio::Decoder;
use tracing::{info, warn};

use super::AudioError;

/// An encoded sound kept in memory and decoded on every playback.
#[derive(Debug, Clone)]
pub struct SoundClip {
    name: String,
    bytes: Arc<[u8]>,
}

impl SoundClip {
    /// Load and validate a clip. Missing or undecodable files yield `None`.
    pub fn load<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "sound not found");
            return None;
        }

        match Self::read(path) {
            Ok(clip) => Some(clip),
            Err(err) => {
                warn!(path = %path.display(), "could not load sound: {err}");
                None
            }
        }
    }

    fn read(path: &Path) -> Result<Self, AudioError> {
        let clip = Self {
            name: path.display().to_string(),
            bytes: fs::read(path)?.into(),
        };
        clip.decoder()?;
        Ok(clip)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn decoder(&self) -> Result<Decoder<Cursor<Arc<[u8]>>>, AudioError> {
        Ok(Decoder::new(Cursor::new(Arc::clone(&self.bytes)))?)
    }
}
