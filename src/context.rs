//! Service context bundling all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::adapters::live::{LiveClock, LiveOcaSource, LiveOrthocalSource};
use crate::adapters::recording::{
    RecordingClock, RecordingOcaSource, RecordingOrthocalSource, SharedRecorder,
};
use crate::adapters::replaying::{ReplayingClock, ReplayingOcaSource, ReplayingOrthocalSource};
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::SourceConfig;
use crate::ports::{Clock, PrimarySource, SecondarySource};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, replaying, recording).
pub struct ServiceContext {
    /// Clock for obtaining the current date.
    pub clock: Box<dyn Clock>,
    /// Primary source (OCA) for readings and commemorations.
    pub primary: Box<dyn PrimarySource>,
    /// Secondary source (orthocal) for titles and reading descriptions.
    pub secondary: Box<dyn SecondarySource>,
    /// Recorder shared with the recording adapters, if recording.
    recorder: Option<SharedRecorder>,
}

impl ServiceContext {
    /// Creates a live context that talks to the real sources.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built.
    pub fn live(config: &SourceConfig) -> Result<Self, String> {
        Ok(Self {
            clock: Box::new(LiveClock),
            primary: Box::new(LiveOcaSource::new(config).map_err(|e| e.to_string())?),
            secondary: Box::new(LiveOrthocalSource::new(config).map_err(|e| e.to_string())?),
            recorder: None,
        })
    }

    /// Creates a recording context backed by live adapters.
    ///
    /// Every port interaction is captured; call [`ServiceContext::finish`]
    /// to write the cassette to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built.
    pub fn recording(config: &SourceConfig, path: &Path) -> Result<Self, String> {
        let live = Self::live(config)?;
        let name = path
            .file_stem()
            .map_or_else(|| "lectionary-session".to_string(), |s| s.to_string_lossy().into_owned());
        let recorder: SharedRecorder = Arc::new(Mutex::new(CassetteRecorder::new(path, name)));

        Ok(Self {
            clock: Box::new(RecordingClock::new(live.clock, Arc::clone(&recorder))),
            primary: Box::new(RecordingOcaSource::new(live.primary, Arc::clone(&recorder))),
            secondary: Box::new(RecordingOrthocalSource::new(
                live.secondary,
                Arc::clone(&recorder),
            )),
            recorder: Some(recorder),
        })
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// All ports are served by a single cassette; each port/method pair
    /// is dispatched to its own interaction stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self::from_cassette(&cassette))
    }

    /// Creates a replaying context from an already loaded cassette.
    #[must_use]
    pub fn from_cassette(cassette: &Cassette) -> Self {
        let replayer = Arc::new(Mutex::new(CassetteReplayer::new(cassette)));
        Self {
            clock: Box::new(ReplayingClock::new(Arc::clone(&replayer))),
            primary: Box::new(ReplayingOcaSource::new(Arc::clone(&replayer))),
            secondary: Box::new(ReplayingOrthocalSource::new(replayer)),
            recorder: None,
        }
    }

    /// Releases the adapters and writes the cassette when recording.
    ///
    /// Returns the cassette path, or `None` for non-recording contexts.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, String> {
        let Self { clock, primary, secondary, recorder } = self;
        // Adapters hold clones of the recorder; release them first.
        drop((clock, primary, secondary));

        let Some(recorder) = recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| "recording adapters still hold the cassette recorder".to_string())?
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        recorder.finish().map(Some).map_err(|e| format!("Failed to write cassette: {e}"))
    }
}
