//! Single-flight narration.
//!
//! One owned "active utterance" slot: starting a new utterance first cancels
//! whatever is still playing, so audio never overlaps. Playback errors are
//! treated exactly like natural completion (the speaking flag resets and
//! nothing is surfaced).

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use wayfinder_core::Language;

pub type SpeechFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Playback backend. The real system hands text to a platform speech API;
/// implementations resolve when the utterance finishes or fails.
pub trait Speaker: Send + Sync + 'static {
    fn speak(&self, text: String, language_tag: &'static str) -> SpeechFuture;
}

/// Default backend: logs the utterance and simulates playback time scaled
/// to its length.
pub struct LogSpeaker {
    pub ms_per_char: u64,
}

impl Speaker for LogSpeaker {
    fn speak(&self, text: String, language_tag: &'static str) -> SpeechFuture {
        let duration = Duration::from_millis(self.ms_per_char * text.chars().count() as u64);
        Box::pin(async move {
            tracing::info!("Narrating [{}]: {}", language_tag, text);
            tokio::time::sleep(duration).await;
        })
    }
}

/// The narration slot. Process-wide singleton owned by the app state.
pub struct Narrator {
    speaker: Arc<dyn Speaker>,
    active: Mutex<Option<JoinHandle<()>>>,
    speaking: Arc<AtomicBool>,
}

impl Narrator {
    pub fn new(speaker: Arc<dyn Speaker>) -> Self {
        Self {
            speaker,
            active: Mutex::new(None),
            speaking: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start narrating, cancelling any in-progress utterance first.
    pub fn start(&self, text: String, language: Language) {
        let mut active = self.active.lock().expect("narration slot poisoned");
        if let Some(handle) = active.take() {
            handle.abort();
        }
        self.speaking.store(true, Ordering::SeqCst);
        let speaking = self.speaking.clone();
        let utterance = self.speaker.speak(text, language.speech_tag());
        *active = Some(tokio::spawn(async move {
            utterance.await;
            speaking.store(false, Ordering::SeqCst);
        }));
    }

    /// Cancel the in-progress utterance, if any.
    pub fn stop(&self) {
        let mut active = self.active.lock().expect("narration slot poisoned");
        if let Some(handle) = active.take() {
            handle.abort();
        }
        self.speaking.store(false, Ordering::SeqCst);
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::SeqCst)
    }
}
