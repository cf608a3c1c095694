//! Audio activity coordination
//!
//! Listening and speaking each run as their own tokio task. Starting one
//! aborts whatever is active (stop-before-start), and a new analysis stops
//! both. An aborted activity resolves to [`SpeechError::Cancelled`].

use crate::speech::{
    CommandRecognizer, CommandSynthesizer, SpeechConfig, SpeechError, SpeechRecognizer,
    SpeechSynthesizer,
};
use crate::types::locale::Locale;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::AbortHandle;

/// The running task of one activity, tagged so a finished task only clears
/// its own slot.
#[derive(Default)]
struct ActivitySlot {
    active: Mutex<Option<(u64, AbortHandle)>>,
}

impl ActivitySlot {
    fn set(&self, ticket: u64, handle: AbortHandle) {
        if let Ok(mut active) = self.active.lock() {
            if let Some((_, previous)) = active.replace((ticket, handle)) {
                previous.abort();
            }
        }
    }

    fn clear(&self, ticket: u64) {
        if let Ok(mut active) = self.active.lock() {
            if matches!(*active, Some((current, _)) if current == ticket) {
                *active = None;
            }
        }
    }

    fn stop(&self) -> bool {
        match self.active.lock() {
            Ok(mut active) => active.take().map(|(_, handle)| handle.abort()).is_some(),
            Err(_) => false,
        }
    }

    fn is_active(&self) -> bool {
        self.active.lock().map(|active| active.is_some()).unwrap_or(false)
    }
}

/// Runs speech recognition and synthesis one at a time
pub struct AudioCoordinator {
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    listening: ActivitySlot,
    speaking: ActivitySlot,
    tickets: AtomicU64,
}

impl AudioCoordinator {
    pub fn new(
        recognizer: Option<Arc<dyn SpeechRecognizer>>,
        synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    ) -> Self {
        Self {
            recognizer,
            synthesizer,
            listening: ActivitySlot::default(),
            speaking: ActivitySlot::default(),
            tickets: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &SpeechConfig) -> Self {
        let recognizer = config
            .stt_command
            .as_ref()
            .map(|cmd| Arc::new(CommandRecognizer::new(cmd.clone())) as Arc<dyn SpeechRecognizer>);
        let synthesizer: Arc<dyn SpeechSynthesizer> =
            Arc::new(CommandSynthesizer::new(config.tts_command.clone()));

        if recognizer.is_none() {
            tracing::info!("No speech recognizer configured; voice input disabled");
        }

        Self::new(recognizer, Some(synthesizer))
    }

    pub fn has_recognizer(&self) -> bool {
        self.recognizer.is_some()
    }

    pub fn is_listening(&self) -> bool {
        self.listening.is_active()
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking.is_active()
    }

    /// Listen for one utterance in `locale`, stopping any speech first.
    pub async fn listen(&self, locale: Locale) -> Result<String, SpeechError> {
        let recognizer = self
            .recognizer
            .clone()
            .ok_or(SpeechError::RecognitionUnsupported)?;

        self.stop_speaking();
        self.run(&self.listening, async move { recognizer.listen(locale).await })
            .await
    }

    /// Read `text` aloud in `locale`, stopping any listening first.
    pub async fn speak(&self, text: &str, locale: Locale) -> Result<(), SpeechError> {
        let synthesizer = self
            .synthesizer
            .clone()
            .ok_or(SpeechError::SynthesisUnsupported)?;
        let text = text.to_string();

        self.stop_listening();
        self.run(&self.speaking, async move { synthesizer.speak(&text, locale).await })
            .await
    }

    pub fn stop_listening(&self) {
        if self.listening.stop() {
            tracing::debug!("Stopped listening");
        }
    }

    pub fn stop_speaking(&self) {
        if self.speaking.stop() {
            tracing::debug!("Stopped speaking");
        }
    }

    /// Stop every audio activity, as done before a new analysis
    pub fn stop_all(&self) {
        self.stop_listening();
        self.stop_speaking();
    }

    async fn run<T, F>(&self, slot: &ActivitySlot, activity: F) -> Result<T, SpeechError>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, SpeechError>> + Send + 'static,
    {
        let ticket = self.tickets.fetch_add(1, Ordering::Relaxed);
        let task = tokio::spawn(activity);
        slot.set(ticket, task.abort_handle());

        let outcome = task.await;
        slot.clear(ticket);

        match outcome {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(SpeechError::Cancelled),
            Err(e) => Err(SpeechError::Engine(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;

    struct EchoRecognizer;

    #[async_trait]
    impl SpeechRecognizer for EchoRecognizer {
        async fn listen(&self, locale: Locale) -> Result<String, SpeechError> {
            Ok(format!("heard in {locale}"))
        }
    }

    struct SlowRecognizer;

    #[async_trait]
    impl SpeechRecognizer for SlowRecognizer {
        async fn listen(&self, _locale: Locale) -> Result<String, SpeechError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("too late".to_string())
        }
    }

    struct SlowSynthesizer;

    #[async_trait]
    impl SpeechSynthesizer for SlowSynthesizer {
        async fn speak(&self, _text: &str, _locale: Locale) -> Result<(), SpeechError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        }
    }

    async fn wait_until(check: impl Fn() -> bool) {
        for _ in 0..100 {
            if check() {
                return;
            }
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_listen_without_recognizer_is_unsupported() {
        let audio = AudioCoordinator::new(None, None);
        assert!(!audio.has_recognizer());
        let result = audio.listen(Locale::EnUs).await;
        assert!(matches!(result, Err(SpeechError::RecognitionUnsupported)));
    }

    #[tokio::test]
    async fn test_listen_returns_transcript() {
        let audio = AudioCoordinator::new(Some(Arc::new(EchoRecognizer)), None);
        assert_eq!(audio.listen(Locale::KnIn).await.unwrap(), "heard in kn-IN");
        assert!(!audio.is_listening());
    }

    #[tokio::test]
    async fn test_listening_cancels_active_speech() {
        let audio = Arc::new(AudioCoordinator::new(
            Some(Arc::new(EchoRecognizer)),
            Some(Arc::new(SlowSynthesizer)),
        ));

        let speaker = audio.clone();
        let speech = tokio::spawn(async move { speaker.speak("hello", Locale::EnUs).await });
        wait_until(|| audio.is_speaking()).await;
        assert!(audio.is_speaking());

        assert_eq!(audio.listen(Locale::EnUs).await.unwrap(), "heard in en-US");
        assert!(matches!(speech.await.unwrap(), Err(SpeechError::Cancelled)));
        assert!(!audio.is_speaking());
    }

    #[tokio::test]
    async fn test_stop_all_cancels_listening() {
        let audio = Arc::new(AudioCoordinator::new(Some(Arc::new(SlowRecognizer)), None));

        let listener = audio.clone();
        let listening = tokio::spawn(async move { listener.listen(Locale::TaIn).await });
        wait_until(|| audio.is_listening()).await;

        audio.stop_all();
        assert!(matches!(listening.await.unwrap(), Err(SpeechError::Cancelled)));
        assert!(!audio.is_listening());
    }
}
