//! Detector page actions
//!
//! Every control on the page maps to one method here. Methods run on the UI
//! thread; anything that waits on the backend or a speech engine is spawned
//! as a task that writes its outcome back into [`AppState`].
//!
//! Failures end at the UI: they are logged, then shown either as a notice
//! or as a rendered result. Nothing is retried.

use crate::analysis::{AnalysisReply, RenderedResult};
use crate::app::AppState;
use crate::client::ClientError;
use crate::speech::{AudioCoordinator, SpeechError};
use crate::storage::settings::{save_settings, AppSettings};
use crate::types::{validate_message, InputError, Locale, Session};
use dioxus::prelude::*;

/// Rendered in place of a reply when the backend cannot be reached
pub const CONNECTION_ERROR: &str =
    "⚠️ Error connecting to server. Please check if the analysis backend is running.";

/// Prefix of OCR failures shown in the result card
pub const OCR_ERROR_PREFIX: &str = "OCR Error: ";

/// Validate the statement and put the session into its busy state.
///
/// Blank input leaves the session and audio untouched. Otherwise every
/// audio activity is stopped before the session is marked as analyzing.
fn start_analysis(
    session: &mut Session,
    audio: &AudioCoordinator,
    input: &str,
) -> Result<(String, Locale), InputError> {
    let message = validate_message(input)?;

    audio.stop_all();
    session.set_listening(false);
    session.set_speaking(false);
    session.begin_analysis();

    Ok((message, session.locale()))
}

/// Outcome of a settled analysis request
struct Settled {
    reply: AnalysisReply,
    rendered: RenderedResult,
    /// Read the reply aloud
    narrate: bool,
}

/// Turn the backend outcome into a result and re-enable Analyze.
///
/// Transport failures render [`CONNECTION_ERROR`] without a verdict badge
/// and are never narrated.
fn settle_analysis(
    session: &mut Session,
    outcome: Result<String, ClientError>,
    locale: Locale,
) -> Settled {
    session.finish_analysis();

    match outcome {
        Ok(raw) => {
            let reply = AnalysisReply::parse(&raw);
            tracing::info!(
                verdict = ?reply.verdict,
                score = ?reply.credibility().map(|score| score.value),
                "Analysis complete"
            );
            Settled {
                rendered: RenderedResult::new(&reply, locale.tag()),
                narrate: session.should_narrate(),
                reply,
            }
        }
        Err(e) => {
            tracing::error!("Analysis request failed: {}", e);
            Settled {
                reply: AnalysisReply::default(),
                rendered: RenderedResult::error(CONNECTION_ERROR),
                narrate: false,
            }
        }
    }
}

impl AppState {
    /// Show a blocking notice
    pub fn notify(&self, message: impl Into<String>) {
        let mut notice = self.notice;
        notice.set(Some(message.into()));
    }

    pub fn dismiss_notice(&self) {
        let mut notice = self.notice;
        notice.set(None);
    }

    /// Submit the statement box for analysis.
    ///
    /// Blank input is rejected without a request. Voice and narration are
    /// stopped before the request starts, and the Analyze button stays
    /// disabled until the request settles either way.
    pub fn analyze(&self) {
        let input = self.input.read().clone();
        let mut session = self.session;

        let started = start_analysis(&mut session.write(), &self.audio, &input);
        let (message, locale) = match started {
            Ok(started) => started,
            Err(e) => {
                self.notify(e.to_string());
                return;
            }
        };

        let state = self.clone();
        spawn(async move {
            state.run_analysis(message, locale).await;
        });
    }

    async fn run_analysis(&self, message: String, locale: Locale) {
        let mut session = self.session;
        let mut result = self.result;

        let outcome = self.client.analyze(&message, locale).await;
        let settled = settle_analysis(&mut session.write(), outcome, locale);
        result.set(Some(settled.rendered));

        if settled.narrate {
            self.narrate(settled.reply.narration_text(locale.tag()), locale).await;
        }
    }

    async fn narrate(&self, text: String, locale: Locale) {
        let mut session = self.session;
        session.write().set_speaking(true);

        match self.audio.speak(&text, locale).await {
            Ok(()) | Err(SpeechError::Cancelled) => {}
            Err(e) => tracing::warn!("Narration failed: {}", e),
        }

        let still_speaking = self.audio.is_speaking();
        session.write().set_speaking(still_speaking);
    }

    /// Start or stop voice input. The transcript replaces the statement box.
    pub fn toggle_voice(&self) {
        let mut session = self.session;

        if session.read().is_listening() {
            self.audio.stop_listening();
            session.write().set_listening(false);
            return;
        }

        if !self.audio.has_recognizer() {
            self.notify(SpeechError::RecognitionUnsupported.to_string());
            return;
        }

        let locale = {
            let mut session = session.write();
            session.set_speaking(false);
            session.set_listening(true);
            session.locale()
        };

        let state = self.clone();
        spawn(async move {
            let mut input = state.input;
            let mut session = state.session;

            match state.audio.listen(locale).await {
                Ok(transcript) => {
                    tracing::debug!(chars = transcript.len(), "Voice transcript received");
                    input.set(transcript);
                }
                Err(SpeechError::Cancelled) => {}
                Err(e) => tracing::error!("Speech recognition error: {}", e),
            }

            let still_listening = state.audio.is_listening();
            session.write().set_listening(still_listening);
        });
    }

    /// Send an image to OCR and put the extracted text in the statement box
    pub async fn upload_image(&self, file_name: String, bytes: Vec<u8>) {
        let mut input = self.input;
        let mut result = self.result;

        match self.client.extract_text(file_name, bytes).await {
            Ok(text) => input.set(text),
            Err(e) => {
                tracing::error!("OCR failed: {}", e);
                result.set(Some(RenderedResult::error(&format!("{OCR_ERROR_PREFIX}{e}"))));
            }
        }
    }

    /// Switch theme and persist the choice
    pub fn toggle_theme(&self) {
        let mut session = self.session;
        let theme = session.write().toggle_theme();

        if let Err(error) = save_settings(&AppSettings { theme }) {
            tracing::error!("Failed to save settings: {}", error);
        }
    }

    /// Turning narration off silences any narration in progress
    pub fn toggle_narration(&self) {
        let mut session = self.session;
        let enabled = session.write().toggle_narration();

        if !enabled {
            self.audio.stop_speaking();
            session.write().set_speaking(false);
        }
    }

    pub fn select_locale(&self, tag: &str) {
        let mut session = self.session;
        match Locale::from_tag(tag) {
            Some(locale) => session.write().set_locale(locale),
            None => tracing::warn!("Ignoring unsupported locale: {}", tag),
        }
    }

    pub fn toggle_menu(&self) {
        let mut session = self.session;
        session.write().toggle_menu();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ResultBlock, Verdict};
    use crate::speech::SpeechRecognizer;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    struct SlowRecognizer;

    #[async_trait]
    impl SpeechRecognizer for SlowRecognizer {
        async fn listen(&self, _locale: Locale) -> Result<String, SpeechError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("too late".to_string())
        }
    }

    fn unreachable_backend() -> ClientError {
        let error = reqwest::Client::new().get("not a url").build().unwrap_err();
        ClientError::Transport(error)
    }

    fn busy_session() -> Session {
        let mut session = Session::default();
        session.begin_analysis();
        session
    }

    #[test]
    fn test_blank_input_leaves_session_idle() {
        let audio = AudioCoordinator::new(None, None);
        let mut session = Session::default();

        let started = start_analysis(&mut session, &audio, "   \n");
        assert_eq!(started, Err(InputError::Empty));
        assert!(!session.is_analyzing());
    }

    #[test]
    fn test_start_trims_and_disables_analyze() {
        let audio = AudioCoordinator::new(None, None);
        let mut session = Session::default();
        session.set_locale(Locale::TeIn);
        session.set_speaking(true);

        let started = start_analysis(&mut session, &audio, "  Moon landing was staged ");
        assert_eq!(started, Ok(("Moon landing was staged".to_string(), Locale::TeIn)));
        assert!(session.is_analyzing());
        assert!(!session.is_speaking());
    }

    #[tokio::test]
    async fn test_start_cancels_active_listening() {
        let audio = Arc::new(AudioCoordinator::new(Some(Arc::new(SlowRecognizer)), None));
        let mut session = Session::default();
        session.set_listening(true);

        let listener = audio.clone();
        let listening = tokio::spawn(async move { listener.listen(Locale::EnUs).await });
        for _ in 0..100 {
            if audio.is_listening() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(audio.is_listening());

        start_analysis(&mut session, &audio, "Water boils at 50C").unwrap();
        assert!(matches!(listening.await.unwrap(), Err(SpeechError::Cancelled)));
        assert!(!audio.is_listening());
        assert!(!session.is_listening());
    }

    #[test]
    fn test_transport_error_renders_connection_error() {
        let mut session = busy_session();
        session.toggle_narration();

        let settled = settle_analysis(&mut session, Err(unreachable_backend()), Locale::EnUs);
        assert!(!session.is_analyzing());
        assert!(!settled.narrate);
        assert_eq!(settled.reply.verdict, Verdict::Unknown);
        assert_eq!(settled.rendered, RenderedResult::error(CONNECTION_ERROR));
        assert_eq!(settled.rendered.badge, None);
    }

    #[test]
    fn test_backend_error_also_settles() {
        let mut session = busy_session();
        let outcome = Err(ClientError::Backend("gateway timeout".to_string()));

        let settled = settle_analysis(&mut session, outcome, Locale::HiIn);
        assert!(!session.is_analyzing());
        assert_eq!(settled.rendered, RenderedResult::error(CONNECTION_ERROR));
    }

    #[test]
    fn test_reply_is_rendered_and_narrated_in_english() {
        let mut session = busy_session();
        session.toggle_narration();
        let raw = "[VERDICT:FAKE]\n**Analysis:** Staged photo.\n**Credibility Score:** 1/5".to_string();

        let settled = settle_analysis(&mut session, Ok(raw), Locale::EnUs);
        assert!(!session.is_analyzing());
        assert!(settled.narrate);
        assert_eq!(settled.reply.verdict, Verdict::Fake);
        assert_eq!(settled.rendered.badge.map(|badge| badge.label), Some("Fake News"));
        assert!(matches!(settled.rendered.blocks[1], ResultBlock::Score { .. }));
    }

    #[test]
    fn test_reply_is_not_narrated_outside_english() {
        let mut session = busy_session();
        session.toggle_narration();
        session.set_locale(Locale::MlIn);

        let settled = settle_analysis(&mut session, Ok("[VERDICT:REAL] ok".to_string()), Locale::MlIn);
        assert!(!settled.narrate);
        assert!(settled.rendered.badge.is_some());
    }
}
