//! Speech input and output
//!
//! Speech-to-text and text-to-speech are external capabilities behind the
//! [`SpeechRecognizer`] and [`SpeechSynthesizer`] traits. The
//! [`AudioCoordinator`] runs them so that only one audio activity is ever
//! active: starting either one stops the other first.

pub mod command;
pub mod coordinator;

use crate::types::locale::Locale;
use async_trait::async_trait;
use thiserror::Error;

pub use command::{CommandRecognizer, CommandSynthesizer};
pub use coordinator::AudioCoordinator;

/// Speech errors
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Speech recognition not supported. Set FACTLENS_STT_COMMAND to a speech-to-text program.")]
    RecognitionUnsupported,
    #[error("Speech synthesis not available")]
    SynthesisUnsupported,
    #[error("Failed to launch speech engine: {0}")]
    Launch(#[from] std::io::Error),
    #[error("Speech engine failed: {0}")]
    Engine(String),
    #[error("No speech was recognized")]
    NoTranscript,
    #[error("Cancelled")]
    Cancelled,
}

/// Produces one transcript per listening session
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn listen(&self, locale: Locale) -> Result<String, SpeechError>;
}

/// Reads text aloud, completing when speech ends
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn speak(&self, text: &str, locale: Locale) -> Result<(), SpeechError>;
}

/// External speech programs
#[derive(Clone, Debug)]
pub struct SpeechConfig {
    /// Recognizer program; recognition is unsupported when unset
    pub stt_command: Option<String>,
    /// Synthesizer program
    pub tts_command: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            stt_command: std::env::var("FACTLENS_STT_COMMAND")
                .ok()
                .filter(|cmd| !cmd.trim().is_empty()),
            tts_command: std::env::var("FACTLENS_TTS_COMMAND")
                .ok()
                .filter(|cmd| !cmd.trim().is_empty())
                .unwrap_or_else(|| "espeak-ng".to_string()),
        }
    }
}
