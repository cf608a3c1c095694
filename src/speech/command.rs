//! Speech engines backed by external programs
//!
//! The recognizer runs a program that records one utterance and prints the
//! transcript on stdout. The synthesizer runs an espeak-compatible program.
//! Both processes are killed when their future is dropped, which is how the
//! coordinator stops them.

use crate::speech::{SpeechError, SpeechRecognizer, SpeechSynthesizer};
use crate::types::locale::Locale;
use async_trait::async_trait;
use tokio::process::Command;

/// Recognizer invoked as `<program> --language <tag>`
pub struct CommandRecognizer {
    program: String,
}

impl CommandRecognizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for CommandRecognizer {
    async fn listen(&self, locale: Locale) -> Result<String, SpeechError> {
        tracing::debug!(program = %self.program, language = locale.tag(), "Starting recognizer");

        let output = Command::new(&self.program)
            .arg("--language")
            .arg(locale.tag())
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SpeechError::Engine(format!(
                "{} exited with {:?}: {}",
                self.program,
                output.status.code(),
                stderr.trim()
            )));
        }

        parse_transcript(&output.stdout)
    }
}

fn parse_transcript(stdout: &[u8]) -> Result<String, SpeechError> {
    let transcript = String::from_utf8_lossy(stdout).trim().to_string();
    if transcript.is_empty() {
        return Err(SpeechError::NoTranscript);
    }
    Ok(transcript)
}

/// espeak voice name for a locale
fn voice_for(locale: Locale) -> &'static str {
    match locale {
        Locale::EnUs => "en-us",
        Locale::HiIn => "hi",
        Locale::KnIn => "kn",
        Locale::TaIn => "ta",
        Locale::TeIn => "te",
        Locale::MlIn => "ml",
    }
}

/// Synthesizer invoked as `<program> -v <voice> <text>`
pub struct CommandSynthesizer {
    program: String,
}

impl CommandSynthesizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for CommandSynthesizer {
    async fn speak(&self, text: &str, locale: Locale) -> Result<(), SpeechError> {
        let status = Command::new(&self.program)
            .arg("-v")
            .arg(voice_for(locale))
            .arg(text)
            .kill_on_drop(true)
            .status()
            .await?;

        if !status.success() {
            return Err(SpeechError::Engine(format!(
                "{} exited with {:?}",
                self.program,
                status.code()
            )));
        }
        Ok(())
    }
}
