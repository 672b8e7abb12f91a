//! Interactive conversation loop.
//!
//! A [`Session`] owns the transcript and the remote provider. Each user line is
//! one turn: exit keywords terminate the session, anything else is appended
//! and sent, with the whole transcript, to the provider.

pub mod console;
mod transcript;

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::chat::ChatProvider;
use crate::error::ChatError;

pub use transcript::Transcript;

/// Inputs that end the session, compared trimmed and case-insensitively.
pub const EXIT_KEYWORDS: [&str; 2] = ["exit", "quit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// What a single call to [`Session::submit_turn`] did.
#[derive(Debug)]
pub enum TurnOutcome {
    /// The provider answered; the trimmed reply was appended.
    Replied(String),
    /// The exchange failed; the user message stays unanswered.
    Failed(ChatError),
    /// An exit keyword was entered, or the session had already ended.
    Exited,
}

pub fn is_exit_keyword(text: &str) -> bool {
    let text = text.trim();
    EXIT_KEYWORDS
        .iter()
        .any(|keyword| text.eq_ignore_ascii_case(keyword))
}

pub struct Session {
    provider: Box<dyn ChatProvider>,
    transcript: Transcript,
    state: SessionState,
}

impl Session {
    /// Opens a session whose transcript holds only the system prompt.
    pub fn start(provider: Box<dyn ChatProvider>, system_prompt: impl Into<String>) -> Self {
        log::info!("session started");
        Self {
            provider,
            transcript: Transcript::new(system_prompt),
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Handles one line of user input and prints the result to `out`.
    ///
    /// Exchange failures are reported on `out` and returned as
    /// [`TurnOutcome::Failed`]; only write errors on `out` surface as `Err`.
    pub async fn submit_turn<W: Write>(
        &mut self,
        text: &str,
        out: &mut W,
    ) -> io::Result<TurnOutcome> {
        if !self.is_running() {
            log::warn!("turn submitted after session ended; ignoring");
            return Ok(TurnOutcome::Exited);
        }
        if is_exit_keyword(text) {
            self.state = SessionState::Terminated;
            log::info!(
                "session ended by user after {} messages",
                self.transcript.len()
            );
            console::farewell(out)?;
            return Ok(TurnOutcome::Exited);
        }
        self.transcript.push_user(text);
        match self.exchange().await {
            Ok(reply) => {
                console::reply(out, &reply)?;
                self.transcript.push_assistant(reply.clone());
                Ok(TurnOutcome::Replied(reply))
            }
            Err(err) => {
                log::warn!(
                    "exchange failed: {err}; {} unanswered message(s) in context",
                    self.transcript.unanswered()
                );
                console::error(out, &err)?;
                Ok(TurnOutcome::Failed(err))
            }
        }
    }

    /// Reads lines from `input` until an exit keyword or end of input.
    pub async fn run<R, W>(&mut self, mut input: R, out: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut line = String::new();
        while self.is_running() {
            console::prompt(out)?;
            line.clear();
            if input.read_line(&mut line).await? == 0 {
                log::info!("input closed; ending session");
                writeln!(out)?;
                break;
            }
            let text = line.trim_end_matches(|c| c == '\n' || c == '\r');
            self.submit_turn(text, out).await?;
        }
        Ok(())
    }

    /// Sends the transcript and returns the trimmed, non-empty reply.
    async fn exchange(&self) -> Result<String, ChatError> {
        log::debug!(
            "sending {} messages to provider",
            self.transcript.len()
        );
        let response = self.provider.chat(self.transcript.messages()).await?;
        if let Some(usage) = response.usage() {
            log::debug!(
                "token usage: prompt={} completion={} total={}",
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens
            );
        }
        let text = response.text().unwrap_or_default();
        let reply = text.trim();
        if reply.is_empty() {
            return Err(ChatError::ResponseFormatError {
                message: "response contained no assistant text".to_string(),
                raw_response: response.to_string(),
            });
        }
        Ok(reply.to_string())
    }
}
