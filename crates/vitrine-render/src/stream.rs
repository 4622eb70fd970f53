//! Shell-first streaming over a byte sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use thiserror::Error;

/// Errors from the page stream.
#[derive(Error, Debug)]
pub enum StreamError {
    /// A section was sent before the shell.
    #[error("shell must be sent before sections")]
    ShellNotSent,
    /// The shell was sent more than once.
    #[error("shell already sent")]
    ShellAlreadySent,
    /// The stream was written to after completion.
    #[error("response already completed")]
    Completed,
    /// The underlying sink rejected a write.
    #[error("send failed: {0}")]
    Send(String),
}

/// State of the page stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState {
    /// Initial state, shell not yet sent.
    Initial,
    /// Shell has been sent, sections can be streamed.
    ShellSent,
    /// Response has been completed.
    Completed,
}

/// Page stream that enforces the shell-first pattern.
///
/// Generic over the underlying sink type so it works with any
/// `Sink<Vec<u8>>` implementation, including Spin's `OutgoingBody`.
pub struct PageStream<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: StreamState,
    sections_sent: Vec<String>,
}

impl<S, E> PageStream<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new page stream over a sink.
    pub fn new(sink: S) -> Self {
        Self {
            inner: sink,
            state: StreamState::Initial,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell HTML. Must be called before any section.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), StreamError> {
        if self.state != StreamState::Initial {
            return Err(StreamError::ShellAlreadySent);
        }

        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| StreamError::Send(e.to_string()))?;
        self.state = StreamState::ShellSent;

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), StreamError> {
        match self.state {
            StreamState::Initial => return Err(StreamError::ShellNotSent),
            StreamState::Completed => return Err(StreamError::Completed),
            StreamState::ShellSent => {}
        }

        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| StreamError::Send(e.to_string()))?;
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Send raw bytes. Shell must be sent first.
    pub async fn send_raw(&mut self, bytes: Vec<u8>) -> Result<(), StreamError> {
        match self.state {
            StreamState::Initial => return Err(StreamError::ShellNotSent),
            StreamState::Completed => return Err(StreamError::Completed),
            StreamState::ShellSent => {}
        }

        self.inner
            .send(bytes)
            .await
            .map_err(|e| StreamError::Send(e.to_string()))?;

        Ok(())
    }

    /// Mark the response complete; further writes fail.
    pub fn complete(&mut self) {
        self.state = StreamState::Completed;
    }

    /// Names of the sections sent so far.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Consume the stream and return the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}
