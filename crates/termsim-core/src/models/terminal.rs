//! Scrollback line types.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

/// A single line of scrollback with a unique ID.
#[derive(Clone, Debug, Serialize)]
pub struct OutputLine {
    /// Unique ID for keyed rendering
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The content of a scrollback line.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OutputLineData {
    /// Echoed command with prompt and user input
    Command { prompt: String, input: String },
    /// Plain text output
    Text { text: String },
    /// Error message
    Error { text: String },
}

static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text { text: s.into() })
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error { text: s.into() })
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    /// Text of the line without the prompt.
    pub fn as_str(&self) -> &str {
        match &self.data {
            OutputLineData::Command { input, .. } => input,
            OutputLineData::Text { text } | OutputLineData::Error { text } => text,
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // IDs are identity, not content
        self.data == other.data
    }
}
