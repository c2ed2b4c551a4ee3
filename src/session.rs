//! Conversation session state machine.
//!
//! The messaging front end is an external collaborator; it delivers
//! `(name, bytes)` documents and text messages, and ships replies back.
//! The session only carries the two states the conversion flow needs and
//! the parsed input held between them. One session per requester; nothing
//! is shared across sessions.

use crate::config::OUTPUT_NAME;
use crate::error::ConvertError;
use crate::model::ColumnMapping;
use crate::report::ConversionReport;
use crate::{generate_drawing, parse_input, ParsedInput};

/// Where the conversation currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Waiting for the input document.
    #[default]
    AwaitingFile,
    /// Waiting for the mapping choice ("1" or "2").
    AwaitingMapping,
    /// Conversation finished (document delivered, failed, or cancelled).
    Done,
}

/// External events driving the session.
#[derive(Debug)]
pub enum SessionEvent {
    FileReceived { name: String, bytes: Vec<u8> },
    TextReceived(String),
    CancelReceived,
}

/// Reply handed back to the front end.
#[derive(Debug)]
pub enum SessionReply {
    /// User-visible text (prompts and error messages).
    Text(String),
    /// The generated document, ready for the outbound sink.
    Document {
        name: String,
        bytes: Vec<u8>,
        report: ConversionReport,
    },
}

/// One conversion conversation.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    parsed: Option<ParsedInput>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Advance the session with one external event.
    pub fn handle(&mut self, event: SessionEvent) -> SessionReply {
        match event {
            SessionEvent::CancelReceived => {
                self.state = SessionState::Done;
                self.parsed = None;
                SessionReply::Text("Operation cancelled.".to_string())
            }
            SessionEvent::FileReceived { bytes, .. } => self.on_file(&bytes),
            SessionEvent::TextReceived(text) => self.on_text(&text),
        }
    }

    fn on_file(&mut self, bytes: &[u8]) -> SessionReply {
        if self.state == SessionState::Done {
            return SessionReply::Text("Session is finished; start a new one.".to_string());
        }
        match parse_input(bytes) {
            Ok(parsed) => {
                let prompt = format!(
                    "Your file contains {} columns.\n\
                     Choose a column mapping:\n\
                     1 - Standard: Point, X, Y, Z, Code\n\
                     2 - Swapped X and Y: Point, Y, X, Z, Code\n\
                     Send 1 or 2.",
                    parsed.column_count()
                );
                self.parsed = Some(parsed);
                self.state = SessionState::AwaitingMapping;
                SessionReply::Text(prompt)
            }
            Err(ConvertError::EmptyInput) => {
                self.state = SessionState::Done;
                SessionReply::Text("The file does not contain enough data.".to_string())
            }
            Err(e) => {
                self.state = SessionState::Done;
                SessionReply::Text(format!("Could not read the file: {}", e))
            }
        }
    }

    fn on_text(&mut self, text: &str) -> SessionReply {
        match self.state {
            SessionState::AwaitingFile => {
                SessionReply::Text("Please send the input file as a document.".to_string())
            }
            SessionState::AwaitingMapping => match ColumnMapping::from_choice(text) {
                Ok(mapping) => {
                    // State invariant: parsed input is always present here.
                    let parsed = self.parsed.take();
                    match parsed {
                        Some(parsed) => match generate_drawing(&parsed.rows, &mapping) {
                            Ok((bytes, report)) => {
                                self.state = SessionState::Done;
                                SessionReply::Document {
                                    name: OUTPUT_NAME.to_string(),
                                    bytes,
                                    report,
                                }
                            }
                            Err(e) => {
                                self.state = SessionState::Done;
                                SessionReply::Text(format!("Conversion failed: {}", e))
                            }
                        },
                        None => {
                            self.state = SessionState::AwaitingFile;
                            SessionReply::Text(
                                "Please send the input file as a document.".to_string(),
                            )
                        }
                    }
                }
                Err(_) => SessionReply::Text("Please send 1 or 2.".to_string()),
            },
            SessionState::Done => {
                SessionReply::Text("Session is finished; start a new one.".to_string())
            }
        }
    }
}
