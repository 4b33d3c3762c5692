use std::io::{self, Stdout, Write};

use log::warn;

use crate::speech::SpeechEngine;

/// Destination for report lines.
///
/// `say` never fails; a sink that cannot deliver a line logs and moves on.
pub trait OutputSink {
    fn say(&mut self, text: &str);
}

/// Prints each line, then speaks it if an engine is present
pub struct ConsoleSink<W: Write = Stdout> {
    out: W,
    engine: Option<Box<dyn SpeechEngine>>,
}

impl ConsoleSink<Stdout> {
    pub fn new(engine: Option<Box<dyn SpeechEngine>>) -> Self {
        Self::with_writer(io::stdout(), engine)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn with_writer(out: W, engine: Option<Box<dyn SpeechEngine>>) -> Self {
        Self { out, engine }
    }

    pub fn has_speech(&self) -> bool {
        self.engine.is_some()
    }

    pub fn into_writer(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!("Failed to write report line: {}", e);
        }

        if let Some(engine) = &self.engine {
            if let Err(e) = engine.speak(text) {
                warn!("TTS error: {}", e);
            }
        }
    }
}

/// Keeps every line in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub lines: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for RecordingSink {
    fn say(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
