//! Speech synthesis and the output sink
//!
//! Synthesis shells out to the platform's speech tool and waits for the
//! utterance to finish, so consecutive lines never overlap.

mod engine;
mod sink;

pub use engine::{detect_engine, CommandSpeech, SpeechBackend, SpeechEngine};
pub use sink::{ConsoleSink, OutputSink, RecordingSink};
