use std::process::{Command, Stdio};

use anyhow::{anyhow, Context, Result};
use log::{debug, info};

use crate::config::SpeechConfig;
use crate::constants::SAPI_BASE_RATE_WPM;
use crate::platform::common::command_exists;

/// Something that can vocalize a line of text
pub trait SpeechEngine {
    /// Speak `text`, returning once the utterance has finished
    fn speak(&self, text: &str) -> Result<()>;
}

/// Command-line synthesizers the engine knows how to drive
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechBackend {
    /// macOS `say`
    Say,
    /// `espeak-ng` or `espeak`
    Espeak { program: &'static str },
    /// speech-dispatcher's `spd-say`
    SpdSay,
    /// Windows `System.Speech` through PowerShell
    PowerShell,
}

impl SpeechBackend {
    pub fn program(&self) -> &'static str {
        match self {
            SpeechBackend::Say => "say",
            SpeechBackend::Espeak { program } => program,
            SpeechBackend::SpdSay => "spd-say",
            SpeechBackend::PowerShell => "powershell",
        }
    }

    /// Arguments that speak `text` with the given settings
    pub fn args(&self, text: &str, config: &SpeechConfig) -> Vec<String> {
        match self {
            SpeechBackend::Say => {
                let mut args = vec!["-r".to_string(), config.rate.to_string()];
                if config.prefer_female_voice {
                    args.extend(["-v".to_string(), "Samantha".to_string()]);
                }
                args.push(text.to_string());
                args
            }
            SpeechBackend::Espeak { .. } => {
                let mut args = vec!["-s".to_string(), config.rate.to_string()];
                if config.prefer_female_voice {
                    args.extend(["-v".to_string(), "en+f3".to_string()]);
                }
                args.push(text.to_string());
                args
            }
            SpeechBackend::SpdSay => {
                // -w waits until the message has been spoken
                let mut args = vec!["-w".to_string()];
                if config.prefer_female_voice {
                    args.extend(["-t".to_string(), "female1".to_string()]);
                }
                args.push(text.to_string());
                args
            }
            SpeechBackend::PowerShell => {
                let mut script = String::from(
                    "Add-Type -AssemblyName System.Speech; \
                     $s = New-Object System.Speech.Synthesis.SpeechSynthesizer; ",
                );
                if config.prefer_female_voice {
                    script.push_str("$s.SelectVoiceByHints('Female'); ");
                }
                script.push_str(&format!("$s.Rate = {}; ", sapi_rate(config.rate)));
                script.push_str(&format!("$s.Speak('{}');", text.replace('\'', "''")));

                vec![
                    "-NoProfile".to_string(),
                    "-NonInteractive".to_string(),
                    "-Command".to_string(),
                    script,
                ]
            }
        }
    }
}

/// Map words per minute onto the -10..=10 System.Speech rate scale
fn sapi_rate(words_per_minute: u32) -> i32 {
    let wpm = i32::try_from(words_per_minute).unwrap_or(i32::MAX);
    (wpm.saturating_sub(SAPI_BASE_RATE_WPM) / 20).clamp(-10, 10)
}

/// Speech engine backed by an external synthesizer process
pub struct CommandSpeech {
    backend: SpeechBackend,
    config: SpeechConfig,
}

impl CommandSpeech {
    pub fn new(backend: SpeechBackend, config: SpeechConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &SpeechBackend {
        &self.backend
    }
}

impl SpeechEngine for CommandSpeech {
    fn speak(&self, text: &str) -> Result<()> {
        let program = self.backend.program();
        debug!("Speaking through {}", program);

        let status = Command::new(program)
            .args(self.backend.args(text, &self.config))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .context(format!("Failed to start {}", program))?;

        if !status.success() {
            return Err(anyhow!("{} exited with {}", program, status));
        }
        Ok(())
    }
}

fn platform_candidates() -> Vec<SpeechBackend> {
    #[cfg(target_os = "windows")]
    {
        vec![SpeechBackend::PowerShell]
    }
    #[cfg(target_os = "macos")]
    {
        vec![SpeechBackend::Say]
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        vec![
            SpeechBackend::Espeak { program: "espeak-ng" },
            SpeechBackend::Espeak { program: "espeak" },
            SpeechBackend::SpdSay,
        ]
    }
}

/// Find a usable synthesizer, or `None` when speech is disabled or absent
pub fn detect_engine(config: &SpeechConfig) -> Option<Box<dyn SpeechEngine>> {
    if !config.enabled {
        info!("Speech output disabled");
        return None;
    }

    match platform_candidates()
        .into_iter()
        .find(|backend| command_exists(backend.program()))
    {
        Some(backend) => {
            info!("Using {} for speech output", backend.program());
            Some(Box::new(CommandSpeech::new(backend, config.clone())))
        }
        None => {
            info!("No speech synthesizer found - console output only");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_say_args() {
        let config = SpeechConfig::default();
        let args = SpeechBackend::Say.args("Goodbye!", &config);
        assert_eq!(args, vec!["-r", "185", "-v", "Samantha", "Goodbye!"]);
    }

    #[test]
    fn test_espeak_args_without_voice_preference() {
        let config = SpeechConfig {
            prefer_female_voice: false,
            rate: 150,
            ..SpeechConfig::default()
        };
        let backend = SpeechBackend::Espeak { program: "espeak-ng" };
        assert_eq!(backend.program(), "espeak-ng");
        assert_eq!(backend.args("Hello", &config), vec!["-s", "150", "Hello"]);
    }

    #[test]
    fn test_spd_say_waits() {
        let args = SpeechBackend::SpdSay.args("Hello", &SpeechConfig::default());
        assert_eq!(args.first().map(String::as_str), Some("-w"));
        assert_eq!(args.last().map(String::as_str), Some("Hello"));
    }

    #[test]
    fn test_powershell_escapes_quotes() {
        let args = SpeechBackend::PowerShell.args("Let's begin", &SpeechConfig::default());
        let script = args.last().unwrap();
        assert!(script.contains("$s.Speak('Let''s begin');"));
        assert!(script.contains("SelectVoiceByHints('Female')"));
        assert!(script.contains("$s.Rate = 0;"));
    }

    #[test]
    fn test_sapi_rate_mapping() {
        assert_eq!(sapi_rate(180), 0);
        assert_eq!(sapi_rate(185), 0);
        assert_eq!(sapi_rate(240), 3);
        assert_eq!(sapi_rate(80), -5);
        assert_eq!(sapi_rate(10_000), 10);
        assert_eq!(sapi_rate(0), -9);
    }

    #[test]
    fn test_disabled_speech_detects_nothing() {
        let config = SpeechConfig {
            enabled: false,
            ..SpeechConfig::default()
        };
        assert!(detect_engine(&config).is_none());
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let engine = CommandSpeech::new(
            SpeechBackend::Espeak { program: "definitely-not-a-synth-xyz" },
            SpeechConfig::default(),
        );
        assert!(engine.speak("Hello").is_err());
    }
}
