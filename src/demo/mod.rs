pub mod params;

use std::fmt::Display;

use chrono::Local;
use serde::Serialize;

pub use params::{SynthesisParams, SLIDERS};

pub const EMPTY_TEXT_MESSAGE: &str =
    "(demo) Please provide a short sentence to simulate TTS on public datasets.";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The two panels filled in after a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoOutput {
    pub explanation: String,
    pub config: String,
}

/// Describe a streaming TTS run, stamped with the current local time.
pub fn run(params: &SynthesisParams) -> DemoOutput {
    tracing::debug!(
        chars = params.text.len(),
        speaking_rate = params.speaking_rate,
        prosody_strength = params.prosody_strength,
        temperature = params.temperature,
        chunk_ms = params.chunk_ms,
        "Simulating streaming TTS"
    );

    render(params, Local::now().format(TIMESTAMP_FORMAT))
}

pub fn render(params: &SynthesisParams, timestamp: impl Display) -> DemoOutput {
    DemoOutput {
        explanation: explanation(&params.text),
        config: config_summary(params, timestamp),
    }
}

fn explanation(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return EMPTY_TEXT_MESSAGE.to_string();
    }

    format!(
        "[Demo Output] This WebUI describes how a streaming TTS model trained on public datasets would behave.\n\n\
         - Input text snippet:\n{}\n\n\
         - In practice, the model would have been trained on open TTS corpora and evaluated on standardized benchmarks.",
        text
    )
}

fn config_summary(params: &SynthesisParams, timestamp: impl Display) -> String {
    let speaker_hint = if params.speaker_hint.is_empty() {
        "N/A"
    } else {
        params.speaker_hint.as_str()
    };

    format!(
        "timestamp: {}\n\
         speaker hint: {}\n\
         speaking rate: {:.2}\n\
         prosody strength: {:.2}\n\
         temperature: {:.2}\n\
         chunk size: {} ms\n",
        timestamp,
        speaker_hint,
        params.speaking_rate,
        params.prosody_strength,
        params.temperature,
        params.chunk_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    const TS: &str = "2024-05-01 12:34:56";

    fn hello() -> SynthesisParams {
        SynthesisParams {
            text: "Hello world".into(),
            ..Default::default()
        }
    }

    #[test]
    fn whitespace_text_gives_placeholder() {
        for text in ["", "  ", "\n\t  "] {
            let params = SynthesisParams {
                text: text.into(),
                ..Default::default()
            };
            assert_eq!(render(&params, TS).explanation, EMPTY_TEXT_MESSAGE);
        }
    }

    #[test]
    fn explanation_echoes_trimmed_text() {
        let params = SynthesisParams {
            text: "  Good  morning,\nfriends.  ".into(),
            ..Default::default()
        };
        let out = render(&params, TS);
        assert!(out.explanation.contains("Good  morning,\nfriends."));
        assert!(!out.explanation.contains("  Good"));
        assert!(out.explanation.starts_with("[Demo Output]"));
        assert_eq!(out.explanation.split("\n\n").count(), 3);
    }

    #[test]
    fn hello_world_scenario() {
        let out = render(&hello(), TS);
        assert!(out.explanation.contains("Hello world"));

        let lines: Vec<&str> = out.config.lines().collect();
        assert_eq!(lines[1], "speaker hint: N/A");
        assert!(out.config.contains("speaking rate: 1.00"));
        assert!(out.config.contains("prosody strength: 1.00"));
        assert!(out.config.contains("temperature: 0.90"));
        assert!(out.config.contains("chunk size: 160 ms"));
    }

    #[test]
    fn config_has_six_labelled_lines() {
        let params = SynthesisParams {
            speaker_hint: "calm narrator".into(),
            speaking_rate: 0.55,
            prosody_strength: 1.5,
            temperature: 0.3,
            chunk_ms: 80,
            ..hello()
        };
        let out = render(&params, TS);

        let patterns = [
            r"^timestamp: \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$",
            r"^speaker hint: .+$",
            r"^speaking rate: \d+\.\d{2}$",
            r"^prosody strength: \d+\.\d{2}$",
            r"^temperature: \d+\.\d{2}$",
            r"^chunk size: \d+ ms$",
        ];
        let lines: Vec<&str> = out.config.lines().collect();
        assert_eq!(lines.len(), patterns.len());
        for (line, pattern) in lines.iter().zip(patterns) {
            assert!(Regex::new(pattern).unwrap().is_match(line), "{line:?}");
        }

        assert_eq!(lines[1], "speaker hint: calm narrator");
        assert_eq!(lines[5], "chunk size: 80 ms");
        assert!(out.config.ends_with('\n'));
    }

    #[test]
    fn run_stamps_current_time() {
        let out = run(&hello());
        let first = out.config.lines().next().unwrap();
        let stamp = first.strip_prefix("timestamp: ").unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn repeated_runs_differ_only_in_timestamp() {
        let a = run(&hello());
        let b = run(&hello());
        assert_eq!(a.explanation, b.explanation);

        let tail = |s: &str| s.lines().skip(1).collect::<Vec<_>>().join("\n");
        assert_eq!(tail(&a.config), tail(&b.config));
    }
}
