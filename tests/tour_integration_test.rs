use chrono::{DateTime, Local, TimeZone};
use small_tour::domain::ports::{Clock, ConfigProvider, Entropy};
use small_tour::{DiceEntropy, Section, TourEngine, TourError};
use tempfile::TempDir;

struct FixedClock(DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

struct FixedEntropy(u8);

impl Entropy for FixedEntropy {
    fn digit(&self) -> u8 {
        self.0
    }
}

struct MockConfig {
    sections: Vec<String>,
    output: Option<String>,
}

impl MockConfig {
    fn new() -> Self {
        Self {
            sections: vec![],
            output: None,
        }
    }

    fn with_sections(names: &[&str]) -> Self {
        Self {
            sections: names.iter().map(|s| s.to_string()).collect(),
            output: None,
        }
    }
}

impl ConfigProvider for MockConfig {
    fn sections(&self) -> &[String] {
        &self.sections
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

fn fixed_clock() -> FixedClock {
    FixedClock(Local.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap())
}

#[test]
fn test_full_tour_transcript() {
    let engine = TourEngine::new(fixed_clock(), FixedEntropy(7), MockConfig::new());
    let (transcript, report) = engine.run().unwrap();

    assert_eq!(report.sections, Section::ALL.to_vec());
    assert_eq!(report.line_count, transcript.len());

    let lines = transcript.lines();
    assert_eq!(lines.len(), 22);

    // hello
    assert_eq!(lines[0], "hello, world");
    assert_eq!(lines[1], "Hello, world!");
    assert!(lines[2].starts_with("The time is 2026-05-01"));
    assert_eq!(lines[3], "My favorite number is: 7");
    assert_eq!(lines[4], "3.141592653589793");

    // functions
    assert_eq!(lines[5], "7");
    assert_eq!(lines[6], "22");
    assert_eq!(lines[7], "devops hello");
    assert_eq!(lines[8], "4 6");

    // variables
    assert_eq!(lines[9], "false false 0");
    assert_eq!(lines[10], "1 2 true false no!");

    // types
    assert_eq!(lines[11], "Type: bool Value: false");
    assert_eq!(lines[12], "Type: u64 Value: 18446744073709551615");
    assert!(lines[13].starts_with("Type: num_complex::Complex<f64> Value: "));
    assert_eq!(lines[14], "0 \"\"");

    // conversions
    assert_eq!(lines[15], "42 42 42");
    assert_eq!(lines[16], "Hello 世界");
    assert_eq!(lines[17], "Happy 3.14 Day");
    assert_eq!(lines[18], "Rust rules? true");

    // constants
    assert_eq!(lines[19], "21");
    assert_eq!(lines[20], "0.2");
    assert_eq!(lines[21], format!("{}", 2f64.powi(100) * 0.1));
}

#[test]
fn test_section_filter_runs_only_requested_lines() {
    let config = MockConfig::with_sections(&["functions"]);
    let engine = TourEngine::new(fixed_clock(), FixedEntropy(0), config);
    let (transcript, report) = engine.run().unwrap();

    assert_eq!(report.sections, vec![Section::Functions]);
    assert_eq!(transcript.lines(), ["7", "22", "devops hello", "4 6"]);
}

#[test]
fn test_sections_run_in_canonical_order() {
    let config = MockConfig::with_sections(&["constants", "hello", "constants"]);
    let engine = TourEngine::new(fixed_clock(), FixedEntropy(3), config);
    let (transcript, report) = engine.run().unwrap();

    assert_eq!(report.sections, vec![Section::Hello, Section::Constants]);
    let lines = transcript.lines();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "hello, world");
    assert_eq!(lines[5], "21");
}

#[test]
fn test_unknown_section_is_an_error() {
    let config = MockConfig::with_sections(&["channels"]);
    let engine = TourEngine::new(fixed_clock(), FixedEntropy(0), config);

    let err = engine.run().unwrap_err();
    assert!(matches!(
        err,
        TourError::UnknownSectionError { name } if name == "channels"
    ));
}

#[test]
fn test_seeded_runs_produce_identical_transcripts() {
    let run = || {
        let engine = TourEngine::new(fixed_clock(), DiceEntropy::new(Some(42)), MockConfig::new());
        let (transcript, _) = engine.run().unwrap();
        transcript.lines().to_vec()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_transcript_written_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir
        .path()
        .join("tour")
        .join("transcript.txt")
        .to_str()
        .unwrap()
        .to_string();

    let mut config = MockConfig::with_sections(&["functions", "constants"]);
    config.output = Some(output_path.clone());

    let engine = TourEngine::new(fixed_clock(), FixedEntropy(0), config);
    let (transcript, _) = engine.run().unwrap();

    let written = engine.write_transcript(&transcript).unwrap();
    assert_eq!(written.as_deref(), Some(output_path.as_str()));

    let content = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(content, transcript.render());
    assert!(content.starts_with("7\n22\n"));
    assert!(content.ends_with('\n'));
}

#[test]
fn test_write_transcript_without_output_path_is_noop() {
    let engine = TourEngine::new(fixed_clock(), FixedEntropy(0), MockConfig::new());
    let (transcript, _) = engine.run().unwrap();

    assert_eq!(engine.write_transcript(&transcript).unwrap(), None);
}
