use crate::utils::error::TourError;
use std::fmt;
use std::str::FromStr;

/// One segment of the tour, in the order the full transcript presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hello,
    Functions,
    Variables,
    Types,
    Conversions,
    Constants,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hello,
        Section::Functions,
        Section::Variables,
        Section::Types,
        Section::Conversions,
        Section::Constants,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Hello => "hello",
            Section::Functions => "functions",
            Section::Variables => "variables",
            Section::Types => "types",
            Section::Conversions => "conversions",
            Section::Constants => "constants",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = TourError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hello" => Ok(Section::Hello),
            "functions" => Ok(Section::Functions),
            "variables" => Ok(Section::Variables),
            "types" => Ok(Section::Types),
            "conversions" => Ok(Section::Conversions),
            "constants" => Ok(Section::Constants),
            other => Err(TourError::UnknownSectionError {
                name: other.to_string(),
            }),
        }
    }
}

/// Ordered output lines collected while the tour runs.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Newline-terminated rendering, as written to the output file.
    pub fn render(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

#[derive(Debug, Clone)]
pub struct TourReport {
    pub sections: Vec<Section>,
    pub line_count: usize,
}
