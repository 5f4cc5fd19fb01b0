use crate::core::sections;
use crate::domain::model::{Section, TourReport, Transcript};
use crate::domain::ports::{Clock, ConfigProvider, Entropy};
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

pub struct TourEngine<C: Clock, E: Entropy, P: ConfigProvider> {
    clock: C,
    entropy: E,
    config: P,
}

impl<C: Clock, E: Entropy, P: ConfigProvider> TourEngine<C, E, P> {
    pub fn new(clock: C, entropy: E, config: P) -> Self {
        Self {
            clock,
            entropy,
            config,
        }
    }

    /// Runs the configured sections in canonical order and collects their
    /// output lines.
    pub fn run(&self) -> Result<(Transcript, TourReport)> {
        let plan = self.resolve_sections()?;
        let mut transcript = Transcript::new();

        for section in &plan {
            tracing::debug!("Running section: {}", section);
            let before = transcript.len();

            match section {
                Section::Hello => sections::hello::run(&self.clock, &self.entropy, &mut transcript),
                Section::Functions => sections::functions::run(&mut transcript),
                Section::Variables => sections::variables::run(&mut transcript),
                Section::Types => sections::types::run(&mut transcript),
                Section::Conversions => sections::conversions::run(&mut transcript),
                Section::Constants => sections::constants::run(&mut transcript),
            }

            tracing::debug!(
                "Section {} produced {} lines",
                section,
                transcript.len() - before
            );
        }

        let report = TourReport {
            line_count: transcript.len(),
            sections: plan,
        };
        Ok((transcript, report))
    }

    /// Writes the transcript to the configured output file, if any, and
    /// returns the path written to.
    pub fn write_transcript(&self, transcript: &Transcript) -> Result<Option<String>> {
        match self.config.output_path() {
            None => Ok(None),
            Some(path) => {
                if let Some(parent) = Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                fs::write(path, transcript.render())?;
                tracing::debug!("Transcript written to: {}", path);
                Ok(Some(path.to_string()))
            }
        }
    }

    /// Parses the requested section names, dropping duplicates; an empty
    /// request means the full tour. The result always follows canonical
    /// order regardless of how the request was spelled.
    fn resolve_sections(&self) -> Result<Vec<Section>> {
        let requested = self.config.sections();
        if requested.is_empty() {
            return Ok(Section::ALL.to_vec());
        }

        let mut picked: Vec<Section> = Vec::new();
        for name in requested {
            let section: Section = name.parse()?;
            if !picked.contains(&section) {
                picked.push(section);
            }
        }

        Ok(Section::ALL
            .iter()
            .copied()
            .filter(|s| picked.contains(s))
            .collect())
    }
}
