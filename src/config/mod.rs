pub mod cli;
pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-tour")]
#[command(about = "Prints a guided tour of basic language syntax")]
pub struct CliConfig {
    /// Sections to run (comma-separated); the full tour when omitted
    #[arg(long, value_delimiter = ',')]
    pub sections: Vec<String>,

    #[arg(long, help = "Seed for the random-digit line")]
    pub seed: Option<u64>,

    #[arg(long, help = "Also write the transcript to this file")]
    pub output: Option<String>,

    #[arg(long, help = "Load options from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Fills in options the command line left unset. Arguments given on the
    /// command line always win over file values.
    pub fn merge_file(&mut self, file: &file::FileConfig) {
        if self.sections.is_empty() {
            if let Some(sections) = &file.sections {
                self.sections = sections.clone();
            }
        }
        if self.seed.is_none() {
            self.seed = file.seed;
        }
        if self.output.is_none() {
            self.output = file.output.clone();
        }
    }
}

impl ConfigProvider for CliConfig {
    fn sections(&self) -> &[String] {
        &self.sections
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_section_names(&self.sections)?;
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }
        Ok(())
    }
}
