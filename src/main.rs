use clap::Parser;
use small_tour::config::file::FileConfig;
use small_tour::utils::{logger, validation::Validate};
use small_tour::{CliConfig, DiceEntropy, SystemClock, TourEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-tour CLI");

    if let Some(path) = config.config.clone() {
        tracing::info!("Loading configuration from: {}", path);
        match FileConfig::from_file(&path) {
            Ok(file) => config.merge_file(&file),
            Err(e) => {
                tracing::error!("Failed to load config file '{}': {}", path, e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let entropy = DiceEntropy::new(config.seed);
    let engine = TourEngine::new(SystemClock, entropy, config);

    match engine.run() {
        Ok((transcript, report)) => {
            for line in transcript.lines() {
                println!("{}", line);
            }

            if let Some(path) = engine.write_transcript(&transcript)? {
                tracing::info!("Transcript saved to: {}", path);
            }

            tracing::info!(
                "Tour finished: {} sections, {} lines",
                report.sections.len(),
                report.line_count
            );
        }
        Err(e) => {
            tracing::error!("Tour failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
