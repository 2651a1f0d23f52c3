use std::time::Duration;

use al_core::cancel::CancelToken;
use al_core::config::AnimConfig;
use al_render::{Player, StopReason, TerminalRenderer, ThreadPacer};
use anyhow::{Context, Result};
use clap::Parser;

pub mod cli;
pub mod convert;

fn main() -> Result<()> {
    // 1. Parse CLI
    let cli = cli::Cli::parse();

    // 2. Logging (stderr, frames go to stdout)
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    // 3. Config file + CLI overrides
    let mut config = resolve_config(&cli)?;
    cli.apply_overrides(&mut config);

    // 4. Convert once. Ctrl+C keeps its default behaviour here and ends the process.
    if convert::needs_conversion(&config.output_dir, cli.force) {
        log::info!("Converting frames to ASCII art...");
        let mut converter = convert::Converter::from_config(&config);
        let report = converter.convert_all(&config.source_dir, &config.output_dir)?;
        if report.is_empty() {
            log::warn!(
                "No frames converted from {} ({} found, {} skipped)",
                config.source_dir.display(),
                report.total,
                report.skipped.len()
            );
        }
    } else {
        log::info!(
            "ASCII frames already exist in {}",
            config.output_dir.display()
        );
    }

    if cli.convert_only {
        return Ok(());
    }

    // 5. Ctrl+C only flips the token from here on; playback notices it at the next frame.
    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .context("Cannot install Ctrl+C handler")?;

    // 6. Play
    log::info!("Starting animation...");
    let mut player = Player::new(TerminalRenderer::stdout(), ThreadPacer, cancel)
        .with_start_delay(Duration::from_millis(config.start_delay_ms));
    let summary = player.play(&config.output_dir, config.fps, config.looping)?;
    if summary.reason != StopReason::NoFrames {
        log::info!(
            "{} frames shown over {} complete pass(es)",
            summary.frames_shown,
            summary.passes_completed
        );
    }
    Ok(())
}

/// Load `--config` if present, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<AnimConfig> {
    if cli.config.exists() {
        al_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config not found: {}. Using defaults.",
            cli.config.display()
        );
        Ok(AnimConfig::default())
    }
}
