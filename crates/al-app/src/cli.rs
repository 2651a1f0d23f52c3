use std::path::PathBuf;

use al_core::config::AnimConfig;
use clap::Parser;

/// asciiloop: turn an image sequence into a looping terminal ASCII animation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file. Default: config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Directory of source images (overrides `convert.source_dir`).
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Directory for ASCII frames (overrides `convert.output_dir`).
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Output width in characters.
    #[arg(long)]
    pub width: Option<u32>,

    /// Playback frame rate.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Play the frames once instead of looping.
    #[arg(long, default_value_t = false)]
    pub no_loop: bool,

    /// Reconvert even if the output directory already holds frames.
    #[arg(long, default_value_t = false)]
    pub force: bool,

    /// Convert frames and exit without playing.
    #[arg(long, default_value_t = false)]
    pub convert_only: bool,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Apply command-line overrides on top of the file configuration.
    pub fn apply_overrides(&self, config: &mut AnimConfig) {
        if let Some(ref dir) = self.source {
            config.source_dir.clone_from(dir);
        }
        if let Some(ref dir) = self.output {
            config.output_dir.clone_from(dir);
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if self.no_loop {
            config.looping = false;
        }
        config.clamp_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_config_untouched() {
        let cli = Cli::try_parse_from(["asciiloop"]).unwrap();
        let mut config = AnimConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, AnimConfig::default());
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "asciiloop",
            "--source",
            "jelly/frames",
            "--output",
            "jelly/ascii",
            "--width",
            "100",
            "--fps",
            "0",
            "--no-loop",
        ])
        .unwrap();
        let mut config = AnimConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.source_dir, PathBuf::from("jelly/frames"));
        assert_eq!(config.output_dir, PathBuf::from("jelly/ascii"));
        assert_eq!(config.width, 100);
        assert_eq!(config.fps, 1);
        assert!(!config.looping);
    }
}
