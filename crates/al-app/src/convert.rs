use std::fs;
use std::path::{Path, PathBuf};

use al_ascii::luminance::{map_to_glyphs, to_grayscale};
use al_core::charset::GlyphRamp;
use al_core::config::AnimConfig;
use al_core::frame::AsciiFrame;
use al_source::folder::{is_missing_or_empty, scan_frames};
use al_source::image::load_image;
use al_source::resize::FrameFitter;
use anyhow::{Context, Result};

/// Progress is logged every this many frames.
const PROGRESS_EVERY: usize = 10;

/// Outcome of a [`Converter::convert_all`] run.
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Source images found.
    pub total: usize,
    /// Text frames written.
    pub converted: usize,
    /// Images that could not be decoded.
    pub skipped: Vec<PathBuf>,
}

impl ConversionReport {
    /// `true` if the run wrote no frame at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.converted == 0
    }
}

/// `true` when a progress line is due after `done` frames.
fn is_progress_tick(done: usize) -> bool {
    done > 0 && done % PROGRESS_EVERY == 0
}

/// `true` if frames must be (re)generated into `output_dir`.
pub fn needs_conversion(output_dir: &Path, force: bool) -> bool {
    force || is_missing_or_empty(output_dir)
}

/// Image → ASCII frame converter holding the reusable resize state.
pub struct Converter {
    ramp: GlyphRamp,
    extension: String,
    fitter: FrameFitter,
}

impl Converter {
    /// Build a converter from the `[convert]` settings.
    pub fn from_config(config: &AnimConfig) -> Self {
        Self {
            ramp: config.glyph_ramp(),
            extension: config.extension.clone(),
            fitter: FrameFitter::new(config.width, config.char_aspect),
        }
    }

    /// Decode, resize, grayscale and map one image.
    ///
    /// # Errors
    /// Returns an error if the image cannot be decoded or has zero size.
    pub fn convert_one(&mut self, path: &Path) -> Result<AsciiFrame> {
        let src = load_image(path)?;
        let resized = self
            .fitter
            .fit(src)
            .with_context(|| format!("Cannot resize {}", path.display()))?;
        let luma = to_grayscale(&resized);
        Ok(map_to_glyphs(&luma, &self.ramp))
    }

    /// Convert every source image of `source_dir` into `dest_dir/<stem>.txt`.
    ///
    /// Undecodable images are logged and skipped. Files already written stay
    /// in place if a later write fails.
    ///
    /// # Errors
    /// Returns an error if `source_dir` cannot be listed, `dest_dir` cannot be
    /// created, or a frame cannot be written.
    pub fn convert_all(&mut self, source_dir: &Path, dest_dir: &Path) -> Result<ConversionReport> {
        fs::create_dir_all(dest_dir)
            .with_context(|| format!("Cannot create {}", dest_dir.display()))?;

        let sources = scan_frames(source_dir, &self.extension)?;
        let total = sources.len();
        let mut report = ConversionReport {
            total,
            ..Default::default()
        };

        log::info!("Converting {total} frames to ASCII art...");
        for (i, path) in sources.iter().enumerate() {
            match self.convert_one(path) {
                Ok(frame) => {
                    let out = dest_dir.join(output_name(path));
                    fs::write(&out, frame.to_text())
                        .with_context(|| format!("Cannot write {}", out.display()))?;
                    report.converted += 1;
                }
                Err(e) => {
                    log::warn!("Skipping frame: {e:#}");
                    report.skipped.push(path.clone());
                }
            }

            let done = i + 1;
            if is_progress_tick(done) {
                log::info!("  Processed {done}/{total} frames");
            }
        }

        log::info!(
            "Done! {} ASCII frames saved to {} ({} skipped)",
            report.converted,
            dest_dir.display(),
            report.skipped.len()
        );
        Ok(report)
    }
}

/// `0001.png` → `0001.txt`.
fn output_name(source: &Path) -> PathBuf {
    Path::new(source.file_name().unwrap_or_default()).with_extension(al_render::player::FRAME_EXT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn write_png(dir: &Path, name: &str, w: u32, h: u32, value: u8) {
        RgbImage::from_pixel(w, h, Rgb([value, value, value]))
            .save(dir.join(name))
            .unwrap();
    }

    fn converter(width: u32) -> Converter {
        Converter::from_config(&AnimConfig {
            width,
            ..AnimConfig::default()
        })
    }

    fn txt_files(dir: &Path) -> Vec<PathBuf> {
        scan_frames(dir, "txt").unwrap()
    }

    #[test]
    fn converts_every_valid_image_with_uniform_rows() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        for (i, value) in [0u8, 128, 255].iter().enumerate() {
            write_png(src.path(), &format!("frame_{i:04}.png"), 40, 20, *value);
        }

        let report = converter(10).convert_all(src.path(), dst.path()).unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.converted, 3);
        assert!(report.skipped.is_empty());
        let files = txt_files(dst.path());
        assert_eq!(files.len(), 3);
        // 10 * (20/40) * 0.55 = 2.75 → 3 rows
        for file in &files {
            let frame = AsciiFrame::parse(&fs::read_to_string(file).unwrap()).unwrap();
            assert_eq!(frame.height(), 3);
            assert_eq!(frame.width(), 10);
        }
    }

    #[test]
    fn dark_and_light_images_use_ramp_extremes() {
        let src = tempfile::tempdir().unwrap();
        write_png(src.path(), "black.png", 16, 16, 0);
        write_png(src.path(), "white.png", 16, 16, 255);
        let mut conv = converter(8);

        let black = conv.convert_one(&src.path().join("black.png")).unwrap();
        let white = conv.convert_one(&src.path().join("white.png")).unwrap();

        assert!(black.rows().iter().all(|r| r.chars().all(|c| c == '@')));
        assert!(white.rows().iter().all(|r| r.chars().all(|c| c == ' ')));
        assert!(!black.to_text().ends_with('\n'));
    }

    #[test]
    fn corrupt_image_is_skipped_without_failing_batch() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write_png(src.path(), "0001.png", 20, 20, 10);
        fs::write(src.path().join("0002.png"), b"\x89PNG garbage").unwrap();
        write_png(src.path(), "0003.png", 20, 20, 200);

        let report = converter(10).convert_all(src.path(), dst.path()).unwrap();

        assert_eq!(report.converted, 2);
        assert_eq!(report.skipped, vec![src.path().join("0002.png")]);
        let names: Vec<String> = txt_files(dst.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["0001.txt", "0003.txt"]);
    }

    #[test]
    fn destination_is_created_and_other_extensions_ignored() {
        let src = tempfile::tempdir().unwrap();
        let root = tempfile::tempdir().unwrap();
        let dst = root.path().join("nested").join("ascii_frames");
        write_png(src.path(), "0001.png", 8, 8, 90);
        fs::write(src.path().join("readme.md"), "not a frame").unwrap();

        assert!(needs_conversion(&dst, false));
        let report = converter(4).convert_all(src.path(), &dst).unwrap();

        assert_eq!(report.total, 1);
        assert!(dst.join("0001.txt").is_file());
        assert!(!needs_conversion(&dst, false));
        assert!(needs_conversion(&dst, true));
    }

    #[test]
    fn missing_source_directory_is_fatal() {
        let dst = tempfile::tempdir().unwrap();
        let err = converter(10)
            .convert_all(Path::new("/nonexistent/frames"), dst.path())
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/frames"));
    }

    #[test]
    fn progress_is_logged_every_ten_frames() {
        let ticks: Vec<usize> = (0..=35).filter(|&d| is_progress_tick(d)).collect();
        assert_eq!(ticks, [10, 20, 30]);
        assert!(!is_progress_tick(9));
        assert!(!is_progress_tick(11));
    }

    #[test]
    fn batch_past_progress_interval_converts_everything() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        for i in 0..12u8 {
            write_png(src.path(), &format!("{i:04}.png"), 8, 8, i * 20);
        }

        let report = converter(4).convert_all(src.path(), dst.path()).unwrap();

        assert_eq!(report.total, 12);
        assert_eq!(report.converted, 12);
        assert!(!report.is_empty());
        assert_eq!(txt_files(dst.path()).len(), 12);
    }

    #[test]
    fn all_corrupt_sources_yield_empty_report() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        fs::write(src.path().join("0001.png"), b"nope").unwrap();

        let report = converter(4).convert_all(src.path(), dst.path()).unwrap();

        assert_eq!(report.total, 1);
        assert!(report.is_empty());
        assert!(needs_conversion(dst.path(), false));
    }

    #[test]
    fn output_name_swaps_extension() {
        assert_eq!(
            output_name(Path::new("/x/frames/0042.png")),
            PathBuf::from("0042.txt")
        );
    }
}
