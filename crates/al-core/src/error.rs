use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A source image could not be opened or decoded.
    #[error("Error opening {path}: {reason}")]
    ImageDecode {
        /// Path of the offending image.
        path: String,
        /// Underlying decoder or I/O message.
        reason: String,
    },

    /// No ASCII frames available for playback.
    #[error("No ASCII frames found in {dir}")]
    EmptyFrameSet {
        /// Directory that was scanned.
        dir: String,
    },

    /// Invalid width/height dimensions.
    #[error("Invalid dimensions: {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_frame_set_message_names_directory() {
        let err = CoreError::EmptyFrameSet {
            dir: "ascii_frames".into(),
        };
        assert_eq!(err.to_string(), "No ASCII frames found in ascii_frames");
    }
}
