use std::path::PathBuf;

/// Errors surfaced while reading, painting, or displaying a mystery image.
///
/// Extraction itself never fails; malformed text simply yields fewer numbers.
#[derive(Debug, thiserror::Error)]
pub enum MysteryError {
    /// The input file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The number sequence does not hold the header plus one value per pixel.
    #[error("sequence too short: need {needed} numbers, found {found}")]
    SequenceTooShort { needed: u64, found: usize },

    /// A width or height does not fit the image buffer.
    #[error("image dimension {value} is too large")]
    DimensionTooLarge { value: u64 },

    /// A pixel coordinate fell outside the canvas.
    #[error("bad coordinate x {x} y {y} (vs. image width {width} height {height})")]
    BadCoordinate {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A fresh output file could not be created.
    #[error("failed to create output file in {}: {source}", dir.display())]
    Output {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PNG encoder rejected the canvas or the target path.
    #[error("failed to save image to {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The image viewer could not be launched.
    #[error("failed to launch viewer '{viewer}': {source}")]
    Viewer {
        viewer: String,
        #[source]
        source: std::io::Error,
    },
}
