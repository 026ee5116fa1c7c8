//! A small pixel-addressable RGB canvas.
//!
//! Wraps an [`image::RgbImage`] with bounds-checked get/set by coordinate,
//! PNG saving, and a `show` that hands the saved file to an image viewer.

use std::fmt;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use image::{ImageError, ImageFormat, Rgb, RgbImage};

use crate::config::RenderConfig;
use crate::error::MysteryError;

/// Name of the PNG written by [`Canvas::show`] into a configured output directory.
pub const OUTPUT_FILE: &str = "parse-mystery.png";

/// Prefix of the uniquely named PNGs written by [`Canvas::save_unique`].
pub const TEMP_PREFIX: &str = "parse-mystery-";

/// Limit `value` to a single color channel, `0..=255`.
pub fn clamp(value: u64) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

/// Named fill colors for a blank canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackColor {
    #[default]
    White,
    Black,
    Red,
    Green,
    Blue,
}

impl BackColor {
    /// Look up a color by name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name.trim().to_ascii_lowercase().as_str() {
            "white" => BackColor::White,
            "black" => BackColor::Black,
            "red" => BackColor::Red,
            "green" => BackColor::Green,
            "blue" => BackColor::Blue,
            _ => return None,
        })
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            BackColor::White => [255, 255, 255],
            BackColor::Black => [0, 0, 0],
            BackColor::Red => [255, 0, 0],
            BackColor::Green => [0, 255, 0],
            BackColor::Blue => [0, 0, 255],
        }
    }
}

impl fmt::Display for BackColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackColor::White => "white",
            BackColor::Black => "black",
            BackColor::Red => "red",
            BackColor::Green => "green",
            BackColor::Blue => "blue",
        };
        write!(f, "{name}")
    }
}

/// An RGB image addressed by `(x, y)`, origin at the top left.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    /// Create a white canvas of the given size.
    pub fn blank(width: u32, height: u32) -> Self {
        Self::blank_with(width, height, BackColor::White)
    }

    /// Create a canvas of the given size filled with `back`.
    pub fn blank_with(width: u32, height: u32, back: BackColor) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, Rgb(back.rgb())),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn check(&self, x: u32, y: u32) -> Result<(), MysteryError> {
        if x >= self.width() || y >= self.height() {
            return Err(MysteryError::BadCoordinate {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }

    /// The `[red, green, blue]` value at `(x, y)`.
    pub fn get_rgb(&self, x: u32, y: u32) -> Result<[u8; 3], MysteryError> {
        self.check(x, y)?;
        Ok(self.pixels.get_pixel(x, y).0)
    }

    /// Set the pixel at `(x, y)`.
    pub fn set_rgb(
        &mut self,
        x: u32,
        y: u32,
        red: u8,
        green: u8,
        blue: u8,
    ) -> Result<(), MysteryError> {
        self.check(x, y)?;
        self.pixels.put_pixel(x, y, Rgb([red, green, blue]));
        Ok(())
    }

    /// Borrow the underlying image buffer.
    pub fn as_image(&self) -> &RgbImage {
        &self.pixels
    }

    /// Encode the canvas as PNG at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MysteryError> {
        let path = path.as_ref();
        self.pixels
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| MysteryError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("saved {}x{} image to {}", self.width(), self.height(), path.display());
        Ok(())
    }

    /// Encode the canvas into a new, uniquely named PNG inside `dir`.
    ///
    /// The file is created exclusively, so an existing file or link at the
    /// chosen name is never written through. It is kept after return.
    pub fn save_unique(&self, dir: &Path) -> Result<PathBuf, MysteryError> {
        let output_err = |source| MysteryError::Output {
            dir: dir.to_path_buf(),
            source,
        };
        let (file, path) = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(".png")
            .tempfile_in(dir)
            .map_err(output_err)?
            .keep()
            .map_err(|e| output_err(e.error))?;

        let encode_err = |source| MysteryError::Encode {
            path: path.clone(),
            source,
        };
        let mut writer = BufWriter::new(file);
        self.pixels
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(encode_err)?;
        writer
            .flush()
            .map_err(|e| encode_err(ImageError::IoError(e)))?;
        log::debug!("saved {}x{} image to {}", self.width(), self.height(), path.display());
        Ok(path)
    }

    /// Save the canvas and open it in a viewer.
    ///
    /// With a configured output directory the PNG is `<dir>/parse-mystery.png`;
    /// otherwise it is a fresh file in the OS temp dir. Returns the path of the
    /// written PNG. The viewer is spawned and not waited on.
    pub fn show(&self, config: &RenderConfig) -> Result<PathBuf, MysteryError> {
        let path = match config.output_dir.as_deref() {
            Some(dir) => {
                let path = dir.join(OUTPUT_FILE);
                self.save(&path)?;
                path
            }
            None => self.save_unique(&std::env::temp_dir())?,
        };

        let mut cmd = viewer_command(config.viewer.as_deref());
        cmd.arg(&path);
        let viewer = cmd.get_program().to_string_lossy().into_owned();
        log::info!("opening {} with {viewer}", path.display());
        cmd.spawn()
            .map_err(|source| MysteryError::Viewer { viewer, source })?;
        Ok(path)
    }
}

/// Build the command that opens an image file, without the file argument.
///
/// A configured viewer is split on whitespace so it may carry its own flags.
fn viewer_command(configured: Option<&str>) -> Command {
    if let Some(mut parts) = configured.map(str::split_whitespace) {
        if let Some(program) = parts.next() {
            let mut cmd = Command::new(program);
            cmd.args(parts);
            return cmd;
        }
    }

    if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    }
}
