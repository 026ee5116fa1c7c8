use std::path::{Path, PathBuf};

use crate::aggregate::parse_file;
use crate::canvas::{clamp, BackColor, Canvas};
use crate::config::RenderConfig;
use crate::error::MysteryError;

/// Number of leading values that describe the image (width, height).
pub const HEADER_LEN: usize = 2;

fn dimension(value: u64) -> Result<u32, MysteryError> {
    u32::try_from(value).map_err(|_| MysteryError::DimensionTooLarge { value })
}

/// Paint `nums` into a grayscale canvas on a white background.
///
/// `nums[0]` is the width and `nums[1]` the height; every following value is
/// the gray level of one pixel in row-major order, clamped to `0..=255`.
/// Values past the last pixel are ignored.
pub fn paint(nums: &[u64]) -> Result<Canvas, MysteryError> {
    paint_on(nums, BackColor::White)
}

/// Like [`paint`], but starting from a canvas filled with `back`.
pub fn paint_on(nums: &[u64], back: BackColor) -> Result<Canvas, MysteryError> {
    let [width, height] = match nums {
        [w, h, ..] => [*w, *h],
        _ => {
            return Err(MysteryError::SequenceTooShort {
                needed: HEADER_LEN as u64,
                found: nums.len(),
            });
        }
    };

    // Checked before allocating so a bogus header fails fast.
    let needed = width
        .checked_mul(height)
        .and_then(|area| area.checked_add(HEADER_LEN as u64))
        .unwrap_or(u64::MAX);
    if (nums.len() as u64) < needed {
        return Err(MysteryError::SequenceTooShort {
            needed,
            found: nums.len(),
        });
    }

    let mut canvas = Canvas::blank_with(dimension(width)?, dimension(height)?, back);
    let (w, h) = (canvas.width(), canvas.height());
    let coords = (0..h).flat_map(|y| (0..w).map(move |x| (x, y)));
    for ((x, y), &value) in coords.zip(&nums[HEADER_LEN..]) {
        let gray = clamp(value);
        canvas.set_rgb(x, y, gray, gray, gray)?;
    }
    log::debug!("painted {width}x{height} image");
    Ok(canvas)
}

/// Parse `path`, paint the result and open it in the configured viewer.
///
/// Returns the path of the PNG handed to the viewer.
pub fn solve_mystery(
    path: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<PathBuf, MysteryError> {
    let nums = parse_file(path)?;
    let canvas = paint_on(&nums, config.back_color)?;
    canvas.show(config)
}
