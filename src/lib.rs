//! Pull integers out of noisy text and paint them as a grayscale image.
//!
//! Each line of input is scanned for runs of decimal digits. The character
//! right after a run controls it:
//! - `$` means the run is read backwards (`12$` yields 21, `100$` yields 1),
//! - `^` means the run is dropped,
//! - anything else, including the end of the line, keeps the run as is.
//!
//! The numbers of all lines, in order, then describe an image: the first two
//! are its width and height, and each following number is the gray level of
//! one pixel, row by row.
//!
//! Quick start:
//!
//! ```no_run
//! use parse_mystery::{paint, parse_file};
//!
//! let nums = parse_file("mystery.txt").expect("readable input");
//! let canvas = paint(&nums).expect("enough numbers for the image");
//! canvas.save("mystery.png").expect("writable output");
//! ```

pub mod aggregate;
pub mod canvas;
pub mod cli_util;
pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod paint;

pub use aggregate::{parse_file, parse_reader};
pub use canvas::{BackColor, Canvas};
pub use config::RenderConfig;
pub use error::MysteryError;
pub use extract::parse_line;
pub use paint::{paint, solve_mystery};
