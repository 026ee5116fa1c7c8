use std::error::Error;
use std::ffi::OsString;
use std::io::{self, Write};

use env_logger::Env;
use log::LevelFilter;

use crate::MysteryError;

/// Environment variable holding an `env_logger` filter, e.g. `debug`.
pub const LOG_ENV: &str = "PARSE_MYSTERY_LOG";

/// Route `log` output to stderr; `warn` unless overridden by [`LOG_ENV`].
pub fn init_logging() {
    let _ = env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .format_timestamp(None)
        .parse_env(Env::new().filter(LOG_ENV))
        .try_init();
}

/// Accept the single-dash `-nums` spelling by rewriting it to `--nums`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|a| if a == "-nums" { OsString::from("--nums") } else { a })
        .collect()
}

/// Render numbers as a bracketed, comma separated list: `[1, 2, 3]`.
pub fn format_nums(nums: &[u64]) -> String {
    let items: Vec<String> = nums.iter().map(u64::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Print `err` and its sources to stderr, prefixed with the program name.
pub fn print_error(program: &str, err: &MysteryError) {
    eprintln!("{program}: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        // thiserror messages already embed the direct source.
        if !err.to_string().contains(&cause.to_string()) {
            eprintln!("  caused by: {cause}");
        }
        source = cause.source();
    }
    let _ = io::stderr().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_empty_and_filled() {
        assert_eq!(format_nums(&[]), "[]");
        assert_eq!(format_nums(&[800, 600, 64]), "[800, 600, 64]");
    }

    #[test]
    fn single_dash_nums_is_rewritten() {
        let args = normalize_args(["prog", "-nums", "file.txt"].map(OsString::from));
        assert_eq!(args, vec!["prog", "--nums", "file.txt"]);
    }

    #[test]
    fn other_args_pass_through() {
        let args = normalize_args(["prog", "--nums", "-n"].map(OsString::from));
        assert_eq!(args, vec!["prog", "--nums", "-n"]);
    }
}
