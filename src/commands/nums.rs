use std::io::{self, Write};

use crate::aggregate::parse_file;
use crate::cli_util::{format_nums, print_error};

/// Print the numbers hidden in `path` as `[a, b, c]`.
pub fn run(program: &str, path: &str) -> i32 {
    let nums = match parse_file(path) {
        Ok(nums) => nums,
        Err(err) => {
            print_error(program, &err);
            return 1;
        }
    };

    println!("{}", format_nums(&nums));
    let _ = io::stdout().flush();
    0
}
