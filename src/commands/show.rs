use crate::cli_util::print_error;
use crate::config::config;
use crate::paint::solve_mystery;

/// Paint the numbers hidden in `path` and open the image in a viewer.
pub fn run(program: &str, path: &str) -> i32 {
    match solve_mystery(path, config()) {
        Ok(png) => {
            log::info!("rendered {}", png.display());
            0
        }
        Err(err) => {
            print_error(program, &err);
            1
        }
    }
}
