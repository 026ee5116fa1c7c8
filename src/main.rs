use clap::Parser;
use parse_mystery::cli_util::{init_logging, normalize_args};
use parse_mystery::commands;
use std::env;
use std::io::{self, Write};

fn print_usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} -nums <PATH>   # Print the numbers hidden in PATH
  {0} <PATH>         # Paint the numbers as a grayscale image and open it

Options:
  -nums, --nums <PATH>  Print the parsed list instead of rendering
  --help, -h            Show this help

Notes:
- A digit run followed by '$' is read backwards; one followed by '^' is dropped.
- The first two numbers are the width and height; the rest are gray levels.
- Set PARSE_MYSTERY_LOG=debug for diagnostics on stderr.
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}

#[derive(Parser, Debug)]
#[command(name = "parse-mystery", disable_help_flag = true)]
struct Cli {
    /// Print the parsed list instead of rendering
    #[arg(long = "nums", value_name = "PATH")]
    nums: Option<String>,

    /// File to paint
    #[arg(value_name = "PATH")]
    file: Option<String>,

    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    help: bool,
}

fn main() {
    // argv[0] prefixes usage text and error messages
    let program = env::args().next().unwrap_or_else(|| String::from("parse-mystery"));

    init_logging();
    let cli = Cli::parse_from(normalize_args(env::args_os()));

    if cli.help {
        print_usage_and_exit(&program, 0);
    }

    let code = match (cli.nums, cli.file) {
        (Some(path), None) => commands::nums::run(&program, &path),
        (None, Some(path)) => commands::show::run(&program, &path),
        (Some(_), Some(_)) => {
            eprintln!("{program}: cannot use -nums together with a positional PATH");
            print_usage_and_exit(&program, 2);
        }
        (None, None) => print_usage_and_exit(&program, 2),
    };

    std::process::exit(code);
}
