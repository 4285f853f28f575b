use clap::Parser;
use stacklint::cli::Cli;
use stacklint::runner;
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    let all_valid = runner::validate_all(Path::new("."));
    process::exit(if all_valid { 0 } else { 1 });
}
