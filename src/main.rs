mod ui;

use run_summary::cli::CliArgs;
use run_summary::{config, report};
use std::io;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = CliArgs::parse_args();

    // Resolve trend columns, time unit and colors
    let config = match config::build_summary_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    // Load the finished run
    let mut input = match config::load_summary_input(args.input_path().map(|p| p.as_path())) {
        Ok(input) => input,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    };
    config.apply_to(&mut input);

    let stdout = io::stdout();
    report::summarize(stdout.lock(), &config.indent, &mut input, &config.columns, config.palette());
}
