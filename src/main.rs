use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use colored::*;
use env_logger::{Builder, Env};
use log::debug;

use affirm::confirm;

#[derive(Parser)]
#[command(name = "affirm")]
#[command(about = "Ask for a yes/no confirmation from a shell script", long_about = None)]
struct Cli {
    /// The action to confirm; a question mark is appended
    action: String,

    /// Answer assumed when the user just hits enter
    #[arg(short, long, value_enum)]
    default: Option<DefaultAnswer>,

    /// Skip the prompt and take the default answer (batch mode)
    #[arg(short, long)]
    batch: bool,

    #[arg(short, long)]
    quiet: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum DefaultAnswer {
    Yes,
    No,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        // Set up logging
        Builder::from_env(Env::default().default_filter_or("debug"))
            .format_timestamp(None)
            .format_target(false)
            .init();
    }

    let default = cli.default.map(|d| matches!(d, DefaultAnswer::Yes));
    debug!("Prompting with default {:?}.", default);

    let answer = confirm(&cli.action, default, cli.batch);

    let (word, code) = match answer {
        Some(true) => ("confirmed".green(), ExitCode::SUCCESS),
        Some(false) => ("declined".red(), ExitCode::from(1)),
        None => ("unanswered".yellow(), ExitCode::from(2)),
    };

    if !cli.quiet {
        println!("{word}");
    }

    code
}
