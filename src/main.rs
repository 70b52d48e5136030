use std::io::Write;

use clap::Parser;
use idea_evaluator::config::{Settings, QUESTIONS};
use idea_evaluator::controller::run_sessions;
use idea_evaluator::prompt::{Console, PromptError};
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT_CLOSED: i32 = 1;
const EXIT_IO: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "idea-evaluator")]
#[command(about = "Rate an idea against ten criteria and get a score out of 100", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging (written to stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    // Built explicitly so stdout stays reserved for the questionnaire
    let filter = if verbose {
        EnvFilter::new("idea_evaluator=debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::detect();
    tracing::debug!("display settings: {:?}", settings);

    let mut console = Console::stdio();
    match run_sessions(&mut console, &QUESTIONS, &settings) {
        Ok(totals) => {
            tracing::debug!("completed {} evaluation(s): {:?}", totals.len(), totals);
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            let input_closed = e.chain().any(|cause| {
                matches!(
                    cause.downcast_ref::<PromptError>(),
                    Some(PromptError::InputClosed)
                )
            });
            if input_closed {
                // Closing stdin is how a user walks away mid-questionnaire
                tracing::debug!("{:#}", e);
                let _ = writeln!(std::io::stdout());
                std::process::exit(EXIT_INPUT_CLOSED);
            }
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_IO);
        }
    }
}
