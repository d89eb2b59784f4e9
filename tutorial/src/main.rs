//! Interactive lesson runner.
//!
//! Runs a lesson's checks against the workbook, tracks per-lesson progress in
//! a per-user `status.json`, and can reset progress or copy a reference
//! solution into place.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use tracing::debug;

use tutorial::commands::{self, CommandOutcome};
use tutorial::context::TutorialContext;
use tutorial::core::catalog::list_ids;
use tutorial::exit_codes;
use tutorial::io::config::{DEFAULT_CONFIG_FILE, load_config};
use tutorial::io::paths::TutorialPaths;
use tutorial::io::prompt::TerminalConfirm;
use tutorial::io::runner::CommandRunner;
use tutorial::logging;
use tutorial::style::{Console, Styler};

#[derive(Parser)]
#[command(name = "tutorial", version, about = "This runs the tutorial")]
struct Cli {
    /// Path to the tutorial config file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run tests to check given LESSON_ID.
    Lesson {
        #[arg(value_name = "LESSON_ID", value_parser = PossibleValuesParser::new(list_ids()))]
        lesson_id: String,
    },
    /// Output a list of all LESSON_IDs.
    LessonIds,
    /// Reset the status for all lessons (start over).
    Reset {
        /// Assume Y to confirmation prompts.
        #[arg(long)]
        yes: bool,
    },
    /// Copy solution for LESSON_ID into place for viewing / testing.
    Solve {
        #[arg(value_name = "LESSON_ID", value_parser = PossibleValuesParser::new(list_ids()))]
        lesson_id: String,
    },
    /// Show the status of the tutorial lessons.
    Status,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(CommandOutcome::Aborted) => {
            eprintln!("Aborted!");
            CommandOutcome::Aborted.exit_code()
        }
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("error: {:#}", err);
            exit_codes::FAILURE
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<CommandOutcome> {
    let config = load_config(&cli.config)?;
    let paths = TutorialPaths::resolve(&config)?;
    debug!(status_path = %paths.status_path.display(), "resolved status path");
    let mut ctx = TutorialContext::load(paths, config)?;

    let mut console = Console::new(io::stdout(), Styler::detect());
    let mut confirm = TerminalConfirm::new(io::stdin().lock(), io::stdout());

    let outcome = match cli.command {
        Command::Lesson { lesson_id } => {
            let runner = CommandRunner::new(&ctx.config.check);
            commands::lesson(&mut ctx, &lesson_id, &runner, &mut confirm, &mut console)
        }
        Command::LessonIds => commands::lesson_ids(&ctx, &mut console),
        Command::Reset { yes } => commands::reset(&mut ctx, yes, &mut confirm, &mut console),
        Command::Solve { lesson_id } => commands::solve(&ctx, &lesson_id, &mut console),
        Command::Status => commands::status(&ctx, &mut console),
    }?;
    console.flush()?;
    Ok(outcome)
}
