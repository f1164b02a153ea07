use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum, error::ErrorKind};

use wordbox::{
    engine::scheduler::{DueOffset, SchedulerConfig},
    session::{self, StdioLine, StudySession},
    store::sqlite::SqliteCardStore,
    transfer,
};

#[derive(Parser)]
#[command(
    name = "wordbox",
    about = "Leitner-box vocabulary trainer",
    version,
    args_conflicts_with_subcommands = true,
    arg_required_else_help = true
)]
struct Cli {
    /// Card database to study (shorthand for `wordbox study FILE`)
    file: Option<PathBuf>,

    #[command(flatten)]
    policy: PolicyArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new card database
    New { file: PathBuf },
    /// Add one card (prompts for front and back)
    Add {
        file: PathBuf,
        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// Write all cards to stdout as CSV
    Export { file: PathBuf },
    /// Read cards from stdin as CSV
    Import { file: PathBuf },
    /// Run a review session
    Study {
        file: PathBuf,
        #[command(flatten)]
        policy: PolicyArgs,
    },
}

/// Scheduling knobs where the historical variants of this tool diverged.
#[derive(Args, Clone, Copy)]
struct PolicyArgs {
    /// When a failed card comes due again
    #[arg(long, value_enum, default_value = "today")]
    relapse_due: DueArg,

    /// When a freshly added card comes due
    #[arg(long, value_enum, default_value = "today")]
    fresh_due: DueArg,
}

impl PolicyArgs {
    fn into_config(self) -> SchedulerConfig {
        SchedulerConfig {
            relapse_due: self.relapse_due.into(),
            fresh_due: self.fresh_due.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DueArg {
    Today,
    Tomorrow,
}

impl From<DueArg> for DueOffset {
    fn from(value: DueArg) -> Self {
        match value {
            DueArg::Today => DueOffset::Today,
            DueArg::Tomorrow => DueOffset::Tomorrow,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let command = match (cli.command, cli.file) {
        (Some(command), _) => command,
        (None, Some(file)) => Command::Study {
            file,
            policy: cli.policy,
        },
        (None, None) => {
            // Only policy flags were given; clap reports the usage error
            // and exits with the usage status.
            Cli::command()
                .error(ErrorKind::MissingRequiredArgument, "FILE or a subcommand is required")
                .exit()
        }
    };

    match command {
        Command::New { file } => {
            SqliteCardStore::create(&file)
                .with_context(|| format!("cannot create {}", file.display()))?;
        }
        Command::Add { file, policy } => {
            let mut store = open(&file)?;
            let mut line = StdioLine;
            session::add_card(&mut store, &mut line, today(), &policy.into_config())?;
        }
        Command::Export { file } => {
            let store = open(&file)?;
            transfer::export(&store, io::stdout().lock())?;
        }
        Command::Import { file } => {
            let mut store = open(&file)?;
            let report = transfer::import(&mut store, io::stdin().lock())?;
            for skip in &report.skipped {
                eprintln!("invalid record on line {}: {}", skip.line, skip.reason);
            }
        }
        Command::Study { file, policy } => {
            let mut store = open(&file)?;
            let mut line = StdioLine;
            // Both terminal states (pool exhausted, input closed) are
            // clean exits.
            StudySession::new(&mut store, &mut line, today, policy.into_config()).run()?;
        }
    }
    Ok(())
}

fn open(file: &Path) -> anyhow::Result<SqliteCardStore> {
    SqliteCardStore::open(file).with_context(|| format!("cannot open {}", file.display()))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
