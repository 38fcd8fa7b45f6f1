use std::path::PathBuf;

use clap::Parser;
use knowledge_quiz::{Quiz, QuizError, Settings, ThemeName, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Color theme
    #[arg(short, long, value_enum)]
    theme: Option<ThemeName>,

    /// JSON file to load the questions from instead of the built-in set
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// TOML config file (defaults to the per-user config if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    let settings = Settings::discover(args.config.as_deref())?.merge_cli(
        args.theme,
        args.questions,
        args.log_file,
    );

    if let Some(path) = &settings.log_file {
        logging::init(path)?;
    }

    Quiz::from_settings(&settings)?.run()
}
