use clap::{error::ErrorKind, Parser};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use surakh::{
    config::{ConfigStore, FileConfigStore},
    console::{Console, StdConsole},
    distractor::DistractorGenerator,
    error::parse_in_range,
    session::{Session, SessionConfig},
    LessonSet, LessonType,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// vocabulary drills in the terminal: spelling, multiple choice and hangman
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Quizzes the words of a lesson file. Each line of the file is `lesson;word;description;origin`. Type `quit` to give up on a word, `hint` in spelling mode to see the description."
)]
pub struct Cli {
    /// lesson file to read
    file: PathBuf,

    /// only use entries of this lesson number (0-255)
    #[clap(value_parser = parse_lesson_number, allow_negative_numbers = true)]
    lesson_number: Option<u8>,

    /// 0 = random, 1 = spelling, 2 = multiple choice, 3 = hangman; other numbers mean random
    #[clap(value_parser = parse_lesson_type, allow_negative_numbers = true)]
    lesson_type: Option<LessonType>,

    /// seed the random source to replay a session
    #[clap(long)]
    seed: Option<u64>,

    /// config file to use instead of the default location
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// skip the word list shown before the quiz
    #[clap(long)]
    no_recap: bool,

    /// never clear the screen
    #[clap(long)]
    no_clear: bool,
}

fn parse_lesson_number(s: &str) -> Result<u8, String> {
    parse_in_range(s, 0, u8::MAX as i64)
        .map(|n| n as u8)
        .map_err(|e| format!("lesson number must be between 0 and 255 ({e})"))
}

fn parse_lesson_type(s: &str) -> Result<LessonType, String> {
    parse_in_range(s, i64::MIN, i64::MAX)
        .map(LessonType::from_code)
        .map_err(|e| format!("invalid lesson type ({e})"))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let mut config = store.load();
    config.show_recap &= !cli.no_recap;
    config.clear_screen &= !cli.no_clear;

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);

    let mut console = StdConsole::new(config.clear_screen);
    console.clear()?;

    let kind = cli
        .lesson_type
        .unwrap_or(LessonType::Random)
        .resolve(&mut rng);
    info!(seed, %kind, file = %cli.file.display(), "starting");

    if let Some(n) = cli.lesson_number {
        console.write_line(&format!("Preparing Lesson No {n} ..."))?;
    }

    let lessons = LessonSet::from_file(&cli.file, cli.lesson_number)?;
    if lessons.is_empty() {
        return Err("no lessons found or file is empty".into());
    }

    let generator = DistractorGenerator::new(config.alphabet.clone());
    let session = Session::new(SessionConfig::from(&config), &generator);
    session.run(lessons, kind, &mut console, &mut rng)?;

    Ok(())
}
