//! Wordle Hint - CLI
//!
//! Guess-the-word game with TUI and line modes, plus scoring utilities.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use wordle_hint::{
    commands::{analyze_guess, run_simple, score_pair},
    output::{print_analysis_result, print_score_result},
    session::{Game, MemorySession},
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_hint",
    about = "Guess the hidden word from letter-by-letter feedback, with hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for word and hint selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Show the feedback a guess gets against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },

    /// Score a guess against every word in the list
    Analyze {
        /// Word to analyze
        guess: String,

        /// How many feedback groups to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wordle_hint=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "embedded" => Ok(WordList::embedded()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list {path}"))?;
            WordList::new(words).with_context(|| format!("unusable word list {path}"))
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            tracing::debug!(seed, "Using seeded RNG");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let words = load_wordlist(&cli.wordlist)?;
            run_play_command(&words, make_rng(cli.seed))
        }
        Commands::Simple => {
            let words = load_wordlist(&cli.wordlist)?;
            let mut game = Game::new(MemorySession::default(), &words, make_rng(cli.seed));
            run_simple(&mut game)
        }
        Commands::Score { guess, answer } => {
            let result = score_pair(&guess, &answer)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Analyze { guess, top } => {
            let words = load_wordlist(&cli.wordlist)?;
            let result = analyze_guess(&guess, words.words())?;
            print_analysis_result(&result, top);
            Ok(())
        }
    }
}

fn run_play_command(words: &WordList, rng: StdRng) -> Result<()> {
    use wordle_hint::interactive::{App, run_tui};

    let app = App::new(words, rng);
    run_tui(app)
}
