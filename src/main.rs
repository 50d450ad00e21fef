use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
#[macro_use]
extern crate text_io;

use crate::boggle::board::BoggleBoard;
use crate::boggle::dictionary::Lexicon;
use crate::boggle::game::{BoggleGame, GameSummary, Winner};
use crate::boggle::score::score_word;
use crate::config::GameConfig;
use crate::error::BoggleError;

mod boggle;
mod config;
mod error;

/// Config file read when `--config` is not given. It is fine for it to be missing
const DEFAULT_CONFIG: &str = "boggle.json";

/// Play a round of Boggle against the computer
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// JSON config file [default: boggle.json]
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Word list with one word per line
    #[clap(short, long)]
    dictionary: Option<PathBuf>,

    /// JSON board file (an array of 4 row strings)
    #[clap(short, long)]
    board: Option<PathBuf>,

    /// Seed for shaking the board
    #[clap(short, long)]
    seed: Option<u64>,

    /// Shortest word that scores
    #[clap(short, long)]
    min_length: Option<usize>,

    /// Print the final summary as JSON
    #[clap(long)]
    json: bool,
}

fn load_config(cli: &Cli) -> Result<GameConfig, BoggleError> {
    // A config file the user asked for has to exist
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::load_or_default(Path::new(DEFAULT_CONFIG))?,
    };
    if let Some(dictionary) = &cli.dictionary {
        config.dictionary = dictionary.clone();
    }
    if let Some(board) = &cli.board {
        config.board = Some(board.clone());
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(min_length) = cli.min_length {
        config.min_word_length = min_length;
    }
    config.validate()?;
    Ok(config)
}

fn make_board(config: &GameConfig) -> Result<BoggleBoard, BoggleError> {
    match &config.board {
        Some(path) => {
            info!("Reading board from {}", path.display());
            BoggleBoard::from_file(path)
        }
        None => {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Ok(BoggleBoard::shake(&mut rng))
        }
    }
}

fn print_summary(summary: &GameSummary) {
    println!("============ Results ============");
    println!("Your words ({}): {}", summary.human_words.len(), summary.human_words.join(", "));
    println!(
        "Computer words ({}): {}",
        summary.computer_words.len(),
        summary.computer_words.join(", ")
    );
    println!(
        "Score: you {} / computer {}",
        summary.scores.human, summary.scores.computer
    );
    match summary.winner {
        Winner::Human => println!("You Won!"),
        Winner::Computer => println!("You Lost!"),
        Winner::Tie => println!("Draw"),
    }
}

fn run(cli: Cli) -> Result<(), BoggleError> {
    let config = load_config(&cli)?;
    debug!("Config: {:?}", config);

    let dictionary = Lexicon::from_file(&config.dictionary)?;
    if dictionary.is_empty() {
        return Err(BoggleError::Config(format!(
            "{} has no usable words",
            config.dictionary.display()
        )));
    }
    info!("Number of Words: {}", dictionary.len());

    let board = make_board(&config)?;
    let mut game = BoggleGame::new(board, &dictionary, config.min_word_length);

    println!("{}", game.board());
    println!(
        "Enter words of at least {} letters, one per line. Enter a blank line to finish.",
        config.min_word_length
    );

    loop {
        let line: Result<String, _> = try_read!("{}\n");
        let word = match line {
            Ok(word) if !word.trim().is_empty() => word,
            // Blank line, end of input or unreadable input ends the human turn
            _ => break,
        };

        match game.play_human(&word) {
            Ok(path) => {
                let cells = path
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                println!(
                    "+{} ({})  {}",
                    score_word(path.len()),
                    game.scores().human,
                    cells
                );
            }
            Err(rejection) => println!("{}", rejection),
        }
    }

    game.computer_turn();
    let summary = game.summary();
    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("failed to serialize summary: {}", e),
        }
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
