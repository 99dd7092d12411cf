use anyhow::{anyhow, Result};
use clap::Parser;
use indicatif::ProgressBar;
use tracing::Level;

use std::io::{stdin, stdout, Write};

use four_in_line::{board::*, config::GameConfig, game::Game};

mod display;

/// Play four in a line against the computer on an 8x8 board.
#[derive(Parser)]
#[command(name = "four_in_line", about = "Play four in a line against the computer")]
struct Cli {
    /// Seconds the computer may think about each move
    #[arg(short, long)]
    time_limit: Option<u64>,

    /// Make the opening move yourself
    #[arg(long, conflicts_with = "computer_first")]
    human_first: bool,

    /// Let the computer make the opening move
    #[arg(long)]
    computer_first: bool,

    /// Log search progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_answer(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    stdout().flush()?;

    let mut buffer = String::new();
    if stdin().read_line(&mut buffer)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(buffer.trim().to_string())
}

fn ask_computer_first() -> Result<bool> {
    loop {
        let answer = read_answer("Would you like to go first? (y/n): ")?;
        match answer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(false),
            Some(_letter @ 'n') => return Ok(true),
            _ => println!("Unknown answer given"),
        }
    }
}

fn ask_time_limit(computer_first: bool) -> Result<GameConfig> {
    loop {
        let answer =
            read_answer("How long should the computer think about its moves (in seconds)? : ")?;
        match answer.parse::<u64>() {
            Err(_) => println!("Invalid number: {}", answer),
            Ok(seconds) => match GameConfig::new(computer_first, seconds) {
                Ok(config) => return Ok(config),
                Err(err) => println!("{}", err),
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    println!("Welcome to Four in a Line\n");

    let computer_first = if cli.human_first {
        false
    } else if cli.computer_first {
        true
    } else {
        ask_computer_first()?
    };
    let config = match cli.time_limit {
        Some(seconds) => GameConfig::new(computer_first, seconds)?,
        None => ask_time_limit(computer_first)?,
    };

    let mut game = Game::new(&config);
    display::display(game.board())?;

    // game loop
    loop {
        match game.outcome() {
            Outcome::Ongoing => {}

            // end states
            Outcome::ComputerWin => {
                println!("Game Over!\nComputer Wins");
                break;
            }
            Outcome::HumanWin => {
                println!("Game Over!\nYou win");
                break;
            }
            Outcome::Draw => {
                println!("Game Over!\nDraw");
                break;
            }
        }

        match game.to_move() {
            Player::Computer => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_message("Computer is thinking...");
                spinner.enable_steady_tick(100);
                let played = game.play_computer();
                spinner.finish_and_clear();

                let (result, _) = played?;
                println!("Computer move: {}", result.best_move);
            }
            Player::Human => {
                let input = read_answer("Choose your next move: ")?;
                let next_move = match input.parse::<Move>() {
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                    Ok(next_move) => next_move,
                };

                if let Err(err) = game.play_human(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }
        }

        display::display(game.board())?;
    }
    Ok(())
}
