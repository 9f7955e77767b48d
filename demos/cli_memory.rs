//! CLI memory game demo.

use core::time::Duration;
use std::io::{self, Write};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use pairs::{CardState, Difficulty, Game, GameOptions, RejectReason, Reveal, Snapshot, Theme};

fn main() {
    println!("Memory CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    let difficulty = prompt_choice("Difficulty (easy/medium/hard): ", Difficulty::from_name)
        .unwrap_or_default();
    let theme = prompt_choice("Theme (space/jungle): ", Theme::from_name).unwrap_or_default();

    if let Err(err) = game.start_new_game(difficulty, theme) {
        println!("Setup error: {err}");
        return;
    }

    let mut last_tick = Instant::now();
    loop {
        let elapsed = last_tick.elapsed();
        last_tick = Instant::now();
        game.advance(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));

        let Some(snapshot) = game.snapshot() else {
            break;
        };
        print_board(&snapshot);

        if snapshot.finished {
            println!(
                "Board cleared in {} moves and {}s.",
                snapshot.moves, snapshot.elapsed_seconds
            );
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    if let Err(err) = game.restart() {
                        println!("Setup error: {err}");
                        return;
                    }
                    continue;
                }
                _ => return,
            }
        }

        let input = prompt_line("Card: ");
        if input == "q" || input == "quit" {
            return;
        }
        let Ok(card_id) = input.parse::<usize>() else {
            println!("Please enter a card number.");
            continue;
        };

        match game.reveal(card_id) {
            Reveal::Second { .. } => {
                if let Some(snapshot) = game.snapshot() {
                    print_board(&snapshot);
                }
                // Give the player the observation delay to look at the pair.
                std::thread::sleep(Duration::from_millis(game.options.observation_delay_ms));
            }
            Reveal::Rejected(RejectReason::UnknownCard) => println!("No such card."),
            Reveal::Rejected(reason) => println!("Ignored: {reason:?}"),
            Reveal::First(_) => {}
        }
    }
}

fn print_board(snapshot: &Snapshot) {
    println!(
        "\nTime: {}s | Moves: {} | Pairs: {}/{}",
        snapshot.elapsed_seconds, snapshot.moves, snapshot.matched_pairs, snapshot.pairs
    );
    for row in snapshot.cards.chunks(snapshot.grid_columns) {
        let line: Vec<String> = row
            .iter()
            .map(|card| match (card.state, card.symbol) {
                (CardState::Hidden, _) | (_, None) => format!("[{:>2}]", card.id),
                (CardState::Revealed, Some(symbol)) => format!("({symbol} )"),
                (CardState::Matched, Some(symbol)) => format!(" {symbol}  "),
            })
            .collect();
        println!("{}", line.join(" "));
    }
    println!();
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_choice<T>(prompt: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let input = prompt_line(prompt);
    if input.is_empty() {
        return None;
    }
    let choice = parse(&input);
    if choice.is_none() {
        println!("Unknown choice, using the default.");
    }
    choice
}
