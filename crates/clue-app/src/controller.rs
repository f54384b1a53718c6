use crate::cli::Cli;
use crate::prompt;
use crate::publisher;
use anyhow::{Context, Result};
use clue_bot::{ScoreWeights, pick_best, suggest_guesses};
use clue_core::logic::engine::KnowledgeState;
use clue_core::model::card::Card;
use clue_core::model::player::PlayerSlot;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::mpsc::Sender;
use tracing::{Level, event};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Guess,
    Has,
    Not,
    Suggest,
    SuggestExcluding,
    Show,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    match input.to_ascii_lowercase().as_str() {
        "guess" => Some(Command::Guess),
        "has" => Some(Command::Has),
        "not" => Some(Command::Not),
        "suggest" | "get" => Some(Command::Suggest),
        "suggest-not" | "get_not" => Some(Command::SuggestExcluding),
        "show" => Some(Command::Show),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// The interactive session: setup prompts, then one advance -> publish ->
/// command round per turn. Sends a tick on `updates` whenever a new snapshot
/// is published so the render loop can repaint.
pub fn run(cli: Cli, updates: Sender<()>) -> Result<()> {
    let common_pile = prompt::read_card_list("Enter the common pile cards")?;
    let local_hand = prompt::read_card_list("Enter your cards")?;
    let hand_size = cli.hand_size.unwrap_or(local_hand.len());

    let mut state = KnowledgeState::initialize(cli.players, hand_size, &common_pile, &local_hand)
        .context("setting up the deduction engine")?;
    let roster = state.roster();
    let weights = ScoreWeights::default();
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    event!(
        Level::INFO,
        players = roster.seat_count(),
        hand_size,
        common = common_pile.len(),
        "session started"
    );

    loop {
        let (matrix, ok) = state.advance();
        if ok {
            publisher::publish(&matrix);
            let _ = updates.send(());
        } else {
            event!(
                Level::WARN,
                "facts are contradictory; keeping the last consistent grid"
            );
            println!(
                "The recorded facts contradict each other. Entries cannot be \
                 retracted; the grid keeps showing the last consistent state."
            );
        }

        let line =
            prompt::read_line("Command (guess / has / not / suggest / suggest-not / show / quit): ")?;
        let Some(command) = parse_command(&line) else {
            println!("Unknown command.");
            continue;
        };
        match command {
            Command::Guess => {
                let guess = prompt::read_guess(roster)?;
                state.record_guess(&guess);
            }
            Command::Has => {
                let seat = prompt::read_seat("Player: ", roster)?;
                let card = prompt::read_card("Card: ")?;
                state.assert_has(PlayerSlot::Seat(seat), card);
            }
            Command::Not => {
                let seat = prompt::read_seat("Player: ", roster)?;
                let card = prompt::read_card("Card: ")?;
                state.assert_not_has(PlayerSlot::Seat(seat), card);
            }
            Command::Suggest => {
                let reachable = prompt::read_locations("Reachable locations: ")?;
                print_suggestions(&state, &reachable, cli.top_n, &weights, &mut rng);
            }
            Command::SuggestExcluding => {
                let excluded = prompt::read_locations("Unreachable locations: ")?;
                let reachable: Vec<Card> = Card::LOCATIONS
                    .iter()
                    .copied()
                    .filter(|card| !excluded.contains(card))
                    .collect();
                print_suggestions(&state, &reachable, cli.top_n, &weights, &mut rng);
            }
            Command::Show => {
                let _ = updates.send(());
            }
            Command::Quit => return Ok(()),
        }
    }
}

fn print_suggestions(
    state: &KnowledgeState,
    reachable: &[Card],
    top_n: usize,
    weights: &ScoreWeights,
    rng: &mut SmallRng,
) {
    let suggestions = suggest_guesses(state.matrix(), reachable, top_n, weights);
    if suggestions.is_empty() {
        println!("No informative guess is available from here.");
        return;
    }
    let top_score = suggestions[0].score;
    for (rank, suggestion) in suggestions.iter().enumerate() {
        println!(
            "{:>2}. {}  score {:.3}  (-{:.3})",
            rank + 1,
            suggestion.triple,
            suggestion.score,
            top_score - suggestion.score
        );
    }
    if let Some(best) = pick_best(&suggestions, rng) {
        println!("Recommended: {}", best.triple);
    }
}
