//! Validated line input. Every malformed entry is rejected here, before it
//! can reach the engine.

use clue_core::model::card::{Card, Category};
use clue_core::model::guess::{GuessEvent, GuessResponse, GuessTriple};
use clue_core::model::player::{Roster, Seat};
use std::io::{self, Write};

/// Prints `text` and reads one trimmed line from stdin.
pub fn read_line(text: &str) -> io::Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Keeps asking until a known card name is entered.
pub fn read_card(text: &str) -> io::Result<Card> {
    loop {
        let line = read_line(text)?;
        match Card::from_name(&line) {
            Some(card) => return Ok(card),
            None => println!("Unknown card name."),
        }
    }
}

fn read_card_in_category(text: &str, category: Category) -> io::Result<Card> {
    loop {
        let card = read_card(text)?;
        if card.category() == category {
            return Ok(card);
        }
        println!("{card} is not a {category}.");
    }
}

/// Reads distinct card names until END.
pub fn read_card_list(title: &str) -> io::Result<Vec<Card>> {
    println!("{title} (END to finish):");
    let mut cards = Vec::new();
    loop {
        let line = read_line("> ")?;
        if line.eq_ignore_ascii_case("end") {
            return Ok(cards);
        }
        match Card::from_name(&line) {
            Some(card) if cards.contains(&card) => println!("Already entered."),
            Some(card) => cards.push(card),
            None => println!("Unknown card name."),
        }
    }
}

/// Reads whitespace-separated location names from one line, dropping
/// anything that is not a location.
pub fn read_locations(text: &str) -> io::Result<Vec<Card>> {
    let line = read_line(text)?;
    let mut locations = Vec::new();
    for token in line.split_whitespace() {
        match Card::from_name(token) {
            Some(card) if card.category() == Category::Location => locations.push(card),
            _ => println!("Ignoring {token}: not a location."),
        }
    }
    Ok(locations)
}

/// Keeps asking until a seat number valid for `roster` is entered.
pub fn read_seat(text: &str, roster: Roster) -> io::Result<Seat> {
    loop {
        let line = read_line(text)?;
        let seat = line
            .parse::<u8>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| roster.seat(index));
        match seat {
            Some(seat) => return Ok(seat),
            None => println!(
                "Enter a player number between 1 and {}.",
                roster.seat_count()
            ),
        }
    }
}

/// Reads one full guess/response turn: asker, the three cards, responder,
/// and the shown card when the observer posed the guess.
pub fn read_guess(roster: Roster) -> io::Result<GuessEvent> {
    let asker = read_seat("Player number who guessed: ", roster)?;
    let person = read_card_in_category("Person: ", Category::Person)?;
    let weapon = read_card_in_category("Weapon: ", Category::Weapon)?;
    let location = read_card_in_category("Location: ", Category::Location)?;
    let triple = GuessTriple::new(person, weapon, location).expect("category-checked cards");

    let responder = loop {
        let line = read_line("Player number who responded (0 if no one): ")?;
        match line.parse::<u8>() {
            Ok(0) => break None,
            Ok(n) => match roster.seat(n - 1) {
                Some(seat) if seat == asker => {
                    println!("The asker cannot respond to their own guess.");
                }
                Some(seat) => break Some(seat),
                None => println!(
                    "Enter a player number between 0 and {}.",
                    roster.seat_count()
                ),
            },
            Err(_) => println!(
                "Enter a player number between 0 and {}.",
                roster.seat_count()
            ),
        }
    };

    let response = match responder {
        None => None,
        Some(responder) if asker == Seat::LOCAL => {
            // Only the local asker gets to see the shown card.
            let card = loop {
                let card = read_card("Card shown to you: ")?;
                if triple.cards().contains(&card) {
                    break card;
                }
                println!("{card} was not part of the guess.");
            };
            Some(GuessResponse::disclosed(responder, card))
        }
        Some(responder) => Some(GuessResponse::undisclosed(responder)),
    };

    Ok(GuessEvent::new(asker, response, triple))
}
