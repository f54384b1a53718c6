use crate::model::card::{Card, Category};
use crate::model::player::Seat;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A category-checked (person, weapon, location) accusation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessTriple {
    person: Card,
    weapon: Card,
    location: Card,
}

impl GuessTriple {
    pub fn new(person: Card, weapon: Card, location: Card) -> Option<Self> {
        (person.category() == Category::Person
            && weapon.category() == Category::Weapon
            && location.category() == Category::Location)
            .then_some(Self {
                person,
                weapon,
                location,
            })
    }

    pub const fn person(&self) -> Card {
        self.person
    }

    pub const fn weapon(&self) -> Card {
        self.weapon
    }

    pub const fn location(&self) -> Card {
        self.location
    }

    pub const fn cards(&self) -> [Card; 3] {
        [self.person, self.weapon, self.location]
    }
}

impl fmt::Display for GuessTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.person, self.weapon, self.location)
    }
}

/// Who answered a guess, and whether the shown card was seen.
///
/// The shown card is only known when the observer posed the guess; everyone
/// else just sees that a card changed hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessResponse {
    responder: Seat,
    shown: Option<Card>,
}

impl GuessResponse {
    pub const fn undisclosed(responder: Seat) -> Self {
        Self {
            responder,
            shown: None,
        }
    }

    pub const fn disclosed(responder: Seat, card: Card) -> Self {
        Self {
            responder,
            shown: Some(card),
        }
    }

    pub const fn responder(&self) -> Seat {
        self.responder
    }

    pub const fn shown(&self) -> Option<Card> {
        self.shown
    }
}

/// One observed guess/response turn. `response` is `None` when nobody could
/// show a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessEvent {
    asker: Seat,
    response: Option<GuessResponse>,
    triple: GuessTriple,
}

impl GuessEvent {
    pub const fn new(asker: Seat, response: Option<GuessResponse>, triple: GuessTriple) -> Self {
        Self {
            asker,
            response,
            triple,
        }
    }

    pub const fn asker(&self) -> Seat {
        self.asker
    }

    pub const fn response(&self) -> Option<GuessResponse> {
        self.response
    }

    pub const fn triple(&self) -> GuessTriple {
        self.triple
    }
}

#[cfg(test)]
mod tests {
    use super::GuessTriple;
    use crate::model::card::Card;

    #[test]
    fn triple_requires_one_card_per_category() {
        assert!(GuessTriple::new(Card::Green, Card::Rope, Card::Office).is_some());
        assert!(GuessTriple::new(Card::Rope, Card::Green, Card::Office).is_none());
        assert!(GuessTriple::new(Card::Green, Card::Rope, Card::Scarlet).is_none());
    }

    #[test]
    fn cards_follow_category_order() {
        let triple = GuessTriple::new(Card::Plum, Card::Dagger, Card::Kitchen).expect("valid");
        assert_eq!(triple.cards(), [Card::Plum, Card::Dagger, Card::Kitchen]);
        assert_eq!(triple.to_string(), "Plum, Dagger, Kitchen");
    }
}
