use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Person,
    Weapon,
    Location,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Person => "person",
            Category::Weapon => "weapon",
            Category::Location => "location",
        };
        f.write_str(label)
    }
}

/// One of the 21 cards in the deck, fixed for the process lifetime.
///
/// Enumeration order is stable: people, weapons, locations. The engine relies
/// on this order for its dense variable layout; any shuffling for secrecy
/// belongs to the presentation boundary, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Card {
    Green = 0,
    Scarlet = 1,
    White = 2,
    Mustard = 3,
    Plum = 4,
    Peacock = 5,
    Candlestick = 6,
    Dagger = 7,
    LeadPipe = 8,
    Pistol = 9,
    Rope = 10,
    Wrench = 11,
    Bedroom = 12,
    Office = 13,
    DiningRoom = 14,
    Courtyard = 15,
    Bathroom = 16,
    Garage = 17,
    LivingRoom = 18,
    GameRoom = 19,
    Kitchen = 20,
}

impl Card {
    pub const COUNT: usize = 21;

    pub const ALL: [Card; 21] = [
        Card::Green,
        Card::Scarlet,
        Card::White,
        Card::Mustard,
        Card::Plum,
        Card::Peacock,
        Card::Candlestick,
        Card::Dagger,
        Card::LeadPipe,
        Card::Pistol,
        Card::Rope,
        Card::Wrench,
        Card::Bedroom,
        Card::Office,
        Card::DiningRoom,
        Card::Courtyard,
        Card::Bathroom,
        Card::Garage,
        Card::LivingRoom,
        Card::GameRoom,
        Card::Kitchen,
    ];

    pub const PEOPLE: [Card; 6] = [
        Card::Green,
        Card::Scarlet,
        Card::White,
        Card::Mustard,
        Card::Plum,
        Card::Peacock,
    ];

    pub const WEAPONS: [Card; 6] = [
        Card::Candlestick,
        Card::Dagger,
        Card::LeadPipe,
        Card::Pistol,
        Card::Rope,
        Card::Wrench,
    ];

    pub const LOCATIONS: [Card; 9] = [
        Card::Bedroom,
        Card::Office,
        Card::DiningRoom,
        Card::Courtyard,
        Card::Bathroom,
        Card::Garage,
        Card::LivingRoom,
        Card::GameRoom,
        Card::Kitchen,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn category(self) -> Category {
        match self as u8 {
            0..=5 => Category::Person,
            6..=11 => Category::Weapon,
            _ => Category::Location,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Card::Green => "Green",
            Card::Scarlet => "Scarlet",
            Card::White => "White",
            Card::Mustard => "Mustard",
            Card::Plum => "Plum",
            Card::Peacock => "Peacock",
            Card::Candlestick => "Candlestick",
            Card::Dagger => "Dagger",
            Card::LeadPipe => "LeadPipe",
            Card::Pistol => "Pistol",
            Card::Rope => "Rope",
            Card::Wrench => "Wrench",
            Card::Bedroom => "Bedroom",
            Card::Office => "Office",
            Card::DiningRoom => "DiningRoom",
            Card::Courtyard => "Courtyard",
            Card::Bathroom => "Bathroom",
            Card::Garage => "Garage",
            Card::LivingRoom => "LivingRoom",
            Card::GameRoom => "GameRoom",
            Card::Kitchen => "Kitchen",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|card| card.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
