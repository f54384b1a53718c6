use core::fmt;
use serde::{Deserialize, Serialize};

/// Zero-based index of a real participant. Displayed one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    /// The observing player, whose hand is fully known from the start.
    pub const LOCAL: Seat = Seat(0);

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn number(self) -> u8 {
        self.0 + 1
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player{}", self.number())
    }
}

/// One column of the knowledge grid.
///
/// Column order is fixed: the envelope, then the common pile, then the real
/// seats in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    Envelope,
    Common,
    Seat(Seat),
}

impl PlayerSlot {
    pub const fn column(self) -> usize {
        match self {
            PlayerSlot::Envelope => 0,
            PlayerSlot::Common => 1,
            PlayerSlot::Seat(seat) => 2 + seat.index(),
        }
    }

    pub const fn as_seat(self) -> Option<Seat> {
        match self {
            PlayerSlot::Seat(seat) => Some(seat),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerSlot::Envelope => f.write_str("Envelope"),
            PlayerSlot::Common => f.write_str("Common"),
            PlayerSlot::Seat(seat) => write!(f, "{seat}"),
        }
    }
}

/// The fixed ordered list of grid columns for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    seat_count: u8,
}

impl Roster {
    pub const MIN_SEATS: u8 = 2;
    pub const MAX_SEATS: u8 = 6;

    pub fn new(seat_count: u8) -> Option<Self> {
        (Self::MIN_SEATS..=Self::MAX_SEATS)
            .contains(&seat_count)
            .then_some(Self { seat_count })
    }

    pub const fn seat_count(&self) -> u8 {
        self.seat_count
    }

    pub const fn column_count(&self) -> usize {
        self.seat_count as usize + 2
    }

    pub fn seat(&self, index: u8) -> Option<Seat> {
        (index < self.seat_count).then_some(Seat(index))
    }

    pub fn seats(&self) -> impl Iterator<Item = Seat> {
        (0..self.seat_count).map(Seat)
    }

    pub fn slots(&self) -> impl Iterator<Item = PlayerSlot> {
        [PlayerSlot::Envelope, PlayerSlot::Common]
            .into_iter()
            .chain(self.seats().map(PlayerSlot::Seat))
    }

    pub fn slot_at(&self, column: usize) -> Option<PlayerSlot> {
        match column {
            0 => Some(PlayerSlot::Envelope),
            1 => Some(PlayerSlot::Common),
            _ if column < self.column_count() => Some(PlayerSlot::Seat(Seat((column - 2) as u8))),
            _ => None,
        }
    }

    /// Seats strictly between `asker` and `responder` in turn order, wrapping
    /// past the last seat.
    pub fn seats_between(&self, asker: Seat, responder: Seat) -> Vec<Seat> {
        let mut between = Vec::new();
        let mut current = (asker.0 + 1) % self.seat_count;
        while current != responder.0 {
            between.push(Seat(current));
            current = (current + 1) % self.seat_count;
        }
        between
    }
}
