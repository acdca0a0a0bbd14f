//! Kani arbitrary implementations for board types.
//!
//! These let Kani explore every board during model checking.

use super::{Board, Player, Square};

impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

impl kani::Arbitrary for Square {
    fn any() -> Self {
        let tag: u8 = kani::any();
        kani::assume(tag < 3);
        match tag {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        }
    }
}

impl kani::Arbitrary for Board {
    fn any() -> Self {
        Board::from_squares(kani::any())
    }
}
