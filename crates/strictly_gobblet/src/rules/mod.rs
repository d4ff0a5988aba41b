//! Game rules for stacking tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Only the top piece of
//! each cell takes part; buried pieces are invisible to these rules.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_win, winner};
