//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage and from the engine so they can be tested in isolation.

pub mod draw;
pub mod win;

pub use draw::is_tie;
pub use win::{Evaluation, Line, evaluate, winning_line};
