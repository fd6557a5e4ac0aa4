//! Back end of a small box-pushing puzzle played on a grid of digits: move
//! the player around, push boxes onto the target squares, take moves back,
//! start over. Rendering, keyboard handling and file juggling live in the
//! front end; this crate only ever sees level text and commands.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod cell;
mod command;
mod direction;
mod game;
mod level;
pub mod save;
mod util;

pub use crate::cell::*;
pub use crate::command::*;
pub use crate::direction::*;
pub use crate::game::*;
pub use crate::level::*;
pub use crate::util::*;
