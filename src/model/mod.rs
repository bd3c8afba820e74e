mod action;
mod phase;
mod player;
mod team;
mod view;

pub use action::*;
pub use phase::*;
pub use player::*;
pub use team::*;
pub use view::*;
