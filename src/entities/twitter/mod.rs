//! Twitter card entities.

mod card;
mod kind;

pub use card::Card;
pub use kind::CardType;
