//! Tabletop dice notation (`XdY+Z`) for a D&D helper.
//!
//! A [`Dice`] is a die count, a side count and a flat modifier. Values come
//! from [`Dice::new`], [`DiceBuilder`] or by parsing notation with
//! [`parse_dice`] / [`str::parse`], and can be rolled or printed back as
//! canonical notation.
//!
//! ```
//! use d20dice::Dice;
//!
//! let dice: Dice = "2d8+3".parse().unwrap();
//! let total = dice.roll();
//! assert!((5..=19).contains(&total));
//! ```

pub mod grammar;
pub mod runtime;
pub mod types;

pub use grammar::{ParseError, parse_dice};
pub use runtime::{MAX_DETAILED_FACES, RollError, RollOutcome};
pub use types::dice::{Dice, DiceBuilder, DiceError};
