pub mod dice;
pub mod dice_fmt;
