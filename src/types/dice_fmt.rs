use super::dice::Dice;
use std::cmp::Ordering;
use std::fmt;

// ==========================================
// Display 实现: XdY / XdY+Z / XdY-Z
// ==========================================

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.die_count(), self.side_count())?;
        match self.modifier().cmp(&0) {
            Ordering::Greater => write!(f, "+{}", self.modifier()),
            // 负数自带符号
            Ordering::Less => write!(f, "{}", self.modifier()),
            Ordering::Equal => Ok(()),
        }
    }
}
