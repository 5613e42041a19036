use serde::{Deserialize, Serialize};
use tsify::Tsify;

// ==========================================
// 构造错误
// ==========================================

/// Rejection of an out-of-range argument when building a [`Dice`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    #[error("die_count must be at least 1, got {0}")]
    DieCountOutOfRange(i32),
    #[error("side_count must be at least 2, got {0}")]
    SideCountOutOfRange(i32),
}

// ==========================================
// Dice 值类型
// ==========================================

/// A number of dice, each with the same number of sides, plus a flat modifier.
///
/// Written as `XdY+Z` in notation. Every value of this type satisfies
/// `die_count >= 1` and `side_count >= 2`; a side count of 2 is a coin toss.
///
/// ```
/// use d20dice::Dice;
///
/// let dice = Dice::new(2, 8, 3).unwrap();
/// assert_eq!(dice.min_value(), 5);
/// assert_eq!(dice.max_value(), 19);
/// assert_eq!(dice.to_string(), "2d8+3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase", try_from = "DiceBuilder")]
#[tsify(into_wasm_abi)]
pub struct Dice {
    die_count: i32,
    side_count: i32,
    modifier: i32,
}

impl Dice {
    pub const DEFAULT_DIE_COUNT: i32 = 1;
    pub const DEFAULT_SIDE_COUNT: i32 = 6;
    pub const DEFAULT_MODIFIER: i32 = 0;

    /// Builds a dice value, rejecting `die_count < 1` and `side_count < 2`.
    ///
    /// The modifier may be any value, including `i32::MIN` and `i32::MAX`.
    pub fn new(die_count: i32, side_count: i32, modifier: i32) -> Result<Self, DiceError> {
        if die_count < 1 {
            return Err(DiceError::DieCountOutOfRange(die_count));
        }
        if side_count < 2 {
            return Err(DiceError::SideCountOutOfRange(side_count));
        }
        Ok(Self::from_validated(die_count, side_count, modifier))
    }

    /// Starts a [`DiceBuilder`] with the default `1d6`.
    pub fn builder() -> DiceBuilder {
        DiceBuilder::new()
    }

    // 调用方必须已经检查过 die_count >= 1 且 side_count >= 2
    pub(crate) fn from_validated(die_count: i32, side_count: i32, modifier: i32) -> Self {
        debug_assert!(die_count >= 1 && side_count >= 2);
        Dice {
            die_count,
            side_count,
            modifier,
        }
    }

    pub fn die_count(&self) -> i32 {
        self.die_count
    }

    pub fn side_count(&self) -> i32 {
        self.side_count
    }

    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// Lowest possible total: every die shows 1.
    ///
    /// Widened to `i64` so the sum can never overflow.
    pub fn min_value(&self) -> i64 {
        i64::from(self.die_count) + i64::from(self.modifier)
    }

    /// Highest possible total: every die shows `side_count`.
    pub fn max_value(&self) -> i64 {
        i64::from(self.die_count) * i64::from(self.side_count) + i64::from(self.modifier)
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::from_validated(
            Self::DEFAULT_DIE_COUNT,
            Self::DEFAULT_SIDE_COUNT,
            Self::DEFAULT_MODIFIER,
        )
    }
}

// ==========================================
// 构建器 / 配置记录
// ==========================================

/// Named-field description of a [`Dice`], defaulting to `1d6`.
///
/// Also the deserialization form: any omitted field takes its default, so
/// `{"sideCount": 20}` describes `1d20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase", default)]
#[tsify(from_wasm_abi)]
pub struct DiceBuilder {
    die_count: i32,
    side_count: i32,
    modifier: i32,
}

impl DiceBuilder {
    pub fn new() -> Self {
        DiceBuilder {
            die_count: Dice::DEFAULT_DIE_COUNT,
            side_count: Dice::DEFAULT_SIDE_COUNT,
            modifier: Dice::DEFAULT_MODIFIER,
        }
    }

    pub fn die_count(mut self, die_count: i32) -> Self {
        self.die_count = die_count;
        self
    }

    pub fn side_count(mut self, side_count: i32) -> Self {
        self.side_count = side_count;
        self
    }

    pub fn modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn build(self) -> Result<Dice, DiceError> {
        Dice::new(self.die_count, self.side_count, self.modifier)
    }
}

impl Default for DiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<DiceBuilder> for Dice {
    type Error = DiceError;

    fn try_from(builder: DiceBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

impl From<Dice> for DiceBuilder {
    fn from(dice: Dice) -> Self {
        DiceBuilder {
            die_count: dice.die_count,
            side_count: dice.side_count,
            modifier: dice.modifier,
        }
    }
}
