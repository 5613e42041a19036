use crate::types::dice::Dice;
use std::str::FromStr;
use winnow::Parser;
use winnow::Result as WNResultBase;
use winnow::ascii::digit1;
use winnow::combinator::{opt, repeat};
use winnow::error::ContextError;
use winnow::error::ErrMode;
use winnow::token::one_of;

pub type WNResult<O, E = ContextError> = WNResultBase<O, ErrMode<E>>;

/// 骰数最多允许的数字位数，超过就可能溢出 i32
pub const MAX_DIE_COUNT_DIGITS: usize = 9;

// ==========================================
// 错误分类
// ==========================================

/// Why a notation string was rejected.
///
/// Variants are listed in the order they are checked, so an input with several
/// problems reports the first one. Display text is stable and meant for users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    #[error("Value cannot be null or empty.")]
    Empty,
    #[error("Invalid dice notation format. Value must be in XdY+Z format.")]
    InvalidFormat,
    #[error("Die count is out of range.")]
    DieCountOutOfRange,
    #[error("Side count is out of range.")]
    SideCountOutOfRange,
    #[error("Modifier is out of range.")]
    ModifierOutOfRange,
    #[error("Die count must be greater than 0.")]
    DieCountTooSmall,
    #[error("Side count must be greater than 1.")]
    SideCountTooSmall,
}

// ==========================================
// 词法结果
// ==========================================

/// Raw digit runs matched by `[X]dY(+Z|-Z)*`, before any numeric conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationTokens<'a> {
    pub die_count: Option<&'a str>,
    pub side_count: &'a str,
    /// 每一项都带符号，例如 "+3"、"-12"
    pub modifiers: Vec<&'a str>,
}

// ==========================================
// 入口函数
// ==========================================

/// Parses `XdY+Z` notation into a [`Dice`].
///
/// The die count is optional (`d20` is `1d20`), the `d` is case-insensitive and
/// any number of signed modifier terms are summed. Never panics on bad input.
///
/// ```
/// use d20dice::{Dice, ParseError, parse_dice};
///
/// assert_eq!(parse_dice("2d10-1+2"), Ok(Dice::new(2, 10, 1).unwrap()));
/// assert_eq!(parse_dice("0d6"), Err(ParseError::DieCountTooSmall));
/// ```
pub fn parse_dice(notation: &str) -> Result<Dice, ParseError> {
    let result = validate_notation(notation);
    match &result {
        Ok(dice) => tracing::trace!(notation, %dice, "parsed dice notation"),
        Err(err) => tracing::debug!(notation, kind = ?err, "rejected dice notation"),
    }
    result
}

/// Splits notation into its digit runs without converting them.
pub fn tokenize(notation: &str) -> Result<NotationTokens<'_>, ParseError> {
    parse_notation
        .parse(notation)
        .map_err(|_| ParseError::InvalidFormat)
}

fn validate_notation(notation: &str) -> Result<Dice, ParseError> {
    if notation.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let tokens = tokenize(notation)?;

    let die_count = match tokens.die_count {
        None => Dice::DEFAULT_DIE_COUNT,
        Some(digits) if digits.len() > MAX_DIE_COUNT_DIGITS => {
            return Err(ParseError::DieCountOutOfRange);
        }
        Some(digits) => digits
            .parse::<i32>()
            .map_err(|_| ParseError::DieCountOutOfRange)?,
    };

    let side_count = tokens
        .side_count
        .parse::<i32>()
        .map_err(|_| ParseError::SideCountOutOfRange)?;

    let modifier = sum_modifiers(&tokens.modifiers)?;

    // 数值都合法之后再做语义检查
    if die_count < 1 {
        return Err(ParseError::DieCountTooSmall);
    }
    if side_count < 2 {
        return Err(ParseError::SideCountTooSmall);
    }

    Ok(Dice::from_validated(die_count, side_count, modifier))
}

fn sum_modifiers(terms: &[&str]) -> Result<i32, ParseError> {
    terms.iter().try_fold(0i32, |sum, term| {
        let value = term
            .parse::<i32>()
            .map_err(|_| ParseError::ModifierOutOfRange)?;
        sum.checked_add(value).ok_or(ParseError::ModifierOutOfRange)
    })
}

// ==========================================
// winnow 解析器
// ==========================================

fn parse_notation<'a>(input: &mut &'a str) -> WNResult<NotationTokens<'a>> {
    (
        opt(digit1),
        parse_die_marker,
        digit1,
        repeat(0.., parse_modifier_term),
    )
        .map(|(die_count, _, side_count, modifiers)| NotationTokens {
            die_count,
            side_count,
            modifiers,
        })
        .parse_next(input)
}

fn parse_die_marker(input: &mut &str) -> WNResult<char> {
    one_of(['d', 'D']).parse_next(input)
}

// +N 或 -N，保留符号一起交给 i32::from_str
fn parse_modifier_term<'a>(input: &mut &'a str) -> WNResult<&'a str> {
    (one_of(['+', '-']), digit1).take().parse_next(input)
}

// ==========================================
// 标准库 trait
// ==========================================

impl Dice {
    /// Parses notation, treating `None` like an empty string.
    pub fn try_parse(notation: Option<&str>) -> Result<Dice, ParseError> {
        parse_dice(notation.unwrap_or_default())
    }
}

impl FromStr for Dice {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dice(s)
    }
}

impl TryFrom<&str> for Dice {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_dice(value)
    }
}

// ==========================================
// 单元测试
// ==========================================
