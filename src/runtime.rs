use crate::grammar::parse_dice;
use crate::types::dice::{Dice, DiceBuilder};
use rand::Rng;
use serde::Serialize;
use tsify::Tsify;
use wasm_bindgen::prelude::*;

// ==========================================
// 掷骰结果
// ==========================================

/// One roll broken down face by face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tsify)]
#[serde(rename_all = "camelCase")]
#[tsify(into_wasm_abi)]
pub struct RollOutcome {
    pub notation: String,
    pub rolls: Vec<i32>,
    pub modifier: i32,
    pub total: i64,
}

/// Largest die count [`Dice::roll_detailed_with`] will list face by face.
pub const MAX_DETAILED_FACES: i32 = 10_000;

/// Rejection of a detailed roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    #[error("too many dice to list each face: {die_count} (limit {limit})")]
    TooManyFaces { die_count: i32, limit: i32 },
}

// 每个骰子都是闭区间 [1, side_count]
fn draw_die<R: Rng + ?Sized>(rng: &mut R, side_count: i32) -> i32 {
    rng.random_range(1..=side_count)
}

// ==========================================
// 掷骰
// ==========================================

impl Dice {
    /// Rolls every die with the supplied generator and adds the modifier.
    ///
    /// The result always lies in `[min_value, max_value]`.
    pub fn roll_with<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let side_count = self.side_count();
        let faces: i64 = (0..self.die_count())
            .map(|_| i64::from(draw_die(rng, side_count)))
            .sum();
        let total = faces + i64::from(self.modifier());
        tracing::trace!(dice = %self, total, "rolled dice");
        total
    }

    /// Rolls with the calling thread's generator.
    pub fn roll(&self) -> i64 {
        self.roll_with(&mut rand::rng())
    }

    /// Like [`Dice::roll_with`], but keeps each face.
    ///
    /// Fails when `die_count` exceeds [`MAX_DETAILED_FACES`]; use
    /// [`Dice::roll_with`] for the total alone.
    pub fn roll_detailed_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<RollOutcome, RollError> {
        // 每个骰子都要占一格，数量必须有上限
        if self.die_count() > MAX_DETAILED_FACES {
            return Err(RollError::TooManyFaces {
                die_count: self.die_count(),
                limit: MAX_DETAILED_FACES,
            });
        }
        let side_count = self.side_count();
        let rolls: Vec<i32> = (0..self.die_count())
            .map(|_| draw_die(rng, side_count))
            .collect();
        let total =
            rolls.iter().copied().map(i64::from).sum::<i64>() + i64::from(self.modifier());
        tracing::trace!(dice = %self, total, "rolled dice with detail");
        Ok(RollOutcome {
            notation: self.to_string(),
            rolls,
            modifier: self.modifier(),
            total,
        })
    }

    pub fn roll_detailed(&self) -> Result<RollOutcome, RollError> {
        self.roll_detailed_with(&mut rand::rng())
    }
}

// ==========================================
// wasm 导出
// ==========================================

#[wasm_bindgen(js_name = parseDice)]
pub fn parse_dice_js(notation: Option<String>) -> Result<Dice, String> {
    Dice::try_parse(notation.as_deref()).map_err(|e| e.to_string())
}

#[wasm_bindgen(js_name = createDice)]
pub fn create_dice(config: DiceBuilder) -> Result<Dice, String> {
    config.build().map_err(|e| e.to_string())
}

#[wasm_bindgen(js_name = showDice)]
pub fn show_dice(notation: String) -> Result<String, String> {
    parse_dice(&notation)
        .map(|dice| dice.to_string())
        .map_err(|e| e.to_string())
}

#[wasm_bindgen(js_name = rollDice)]
pub fn roll_dice(notation: String) -> Result<RollOutcome, String> {
    let dice = parse_dice(&notation).map_err(|e| e.to_string())?;
    dice.roll_detailed().map_err(|e| e.to_string())
}
