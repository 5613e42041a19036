use d20dice::{Dice, DiceBuilder, DiceError};
use std::hash::{DefaultHasher, Hash, Hasher};

fn hash_of(dice: &Dice) -> u64 {
    let mut hasher = DefaultHasher::new();
    dice.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn fields_read_back() {
    let dice = Dice::new(2, 10, 4).unwrap();
    assert_eq!(dice.die_count(), 2);
    assert_eq!(dice.side_count(), 10);
    assert_eq!(dice.modifier(), 4);
}

#[test]
fn min_value() {
    for (die_count, side_count, modifier, expected) in
        [(1, 6, 0, 1), (2, 8, 3, 5), (2, 10, -1, 1), (3, 4, -5, -2)]
    {
        let dice = Dice::new(die_count, side_count, modifier).unwrap();
        assert_eq!(dice.min_value(), expected);
    }
}

#[test]
fn max_value() {
    for (die_count, side_count, modifier, expected) in
        [(1, 6, 0, 6), (2, 8, 3, 19), (2, 10, -1, 19), (3, 4, -5, 7)]
    {
        let dice = Dice::new(die_count, side_count, modifier).unwrap();
        assert_eq!(dice.max_value(), expected);
    }
}

#[test]
fn coin_toss_range() {
    let coin = Dice::new(3, 2, 1).unwrap();
    assert_eq!(coin.min_value(), 4);
    assert_eq!(coin.max_value(), 7);
}

#[test]
fn invalid_arguments() {
    assert_eq!(Dice::new(0, 6, 0), Err(DiceError::DieCountOutOfRange(0)));
    assert_eq!(Dice::new(1, 1, 0), Err(DiceError::SideCountOutOfRange(1)));
    assert_eq!(
        DiceBuilder::new().die_count(-3).build(),
        Err(DiceError::DieCountOutOfRange(-3))
    );
}

#[test]
fn equality_and_hash() {
    let a = Dice::new(2, 6, 3).unwrap();
    let b = Dice::new(2, 6, 3).unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    for other in [
        Dice::new(3, 6, 3).unwrap(),
        Dice::new(2, 8, 3).unwrap(),
        Dice::new(2, 6, -3).unwrap(),
    ] {
        assert_ne!(a, other);
    }
}

#[test]
fn hash_is_order_sensitive() {
    let a = Dice::new(2, 3, 4).unwrap();
    let b = Dice::new(3, 2, 4).unwrap();
    assert_ne!(hash_of(&a), hash_of(&b));
}

#[test]
fn display_round_trips() {
    for dice in [
        Dice::new(2, 8, 3).unwrap(),
        Dice::new(1, 20, 0).unwrap(),
        Dice::new(4, 6, -2).unwrap(),
    ] {
        assert_eq!(dice.to_string().parse::<Dice>(), Ok(dice));
    }
    assert_eq!(Dice::new(2, 8, 3).unwrap().to_string(), "2d8+3");
}

#[test]
fn deserialize_applies_defaults() {
    let dice: Dice = serde_json::from_str(r#"{"sideCount": 20}"#).unwrap();
    assert_eq!(dice, Dice::new(1, 20, 0).unwrap());
    let dice: Dice = serde_json::from_str("{}").unwrap();
    assert_eq!(dice, Dice::default());
}

#[test]
fn deserialize_rejects_invalid_dice() {
    let err = serde_json::from_str::<Dice>(r#"{"dieCount": 0}"#).unwrap_err();
    assert!(err.to_string().contains("die_count must be at least 1"));
}

#[test]
fn serialize_uses_camel_case() {
    let json = serde_json::to_value(Dice::new(2, 8, -1).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"dieCount": 2, "sideCount": 8, "modifier": -1})
    );
}
