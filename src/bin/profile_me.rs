use d20dice::parse_dice;
use std::hint::black_box;

fn main() {
    // 1. 带多个修饰项的表达式，覆盖累加和溢出检查
    let notation = "12d20+4-1+7-2";

    println!("Starting profile loop...");

    // 2. 循环次数要足够多，让程序至少跑 3-5 秒
    let mut checksum = 0i64;
    for _ in 0..5_000_000 {
        if let Ok(dice) = black_box(parse_dice(black_box(notation))) {
            checksum += i64::from(dice.modifier());
        }
    }

    println!("Done. ({checksum})");
}
