use anyhow::{Context, Result};
use clap::Parser;
use d20dice::{Dice, DiceBuilder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about = "Roll dice written as XdY+Z", long_about = None)]
pub struct Args {
    /// Dice notation, e.g. `2d8+3` or `d20`
    pub notation: Option<String>,

    /// Number of dice (ignored when a notation is given)
    #[arg(short = 'n', long = "dice", conflicts_with = "notation")]
    pub die_count: Option<i32>,

    /// Sides on each die
    #[arg(short, long = "sides", conflicts_with = "notation")]
    pub side_count: Option<i32>,

    /// Flat modifier added to the total
    #[arg(short, long, conflicts_with = "notation", allow_hyphen_values = true)]
    pub modifier: Option<i32>,

    /// How many times to roll
    #[arg(short, long, default_value_t = 1)]
    pub times: u32,

    /// Print every face, not just the total
    #[arg(long)]
    pub detail: bool,
}

fn resolve_dice(args: &Args) -> Result<Dice> {
    if let Some(notation) = &args.notation {
        return notation
            .parse::<Dice>()
            .with_context(|| format!("parsing dice notation {notation:?}"));
    }

    let mut builder = DiceBuilder::new();
    if let Some(die_count) = args.die_count {
        builder = builder.die_count(die_count);
    }
    if let Some(side_count) = args.side_count {
        builder = builder.side_count(side_count);
    }
    if let Some(modifier) = args.modifier {
        builder = builder.modifier(modifier);
    }
    builder.build().context("building dice from arguments")
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "d20dice=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let dice = resolve_dice(&args)?;
    tracing::info!(%dice, min = dice.min_value(), max = dice.max_value(), "rolling");

    println!("Rolling {dice}:");
    for _ in 0..args.times {
        if args.detail {
            let outcome = dice
                .roll_detailed()
                .context("rolling with --detail")?;
            let faces: Vec<String> = outcome.rolls.iter().map(|f| f.to_string()).collect();
            println!("Result: {} [{}]", outcome.total, faces.join(", "));
        } else {
            println!("Result: {}", dice.roll());
        }
    }
    Ok(())
}
