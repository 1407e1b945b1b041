//! randval - Random Value Generator
//!
//! Usage:
//!   randval                                   - interactive menu
//!   randval number --min 1 --max 50 --count 6 --exclude 13
//!   randval float --min 0 --max 1 --decimals 3
//!   randval color --format hsl --count 5
//!   randval string --length 16 --pattern alphanumeric_symbols
//!   randval custom --template "{u}{u}{u}-{d}{d}{d}"
//!   randval list --items "a,b,c" --count 2 --unique
//!   randval wheel --items "pizza,tacos,sushi"

mod menu;
mod parse;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rv_engine::{
    CharsetPattern, ColorFormat, EngineConfig, GenerationRequest, RandomGenerator, TickOutcome,
};

use crate::menu::Menu;
use crate::parse::{parse_int_set, parse_items};

const PATTERNS: [&str; 8] = [
    "alphanumeric",
    "alpha",
    "numeric",
    "lowercase",
    "uppercase",
    "hex",
    "symbols",
    "alphanumeric_symbols",
];

#[derive(Parser)]
#[command(name = "randval", about = "Advanced random value generator")]
struct Cli {
    /// Seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON engine config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Distinct integers from a range
    Number {
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        min: i64,
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        max: i64,
        /// Values to exclude (comma-separated)
        #[arg(long, allow_hyphen_values = true)]
        exclude: Option<String>,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Floating point numbers rounded to fixed decimals
    Float {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        min: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        max: f64,
        #[arg(long, default_value_t = 2)]
        decimals: u32,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Random colors
    Color {
        #[arg(long, default_value = "hex", value_parser = ["hex", "rgb", "hsl"])]
        format: String,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Random strings from a character pattern
    String {
        #[arg(long, default_value_t = 10)]
        length: usize,
        #[arg(long, default_value = "alphanumeric", value_parser = PATTERNS)]
        pattern: String,
        /// Characters to exclude from the pattern
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        exclude_chars: String,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Expand a placeholder template
    Custom {
        #[arg(long, allow_hyphen_values = true)]
        template: String,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Pick items from a comma-separated list
    List {
        #[arg(long, allow_hyphen_values = true)]
        items: String,
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Select unique items only
        #[arg(long)]
        unique: bool,
    },
    /// Spin a wheel of 2-20 items and print the winner
    Wheel {
        #[arg(long, allow_hyphen_values = true)]
        items: String,
        /// Print rotation and velocity for every tick
        #[arg(long)]
        trace: bool,
    },
    /// Interactive menu (default)
    Menu,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    log::debug!("Engine config: {:?}", config);

    let mut generator = RandomGenerator::with_config(config);

    let request = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            return Menu::new(&mut generator, stdin.lock(), io::stdout()).run();
        }
        Commands::Wheel { items, trace } => return spin_wheel(&mut generator, &items, trace),
        Commands::Number {
            min,
            max,
            exclude,
            count,
        } => {
            let exclude = parse_int_set(exclude.as_deref().unwrap_or_default())?;
            GenerationRequest::integers(min, max, exclude, count)
        }
        Commands::Float {
            min,
            max,
            decimals,
            count,
        } => GenerationRequest::floats(min, max, decimals, count),
        Commands::Color { format, count } => {
            GenerationRequest::colors(ColorFormat::from_name(&format), count)
        }
        Commands::String {
            length,
            pattern,
            exclude_chars,
            count,
        } => GenerationRequest::strings(
            length,
            CharsetPattern::from_name(&pattern),
            exclude_chars,
            count,
        ),
        Commands::Custom { template, count } => GenerationRequest::template(template, count),
        Commands::List {
            items,
            count,
            unique,
        } => GenerationRequest::list(parse_items(&items), count, unique),
    };

    let output = generator
        .generate(&request)
        .with_context(|| format!("{} generation failed", request.mode()))?;
    for line in output.lines() {
        println!("{line}");
    }
    Ok(())
}

fn spin_wheel(generator: &mut RandomGenerator, items: &str, trace: bool) -> Result<()> {
    let mut wheel = generator.new_wheel(parse_items(items))?;
    generator.spin_wheel(&mut wheel)?;

    loop {
        match wheel.tick()? {
            TickOutcome::Spinning { rotation, velocity } => {
                if trace {
                    println!("{:>4}  {rotation:>8.3}°  {velocity:>7.3}°/tick", wheel.ticks());
                }
            }
            TickOutcome::Resolved { label, .. } => {
                println!("{label}");
                return Ok(());
            }
        }
        if wheel.ticks() > 1_000_000 {
            bail!("wheel did not come to rest");
        }
    }
}
