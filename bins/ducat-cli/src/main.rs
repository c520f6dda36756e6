//! ducat-cli — settlement-math toolbox for order harnesses.
//!
//! Exposes the library operations (salt encode/decode, auction rates,
//! fixed-point power, voting power) so deployment and test scripts can
//! cross-check on-chain values from the command line.

use std::time::{SystemTime, UNIX_EPOCH};

use alloy_primitives::U256;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ducat_core::constants::EXP_BASE;
use ducat_core::salt::{OrderSalt, SaltFields};
use ducat_core::traits::RateCalculator;
use ducat_decay::DecayEngine;

/// Dutch-auction settlement math toolbox.
#[derive(Parser)]
#[command(name = "ducat-cli")]
#[command(version, about = "Dutch-auction settlement math toolbox.")]
struct Cli {
    /// Emit JSON instead of human-readable output.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a packed order salt into its fields.
    Decode {
        /// The 256-bit salt word, decimal or 0x-prefixed hex.
        salt: String,
    },
    /// Pack auction parameters into an order salt.
    Encode(EncodeArgs),
    /// Auction rate multiplier (basis points) at a given time.
    Rate(RateArgs),
    /// Fixed-point power: point * (base/1e18)^exponent.
    Power(PowerArgs),
    /// Voting power of a stake after elapsed seconds of decay.
    VotingPower(VotingPowerArgs),
}

#[derive(Args)]
struct EncodeArgs {
    /// Auction start, Unix seconds.
    #[arg(long)]
    start_time: u32,
    /// Auction window, seconds.
    #[arg(long)]
    duration: u32,
    /// Initial rate bump in basis points.
    #[arg(long)]
    rate_bump: u16,
    /// Resolver fee.
    #[arg(long, default_value_t = 0)]
    fee: u32,
    /// 144-bit nonce, decimal or 0x-prefixed hex.
    #[arg(long, default_value = "0")]
    salt: String,
}

#[derive(Args)]
struct RateArgs {
    /// Initial rate bump in basis points.
    #[arg(long)]
    bump: u16,
    /// Auction start, Unix seconds.
    #[arg(long)]
    start: u64,
    /// Auction window, seconds.
    #[arg(long)]
    duration: u32,
    /// Query time, Unix seconds. Defaults to the current time.
    #[arg(long)]
    now: Option<u64>,
    /// Also apply the rate to this taking amount.
    #[arg(long)]
    amount: Option<String>,
}

#[derive(Args)]
struct PowerArgs {
    /// 1e18-scaled base.
    base: String,
    /// Exponent.
    exponent: String,
    /// 1e18-scaled point to multiply the power into.
    point: String,
}

#[derive(Args)]
struct VotingPowerArgs {
    /// Deposited amount, 1e18-scaled.
    amount: String,
    /// Seconds elapsed since the lock origin.
    elapsed: u64,
    /// Per-second decay base, 1e18-scaled. Defaults to the four-year
    /// 90%-loss base.
    #[arg(long)]
    base: Option<String>,
}

fn parse_u256(s: &str) -> Result<U256> {
    s.parse::<U256>()
        .with_context(|| format!("invalid integer: {s}"))
}

fn unix_now() -> Result<u64> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before Unix epoch")?
        .as_secs())
}

fn print_fields(fields: &SaltFields, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(fields)?);
    } else {
        println!("start_time:        {}", fields.start_time);
        println!("duration:          {}", fields.duration);
        println!("initial_rate_bump: {}", fields.initial_rate_bump);
        println!("fee:               {}", fields.fee);
        println!("salt:              {:#x}", fields.salt);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let engine = DecayEngine::new();

    match cli.command {
        Commands::Decode { salt } => {
            let word = OrderSalt(parse_u256(&salt)?);
            let fields = word.decode();
            debug!(%word, "decoded order salt");
            print_fields(&fields, cli.json)?;
        }
        Commands::Encode(args) => {
            let fields = SaltFields {
                start_time: args.start_time,
                duration: args.duration,
                initial_rate_bump: args.rate_bump,
                fee: args.fee,
                salt: parse_u256(&args.salt)?,
            };
            let word = OrderSalt::encode(&fields);
            if cli.json {
                println!("{}", serde_json::json!({ "salt": word.to_string() }));
            } else {
                println!("{word}");
            }
        }
        Commands::Rate(args) => {
            let now = match args.now {
                Some(now) => now,
                None => unix_now()?,
            };
            let rate = engine.auction_rate(args.bump, args.start, args.duration, now)?;
            let adjusted = args
                .amount
                .as_deref()
                .map(|a| Ok::<_, anyhow::Error>(engine.apply_rate(parse_u256(a)?, rate)?))
                .transpose()?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "rate_bps": rate,
                        "adjusted_amount": adjusted.map(|a| a.to_string()),
                    })
                );
            } else {
                println!("rate: {rate} bps");
                if let Some(adjusted) = adjusted {
                    println!("adjusted amount: {adjusted}");
                }
            }
        }
        Commands::Power(args) => {
            let got = engine.power(
                parse_u256(&args.base)?,
                parse_u256(&args.exponent)?,
                parse_u256(&args.point)?,
            )?;
            if cli.json {
                println!("{}", serde_json::json!({ "result": got.to_string() }));
            } else {
                println!("{got}");
            }
        }
        Commands::VotingPower(args) => {
            let base = match args.base.as_deref() {
                Some(b) => parse_u256(b)?,
                None => EXP_BASE,
            };
            let power = engine.voting_power_of(parse_u256(&args.amount)?, base, args.elapsed)?;
            if cli.json {
                println!("{}", serde_json::json!({ "voting_power": power.to_string() }));
            } else {
                println!("{power}");
            }
        }
    }

    Ok(())
}
