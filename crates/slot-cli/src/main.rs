//! `slots` CLI -- inspect tutor availability and booking feasibility from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # The next two weeks of 30-minute bookable units
//! slots unpack --rules rules.json --bookings bookings.json
//!
//! # A custom window and lesson length
//! slots unpack --rules rules.json --bookings bookings.json \
//!     --start 2026-03-02 --days 7 --unit 60
//!
//! # The raw free spans (before any lesson duration is chosen)
//! slots free --rules rules.json --bookings bookings.json --start 2026-03-02
//!
//! # Would this booking fit? Exits non-zero when it would not.
//! slots check --rules rules.json --bookings bookings.json \
//!     --rule 1 --start 2026-03-02T10:30:00Z --duration 30
//! ```
//!
//! Rules and bookings are JSON arrays using slot-engine's serde shapes.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use slot_engine::{
    can_book, discretize, is_parent, unpack, unpack_free, AvailabilityRule, BookingRequest,
    SubSlot, UnpackQuery,
};
use std::fs;
use std::process;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Availability and booking feasibility CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the day-grouped bookable units for a rolling window
    Unpack {
        /// JSON file with the availability rules
        #[arg(short, long)]
        rules: String,
        /// JSON file with the committed bookings
        #[arg(short, long)]
        bookings: String,
        /// First day of the window (defaults to today, UTC)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Window length in days
        #[arg(long, default_value_t = slot_engine::unpack::DEFAULT_WINDOW_DAYS)]
        days: u32,
        /// Bookable unit length in minutes
        #[arg(long, default_value_t = slot_engine::unpack::DEFAULT_UNIT_MINUTES)]
        unit: i64,
    },
    /// Print the un-split free spans for a rolling window
    Free {
        /// JSON file with the availability rules
        #[arg(short, long)]
        rules: String,
        /// JSON file with the committed bookings
        #[arg(short, long)]
        bookings: String,
        /// First day of the window (defaults to today, UTC)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Window length in days
        #[arg(long, default_value_t = slot_engine::unpack::DEFAULT_WINDOW_DAYS)]
        days: u32,
    },
    /// Check whether a proposed booking fits; exits non-zero when it does not
    Check {
        /// JSON file with the availability rules
        #[arg(short, long)]
        rules: String,
        /// JSON file with the committed bookings
        #[arg(short, long)]
        bookings: String,
        /// Rule to book against
        #[arg(long)]
        rule: i64,
        /// Requested start instant (RFC 3339, UTC)
        #[arg(long)]
        start: DateTime<Utc>,
        /// Requested duration in minutes
        #[arg(long)]
        duration: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Unpack {
            rules,
            bookings,
            start,
            days,
            unit,
        } => {
            let rules = read_rules(&rules)?;
            let booked = read_bookings(&bookings)?;
            let query = UnpackQuery {
                start: start.unwrap_or_else(|| Utc::now().date_naive()),
                days,
                unit_minutes: unit,
            };

            let availability = unpack(&rules, &booked, &query)?;
            println!("{}", serde_json::to_string_pretty(&availability)?);
        }
        Commands::Free {
            rules,
            bookings,
            start,
            days,
        } => {
            let rules = read_rules(&rules)?;
            let booked = read_bookings(&bookings)?;
            let start = start.unwrap_or_else(|| Utc::now().date_naive());

            let free = unpack_free(&rules, &booked, start, days)?;
            println!("{}", serde_json::to_string_pretty(&free)?);
        }
        Commands::Check {
            rules,
            bookings,
            rule,
            start,
            duration,
        } => {
            let rules = read_rules(&rules)?;
            let booked = read_bookings(&bookings)?;

            let target = rules
                .iter()
                .find(|r| r.id == rule)
                .with_context(|| format!("no rule with id {rule}"))?;

            // Realize the rule on the requested day; an inactive day means
            // there is nothing to book against.
            let parent = match discretize(target, start.date_naive())? {
                Some(parent) => parent,
                None => {
                    println!("infeasible: rule {rule} is not active on {}", start.date_naive());
                    process::exit(1);
                }
            };

            let routed: Vec<SubSlot> = booked
                .iter()
                .filter(|b| is_parent(&parent, b))
                .copied()
                .collect();
            let request = BookingRequest {
                start,
                duration_minutes: duration,
            };

            if can_book(&parent, &routed, &request)? {
                println!("feasible: [{}, {}) fits rule {rule}", start, request.end());
            } else {
                println!("infeasible: [{}, {}) does not fit rule {rule}", start, request.end());
                process::exit(1);
            }
        }
    }

    Ok(())
}

fn read_rules(path: &str) -> Result<Vec<AvailabilityRule>> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    let rules: Vec<AvailabilityRule> =
        serde_json::from_str(&raw).with_context(|| format!("{path} is not a valid rules file"))?;
    for rule in &rules {
        if let Err(e) = rule.validate() {
            bail!("{path}: {e}");
        }
    }
    Ok(rules)
}

fn read_bookings(path: &str) -> Result<Vec<SubSlot>> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("{path} is not a valid bookings file"))
}
