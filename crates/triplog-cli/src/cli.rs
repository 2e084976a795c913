use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

/// CLI-side trip leg selector; mapped to the client's record type at
/// dispatch so clap stays out of the client crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TripKind {
    #[default]
    Pickup,
    Drop,
}

/// Extended help shown after `triplog trip add --help`.
pub const TRIP_ADD_AFTER_HELP: &str = "\
Field rules:
  --date is the only required field and is stored as given; use YYYY-MM-DD
  so daily summaries sort correctly.

  --amount accepts whatever you type. Values that parse as a number are
  stored as numbers; anything else is kept verbatim and counts as 0 in
  summaries and totals.

  Everything else (--company, --vehicle, --customer, --mobile, --location)
  is free text and may be omitted.

What to do next:
  triplog trip list          Review logged trips
  triplog summary            See per-day earnings
  triplog export             Write Driving_Trips.csv
";

#[derive(Debug, Parser)]
#[command(
    name = "triplog",
    version,
    about = "driving trip ledger",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log, list, and clear trips
    #[command(arg_required_else_help = true)]
    Trip {
        #[command(subcommand)]
        command: TripCommand,
    },
    /// Show per-day trip counts and earnings, newest day first
    Summary {
        /// Start date filter, inclusive (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<IsoDate>,
        /// End date filter, inclusive (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<IsoDate>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Write every logged trip to a CSV file
    Export {
        /// Output file path (defaults to Driving_Trips.csv in the working directory)
        #[arg(long)]
        out: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum TripCommand {
    /// Log a new trip
    #[command(after_long_help = TRIP_ADD_AFTER_HELP)]
    Add {
        /// Trip date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Company name
        #[arg(long, default_value = "")]
        company: String,
        /// Vehicle number
        #[arg(long, default_value = "")]
        vehicle: String,
        /// Customer name
        #[arg(long, default_value = "")]
        customer: String,
        /// Customer mobile
        #[arg(long, default_value = "")]
        mobile: String,
        /// Trip location
        #[arg(long, default_value = "")]
        location: String,
        /// Pickup or drop leg
        #[arg(long = "type", value_enum, default_value = "pickup")]
        kind: TripKind,
        /// Trip amount
        #[arg(long)]
        amount: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List all logged trips, newest first
    List {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Remove every saved trip
    Clear {
        /// Confirm the destructive clear
        #[arg(long)]
        yes: bool,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
