use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use roster::config::{DEFAULT_CONFIG_FILE, RosterConfig};
use roster::fixtures::Fixtures;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster", about = "Query yoga studio member and class fixtures")]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Fixture directory. Overrides `data_dir` from the config file.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Count the keys of the new member record
    Keys,
    /// Sum the numbers in the simple array, ignoring falsy values
    Sum,
    /// Build the new member record from its key/value pairs
    NewMember,
    /// Group classes by instructor
    Group,
    /// List members without their age
    OmitAge,
    /// Count the classes an instructor teaches
    Count {
        /// Instructor name (exact match)
        instructor: String,
    },
    /// List current members only
    Active,
    /// List each class title once with its price
    Unique,
    /// List classes by title, then by level from hardest to easiest
    Order,
}

impl Cli {
    /// Applies command-line overrides on top of the config file.
    pub fn resolve_config(&self) -> Result<RosterConfig> {
        let mut config = RosterConfig::load(&self.config)
            .with_context(|| format!("Failed to load config {}", self.config.display()))?;
        if let Some(dir) = &self.data_dir {
            config.data_dir.clone_from(dir);
        }
        if self.compact {
            config.pretty = false;
        }
        Ok(config)
    }
}

pub fn run_command(command: &Commands, fixtures: &Fixtures) -> Result<Value> {
    log::debug!("Running {command:?}");
    let value = match command {
        Commands::Keys => {
            let member = roster::new_member_array_to_object(&fixtures.new_member);
            Value::from(roster::number_of_keys(&Value::Object(member)))
        }
        Commands::Sum => number_value(roster::sum_numbers(&fixtures.simple_array)),
        Commands::NewMember => {
            Value::Object(roster::new_member_array_to_object(&fixtures.new_member))
        }
        Commands::Group => {
            serde_json::to_value(roster::group_class_by_instructor(&fixtures.yoga_classes))?
        }
        Commands::OmitAge => serde_json::to_value(roster::omit_age_from_members(&fixtures.members))?,
        Commands::Count { instructor } => serde_json::to_value(
            roster::count_classes_by_instructor(&fixtures.yoga_classes, instructor),
        )?,
        Commands::Active => {
            serde_json::to_value(roster::remove_inactive_members(&fixtures.members))?
        }
        Commands::Unique => serde_json::to_value(roster::get_unique_classes(&fixtures.yoga_classes))?,
        Commands::Order => serde_json::to_value(roster::order_classes_by_title_and_level(
            &fixtures.yoga_classes,
        ))?,
    };
    Ok(value)
}

// Whole totals print as `28`, not `28.0`.
fn number_value(total: f64) -> Value {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if total.fract() == 0.0 && total.abs() <= MAX_EXACT {
        Value::from(total as i64)
    } else {
        Value::from(total)
    }
}

pub fn render(value: &Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
