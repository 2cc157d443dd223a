use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::PlanMode;
use crate::planner::Season;

/// Weekly menu planner: fills and improves 7-day breakfast/lunch/dinner plans.
#[derive(Parser, Debug)]
#[command(name = "menu-planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the catalog JSON file (recipes, ingredients, products).
    #[arg(short, long, global = true, default_value = "catalog.json")]
    pub catalog: PathBuf,

    /// Tenant whose recipes are planned.
    #[arg(short, long, global = true, default_value = "default")]
    pub tenant: String,

    /// Keyword table replacing the built-in exclusion and seasonal lists.
    #[arg(long, global = true)]
    pub keywords: Option<PathBuf>,

    /// Seed for reproducible tie-breaks.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Season to plan for instead of the current one.
    #[arg(long, global = true, value_enum)]
    pub season: Option<Season>,
}

/// Plan input and output options shared by `generate` and `optimize`.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Planning mode. Asked interactively when omitted.
    #[arg(short, long, value_enum)]
    pub mode: Option<PlanMode>,

    /// Existing plan to start from.
    #[arg(short, long)]
    pub plan: Option<PathBuf>,

    /// Custom config JSON (budget, nutrition, exclusions, ...).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Week number echoed in the response.
    #[arg(short, long, default_value_t = 1)]
    pub week: u32,

    /// Write the resulting plan as JSON.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Export the resulting plan as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Print the full JSON response instead of tables.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill the empty slots of a weekly plan.
    Generate {
        #[command(flatten)]
        args: PlanArgs,

        /// Use the first recipe if exclusions leave nothing.
        #[arg(long)]
        allow_excluded_fallback: bool,
    },

    /// Replace under-performing meals of an existing plan.
    Optimize {
        #[command(flatten)]
        args: PlanArgs,

        /// Write the optimized plan without asking.
        #[arg(short, long)]
        yes: bool,
    },

    /// Show statistics for a saved plan.
    Stats {
        /// Plan JSON file.
        plan: PathBuf,
    },

    /// Answer one JSON request (`{"generate": ...}` or `{"optimize": ...}`).
    ServeRequest {
        /// Request file, `-` for stdin.
        #[arg(default_value = "-")]
        request: PathBuf,
    },
}
