use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::query::{ListingFilters, SortKey};

#[derive(Parser)]
#[command(name = "forecourt")]
#[command(about = "Vehicle inventory listings: browse, search and edit")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List listings, optionally searched, filtered and sorted
    #[command(visible_alias = "l")]
    Ls {
        /// Case-insensitive text matched against year, make, model and trim
        #[arg(short, long)]
        search: Option<String>,

        /// Minimum price (inclusive)
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price (inclusive)
        #[arg(long)]
        max_price: Option<f64>,

        /// Oldest model year (inclusive)
        #[arg(long)]
        min_year: Option<i32>,

        /// Newest model year (inclusive)
        #[arg(long)]
        max_year: Option<i32>,

        /// Exact make, case-insensitive
        #[arg(long)]
        make: Option<String>,

        /// Sort: newest, price-asc, price-desc (anything else keeps stored order)
        #[arg(long, value_parser = parse_sort)]
        sort: Option<SortKey>,

        /// Maximum number of listings to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a listing in full
    #[command(visible_alias = "s")]
    Show {
        /// Listing ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a listing to the inventory
    #[command(visible_alias = "c")]
    Create {
        /// Model year
        #[arg(long)]
        year: i32,

        /// Manufacturer, e.g. Toyota
        #[arg(long)]
        make: String,

        /// Model name, e.g. Camry
        #[arg(long)]
        model: String,

        /// Sub-model designation, e.g. SE
        #[arg(long)]
        trim: Option<String>,

        /// Asking price
        #[arg(long)]
        price: f64,

        /// Odometer reading in miles
        #[arg(long)]
        mileage: f64,

        /// Lot or branch holding the vehicle
        #[arg(long)]
        location: String,

        /// Badge shown on the listing (repeatable)
        #[arg(long = "badge")]
        badges: Vec<String>,

        /// Image URL, first is the thumbnail (repeatable)
        #[arg(long = "image")]
        images: Vec<String>,

        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,

        /// Spec sheet entry as LABEL=VALUE (repeatable)
        #[arg(long = "spec")]
        specs: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change fields of an existing listing
    #[command(visible_alias = "u")]
    Update {
        /// Listing ID
        id: String,

        /// Model year
        #[arg(long)]
        year: Option<i32>,

        /// Manufacturer
        #[arg(long)]
        make: Option<String>,

        /// Model name
        #[arg(long)]
        model: Option<String>,

        /// Sub-model designation
        #[arg(long, conflicts_with = "clear_trim")]
        trim: Option<String>,

        /// Remove the trim
        #[arg(long)]
        clear_trim: bool,

        /// Asking price
        #[arg(long)]
        price: Option<f64>,

        /// Odometer reading in miles
        #[arg(long)]
        mileage: Option<f64>,

        /// Lot or branch holding the vehicle
        #[arg(long)]
        location: Option<String>,

        /// Replace the badges (repeatable)
        #[arg(long = "badge")]
        badges: Vec<String>,

        /// Replace the images (repeatable)
        #[arg(long = "image")]
        images: Vec<String>,

        /// Free-text description
        #[arg(short, long, conflicts_with = "clear_description")]
        description: Option<String>,

        /// Remove the description
        #[arg(long)]
        clear_description: bool,

        /// Replace the spec sheet with LABEL=VALUE entries (repeatable)
        #[arg(long = "spec")]
        specs: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a listing
    #[command(visible_alias = "rm")]
    Delete {
        /// Listing ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List each make in the inventory once
    Makes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Discard all changes and restore the demo inventory
    Reset {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (storage_key, default_sort, default_limit)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (storage_key, default_sort, default_limit)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            CreateOptions, LsOptions, UpdateOptions, cmd_config_get, cmd_config_set,
            cmd_config_show, cmd_create, cmd_delete, cmd_ls, cmd_makes, cmd_reset, cmd_show,
            cmd_update,
        };

        match self {
            Commands::Ls {
                search,
                min_price,
                max_price,
                min_year,
                max_year,
                make,
                sort,
                limit,
                json,
            } => cmd_ls(LsOptions {
                search,
                filters: ListingFilters {
                    min_price,
                    max_price,
                    min_year,
                    max_year,
                    make,
                },
                sort,
                limit,
                json,
            }),

            Commands::Show { id, json } => cmd_show(&id, json),

            Commands::Create {
                year,
                make,
                model,
                trim,
                price,
                mileage,
                location,
                badges,
                images,
                description,
                specs,
                json,
            } => cmd_create(CreateOptions {
                year,
                make,
                model,
                trim,
                price,
                mileage,
                location,
                badges,
                images,
                description,
                specs,
                json,
            }),

            Commands::Update {
                id,
                year,
                make,
                model,
                trim,
                clear_trim,
                price,
                mileage,
                location,
                badges,
                images,
                description,
                clear_description,
                specs,
                json,
            } => cmd_update(
                &id,
                UpdateOptions {
                    year,
                    make,
                    model,
                    trim,
                    clear_trim,
                    price,
                    mileage,
                    location,
                    badges,
                    images,
                    description,
                    clear_description,
                    specs,
                    json,
                },
            ),

            Commands::Delete { id, json } => cmd_delete(&id, json),
            Commands::Makes { json } => cmd_makes(json),
            Commands::Reset { json } => cmd_reset(json),

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Sort keys are lenient: unknown keys keep the stored order.
fn parse_sort(s: &str) -> Result<SortKey, String> {
    Ok(SortKey::from_key(s))
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "forecourt", &mut io::stdout());
}
