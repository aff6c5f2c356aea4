mod catalogue;
mod favourites;
mod format;
mod models;
mod search;
mod sources;

use anyhow::Result;
use catalogue::PropertyStore;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use favourites::{FavouritesStore, FileStorage};
use format::{format_date, format_price};
use search::{DateRange, SearchCriteria};
use sources::{BundledSource, JsonFileSource, PropertySource};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber;

/// Search and bookmark property listings from the command line
#[derive(Parser)]
#[command(name = "property-scout", version)]
struct Cli {
    /// Listings file to use instead of the bundled sample data
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the catalogue with any combination of filters
    Search(SearchArgs),
    /// Show full details for a single listing
    Show {
        /// Listing id, e.g. prop3
        id: String,
    },
    /// Manage the favourites list
    Fav {
        #[command(subcommand)]
        action: FavCommand,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Property type: house, flat or any
    #[arg(long = "type", value_name = "TYPE")]
    property_type: Option<String>,

    /// Minimum price in whole pounds
    #[arg(long, value_name = "GBP")]
    min_price: Option<i64>,

    /// Maximum price in whole pounds
    #[arg(long, value_name = "GBP")]
    max_price: Option<i64>,

    /// Minimum number of bedrooms
    #[arg(long, value_name = "N")]
    min_bedrooms: Option<u32>,

    /// Maximum number of bedrooms
    #[arg(long, value_name = "N")]
    max_bedrooms: Option<u32>,

    /// Listed on or after this date (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "DATE")]
    added_after: Option<NaiveDate>,

    /// Listed between two dates (inclusive on both ends)
    #[arg(long, num_args = 2, value_names = ["START", "END"])]
    added_between: Option<Vec<NaiveDate>>,

    /// Postcode area prefix, e.g. SE13 or br1
    #[arg(long, value_name = "AREA")]
    postcode: Option<String>,
}

impl SearchArgs {
    fn into_criteria(self) -> Result<SearchCriteria> {
        // "any" is accepted for symmetry with the search form it replaces,
        // and simply means no type filter.
        let property_type = match self.property_type.as_deref() {
            None => None,
            Some(raw) if raw.eq_ignore_ascii_case("any") => None,
            Some(raw) => Some(raw.parse().map_err(anyhow::Error::msg)?),
        };

        let added_between = self.added_between.map(|bounds| DateRange {
            start: bounds[0],
            end: bounds[1],
        });

        Ok(SearchCriteria {
            property_type,
            min_price: self.min_price,
            max_price: self.max_price,
            min_bedrooms: self.min_bedrooms,
            max_bedrooms: self.max_bedrooms,
            added_after: self.added_after,
            added_between,
            postcode_area: self.postcode,
        })
    }
}

#[derive(Subcommand)]
enum FavCommand {
    /// List the current favourites
    List,
    /// Add a listing to the favourites
    Add { id: String },
    /// Remove a listing from the favourites
    Remove { id: String },
    /// Remove every favourite
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();

    let source: Box<dyn PropertySource> = match &cli.file {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(BundledSource),
    };
    let store = PropertyStore::load(source.as_ref()).await?;
    if store.is_empty() {
        warn!("The catalogue contains no listings");
    }

    let favourites = match FileStorage::new() {
        Some(storage) => FavouritesStore::new(Box::new(storage)),
        None => {
            warn!("No user data directory available; favourites will not persist");
            FavouritesStore::detached()
        }
    };

    match cli.command {
        Command::Search(args) => {
            let criteria = args.into_criteria()?;
            run_search(&store, &favourites, &criteria);
        }
        Command::Show { id } => show_listing(&store, &favourites, &id),
        Command::Fav { action } => run_fav(&store, &favourites, action),
    }

    Ok(())
}

fn run_search(store: &PropertyStore, favourites: &FavouritesStore, criteria: &SearchCriteria) {
    if criteria.is_empty() {
        info!("No active filters; listing the whole catalogue");
    }
    let results = search::search(store.all(), criteria);
    info!("Search returned {} of {} listings", results.len(), store.len());

    if results.is_empty() {
        println!("No listings match the given criteria.");
        return;
    }

    for (i, property) in results.iter().enumerate() {
        let marker = if favourites.is_favourite(&property.id) {
            "★"
        } else {
            " "
        };
        println!(
            "{}. {} {} ({})",
            i + 1,
            marker,
            property.location,
            format_price(property.price)
        );
        println!(
            "   {} · {} bedrooms · {}",
            property.property_type, property.bedrooms, property.postcode
        );
        println!("   Added {}", format_date(property.date_added));
        println!("   ID: {}", property.id);
        println!();
    }
}

fn show_listing(store: &PropertyStore, favourites: &FavouritesStore, id: &str) {
    let Some(property) = store.get(id) else {
        println!("No listing with id '{}'.", id);
        return;
    };

    println!("{} ({})", property.location, format_price(property.price));
    println!("{} · {} bedrooms · {}", property.property_type, property.bedrooms, property.postcode);
    println!("Added {}", format_date(property.date_added));
    if let (Some(lat), Some(lon)) = (property.latitude, property.longitude) {
        println!("Coordinates: {}, {}", lat, lon);
    }
    if !property.description.is_empty() {
        println!();
        println!("{}", property.description);
    }
    if favourites.is_favourite(&property.id) {
        println!();
        println!("★ In your favourites");
    }
}

fn run_fav(store: &PropertyStore, favourites: &FavouritesStore, action: FavCommand) {
    match action {
        FavCommand::List => {
            let ids = favourites.read();
            if ids.is_empty() {
                println!("No favourites yet.");
                return;
            }
            for (i, id) in ids.iter().enumerate() {
                match store.get(id) {
                    Some(property) => println!(
                        "{}. {} ({}) [{}]",
                        i + 1,
                        property.location,
                        format_price(property.price),
                        id
                    ),
                    // Favourites can outlive the listing they point at
                    None => println!("{}. (no longer listed) [{}]", i + 1, id),
                }
            }
        }
        FavCommand::Add { id } => {
            if store.get(&id).is_none() {
                println!("No listing with id '{}'.", id);
                return;
            }
            let ids = favourites.add(&id);
            println!("Favourites: {}", summarize(&ids));
        }
        FavCommand::Remove { id } => {
            let ids = favourites.remove(&id);
            println!("Favourites: {}", summarize(&ids));
        }
        FavCommand::Clear => {
            favourites.clear();
            println!("Favourites cleared.");
        }
    }
}

fn summarize(ids: &[String]) -> String {
    if ids.is_empty() {
        "(empty)".to_string()
    } else {
        ids.join(", ")
    }
}
