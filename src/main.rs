mod api;
mod errors;
mod models;
mod search;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use api::{ListingApi, RestListingApi};
use errors::SearchError;
use search::{FilterField, FilterState, RecentSearchStore, SearchOrchestrator};

#[derive(Parser)]
#[command(name = "rental-scout")]
#[command(about = "Property search client for the rental service")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Free-text search term
    term: Vec<String>,

    /// Filter by city
    #[arg(long)]
    city: Option<String>,

    /// Minimum price
    #[arg(long, value_name = "N")]
    min_price: Option<String>,

    /// Maximum price
    #[arg(long, value_name = "N")]
    max_price: Option<String>,

    /// Minimum bedrooms
    #[arg(long)]
    bedrooms: Option<String>,

    /// Minimum bathrooms
    #[arg(long)]
    bathrooms: Option<String>,

    /// Property type (Apartment, House, ...)
    #[arg(long = "type", value_name = "TYPE")]
    property_type: Option<String>,

    /// Toggle an amenity (repeatable)
    #[arg(long = "amenity", value_name = "AMENITY")]
    amenities: Vec<String>,

    /// Listing status (only sent when not "available")
    #[arg(long)]
    status: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List contact requests
    ContactRequests,

    /// Update one contact request's status
    RequestStatus { id: i64, status: String },
}

impl Cli {
    /// Folds the filter flags into a controller, one validated set per flag.
    fn filter_state(&self) -> Result<FilterState, SearchError> {
        let mut state = FilterState::new();
        let scalars = [
            (FilterField::City, &self.city),
            (FilterField::MinPrice, &self.min_price),
            (FilterField::MaxPrice, &self.max_price),
            (FilterField::Bedrooms, &self.bedrooms),
            (FilterField::Bathrooms, &self.bathrooms),
            (FilterField::PropertyType, &self.property_type),
            (FilterField::Status, &self.status),
        ];
        for (field, value) in scalars {
            if let Some(value) = value {
                state.set(field, value)?;
            }
        }
        for amenity in &self.amenities {
            state.toggle_amenity(amenity);
        }
        Ok(state)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 Rental Scout - Property Search");
    info!("==================================");

    let cli = Cli::parse();

    let base_url =
        std::env::var("RENTAL_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    info!("Using rental service at {base_url}");

    let api = Arc::new(RestListingApi::new(base_url)?);

    match cli.command {
        Some(Commands::ContactRequests) => {
            for request in api.contact_requests().await? {
                println!(
                    "#{} {} <{}> [{}]",
                    request.id, request.name, request.email, request.status
                );
                if !request.message.is_empty() {
                    println!("   {}", request.message);
                }
            }
            return Ok(());
        }
        Some(Commands::RequestStatus { id, status }) => {
            api.update_contact_request_status(id, &status).await?;
            info!("Contact request {id} marked {status}");
            return Ok(());
        }
        None => {}
    }

    let state = cli.filter_state()?;
    let term = cli.term.join(" ");

    let orchestrator = SearchOrchestrator::new(api, RecentSearchStore::new());

    let recent = orchestrator.recent_searches();
    if !recent.is_empty() {
        info!("Recent searches:");
        for record in &recent {
            info!(
                "  {:?} -> {} results ({})",
                record.search_term, record.results_count, record.timestamp
            );
        }
    }

    let cities = orchestrator.load_popular_cities().await;
    if !cities.is_empty() {
        info!("Popular cities: {}", cities.join(", "));
    }

    let outcome = match orchestrator.execute(&term, state.filters()).await {
        Ok(outcome) => outcome,
        Err(err @ SearchError::NoCriteria) => {
            warn!("{err}");
            info!("Run with --help to see the search flags");
            return Ok(());
        }
        Err(err) => {
            warn!("{err}");
            return Ok(());
        }
    };

    info!("");
    for (i, property) in outcome.properties.iter().enumerate() {
        println!("{}. {} ({} KSh)", i + 1, property.title, property.price);
        println!(
            "   {} bed, {} bath, {}",
            property.bedrooms, property.bathrooms, property.property_type
        );
        println!("   {} - {}", property.city, property.status);
        if !property.amenities.is_empty() {
            println!("   Amenities: {}", property.amenities.join(", "));
        }
        println!();
    }

    Ok(())
}
