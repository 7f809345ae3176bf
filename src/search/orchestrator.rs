use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::ListingApi;
use crate::errors::SearchError;
use crate::models::Property;
use crate::search::filters::FilterSet;
use crate::search::query::{build_query, to_query_string};
use crate::search::recent::{RecentSearchStore, SearchRecord};

/// How many distinct cities the quick-search shortcuts show.
const POPULAR_CITY_LIMIT: usize = 6;

/// Result of one executed search.
///
/// `superseded` is set when a newer search started before this one resolved;
/// callers should discard such results and keep the newer search's.
#[derive(Debug)]
pub struct SearchOutcome {
    pub properties: Vec<Property>,
    pub superseded: bool,
}

/// Runs property searches end to end: validates the criteria, builds the
/// query, calls the listing API and records the search in the recent-search
/// history.
///
/// Each `execute` call is an independent transaction; the only state carried
/// across calls is the generation counter used to order overlapping
/// requests.
pub struct SearchOrchestrator {
    api: Arc<dyn ListingApi>,
    store: RecentSearchStore,
    generation: AtomicU64,
}

impl SearchOrchestrator {
    pub fn new(api: Arc<dyn ListingApi>, store: RecentSearchStore) -> Self {
        Self {
            api,
            store,
            generation: AtomicU64::new(0),
        }
    }

    /// The stored recent searches, display-trimmed.
    pub fn recent_searches(&self) -> Vec<SearchRecord> {
        self.store.load()
    }

    /// Executes one search.
    ///
    /// Rejects with [`SearchError::NoCriteria`] before any network traffic
    /// when the trimmed term is empty and every filter is at its default.
    /// A transport failure leaves the recent-search history untouched.
    pub async fn execute(
        &self,
        term: &str,
        filters: &FilterSet,
    ) -> Result<SearchOutcome, SearchError> {
        let term = term.trim();
        if term.is_empty() && filters.is_default() {
            return Err(SearchError::NoCriteria);
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let query = build_query(term, filters);
        debug!("Searching properties: {}", to_query_string(&query));

        let properties = self.api.list_properties(&query).await?;

        self.store
            .save(SearchRecord::new(term, filters.clone(), properties.len()));

        let superseded = self.generation.load(Ordering::SeqCst) != generation;
        if superseded {
            debug!("Search {generation} resolved after a newer request started");
        } else {
            info!("Found {} properties", properties.len());
        }

        Ok(SearchOutcome {
            properties,
            superseded,
        })
    }

    /// Quick search for a single city, merged into the given filters.
    pub async fn search_city(
        &self,
        city: &str,
        filters: &FilterSet,
    ) -> Result<SearchOutcome, SearchError> {
        let mut merged = filters.clone();
        merged.city = city.to_string();
        self.execute("", &merged).await
    }

    /// The first [`POPULAR_CITY_LIMIT`] distinct cities from the unfiltered
    /// listing, in first-seen order. Empty on transport failure.
    pub async fn load_popular_cities(&self) -> Vec<String> {
        let properties = match self.api.list_properties(&[]).await {
            Ok(properties) => properties,
            Err(err) => {
                warn!("Error loading popular cities: {err}");
                return Vec::new();
            }
        };

        let mut cities: Vec<String> = Vec::new();
        for property in &properties {
            if property.city.is_empty() || cities.contains(&property.city) {
                continue;
            }
            cities.push(property.city.clone());
            if cities.len() == POPULAR_CITY_LIMIT {
                break;
            }
        }
        cities
    }
}
