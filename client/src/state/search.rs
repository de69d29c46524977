//! Global search overlay state and matching.
//!
//! DESIGN
//! ======
//! Matching is a plain case-insensitive substring scan over three in-memory
//! sources (identities, datasets, page descriptors), kept in source order and
//! capped at `MAX_RESULTS`. No tokenization, ranking or fuzzy matching.
//!
//! Lifecycle per keystroke: `Idle -> Debouncing -> Searching -> Results|Empty`.
//! Each `input` bumps `generation`; a debounce timer or completion holding an
//! older generation is dropped, so a slow earlier search can never overwrite
//! a newer one.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::{DataverseDataset, EnhancedDid};

pub const MAX_RESULTS: usize = 10;
pub const DEBOUNCE_MS: u64 = 300;
pub const RECENT_LIMIT: usize = 5;
/// Local-storage key holding the recent query list.
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";

/// Which collection a result came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultKind {
    Identity,
    Dataset,
    Page,
}

impl ResultKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Identity => "DID",
            Self::Dataset => "Dataset",
            Self::Page => "Page",
        }
    }
}

/// One row in the search overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub kind: ResultKind,
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Route to navigate to when the row is chosen.
    pub href: String,
}

/// Static description of a navigable page, indexed by search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageDescriptor {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

/// Borrowed view over everything the overlay can match against.
#[derive(Clone, Copy, Debug)]
pub struct SearchSources<'a> {
    pub identities: &'a [EnhancedDid],
    pub datasets: &'a [DataverseDataset],
    pub pages: &'a [PageDescriptor],
}

fn any_contains<'a>(needle: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    fields.into_iter().any(|field| field.to_lowercase().contains(needle))
}

fn identity_matches(needle: &str, did: &EnhancedDid) -> bool {
    let fixed = [did.id.as_str(), did.metadata.name.as_str(), did.metadata.description.as_str()];
    any_contains(needle, fixed.into_iter().chain(did.metadata.tags.iter().map(String::as_str)))
}

fn dataset_matches(needle: &str, dataset: &DataverseDataset) -> bool {
    let fixed = [dataset.persistent_id.as_str(), dataset.title.as_str(), dataset.description.as_str()];
    any_contains(needle, fixed.into_iter().chain(dataset.subjects.iter().map(String::as_str)))
}

fn page_matches(needle: &str, page: &PageDescriptor) -> bool {
    let fixed = [page.path, page.title, page.description];
    any_contains(needle, fixed.into_iter().chain(page.keywords.iter().copied()))
}

fn identity_result(did: &EnhancedDid) -> SearchResult {
    let title = if did.metadata.name.is_empty() { did.id.clone() } else { did.metadata.name.clone() };
    SearchResult {
        kind: ResultKind::Identity,
        id: did.id.clone(),
        title,
        subtitle: did.id.clone(),
        href: "/dids".to_owned(),
    }
}

fn dataset_result(dataset: &DataverseDataset) -> SearchResult {
    SearchResult {
        kind: ResultKind::Dataset,
        id: dataset.persistent_id.clone(),
        title: dataset.title.clone(),
        subtitle: dataset.authors.join(", "),
        href: "/datasets".to_owned(),
    }
}

fn page_result(page: &PageDescriptor) -> SearchResult {
    SearchResult {
        kind: ResultKind::Page,
        id: page.path.to_owned(),
        title: page.title.to_owned(),
        subtitle: page.description.to_owned(),
        href: page.path.to_owned(),
    }
}

/// Match `query` against every source, in source order, capped at `MAX_RESULTS`.
///
/// A blank query matches nothing.
pub fn search(query: &str, sources: &SearchSources<'_>) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let identities = sources
        .identities
        .iter()
        .filter(|d| identity_matches(&needle, d))
        .map(identity_result);
    let datasets = sources
        .datasets
        .iter()
        .filter(|d| dataset_matches(&needle, d))
        .map(dataset_result);
    let pages = sources
        .pages
        .iter()
        .filter(|p| page_matches(&needle, p))
        .map(page_result);

    identities.chain(datasets).chain(pages).take(MAX_RESULTS).collect()
}

/// Record `query` as the most recent search: trimmed, deduplicated, capped.
pub fn push_recent(recent: &mut Vec<String>, query: &str) {
    let query = query.trim();
    if query.is_empty() {
        return;
    }
    recent.retain(|q| q != query);
    recent.insert(0, query.to_owned());
    recent.truncate(RECENT_LIMIT);
}

/// Sanitize a list loaded from storage, keeping first occurrences.
pub fn normalize_recent(raw: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(RECENT_LIMIT);
    for query in raw {
        let query = query.trim();
        if query.is_empty() || out.iter().any(|q| q == query) {
            continue;
        }
        out.push(query.to_owned());
        if out.len() == RECENT_LIMIT {
            break;
        }
    }
    out
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Debouncing,
    Searching,
    Results,
    Empty,
}

/// Search overlay state.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub phase: SearchPhase,
    /// Bumped on every input; identifies the only search allowed to land.
    pub generation: u64,
    pub results: Vec<SearchResult>,
    pub recent: Vec<String>,
}

impl SearchState {
    /// Accept a new query. Returns the ticket the debounce timer must present,
    /// or `None` when the query is blank and nothing should run.
    pub fn input(&mut self, query: &str) -> Option<u64> {
        self.query = query.to_owned();
        self.generation += 1;
        if query.trim().is_empty() {
            self.phase = SearchPhase::Idle;
            self.results.clear();
            return None;
        }
        self.phase = SearchPhase::Debouncing;
        Some(self.generation)
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.generation
    }

    /// Debounce elapsed for `ticket`. Returns `false` if a newer input superseded it.
    pub fn begin(&mut self, ticket: u64) -> bool {
        if !self.is_current(ticket) || self.phase != SearchPhase::Debouncing {
            return false;
        }
        self.phase = SearchPhase::Searching;
        true
    }

    /// Land the results of the search started for `ticket`.
    ///
    /// Stale tickets are ignored. `search` runs over in-memory records and
    /// cannot fail, so there is no error outcome to land; no matches is the
    /// empty state. Returns `true` when the results were applied.
    pub fn finish(&mut self, ticket: u64, results: Vec<SearchResult>) -> bool {
        if !self.is_current(ticket) || self.phase != SearchPhase::Searching {
            return false;
        }
        push_recent(&mut self.recent, &self.query);
        self.phase = if results.is_empty() { SearchPhase::Empty } else { SearchPhase::Results };
        self.results = results;
        true
    }

    /// Reset the query and invalidate anything in flight.
    pub fn clear(&mut self) {
        self.query.clear();
        self.generation += 1;
        self.phase = SearchPhase::Idle;
        self.results.clear();
    }
}
