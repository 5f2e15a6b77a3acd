use crate::listing::Listing;
use serde::Deserialize;

/// Origin/destination query against one vertical's catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteQuery {
    pub from: String,
    pub to: String,
}

impl RouteQuery {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Case-insensitive substring match on both endpoints.
///
/// An empty query string matches every record ("" is a substring of any
/// city), so a blank query returns the full catalog. List views rely on
/// that, so the permissive match is intentional.
///
/// Zero matches is a normal outcome, not an error.
pub fn search<L: Listing>(records: &[L], from: &str, to: &str) -> Vec<L> {
    let from = from.to_lowercase();
    let to = to.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.departure_city().to_lowercase().contains(&from)
                && r.arrival_city().to_lowercase().contains(&to)
        })
        .cloned()
        .collect()
}
