use url::Url;

use crate::api::error::FetchError;
use crate::config::ApiConfig;

/// Builds request URLs for the search endpoint.
///
/// The produced URL is also what the session logs for search history, so
/// the term must round-trip through `derived::extract_search_term`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEndpoint {
    base: Url,
    hits_per_page: u32,
}

impl SearchEndpoint {
    pub fn new(base_url: &str, hits_per_page: u32) -> Result<Self, FetchError> {
        let base = Url::parse(base_url).map_err(|source| FetchError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            base,
            hits_per_page,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        Self::new(&config.base_url, config.hits_per_page)
    }

    /// `{base}?query={term}&page={page}&hitsPerPage={n}`
    ///
    /// Any query string already on the base URL is replaced.
    pub fn url(&self, term: &str, page: u32) -> String {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("query", term)
            .append_pair("page", &page.to_string())
            .append_pair("hitsPerPage", &self.hits_per_page.to_string());
        url.into()
    }
}
