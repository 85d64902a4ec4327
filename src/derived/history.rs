use url::{form_urlencoded, Url};

/// How many trailing distinct terms are considered, including the current one.
pub const LAST_SEARCHES_WINDOW: usize = 6;

const QUERY_PARAM: &str = "query";

/// Returns the `query` parameter of a request URL, or an empty string.
///
/// Accepts absolute URLs (`https://host/api/v1/search?query=x&page=2`) as
/// well as a bare query suffix (`/search?query=x`, `?query=x`, `query=x`).
pub fn extract_search_term(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .query_pairs()
            .find(|(key, _)| key == QUERY_PARAM)
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default(),
        Err(_) => {
            let query = match url.split_once('?') {
                Some((_, query)) => query,
                None => url,
            };
            let query = query.split('#').next().unwrap_or_default();
            form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == QUERY_PARAM)
                .map(|(_, value)| value.into_owned())
                .unwrap_or_default()
        }
    }
}

/// Prior distinct search terms, oldest first, for quick re-selection.
///
/// `urls` is the full request log of the session. Consecutive requests for
/// the same term (page fetches) collapse into one entry. The last entry is
/// the search in progress and is never offered back.
pub fn get_last_searches<S: AsRef<str>>(urls: &[S]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for url in urls {
        let term = extract_search_term(url.as_ref());
        if terms.last() != Some(&term) {
            terms.push(term);
        }
    }

    let start = terms.len().saturating_sub(LAST_SEARCHES_WINDOW);
    let mut recent = terms.split_off(start);
    recent.pop();
    recent
}
