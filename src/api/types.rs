use serde::{Deserialize, Deserializer, Serialize};

/// One search hit. Identity is `object_id`.
///
/// The search API reports `null` for fields that do not apply to a hit
/// (comments have no title, deleted items have no author), so every
/// descriptive field decodes `null` or a missing key to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_comments: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u32,
}

/// Body of a successful search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    pub hits: Vec<Story>,
    pub page: u32,
    /// Total number of pages for the query. Zero when the upstream omits it.
    #[serde(rename = "nbPages", default)]
    pub nb_pages: u32,
}

impl SearchPage {
    /// True when `page` is the last page the upstream can serve.
    pub fn is_last(&self) -> bool {
        self.nb_pages > 0 && self.page >= self.nb_pages.saturating_sub(1)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_hit_with_null_fields() {
        let json = r#"{
            "objectID": "42",
            "url": null,
            "title": "Ask HN: anything",
            "author": "pg",
            "num_comments": null,
            "points": 7,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.object_id, "42");
        assert_eq!(story.url, "");
        assert_eq!(story.num_comments, 0);
        assert_eq!(story.points, 7);
    }

    #[test]
    fn decodes_page_without_nb_pages() {
        let json = r#"{"hits": [], "page": 3}"#;
        let page: SearchPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 3);
        assert_eq!(page.nb_pages, 0);
        assert!(!page.is_last());
    }

    #[test]
    fn last_page_detection() {
        let page = SearchPage {
            hits: vec![],
            page: 4,
            nb_pages: 5,
        };
        assert!(page.is_last());
    }

    #[test]
    fn last_page_detection_at_page_limit() {
        let page = SearchPage {
            hits: vec![],
            page: u32::MAX,
            nb_pages: 5,
        };
        assert!(page.is_last());

        let page = SearchPage {
            hits: vec![],
            page: 0,
            nb_pages: u32::MAX,
        };
        assert!(!page.is_last());
    }

    #[test]
    fn missing_object_id_is_rejected() {
        let json = r#"{"title": "no id"}"#;
        assert!(serde_json::from_str::<Story>(json).is_err());
    }
}
