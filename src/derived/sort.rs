use std::cmp::Ordering;

use crate::api::Story;

/// Column the story list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Fetch order.
    #[default]
    None,
    Title,
    Author,
    Comments,
    Points,
}

impl SortKey {
    /// Keys a user can pick from the list header, in column order.
    pub const COLUMNS: [SortKey; 4] = [
        SortKey::Title,
        SortKey::Author,
        SortKey::Comments,
        SortKey::Points,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "None",
            SortKey::Title => "Title",
            SortKey::Author => "Author",
            SortKey::Comments => "Comments",
            SortKey::Points => "Points",
        }
    }

    /// Numeric columns list the largest value first unless reversed.
    pub fn is_descending(self) -> bool {
        matches!(self, SortKey::Comments | SortKey::Points)
    }

    fn compare(self, a: &Story, b: &Story) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Author => a.author.cmp(&b.author),
            SortKey::Comments => b.num_comments.cmp(&a.num_comments),
            SortKey::Points => b.points.cmp(&a.points),
        }
    }
}

/// Ordered projection of `list` for display.
///
/// The sort is stable, so ties keep their fetch order. `is_reverse` flips
/// the finished order as a whole, ties included.
pub fn sort_list(list: &[Story], key: SortKey, is_reverse: bool) -> Vec<Story> {
    let mut sorted = list.to_vec();
    if key != SortKey::None {
        sorted.sort_by(|a, b| key.compare(a, b));
    }
    if is_reverse {
        sorted.reverse();
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str, title: &str, author: &str, num_comments: u32, points: u32) -> Story {
        Story {
            object_id: id.to_string(),
            url: String::new(),
            title: title.to_string(),
            author: author.to_string(),
            num_comments,
            points,
        }
    }

    fn ids(list: &[Story]) -> Vec<&str> {
        list.iter().map(|s| s.object_id.as_str()).collect()
    }

    fn sample() -> Vec<Story> {
        vec![
            story("1", "React", "Jordan Walke", 3, 4),
            story("2", "Redux", "Dan Abramov", 2, 5),
            story("3", "Angular", "Misko Hevery", 3, 4),
        ]
    }

    #[test]
    fn none_keeps_fetch_order() {
        assert_eq!(ids(&sort_list(&sample(), SortKey::None, false)), vec!["1", "2", "3"]);
    }

    #[test]
    fn none_reversed_is_reverse_fetch_order() {
        assert_eq!(ids(&sort_list(&sample(), SortKey::None, true)), vec!["3", "2", "1"]);
    }

    #[test]
    fn title_ascending() {
        assert_eq!(ids(&sort_list(&sample(), SortKey::Title, false)), vec!["3", "1", "2"]);
    }

    #[test]
    fn author_ascending() {
        assert_eq!(ids(&sort_list(&sample(), SortKey::Author, false)), vec!["2", "1", "3"]);
    }

    #[test]
    fn comments_descending_with_stable_ties() {
        assert_eq!(ids(&sort_list(&sample(), SortKey::Comments, false)), vec!["1", "3", "2"]);
    }

    #[test]
    fn points_reverse_is_exact_reversal() {
        let forward = sort_list(&sample(), SortKey::Points, false);
        let mut reversed = sort_list(&sample(), SortKey::Points, true);
        reversed.reverse();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn descending_keys() {
        assert!(SortKey::Comments.is_descending());
        assert!(SortKey::Points.is_descending());
        assert!(!SortKey::Title.is_descending());
        assert!(!SortKey::None.is_descending());
    }
}
