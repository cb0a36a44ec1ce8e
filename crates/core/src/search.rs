//! Name search helpers shared by the venue and artist search pages.

use crate::types::DbId;

/// One matching row: enough to render a link plus the upcoming show count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Search response rendered by the search result pages.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

impl From<Vec<SearchHit>> for SearchResults {
    fn from(data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Build an `ILIKE` pattern matching `term` as a case-insensitive substring.
///
/// The term is trimmed and the LIKE metacharacters `%`, `_` and `\` are
/// escaped, so user input always matches literally. An empty term yields
/// `%`, which matches every row.
pub fn like_pattern(term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        return "%".to_string();
    }
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_term_is_wrapped() {
        assert_eq!(like_pattern("jazz"), "%jazz%");
    }

    #[test]
    fn term_is_trimmed() {
        assert_eq!(like_pattern("  hop \n"), "%hop%");
    }

    #[test]
    fn empty_term_matches_everything() {
        assert_eq!(like_pattern(""), "%");
        assert_eq!(like_pattern("   "), "%");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c\\d"), "%c\\\\d%");
    }

    #[test]
    fn results_count_matches_data() {
        let results = SearchResults::from(vec![
            SearchHit {
                id: 1,
                name: "Jazz Club".into(),
                num_upcoming_shows: 0,
            },
            SearchHit {
                id: 2,
                name: "Jazz Cellar".into(),
                num_upcoming_shows: 2,
            },
        ]);
        assert_eq!(results.count, 2);
        assert_eq!(results.data[1].name, "Jazz Cellar");
    }

    #[test]
    fn empty_results_have_zero_count() {
        let results = SearchResults::from(Vec::new());
        assert_eq!(results.count, 0);
        assert!(results.data.is_empty());
    }
}
