//! Provider name autocompletion

/// Suggest names matching `query`, case-insensitively.
///
/// Prefix matches come first, then names containing the query elsewhere;
/// both groups keep catalog order. A blank query returns the first `limit`
/// names.
pub fn suggest<'a, S: AsRef<str>>(names: &'a [S], query: &str, limit: usize) -> Vec<&'a str> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return names.iter().map(<S as AsRef<str>>::as_ref).take(limit).collect();
    }

    let mut prefix = Vec::new();
    let mut contains = Vec::new();
    for name in names.iter().map(<S as AsRef<str>>::as_ref) {
        let lower = name.to_lowercase();
        if lower.starts_with(&query) {
            prefix.push(name);
        } else if lower.contains(&query) {
            contains.push(name);
        }
    }

    prefix.into_iter().chain(contains).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &[
        "BSES Rajdhani Power Limited",
        "Tata Power Delhi Distribution Limited",
        "BSES Yamuna Power Limited",
        "Torrent Power Limited",
    ];

    #[test]
    fn test_prefix_matches_rank_first() {
        let results = suggest(NAMES, "t", 10);
        assert_eq!(
            results,
            vec![
                "Tata Power Delhi Distribution Limited",
                "Torrent Power Limited",
                "BSES Rajdhani Power Limited",
                "BSES Yamuna Power Limited",
            ]
        );
    }

    #[test]
    fn test_substring_matches_follow_prefix_matches() {
        let results = suggest(NAMES, "yamuna", 10);
        assert_eq!(results, vec!["BSES Yamuna Power Limited"]);

        let results = suggest(NAMES, "delhi", 10);
        assert_eq!(results, vec!["Tata Power Delhi Distribution Limited"]);

        let results = suggest(NAMES, "bses", 10);
        assert_eq!(
            results,
            vec!["BSES Rajdhani Power Limited", "BSES Yamuna Power Limited"]
        );
    }

    #[test]
    fn test_case_insensitive_and_limited() {
        let results = suggest(NAMES, "POWER", 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], "BSES Rajdhani Power Limited");
    }

    #[test]
    fn test_blank_query_returns_head_of_catalog() {
        let results = suggest(NAMES, "  ", 3);
        assert_eq!(results, NAMES[..3].to_vec());
    }

    #[test]
    fn test_no_match() {
        assert!(suggest(NAMES, "xyz", 5).is_empty());
    }
}
