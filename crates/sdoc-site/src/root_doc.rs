//! Entry document selection.

/// File names (lowercase) preferred as the entry document.
const PREFERRED_NAMES: &[&str] = &["index.sdoc", "readme.sdoc"];

/// Choose the entry document among relative `/`-separated paths.
///
/// Files named `index.sdoc` or `readme.sdoc` (any case) are preferred when
/// present. Among the candidates the shallowest path wins, ties broken by
/// lexicographic path order.
#[must_use]
pub fn choose_root_doc<'a>(paths: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let paths: Vec<&str> = paths.into_iter().collect();
    let preferred: Vec<&str> = paths
        .iter()
        .copied()
        .filter(|path| is_preferred(path))
        .collect();
    let pool = if preferred.is_empty() { paths } else { preferred };

    pool.into_iter()
        .min_by_key(|path| (path.split('/').count(), *path))
}

fn is_preferred(path: &str) -> bool {
    let name = path.rsplit('/').next().unwrap_or(path).to_lowercase();
    PREFERRED_NAMES.contains(&name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_index_over_shallower_plain_doc() {
        let root = choose_root_doc(["b/index.sdoc", "a.sdoc", "c/d/readme.sdoc"]);

        assert_eq!(root, Some("b/index.sdoc"));
    }

    #[test]
    fn test_fewest_segments_then_lexicographic() {
        let root = choose_root_doc(["z/readme.sdoc", "a/index.sdoc", "m/n/index.sdoc"]);

        assert_eq!(root, Some("a/index.sdoc"));
    }

    #[test]
    fn test_preferred_name_is_case_insensitive() {
        let root = choose_root_doc(["guide.sdoc", "docs/README.sdoc"]);

        assert_eq!(root, Some("docs/README.sdoc"));
    }

    #[test]
    fn test_falls_back_to_all_documents() {
        let root = choose_root_doc(["x/y/deep.sdoc", "beta.sdoc", "alpha.sdoc"]);

        assert_eq!(root, Some("alpha.sdoc"));
    }

    #[test]
    fn test_name_must_match_exactly() {
        let root = choose_root_doc(["myindex.sdoc", "b.sdoc"]);

        assert_eq!(root, Some("b.sdoc"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(choose_root_doc([]), None);
    }
}
