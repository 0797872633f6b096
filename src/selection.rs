use std::collections::BTreeSet;

/// The set of league slugs the visitor has picked.
///
/// Backed by an ordered set, so iteration is already in canonical
/// (lexicographic ascending) order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    slugs: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `slug` and returns whether it is now selected.
    ///
    /// The slug is not checked against the catalog; callers only toggle slugs
    /// of tiles they rendered.
    pub fn toggle(&mut self, slug: &str) -> bool {
        if self.slugs.remove(slug) {
            false
        } else {
            self.slugs.insert(slug.to_owned());
            true
        }
    }

    pub fn is_selected(&self, slug: &str) -> bool {
        self.slugs.contains(slug)
    }

    /// Selected slugs in canonical order.
    pub fn selected(&self) -> Vec<&str> {
        self.slugs.iter().map(String::as_str).collect()
    }

    pub fn count(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selection_is_empty() {
        let selection = Selection::new();
        assert!(selection.is_empty());
        assert_eq!(selection.count(), 0);
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn test_toggle_inserts_then_removes() {
        let mut selection = Selection::new();
        assert!(selection.toggle("lec"));
        assert!(selection.is_selected("lec"));
        assert!(!selection.toggle("lec"));
        assert!(!selection.is_selected("lec"));
    }

    #[test]
    fn test_double_toggle_restores_prior_state() {
        let mut selection = Selection::new();
        selection.toggle("lcs");
        selection.toggle("lck");
        let before = selection.clone();

        selection.toggle("lec");
        selection.toggle("lec");
        assert_eq!(selection, before);

        selection.toggle("lcs");
        selection.toggle("lcs");
        assert_eq!(selection, before);
    }

    #[test]
    fn test_membership_follows_toggle_parity() {
        for toggles in 0..7 {
            let mut selection = Selection::new();
            for _ in 0..toggles {
                selection.toggle("msi");
            }
            assert_eq!(
                selection.is_selected("msi"),
                toggles % 2 == 1,
                "after {} toggles",
                toggles
            );
        }
    }

    #[test]
    fn test_selected_is_sorted_regardless_of_click_order() {
        let mut selection = Selection::new();
        for slug in ["worlds", "lck", "lcs", "lec"] {
            selection.toggle(slug);
        }
        assert_eq!(selection.selected(), vec!["lck", "lcs", "lec", "worlds"]);
        assert_eq!(selection.count(), 4);
    }

    #[test]
    fn test_toggle_other_slug_leaves_membership_alone() {
        let mut selection = Selection::new();
        selection.toggle("lcs");
        selection.toggle("lec");
        selection.toggle("lec");
        assert!(selection.is_selected("lcs"));
        assert_eq!(selection.count(), 1);
    }
}
