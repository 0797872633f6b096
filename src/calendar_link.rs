use crate::selection::Selection;

pub const EMPTY_PROMPT: &str = "Select some leagues!";
pub const EMPTY_HREF: &str = "#";
pub const QUERY_ENDPOINT: &str = "/api/query-leagues";

/// Text and target of the calendar link for a selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarLink {
    pub text: String,
    pub href: String,
}

impl CalendarLink {
    /// Slugs are URL-safe by backend contract and are not escaped.
    pub fn derive(selection: &Selection) -> Self {
        if selection.is_empty() {
            return Self {
                text: EMPTY_PROMPT.to_string(),
                href: EMPTY_HREF.to_string(),
            };
        }

        let slugs = selection.selected();
        Self {
            text: slugs.join(", "),
            href: format!("{QUERY_ENDPOINT}?leagues={}", slugs.join(",")),
        }
    }

    /// False for the placeholder link shown before anything is picked.
    pub fn is_actionable(&self) -> bool {
        self.href != EMPTY_HREF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_of(slugs: &[&str]) -> Selection {
        let mut selection = Selection::new();
        for slug in slugs {
            selection.toggle(slug);
        }
        selection
    }

    #[test]
    fn test_empty_selection_gives_placeholder() {
        let link = CalendarLink::derive(&Selection::new());
        assert_eq!(link.text, "Select some leagues!");
        assert_eq!(link.href, "#");
        assert!(!link.is_actionable());
    }

    #[test]
    fn test_single_league() {
        let link = CalendarLink::derive(&selection_of(&["lec"]));
        assert_eq!(link.text, "lec");
        assert_eq!(link.href, "/api/query-leagues?leagues=lec");
        assert!(link.is_actionable());
    }

    #[test]
    fn test_click_order_does_not_change_link() {
        let orders: [&[&str]; 3] = [
            &["lcs", "lec", "lck"],
            &["lck", "lcs", "lec"],
            &["lec", "lck", "lcs"],
        ];
        let links: Vec<_> = orders
            .iter()
            .map(|order| CalendarLink::derive(&selection_of(order)))
            .collect();

        assert!(links.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(links[0].text, "lck, lcs, lec");
        assert_eq!(links[0].href, "/api/query-leagues?leagues=lck,lcs,lec");
    }

    #[test]
    fn test_href_suffix_is_strictly_ascending() {
        let link = CalendarLink::derive(&selection_of(&["worlds", "cblol", "lpl", "lck", "msi"]));
        let suffix = link
            .href
            .strip_prefix("/api/query-leagues?leagues=")
            .expect("query prefix");
        let slugs: Vec<&str> = suffix.split(',').collect();
        assert_eq!(slugs.len(), 5);
        assert!(slugs.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_deselecting_everything_returns_to_placeholder() {
        let mut selection = selection_of(&["lcs"]);
        selection.toggle("lcs");
        assert_eq!(CalendarLink::derive(&selection).href, "#");
    }
}
