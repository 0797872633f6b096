use serde::Deserialize;

/// Directory the league logos are served from.
pub const ASSET_ROOT: &str = "/assets/img";

/// One entry of the backend league catalog.
///
/// Two descriptors are equal when their slugs are equal; the display name is
/// presentation only.
#[derive(Deserialize, Clone, Debug, Eq)]
pub struct League {
    pub slug: String,
    pub name: String,
}

impl League {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }

    pub fn image_url(&self) -> String {
        format!("{ASSET_ROOT}/{}.png", self.slug)
    }
}

impl PartialEq for League {
    fn eq(&self, other: &Self) -> bool {
        self.slug == other.slug
    }
}

impl std::hash::Hash for League {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.slug.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_follows_asset_convention() {
        let league = League::new("lcs", "LCS");
        assert_eq!(league.image_url(), "/assets/img/lcs.png");
    }

    #[test]
    fn test_equality_ignores_name() {
        assert_eq!(League::new("lec", "LEC"), League::new("lec", "League of Legends EMEA"));
        assert_ne!(League::new("lec", "LEC"), League::new("lck", "LEC"));
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let league: League =
            serde_json::from_str(r#"{"slug":"lck","name":"LCK","region":"KR"}"#).unwrap();
        assert_eq!(league.slug, "lck");
        assert_eq!(league.name, "LCK");
    }
}
