//! Navigation category records: the site's menu taxonomy.

use serde::{Deserialize, Serialize};

use crate::core::event_record::{first_non_empty, null_as_default};

/// A navigation category as stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationCategory {
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    pub header_left: Option<String>,
    pub header_right: Option<String>,
    #[serde(rename = "subHeader_left")]
    pub sub_header_left: Option<String>,
    #[serde(rename = "subHeader_right")]
    pub sub_header_right: Option<String>,
    pub title_left: Option<String>,
    pub title_right: Option<String>,
    pub description_left: Option<String>,
    pub description_right: Option<String>,

    #[serde(rename = "isShowInNavbar", default, deserialize_with = "null_as_default")]
    pub show_in_navbar: bool,
    #[serde(rename = "isShowInWorksPage", default, deserialize_with = "null_as_default")]
    pub show_in_works_page: bool,
    #[serde(rename = "isShowAllLocations", default, deserialize_with = "null_as_default")]
    pub show_all_locations: bool,

    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl NavigationCategory {
    /// Heading shown above the category's events: left header, else right.
    pub fn display_header(&self) -> &str {
        first_non_empty(self.header_left.as_deref(), self.header_right.as_deref())
            .unwrap_or(self.name.as_str())
    }
}

/// Categories that belong in the navigation menu, in catalog order.
pub fn navbar_categories(categories: &[NavigationCategory]) -> Vec<&NavigationCategory> {
    categories.iter().filter(|c| c.show_in_navbar).collect()
}

/// Find a category by its menu name, ignoring case and surrounding spaces.
pub fn find_by_name<'a>(
    categories: &'a [NavigationCategory],
    name: &str,
) -> Option<&'a NavigationCategory> {
    let wanted = name.trim().to_lowercase();
    categories
        .iter()
        .find(|c| c.name.trim().to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: u64, name: &str, navbar: bool) -> NavigationCategory {
        NavigationCategory {
            id: Some(id),
            name: name.into(),
            show_in_navbar: navbar,
            ..Default::default()
        }
    }

    #[test]
    fn test_navbar_filter_keeps_order() {
        let cats = vec![cat(1, "Music", true), cat(2, "Hidden", false), cat(3, "Art", true)];
        let names: Vec<&str> = navbar_categories(&cats).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Music", "Art"]);
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let cats = vec![cat(1, "Visual Arts", true)];
        assert_eq!(find_by_name(&cats, "  visual arts ").and_then(|c| c.id), Some(1));
        assert!(find_by_name(&cats, "music").is_none());
    }

    #[test]
    fn test_deserialize_flags() {
        let json = r#"{"id": 4, "name": "Poetry", "isShowInNavbar": true, "subHeader_left": "Verse"}"#;
        let c: NavigationCategory = serde_json::from_str(json).unwrap();
        assert!(c.show_in_navbar);
        assert!(!c.show_in_works_page);
        assert_eq!(c.sub_header_left.as_deref(), Some("Verse"));
        assert_eq!(c.display_header(), "Poetry");
    }
}
