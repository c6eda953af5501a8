use crate::catalog::{CatalogEntry, SpriteRef};
use crate::filter::FilterContext;

/// Search over the pokemon list. Blank fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub name: String,
    pub ability: String,
}

impl ListQuery {
    pub fn by_name(name: &str) -> Self {
        ListQuery {
            name: name.to_owned(),
            ability: String::new(),
        }
    }
}

impl FilterContext for ListQuery {
    fn matches_everything(&self) -> bool {
        self.name.matches_everything() && self.ability.matches_everything()
    }
}

/// A sprite is shown only when it has somewhere to load the image from.
pub fn sprite_visible(sprite: &SpriteRef) -> bool {
    sprite.url.as_deref().is_some_and(|url| !url.trim().is_empty())
}

/// Case-insensitive substring match on the pokemon name.
pub fn name_matches(entry: &CatalogEntry, search: &str) -> bool {
    contains_ignore_case(&entry.name, search)
}

pub fn ability_matches(entry: &CatalogEntry, search: &str) -> bool {
    search.matches_everything()
        || entry
            .abilities
            .iter()
            .any(|ability| contains_ignore_case(ability, search))
}

pub fn query_matches(entry: &CatalogEntry, query: &ListQuery) -> bool {
    name_matches(entry, &query.name) && ability_matches(entry, &query.ability)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
