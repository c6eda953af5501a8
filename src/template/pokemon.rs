use askama::Template;

use crate::catalog::CatalogEntry;

#[derive(Template)]
#[template(path = "pokemon_list.html")]
pub struct PokemonList<'a> {
    pub entries: &'a [&'a CatalogEntry],
}

#[derive(Template)]
#[template(path = "pokemon_header.html")]
pub struct PokemonHeader<'a> {
    pub name: &'a str,
}

#[derive(Template)]
#[template(path = "sprite_list.html")]
pub struct SpriteList<'a> {
    pub sprites: Vec<SpriteImage<'a>>,
}

/// A sprite that is known to have an image url.
pub struct SpriteImage<'a> {
    pub title: &'a str,
    pub url: &'a str,
}
