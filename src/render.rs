use askama::Template;

use crate::{
    catalog::{CatalogEntry, SpriteRef},
    predicate::sprite_visible,
    template::{Notice, PokemonHeader, PokemonList, SpriteImage, SpriteList},
};

/// A part of the page whose html is replaced as a whole on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayRegion {
    contents: String,
}

impl DisplayRegion {
    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn clear(&mut self) {
        self.contents.clear();
    }

    pub fn replace_with(&mut self, html: String) {
        self.contents = html;
    }
}

/// The detail view: the pokemon name above its sprites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub header: DisplayRegion,
    pub content: DisplayRegion,
}

/// One list row per entry name.
pub fn render_list(region: &mut DisplayRegion, entries: &[&CatalogEntry]) -> Result<(), askama::Error> {
    let html = PokemonList { entries }.render()?;
    region.replace_with(html);
    Ok(())
}

pub fn render_header(region: &mut DisplayRegion, name: &str) -> Result<(), askama::Error> {
    let html = PokemonHeader { name }.render()?;
    region.replace_with(html);
    Ok(())
}

/// One image per visible sprite. Sprites without a url are left out of the list entirely.
pub fn render_sprites(region: &mut DisplayRegion, sprites: &[&SpriteRef]) -> Result<(), askama::Error> {
    let sprites: Vec<SpriteImage<'_>> = sprites
        .iter()
        .filter(|sprite| sprite_visible(sprite))
        .filter_map(|sprite| {
            sprite.url.as_deref().map(|url| SpriteImage {
                title: &sprite.title,
                url,
            })
        })
        .collect();

    let html = SpriteList { sprites }.render()?;
    region.replace_with(html);
    Ok(())
}

pub fn render_notice(region: &mut DisplayRegion, notice: &Notice<'_>) -> Result<(), askama::Error> {
    let html = notice.render()?;
    region.replace_with(html);
    Ok(())
}
