use serde::Deserialize;

/// One creature as the catalog describes it.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub abilities: Vec<String>,
    // The detail endpoint calls this array `images`.
    #[serde(default, alias = "images")]
    pub sprites: Vec<SpriteRef>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SpriteRef {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of the list endpoint.
#[derive(Deserialize, Debug)]
pub struct ListResponse {
    pub results: Vec<CatalogEntry>,
}

/// Body of the detail endpoint. A missing or null `result` means the id is unknown.
#[derive(Deserialize, Debug)]
pub struct DetailResponse {
    #[serde(default)]
    pub result: Option<CatalogEntry>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_list_response_defaults_missing_fields() {
        let list: ListResponse =
            serde_json::from_str(r#"{"results":[{"name":"pikachu"}]}"#).unwrap();

        assert_eq!(list.results.len(), 1);
        assert_eq!(list.results[0].name, "pikachu");
        assert!(list.results[0].abilities.is_empty());
        assert!(list.results[0].sprites.is_empty());
    }

    #[test]
    fn test_detail_accepts_images_and_sprites() {
        let images: DetailResponse = serde_json::from_str(
            r#"{"result":{"name":"pikachu","images":[{"title":"front","url":"a.png"},{"title":"back","url":null}]}}"#,
        )
        .unwrap();
        let sprites: DetailResponse = serde_json::from_str(
            r#"{"result":{"name":"pikachu","sprites":[{"title":"front","url":"a.png"},{"title":"back"}]}}"#,
        )
        .unwrap();

        assert_eq!(images.result, sprites.result);
        let entry = images.result.unwrap();
        assert_eq!(entry.sprites[0].url.as_deref(), Some("a.png"));
        assert_eq!(entry.sprites[1].url, None);
    }

    #[test]
    fn test_detail_null_result() {
        let detail: DetailResponse = serde_json::from_str(r#"{"result":null}"#).unwrap();
        assert!(detail.result.is_none());

        let detail: DetailResponse = serde_json::from_str("{}").unwrap();
        assert!(detail.result.is_none());
    }

    #[test]
    fn test_list_without_results_is_rejected() {
        assert!(serde_json::from_str::<ListResponse>(r#"{"result":[]}"#).is_err());
        assert!(serde_json::from_str::<ListResponse>(r#"{"results":[{"abilities":[]}]}"#).is_err());
    }
}
