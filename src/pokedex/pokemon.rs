use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::Html,
};
use pokedex::{
    catalog::CatalogSource,
    controller::{Controller, LoadOutcome},
    error::CatalogError,
    headers::is_htmx_request,
    predicate::ListQuery,
    template::{DetailFragment, Index},
    utils::empty_string_as_none,
};
use serde::Deserialize;
use tracing::error;

type Shared<S> = State<Arc<Controller<S>>>;

#[derive(Deserialize)]
pub(super) struct ListParams {
    // Handles empty or non existing query parameters.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    ability: Option<String>,
}

impl ListParams {
    fn into_query(self) -> ListQuery {
        ListQuery {
            name: self.name.unwrap_or_default(),
            ability: self.ability.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
pub(super) struct DetailParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
}

pub(super) async fn index<S: CatalogSource>(State(controller): Shared<S>) -> (StatusCode, Html<String>) {
    full_page(&controller, StatusCode::OK).await
}

pub(super) async fn pokemon_list<S: CatalogSource>(
    State(controller): Shared<S>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> (StatusCode, Html<String>) {
    let outcome: LoadOutcome = controller.load_list_query(&params.into_query()).await;
    list_response(&controller, &headers, &outcome).await
}

pub(super) async fn pokemon_search<S: CatalogSource>(
    State(controller): Shared<S>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> (StatusCode, Html<String>) {
    let outcome: LoadOutcome = controller.search_list(&params.into_query()).await;
    list_response(&controller, &headers, &outcome).await
}

pub(super) async fn pokemon_detail<S: CatalogSource>(
    State(controller): Shared<S>,
    headers: HeaderMap,
    Query(params): Query<DetailParams>,
) -> (StatusCode, Html<String>) {
    let id: String = params.id.unwrap_or_default();
    let outcome: LoadOutcome = controller.load_detail(&id).await;

    let status: StatusCode = status_for(&outcome);
    if status == StatusCode::NO_CONTENT || !is_htmx_request(&headers) {
        return respond_without_fragment(&controller, status).await;
    }

    let page = controller.detail_page().await;
    let fragment = DetailFragment {
        header: page.header.contents(),
        content: page.content.contents(),
    };
    match fragment.render() {
        Ok(html) => (status, Html(html)),
        Err(e) => render_failed(e),
    }
}

async fn list_response<S: CatalogSource>(
    controller: &Controller<S>,
    headers: &HeaderMap,
    outcome: &LoadOutcome,
) -> (StatusCode, Html<String>) {
    let status: StatusCode = status_for(outcome);
    if status == StatusCode::NO_CONTENT || !is_htmx_request(headers) {
        return respond_without_fragment(controller, status).await;
    }

    let region = controller.list_region().await;
    (status, Html(region.contents().to_owned()))
}

/// Superseded requests get an empty body, plain browser requests the whole page.
async fn respond_without_fragment<S: CatalogSource>(
    controller: &Controller<S>,
    status: StatusCode,
) -> (StatusCode, Html<String>) {
    if status == StatusCode::NO_CONTENT {
        return (status, Html(String::new()));
    }
    full_page(controller, status).await
}

async fn full_page<S: CatalogSource>(
    controller: &Controller<S>,
    status: StatusCode,
) -> (StatusCode, Html<String>) {
    let list = controller.list_region().await;
    let detail = controller.detail_page().await;

    let page = Index {
        list: list.contents(),
        header: detail.header.contents(),
        detail: detail.content.contents(),
    };
    match page.render() {
        Ok(html) => (status, Html(html)),
        Err(e) => render_failed(e),
    }
}

fn status_for(outcome: &LoadOutcome) -> StatusCode {
    match outcome {
        LoadOutcome::Loaded { .. } => StatusCode::OK,
        LoadOutcome::Superseded => StatusCode::NO_CONTENT,
        LoadOutcome::Failed(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND,
        LoadOutcome::Failed(CatalogError::Render(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        LoadOutcome::Failed(_) => StatusCode::BAD_GATEWAY,
    }
}

fn render_failed(e: askama::Error) -> (StatusCode, Html<String>) {
    error!("Cannot render page: {:?}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html("Could not display pokemon.".to_owned()),
    )
}
