use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    catalog::{CatalogEntry, CatalogSource},
    error::CatalogError,
    filter::filter_collection,
    predicate::{query_matches, sprite_visible, ListQuery},
    render::{render_header, render_list, render_notice, render_sprites, DisplayRegion, Page},
    template::{Notice, NoticeLevel},
};

const LOADING_MESSAGE: &str = "Loading pokemon, please wait...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// What a single trigger ended up doing.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded { shown: usize },
    Failed(CatalogError),
    /// A newer trigger took over before this one finished; nothing was shown.
    Superseded,
}

/// Something a flow draws into.
trait View {
    fn content(&mut self) -> &mut DisplayRegion;

    /// Clears everything except the content region.
    fn clear_extras(&mut self) {}
}

impl View for DisplayRegion {
    fn content(&mut self) -> &mut DisplayRegion {
        self
    }
}

impl View for Page {
    fn content(&mut self) -> &mut DisplayRegion {
        &mut self.content
    }

    fn clear_extras(&mut self) {
        self.header.clear();
    }
}

/// One flow's session slot, its latest filter and the view it draws.
struct Flow<T, V, Q = ()> {
    /// Identifies the latest fetch. Only that fetch may store and render its result.
    ticket: u64,
    state: LoadState,
    session: Option<T>,
    query: Q,
    view: V,
}

impl<T, V: View, Q: Default> Flow<T, V, Q> {
    fn new(view: V) -> Self {
        Flow {
            ticket: 0,
            state: LoadState::Idle,
            session: None,
            query: Q::default(),
            view,
        }
    }

    /// Starts a new fetch and invalidates whatever fetch was in flight.
    fn begin(&mut self) -> u64 {
        self.ticket += 1;
        self.state = LoadState::Loading;
        show_loading(self.view.content());
        self.ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.ticket == ticket
    }
}

type ListFlow = Flow<Vec<CatalogEntry>, DisplayRegion, ListQuery>;

/// Drives fetch, filter and render for the list and detail views.
///
/// A load that arrives while another is fetching supersedes it: the older
/// result is dropped when it comes back, so stale data never overwrites fresh data.
/// A search only re-filters; a fetch still in flight keeps going and its result
/// is shown with the latest search.
pub struct Controller<S> {
    source: S,
    list: Mutex<ListFlow>,
    detail: Mutex<Flow<CatalogEntry, Page>>,
}

impl<S: CatalogSource> Controller<S> {
    pub fn new(source: S) -> Self {
        Controller {
            source,
            list: Mutex::new(Flow::new(DisplayRegion::default())),
            detail: Mutex::new(Flow::new(Page::default())),
        }
    }

    pub async fn load_list(&self, search: &str) -> LoadOutcome {
        self.load_list_query(&ListQuery::by_name(search)).await
    }

    /// Fetches the whole list again and shows the entries matching `query`.
    pub async fn load_list_query(&self, query: &ListQuery) -> LoadOutcome {
        let ticket = {
            let mut flow = self.list.lock().await;
            flow.query = query.clone();
            flow.begin()
        };
        info!("Loading pokemon list (request {})", ticket);

        let fetched = self.source.fetch_list().await;

        let mut flow = self.list.lock().await;
        if !flow.is_current(ticket) {
            debug!("Discarding pokemon list from superseded request {}", ticket);
            return LoadOutcome::Superseded;
        }

        match fetched {
            Ok(entries) => {
                flow.session = Some(entries);
                flow.state = LoadState::Loaded;
                show_list(&mut flow)
            }
            Err(e) => fail(&mut *flow, e),
        }
    }

    /// Filters the list fetched last without going back to the catalog.
    pub async fn search_list(&self, query: &ListQuery) -> LoadOutcome {
        {
            let mut flow = self.list.lock().await;
            if flow.session.is_some() {
                flow.query = query.clone();
                if flow.state == LoadState::Loading {
                    debug!("Pokemon list is reloading, its result will use the new search");
                }
                return show_list(&mut flow);
            }
        }

        debug!("No pokemon list loaded yet, fetching it first");
        self.load_list_query(query).await
    }

    /// Looks up one pokemon and shows its name and sprites.
    pub async fn load_detail(&self, id: &str) -> LoadOutcome {
        let ticket = {
            let mut flow = self.detail.lock().await;
            flow.view.header.clear();
            flow.begin()
        };
        info!("Loading pokemon {:?} (request {})", id, ticket);

        let fetched = self.source.fetch_detail(id).await;

        let mut flow = self.detail.lock().await;
        if !flow.is_current(ticket) {
            debug!("Discarding pokemon {:?} from superseded request {}", id, ticket);
            return LoadOutcome::Superseded;
        }

        let entry = match fetched {
            Ok(v) => v,
            Err(e) => return fail(&mut *flow, e),
        };

        let sprites = filter_collection(&entry.sprites, &(), |sprite, _| sprite_visible(sprite));
        let shown = sprites.len();

        let page = &mut flow.view;
        let rendered = render_header(&mut page.header, &entry.name)
            .and_then(|_| render_sprites(&mut page.content, &sprites));

        match rendered {
            Ok(()) => {
                flow.session = Some(entry);
                flow.state = LoadState::Loaded;
                LoadOutcome::Loaded { shown }
            }
            Err(e) => fail(&mut *flow, e.into()),
        }
    }

    pub async fn list_region(&self) -> DisplayRegion {
        self.list.lock().await.view.clone()
    }

    pub async fn detail_page(&self) -> Page {
        self.detail.lock().await.view.clone()
    }

    pub async fn list_state(&self) -> LoadState {
        self.list.lock().await.state
    }

    pub async fn detail_state(&self) -> LoadState {
        self.detail.lock().await.state
    }
}

/// Renders the stored list through the current query. The flow state is left as is,
/// so a search during a reload keeps the list marked as loading.
fn show_list(flow: &mut ListFlow) -> LoadOutcome {
    let Flow {
        session,
        query,
        view,
        ..
    } = &mut *flow;
    let entries: &[CatalogEntry] = session.as_deref().unwrap_or_default();
    let visible = filter_collection(entries, &*query, query_matches);
    let shown = visible.len();

    match render_list(view, &visible) {
        Ok(()) => {
            debug!("Showing {} of {} pokemon", shown, entries.len());
            LoadOutcome::Loaded { shown }
        }
        Err(e) => fail(flow, e.into()),
    }
}

fn show_loading(region: &mut DisplayRegion) {
    let notice = Notice {
        title: "Loading",
        message: LOADING_MESSAGE,
        level: NoticeLevel::Info,
    };
    if render_notice(region, &notice).is_err() {
        region.replace_with(LOADING_MESSAGE.to_owned());
    }
}

/// Replaces everything the flow shows with a failure notice, then goes back to idle.
fn fail<T, V: View, Q>(flow: &mut Flow<T, V, Q>, error: CatalogError) -> LoadOutcome {
    warn!("Could not load pokemon: {}", error);
    flow.state = LoadState::Failed;

    let message = failure_message(&error);
    let notice = Notice {
        title: "Error",
        message: &message,
        level: NoticeLevel::Error,
    };
    flow.view.clear_extras();
    let content = flow.view.content();
    if render_notice(content, &notice).is_err() {
        content.replace_with("Could not display pokemon.".to_owned());
    }

    flow.state = LoadState::Idle;
    LoadOutcome::Failed(error)
}

/// User-facing text for an error. Nothing else in the crate shows errors to users.
pub fn failure_message(error: &CatalogError) -> String {
    match error {
        CatalogError::Network(_) => {
            "Could not reach the pokemon catalog, please try again.".to_owned()
        }
        CatalogError::Schema(_) => {
            "The pokemon catalog sent a response we could not read.".to_owned()
        }
        CatalogError::NotFound(what) => format!("No pokemon found for {what}."),
        CatalogError::Render(_) => "Could not display pokemon.".to_owned(),
    }
}
