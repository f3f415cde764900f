use crate::client::CatalogClient;
use crate::errors::ClientError;
use crate::services::presentation::{
    filter_by_search, group_by_category, page_count, paginate, render, GroupedItems, PAGE_SIZE,
};
use crate::types::dto::catalog::CatalogView;
use crate::types::dto::items::ItemRecord;
use crate::types::internal::AttributeBounds;

/// Handle for one in-flight query.
///
/// Each submission gets a strictly increasing sequence number; only the
/// completion carrying the latest number may touch session state, so a slow
/// response can never clobber the result of a newer query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket {
    seq: u64,
}

/// What the rendered page should show for the session right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// A query is in flight
    Loading,
    /// The last query failed; the message is user-facing
    Failed(String),
    /// The last query (or the filter over it) matched nothing
    NoResults,
    /// Items are available to render
    Ready,
}

/// Ephemeral state for one catalog browsing session.
///
/// Holds the attribute inputs, the search term, the current page and the
/// grouped result of the last executed query. All of it lives only as long
/// as the session; nothing here is persistent.
pub struct BrowseSession {
    client: CatalogClient,
    pub bounds: AttributeBounds,
    search_term: String,
    page: usize,
    loading: bool,
    error: Option<String>,
    groups: GroupedItems,
    next_seq: u64,
    latest_seq: u64,
}

impl BrowseSession {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            bounds: AttributeBounds::default(),
            search_term: String::new(),
            page: 0,
            loading: false,
            error: None,
            groups: GroupedItems::new(),
            next_seq: 0,
            latest_seq: 0,
        }
    }

    /// Run one query with the session's current bounds and apply the outcome
    pub async fn submit(&mut self) {
        let ticket = self.begin_query();
        let bounds = self.bounds.clone();
        let result = self.client.fetch_items(&bounds).await;
        match result {
            Ok(items) => self.apply_success(ticket, items),
            Err(err) => self.apply_failure(ticket, &err),
        }
    }

    /// Start a new query: supersede any in-flight one, reset page and error,
    /// raise the loading flag
    pub fn begin_query(&mut self) -> QueryTicket {
        self.next_seq += 1;
        self.latest_seq = self.next_seq;
        self.loading = true;
        self.error = None;
        self.page = 0;
        QueryTicket {
            seq: self.latest_seq,
        }
    }

    /// Apply a successful result. A stale ticket is discarded unseen.
    pub fn apply_success(&mut self, ticket: QueryTicket, items: Vec<ItemRecord>) {
        if self.is_stale(ticket) {
            tracing::debug!("Discarding superseded query result");
            return;
        }
        self.groups = group_by_category(items);
        self.loading = false;
    }

    /// Apply a failed result. A stale ticket is discarded unseen; a current
    /// one records the user-facing message and clears the loading flag.
    pub fn apply_failure(&mut self, ticket: QueryTicket, err: &ClientError) {
        if self.is_stale(ticket) {
            tracing::debug!("Discarding superseded query failure");
            return;
        }
        self.error = Some(err.display_message());
        self.loading = false;
    }

    fn is_stale(&self, ticket: QueryTicket) -> bool {
        ticket.seq != self.latest_seq
    }

    /// Update the search term; the view re-derives without any I/O
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Jump to a page of the pagination control
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Derive the rendering-ready view from the current inputs
    pub fn view(&self) -> CatalogView {
        let filtered = filter_by_search(&self.groups, &self.search_term);
        let page_count = page_count(&filtered, PAGE_SIZE);
        let paged = paginate(&filtered, self.page, PAGE_SIZE);
        CatalogView {
            sections: render(&paged),
            page_count,
        }
    }

    /// What the page should currently display
    pub fn status(&self) -> SessionStatus {
        if self.loading {
            return SessionStatus::Loading;
        }
        if let Some(message) = &self.error {
            return SessionStatus::Failed(message.clone());
        }
        if self.view().is_empty() {
            return SessionStatus::NoResults;
        }
        SessionStatus::Ready
    }

}
