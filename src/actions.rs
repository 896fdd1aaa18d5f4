//! Store Actions
//!
//! Async operations that talk to the server and then update the store.

use leptos::prelude::*;

use crate::api::{self, Api};
use crate::error::ApiError;
use crate::models::CategoryFilter;
use crate::store::{self, AppStateStoreFields, AppStore};

/// Reload the category list from the server. Errors are reported before
/// they are returned.
pub async fn refresh_categories(api: Api, store: AppStore) -> Result<(), ApiError> {
    match api::list_categories(api).await {
        Ok(categories) => {
            log::info!("loaded {} categories", categories.len());
            store::store_set_categories(&store, categories);
            Ok(())
        }
        Err(e) => {
            log::error!("loading categories failed: {}", e);
            api.dialogs().report(&e).await;
            Err(e)
        }
    }
}

/// Switch the list to `filter` and load its first page
pub async fn show_bookmarks(api: Api, store: AppStore, filter: CategoryFilter) {
    let id = filter.id;
    *store.category().write() = CategoryFilter { start: 0, ..filter };
    load_page(api, store, id, 0).await;
}

/// Reload the first page of the current category
pub async fn reload_bookmarks(api: Api, store: AppStore) {
    let filter = store.category().get_untracked();
    show_bookmarks(api, store, filter).await;
}

/// Append the next page of the current category
pub async fn load_more(api: Api, store: AppStore) {
    if store.loading().get_untracked() {
        return;
    }
    let filter = store.category().get_untracked();
    let start = store.bookmarks().with_untracked(|b| b.len());
    store.category().write().start = start;
    load_page(api, store, filter.id, start).await;
}

async fn load_page(api: Api, store: AppStore, category: i64, start: usize) {
    *store.loading().write() = true;
    let result = api::list_bookmarks(api, category, start).await;
    *store.loading().write() = false;
    match result {
        Ok(page) => {
            log::info!("loaded {} bookmarks for category {} from {}", page.len(), category, start);
            // The user may have switched category while this page was in flight
            if store.category().with_untracked(|c| c.id) == category {
                store::store_merge_page(&store, page, start);
            }
        }
        Err(e) => {
            log::error!("loading bookmarks failed: {}", e);
            api.dialogs().report(&e).await;
        }
    }
}
