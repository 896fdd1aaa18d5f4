//! Global Application State Store
//!
//! Client-side cache of server data. Uses Leptos reactive_stores for
//! fine-grained reactivity; the plain functions below do the actual edits
//! so they can be tested without a reactive runtime.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::{PAGE_SIZE, UNCATEGORIZED_ID};
use crate::models::{Bookmark, Category, CategoryFilter};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Categories as last reported by the server
    pub categories: Vec<Category>,
    /// Loaded bookmarks of the current category
    pub bookmarks: Vec<Bookmark>,
    /// Category being shown and paging offset
    pub category: CategoryFilter,
    /// Bookmark opened in the edit form
    pub bookmark: Bookmark,
    /// Whether the last page came back full
    pub has_more: bool,
    /// A bookmark page request is in flight
    pub loading: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Reducers
// ========================

/// Rename category `id` and every cached bookmark pointing at its old name
pub fn rename_category(categories: &mut [Category], bookmarks: &mut [Bookmark], id: i64, name: &str) {
    let Some(category) = categories.iter_mut().find(|c| c.id == id) else {
        return;
    };
    let old = std::mem::replace(&mut category.name, name.to_string());
    bookmarks
        .iter_mut()
        .filter(|b| b.category == old)
        .for_each(|b| b.category = name.to_string());
}

/// Drop category `id`; its bookmarks move to "Uncategorized"
pub fn remove_category(categories: &mut Vec<Category>, id: i64) {
    let Some(index) = categories.iter().position(|c| c.id == id) else {
        return;
    };
    let removed = categories.remove(index);
    if removed.count == 0 {
        return;
    }
    match categories.iter_mut().find(|c| c.id == UNCATEGORIZED_ID) {
        Some(uncategorized) => uncategorized.count += removed.count,
        None => categories.push(Category {
            id: UNCATEGORIZED_ID,
            name: "Uncategorized".to_string(),
            count: removed.count,
        }),
    }
}

/// Drop a bookmark and decrement its category's count
pub fn remove_bookmark(bookmarks: &mut Vec<Bookmark>, categories: &mut Vec<Category>, bookmark: &Bookmark) {
    bookmarks.retain(|b| b.id != bookmark.id);
    let owner = categories.iter_mut().find(|c| {
        if bookmark.category.is_empty() {
            c.id == UNCATEGORIZED_ID
        } else {
            c.name == bookmark.category
        }
    });
    if let Some(owner) = owner {
        owner.count = owner.count.saturating_sub(1);
    }
    // An emptied "Uncategorized" bucket is not reported by the server
    categories.retain(|c| c.id != UNCATEGORIZED_ID || c.count > 0);
}

/// Merge a fetched page into the cache. Returns whether more pages exist,
/// or `None` when a page past the first no longer starts where the cache ends.
pub fn merge_page(bookmarks: &mut Vec<Bookmark>, page: Vec<Bookmark>, start: usize) -> Option<bool> {
    if start != 0 && start != bookmarks.len() {
        return None;
    }
    let full = page.len() >= PAGE_SIZE;
    if start == 0 {
        *bookmarks = page;
    } else {
        bookmarks.extend(page);
    }
    Some(full)
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_categories(store: &AppStore, categories: Vec<Category>) {
    *store.categories().write() = categories;
}

/// Rename the current category everywhere it is cached
pub fn store_rename_category(store: &AppStore, name: &str) {
    let mut current = store.category().get_untracked();
    let mut categories = store.categories().get_untracked();
    let mut bookmarks = store.bookmarks().get_untracked();
    rename_category(&mut categories, &mut bookmarks, current.id, name);
    current.name = name.to_string();
    *store.categories().write() = categories;
    *store.bookmarks().write() = bookmarks;
    *store.category().write() = current;
}

/// Remove a category and show "All Bookmarks" instead
pub fn store_remove_category(store: &AppStore, id: i64) {
    let mut categories = store.categories().get_untracked();
    remove_category(&mut categories, id);
    *store.categories().write() = categories;
    *store.category().write() = CategoryFilter::all();
}

pub fn store_remove_bookmark(store: &AppStore, bookmark: &Bookmark) {
    let mut bookmarks = store.bookmarks().get_untracked();
    let mut categories = store.categories().get_untracked();
    remove_bookmark(&mut bookmarks, &mut categories, bookmark);
    *store.bookmarks().write() = bookmarks;
    *store.categories().write() = categories;
}

pub fn store_merge_page(store: &AppStore, page: Vec<Bookmark>, start: usize) {
    let mut bookmarks = store.bookmarks().get_untracked();
    match merge_page(&mut bookmarks, page, start) {
        Some(more) => {
            *store.bookmarks().write() = bookmarks;
            *store.has_more().write() = more;
        }
        None => log::debug!("dropped bookmark page from {}", start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str, count: u32) -> Category {
        Category { id, name: name.to_string(), count }
    }

    fn bookmark(id: i64, category: &str) -> Bookmark {
        Bookmark {
            id,
            name: format!("Bookmark {}", id),
            url: format!("https://example.com/{}", id),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_rename_category_updates_bookmarks() {
        let mut categories = vec![category(1, "news", 2), category(2, "dev", 1)];
        let mut bookmarks = vec![bookmark(1, "news"), bookmark(2, "dev"), bookmark(3, "news")];

        rename_category(&mut categories, &mut bookmarks, 1, "daily");

        assert_eq!(categories[0].name, "daily");
        assert_eq!(categories[1].name, "dev");
        assert_eq!(bookmarks[0].category, "daily");
        assert_eq!(bookmarks[1].category, "dev");
        assert_eq!(bookmarks[2].category, "daily");
    }

    #[test]
    fn test_rename_unknown_category_is_noop() {
        let mut categories = vec![category(1, "news", 0)];
        let mut bookmarks = vec![bookmark(1, "news")];
        rename_category(&mut categories, &mut bookmarks, 9, "other");
        assert_eq!(categories[0].name, "news");
        assert_eq!(bookmarks[0].category, "news");
    }

    #[test]
    fn test_remove_category_moves_count_to_uncategorized() {
        let mut categories = vec![category(1, "news", 3), category(2, "dev", 1)];
        remove_category(&mut categories, 1);
        assert_eq!(categories, vec![category(2, "dev", 1), category(0, "Uncategorized", 3)]);

        remove_category(&mut categories, 2);
        assert_eq!(categories, vec![category(0, "Uncategorized", 4)]);
    }

    #[test]
    fn test_remove_empty_category() {
        let mut categories = vec![category(1, "news", 0)];
        remove_category(&mut categories, 1);
        assert!(categories.is_empty());
    }

    #[test]
    fn test_remove_bookmark_decrements_owner() {
        let mut categories = vec![category(1, "news", 2), category(0, "Uncategorized", 1)];
        let mut bookmarks = vec![bookmark(1, "news"), bookmark(2, "news"), bookmark(3, "")];

        remove_bookmark(&mut bookmarks, &mut categories, &bookmark(2, "news"));
        assert_eq!(bookmarks.len(), 2);
        assert_eq!(categories[0].count, 1);

        remove_bookmark(&mut bookmarks, &mut categories, &bookmark(3, ""));
        assert_eq!(bookmarks.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(categories, vec![category(1, "news", 1)]);
    }

    #[test]
    fn test_merge_page_replaces_then_appends() {
        let mut bookmarks = vec![bookmark(99, "")];
        let first: Vec<_> = (0..PAGE_SIZE as i64).map(|i| bookmark(i, "")).collect();
        assert_eq!(merge_page(&mut bookmarks, first, 0), Some(true));
        assert_eq!(bookmarks.len(), PAGE_SIZE);
        assert!(bookmarks.iter().all(|b| b.id != 99));

        let second = vec![bookmark(100, ""), bookmark(101, "")];
        assert_eq!(merge_page(&mut bookmarks, second, PAGE_SIZE), Some(false));
        assert_eq!(bookmarks.len(), PAGE_SIZE + 2);
        assert_eq!(bookmarks.last().map(|b| b.id), Some(101));
    }

    #[test]
    fn test_merge_page_drops_repeated_offset() {
        let mut bookmarks: Vec<_> = (0..PAGE_SIZE as i64).map(|i| bookmark(i, "")).collect();
        let page = || (100..100 + PAGE_SIZE as i64).map(|i| bookmark(i, "")).collect::<Vec<_>>();

        // Two "More" requests both asked for the page at PAGE_SIZE
        assert_eq!(merge_page(&mut bookmarks, page(), PAGE_SIZE), Some(true));
        assert_eq!(merge_page(&mut bookmarks, page(), PAGE_SIZE), None);

        assert_eq!(bookmarks.len(), 2 * PAGE_SIZE);
        let mut ids: Vec<_> = bookmarks.iter().map(|b| b.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 2 * PAGE_SIZE);
    }

    #[test]
    fn test_first_page_always_replaces() {
        let mut bookmarks = vec![bookmark(1, ""), bookmark(2, "")];
        assert_eq!(merge_page(&mut bookmarks, vec![bookmark(3, "")], 0), Some(false));
        assert_eq!(bookmarks, vec![bookmark(3, "")]);
    }
}
