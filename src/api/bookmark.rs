//! Bookmark Endpoints

use serde::Serialize;

use super::{Api, Endpoint};
use crate::error::ApiError;
use crate::models::{Bookmark, Outcome};

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize, PartialEq)]
pub struct BookmarkBody<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub category: &'a str,
}

#[derive(Serialize)]
struct PageArgs {
    category: i64,
    start: usize,
}

// ========================
// Calls
// ========================

/// One page of bookmarks for a category (`-1` lists all)
pub async fn list_bookmarks(api: Api, category: i64, start: usize) -> Result<Vec<Bookmark>, ApiError> {
    api.fetch(Endpoint::BookmarkList, Some(&PageArgs { category, start })).await
}

pub async fn add_bookmark(api: Api, body: &BookmarkBody<'_>) -> Result<Outcome, ApiError> {
    api.submit(Endpoint::BookmarkAdd, Some(body)).await
}

pub async fn edit_bookmark(api: Api, id: i64, body: &BookmarkBody<'_>) -> Result<Outcome, ApiError> {
    api.submit(Endpoint::BookmarkEdit(id), Some(body)).await
}

pub async fn delete_bookmark(api: Api, id: i64) -> Result<(), ApiError> {
    api.send(Endpoint::BookmarkDelete(id), None::<&()>).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmark_body_json() {
        let body = BookmarkBody { name: "Rust", url: "https://rust-lang.org", category: "" };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"name":"Rust","url":"https://rust-lang.org","category":""}"#
        );
    }

    #[test]
    fn test_page_args_json() {
        let args = PageArgs { category: -1, start: 30 };
        assert_eq!(serde_json::to_string(&args).unwrap(), r#"{"category":-1,"start":30}"#);
    }
}
