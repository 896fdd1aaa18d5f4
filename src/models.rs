//! Frontend Models
//!
//! Data structures mirrored from server responses.

use serde::{Deserialize, Serialize};

use crate::config::{ALL_BOOKMARKS_ID, ALL_BOOKMARKS_NAME, UNCATEGORIZED_ID};

/// Category data structure (matches `/category/get`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub count: u32,
}

/// Bookmark data structure (matches `/bookmark/get`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub name: String,
    pub url: String,
    /// Owning category name, empty when uncategorized
    #[serde(default)]
    pub category: String,
}

/// The category currently shown in the bookmark list, plus paging offset
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFilter {
    pub id: i64,
    pub name: String,
    pub start: usize,
}

impl CategoryFilter {
    pub fn all() -> Self {
        Self {
            id: ALL_BOOKMARKS_ID,
            name: ALL_BOOKMARKS_NAME.to_string(),
            start: 0,
        }
    }

    pub fn of(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            start: 0,
        }
    }

    /// A user-created category, as opposed to "All Bookmarks" or "Uncategorized"
    pub fn is_real(&self) -> bool {
        self.id > UNCATEGORIZED_ID
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// Status reply returned by every mutating endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reply {
    pub status: i32,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<i32>,
}

/// What a status reply means for the form that sent the request
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Done,
    Rejected { message: String, code: i32 },
}

impl From<Reply> for Outcome {
    fn from(reply: Reply) -> Self {
        if reply.status == 1 {
            Outcome::Done
        } else {
            Outcome::Rejected {
                message: reply.message.unwrap_or_default(),
                code: reply.error.unwrap_or(0),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_success() {
        let reply: Reply = serde_json::from_str(r#"{"status":1}"#).unwrap();
        assert_eq!(Outcome::from(reply), Outcome::Done);
    }

    #[test]
    fn test_reply_rejection_carries_message_and_code() {
        let reply: Reply = serde_json::from_str(
            r#"{"status":0,"message":"Category news is already existed.","error":1}"#,
        )
        .unwrap();
        assert_eq!(
            Outcome::from(reply),
            Outcome::Rejected {
                message: "Category news is already existed.".into(),
                code: 1,
            }
        );
    }

    #[test]
    fn test_reply_rejection_without_code() {
        let reply: Reply =
            serde_json::from_str(r#"{"status":0,"message":"New category is same as old category."}"#)
                .unwrap();
        match Outcome::from(reply) {
            Outcome::Rejected { code, .. } => assert_eq!(code, 0),
            Outcome::Done => panic!("expected rejection"),
        }
    }

    #[test]
    fn test_category_count_defaults() {
        let category: Category = serde_json::from_str(r#"{"id":3,"name":"news"}"#).unwrap();
        assert_eq!(category.count, 0);
    }

    #[test]
    fn test_filter_real_category() {
        assert!(!CategoryFilter::all().is_real());
        let uncategorized = Category { id: 0, name: "Uncategorized".into(), count: 2 };
        assert!(!CategoryFilter::of(&uncategorized).is_real());
        let news = Category { id: 7, name: "news".into(), count: 2 };
        assert!(CategoryFilter::of(&news).is_real());
    }
}
