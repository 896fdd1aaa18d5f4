//! Application Context
//!
//! Which view is on screen, provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::TITLE_SUFFIX;

/// Whether a form creates a new record or edits the selected one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Add,
    Edit,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Add => "Add",
            Mode::Edit => "Edit",
        }
    }
}

/// The view filling the main panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    ShowBookmark,
    Category(Mode),
    Bookmark(Mode),
    Setting,
}

impl Content {
    /// Document title for this view; the list view is titled after the category
    pub fn title(&self, category_name: &str) -> String {
        let page = match self {
            Content::ShowBookmark => category_name.to_string(),
            Content::Category(mode) => format!("{} Category", mode.label()),
            Content::Bookmark(mode) => format!("{} Bookmark", mode.label()),
            Content::Setting => "Setting".to_string(),
        };
        format!("{} - {}", page, TITLE_SUFFIX)
    }
}

/// App-wide view state
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current view - read
    pub content: ReadSignal<Content>,
    /// Current view - write
    set_content: WriteSignal<Content>,
}

impl AppContext {
    pub fn new(content: (ReadSignal<Content>, WriteSignal<Content>)) -> Self {
        Self {
            content: content.0,
            set_content: content.1,
        }
    }

    pub fn show(&self, content: Content) {
        self.set_content.set(content);
    }

    /// Return to the bookmark list
    pub fn go_back(&self) {
        self.show(Content::ShowBookmark);
    }
}

/// Set `document.title`
pub fn set_title(title: &str) {
    document().set_title(title);
}
