//! Modal Dialogs
//!
//! Awaitable alert and confirmation dialogs. A `Dialogs` handle is provided
//! via context; `DialogHost` renders whichever dialog is active.

use std::future::Future;

use futures::channel::oneshot;
use leptos::prelude::*;

use crate::error::ApiError;

/// Icon shown at the top of a dialog
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
    Question,
}

impl Icon {
    pub fn class(&self) -> &'static str {
        match self {
            Icon::Success => "swal-icon swal-icon-success",
            Icon::Error => "swal-icon swal-icon-error",
            Icon::Warning => "swal-icon swal-icon-warning",
            Icon::Info => "swal-icon swal-icon-info",
            Icon::Question => "swal-icon swal-icon-question",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Success => "✓",
            Icon::Error => "✕",
            Icon::Warning => "!",
            Icon::Info => "i",
            Icon::Question => "?",
        }
    }
}

/// Everything needed to render one dialog
#[derive(Debug, Clone, PartialEq)]
pub struct DialogSpec {
    pub title: String,
    pub text: String,
    pub icon: Icon,
    pub confirm_label: &'static str,
    pub confirm_class: &'static str,
    /// `Some(label)` adds a cancel button, which also takes focus
    pub cancel_label: Option<&'static str>,
}

impl DialogSpec {
    pub fn alert(title: &str, text: &str, icon: Icon) -> Self {
        Self {
            title: title.to_string(),
            text: text.to_string(),
            icon,
            confirm_label: "OK",
            confirm_class: "swal btn btn-primary",
            cancel_label: None,
        }
    }

    /// Permanent-deletion prompt for a `kind` such as "bookmark"
    pub fn confirm_delete(kind: &str) -> Self {
        Self {
            title: "Are you sure?".to_string(),
            text: format!("This {} will be deleted permanently.", kind),
            icon: Icon::Warning,
            confirm_label: "Delete",
            confirm_class: "swal btn btn-danger",
            cancel_label: Some("Cancel"),
        }
    }
}

/// Handle for opening dialogs from event handlers and async tasks
#[derive(Clone, Copy)]
pub struct Dialogs {
    active: RwSignal<Option<DialogSpec>>,
    pending: StoredValue<Option<oneshot::Sender<bool>>>,
}

impl Dialogs {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
            pending: StoredValue::new(None),
        }
    }

    /// Show an alert and wait for it to be dismissed
    pub async fn fire(self, title: &str, text: &str, icon: Icon) {
        self.open(DialogSpec::alert(title, text, icon)).await;
    }

    /// Shorthand for an "Error" alert
    pub async fn error(self, text: &str) {
        self.fire("Error", text, Icon::Error).await;
    }

    /// Show a failed request, unless the request wrapper already did
    pub async fn report(self, err: &ApiError) {
        if !err.is_surfaced() {
            self.error(&err.to_string()).await;
        }
    }

    /// Ask before deleting a `kind`; true only when the user chose Delete
    pub async fn confirm(self, kind: &str) -> bool {
        self.open(DialogSpec::confirm_delete(kind)).await
    }

    /// Run `action` only after the user confirms deleting a `kind`
    pub async fn guard_delete<F: Future>(self, kind: &str, action: F) -> Option<F::Output> {
        if self.confirm(kind).await {
            Some(action.await)
        } else {
            None
        }
    }

    async fn open(self, spec: DialogSpec) -> bool {
        let (tx, rx) = oneshot::channel();
        let mut previous = None;
        self.pending.update_value(|slot| previous = slot.replace(tx));
        // A dialog still waiting on the user counts as dismissed
        if let Some(previous) = previous {
            let _ = previous.send(false);
        }
        self.active.set(Some(spec));
        rx.await.unwrap_or(false)
    }

    /// Close the active dialog, answering its caller
    pub fn resolve(self, confirmed: bool) {
        self.active.set(None);
        let mut sender = None;
        self.pending.update_value(|slot| sender = slot.take());
        if let Some(sender) = sender {
            let _ = sender.send(confirmed);
        }
    }

    pub fn active(self) -> ReadSignal<Option<DialogSpec>> {
        self.active.read_only()
    }
}

impl Default for Dialogs {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the dialogs handle from context
pub fn use_dialogs() -> Dialogs {
    expect_context::<Dialogs>()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use futures::FutureExt;
    use leptos::reactive::owner::Owner;

    use super::*;

    fn owner() -> Owner {
        let owner = Owner::new();
        owner.set();
        owner
    }

    #[test]
    fn test_confirm_delete_text() {
        let spec = DialogSpec::confirm_delete("category");
        assert_eq!(spec.title, "Are you sure?");
        assert_eq!(spec.text, "This category will be deleted permanently.");
        assert_eq!(spec.confirm_label, "Delete");
        assert_eq!(spec.confirm_class, "swal btn btn-danger");
        assert_eq!(spec.cancel_label, Some("Cancel"));
        assert_eq!(spec.icon, Icon::Warning);
    }

    #[test]
    fn test_alert_has_single_button() {
        let spec = DialogSpec::alert("Error", "Category name is empty.", Icon::Error);
        assert_eq!(spec.cancel_label, None);
        assert_eq!(spec.confirm_class, "swal btn btn-primary");
        assert_eq!(spec.icon.class(), "swal-icon swal-icon-error");
    }

    #[test]
    fn test_confirm_is_true_only_for_delete() {
        let _owner = owner();
        let dialogs = Dialogs::new();

        let mut answer = Box::pin(dialogs.confirm("bookmark"));
        assert_eq!(answer.as_mut().now_or_never(), None);
        assert_eq!(dialogs.active().get_untracked(), Some(DialogSpec::confirm_delete("bookmark")));
        dialogs.resolve(true);
        assert_eq!(answer.as_mut().now_or_never(), Some(true));
        assert_eq!(dialogs.active().get_untracked(), None);

        let mut answer = Box::pin(dialogs.confirm("bookmark"));
        assert_eq!(answer.as_mut().now_or_never(), None);
        dialogs.resolve(false);
        assert_eq!(answer.as_mut().now_or_never(), Some(false));
    }

    #[test]
    fn test_new_dialog_dismisses_waiting_one() {
        let _owner = owner();
        let dialogs = Dialogs::new();

        let mut first = Box::pin(dialogs.confirm("bookmark"));
        assert_eq!(first.as_mut().now_or_never(), None);
        let mut second = Box::pin(dialogs.confirm("category"));
        assert_eq!(second.as_mut().now_or_never(), None);

        assert_eq!(first.as_mut().now_or_never(), Some(false));
        assert_eq!(dialogs.active().get_untracked(), Some(DialogSpec::confirm_delete("category")));

        dialogs.resolve(true);
        assert_eq!(second.as_mut().now_or_never(), Some(true));
    }

    #[test]
    fn test_delete_runs_only_after_confirmation() {
        let _owner = owner();
        let dialogs = Dialogs::new();
        let deleted = Rc::new(Cell::new(false));

        let flag = deleted.clone();
        let mut cancelled = Box::pin(dialogs.guard_delete("category", async move { flag.set(true) }));
        assert_eq!(cancelled.as_mut().now_or_never(), None);
        dialogs.resolve(false);
        assert_eq!(cancelled.as_mut().now_or_never(), Some(None));
        assert!(!deleted.get());

        let flag = deleted.clone();
        let mut confirmed = Box::pin(dialogs.guard_delete("category", async move {
            flag.set(true);
            7
        }));
        assert_eq!(confirmed.as_mut().now_or_never(), None);
        dialogs.resolve(true);
        assert_eq!(confirmed.as_mut().now_or_never(), Some(Some(7)));
        assert!(deleted.get());
    }

    #[test]
    fn test_report_skips_errors_already_shown() {
        let _owner = owner();
        let dialogs = Dialogs::new();

        assert_eq!(Box::pin(dialogs.report(&ApiError::Unauthorized)).now_or_never(), Some(()));
        assert_eq!(dialogs.active().get_untracked(), None);

        let err = ApiError::Decode("bad json".into());
        let mut shown = Box::pin(dialogs.report(&err));
        assert_eq!(shown.as_mut().now_or_never(), None);
        let spec = dialogs.active().get_untracked();
        assert_eq!(spec.map(|s| (s.title, s.text)), Some(("Error".to_string(), err.to_string())));
        dialogs.resolve(true);
        assert_eq!(shown.as_mut().now_or_never(), Some(()));
    }
}
