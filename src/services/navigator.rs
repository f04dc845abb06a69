//! Navigation as an injected collaborator.

use crate::routing::Page;

#[cfg(test)]
use mockall::automock;

/// Moves the UI to another page after a successful submission.
///
/// Navigation is idempotent from the workflow's point of view; the
/// implementation (browser history, UI framework, test recorder) is the
/// embedding application's choice.
#[cfg_attr(test, automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, page: Page);
}
