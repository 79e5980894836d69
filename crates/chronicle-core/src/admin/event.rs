//! Events and effects for the admin reducer

use std::time::Duration;

use super::state::{AdminTab, ArticleLists};
use crate::article::ArticleId;

/// A state-changing request against the article API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Move a draft to the public feed.
    Publish(ArticleId),
    /// Remove an article permanently.
    Delete(ArticleId),
}

impl Mutation {
    /// The article the mutation targets.
    pub fn target(&self) -> &ArticleId {
        match self {
            Self::Publish(id) | Self::Delete(id) => id,
        }
    }
}

/// Everything that can happen on the admin page.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminEvent {
    // === User input ===
    /// Switch tabs.
    SelectTab(AdminTab),

    /// Expand or collapse a draft.
    ToggleDraft(ArticleId),

    /// Delete button clicked; opens the confirmation.
    RequestDelete(ArticleId),

    /// Confirmation accepted.
    ConfirmDelete,

    /// Confirmation dismissed.
    CancelDelete,

    /// Publish button clicked.
    Publish(ArticleId),

    // === Outcomes ===
    /// The API answered a mutation.
    MutationFinished {
        mutation: Mutation,
        outcome: Result<(), String>,
    },

    /// Drafts and published lists were (re)fetched.
    ArticlesLoaded(Result<ArticleLists, String>),

    /// A status message timer fired.
    StatusExpired(u64),
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminEffect {
    /// `PATCH /api/articles/{id}/publish`.
    Publish(ArticleId),

    /// `DELETE /api/articles/{id}`.
    Delete(ArticleId),

    /// Fetch drafts and published lists again.
    Refetch,

    /// Fire [`AdminEvent::StatusExpired`] with `ticket` after `delay`.
    ClearStatusAfter { ticket: u64, delay: Duration },
}

impl From<Mutation> for AdminEffect {
    fn from(mutation: Mutation) -> Self {
        match mutation {
            Mutation::Publish(id) => Self::Publish(id),
            Mutation::Delete(id) => Self::Delete(id),
        }
    }
}
