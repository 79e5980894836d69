//! Admin panel state
//!
//! One slot per exclusive concern: at most one expanded draft, at most one
//! pending delete confirmation, at most one mutation in flight.

use std::time::Duration;

use super::event::Mutation;
use crate::article::{Article, ArticleId};

/// Default time a status message stays visible.
pub const STATUS_MESSAGE_TIMEOUT: Duration = Duration::from_secs(3);

/// Admin panel tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminTab {
    /// Articles waiting for approval.
    #[default]
    Drafts,
    /// Articles on the public feed.
    Published,
}

impl AdminTab {
    /// Tab label without the item count.
    pub fn label(self) -> &'static str {
        match self {
            Self::Drafts => "Drafts",
            Self::Published => "Published",
        }
    }
}

/// Delete confirmation flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfirmState {
    /// No confirmation open.
    #[default]
    Idle,
    /// The modal is open for this article.
    AwaitingConfirmation(ArticleId),
}

/// Tone of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Work in progress.
    Info,
    /// A mutation went through.
    Success,
    /// A mutation or refresh failed.
    Error,
}

/// Transient banner text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    /// Identifies the message so a late expiry timer cannot clear a newer one.
    pub ticket: u64,
}

/// Drafts and published articles as last fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleLists {
    pub drafts: Vec<Article>,
    pub published: Vec<Article>,
}

/// Loading state of the article lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ArticleFeed {
    /// First fetch still running.
    #[default]
    Loading,
    /// Lists available.
    Ready(ArticleLists),
    /// First fetch failed; nothing to show.
    Failed(String),
}

impl ArticleFeed {
    /// The lists, if any were loaded.
    pub fn lists(&self) -> Option<&ArticleLists> {
        match self {
            Self::Ready(lists) => Some(lists),
            _ => None,
        }
    }
}

/// Root admin page state.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminState {
    /// Active tab.
    pub tab: AdminTab,

    /// The single expanded draft, if any.
    pub expanded: Option<ArticleId>,

    /// Delete confirmation flow.
    pub confirm: ConfirmState,

    /// Transient status banner.
    pub status: Option<StatusMessage>,

    /// The mutation currently waiting for the API.
    pub pending: Option<Mutation>,

    /// Article lists.
    pub articles: ArticleFeed,

    pub(crate) status_timeout: Duration,
    pub(crate) next_ticket: u64,
}

impl Default for AdminState {
    fn default() -> Self {
        Self::new(STATUS_MESSAGE_TIMEOUT)
    }
}

impl AdminState {
    /// Initial state: drafts tab, nothing expanded, lists loading.
    pub fn new(status_timeout: Duration) -> Self {
        Self {
            tab: AdminTab::Drafts,
            expanded: None,
            confirm: ConfirmState::Idle,
            status: None,
            pending: None,
            articles: ArticleFeed::Loading,
            status_timeout,
            next_ticket: 0,
        }
    }

    /// Whether `id` is the expanded draft.
    pub fn is_expanded(&self, id: &ArticleId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    /// The article awaiting delete confirmation.
    pub fn delete_target(&self) -> Option<&ArticleId> {
        match &self.confirm {
            ConfirmState::AwaitingConfirmation(id) => Some(id),
            ConfirmState::Idle => None,
        }
    }

    /// Whether a publish or delete may be started right now.
    pub fn can_mutate(&self) -> bool {
        self.pending.is_none() && self.confirm == ConfirmState::Idle
    }

    /// Whether a mutation is waiting for the API.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Item counts for the tab labels.
    pub fn counts(&self) -> (usize, usize) {
        self.articles
            .lists()
            .map_or((0, 0), |lists| (lists.drafts.len(), lists.published.len()))
    }

    /// How long status messages stay up.
    pub fn status_timeout(&self) -> Duration {
        self.status_timeout
    }
}
