//! Pure reducer for the admin page
//!
//! `(AdminState, AdminEvent) -> (AdminState, Vec<AdminEffect>)`
//!
//! No I/O and no clocks: the same inputs always give the same output.

use super::event::{AdminEffect, AdminEvent, Mutation};
use super::state::{AdminState, ArticleFeed, ConfirmState, StatusKind, StatusMessage};

/// Apply `event` to `state`, returning the next state and the effects the
/// host must run.
pub fn reduce(state: AdminState, event: AdminEvent) -> (AdminState, Vec<AdminEffect>) {
    match event {
        AdminEvent::SelectTab(tab) => (AdminState { tab, ..state }, Vec::new()),

        AdminEvent::ToggleDraft(id) => {
            let expanded = if state.is_expanded(&id) {
                None
            } else {
                Some(id)
            };
            (AdminState { expanded, ..state }, Vec::new())
        }

        AdminEvent::RequestDelete(id) => {
            if !state.can_mutate() {
                return (state, Vec::new());
            }
            (
                AdminState {
                    confirm: ConfirmState::AwaitingConfirmation(id),
                    ..state
                },
                Vec::new(),
            )
        }

        AdminEvent::ConfirmDelete => {
            let target = state
                .delete_target()
                .filter(|_| !state.is_busy())
                .cloned();
            let Some(target) = target else {
                return (state, Vec::new());
            };
            start_mutation(state, Mutation::Delete(target), "Deleting...")
        }

        AdminEvent::CancelDelete => {
            // A delete already sent cannot be called back.
            if matches!(state.pending, Some(Mutation::Delete(_))) {
                return (state, Vec::new());
            }
            (
                AdminState {
                    confirm: ConfirmState::Idle,
                    ..state
                },
                Vec::new(),
            )
        }

        AdminEvent::Publish(id) => {
            if !state.can_mutate() {
                return (state, Vec::new());
            }
            start_mutation(state, Mutation::Publish(id), "Publishing...")
        }

        AdminEvent::MutationFinished { mutation, outcome } => {
            if state.pending.as_ref() != Some(&mutation) {
                return (state, Vec::new());
            }

            let (text, kind) = match (&mutation, &outcome) {
                (Mutation::Publish(_), Ok(())) => {
                    ("Article published successfully!".to_string(), StatusKind::Success)
                }
                (Mutation::Delete(_), Ok(())) => {
                    ("Article deleted successfully!".to_string(), StatusKind::Success)
                }
                (Mutation::Publish(_), Err(err)) => {
                    (format!("Failed to publish article: {err}"), StatusKind::Error)
                }
                (Mutation::Delete(_), Err(err)) => {
                    (format!("Failed to delete article: {err}"), StatusKind::Error)
                }
            };

            let mut next = AdminState {
                pending: None,
                ..state
            };
            if matches!(mutation, Mutation::Delete(_)) {
                next.confirm = ConfirmState::Idle;
            }
            // A failed target stays listed and open for a retry.
            if outcome.is_ok() && next.is_expanded(mutation.target()) {
                next.expanded = None;
            }

            let (next, expiry) = timed_status(next, text, kind);
            (next, vec![AdminEffect::Refetch, expiry])
        }

        AdminEvent::ArticlesLoaded(Ok(lists)) => (
            AdminState {
                articles: ArticleFeed::Ready(lists),
                ..state
            },
            Vec::new(),
        ),

        AdminEvent::ArticlesLoaded(Err(message)) => {
            if matches!(state.articles, ArticleFeed::Ready(_)) {
                // Keep what is on screen; only report the failed refresh.
                let (next, expiry) = timed_status(
                    state,
                    format!("Could not refresh articles: {message}"),
                    StatusKind::Error,
                );
                (next, vec![expiry])
            } else {
                (
                    AdminState {
                        articles: ArticleFeed::Failed(message),
                        ..state
                    },
                    Vec::new(),
                )
            }
        }

        AdminEvent::StatusExpired(ticket) => {
            if state.status.as_ref().is_some_and(|s| s.ticket == ticket) {
                (
                    AdminState {
                        status: None,
                        ..state
                    },
                    Vec::new(),
                )
            } else {
                (state, Vec::new())
            }
        }
    }
}

fn start_mutation(
    state: AdminState,
    mutation: Mutation,
    progress: &str,
) -> (AdminState, Vec<AdminEffect>) {
    let next = with_status(state, progress.to_string(), StatusKind::Info);
    let effect = AdminEffect::from(mutation.clone());
    (
        AdminState {
            pending: Some(mutation),
            ..next
        },
        vec![effect],
    )
}

fn with_status(state: AdminState, text: String, kind: StatusKind) -> AdminState {
    let ticket = state.next_ticket;
    AdminState {
        status: Some(StatusMessage { text, kind, ticket }),
        next_ticket: ticket + 1,
        ..state
    }
}

fn timed_status(state: AdminState, text: String, kind: StatusKind) -> (AdminState, AdminEffect) {
    let next = with_status(state, text, kind);
    let expiry = AdminEffect::ClearStatusAfter {
        ticket: next.next_ticket - 1,
        delay: next.status_timeout,
    };
    (next, expiry)
}
