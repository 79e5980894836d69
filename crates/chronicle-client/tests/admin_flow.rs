//! Admin reducer driven against an in-memory API.

mod common;

use std::collections::VecDeque;

use chronicle_client::ApiClient;
use chronicle_core::admin::{ArticleFeed, StatusKind};
use chronicle_core::{AdminEffect, AdminEvent, AdminState, ArticleId, ConfirmState, Mutation, reduce};
use common::{API, MockTransport, list_json};
use http::Method;

/// Run `event` and every follow-up event it causes. Timer effects are
/// returned instead of fired.
async fn drive(
    client: &ApiClient<MockTransport>,
    state: AdminState,
    event: AdminEvent,
) -> (AdminState, Vec<AdminEffect>) {
    let mut state = state;
    let mut timers = Vec::new();
    let mut queue = VecDeque::from([event]);

    while let Some(event) = queue.pop_front() {
        let (next, effects) = reduce(state, event);
        state = next;
        for effect in effects {
            if matches!(effect, AdminEffect::ClearStatusAfter { .. }) {
                timers.push(effect);
            } else if let Some(follow_up) = client.perform(effect).await {
                queue.push_back(follow_up);
            }
        }
    }

    (state, timers)
}

async fn loaded_state(mock: &MockTransport) -> AdminState {
    mock.respond(200, list_json(&[("d1", "Draft one", "draft"), ("d2", "Draft two", "draft")]))
        .respond(200, list_json(&[("p1", "Live", "published")]));
    let event = mock
        .client()
        .perform(AdminEffect::Refetch)
        .await
        .expect("refetch yields an event");
    let (state, effects) = reduce(AdminState::default(), event);
    assert!(effects.is_empty());
    state
}

#[tokio::test]
async fn test_initial_load() {
    let mock = MockTransport::new();
    let state = loaded_state(&mock).await;

    assert_eq!(state.counts(), (2, 1));
    assert_eq!(mock.count(Method::GET, &format!("{API}/api/articles/drafts")), 1);
    assert_eq!(mock.count(Method::GET, &format!("{API}/api/articles")), 1);
}

#[tokio::test]
async fn test_confirmed_delete_sends_one_request_and_refetches() {
    let mock = MockTransport::new();
    let state = loaded_state(&mock).await;
    let client = mock.client();
    let target = ArticleId::new("d1");

    let (state, timers) = drive(&client, state, AdminEvent::RequestDelete(target.clone())).await;
    assert_eq!(state.confirm, ConfirmState::AwaitingConfirmation(target.clone()));
    assert!(timers.is_empty());

    mock.respond(204, "")
        .respond(200, list_json(&[("d2", "Draft two", "draft")]))
        .respond(200, list_json(&[("p1", "Live", "published")]));
    let (state, timers) = drive(&client, state, AdminEvent::ConfirmDelete).await;

    assert_eq!(mock.count(Method::DELETE, &format!("{API}/api/articles/d1")), 1);
    assert_eq!(mock.count(Method::GET, &format!("{API}/api/articles/drafts")), 2);
    assert_eq!(mock.count(Method::GET, &format!("{API}/api/articles")), 2);

    assert_eq!(state.confirm, ConfirmState::Idle);
    assert!(state.pending.is_none());
    assert_eq!(state.counts(), (1, 1));
    let status = state.status.clone().unwrap();
    assert_eq!(status.text, "Article deleted successfully!");
    assert_eq!(status.kind, StatusKind::Success);

    // The success message clears itself.
    assert_eq!(timers.len(), 1);
    let AdminEffect::ClearStatusAfter { ticket, .. } = &timers[0] else {
        panic!("expected a status timer");
    };
    let (state, _) = reduce(state, AdminEvent::StatusExpired(*ticket));
    assert!(state.status.is_none());
}

#[tokio::test]
async fn test_cancelled_delete_sends_nothing() {
    let mock = MockTransport::new();
    let state = loaded_state(&mock).await;
    let before = mock.requests().len();
    let client = mock.client();

    let (state, _) = drive(&client, state, AdminEvent::RequestDelete(ArticleId::new("p1"))).await;
    let (state, _) = drive(&client, state, AdminEvent::CancelDelete).await;

    assert_eq!(state.confirm, ConfirmState::Idle);
    assert_eq!(mock.requests().len(), before);
}

#[tokio::test]
async fn test_publish_failure_reports_and_refetches() {
    let mock = MockTransport::new();
    let state = loaded_state(&mock).await;
    let client = mock.client();

    mock.respond(500, "")
        .respond(200, list_json(&[("d1", "Draft one", "draft"), ("d2", "Draft two", "draft")]))
        .respond(200, list_json(&[("p1", "Live", "published")]));
    let (state, timers) = drive(&client, state, AdminEvent::Publish(ArticleId::new("d1"))).await;

    assert_eq!(mock.count(Method::PATCH, &format!("{API}/api/articles/d1/publish")), 1);
    assert_eq!(mock.count(Method::GET, &format!("{API}/api/articles/drafts")), 2);

    let status = state.status.clone().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.text.starts_with("Failed to publish article:"));
    assert!(status.text.contains("HTTP 500"));
    assert_eq!(state.counts(), (2, 1));
    assert_eq!(timers.len(), 1);
}

#[tokio::test]
async fn test_refetch_failure_keeps_lists() {
    let mock = MockTransport::new();
    let state = loaded_state(&mock).await;
    let client = mock.client();

    mock.respond(204, "").fail("connection reset");
    let (state, _) = drive(&client, state, AdminEvent::Publish(ArticleId::new("d2"))).await;

    assert!(matches!(state.articles, ArticleFeed::Ready(_)));
    assert_eq!(state.counts(), (2, 1));
    let status = state.status.clone().unwrap();
    assert!(status.text.starts_with("Could not refresh articles:"));
}

#[tokio::test]
async fn test_perform_maps_outcomes() {
    let mock = MockTransport::new();
    let client = mock.client();

    mock.respond(200, "");
    let event = client.perform(AdminEffect::Publish(ArticleId::new("x"))).await;
    assert_eq!(
        event,
        Some(AdminEvent::MutationFinished {
            mutation: Mutation::Publish(ArticleId::new("x")),
            outcome: Ok(()),
        })
    );

    mock.fail("offline");
    let event = client.perform(AdminEffect::Delete(ArticleId::new("x"))).await;
    assert_eq!(
        event,
        Some(AdminEvent::MutationFinished {
            mutation: Mutation::Delete(ArticleId::new("x")),
            outcome: Err("Network error: offline".to_string()),
        })
    );

    let before = mock.requests().len();
    let timer = AdminEffect::ClearStatusAfter {
        ticket: 3,
        delay: std::time::Duration::from_millis(10),
    };
    assert_eq!(client.perform(timer).await, None);
    assert_eq!(mock.requests().len(), before);
}
