//! Approval Workflow Integration Tests
//!
//! Tests drive approve/reject through the dashboard state against a stub
//! action endpoint and verify:
//! - Approve issues exactly one POST and removes exactly that item
//! - Reject sends nothing until confirmed, and cancel sends nothing at all
//! - A failed action keeps the item, reports the error and allows retry
//! - Actions on different items run concurrently without interfering
//! - Reloading the list mid-request neither resets nor resurrects items

mod common;

use std::time::Duration;

use common::{document_routes, loaded_state, Route, StubServer};
use lnd_dashboard::models::{ActionKind, ItemState};
use lnd_dashboard::{ActionError, ApprovalError, DashboardState, WorkflowError};

fn ids(entries: &[lnd_dashboard::PendingEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.id()).collect()
}

#[tokio::test]
async fn test_approve_removes_item_after_success() {
    let (server, state) =
        loaded_state(vec![Route::post("/api/certifications/pa-2/approve", 200)]).await;

    state.approve("pa-2").await.unwrap();

    assert_eq!(server.count("POST", "/api/certifications/pa-2/approve"), 1);
    let pending = state.pending("").await;
    assert_eq!(ids(pending.ready().unwrap()), vec!["pa-1", "pa-3"]);
}

#[tokio::test]
async fn test_reject_waits_for_confirmation() {
    let (server, state) =
        loaded_state(vec![Route::post("/api/certifications/pa-1/reject", 204)]).await;

    state.request_reject("pa-1").await.unwrap();
    state.cancel_reject("pa-1").await.unwrap();
    assert_eq!(server.count("POST", "/api/certifications/pa-1/reject"), 0);

    state.request_reject("pa-1").await.unwrap();
    assert_eq!(server.count("POST", "/api/certifications/pa-1/reject"), 0);

    state.confirm_reject("pa-1").await.unwrap();
    assert_eq!(server.count("POST", "/api/certifications/pa-1/reject"), 1);
    let pending = state.pending("").await;
    assert_eq!(ids(pending.ready().unwrap()), vec!["pa-2", "pa-3"]);
}

#[tokio::test]
async fn test_failed_approve_keeps_item_and_allows_retry() {
    let (server, state) =
        loaded_state(vec![Route::post("/api/certifications/pa-3/approve", 500)]).await;

    let result = state.approve("pa-3").await;
    assert!(matches!(
        result,
        Err(ApprovalError::Action(ActionError::Rejected(500)))
    ));

    let pending = state.pending("sana").await;
    let entry = &pending.ready().unwrap()[0];
    assert_eq!(entry.id(), "pa-3");
    match &entry.state {
        ItemState::Failed { message, .. } => assert!(message.contains("500")),
        other => panic!("expected failed state, got {:?}", other),
    }

    // Failed items can be retried; the endpoint still refuses
    assert!(state.approve("pa-3").await.is_err());
    assert_eq!(server.count("POST", "/api/certifications/pa-3/approve"), 2);
    assert_eq!(state.pending("").await.ready().unwrap().len(), 3);
}

#[tokio::test]
async fn test_trigger_on_busy_item_is_ignored() {
    let (server, state) = loaded_state(vec![Route::post(
        "/api/certifications/pa-1/approve",
        200,
    )
    .with_delay(Duration::from_millis(200))])
    .await;

    let (first, second) = tokio::join!(state.approve("pa-1"), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        state.approve("pa-1").await
    });

    assert!(first.is_ok());
    assert!(matches!(
        second,
        Err(ApprovalError::Workflow(WorkflowError::Busy(_)))
    ));
    assert_eq!(server.count("POST", "/api/certifications/pa-1/approve"), 1);
}

#[tokio::test]
async fn test_concurrent_actions_on_different_items() {
    let (server, state) = loaded_state(vec![
        Route::post("/api/certifications/pa-1/approve", 200).with_delay(Duration::from_millis(100)),
        Route::post("/api/certifications/pa-2/reject", 503),
    ])
    .await;

    state.request_reject("pa-2").await.unwrap();
    let (approved, rejected) = tokio::join!(state.approve("pa-1"), state.confirm_reject("pa-2"));

    assert!(approved.is_ok());
    assert!(rejected.is_err());
    assert_eq!(server.requests().iter().filter(|r| r.starts_with("POST")).count(), 2);

    let pending = state.pending("").await;
    let pending = pending.ready().unwrap();
    assert_eq!(ids(pending), vec!["pa-2", "pa-3"]);
    assert!(pending[0].state.error().is_some());
    assert_eq!(pending[1].state, ItemState::Idle);
}

#[tokio::test]
async fn test_refused_action_is_an_action_failure() {
    // No POST route: the stub answers 404
    let (_server, state) = loaded_state(Vec::new()).await;

    let result = state.approve("pa-1").await;
    assert!(matches!(
        result,
        Err(ApprovalError::Action(ActionError::Rejected(404)))
    ));
}

#[tokio::test]
async fn test_refresh_during_approve_keeps_item_processing() {
    let (server, state) = loaded_state(vec![Route::post(
        "/api/certifications/pa-1/approve",
        200,
    )
    .with_delay(Duration::from_millis(300))])
    .await;

    let (approved, retrigger) = tokio::join!(state.approve("pa-1"), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(state.refresh_pending().await);

        let pending = state.pending("priya").await;
        assert_eq!(
            pending.ready().unwrap()[0].state,
            ItemState::Processing {
                action: ActionKind::Approve
            }
        );
        state.approve("pa-1").await
    });

    assert!(approved.is_ok());
    assert!(matches!(
        retrigger,
        Err(ApprovalError::Workflow(WorkflowError::Busy(_)))
    ));
    assert_eq!(server.count("POST", "/api/certifications/pa-1/approve"), 1);
    assert_eq!(server.count("GET", "/ldpendingaction.json"), 2);
    let pending = state.pending("").await;
    assert_eq!(ids(pending.ready().unwrap()), vec!["pa-2", "pa-3"]);
}

#[tokio::test]
async fn test_item_resolved_during_refresh_stays_removed() {
    let mut routes: Vec<Route> = document_routes()
        .into_iter()
        .map(|route| match route.path.as_str() {
            "/ldpendingaction.json" => route.with_delay(Duration::from_millis(300)),
            _ => route,
        })
        .collect();
    routes.push(
        Route::post("/api/certifications/pa-2/approve", 200).with_delay(Duration::from_millis(50)),
    );
    let server = StubServer::start(routes).await;
    let state = DashboardState::new(&server.config());
    state.refresh_all().await;

    // The reloaded list is served after the approve lands but still lists pa-2
    let (refreshed, approved) = tokio::join!(state.refresh_pending(), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        state.approve("pa-2").await
    });

    assert!(refreshed);
    assert!(approved.is_ok());
    let pending = state.pending("").await;
    assert_eq!(ids(pending.ready().unwrap()), vec!["pa-1", "pa-3"]);
}
