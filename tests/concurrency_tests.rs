mod common;

use common::{wait_until, MockResource};
use sleepwake::config::DynmapSetting;
use sleepwake::kernel::dispatcher::WakeDispatcher;
use sleepwake::kernel::event::{DispatchOutcome, WakeRequest};
use sleepwake::kernel::status::ResourceState;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_wakes_both_start() {
    let (mock, gate) = MockResource::gated(ResourceState::Sleeping);
    let mock = Arc::new(mock);
    let dispatcher = WakeDispatcher::new(mock.clone(), mock.clone(), DynmapSetting::default());

    let first = dispatcher.dispatch_detached(WakeRequest::new("10.0.0.1"));
    let second = dispatcher.dispatch_detached(WakeRequest::new("10.0.0.2"));

    // Both are parked on the oracle before either sees a state.
    wait_until(|| mock.fetches() == 2).await;
    gate.add_permits(2);

    assert_eq!(first.await.unwrap(), Some(DispatchOutcome::StartTriggered));
    assert_eq!(second.await.unwrap(), Some(DispatchOutcome::StartTriggered));

    let mut labels = mock.starts();
    labels.sort();
    assert_eq!(labels, vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()]);
}

#[tokio::test]
async fn test_detached_dispatch_swallows_fetch_failure() {
    let mock = Arc::new(MockResource::new(ResourceState::Sleeping).failing_status());
    let dispatcher = WakeDispatcher::new(mock.clone(), mock.clone(), DynmapSetting::default());

    let outcome = dispatcher.dispatch_detached(WakeRequest::new("caller")).await.unwrap();

    assert_eq!(outcome, None);
    assert_eq!(dispatcher.telemetry_snapshot().fetch_failures, 1);
}
