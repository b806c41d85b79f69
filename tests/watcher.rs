//! Watcher lifecycle tests: polling cadence, symbol switching, stale-commit
//! suppression, teardown.

mod support;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_util::StreamExt;
use rust_decimal::Decimal;

use pricewatch_sdk::prelude::*;
use support::{client_for, envelope, serve, Canned, Router};

fn counting_router(latest_hits: Arc<AtomicUsize>) -> Router {
    Arc::new(move |target| {
        if target.starts_with("/api/price/latest") {
            latest_hits.fetch_add(1, Ordering::SeqCst);
            Canned::ok(envelope(200, "ok", r#"{"price":63000}"#))
        } else if target.starts_with("/api/price/interval") {
            Canned::ok(envelope(200, "ok", "[]"))
        } else {
            Canned::status(404, "")
        }
    })
}

#[tokio::test]
async fn test_watcher_fetches_immediately_and_repolls() {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = serve(counting_router(hits.clone())).await;
    let client = client_for(addr, Duration::from_millis(100));

    let mut watcher = client.watch(Symbol::new("BTC"));
    tokio::time::sleep(Duration::from_millis(550)).await;

    // Immediate cycle plus several timer cycles.
    assert!(hits.load(Ordering::SeqCst) >= 2);
    let state = watcher.current();
    assert_eq!(state.current_price, Some(Decimal::from(63000)));
    assert!(state.error.is_none());

    watcher.stop().await;
}

#[tokio::test]
async fn test_watcher_repolls_after_a_failed_cycle() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router: Router = {
        let hits = hits.clone();
        Arc::new(move |target| {
            if target.starts_with("/api/price/latest") {
                let n = hits.fetch_add(1, Ordering::SeqCst);
                if n == 0 {
                    // First cycle fails; the timer re-attempts regardless.
                    Canned::ok(envelope(500, "temporarily unavailable", "null"))
                } else {
                    Canned::ok(envelope(200, "ok", r#"{"price":63000}"#))
                }
            } else if target.starts_with("/api/price/interval") {
                Canned::ok(envelope(200, "ok", "[]"))
            } else {
                Canned::status(404, "")
            }
        })
    };
    let addr = serve(router).await;
    let client = client_for(addr, Duration::from_millis(100));

    let mut watcher = client.watch(Symbol::new("BTC"));
    tokio::time::sleep(Duration::from_millis(450)).await;

    assert!(hits.load(Ordering::SeqCst) >= 2);
    let state = watcher.current();
    assert_eq!(state.current_price, Some(Decimal::from(63000)));
    assert!(state.error.is_none());

    watcher.stop().await;
}

#[tokio::test]
async fn test_symbol_change_never_commits_stale_data() {
    let router: Router = Arc::new(|target| {
        if target.starts_with("/api/price/latest") {
            if target.contains("symbol=BTC") {
                // Slow enough that the switch to ETH happens mid-flight.
                Canned::ok(envelope(200, "ok", r#"{"price":63000}"#))
                    .delayed(Duration::from_millis(400))
            } else {
                Canned::ok(envelope(200, "ok", r#"{"price":3000}"#))
            }
        } else if target.starts_with("/api/price/interval") {
            if target.contains("symbol=BTC") {
                Canned::ok(envelope(200, "ok", "[]")).delayed(Duration::from_millis(400))
            } else {
                Canned::ok(envelope(200, "ok", "[]"))
            }
        } else {
            Canned::status(404, "")
        }
    });
    let addr = serve(router).await;
    let client = client_for(addr, Duration::from_secs(30));

    let mut watcher = client.watch(Symbol::new("BTC"));
    let observed: Arc<Mutex<Vec<ViewState>>> = Arc::new(Mutex::new(Vec::new()));
    let collector = {
        let observed = observed.clone();
        let stream = watcher.states();
        tokio::spawn(async move {
            futures_util::pin_mut!(stream);
            while let Some(state) = stream.next().await {
                observed.lock().unwrap().push(state);
            }
        })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    watcher.set_symbol(Symbol::new("ETH")).await;
    tokio::time::sleep(Duration::from_millis(600)).await;

    let state = watcher.current();
    assert_eq!(state.current_price, Some(Decimal::from(3000)));
    assert!(state.error.is_none());

    watcher.stop().await;
    collector.await.unwrap();

    // The in-flight BTC cycle was cancelled: its price never surfaced.
    let seen = observed.lock().unwrap();
    assert!(seen
        .iter()
        .all(|s| s.current_price != Some(Decimal::from(63000))));
}

#[tokio::test]
async fn test_empty_symbol_parks_watcher_until_one_is_set() {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = serve(counting_router(hits.clone())).await;
    let client = client_for(addr, Duration::from_millis(100));

    let mut watcher = client.watch(Symbol::new(""));
    tokio::time::sleep(Duration::from_millis(300)).await;

    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(watcher.current(), ViewState::idle());

    watcher.set_symbol(Symbol::new("BTC")).await;
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert!(hits.load(Ordering::SeqCst) >= 1);
    assert_eq!(watcher.current().current_price, Some(Decimal::from(63000)));

    watcher.stop().await;
}

#[tokio::test]
async fn test_loading_transition_keeps_previous_data() {
    // Slow responses keep each loading state observable.
    let router: Router = Arc::new(|target| {
        if target.starts_with("/api/price/latest") {
            Canned::ok(envelope(200, "ok", r#"{"price":63000}"#))
                .delayed(Duration::from_millis(50))
        } else if target.starts_with("/api/price/interval") {
            Canned::ok(envelope(200, "ok", "[]")).delayed(Duration::from_millis(50))
        } else {
            Canned::status(404, "")
        }
    });
    let addr = serve(router).await;
    let client = client_for(addr, Duration::from_millis(150));

    let mut watcher = client.watch(Symbol::new("BTC"));
    let stream = watcher.states();
    futures_util::pin_mut!(stream);

    // Walk commits until a loading state arrives after a ready one.
    let mut last_ready_price = None;
    let mut checked = false;
    for _ in 0..8 {
        let Some(state) = stream.next().await else { break };
        if state.is_loading {
            if let Some(price) = last_ready_price {
                assert_eq!(state.current_price, Some(price));
                assert!(state.error.is_none());
                checked = true;
                break;
            }
        } else if state.error.is_none() {
            last_ready_price = state.current_price;
        }
    }
    assert!(checked, "never observed a loading commit after a ready one");

    watcher.stop().await;
}

#[tokio::test]
async fn test_stop_halts_polling_and_commits() {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = serve(counting_router(hits.clone())).await;
    let client = client_for(addr, Duration::from_millis(100));

    let mut watcher = client.watch(Symbol::new("BTC"));
    tokio::time::sleep(Duration::from_millis(250)).await;
    watcher.stop().await;

    tokio::time::sleep(Duration::from_millis(50)).await;
    let baseline = hits.load(Ordering::SeqCst);
    let state_at_stop = watcher.current();

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(hits.load(Ordering::SeqCst), baseline);
    assert_eq!(watcher.current(), state_at_stop);
}
