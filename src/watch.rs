//! Polling price watcher — `PriceWatcher`.
//!
//! One background tokio task per tracked symbol:
//! - Immediate fetch cycle when the symbol is non-empty, then one cycle per
//!   poll interval, regardless of whether the previous cycle failed
//! - Symbol changes cancel the pending timer and any in-flight cycle, then
//!   fetch immediately
//! - Generation-tagged commits: a cycle whose generation is no longer
//!   current is discarded, so a stale response can never overwrite a newer
//!   symbol's state
//! - State delivery through a `watch` channel, with a stream adapter for
//!   consumers

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use futures_util::Stream;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::client::PricewatchClient;
use crate::domain::price::ViewState;
use crate::shared::Symbol;

/// Fixed re-poll cadence of the original widget.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

// ─── Commands from public API to background task ─────────────────────────────

enum Command {
    SetSymbol(Symbol),
    Stop,
}

// ─── Background task state ───────────────────────────────────────────────────

type CycleFuture = Pin<Box<dyn Future<Output = (u64, ViewState)> + Send>>;

struct TaskState {
    client: PricewatchClient,
    symbol: Symbol,
    /// Bumped on every symbol change; commits from older generations are
    /// discarded.
    generation: u64,
    cmd_rx: mpsc::Receiver<Command>,
    state_tx: watch::Sender<ViewState>,
}

impl TaskState {
    /// Commit the loading transition and return the cycle future, tagged
    /// with the current generation.
    fn start_cycle(&self) -> CycleFuture {
        let generation = self.generation;
        let client = self.client.clone();
        let symbol = self.symbol.clone();

        let prev = self.state_tx.borrow().clone();
        let _ = self.state_tx.send(ViewState::loading_from(&prev));

        Box::pin(async move {
            let state = client.prices().snapshot(&symbol).await;
            tracing::debug!(
                symbol = %symbol,
                ok = state.error.is_none(),
                samples = state.price_history.len(),
                "fetch cycle finished"
            );
            (generation, state)
        })
    }
}

async fn run_task(mut task: TaskState) {
    let mut ticker = tokio::time::interval(task.client.poll_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // The first tick completes immediately, which is the initial fetch.
    let mut in_flight: Option<CycleFuture> = None;

    loop {
        tokio::select! {
            _ = ticker.tick(), if !task.symbol.is_empty() => {
                in_flight = Some(task.start_cycle());
            }

            (generation, state) = async { in_flight.as_mut().expect("in_flight checked").await },
                if in_flight.is_some() =>
            {
                in_flight = None;
                if generation == task.generation {
                    let _ = task.state_tx.send(state);
                }
            }

            cmd = task.cmd_rx.recv() => match cmd {
                Some(Command::SetSymbol(symbol)) => {
                    task.symbol = symbol;
                    task.generation += 1;
                    // Dropping the in-flight cycle means its result can never
                    // land under the new symbol's label.
                    in_flight = None;
                    ticker.reset();
                    if task.symbol.is_empty() {
                        let _ = task.state_tx.send(ViewState::idle());
                    } else {
                        in_flight = Some(task.start_cycle());
                    }
                }
                Some(Command::Stop) | None => break,
            }
        }
    }
}

// ─── Public PriceWatcher ─────────────────────────────────────────────────────

/// Polling subscription for one tracked symbol.
///
/// The public API communicates with the background task via channels; the
/// task commits each cycle's `ViewState` into a `watch` channel.
pub struct PriceWatcher {
    cmd_tx: mpsc::Sender<Command>,
    state_rx: watch::Receiver<ViewState>,
    task_handle: Option<JoinHandle<()>>,
}

impl PriceWatcher {
    /// Spawn the background polling task. An empty symbol parks the watcher
    /// idle until `set_symbol` provides one.
    pub(crate) fn spawn(client: PricewatchClient, symbol: Symbol) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (state_tx, state_rx) = watch::channel(ViewState::idle());

        let task = TaskState {
            client,
            symbol,
            generation: 0,
            cmd_rx,
            state_tx,
        };
        let task_handle = tokio::spawn(run_task(task));

        Self {
            cmd_tx,
            state_rx,
            task_handle: Some(task_handle),
        }
    }

    /// The latest committed state.
    pub fn current(&self) -> ViewState {
        self.state_rx.borrow().clone()
    }

    /// Stream of state commits, starting with the current one.
    ///
    /// Each subscription observes every commit from the point it is created;
    /// the stream ends when the watcher is stopped or dropped.
    pub fn states(&self) -> impl Stream<Item = ViewState> + Send + 'static {
        let mut rx = self.state_rx.clone();
        async_stream::stream! {
            let state = rx.borrow_and_update().clone();
            yield state;
            while rx.changed().await.is_ok() {
                let state = rx.borrow_and_update().clone();
                yield state;
            }
        }
    }

    /// Switch the tracked symbol.
    ///
    /// Cancels the pending timer and any in-flight cycle, then fetches the
    /// new symbol immediately. An empty symbol resets the state to idle.
    pub async fn set_symbol(&self, symbol: Symbol) {
        let _ = self.cmd_tx.send(Command::SetSymbol(symbol)).await;
    }

    /// Stop polling. No state commit happens after this returns.
    pub async fn stop(&mut self) {
        let _ = self.cmd_tx.send(Command::Stop).await;
        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for PriceWatcher {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}
