//! Dashboard state machine and periodic refresh
//!
//! `Dashboard` owns the `ViewState`. Activating it fetches once immediately
//! and then again on every tick of a repeating timer; deactivating it cancels
//! the timer and makes sure nothing that resolves later is applied.

use crate::api::AggregateSource;
use crate::constants::FETCH_ERROR_MESSAGE;
use crate::error::NetworkError;
use crate::types::{AggregationResult, ViewState};
use chrono::{DateTime, Local};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

type ChangeNotifier = Arc<dyn Fn() + Send + Sync>;

struct Shared {
    view: ViewState,
    active: bool,
    // Bumped on every activation
    epoch: u64,
    // Generation of the most recently issued fetch
    issued: u64,
    // Generation whose result is currently applied
    applied: u64,
    last_updated: Option<DateTime<Local>>,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Everything a background task needs to run one fetch-and-transition cycle.
#[derive(Clone)]
struct Refresher {
    source: Arc<dyn AggregateSource>,
    shared: Arc<Mutex<Shared>>,
    notify: Option<ChangeNotifier>,
    epoch: u64,
}

impl Refresher {
    fn notify(&self) {
        if let Some(notify) = &self.notify {
            notify();
        }
    }

    /// Enter `Loading` and hand out a generation, unless deactivated or
    /// left over from an earlier activation.
    fn begin(&self) -> Option<u64> {
        let mut s = lock(&self.shared);
        if !s.active || s.epoch != self.epoch {
            debug!(epoch = self.epoch, current = s.epoch, "Skipping fetch for inactive epoch");
            return None;
        }
        s.issued += 1;
        s.view = ViewState::Loading;
        Some(s.issued)
    }

    fn spawn_fetch(&self, handle: &Handle) {
        let Some(generation) = self.begin() else {
            return;
        };
        self.notify();

        // Issued here so the request counts as started before the task runs
        let request = self.source.fetch_aggregated_news();
        let this = self.clone();
        handle.spawn(async move {
            let result = request.await;
            if this.apply(generation, result) {
                this.notify();
            }
        });
    }

    /// Returns true if the state changed.
    fn apply(&self, generation: u64, result: Result<AggregationResult, NetworkError>) -> bool {
        let mut s = lock(&self.shared);
        if !s.active {
            debug!(generation, "Dashboard inactive, discarding fetch result");
            return false;
        }
        if generation <= s.applied {
            debug!(generation, applied = s.applied, "Discarding stale fetch result");
            return false;
        }
        s.applied = generation;

        match result {
            Ok(data) => {
                info!(
                    generation,
                    total_articles = data.total_articles,
                    topic_clusters = data.topic_clusters,
                    perspectives = data.global_perspectives.len(),
                    "News refreshed"
                );
                s.view = ViewState::Loaded(data);
                s.last_updated = Some(Local::now());
            }
            Err(e) => {
                error!(
                    error = %e,
                    timeout = e.is_timeout(),
                    generation,
                    "Failed to fetch aggregated news"
                );
                s.view = ViewState::Error(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        true
    }
}

async fn run_refresh_timer(refresher: Refresher, token: CancellationToken, period: Duration) {
    let handle = Handle::current();
    // First tick one full period out; activation already fetched.
    let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = token.cancelled() => {
                debug!("Refresh timer cancelled");
                break;
            }
            _ = ticker.tick() => {
                debug!("Refresh timer fired");
                refresher.spawn_fetch(&handle);
            }
        }
    }
}

/// Owns the view state for one mounted dashboard.
///
/// Dropping it has the same effect as `deactivate`.
pub struct Dashboard {
    source: Arc<dyn AggregateSource>,
    shared: Arc<Mutex<Shared>>,
    refresh_interval: Duration,
    notify: Option<ChangeNotifier>,
    cancel_token: Option<CancellationToken>,
}

impl Dashboard {
    pub fn new(source: Arc<dyn AggregateSource>, refresh_interval: Duration) -> Self {
        Self {
            source,
            shared: Arc::new(Mutex::new(Shared {
                view: ViewState::Loading,
                active: false,
                epoch: 0,
                issued: 0,
                applied: 0,
                last_updated: None,
            })),
            refresh_interval,
            notify: None,
            cancel_token: None,
        }
    }

    /// Called after every transition, from whichever thread made it.
    pub fn on_change(mut self, notify: impl Fn() + Send + Sync + 'static) -> Self {
        self.notify = Some(Arc::new(notify));
        self
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    pub fn activate(&mut self, handle: &Handle) {
        if self.cancel_token.is_some() {
            debug!("Dashboard already active");
            return;
        }

        let epoch = {
            let mut s = lock(&self.shared);
            s.active = true;
            s.epoch += 1;
            // Anything issued before this activation is stale
            s.applied = s.issued;
            s.epoch
        };

        let refresher = Refresher {
            source: self.source.clone(),
            shared: self.shared.clone(),
            notify: self.notify.clone(),
            epoch,
        };
        let token = CancellationToken::new();

        info!(
            epoch,
            refresh_secs = self.refresh_interval.as_secs(),
            "Dashboard activated"
        );
        refresher.spawn_fetch(handle);
        handle.spawn(run_refresh_timer(refresher, token.clone(), self.refresh_interval));
        self.cancel_token = Some(token);
    }

    pub fn deactivate(&mut self) {
        if let Some(token) = self.cancel_token.take() {
            lock(&self.shared).active = false;
            token.cancel();
            info!("Dashboard deactivated");
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel_token.is_some()
    }

    pub fn state(&self) -> ViewState {
        lock(&self.shared).view.clone()
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        lock(&self.shared).last_updated
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.deactivate();
    }
}
