//! Tick-driven polling of a status source
//!
//! The host calls [`PollScheduler::tick`] on a steady cadence. Every
//! `update_rate` ticks (and on [`PollScheduler::force_update`]) a status fetch
//! is spawned on the tokio runtime. The fetch reports back over a channel and
//! the next `tick` applies the result to the [`Tracker`], so all mutation
//! happens on the owner's side and only between ticks.
//!
//! ## Concurrency rules
//!
//! - At most one status fetch is in flight.
//! - Poll requests made while a fetch is in flight are coalesced into a single
//!   re-poll, issued as soon as the outstanding fetch completes.
//! - A fetch that exceeds `fetch_timeout` is aborted; the tracker keeps its
//!   previous state and the next due tick retries.
//! - A tick that sees a new working-tree selection, or a successful poll while
//!   files are selected, requests the diff of the selection.

use crate::areas::tracker::Tracker;
use crate::areas::vcs::{DiffFetcher, StatusFetcher};
use crate::artifacts::status::parser::ParseError;
use crate::artifacts::status::reconciler::ReconcileSummary;
use anyhow::Context;
use derive_new::new;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

pub const DEFAULT_UPDATE_RATE: u64 = 600;
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct PollConfig {
    /// Ticks between two scheduled polls.
    pub update_rate: u64,
    pub fetch_timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(DEFAULT_UPDATE_RATE, DEFAULT_FETCH_TIMEOUT)
    }
}

#[derive(Debug, Error)]
pub enum PollError {
    #[error("fetch failed: {0:#}")]
    Fetch(anyhow::Error),
    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),
    #[error("fetch task aborted: {0}")]
    Aborted(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// What a tick (or a settle) observed.
#[derive(Debug)]
pub enum PollEvent {
    Reconciled(ReconcileSummary),
    PollFailed(PollError),
    DiffReady,
    DiffDiscarded,
    DiffFailed(PollError),
}

#[derive(Debug)]
enum Completion {
    Status(Result<String, PollError>),
    Diff {
        generation: u64,
        result: Result<String, PollError>,
    },
}

pub struct PollScheduler<F> {
    fetcher: Arc<F>,
    config: PollConfig,
    runtime: Handle,
    frame_count: u64,
    status_in_flight: bool,
    status_fetches: u64,
    repoll_pending: bool,
    diffs_in_flight: usize,
    diff_generation: Option<u64>,
    diff_refresh_pending: bool,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
}

impl<F> PollScheduler<F>
where
    F: StatusFetcher + DiffFetcher,
{
    /// Must be called from within a tokio runtime; fetches are spawned on it.
    pub fn new(fetcher: F, config: PollConfig) -> anyhow::Result<Self> {
        let runtime = Handle::try_current().context("poll scheduler requires a tokio runtime")?;
        let (completions_tx, completions_rx) = unbounded_channel();

        Ok(Self {
            fetcher: Arc::new(fetcher),
            config: PollConfig {
                update_rate: config.update_rate.max(1),
                ..config
            },
            runtime,
            frame_count: 0,
            status_in_flight: false,
            status_fetches: 0,
            repoll_pending: false,
            diffs_in_flight: 0,
            diff_generation: None,
            diff_refresh_pending: false,
            completions_tx,
            completions_rx,
        })
    }

    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn is_polling(&self) -> bool {
        self.status_in_flight
    }

    pub fn is_idle(&self) -> bool {
        !self.status_in_flight && self.diffs_in_flight == 0
    }

    /// Applies finished fetches, then counts this tick and polls when one is due.
    /// A re-poll started while draining already serves a poll due on this tick.
    pub fn tick(&mut self, tracker: &mut Tracker) -> Vec<PollEvent> {
        let fetches = self.status_fetches;
        let events = self.drain(tracker);

        if self.frame_count % self.config.update_rate == 0 && self.status_fetches == fetches {
            self.request_poll();
        }
        self.frame_count = self.frame_count.wrapping_add(1);
        self.sync_diff(tracker);

        events
    }

    pub fn force_update(&mut self, tracker: &mut Tracker) -> Vec<PollEvent> {
        self.frame_count = 0;
        self.tick(tracker)
    }

    /// Starts a status fetch, or marks one pending if a fetch is already running.
    /// Returns whether a new fetch was started.
    pub fn request_poll(&mut self) -> bool {
        if self.status_in_flight {
            if !self.repoll_pending {
                tracing::debug!("status fetch in flight, coalescing poll request");
            }
            self.repoll_pending = true;
            return false;
        }

        self.spawn_status_fetch();
        true
    }

    /// Fetches the diff of the current working-tree selection.
    /// Returns false when nothing is selected in the working tree.
    pub fn request_diff(&mut self, tracker: &Tracker) -> bool {
        let paths = tracker.diff_paths();
        if paths.is_empty() {
            return false;
        }

        let generation = tracker.selection_generation();
        let fetcher = Arc::clone(&self.fetcher);
        let fetch_timeout = self.config.fetch_timeout;
        let completions_tx = self.completions_tx.clone();

        tracing::debug!(?paths, generation, "requesting diff");
        self.diff_generation = Some(generation);
        self.diff_refresh_pending = false;
        self.diffs_in_flight += 1;
        self.runtime.spawn(async move {
            let fetch = tokio::spawn(async move { fetcher.fetch_diff(paths).await });
            let result = resolve(fetch, fetch_timeout).await;
            let _ = completions_tx.send(Completion::Diff { generation, result });
        });

        true
    }

    /// Requests the selection's diff when the selection changed since the last
    /// request, or when a poll landed after it. A diff already on its way for
    /// the current selection is not requested twice.
    pub fn sync_diff(&mut self, tracker: &Tracker) -> bool {
        let generation = tracker.selection_generation();
        let selection_changed = self.diff_generation != Some(generation);
        if !selection_changed && (!self.diff_refresh_pending || self.diffs_in_flight > 0) {
            return false;
        }

        if self.request_diff(tracker) {
            return true;
        }

        self.diff_generation = Some(generation);
        self.diff_refresh_pending = false;
        false
    }

    /// Waits until no fetch is in flight, applying every completion on the way.
    pub async fn settle(&mut self, tracker: &mut Tracker) -> Vec<PollEvent> {
        let mut events = self.drain(tracker);

        while !self.is_idle() {
            match self.completions_rx.recv().await {
                Some(completion) => events.push(self.complete(completion, tracker)),
                None => break,
            }
        }

        events
    }

    /// Runs one complete poll and waits for it.
    pub async fn poll_now(&mut self, tracker: &mut Tracker) -> Result<ReconcileSummary, PollError> {
        self.settle(tracker).await;
        self.spawn_status_fetch();

        self.settle(tracker)
            .await
            .into_iter()
            .rev()
            .find_map(|event| match event {
                PollEvent::Reconciled(summary) => Some(Ok(summary)),
                PollEvent::PollFailed(e) => Some(Err(e)),
                _ => None,
            })
            .unwrap_or_else(|| Err(PollError::Aborted("no status was reported".to_string())))
    }

    fn drain(&mut self, tracker: &mut Tracker) -> Vec<PollEvent> {
        let mut events = Vec::new();
        while let Ok(completion) = self.completions_rx.try_recv() {
            events.push(self.complete(completion, tracker));
        }
        events
    }

    fn complete(&mut self, completion: Completion, tracker: &mut Tracker) -> PollEvent {
        match completion {
            Completion::Status(result) => {
                self.status_in_flight = false;

                let event = match result
                    .and_then(|report| tracker.apply_report(&report).map_err(PollError::from))
                {
                    Ok(summary) => {
                        if !summary.is_unchanged() {
                            tracing::info!(?summary, stats = %tracker.stats(), "status changed");
                        }
                        self.diff_refresh_pending = true;
                        PollEvent::Reconciled(summary)
                    }
                    Err(e) => {
                        tracing::warn!("poll failed, keeping previous status: {e}");
                        PollEvent::PollFailed(e)
                    }
                };

                if self.repoll_pending {
                    self.repoll_pending = false;
                    self.spawn_status_fetch();
                }

                event
            }
            Completion::Diff { generation, result } => {
                self.diffs_in_flight = self.diffs_in_flight.saturating_sub(1);

                match result {
                    Ok(diff) => {
                        if tracker.accept_diff(generation, diff) {
                            PollEvent::DiffReady
                        } else {
                            PollEvent::DiffDiscarded
                        }
                    }
                    Err(e) => {
                        tracing::warn!("diff fetch failed: {e}");
                        PollEvent::DiffFailed(e)
                    }
                }
            }
        }
    }

    fn spawn_status_fetch(&mut self) {
        let fetcher = Arc::clone(&self.fetcher);
        let fetch_timeout = self.config.fetch_timeout;
        let completions_tx = self.completions_tx.clone();

        tracing::debug!("spawning status fetch");
        self.status_in_flight = true;
        self.status_fetches = self.status_fetches.wrapping_add(1);
        self.runtime.spawn(async move {
            let fetch = tokio::spawn(async move { fetcher.fetch_status().await });
            let result = resolve(fetch, fetch_timeout).await;
            let _ = completions_tx.send(Completion::Status(result));
        });
    }
}

async fn resolve(
    fetch: JoinHandle<anyhow::Result<String>>,
    fetch_timeout: Duration,
) -> Result<String, PollError> {
    let abort = fetch.abort_handle();

    match tokio::time::timeout(fetch_timeout, fetch).await {
        Ok(Ok(Ok(text))) => Ok(text),
        Ok(Ok(Err(e))) => Err(PollError::Fetch(e)),
        Ok(Err(join_error)) => Err(PollError::Aborted(join_error.to_string())),
        Err(_) => {
            abort.abort();
            Err(PollError::Timeout(fetch_timeout))
        }
    }
}
