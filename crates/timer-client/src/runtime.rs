// ============================================================================
// Session Timer Client - Countdown Runtime
// File: crates/timer-client/src/runtime.rs
// ============================================================================
//! Drives a [`Countdown`] with one periodic task per mount.
//!
//! The tick task is owned by [`CountdownHandle`] and aborted when the handle
//! is dropped, so a remount never inherits a ticker from a previous mount.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use timer_core::countdown::{Countdown, CountdownState, ExtendResult, TickOutcome, View};
use timer_core::domain::{ExtendOption, ExtendedSession, SessionTimer};
use timer_shared::constants::TICK_INTERVAL_MS;

use crate::api::ExtendApi;
use crate::clock::Clock;

pub struct CountdownHandle {
    countdown: Arc<Mutex<Countdown>>,
    view_tx: Arc<watch::Sender<View>>,
    api: Arc<dyn ExtendApi>,
    ticker: JoinHandle<()>,
}

impl CountdownHandle {
    /// Mounts with the standard one second cadence.
    pub fn mount(timer: SessionTimer, api: Arc<dyn ExtendApi>, clock: Arc<dyn Clock>) -> Self {
        Self::mount_with_period(timer, api, clock, Duration::from_millis(TICK_INTERVAL_MS))
    }

    /// Must be called inside a Tokio runtime.
    pub fn mount_with_period(
        timer: SessionTimer,
        api: Arc<dyn ExtendApi>,
        clock: Arc<dyn Clock>,
        period: Duration,
    ) -> Self {
        let session_id = timer.session_id.clone();
        let mut countdown = Countdown::new(timer);
        countdown.start(clock.now());

        let (view_tx, _) = watch::channel(countdown.view());
        let view_tx = Arc::new(view_tx);
        let countdown = Arc::new(Mutex::new(countdown));

        let ticker = {
            let countdown = countdown.clone();
            let view_tx = view_tx.clone();
            tokio::spawn(async move {
                let mut interval = time::interval(period);
                // Remaining time is re-derived from the clock, so skipped
                // ticks lose nothing.
                interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
                interval.tick().await; // first tick completes immediately

                loop {
                    interval.tick().await;
                    let mut countdown = countdown.lock().await;
                    let outcome = countdown.tick(clock.now());
                    view_tx.send_replace(countdown.view());

                    if outcome == TickOutcome::Expired {
                        break;
                    }
                }
                debug!("Ticker for session {} stopped", session_id);
            })
        };

        Self {
            countdown,
            view_tx,
            api,
            ticker,
        }
    }

    /// Receives a fresh [`View`] after every tick and user action.
    pub fn subscribe(&self) -> watch::Receiver<View> {
        self.view_tx.subscribe()
    }

    pub fn view(&self) -> View {
        self.view_tx.borrow().clone()
    }

    pub async fn state(&self) -> CountdownState {
        self.countdown.lock().await.state().clone()
    }

    pub async fn last_extension(&self) -> Option<ExtendedSession> {
        self.countdown.lock().await.last_extension().cloned()
    }

    pub fn is_ticking(&self) -> bool {
        !self.ticker.is_finished()
    }

    pub async fn open_dialog(&self) {
        let mut countdown = self.countdown.lock().await;
        countdown.open_dialog();
        self.view_tx.send_replace(countdown.view());
    }

    pub async fn dismiss(&self) {
        let mut countdown = self.countdown.lock().await;
        countdown.dismiss();
        self.view_tx.send_replace(countdown.view());
    }

    /// Starts one extend call in the background. Concurrent calls are not
    /// coalesced; each selection sends its own request.
    pub fn extend(&self, option: ExtendOption) -> JoinHandle<()> {
        let countdown = self.countdown.clone();
        let view_tx = self.view_tx.clone();
        let api = self.api.clone();

        tokio::spawn(async move {
            let command = countdown.lock().await.extend_command(&option);
            info!(
                "Requesting {}s extension for session {} ({} credits)",
                command.seconds, command.session_id, option.credits
            );

            let result = match api.extend(&command).await {
                Ok(reply) if reply.success => ExtendResult::Extended(ExtendedSession {
                    session: reply.session,
                }),
                Ok(_) => ExtendResult::Declined,
                Err(e) => ExtendResult::Failed(e.to_string()),
            };

            let mut countdown = countdown.lock().await;
            countdown.apply_extend_result(result);
            view_tx.send_replace(countdown.view());
        })
    }

    /// Explicit teardown; dropping the handle does the same.
    pub fn unmount(self) {}
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.ticker.abort();
    }
}
