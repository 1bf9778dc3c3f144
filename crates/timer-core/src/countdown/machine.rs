// ============================================================================
// Session Timer Core - Countdown State Machine
// File: crates/timer-core/src/countdown/machine.rs
// ============================================================================

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use timer_shared::constants::EXTEND_WARNING_THRESHOLD_SECS;

use super::format::format_time;
use super::view::{ExtendDialog, View};
use crate::domain::{ExtendCommand, ExtendOption, ExtendedSession, SessionTimer};

const EXTEND_DECLINED_MESSAGE: &str = "Failed to extend session";
const EXTEND_FAILED_MESSAGE: &str = "Error extending session";

/// Ephemeral per-mount state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountdownState {
    pub time_left: Option<i64>,
    pub dialog_visible: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// Remaining time reached zero. The periodic tick must stop.
    Expired,
}

/// What came back from the extend endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtendResult {
    /// 2xx with `success: true`.
    Extended(ExtendedSession),
    /// 2xx with `success: false`.
    Declined,
    /// Non-2xx status, transport failure, or an undecodable body.
    Failed(String),
}

/// Countdown for one mounted session.
///
/// The reference `start_time`/`duration_seconds` are fixed at mount. A
/// successful extension dismisses the dialog but does not move the deadline;
/// the upstream payload is kept in `last_extension` for callers that want to
/// remount with fresh session data.
#[derive(Debug, Clone)]
pub struct Countdown {
    timer: SessionTimer,
    state: CountdownState,
    expired: bool,
    last_extension: Option<ExtendedSession>,
}

impl Countdown {
    pub fn new(timer: SessionTimer) -> Self {
        Self {
            timer,
            state: CountdownState::default(),
            expired: false,
            last_extension: None,
        }
    }

    /// Seeds `time_left` at mount without evaluating the threshold; the
    /// first periodic tick does that.
    pub fn start(&mut self, now: DateTime<Utc>) {
        self.state.time_left = Some(self.timer.remaining_seconds(now));
        debug!(
            session_id = %self.timer.session_id,
            time_left = ?self.state.time_left,
            "Countdown mounted"
        );
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        let remaining = self.timer.remaining_seconds(now);
        self.state.time_left = Some(remaining);

        if remaining > 0 && remaining <= EXTEND_WARNING_THRESHOLD_SECS {
            self.state.dialog_visible = true;
        }

        if remaining <= 0 {
            self.state.dialog_visible = true;
            if !self.expired {
                info!(session_id = %self.timer.session_id, "Session countdown expired");
            }
            self.expired = true;
            return TickOutcome::Expired;
        }

        TickOutcome::Running
    }

    /// "Extend Time" button.
    pub fn open_dialog(&mut self) {
        self.state.dialog_visible = true;
    }

    /// Cancel button. A later tick inside the warning window shows the
    /// dialog again.
    pub fn dismiss(&mut self) {
        self.state.dialog_visible = false;
    }

    pub fn extend_command(&self, option: &ExtendOption) -> ExtendCommand {
        ExtendCommand {
            session_id: self.timer.session_id.clone(),
            seconds: option.seconds,
        }
    }

    pub fn apply_extend_result(&mut self, result: ExtendResult) {
        match result {
            ExtendResult::Extended(session) => {
                info!(session_id = %self.timer.session_id, "Session extended");
                self.state.dialog_visible = false;
                self.last_extension = Some(session);
            }
            ExtendResult::Declined => {
                error!(session_id = %self.timer.session_id, "Extend request declined");
                self.state.error = Some(EXTEND_DECLINED_MESSAGE.to_string());
            }
            ExtendResult::Failed(detail) => {
                error!(session_id = %self.timer.session_id, "Error extending session: {}", detail);
                self.state.error = Some(EXTEND_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn view(&self) -> View {
        if let Some(message) = &self.state.error {
            return View::Error {
                message: message.clone(),
            };
        }

        View::Countdown {
            display: format_time(self.state.time_left),
            dialog: self.state.dialog_visible.then(ExtendDialog::standard),
        }
    }

    pub fn state(&self) -> &CountdownState {
        &self.state
    }

    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn last_extension(&self) -> Option<&ExtendedSession> {
        self.last_extension.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EXTEND_OPTIONS;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    fn at(elapsed: i64) -> DateTime<Utc> {
        start() + Duration::seconds(elapsed)
    }

    fn countdown(duration: i64) -> Countdown {
        Countdown::new(SessionTimer::new("sess-1", start(), duration).unwrap())
    }

    #[test]
    fn test_unset_before_start() {
        let countdown = countdown(300);
        assert_eq!(countdown.state().time_left, None);
        assert_eq!(
            countdown.view(),
            View::Countdown {
                display: "00:00".to_string(),
                dialog: None
            }
        );
    }

    #[test]
    fn test_start_does_not_open_dialog() {
        let mut countdown = countdown(300);
        countdown.start(at(280));
        assert_eq!(countdown.state().time_left, Some(20));
        assert!(!countdown.state().dialog_visible);
    }

    #[test]
    fn test_dialog_opens_inside_warning_window() {
        let mut countdown = countdown(300);
        assert_eq!(countdown.tick(at(100)), TickOutcome::Running);
        assert!(!countdown.state().dialog_visible);

        assert_eq!(countdown.tick(at(240)), TickOutcome::Running);
        assert_eq!(countdown.state().time_left, Some(60));
        assert!(countdown.state().dialog_visible);

        countdown.tick(at(250));
        assert!(countdown.state().dialog_visible);
    }

    #[test]
    fn test_above_threshold_leaves_visibility_alone() {
        let mut countdown = countdown(300);
        countdown.open_dialog();
        countdown.tick(at(10));
        assert!(countdown.state().dialog_visible);
    }

    #[test]
    fn test_dismiss_reopens_on_next_warning_tick() {
        let mut countdown = countdown(300);
        countdown.tick(at(250));
        countdown.dismiss();
        assert!(!countdown.state().dialog_visible);

        countdown.tick(at(251));
        assert!(countdown.state().dialog_visible);
    }

    #[test]
    fn test_dismiss_outside_window_stays_closed() {
        let mut countdown = countdown(300);
        countdown.open_dialog();
        countdown.dismiss();
        countdown.tick(at(30));
        assert!(!countdown.state().dialog_visible);
    }

    #[test]
    fn test_expiry_forces_dialog_and_stops() {
        let mut countdown = countdown(120);
        countdown.dismiss();
        assert_eq!(countdown.tick(at(500)), TickOutcome::Expired);
        assert_eq!(countdown.state().time_left, Some(0));
        assert!(countdown.state().dialog_visible);
        assert!(countdown.is_expired());
    }

    #[test]
    fn test_successful_extend_keeps_reference_deadline() {
        let mut countdown = countdown(300);
        countdown.tick(at(260));
        let command = countdown.extend_command(&EXTEND_OPTIONS[1]);
        assert_eq!(command.session_id, "sess-1");
        assert_eq!(command.seconds, 600);

        countdown.apply_extend_result(ExtendResult::Extended(ExtendedSession {
            session: Some(serde_json::json!({"id": "sess-1", "duration": 900})),
        }));
        assert!(!countdown.state().dialog_visible);
        assert!(countdown.last_extension().is_some());

        countdown.tick(at(261));
        assert_eq!(countdown.state().time_left, Some(39));
    }

    #[test]
    fn test_declined_extend_is_terminal() {
        let mut countdown = countdown(300);
        countdown.tick(at(260));
        countdown.apply_extend_result(ExtendResult::Declined);
        assert_eq!(
            countdown.view(),
            View::Error {
                message: "Failed to extend session".to_string()
            }
        );

        countdown.tick(at(270));
        countdown.dismiss();
        assert!(matches!(countdown.view(), View::Error { .. }));
    }

    #[test]
    fn test_failed_extend_message() {
        let mut countdown = countdown(300);
        countdown.apply_extend_result(ExtendResult::Failed("HTTP 502".to_string()));
        assert_eq!(countdown.state().error.as_deref(), Some("Error extending session"));
    }

    #[test]
    fn test_view_includes_offers_when_dialog_visible() {
        let mut countdown = countdown(300);
        countdown.tick(at(239));
        match countdown.view() {
            View::Countdown { display, dialog } => {
                assert_eq!(display, "01:01");
                assert!(dialog.is_none());
            }
            other => panic!("unexpected view: {:?}", other),
        }

        countdown.tick(at(241));
        match countdown.view() {
            View::Countdown { display, dialog } => {
                assert_eq!(display, "00:59");
                assert_eq!(dialog.unwrap().offers.len(), EXTEND_OPTIONS.len());
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }
}
