//! Panel open/close lifecycle with animation gating

use std::time::{Duration, Instant};
use tokio::sync::oneshot;

/// Lifecycle phase of one panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Not shown, nothing retained
    #[default]
    Closed,
    /// Entrance animation running
    Opening,
    /// Fully visible and interactive
    Open,
    /// Exit animation running
    Closing,
}

impl PanelState {
    /// Every state except Closed has an on-screen representation
    pub fn is_visible(self) -> bool {
        self != PanelState::Closed
    }

    pub fn is_animating(self) -> bool {
        matches!(self, PanelState::Opening | PanelState::Closing)
    }
}

/// Drives a panel through Closed → Opening → Open → Closing → Closed.
///
/// Animation completion is internal: `tick` moves Opening to Open and Closing
/// to Closed once the configured duration has elapsed. A close request during
/// Opening starts a full exit animation rather than snapping shut.
#[derive(Debug)]
pub struct PanelTransitionController {
    state: PanelState,
    /// When the running animation started
    phase_started: Option<Instant>,
    open_duration: Duration,
    close_duration: Duration,
    /// Eased visibility in [0, 1], refreshed on every tick
    progress: f32,
    /// Visibility when the exit animation began
    exit_from: f32,
    on_closed: Option<oneshot::Sender<()>>,
}

impl PanelTransitionController {
    pub fn new(open_duration: Duration, close_duration: Duration) -> Self {
        Self {
            state: PanelState::Closed,
            phase_started: None,
            open_duration,
            close_duration,
            progress: 0.0,
            exit_from: 0.0,
            on_closed: None,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Receive a one-shot notification when this panel next reaches Closed.
    /// Replaces any earlier subscriber.
    pub fn subscribe_closed(&mut self) -> oneshot::Receiver<()> {
        let (tx, rx) = oneshot::channel();
        self.on_closed = Some(tx);
        rx
    }

    /// Start the entrance animation. Only honored from Closed.
    pub fn request_open(&mut self, now: Instant) -> bool {
        if self.state != PanelState::Closed {
            return false;
        }
        self.enter(PanelState::Opening, Some(now));
        self.progress = 0.0;
        true
    }

    /// Start the exit animation from wherever the panel currently is
    pub fn request_close(&mut self, now: Instant) -> bool {
        match self.state {
            PanelState::Opening | PanelState::Open => {
                self.exit_from = self.progress;
                self.enter(PanelState::Closing, Some(now));
                true
            }
            PanelState::Closing | PanelState::Closed => false,
        }
    }

    /// Advance animations. Returns the new state if a transition happened.
    pub fn tick(&mut self, now: Instant) -> Option<PanelState> {
        let started = self.phase_started?;
        let elapsed = now.saturating_duration_since(started);

        match self.state {
            PanelState::Opening => {
                if elapsed >= self.open_duration {
                    self.progress = 1.0;
                    self.enter(PanelState::Open, None);
                    return Some(PanelState::Open);
                }
                self.progress = simple_easing::cubic_out(ratio(elapsed, self.open_duration));
            }
            PanelState::Closing => {
                if elapsed >= self.close_duration {
                    self.progress = 0.0;
                    self.enter(PanelState::Closed, None);
                    if let Some(tx) = self.on_closed.take() {
                        // Receiver may already be gone; nothing to do then
                        let _ = tx.send(());
                    }
                    return Some(PanelState::Closed);
                }
                self.progress = self.exit_from
                    * (1.0 - simple_easing::cubic_in(ratio(elapsed, self.close_duration)));
            }
            PanelState::Open | PanelState::Closed => {}
        }
        None
    }

    fn enter(&mut self, state: PanelState, started: Option<Instant>) {
        tracing::debug!("panel transition {:?} -> {:?}", self.state, state);
        self.state = state;
        self.phase_started = started;
    }
}

fn ratio(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: Duration = Duration::from_millis(200);
    const CLOSE: Duration = Duration::from_millis(150);

    fn controller() -> PanelTransitionController {
        PanelTransitionController::new(OPEN, CLOSE)
    }

    mod panel_state {
        use super::*;

        #[test]
        fn test_default_is_closed() {
            assert_eq!(PanelState::default(), PanelState::Closed);
        }

        #[test]
        fn test_only_closed_is_invisible() {
            assert!(!PanelState::Closed.is_visible());
            assert!(PanelState::Opening.is_visible());
            assert!(PanelState::Open.is_visible());
            assert!(PanelState::Closing.is_visible());
        }
    }

    mod transitions {
        use super::*;

        #[test]
        fn test_full_cycle() {
            let t0 = Instant::now();
            let mut panel = controller();
            assert!(panel.request_open(t0));
            assert_eq!(panel.state(), PanelState::Opening);

            assert_eq!(panel.tick(t0 + OPEN / 2), None);
            assert_eq!(panel.state(), PanelState::Opening);
            assert!(panel.progress() > 0.0 && panel.progress() < 1.0);

            assert_eq!(panel.tick(t0 + OPEN), Some(PanelState::Open));
            assert_eq!(panel.progress(), 1.0);

            let t1 = t0 + OPEN + Duration::from_millis(500);
            assert!(panel.request_close(t1));
            assert_eq!(panel.state(), PanelState::Closing);
            assert_eq!(panel.tick(t1 + CLOSE), Some(PanelState::Closed));
            assert_eq!(panel.progress(), 0.0);
        }

        #[test]
        fn test_close_during_opening_runs_full_exit() {
            let t0 = Instant::now();
            let mut panel = controller();
            panel.request_open(t0);
            panel.tick(t0 + Duration::from_millis(50));

            let t1 = t0 + Duration::from_millis(60);
            assert!(panel.request_close(t1));
            assert_eq!(panel.state(), PanelState::Closing);

            // Entrance would have finished here; the exit must still be running
            assert_eq!(panel.tick(t0 + OPEN), None);
            assert_eq!(panel.tick(t1 + CLOSE - Duration::from_millis(1)), None);
            assert_eq!(panel.state(), PanelState::Closing);

            assert_eq!(panel.tick(t1 + CLOSE), Some(PanelState::Closed));
        }

        #[test]
        fn test_close_during_opening_never_grows() {
            let t0 = Instant::now();
            let mut panel = controller();
            panel.request_open(t0);
            panel.tick(t0 + Duration::from_millis(20));
            let at_close = panel.progress();
            assert!(at_close > 0.0 && at_close < 0.5);

            let t1 = t0 + Duration::from_millis(21);
            panel.request_close(t1);
            let mut last = at_close;
            for ms in 1..CLOSE.as_millis() as u64 {
                panel.tick(t1 + Duration::from_millis(ms));
                assert!(panel.progress() <= last);
                last = panel.progress();
            }
            assert_eq!(panel.tick(t1 + CLOSE), Some(PanelState::Closed));
            assert_eq!(panel.progress(), 0.0);
        }

        #[test]
        fn test_close_from_open_starts_fully_visible() {
            let t0 = Instant::now();
            let mut panel = controller();
            panel.request_open(t0);
            panel.tick(t0 + OPEN);
            panel.request_close(t0 + OPEN);
            panel.tick(t0 + OPEN + CLOSE / 2);
            let halfway = 1.0 - simple_easing::cubic_in(0.5);
            assert!((panel.progress() - halfway).abs() < 1e-6);
        }

        #[test]
        fn test_close_while_closing_is_noop() {
            let t0 = Instant::now();
            let mut panel = controller();
            panel.request_open(t0);
            panel.tick(t0 + OPEN);
            let t1 = t0 + OPEN;
            panel.request_close(t1);

            // A second close must not restart the exit animation
            assert!(!panel.request_close(t1 + Duration::from_millis(100)));
            assert_eq!(panel.tick(t1 + CLOSE), Some(PanelState::Closed));
        }

        #[test]
        fn test_close_when_closed_is_noop() {
            let mut panel = controller();
            assert!(!panel.request_close(Instant::now()));
            assert_eq!(panel.state(), PanelState::Closed);
        }

        #[test]
        fn test_open_only_from_closed() {
            let t0 = Instant::now();
            let mut panel = controller();
            assert!(panel.request_open(t0));
            assert!(!panel.request_open(t0));
            panel.tick(t0 + OPEN);
            assert!(!panel.request_open(t0 + OPEN));
            panel.request_close(t0 + OPEN);
            assert!(!panel.request_open(t0 + OPEN));
            assert_eq!(panel.state(), PanelState::Closing);
        }

        #[test]
        fn test_reopen_after_closed() {
            let t0 = Instant::now();
            let mut panel = controller();
            panel.request_open(t0);
            panel.request_close(t0);
            panel.tick(t0 + CLOSE);
            assert_eq!(panel.state(), PanelState::Closed);
            assert!(panel.request_open(t0 + CLOSE));
            assert_eq!(panel.state(), PanelState::Opening);
        }

        #[test]
        fn test_tick_when_idle_does_nothing() {
            let mut panel = controller();
            assert_eq!(panel.tick(Instant::now()), None);
            assert_eq!(panel.state(), PanelState::Closed);
        }
    }

    mod notification {
        use super::*;

        #[test]
        fn test_closed_fires_once() {
            let t0 = Instant::now();
            let mut panel = controller();
            let mut rx = panel.subscribe_closed();
            panel.request_open(t0);
            panel.tick(t0 + OPEN);
            assert!(rx.try_recv().is_err());

            panel.request_close(t0 + OPEN);
            panel.tick(t0 + OPEN + CLOSE);
            assert!(rx.try_recv().is_ok());
        }

        #[test]
        fn test_dropped_receiver_is_harmless() {
            let t0 = Instant::now();
            let mut panel = controller();
            drop(panel.subscribe_closed());
            panel.request_open(t0);
            panel.request_close(t0);
            assert_eq!(panel.tick(t0 + CLOSE), Some(PanelState::Closed));
        }

        #[test]
        fn test_closed_receiver_resolves_as_future() {
            let t0 = Instant::now();
            let mut panel = controller();
            let rx = panel.subscribe_closed();
            panel.request_open(t0);
            panel.request_close(t0);
            panel.tick(t0 + CLOSE);
            assert!(tokio_test::block_on(rx).is_ok());
        }
    }

    #[test]
    fn test_zero_durations_complete_on_next_tick() {
        let t0 = Instant::now();
        let mut panel = PanelTransitionController::new(Duration::ZERO, Duration::ZERO);
        panel.request_open(t0);
        assert_eq!(panel.tick(t0), Some(PanelState::Open));
        panel.request_close(t0);
        assert_eq!(panel.tick(t0), Some(PanelState::Closed));
    }
}
