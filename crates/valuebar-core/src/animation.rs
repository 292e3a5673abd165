//! Time-driven value transitions
//!
//! The controller is a small state machine (`Idle → Running → Idle`) that
//! the host polls once per frame with the current timestamp. A new session
//! always replaces the running one; there is no queue.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use valuebar_core::animation::{AnimationController, TickStatus};
//!
//! let start = Instant::now();
//! let mut controller = AnimationController::default();
//! controller.start(0.0, 900.0, Duration::from_millis(1500), start);
//!
//! let (value, status) = controller
//!     .tick(start + Duration::from_millis(1500))
//!     .unwrap();
//! assert_eq!(value, 900.0);
//! assert_eq!(status, TickStatus::Finished);
//! ```

use std::f32::consts::PI;
use std::time::{Duration, Instant};

/// Accelerate/decelerate curve: `(cos((t + 1)π) / 2) + 0.5`
///
/// Zero velocity at `t = 0` and `t = 1`, strictly increasing in between.
/// Input is clamped to `0.0..=1.0`.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

/// Which `animate*` entry point started a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationMode {
    /// Explicit `from → to`
    Explicit,
    /// From the range minimum up to a target
    Up,
    /// From the current value down to a target
    Down,
}

/// One running transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSession {
    pub mode: AnimationMode,
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub started_at: Instant,
}

impl AnimationSession {
    /// Linear progress (`0.0..=1.0`) at `now`
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the session has run its full duration at `now`
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    /// Interpolated value at `now`; exactly `to` once complete
    pub fn value_at(&self, now: Instant) -> f32 {
        if self.is_complete(now) {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out(self.progress(now))
    }
}

/// Result of a frame tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    /// Session still in progress, schedule another frame
    Running,
    /// Session reached its target on this tick
    Finished,
}

/// Owns at most one [`AnimationSession`]
#[derive(Debug, Clone, Default)]
pub struct AnimationController {
    session: Option<AnimationSession>,
}

impl AnimationController {
    /// Whether a session is running
    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// The running session, if any
    pub fn session(&self) -> Option<&AnimationSession> {
        self.session.as_ref()
    }

    /// Drop the running session without finishing it
    ///
    /// Returns `true` if a session was running.
    pub fn cancel(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                log::debug!(
                    "cancel: dropping {:?} session {} -> {}",
                    session.mode,
                    session.from,
                    session.to
                );
                true
            }
            None => false,
        }
    }

    /// Start an explicit `from → to` session, replacing any running one
    pub fn start(&mut self, from: f32, to: f32, duration: Duration, now: Instant) {
        self.start_mode(AnimationMode::Explicit, from, to, duration, now);
    }

    /// Start a session tagged with the entry point that created it
    pub fn start_mode(
        &mut self,
        mode: AnimationMode,
        from: f32,
        to: f32,
        duration: Duration,
        now: Instant,
    ) {
        if let Some(previous) = self.session.take() {
            log::debug!(
                "start: superseding {:?} session {} -> {}",
                previous.mode,
                previous.from,
                previous.to
            );
        }
        self.session = Some(AnimationSession {
            mode,
            from,
            to,
            duration,
            started_at: now,
        });
    }

    /// Advance the running session to `now`
    ///
    /// Returns the value to display and whether the session is still
    /// running, or `None` when idle. The final tick yields exactly `to`
    /// and drops the session.
    pub fn tick(&mut self, now: Instant) -> Option<(f32, TickStatus)> {
        let session = self.session?;
        let value = session.value_at(now);

        if session.is_complete(now) {
            self.session = None;
            Some((value, TickStatus::Finished))
        } else {
            Some((value, TickStatus::Running))
        }
    }
}
