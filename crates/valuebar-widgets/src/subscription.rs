//! Frame clock for running bar animations
//!
//! # Usage
//!
//! ```ignore
//! fn subscription(&self) -> Subscription<Message> {
//!     let animating = self.bars.iter().any(ValueBar::is_animating);
//!     animation_frames(animating).map(Message::Tick)
//! }
//! ```

use std::time::Duration;

use iced::time::{self, Instant};
use iced::Subscription;

/// Interval between animation frames (~60 fps)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Emit frame instants while `active`, nothing otherwise
///
/// Idle bars cost no wakeups; the subscription starts again as soon as an
/// animation does.
pub fn animation_frames(active: bool) -> Subscription<Instant> {
    if active {
        time::every(FRAME_INTERVAL)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval_is_about_60fps() {
        let fps = 1.0 / FRAME_INTERVAL.as_secs_f32();
        assert!((55.0..=65.0).contains(&fps));
    }
}
