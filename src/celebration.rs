use crate::constants::CONFETTI_DURATION;
use crate::events::{EventBus, Signal};

// One-shot visibility window for the confetti overlay. Retriggering rearms
// the full window from the new trigger instead of stacking a second one.
pub struct CelebrationTimer {
    remaining: f32,
}

impl CelebrationTimer {
    pub fn new() -> Self {
        Self { remaining: 0.0 }
    }

    pub fn trigger(&mut self) {
        self.remaining = CONFETTI_DURATION;
    }

    pub fn update(&mut self, dt: f32) {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.remaining > 0.0
    }
}

// The Celebrate! action: confetti now, and ask whoever owns the music
// to toggle playback.
pub fn celebrate(confetti: &mut CelebrationTimer, bus: &mut EventBus) {
    confetti.trigger();
    bus.broadcast(Signal::ToggleMusic);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_opens_a_five_second_window() {
        let mut timer = CelebrationTimer::new();
        assert!(!timer.is_visible());

        timer.trigger();
        assert!(timer.is_visible());

        timer.update(4.9);
        assert!(timer.is_visible());
        timer.update(0.2);
        assert!(!timer.is_visible());
    }

    #[test]
    fn retrigger_extends_instead_of_stacking() {
        let mut timer = CelebrationTimer::new();
        timer.trigger();
        timer.update(3.0);

        // Retrigger at t = 3s: the window now ends 5s from here, not 7s
        // from the first trigger.
        timer.trigger();
        timer.update(4.9);
        assert!(timer.is_visible());
        timer.update(0.2);
        assert!(!timer.is_visible());
    }

    #[test]
    fn celebrate_broadcasts_the_music_toggle() {
        let mut bus = EventBus::new();
        let sub = bus.subscribe();
        let mut timer = CelebrationTimer::new();

        celebrate(&mut timer, &mut bus);

        assert!(timer.is_visible());
        assert_eq!(sub.try_next(), Some(Signal::ToggleMusic));
    }
}
