use crate::celebration::CelebrationTimer;
use crate::constants::{AUTOPLAY_DEFAULT_MS, AUTOPLAY_MAX_MS, AUTOPLAY_MIN_MS, MONTH_COUNT};

// The twelve-month carousel. Month navigation is circular; autoplay is a
// dt-driven repeating timer that performs the same circular step. Landing
// on month 12 by any path opens the carousel's own confetti window.
pub struct Carousel {
    month: u32,
    autoplay: bool,
    interval_ms: u32,
    timer: f32, // seconds accumulated toward the next autoplay advance
    confetti: CelebrationTimer,
}

impl Carousel {
    pub fn new() -> Self {
        Self {
            month: 1,
            autoplay: false,
            interval_ms: AUTOPLAY_DEFAULT_MS,
            timer: 0.0,
            confetti: CelebrationTimer::new(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn confetti_visible(&self) -> bool {
        self.confetti.is_visible()
    }

    // Manual navigation always cancels autoplay; see DESIGN.md.
    pub fn next(&mut self) {
        self.autoplay = false;
        self.advance();
    }

    pub fn prev(&mut self) {
        self.autoplay = false;
        let month = if self.month == 1 { MONTH_COUNT } else { self.month - 1 };
        self.set_month(month);
    }

    // Direct selection (indicator dots, keyboard). Out-of-range input is
    // clamped rather than rejected.
    pub fn select(&mut self, month: u32) {
        self.autoplay = false;
        self.set_month(month.clamp(1, MONTH_COUNT));
    }

    pub fn toggle_autoplay(&mut self) {
        self.autoplay = !self.autoplay;
        if self.autoplay {
            self.timer = 0.0;
        }
    }

    pub fn set_interval_ms(&mut self, ms: u32) {
        let ms = ms.clamp(AUTOPLAY_MIN_MS, AUTOPLAY_MAX_MS);
        if ms == self.interval_ms {
            return;
        }
        self.interval_ms = ms;
        // A speed change while playing restarts the period; the next advance
        // happens one full (new) interval from now.
        if self.autoplay {
            self.timer = 0.0;
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.autoplay {
            self.timer += dt;
            if self.timer >= self.interval_ms as f32 / 1000.0 {
                self.timer = 0.0;
                self.advance();
            }
        }
        self.confetti.update(dt);
    }

    // Circular step shared by the next button and the autoplay timer. Does
    // not touch the autoplay flag.
    fn advance(&mut self) {
        let month = if self.month == MONTH_COUNT { 1 } else { self.month + 1 };
        self.set_month(month);
    }

    fn set_month(&mut self, month: u32) {
        let reached_last = month == MONTH_COUNT && self.month != MONTH_COUNT;
        self.month = month;
        if reached_last {
            self.confetti.trigger();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_wraps_circularly_in_both_directions() {
        let mut c = Carousel::new();
        assert_eq!(c.month(), 1);

        c.prev();
        assert_eq!(c.month(), 12);
        c.next();
        assert_eq!(c.month(), 1);

        for _ in 0..24 {
            c.next();
            assert!(c.month() >= 1 && c.month() <= 12);
        }
        assert_eq!(c.month(), 1);
    }

    #[test]
    fn select_clamps_out_of_range_months() {
        let mut c = Carousel::new();
        c.select(15);
        assert_eq!(c.month(), 12);
        c.select(0);
        assert_eq!(c.month(), 1);
        c.select(7);
        assert_eq!(c.month(), 7);
    }

    #[test]
    fn manual_navigation_cancels_autoplay() {
        let mut c = Carousel::new();
        c.toggle_autoplay();
        assert!(c.is_autoplaying());
        c.next();
        assert!(!c.is_autoplaying());

        c.toggle_autoplay();
        c.prev();
        assert!(!c.is_autoplaying());

        c.toggle_autoplay();
        c.select(5);
        assert!(!c.is_autoplaying());
    }

    #[test]
    fn autoplay_advances_once_per_interval() {
        let mut c = Carousel::new();
        c.toggle_autoplay();

        // Default interval is 4s; creep up to it without crossing
        c.update(3.9);
        assert_eq!(c.month(), 1);
        c.update(0.2);
        assert_eq!(c.month(), 2);

        // Timer restarts after the advance
        c.update(3.9);
        assert_eq!(c.month(), 2);
        c.update(0.2);
        assert_eq!(c.month(), 3);
    }

    #[test]
    fn toggling_autoplay_off_cancels_the_pending_advance() {
        let mut c = Carousel::new();
        c.toggle_autoplay();
        c.update(3.0);
        c.toggle_autoplay();

        // Well past where the advance would have fired
        c.update(10.0);
        assert_eq!(c.month(), 1);

        // Re-enabling starts a fresh period rather than resuming at 3s
        c.toggle_autoplay();
        c.update(3.9);
        assert_eq!(c.month(), 1);
        c.update(0.2);
        assert_eq!(c.month(), 2);
    }

    #[test]
    fn interval_is_clamped_to_its_bounds() {
        let mut c = Carousel::new();
        c.set_interval_ms(500);
        assert_eq!(c.interval_ms(), 2000);
        c.set_interval_ms(20_000);
        assert_eq!(c.interval_ms(), 8000);
        c.set_interval_ms(3000);
        assert_eq!(c.interval_ms(), 3000);
    }

    #[test]
    fn changing_speed_while_playing_restarts_the_period() {
        let mut c = Carousel::new();
        c.toggle_autoplay();
        c.update(3.5);
        c.set_interval_ms(2000);

        // The old accumulation is discarded: 2s must elapse from the change
        c.update(1.9);
        assert_eq!(c.month(), 1);
        c.update(0.2);
        assert_eq!(c.month(), 2);
    }

    #[test]
    fn reaching_month_twelve_opens_the_confetti_window() {
        let mut c = Carousel::new();
        for _ in 0..11 {
            c.next();
        }
        assert_eq!(c.month(), 12);
        assert!(c.confetti_visible());

        // Clears after five simulated seconds
        c.update(4.9);
        assert!(c.confetti_visible());
        c.update(0.2);
        assert!(!c.confetti_visible());
    }

    #[test]
    fn autoplay_advance_into_month_twelve_also_triggers_confetti() {
        let mut c = Carousel::new();
        c.select(11);
        c.toggle_autoplay();
        c.update(4.0);
        assert_eq!(c.month(), 12);
        assert!(c.is_autoplaying());
        assert!(c.confetti_visible());
    }

    #[test]
    fn staying_on_month_twelve_does_not_retrigger() {
        let mut c = Carousel::new();
        c.select(12);
        assert!(c.confetti_visible());
        c.update(5.1);
        assert!(!c.confetti_visible());

        // Selecting 12 again while already there is not a transition
        c.select(12);
        assert!(!c.confetti_visible());
    }
}
