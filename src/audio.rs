use raylib::prelude::*;

// Playback state for the single looping track. Kept apart from the raylib
// stream so the transitions are testable without an audio device, and so a
// failed device leaves the UI state intact.
pub struct MusicPlayer {
    playing: bool,
    muted: bool,
    volume: f32,
}

impl MusicPlayer {
    pub fn new() -> Self {
        Self { playing: false, muted: false, volume: 0.5 }
    }

    // Play <-> pause. Pausing keeps the stream position, so the next toggle
    // resumes where the track stopped.
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    // What actually reaches the speakers: a muted track renders silent but
    // remembers its volume for when it is unmuted.
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }
}

// Owns the looping raylib stream and applies the player state to it once
// per frame. Music streams loop by default, so a started track keeps going
// until it is paused here.
pub struct MusicDeck<'aud> {
    music: Music<'aud>,
    started: bool,
}

impl<'aud> MusicDeck<'aud> {
    pub fn new(music: Music<'aud>) -> Self {
        Self { music, started: false }
    }

    pub fn sync(&mut self, player: &MusicPlayer) {
        self.music.set_volume(player.effective_volume());

        if player.is_playing() {
            if !self.started {
                self.music.play_stream();
                self.started = true;
            } else if !self.music.is_stream_playing() {
                self.music.resume_stream();
            }
            // Streams only advance while fed
            self.music.update_stream();
        } else if self.started && self.music.is_stream_playing() {
            self.music.pause_stream();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventBus, Signal};

    #[test]
    fn toggle_twice_returns_to_stopped() {
        let mut player = MusicPlayer::new();
        assert!(!player.is_playing());
        player.toggle();
        assert!(player.is_playing());
        player.toggle();
        assert!(!player.is_playing());
    }

    #[test]
    fn volume_clamps_and_persists_through_mute() {
        let mut player = MusicPlayer::new();
        player.set_volume(1.5);
        assert_eq!(player.volume(), 1.0);
        player.set_volume(-0.2);
        assert_eq!(player.volume(), 0.0);

        player.set_volume(0.7);
        player.set_muted(true);
        assert_eq!(player.effective_volume(), 0.0);
        assert_eq!(player.volume(), 0.7);
        player.set_muted(false);
        assert_eq!(player.effective_volume(), 0.7);
    }

    #[test]
    fn broadcast_while_stopped_starts_playback() {
        // The wiring the main loop uses: the player drains its subscription
        // and toggles once per signal.
        let mut bus = EventBus::new();
        let sub = bus.subscribe();
        let mut player = MusicPlayer::new();

        bus.broadcast(Signal::ToggleMusic);
        while let Some(Signal::ToggleMusic) = sub.try_next() {
            player.toggle();
        }

        assert!(player.is_playing());
    }
}
