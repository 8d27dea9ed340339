use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;

mod audio;
mod carousel;
mod celebration;
mod confetti;
mod constants;
mod events;
mod gallery;
mod texture_loader;
mod ui;

use crate::audio::{MusicDeck, MusicPlayer};
use crate::carousel::Carousel;
use crate::celebration::{CelebrationTimer, celebrate};
use crate::confetti::field::ConfettiField;
use crate::constants::*;
use crate::events::{EventBus, Signal};
use crate::gallery::MonthGallery;
use crate::ui::{Action, Layout};

#[derive(Parser)]
#[command(
    name = "birthday-card",
    about = "A twelve-month birthday card: photo carousel, music and confetti"
)]
struct Args {
    /// Directory containing month1.jpg .. month12.jpg
    photos: PathBuf,

    /// Background track, looped while playing (mp3/ogg/wav)
    #[arg(long)]
    music: Option<PathBuf>,

    /// Name shown in the card title
    #[arg(long, default_value = "Little One")]
    name: String,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(&format!("{}'s 1st Birthday!", args.name))
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let gallery = MonthGallery::load(&mut rl, &thread, &args.photos);
    println!(
        "Loaded photos for {} of {} months from {}",
        gallery.available_months(),
        MONTH_COUNT,
        args.photos.display()
    );

    // Audio is best-effort: a missing device or track leaves a silent card
    // whose play/pause state still works.
    let audio = match RaylibAudio::init_audio_device() {
        Ok(audio) => Some(audio),
        Err(e) => {
            eprintln!("Warning: audio device unavailable: {e}");
            None
        }
    };
    let mut deck = match (&audio, &args.music) {
        (Some(audio), Some(path)) => match audio.new_music(&path.to_string_lossy()) {
            Ok(music) => Some(MusicDeck::new(music)),
            Err(e) => {
                eprintln!("Warning: could not load music {}: {e}", path.display());
                None
            }
        },
        _ => None,
    };

    let mut bus = EventBus::new();
    // The player's subscription lives for the whole window lifetime and is
    // dropped with everything else on teardown.
    let music_signals = bus.subscribe();

    let mut carousel = Carousel::new();
    let mut player = MusicPlayer::new();
    let mut party = CelebrationTimer::new(); // the Celebrate! button's own window
    let mut overlay: Option<ConfettiField> = None;

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let screen_w = rl.get_screen_width() as f32;
        let screen_h = rl.get_screen_height() as f32;
        let layout = Layout::compute(screen_w, screen_h);

        // --- Input ---
        for action in ui::gather_actions(&rl, &layout, &carousel) {
            match action {
                Action::PrevMonth => carousel.prev(),
                Action::NextMonth => carousel.next(),
                Action::SelectMonth(month) => carousel.select(month),
                Action::ToggleAutoplay => carousel.toggle_autoplay(),
                Action::SetIntervalMs(ms) => carousel.set_interval_ms(ms),
                Action::Celebrate => celebrate(&mut party, &mut bus),
                Action::ToggleMusic => bus.broadcast(Signal::ToggleMusic),
                Action::TogglePlayback => player.toggle(),
                Action::ToggleMute => player.set_muted(!player.is_muted()),
                Action::SetVolume(volume) => player.set_volume(volume),
            }
        }

        // --- Update ---
        carousel.update(dt);
        party.update(dt);

        while let Some(signal) = music_signals.try_next() {
            match signal {
                Signal::ToggleMusic => player.toggle(),
            }
        }

        if let Some(deck) = deck.as_mut() {
            deck.sync(&player);
        }

        // Mount the confetti overlay while either window is open (the
        // month-12 one or the Celebrate! one); dropping it cancels all
        // per-frame particle work.
        if carousel.confetti_visible() || party.is_visible() {
            let field = overlay.get_or_insert_with(|| ConfettiField::new(screen_w, screen_h));
            if rl.is_window_resized() {
                field.resize(screen_w, screen_h);
            }
            field.tick();
        } else {
            overlay = None;
        }

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        ui::draw_card(&mut d, &layout, &gallery, &carousel, &player, &args.name);
        if let Some(field) = &overlay {
            field.draw(&mut d);
        }
    }

    Ok(())
}
