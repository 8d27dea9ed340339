use raylib::prelude::*;

use crate::audio::MusicPlayer;
use crate::carousel::Carousel;
use crate::constants::{AUTOPLAY_MAX_MS, AUTOPLAY_MIN_MS, AUTOPLAY_STEP_MS, MONTH_COUNT};
use crate::gallery::MonthGallery;

// Page and card colors, lifted from the web original's stylesheet
const PAGE_TOP: Color = Color::new(239, 246, 255, 255);
const PAGE_BOTTOM: Color = Color::new(240, 253, 244, 255);
const CARD_WHITE: Color = Color::new(255, 255, 255, 255);
const CARD_BORDER: Color = Color::new(147, 197, 253, 255);
const ACCENT_BLUE: Color = Color::new(59, 130, 246, 255);
const ACCENT_LIGHT: Color = Color::new(219, 234, 254, 255);
const PHOTO_BORDER: Color = Color::new(191, 219, 254, 255);
const PHOTO_BG: Color = Color::new(249, 250, 251, 255);
const DOT_GRAY: Color = Color::new(209, 213, 219, 255);
const TEXT_MUTED: Color = Color::new(107, 114, 128, 255);
const PLACEHOLDER_BLUE: Color = Color::new(144, 205, 244, 255);

// Everything the user can ask for in one frame. Input gathering and state
// mutation stay separate so the main loop owns all the wiring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    PrevMonth,
    NextMonth,
    SelectMonth(u32),
    ToggleAutoplay,
    SetIntervalMs(u32),
    Celebrate,
    ToggleMusic,   // broadcast: the card's Play Music button, the M key
    TogglePlayback, // direct: the audio widget's own button
    ToggleMute,
    SetVolume(f32),
}

// Hit zones for one frame, recomputed per frame so window resizes are free.
pub struct Layout {
    pub card: Rectangle,
    pub header_y: f32,
    pub photo: Rectangle,
    pub dots: [Rectangle; MONTH_COUNT as usize],
    pub prev_button: Rectangle,
    pub next_button: Rectangle,
    pub celebrate_button: Rectangle,
    pub music_button: Rectangle,
    pub autoplay_button: Rectangle,
    pub speed_slider: Rectangle,
    pub player_panel: Rectangle,
    pub player_toggle: Rectangle,
    pub mute_button: Rectangle,
    pub volume_slider: Rectangle,
}

impl Layout {
    pub fn compute(screen_w: f32, screen_h: f32) -> Self {
        let card_w = (screen_w - 80.0).clamp(320.0, 760.0);
        let pad = 24.0;
        let card_x = ((screen_w - card_w) / 2.0).max(0.0);
        let card_y = 92.0;
        let inner_x = card_x + pad;
        let inner_w = card_w - 2.0 * pad;

        let header_y = card_y + pad;
        // 16:9 when there is room, shorter on squat windows so the controls
        // stay visible
        let photo_h = (inner_w * 9.0 / 16.0).min((screen_h - 320.0).max(180.0));
        let photo = Rectangle::new(inner_x, header_y + 40.0, inner_w, photo_h);

        // Indicator dots, right-aligned with the header text
        let dot_step = 18.0;
        let dots_right = inner_x + inner_w;
        let dots = std::array::from_fn(|i| {
            let x = dots_right - (MONTH_COUNT as usize - i) as f32 * dot_step;
            Rectangle::new(x, header_y + 8.0, 14.0, 14.0)
        });

        let nav_y = photo.y + photo.height + 12.0;
        let prev_button = Rectangle::new(inner_x, nav_y, 44.0, 36.0);
        let next_button = Rectangle::new(inner_x + inner_w - 44.0, nav_y, 44.0, 36.0);

        let action_w = 150.0;
        let gap = 14.0;
        let action_y = nav_y + 48.0;
        let action_x = inner_x + (inner_w - (3.0 * action_w + 2.0 * gap)) / 2.0;
        let celebrate_button = Rectangle::new(action_x, action_y, action_w, 36.0);
        let music_button = Rectangle::new(action_x + action_w + gap, action_y, action_w, 36.0);
        let autoplay_button = Rectangle::new(action_x + 2.0 * (action_w + gap), action_y, action_w, 36.0);

        let slider_w = 220.0;
        let speed_slider =
            Rectangle::new(inner_x + (inner_w - slider_w) / 2.0, action_y + 52.0, slider_w, 10.0);

        // Room is reserved for the slider row even while it is hidden, so the
        // card doesn't jump when autoplay toggles
        let card_h = speed_slider.y + speed_slider.height + pad - card_y;
        let card = Rectangle::new(card_x, card_y, card_w, card_h);

        // Audio widget, pinned to the bottom-right corner of the window
        let player_panel = Rectangle::new(screen_w - 280.0, screen_h - 68.0, 264.0, 52.0);
        let player_toggle = Rectangle::new(player_panel.x + 8.0, player_panel.y + 8.0, 36.0, 36.0);
        let mute_button = Rectangle::new(player_panel.x + 52.0, player_panel.y + 14.0, 56.0, 24.0);
        let volume_slider = Rectangle::new(player_panel.x + 120.0, player_panel.y + 22.0, 128.0, 8.0);

        Self {
            card,
            header_y,
            photo,
            dots,
            prev_button,
            next_button,
            celebrate_button,
            music_button,
            autoplay_button,
            speed_slider,
            player_panel,
            player_toggle,
            mute_button,
            volume_slider,
        }
    }
}

pub fn gather_actions(rl: &RaylibHandle, layout: &Layout, carousel: &Carousel) -> Vec<Action> {
    let mut actions = Vec::new();

    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        actions.push(Action::PrevMonth);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        actions.push(Action::NextMonth);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        actions.push(Action::ToggleAutoplay);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_C) {
        actions.push(Action::Celebrate);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_M) {
        actions.push(Action::ToggleMusic);
    }

    let mouse = rl.get_mouse_position();
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        if layout.prev_button.check_collision_point_rec(mouse) {
            actions.push(Action::PrevMonth);
        }
        if layout.next_button.check_collision_point_rec(mouse) {
            actions.push(Action::NextMonth);
        }
        if layout.celebrate_button.check_collision_point_rec(mouse) {
            actions.push(Action::Celebrate);
        }
        if layout.music_button.check_collision_point_rec(mouse) {
            actions.push(Action::ToggleMusic);
        }
        if layout.autoplay_button.check_collision_point_rec(mouse) {
            actions.push(Action::ToggleAutoplay);
        }
        if layout.player_toggle.check_collision_point_rec(mouse) {
            actions.push(Action::TogglePlayback);
        }
        if layout.mute_button.check_collision_point_rec(mouse) {
            actions.push(Action::ToggleMute);
        }
        for (i, dot) in layout.dots.iter().enumerate() {
            if dot.check_collision_point_rec(mouse) {
                actions.push(Action::SelectMonth(i as u32 + 1));
            }
        }
    }

    // Sliders track while the button stays held
    if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
        if carousel.is_autoplaying() && grown(&layout.speed_slider, 6.0).check_collision_point_rec(mouse) {
            actions.push(Action::SetIntervalMs(interval_from_fraction(slider_fraction(
                &layout.speed_slider,
                mouse.x,
            ))));
        }
        if grown(&layout.volume_slider, 6.0).check_collision_point_rec(mouse) {
            actions.push(Action::SetVolume(slider_fraction(&layout.volume_slider, mouse.x)));
        }
    }

    actions
}

// A thin slider track is hard to hit; grow the zone a little in every direction.
fn grown(rec: &Rectangle, by: f32) -> Rectangle {
    Rectangle::new(rec.x - by, rec.y - by, rec.width + 2.0 * by, rec.height + 2.0 * by)
}

fn slider_fraction(track: &Rectangle, x: f32) -> f32 {
    ((x - track.x) / track.width).clamp(0.0, 1.0)
}

// Map a track fraction onto the autoplay range, snapped to whole steps.
fn interval_from_fraction(t: f32) -> u32 {
    let span = (AUTOPLAY_MAX_MS - AUTOPLAY_MIN_MS) as f32;
    let raw = AUTOPLAY_MIN_MS as f32 + t * span;
    let step = AUTOPLAY_STEP_MS as f32;
    ((raw / step).round() * step) as u32
}

fn fraction_for_interval(ms: u32) -> f32 {
    (ms - AUTOPLAY_MIN_MS) as f32 / (AUTOPLAY_MAX_MS - AUTOPLAY_MIN_MS) as f32
}

pub fn draw_card(
    d: &mut RaylibDrawHandle,
    layout: &Layout,
    gallery: &MonthGallery,
    carousel: &Carousel,
    player: &MusicPlayer,
    name: &str,
) {
    let sw = d.get_screen_width();
    let sh = d.get_screen_height();

    d.clear_background(PAGE_TOP);
    d.draw_rectangle_gradient_v(0, 0, sw, sh, PAGE_TOP, PAGE_BOTTOM);

    // Title block
    let title = format!("{name}'s 1st Birthday!");
    let width = measure_text(&title, 44);
    d.draw_text(&title, (sw - width) / 2, 16, 44, ACCENT_BLUE);
    let subtitle = "A year of wonderful memories";
    let width = measure_text(subtitle, 20);
    d.draw_text(subtitle, (sw - width) / 2, 62, 20, TEXT_MUTED);

    // Card body over a slightly larger border rectangle
    let border = grown(&layout.card, 4.0);
    d.draw_rectangle_rounded(border, 0.08, 12, CARD_BORDER);
    d.draw_rectangle_rounded(layout.card, 0.08, 12, CARD_WHITE);

    // Header: month label left, indicator dots right
    let month = carousel.month();
    d.draw_text(
        &format!("Month {month}"),
        layout.photo.x as i32,
        layout.header_y as i32,
        28,
        ACCENT_BLUE,
    );
    for (i, dot) in layout.dots.iter().enumerate() {
        let center = Vector2::new(dot.x + dot.width / 2.0, dot.y + dot.height / 2.0);
        if i as u32 + 1 == month {
            d.draw_circle_v(center, 7.0, ACCENT_BLUE);
        } else {
            d.draw_circle_v(center, 5.0, DOT_GRAY);
        }
    }

    draw_photo(d, layout, gallery, month);

    // Prev / next
    draw_button(d, &layout.prev_button, "<", CARD_WHITE, ACCENT_BLUE);
    draw_button(d, &layout.next_button, ">", CARD_WHITE, ACCENT_BLUE);

    // Action row
    draw_button(d, &layout.celebrate_button, "Celebrate!", ACCENT_BLUE, CARD_WHITE);
    draw_button(d, &layout.music_button, "Play Music", CARD_WHITE, ACCENT_BLUE);
    let (autoplay_fill, autoplay_label) = if carousel.is_autoplaying() {
        (ACCENT_LIGHT, "Pause Slideshow")
    } else {
        (CARD_WHITE, "Auto Play")
    };
    draw_button(d, &layout.autoplay_button, autoplay_label, autoplay_fill, ACCENT_BLUE);

    if carousel.is_autoplaying() {
        draw_speed_slider(d, layout, carousel);
    }

    draw_player_panel(d, layout, player);
}

fn draw_photo(d: &mut RaylibDrawHandle, layout: &Layout, gallery: &MonthGallery, month: u32) {
    let photo = &layout.photo;
    d.draw_rectangle_lines_ex(grown(photo, 3.0), 3.0, PHOTO_BORDER);
    d.draw_rectangle_rec(*photo, PHOTO_BG);

    match gallery.texture(month) {
        Some(texture) => {
            // object-contain: fit inside the frame, centered, no cropping
            let tex_w = texture.width() as f32;
            let tex_h = texture.height() as f32;
            let scale = (photo.width / tex_w).min(photo.height / tex_h);
            let dest = Rectangle::new(
                photo.x + (photo.width - tex_w * scale) / 2.0,
                photo.y + (photo.height - tex_h * scale) / 2.0,
                tex_w * scale,
                tex_h * scale,
            );
            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, tex_w, tex_h),
                dest,
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );
        }
        None => draw_placeholder(d, photo, month),
    }

    // Caption over a bottom gradient
    let bar_h = 60.0;
    d.draw_rectangle_gradient_v(
        photo.x as i32,
        (photo.y + photo.height - bar_h) as i32,
        photo.width as i32,
        bar_h as i32,
        Color::new(0, 0, 0, 0),
        Color::new(0, 0, 0, 178),
    );
    d.draw_text(
        MonthGallery::caption(month),
        (photo.x + 12.0) as i32,
        (photo.y + photo.height - 26.0) as i32,
        16,
        Color::WHITE,
    );

    // Month badge in the top-right corner
    let badge = Vector2::new(photo.x + photo.width - 24.0, photo.y + 24.0);
    d.draw_circle_v(badge, 16.0, ACCENT_BLUE);
    let label = month.to_string();
    let width = measure_text(&label, 20);
    d.draw_text(&label, badge.x as i32 - width / 2, badge.y as i32 - 10, 20, Color::WHITE);
}

// The "coming soon" slide for months past the available photos.
fn draw_placeholder(d: &mut RaylibDrawHandle, photo: &Rectangle, month: u32) {
    let number = month.to_string();
    let width = measure_text(&number, 96);
    d.draw_text(
        &number,
        (photo.x + photo.width / 2.0) as i32 - width / 2,
        (photo.y + photo.height / 2.0) as i32 - 72,
        96,
        PLACEHOLDER_BLUE,
    );
    let caption = format!("Month {month} photo coming soon!");
    let width = measure_text(&caption, 20);
    d.draw_text(
        &caption,
        (photo.x + photo.width / 2.0) as i32 - width / 2,
        (photo.y + photo.height / 2.0) as i32 + 36,
        20,
        TEXT_MUTED,
    );
}

fn draw_speed_slider(d: &mut RaylibDrawHandle, layout: &Layout, carousel: &Carousel) {
    let track = &layout.speed_slider;
    d.draw_text("Speed:", track.x as i32 - 70, track.y as i32 - 4, 18, TEXT_MUTED);
    draw_slider(d, track, fraction_for_interval(carousel.interval_ms()));
    let label = format!("{}s", carousel.interval_ms() / 1000);
    d.draw_text(&label, (track.x + track.width + 12.0) as i32, track.y as i32 - 4, 18, TEXT_MUTED);
}

fn draw_player_panel(d: &mut RaylibDrawHandle, layout: &Layout, player: &MusicPlayer) {
    d.draw_rectangle_rounded(layout.player_panel, 0.5, 12, CARD_WHITE);

    let toggle_label = if player.is_playing() { "||" } else { ">" };
    draw_button(d, &layout.player_toggle, toggle_label, ACCENT_BLUE, CARD_WHITE);

    let (mute_fill, mute_label) = if player.is_muted() {
        (ACCENT_LIGHT, "Muted")
    } else {
        (CARD_WHITE, "Mute")
    };
    draw_button(d, &layout.mute_button, mute_label, mute_fill, TEXT_MUTED);

    // The slider shows the stored volume even while muted, like the
    // original's remembered-volume behavior
    draw_slider(d, &layout.volume_slider, player.volume());
}

fn draw_slider(d: &mut RaylibDrawHandle, track: &Rectangle, fraction: f32) {
    d.draw_rectangle_rounded(*track, 1.0, 8, DOT_GRAY);
    let filled = Rectangle::new(track.x, track.y, track.width * fraction, track.height);
    if fraction > 0.0 {
        d.draw_rectangle_rounded(filled, 1.0, 8, ACCENT_BLUE);
    }
    let knob = Vector2::new(track.x + track.width * fraction, track.y + track.height / 2.0);
    d.draw_circle_v(knob, track.height, ACCENT_BLUE);
}

fn draw_button(d: &mut RaylibDrawHandle, rect: &Rectangle, label: &str, fill: Color, text: Color) {
    d.draw_rectangle_rounded(*rect, 0.4, 8, fill);
    if fill.r == CARD_WHITE.r && fill.g == CARD_WHITE.g && fill.b == CARD_WHITE.b {
        d.draw_rectangle_lines_ex(*rect, 1.0, CARD_BORDER);
    }
    let font_size = 18;
    let width = measure_text(label, font_size);
    d.draw_text(
        label,
        (rect.x + rect.width / 2.0) as i32 - width / 2,
        (rect.y + rect.height / 2.0) as i32 - font_size / 2,
        font_size,
        text,
    );
}
