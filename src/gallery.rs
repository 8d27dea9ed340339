use std::path::{Path, PathBuf};

use raylib::prelude::*;

use crate::constants::MONTH_COUNT;
use crate::texture_loader::load_photo_texture;

// One caption per month, shown over the bottom of each photo.
pub const MONTH_CAPTIONS: [&str; 12] = [
    "Welcome to the world, little one! Wrapped in blue and surrounded by flowers.",
    "Cozy in a teddy bear outfit - those eyes are taking in the world!",
    "Looking so handsome in mint green - growing more alert each day!",
    "Discovering those tiny hands and enjoying special moments.",
    "Snuggled in a bunny outfit with a carrot - so adorable!",
    "Half a year already! Celebrating with a yellow duck outfit and cake.",
    "Looking nautical in blue and white stripes - sitting up so well!",
    "Holiday cheer in festive red and white - that smile is contagious!",
    "Tropical vibes with a shark cake - enjoying the outdoors!",
    "Looking stylish in stripes - growing more confident every day!",
    "That beautiful smile shows off your personality - almost a year old!",
    "My First Easter! Celebrating your first birthday with bunny ears and treats!",
];

// The twelve month slides. Months up to available_months have a photo;
// anything past that draws the "coming soon" placeholder.
pub struct MonthGallery {
    textures: Vec<Option<Texture2D>>, // index 0 = month 1
    available_months: u32,
}

impl MonthGallery {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> Self {
        let mut textures = Vec::with_capacity(MONTH_COUNT as usize);
        for month in 1..=MONTH_COUNT {
            let texture = match find_month_photo(dir, month) {
                Some(path) => match load_photo_texture(rl, thread, &path) {
                    Ok(texture) => Some(texture),
                    Err(e) => {
                        eprintln!("Warning: skipping {}: {:#}", path.display(), e);
                        None
                    }
                },
                None => None,
            };
            textures.push(texture);
        }

        let loaded: Vec<bool> = textures.iter().map(Option::is_some).collect();
        let available_months = available_prefix(&loaded);
        Self { textures, available_months }
    }

    pub fn available_months(&self) -> u32 {
        self.available_months
    }

    // The fallback threshold: a photo is only shown for
    // month <= available_months, everything later gets the placeholder.
    pub fn texture(&self, month: u32) -> Option<&Texture2D> {
        if month >= 1 && month <= self.available_months {
            self.textures.get(month as usize - 1).and_then(Option::as_ref)
        } else {
            None
        }
    }

    pub fn caption(month: u32) -> &'static str {
        MONTH_CAPTIONS[(month.clamp(1, MONTH_COUNT) - 1) as usize]
    }
}

// Months count as available up to the first gap; a photo set with months
// 1..7 and 9 shows placeholders from month 8 on.
fn available_prefix(loaded: &[bool]) -> u32 {
    loaded.iter().take_while(|&&present| present).count() as u32
}

fn find_month_photo(dir: &Path, month: u32) -> Option<PathBuf> {
    for ext in ["jpg", "jpeg", "png"] {
        let candidate = dir.join(format!("month{month}.{ext}"));
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}
