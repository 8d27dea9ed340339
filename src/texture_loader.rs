use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;

// Phone photos usually arrive sideways with the real orientation stored in
// EXIF. Bake the rotation into the pixels before the texture is created so
// the drawing code never has to know.

// Returns the EXIF orientation value, defaulting to 1 (upright) when the
// data is absent or unreadable.
fn exif_orientation(bytes: &[u8]) -> u16 {
    let Ok(exif) = Reader::new().read_from_container(&mut Cursor::new(bytes)) else {
        return 1;
    };
    match exif.get_field(Tag::Orientation, In::PRIMARY) {
        Some(field) => match &field.value {
            Value::Short(values) => values.first().copied().unwrap_or(1),
            _ => 1,
        },
        None => 1,
    }
}

// 1 = upright, 3 = 180deg, 6 = 90deg CW, 8 = 90deg CCW. Mirrored variants
// are rare in camera output and are drawn as-is.
fn apply_orientation(image: &mut Image, orientation: u16) {
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
}

pub fn load_photo_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF lives reliably in JPEG containers only
    let orientation = if ext == "jpg" || ext == "jpeg" {
        exif_orientation(&bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{ext}"), &bytes)
        .map_err(|e| anyhow!("decoding {}: {}", path.display(), e))?;
    apply_orientation(&mut image, orientation);

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("creating texture for {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_defaults_to_upright_for_non_exif_bytes() {
        assert_eq!(exif_orientation(b"definitely not a jpeg"), 1);
        assert_eq!(exif_orientation(&[]), 1);
    }
}
