//! Tray icon bitmaps drawn at runtime.
//!
//! Each slot glyph comes in a light and a dark variant; the default
//! application icon is shown when the active scheme is bound to no slot.

use crate::{AppError, AppResult};

use power_tray_core::{IconVariant, PresentationKey, Slot};

use std::panic::Location;

use error_location::ErrorLocation;
use image::{Rgba, RgbaImage};
use tray_icon::Icon;

/// Edge length of every tray bitmap, in pixels.
pub(crate) const ICON_SIZE: u32 = 32;

const LIGHT_INK: Rgba<u8> = Rgba([240, 240, 240, 255]);
const DARK_INK: Rgba<u8> = Rgba([32, 32, 32, 255]);
const APP_FRAME: Rgba<u8> = Rgba([90, 90, 90, 255]);
const APP_CHARGE: Rgba<u8> = Rgba([46, 170, 80, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

const BOLT: [(f32, f32); 7] = [
    (19.0, 1.5),
    (6.5, 18.0),
    (14.5, 18.0),
    (11.5, 30.5),
    (25.5, 12.5),
    (17.0, 12.5),
    (21.5, 1.5),
];

/// Draw the bitmap for `key`, or the application icon for `None`.
pub(crate) fn rasterize(key: Option<PresentationKey>) -> RgbaImage {
    let Some(key) = key else {
        return draw(|x, y| {
            if in_rect(x, y, 6.0, 11.0, 22.0, 21.0) {
                Some(APP_CHARGE)
            } else if in_frame(x, y, 4.0, 9.0, 26.0, 23.0, 2.0)
                || in_rect(x, y, 26.0, 13.0, 29.0, 19.0)
            {
                Some(APP_FRAME)
            } else {
                None
            }
        });
    };

    let ink = match key.variant {
        IconVariant::Light => LIGHT_INK,
        IconVariant::Dark => DARK_INK,
    };
    let shape: fn(f32, f32) -> bool = match key.slot {
        Slot::A => desktop,
        Slot::B => laptop,
        Slot::C => bolt,
        Slot::D => moon,
    };

    draw(|x, y| shape(x, y).then_some(ink))
}

/// Build the tray icon for `key`.
#[track_caller]
pub(crate) fn load_icon(key: Option<PresentationKey>) -> AppResult<Icon> {
    let rgba = rasterize(key);
    let (width, height) = (rgba.width(), rgba.height());

    Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::IconError {
        reason: format!("Failed to create icon from RGBA: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn draw(paint: impl Fn(f32, f32) -> Option<Rgba<u8>>) -> RgbaImage {
    // Sample at pixel centres.
    RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        paint(x as f32 + 0.5, y as f32 + 0.5).unwrap_or(CLEAR)
    })
}

fn in_rect(x: f32, y: f32, left: f32, top: f32, right: f32, bottom: f32) -> bool {
    x >= left && x < right && y >= top && y < bottom
}

fn in_frame(x: f32, y: f32, left: f32, top: f32, right: f32, bottom: f32, width: f32) -> bool {
    in_rect(x, y, left, top, right, bottom)
        && !in_rect(x, y, left + width, top + width, right - width, bottom - width)
}

fn in_circle(x: f32, y: f32, cx: f32, cy: f32, radius: f32) -> bool {
    (x - cx).powi(2) + (y - cy).powi(2) <= radius.powi(2)
}

fn desktop(x: f32, y: f32) -> bool {
    in_frame(x, y, 3.0, 4.0, 29.0, 22.0, 2.5)
        || in_rect(x, y, 14.0, 22.0, 18.0, 26.0)
        || in_rect(x, y, 9.0, 26.0, 23.0, 28.5)
}

fn laptop(x: f32, y: f32) -> bool {
    in_frame(x, y, 6.0, 6.0, 26.0, 21.0, 2.5) || in_rect(x, y, 2.0, 22.0, 30.0, 26.0)
}

fn bolt(x: f32, y: f32) -> bool {
    // Even-odd crossing test.
    let mut inside = false;
    let mut previous = BOLT[BOLT.len() - 1];
    for current in BOLT {
        let (x1, y1) = previous;
        let (x2, y2) = current;
        if (y1 > y) != (y2 > y) && x < (x2 - x1) * (y - y1) / (y2 - y1) + x1 {
            inside = !inside;
        }
        previous = current;
    }
    inside
}

fn moon(x: f32, y: f32) -> bool {
    in_circle(x, y, 15.0, 16.5, 12.5) && !in_circle(x, y, 21.5, 11.0, 10.0)
}
