use image::Rgba;
use log::debug;

use crate::canvas::{Bounds, Canvas};
use crate::config::CANVAS_SIZE;
use crate::error::Result;

// Palette
pub const FRAME: Rgba<u8> = Rgba([16, 20, 30, 255]);
pub const PANEL: Rgba<u8> = Rgba([22, 28, 44, 255]);
pub const DIAL: Rgba<u8> = Rgba([17, 24, 39, 255]);
pub const RING: Rgba<u8> = Rgba([249, 179, 47, 255]);
pub const TRACE: Rgba<u8> = Rgba([79, 157, 255, 255]);
pub const GLOW: Rgba<u8> = Rgba([115, 194, 255, 255]);
pub const HUB: Rgba<u8> = Rgba([224, 236, 255, 255]);

const SIGNAL: [(i32, i32); 5] = [(252, 594), (396, 520), (528, 602), (686, 430), (796, 494)];

/// Draw the app icon onto a fresh 1024×1024 canvas.
pub fn render_icon() -> Result<Canvas> {
    let mut canvas = Canvas::new(CANVAS_SIZE)?;

    // frame + inner panel
    canvas.rounded_rect(Bounds::new(36, 36, 988, 988), 224.0, FRAME)?;
    canvas.rounded_rect(Bounds::new(86, 86, 938, 938), 192.0, PANEL)?;

    canvas.ellipse(Bounds::new(210, 210, 814, 814), DIAL)?;
    canvas.arc(Bounds::new(200, 200, 824, 824), 32.0, 312.0, RING, 64.0)?;
    // wraps through 0°
    canvas.arc(Bounds::new(250, 250, 774, 774), 210.0, 26.0, TRACE, 38.0)?;

    // hub
    canvas.ellipse(Bounds::new(456, 456, 568, 568), HUB)?;
    canvas.ellipse(Bounds::new(480, 480, 544, 544), TRACE)?;

    canvas.polyline(&SIGNAL, GLOW, 24.0)?;
    canvas.ellipse(Bounds::new(770, 468, 840, 538), RING)?;

    debug!("icon rendered at {}x{}", canvas.size(), canvas.size());
    Ok(canvas)
}
