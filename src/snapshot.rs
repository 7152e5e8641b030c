// Writes the framebuffer out as a PNG so a frame of the animation can be kept.
// The buffer is 0x00RRGGBB per pixel; PNG wants tightly packed RGB bytes.

use crate::error::Error;
use crate::types::FrameBuffer;
use std::path::Path;

/// Save the current frame as an RGB PNG at `path`.
pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    let mut bytes = Vec::with_capacity(fb.pixels.len() * 3);
    for &pixel in &fb.pixels {
        bytes.push(((pixel >> 16) & 0xFF) as u8);
        bytes.push(((pixel >> 8) & 0xFF) as u8);
        bytes.push((pixel & 0xFF) as u8);
    }
    image::save_buffer(
        path,
        &bytes,
        fb.width as u32,
        fb.height as u32,
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(())
}
