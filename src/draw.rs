// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the framebuffer we compose each frame.
// 2) Anti-aliased circle primitives: stroke rings and filled discs, alpha
//    blended over whatever is already in the buffer.
// 3) A tiny 5x7 bitmap font to render the HUD line on top of the animation.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create the window. `resizable` is on for the spawning variant, whose
    /// rim radius follows the window width.
    pub fn new(title: &str, width: usize, height: usize, resizable: bool) -> Result<Self, Error> {
        let options = WindowOptions { resize: resizable, ..WindowOptions::default() };
        let window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current client size; polled each frame to catch live resizes.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    // when this returns true, the current framebuffer is written out as a PNG.
    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }
}

/* ---------- Software drawing: pixels, circles, tiny bitmap font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Mix `color` into the pixel at (x,y) with weight `alpha` in [0,1].
/// Visual: alpha 1 replaces the pixel, alpha 0.5 is a half-transparent ring
/// pixel, alpha 0 leaves the backdrop untouched.
#[inline]
fn blend_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32, alpha: f32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    let old = fb.pixels[idx];

    let a = alpha.clamp(0.0, 1.0);
    let or = ((old >> 16) & 0xFF) as f32;
    let og = ((old >> 8) & 0xFF) as f32;
    let ob = (old & 0xFF) as f32;
    let sr = ((color >> 16) & 0xFF) as f32;
    let sg = ((color >> 8) & 0xFF) as f32;
    let sb = (color & 0xFF) as f32;

    let nr = (or + (sr - or) * a).round() as u32;
    let ng = (og + (sg - og) * a).round() as u32;
    let nb = (ob + (sb - ob) * a).round() as u32;

    fb.pixels[idx] = (nr << 16) | (ng << 8) | nb;
}

/// Draw a stroke ring centered at (cx,cy): a circle outline `stroke_width`
/// pixels thick, feathered over one pixel at both edges.
/// Visual: a soft ring; with small alpha it is a faint ghost of one.
pub fn draw_ring(
    fb: &mut FrameBuffer,
    cx: i32,
    cy: i32,
    radius: f32,
    stroke_width: f32,
    color: u32,
    alpha: u8,
) {
    if radius <= 0.0 || stroke_width <= 0.0 || alpha == 0 {
        return;
    }
    let half = stroke_width * 0.5;
    let reach = (radius + half).ceil() as i32 + 1;
    let a = alpha as f32 / 255.0;

    // Squared-distance band check first so most pixels skip the sqrt.
    let inner = (radius - half - 1.0).max(0.0);
    let outer = radius + half + 1.0;
    let inner2 = inner * inner;
    let outer2 = outer * outer;

    // Scan just the bounding box (fast enough at these radii)
    for y in (cy - reach)..=(cy + reach) {
        for x in (cx - reach)..=(cx + reach) {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            let d2 = dx * dx + dy * dy;
            if d2 < inner2 || d2 > outer2 {
                continue; // outside the stroke band
            }

            // Coverage: 1 inside the stroke, falling to 0 over the last pixel
            let d = d2.sqrt();
            let coverage = (half + 0.5 - (d - radius).abs()).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend_pixel(fb, x, y, color, a * coverage);
            }
        }
    }
}

/// Draw a filled disc centered at (cx,cy), edge feathered over one pixel.
/// Visual: a solid dot of color; overlapping discs blend by their alpha.
pub fn draw_disc(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: f32, color: u32, alpha: u8) {
    if radius <= 0.0 || alpha == 0 {
        return;
    }
    let reach = radius.ceil() as i32 + 1;
    let a = alpha as f32 / 255.0;

    for y in (cy - reach)..=(cy + reach) {
        for x in (cx - reach)..=(cx + reach) {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            let d = (dx * dx + dy * dy).sqrt();

            let coverage = (radius + 0.5 - d).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend_pixel(fb, x, y, color, a * coverage);
            }
        }
    }
}

/* ---------- 5x7 bitmap font (ASCII subset for the HUD line) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase letters for "STAGGERED | SPAWNING | RINGS | FPS"
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10011,0b10001,0b10001,0b01111),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),

        // Punctuation: space, vertical bar, colon, dot
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
/// Visual: a tiny glyph with a 1-pixel black shadow for contrast over rings.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass: offset by (1,1) in black to improve readability
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32 + 1, y + ry as i32 + 1, 0x00000000);
                }
            }
        }

        // Foreground pass: actual glyph in chosen color
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs.
/// Visual: a compact HUD string appears; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(size: usize) -> FrameBuffer {
        FrameBuffer::new(size, size)
    }

    #[test]
    fn blend_full_alpha_replaces_and_zero_alpha_preserves() {
        let mut fb = canvas(4);
        fb.clear(0x101010);
        blend_pixel(&mut fb, 1, 1, 0x00AAEE, 1.0);
        assert_eq!(fb.pixels[1 * 4 + 1], 0x00AAEE);
        blend_pixel(&mut fb, 2, 2, 0x00AAEE, 0.0);
        assert_eq!(fb.pixels[2 * 4 + 2], 0x101010);
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut fb = canvas(4);
        put_pixel(&mut fb, -1, 0, 0xFFFFFF);
        put_pixel(&mut fb, 4, 4, 0xFFFFFF);
        blend_pixel(&mut fb, 0, -3, 0xFFFFFF, 1.0);
        blend_pixel(&mut fb, 100, 0, 0xFFFFFF, 1.0);
        assert!(fb.pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn ring_touches_the_band_but_not_the_center() {
        let mut fb = canvas(64);
        draw_ring(&mut fb, 32, 32, 20.0, 4.0, 0x00AAEE, 255);
        // Dead center stays black, a pixel on the circle is painted.
        assert_eq!(fb.pixels[32 * 64 + 32], 0);
        assert_ne!(fb.pixels[32 * 64 + (32 + 20)], 0);
        // Well inside the ring is untouched too.
        assert_eq!(fb.pixels[32 * 64 + (32 + 10)], 0);
    }

    #[test]
    fn disc_fills_its_center() {
        let mut fb = canvas(64);
        draw_disc(&mut fb, 32, 32, 10.0, 0x00AAEE, 255);
        assert_eq!(fb.pixels[32 * 64 + 32], 0x00AAEE);
        // Far outside the disc stays black.
        assert_eq!(fb.pixels[32 * 64 + (32 + 20)], 0);
    }

    #[test]
    fn zero_radius_and_zero_alpha_draw_nothing() {
        let mut fb = canvas(16);
        draw_ring(&mut fb, 8, 8, 0.0, 4.0, 0xFFFFFF, 255);
        draw_ring(&mut fb, 8, 8, 5.0, 4.0, 0xFFFFFF, 0);
        draw_disc(&mut fb, 8, 8, 5.0, 0xFFFFFF, 0);
        assert!(fb.pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn hud_text_marks_pixels() {
        let mut fb = canvas(64);
        draw_text_5x7(&mut fb, 2, 2, "FPS: 60.0", 0x00FFFFFF);
        assert!(fb.pixels.iter().any(|&p| p == 0x00FFFFFF));
    }
}
