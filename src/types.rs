// Core types shared by the model, renderer and snapshot writer.

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// Allocate a black framebuffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Repaint every pixel with `color`.
    /// Visual: the whole window becomes a flat backdrop; rings go on top.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }
}
