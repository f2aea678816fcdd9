use anyhow::Result;
use std::time::Duration;

/// Camera-feed window. Frames arrive as packed RGB8 and are converted
/// into the ARGB buffer minifb wants.
pub struct WindowOutput {
    window: minifb::Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl WindowOutput {
    pub fn new(title: &str, width: usize, height: usize, frame_interval: Duration) -> Result<Self> {
        let mut window = minifb::Window::new(
            title,
            width,
            height,
            minifb::WindowOptions {
                resize: true,
                ..minifb::WindowOptions::default()
            },
        )
        .map_err(|e| anyhow::anyhow!("Failed to create window: {}", e))?;

        // Paces the loop at the configured capture rate; slow frames
        // are simply dropped by the fixed-interval scheduling.
        window.limit_update_rate(Some(frame_interval));

        Ok(Self {
            window,
            buffer: vec![0; width * height],
            width,
            height,
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn is_key_down(&self, key: minifb::Key) -> bool {
        self.window.is_key_down(key)
    }

    pub fn keys_pressed(&self) -> Vec<minifb::Key> {
        self.window.get_keys_pressed(minifb::KeyRepeat::No)
    }

    pub fn update(&mut self, rgb: &[u8]) -> Result<()> {
        if self.buffer.len() != self.width * self.height {
            self.buffer.resize(self.width * self.height, 0);
        }

        for (i, chunk) in rgb.chunks(3).enumerate() {
            if i >= self.buffer.len() {
                break;
            }
            let r = chunk[0] as u32;
            let g = chunk[1] as u32;
            let b = chunk[2] as u32;
            self.buffer[i] = (r << 16) | (g << 8) | b;
        }

        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| anyhow::anyhow!(e))
    }
}

/// Sets one pixel in a packed RGB8 buffer; out-of-bounds is a no-op.
pub fn put_pixel(buffer: &mut [u8], width: usize, height: usize, x: i32, y: i32, color: (u8, u8, u8)) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let idx = (y as usize * width + x as usize) * 3;
    if idx + 2 < buffer.len() {
        buffer[idx] = color.0;
        buffer[idx + 1] = color.1;
        buffer[idx + 2] = color.2;
    }
}

/// Draws a filled square dot centered on (x, y).
pub fn draw_dot(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    radius: i32,
    color: (u8, u8, u8),
) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            put_pixel(buffer, width, height, x + dx, y + dy, color);
        }
    }
}

/// Draws a line by dense parametric stepping, same approach the head
/// pose rays use: good enough for short overlay segments.
pub fn draw_line(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    from: (i32, i32),
    to: (i32, i32),
    color: (u8, u8, u8),
) {
    let (x0, y0) = (from.0 as f32, from.1 as f32);
    let (x1, y1) = (to.0 as f32, to.1 as f32);

    let mut t = 0.0;
    while t <= 1.0 {
        let px = x0 + (x1 - x0) * t;
        let py = y0 + (y1 - y0) * t;
        put_pixel(buffer, width, height, px as i32, py as i32, color);
        t += 0.005;
    }
}

/// Darkens a rectangle so panel text stays readable over the feed.
pub fn dim_rect(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    w: usize,
    h: usize,
) {
    for py in y..(y + h).min(height) {
        for px in x..(x + w).min(width) {
            let idx = (py * width + px) * 3;
            if idx + 2 < buffer.len() {
                buffer[idx] = (buffer[idx] as u32 * 2 / 5) as u8;
                buffer[idx + 1] = (buffer[idx + 1] as u32 * 2 / 5) as u8;
                buffer[idx + 2] = (buffer[idx + 2] as u32 * 2 / 5) as u8;
            }
        }
    }
}
