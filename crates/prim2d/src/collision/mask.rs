/// Per-pixel opacity mask for fine-grained collision tests.
///
/// Stores one bit per pixel (1 = opaque), packed row-major. Built once when a
/// texture is registered, then shared by every primitive using that texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    bits: Vec<u8>,
}

impl AlphaMask {
    /// Build a mask from raw RGBA8 data. A pixel is opaque iff its alpha
    /// channel is strictly greater than zero.
    ///
    /// The caller guarantees `rgba.len() == width * height * 4`; the
    /// TextureData constructor validates this before calling.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Self {
        let pixels = (width * height) as usize;
        let mut bits = vec![0u8; pixels.div_ceil(8)];
        for idx in 0..pixels {
            if rgba[idx * 4 + 3] > 0 {
                bits[idx / 8] |= 1 << (7 - (idx % 8));
            }
        }
        Self { width, height, bits }
    }

    /// A fully opaque mask. Used for textures with no transparency data
    /// (collision degrades to the texture's full rectangle).
    pub fn solid(width: u32, height: u32) -> Self {
        let pixels = (width * height) as usize;
        Self {
            width,
            height,
            bits: vec![0xff; pixels.div_ceil(8)],
        }
    }

    /// Build a mask from rows of '0'/'1' characters, one string per row.
    /// Rows beyond `height` and characters beyond `width` are ignored;
    /// missing rows or characters stay transparent. The registry rejects
    /// mismatched manifests before calling, this only keeps direct callers
    /// in bounds.
    pub fn from_rows(width: u32, height: u32, rows: &[String]) -> Self {
        let pixels = (width * height) as usize;
        let mut bits = vec![0u8; pixels.div_ceil(8)];
        for (y, row) in rows.iter().take(height as usize).enumerate() {
            for (x, c) in row.chars().take(width as usize).enumerate() {
                if c == '1' {
                    let idx = y * width as usize + x;
                    bits[idx / 8] |= 1 << (7 - (idx % 8));
                }
            }
        }
        Self { width, height, bits }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) is opaque. Out-of-range coordinates are
    /// transparent, so callers can probe without bounds checks.
    pub fn is_opaque(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = (y * self.width + x) as usize;
        (self.bits[idx / 8] >> (7 - (idx % 8))) & 1 == 1
    }
}
