//! Square 24-bit pixel buffer and its uncompressed TGA encoding.
//!
//! Pixels are stored row-major, top row first as rendered, three bytes per
//! pixel in blue, green, red order. That is exactly the TGA payload, so the
//! buffer is written out as-is after the 18-byte header.

use crate::{ImageError, ImageResult, RenderError, RenderResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Size of the TGA file header in bytes.
pub const TGA_HEADER_LEN: usize = 18;

/// Bytes per pixel (B, G, R).
pub(crate) const BYTES_PER_PIXEL: usize = 3;

const IMAGE_TYPE_TRUE_COLOR: u8 = 2;
const BITS_PER_PIXEL: u8 = 24;

/// Number of bytes in a `resolution`x`resolution` buffer, if representable.
pub(crate) fn buffer_len(resolution: u32) -> Option<usize> {
    if resolution == 0 {
        return None;
    }
    let side = usize::try_from(resolution).ok()?;
    side.checked_mul(side)?.checked_mul(BYTES_PER_PIXEL)
}

/// Build the TGA header for a square image.
///
/// Only the image type, width, height and bit depth are set; every other
/// byte is zero.
pub fn tga_header(resolution: u32) -> ImageResult<[u8; TGA_HEADER_LEN]> {
    let side = u16::try_from(resolution).map_err(|_| ImageError::ResolutionTooLarge(resolution))?;
    let [lo, hi] = side.to_le_bytes();

    let mut header = [0u8; TGA_HEADER_LEN];
    header[2] = IMAGE_TYPE_TRUE_COLOR;
    header[12] = lo;
    header[13] = hi;
    // Height duplicates width: the canvas is square
    header[14] = lo;
    header[15] = hi;
    header[16] = BITS_PER_PIXEL;
    Ok(header)
}

/// Owned BGR pixel storage for a square image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    resolution: u32,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zero-filled buffer of `3 * resolution²` bytes.
    pub fn new(resolution: u32) -> RenderResult<Self> {
        let len = buffer_len(resolution).ok_or(RenderError::InvalidResolution(resolution))?;
        Ok(Self {
            resolution,
            bytes: vec![0; len],
        })
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// The B, G, R bytes of the pixel at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let offset = (y as usize * self.resolution as usize + x as usize) * BYTES_PER_PIXEL;
        [self.bytes[offset], self.bytes[offset + 1], self.bytes[offset + 2]]
    }

    /// Paint the background: blue ramps up per row, green per column, red
    /// stays zero. Each step is `255 / resolution` truncated to a byte and
    /// the ramps wrap around on overflow.
    pub fn fill_background_gradient(&mut self) {
        let step = (255.0 / self.resolution as f32) as u8;
        let row_len = self.resolution as usize * BYTES_PER_PIXEL;

        let mut blue: u8 = 0;
        for row in self.bytes.chunks_exact_mut(row_len) {
            let mut green: u8 = 0;
            for pixel in row.chunks_exact_mut(BYTES_PER_PIXEL) {
                pixel[0] = blue;
                pixel[1] = green;
                pixel[2] = 0;
                green = green.wrapping_add(step);
            }
            blue = blue.wrapping_add(step);
        }
    }
}

/// Encode `buffer` as an uncompressed 24-bit TGA stream.
pub fn write_tga<W: Write>(writer: &mut W, buffer: &PixelBuffer) -> ImageResult<()> {
    let header = tga_header(buffer.resolution)?;
    writer.write_all(&header)?;
    writer.write_all(&buffer.bytes)?;
    Ok(())
}

/// Write `buffer` to a TGA file at `path`, replacing any existing file.
pub fn save_tga(path: impl AsRef<Path>, buffer: &PixelBuffer) -> ImageResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_tga(&mut writer, buffer)?;
    writer.flush()?;

    log::debug!(
        "Wrote {}x{} TGA to {}",
        buffer.resolution,
        buffer.resolution,
        path.display()
    );
    Ok(())
}
