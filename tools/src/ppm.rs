use anyhow::{bail, ensure, Context, Result};
use std::fs;
use std::path::Path;

/// An RGB image with 8-bit channels
pub struct Image {
    pub width: usize,
    pub height: usize,
    /// Row-major RGB triplets
    pub pixels: Vec<u8>,
}

impl Image {
    /// Nearest-neighbor resample to the given dimensions
    pub fn resize(&self, width: usize, height: usize) -> Image {
        if self.width == width && self.height == height {
            return Image {
                width,
                height,
                pixels: self.pixels.clone(),
            };
        }

        let mut pixels = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            let src_y = y * self.height / height;
            for x in 0..width {
                let src_x = x * self.width / width;
                let offset = (src_y * self.width + src_x) * 3;
                pixels.extend_from_slice(&self.pixels[offset..offset + 3]);
            }
        }

        Image {
            width,
            height,
            pixels,
        }
    }

    /// Channels scaled to [0, 1]
    pub fn features(&self) -> Vec<f32> {
        self.pixels.iter().map(|&v| v as f32 / 255.0).collect()
    }
}

/// Reads a binary (P6) PPM file
pub fn read_ppm(path: &Path) -> Result<Image> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_ppm(&bytes).with_context(|| format!("failed to parse {}", path.display()))
}

fn parse_ppm(bytes: &[u8]) -> Result<Image> {
    let mut cursor = 0;

    let magic = header_token(bytes, &mut cursor)?;
    ensure!(magic == "P6", "expected a binary PPM (P6) file");

    let width: usize = header_token(bytes, &mut cursor)?.parse()?;
    let height: usize = header_token(bytes, &mut cursor)?.parse()?;
    let maxval: usize = header_token(bytes, &mut cursor)?.parse()?;
    ensure!(maxval == 255, "only 8-bit channels are supported");

    // a single whitespace byte separates the header from the pixel data
    cursor += 1;

    let expected = width * height * 3;
    ensure!(
        bytes.len() >= cursor + expected,
        "truncated pixel data: expected {expected} bytes"
    );

    Ok(Image {
        width,
        height,
        pixels: bytes[cursor..cursor + expected].to_vec(),
    })
}

/// Next whitespace-delimited header token, skipping `#` comments
fn header_token<'a>(bytes: &'a [u8], cursor: &mut usize) -> Result<&'a str> {
    while *cursor < bytes.len() {
        match bytes[*cursor] {
            b' ' | b'\t' | b'\r' | b'\n' => *cursor += 1,
            b'#' => {
                while *cursor < bytes.len() && bytes[*cursor] != b'\n' {
                    *cursor += 1;
                }
            }
            _ => break,
        }
    }

    let start = *cursor;
    while *cursor < bytes.len() && !bytes[*cursor].is_ascii_whitespace() {
        *cursor += 1;
    }

    if start == *cursor {
        bail!("unexpected end of header");
    }
    Ok(std::str::from_utf8(&bytes[start..*cursor])?)
}
