//! PNG image format support for binary images
//!
//! Binary images are written as 1-bit grayscale, where white (1) is a set
//! pixel. Reading accepts 1-, 8- and 16-bit grayscale as well as RGB(A);
//! any nonzero sample marks the pixel as set. Polarity is not normalized
//! here.

use crate::{IoError, IoResult};
use fibermorph_core::BinaryImage;
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image as a binary image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<BinaryImage> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    // Samples per pixel and bits per sample
    let (spp, bits): (usize, usize) = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::One) => (1, 1),
        (ColorType::Grayscale, BitDepth::Eight) => (1, 8),
        (ColorType::Grayscale, BitDepth::Sixteen) => (1, 16),
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => (2, 8),
        (ColorType::Rgb, BitDepth::Eight) => (3, 8),
        (ColorType::Rgba, BitDepth::Eight) => (4, 8),
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format for binary input: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut pixels = Vec::with_capacity(width as usize * height as usize);

    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..(y + 1) * bytes_per_row];
        for x in 0..width as usize {
            let set = match bits {
                1 => (row[x / 8] >> (7 - (x % 8))) & 1 != 0,
                8 => {
                    // Ignore the alpha sample for gray+alpha and RGBA
                    let color_samples = if spp == 2 || spp == 4 { spp - 1 } else { spp };
                    row[x * spp..x * spp + color_samples].iter().any(|&v| v != 0)
                }
                _ => row[x * 2] != 0 || row[x * 2 + 1] != 0,
            };
            pixels.push(set);
        }
    }

    Ok(BinaryImage::from_vec(width, height, pixels)?)
}

/// Write a binary image as a 1-bit grayscale PNG (set pixels are white)
pub fn write_png<W: Write>(image: &BinaryImage, writer: W) -> IoResult<()> {
    let width = image.width();
    let height = image.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::One);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let bytes_per_row = width.div_ceil(8) as usize;
    let mut data = vec![0u8; bytes_per_row * height as usize];
    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for (x, &set) in image.row(y).unwrap_or(&[]).iter().enumerate() {
            if set {
                data[row_start + x / 8] |= 0x80 >> (x % 8);
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
