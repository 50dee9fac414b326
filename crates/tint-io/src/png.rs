//! PNG format support.
//!
//! Decodes any PNG color type to 8-bit RGBA and encodes RGBA buffers as
//! 8-bit RGBA PNGs, so an unfiltered buffer survives a write/read cycle
//! byte for byte.
//!
//! | Source | Conversion |
//! |--------|------------|
//! | RGBA 8 | none |
//! | RGB 8 | alpha = 255 |
//! | Gray / GrayAlpha | gray replicated to R, G, B |
//! | Indexed | palette expanded (tRNS becomes alpha) |
//! | 16-bit | stripped to the high byte |
//!
//! # Example
//!
//! ```rust,ignore
//! use tint_io::png::{read, write};
//!
//! let buf = read("input.png")?;
//! write("output.png", &buf)?;
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

use tint_core::{PixelBuffer, BYTES_PER_PIXEL};
use tracing::{debug, trace};

use crate::{IoError, IoResult};

/// Decodes PNG bytes into a buffer.
pub fn decode(bytes: &[u8]) -> IoResult<PixelBuffer> {
    decode_from(Cursor::new(bytes))
}

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    trace!(path = %path.as_ref().display(), "png::read");
    let file = File::open(path.as_ref())?;
    decode_from(BufReader::new(file))
}

fn decode_from<R: std::io::BufRead + std::io::Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let rgba: Vec<u8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgba, png::BitDepth::Eight) => data.to_vec(),
        (png::ColorType::Rgb, png::BitDepth::Eight) => data
            .chunks_exact(3)
            .flat_map(|c| [c[0], c[1], c[2], 255])
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            data.iter().flat_map(|&g| [g, g, g, 255]).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => data
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    debug!(width = info.width, height = info.height, color_type = ?info.color_type, "decoded png");
    Ok(PixelBuffer::from_rgba_bytes(info.width, info.height, &rgba)?)
}

/// Encodes a buffer as an 8-bit RGBA PNG.
pub fn encode(buffer: &PixelBuffer) -> IoResult<Vec<u8>> {
    let mut out = Vec::with_capacity(buffer.len() * BYTES_PER_PIXEL);
    encode_to(&mut out, buffer)?;
    Ok(out)
}

/// Writes a buffer to a PNG file.
pub fn write<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> IoResult<()> {
    trace!(path = %path.as_ref().display(), "png::write");
    let file = File::create(path.as_ref())?;
    encode_to(BufWriter::new(file), buffer)
}

fn encode_to<W: Write>(writer: W, buffer: &PixelBuffer) -> IoResult<()> {
    let (width, height) = buffer.dimensions();
    if buffer.is_empty() {
        return Err(IoError::EncodeError(format!(
            "cannot encode empty {}x{} buffer",
            width, height
        )));
    }

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .write_image_data(&buffer.to_rgba_bytes())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}
