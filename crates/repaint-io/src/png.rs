//! PNG texture support.
//!
//! Reads 8-bit and 16-bit RGB, RGBA, grayscale and grayscale+alpha images
//! (palette and low bit depth images are expanded to 8-bit first) into
//! normalized RGBA textures. Missing alpha reads as 1.0.
//!
//! Writes 8-bit RGBA. Samples are stored as-is: no gamma conversion happens
//! on either side, so gamma-encoded maps stay gamma-encoded.
//!
//! # Example
//!
//! ```rust,ignore
//! use repaint_io::png::{read, write};
//!
//! let aci = read("main_aci.png")?;
//! write("out/main_aci.png", &aci)?;
//! ```

use repaint_core::{PixelBuffer, Rgba, Rgba8, Texture};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Seek, Write};
use std::path::Path;

use crate::{IoError, IoResult};

/// Reads a PNG file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Texture> {
    let file = File::open(path.as_ref())?;
    decode(BufReader::new(file))
}

/// Reads a PNG from memory.
pub fn read_from_memory(data: &[u8]) -> IoResult<Texture> {
    decode(Cursor::new(data))
}

fn decode<R: BufRead + Seek>(reader: R) -> IoResult<Texture> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND);

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
    let bytes = &buf[..info.buffer_size()];

    let pixels: PixelBuffer = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgba, png::BitDepth::Eight) => bytes
            .chunks_exact(4)
            .map(|c| Rgba::from(Rgba8::new(c[0], c[1], c[2], c[3])))
            .collect(),
        (png::ColorType::Rgb, png::BitDepth::Eight) => bytes
            .chunks_exact(3)
            .map(|c| Rgba::from(Rgba8::opaque(c[0], c[1], c[2])))
            .collect(),
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => bytes
            .chunks_exact(2)
            .map(|c| Rgba::from(Rgba8::new(c[0], c[0], c[0], c[1])))
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => bytes
            .iter()
            .map(|&g| Rgba::from(Rgba8::opaque(g, g, g)))
            .collect(),
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => bytes_to_unit(bytes)
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect(),
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => bytes_to_unit(bytes)
            .chunks_exact(3)
            .map(|c| Rgba::opaque(c[0], c[1], c[2]))
            .collect(),
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Sixteen) => bytes_to_unit(bytes)
            .chunks_exact(2)
            .map(|c| Rgba::new(c[0], c[0], c[0], c[1]))
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => bytes_to_unit(bytes)
            .into_iter()
            .map(|g| Rgba::opaque(g, g, g))
            .collect(),
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    Ok(Texture::from_pixels(info.width, info.height, pixels)?)
}

/// Writes a texture as an 8-bit RGBA PNG.
pub fn write<P: AsRef<Path>>(path: P, texture: &Texture) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    encode(BufWriter::new(file), texture)
}

/// Encodes a texture as an 8-bit RGBA PNG in memory.
pub fn write_to_memory(texture: &Texture) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    encode(&mut out, texture)?;
    Ok(out)
}

fn encode<W: Write>(writer: W, texture: &Texture) -> IoResult<()> {
    let mut encoder = png::Encoder::new(writer, texture.width(), texture.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    let data: Vec<u8> = texture
        .pixels()
        .iter()
        .flat_map(|&px| Rgba8::from(px).to_bytes())
        .collect();

    png_writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

/// Converts big-endian 16-bit samples to [0, 1].
fn bytes_to_unit(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(2)
        .map(|c| f32::from(u16::from_be_bytes([c[0], c[1]])) / 65535.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn gradient(width: u32, height: u32) -> Texture {
        let pixels = (0..width * height)
            .map(|i| {
                let v = (i % 256) as f32 / 255.0;
                Rgba::new(v, 1.0 - v, 0.5, 1.0)
            })
            .collect();
        Texture::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn test_memory_roundtrip_rgba() {
        let tex = gradient(16, 8);
        let bytes = write_to_memory(&tex).unwrap();
        let loaded = read_from_memory(&bytes).unwrap();

        assert_eq!(loaded.dimensions(), (16, 8));
        for (a, b) in tex.pixels().iter().zip(loaded.pixels()) {
            assert_abs_diff_eq!(a.r, b.r, epsilon = 1.0 / 255.0);
            assert_abs_diff_eq!(a.g, b.g, epsilon = 1.0 / 255.0);
            assert_abs_diff_eq!(a.b, b.b, epsilon = 1.0 / 255.0);
            assert_eq!(b.a, 1.0);
        }
    }

    #[test]
    fn test_rgb_reads_opaque() {
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, 2, 1);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            let mut w = encoder.write_header().unwrap();
            w.write_image_data(&[255, 0, 0, 0, 255, 0]).unwrap();
            w.finish().unwrap();
        }

        let tex = read_from_memory(&bytes).unwrap();
        assert_eq!(tex.pixels(), &[Rgba::opaque(1.0, 0.0, 0.0), Rgba::opaque(0.0, 1.0, 0.0)]);
    }

    #[test]
    fn test_sixteen_bit_gray() {
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, 2, 1);
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::Sixteen);
            let mut w = encoder.write_header().unwrap();
            w.write_image_data(&[0xff, 0xff, 0x00, 0x00]).unwrap();
            w.finish().unwrap();
        }

        let tex = read_from_memory(&bytes).unwrap();
        assert_eq!(tex.pixels(), &[Rgba::opaque(1.0, 1.0, 1.0), Rgba::opaque(0.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        assert!(matches!(
            read_from_memory(b"not a png"),
            Err(IoError::DecodeError(_))
        ));
    }
}
