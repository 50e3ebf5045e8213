use std::path::Path;

use fast_image_resize as fr;
use rayrig_calib::ImageSize;

use crate::error::DatasetError;

/// Load an image as premultiplied RGBA f32 values in [0, 1] at a canonical
/// resolution.
///
/// The image is decoded, normalized to [0, 1] and converted to RGBA (sources
/// without an alpha channel get alpha = 1). If an alpha channel is present,
/// the color channels are multiplied by it BEFORE resizing, so the
/// premultiplied result is what gets resampled. The buffer is then resized
/// to `target` with bilinear interpolation if the native size differs.
///
/// # Returns
///
/// A row-major buffer of `target.height * target.width * 4` values.
pub(crate) fn load_rgba_premultiplied(
    path: &Path,
    target: ImageSize,
) -> Result<Vec<f32>, DatasetError> {
    let decoded = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|source| DatasetError::ImageDecodeError {
            path: path.to_path_buf(),
            source,
        })?;

    let has_alpha = decoded.color().has_alpha();
    let rgba = decoded.into_rgba32f();
    let size = ImageSize {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
    };
    let mut buf = rgba.into_raw();

    if has_alpha {
        for pixel in buf.chunks_exact_mut(4) {
            pixel[0] *= pixel[3];
            pixel[1] *= pixel[3];
            pixel[2] *= pixel[3];
        }
    }

    if size != target {
        buf = resize_rgba(buf, size, target)?;
    }

    Ok(buf)
}

/// Resize a premultiplied RGBA f32 buffer with bilinear interpolation.
fn resize_rgba(
    buf: Vec<f32>,
    src_size: ImageSize,
    dst_size: ImageSize,
) -> Result<Vec<f32>, DatasetError> {
    let src_image = fr::images::Image::from_vec_u8(
        src_size.width as u32,
        src_size.height as u32,
        convert_buf_f32_u8(&buf),
        fr::PixelType::F32x4,
    )?;
    let mut dst_image = fr::images::Image::new(
        dst_size.width as u32,
        dst_size.height as u32,
        fr::PixelType::F32x4,
    );

    // the buffer is already premultiplied; skip the resizer's own alpha
    // multiply/divide pass
    let mut resizer = fr::Resizer::new();
    resizer.resize(
        &src_image,
        &mut dst_image,
        &fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Bilinear))
            .use_alpha(false),
    )?;

    Ok(convert_buf_u8_f32(dst_image.buffer()))
}

/// Utility function to convert `Vec<f32>` samples to raw native-endian bytes.
fn convert_buf_f32_u8(buf: &[f32]) -> Vec<u8> {
    let mut buf_u8 = Vec::with_capacity(buf.len() * 4);
    for sample in buf {
        buf_u8.extend_from_slice(&sample.to_ne_bytes());
    }

    buf_u8
}

/// Utility function to convert raw native-endian bytes back to f32 samples.
fn convert_buf_u8_f32(buf: &[u8]) -> Vec<f32> {
    let mut buf_f32 = Vec::with_capacity(buf.len() / 4);
    for chunk in buf.chunks_exact(4) {
        buf_f32.push(f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }

    buf_f32
}
