//! Image preprocessing for the leaf classifier.
//!
//! One canonical pipeline: decode, resize to 224x224 RGB, scale pixels to
//! [-1, 1]. Every classification call goes through here, so serving uses
//! exactly the MobileNetV2 scaling the model was trained with.

use image::imageops::FilterType;
use ndarray::Array4;

use crate::error::PredictError;

/// Input raster edge length expected by the classifier.
pub const IMAGE_SIZE: u32 = 224;
/// RGB.
pub const CHANNELS: usize = 3;

/// Decode raw upload bytes into the classifier's input tensor,
/// shape (1, 224, 224, 3), values in [-1, 1].
pub fn image_to_tensor(bytes: &[u8]) -> Result<Array4<f32>, PredictError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| PredictError::InvalidImage(e.to_string()))?;

    let resized = decoded
        .resize_exact(IMAGE_SIZE, IMAGE_SIZE, FilterType::Triangle)
        .to_rgb8();

    let side = IMAGE_SIZE as usize;
    let mut tensor = Array4::<f32>::zeros((1, side, side, CHANNELS));
    for (x, y, pixel) in resized.enumerate_pixels() {
        for c in 0..CHANNELS {
            // [0, 255] -> [-1, 1]
            tensor[[0, y as usize, x as usize, c]] = pixel[c] as f32 / 127.5 - 1.0;
        }
    }

    Ok(tensor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb(rgb));
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_tensor_shape() {
        let tensor = image_to_tensor(&png_bytes(64, 48, [120, 80, 40])).unwrap();
        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
    }

    #[test]
    fn test_black_maps_to_minus_one() {
        let tensor = image_to_tensor(&png_bytes(32, 32, [0, 0, 0])).unwrap();
        for &v in tensor.iter() {
            assert!((v + 1.0).abs() < 1e-6, "expected -1.0, got {}", v);
        }
    }

    #[test]
    fn test_white_maps_to_plus_one() {
        let tensor = image_to_tensor(&png_bytes(32, 32, [255, 255, 255])).unwrap();
        for &v in tensor.iter() {
            assert!((v - 1.0).abs() < 1e-6, "expected 1.0, got {}", v);
        }
    }

    #[test]
    fn test_values_stay_in_range() {
        let tensor = image_to_tensor(&png_bytes(100, 50, [17, 200, 131])).unwrap();
        for &v in tensor.iter() {
            assert!((-1.0..=1.0).contains(&v), "value {} out of range", v);
        }
    }

    #[test]
    fn test_same_bytes_same_tensor() {
        let bytes = png_bytes(60, 60, [9, 90, 180]);
        assert_eq!(image_to_tensor(&bytes).unwrap(), image_to_tensor(&bytes).unwrap());
    }

    #[test]
    fn test_undecodable_bytes_rejected() {
        let err = image_to_tensor(b"definitely not an image").unwrap_err();
        assert!(matches!(err, PredictError::InvalidImage(_)));
    }

    #[test]
    fn test_empty_bytes_rejected() {
        let err = image_to_tensor(&[]).unwrap_err();
        assert!(matches!(err, PredictError::InvalidImage(_)));
    }
}
