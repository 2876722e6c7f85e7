use crate::INPUT_SIZE;
use crate::errors::ClassifierError;
use image::{DynamicImage, RgbImage, imageops::FilterType};
use ndarray::Array4;

/// Decode an uploaded byte stream. The format is sniffed from the bytes,
/// so the caller does not need to trust the declared content type.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, ClassifierError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Scale and center-crop to the model's square input, preserving aspect
/// ratio. Must match the preprocessing the model was trained with:
/// high-quality resampling, crop to fit rather than stretch.
pub fn fit_to_input(image: &DynamicImage) -> RgbImage {
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    rgb.resize_to_fill(INPUT_SIZE, INPUT_SIZE, FilterType::Lanczos3)
        .into_rgb8()
}

/// Map `[0, 255]` channel values into `[-1, 1]` and add the batch
/// dimension, producing the `[1, H, W, 3]` tensor the model expects.
pub fn normalize(image: &RgbImage) -> Array4<f32> {
    let (width, height) = image.dimensions();
    let mut batch = Array4::<f32>::zeros((1, height as usize, width as usize, 3));

    for (x, y, pixel) in image.enumerate_pixels() {
        for c in 0..3 {
            batch[[0, y as usize, x as usize, c]] = pixel[c] as f32 / 127.5 - 1.0;
        }
    }

    batch
}

/// Full preprocessing path: decode, fit, normalize.
pub fn preprocess(bytes: &[u8]) -> Result<Array4<f32>, ClassifierError> {
    let image = decode_image(bytes)?;
    let fitted = fit_to_input(&image);
    Ok(normalize(&fitted))
}
