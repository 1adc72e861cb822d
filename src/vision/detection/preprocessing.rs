// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Letterbox preprocessing for YOLO input

use image::{imageops::FilterType, DynamicImage, GenericImageView, Rgb, RgbImage};
use ndarray::Array4;

/// Default square model input size
pub const YOLO_INPUT_SIZE: u32 = 640;

/// Grey used by YOLO exports for letterbox padding
pub const PAD_VALUE: u8 = 114;

/// How the source image was placed inside the model input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    /// Source-to-input scale factor
    pub scale: f32,
    /// Left padding in input pixels
    pub pad_x: f32,
    /// Top padding in input pixels
    pub pad_y: f32,
    pub source_width: u32,
    pub source_height: u32,
}

impl Letterbox {
    /// Map a box from model input space back into source image pixels
    pub fn to_source(&self, bbox: [f32; 4]) -> [f32; 4] {
        let max_x = self.source_width as f32;
        let max_y = self.source_height as f32;
        [
            ((bbox[0] - self.pad_x) / self.scale).clamp(0.0, max_x),
            ((bbox[1] - self.pad_y) / self.scale).clamp(0.0, max_y),
            ((bbox[2] - self.pad_x) / self.scale).clamp(0.0, max_x),
            ((bbox[3] - self.pad_y) / self.scale).clamp(0.0, max_y),
        ]
    }
}

/// Compute scale and padding for fitting `width`x`height` into a square
pub fn letterbox_geometry(width: u32, height: u32, target_size: u32) -> Letterbox {
    let scale = (target_size as f32 / width.max(1) as f32)
        .min(target_size as f32 / height.max(1) as f32);
    let new_w = ((width as f32 * scale).round() as u32).clamp(1, target_size);
    let new_h = ((height as f32 * scale).round() as u32).clamp(1, target_size);

    Letterbox {
        scale,
        pad_x: ((target_size - new_w) / 2) as f32,
        pad_y: ((target_size - new_h) / 2) as f32,
        source_width: width,
        source_height: height,
    }
}

/// Preprocess an image for YOLO detection
///
/// Steps:
/// 1. Resize with aspect ratio preservation to `target_size`
/// 2. Pad to square with grey (114)
/// 3. Scale RGB to [0, 1]
/// 4. Convert to NCHW tensor format [1, 3, H, W]
pub fn preprocess_for_detection(
    image: &DynamicImage,
    target_size: u32,
) -> (Array4<f32>, Letterbox) {
    let (orig_w, orig_h) = image.dimensions();
    let size = target_size as usize;
    let mut tensor = Array4::from_elem((1, 3, size, size), PAD_VALUE as f32 / 255.0);

    if orig_w == 0 || orig_h == 0 {
        let letterbox = Letterbox {
            scale: 1.0,
            pad_x: 0.0,
            pad_y: 0.0,
            source_width: orig_w,
            source_height: orig_h,
        };
        return (tensor, letterbox);
    }

    let letterbox = letterbox_geometry(orig_w, orig_h, target_size);
    let new_w = ((orig_w as f32 * letterbox.scale).round() as u32).clamp(1, target_size);
    let new_h = ((orig_h as f32 * letterbox.scale).round() as u32).clamp(1, target_size);

    let resized = image.resize_exact(new_w, new_h, FilterType::Triangle);
    let mut canvas = RgbImage::from_pixel(target_size, target_size, Rgb([PAD_VALUE; 3]));
    image::imageops::overlay(
        &mut canvas,
        &resized.to_rgb8(),
        letterbox.pad_x as i64,
        letterbox.pad_y as i64,
    );

    for (x, y, pixel) in canvas.enumerate_pixels() {
        for c in 0..3 {
            tensor[[0, c, y as usize, x as usize]] = pixel[c] as f32 / 255.0;
        }
    }

    (tensor, letterbox)
}
