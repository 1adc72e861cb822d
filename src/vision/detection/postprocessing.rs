// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! YOLO output decoding and non-maximum suppression

use ndarray::{ArrayView3, ArrayViewD, Ix3};

use super::DetectionError;

/// A scored box in model input space, before NMS
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub class_id: usize,
    pub score: f32,
    /// `[x1, y1, x2, y2]`
    pub bbox: [f32; 4],
}

impl Candidate {
    pub fn area(&self) -> f32 {
        (self.bbox[2] - self.bbox[0]).max(0.0) * (self.bbox[3] - self.bbox[1]).max(0.0)
    }

    pub fn iou(&self, other: &Candidate) -> f32 {
        let x1 = self.bbox[0].max(other.bbox[0]);
        let y1 = self.bbox[1].max(other.bbox[1]);
        let x2 = self.bbox[2].min(other.bbox[2]);
        let y2 = self.bbox[3].min(other.bbox[3]);
        let intersection = (x2 - x1).max(0.0) * (y2 - y1).max(0.0);
        let union = self.area() + other.area() - intersection;

        if union > 0.0 {
            intersection / union
        } else {
            0.0
        }
    }
}

/// Tensor layout of a YOLO export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLayout {
    /// YOLOv5: `[1, N, 5 + classes]` with an objectness column
    AnchorRows,
    /// YOLOv8 / v5u: `[1, 4 + classes, N]`
    AnchorColumns,
    /// Transposed v8 export: `[1, N, 4 + classes]`
    AnchorFreeRows,
}

impl OutputLayout {
    /// Infer the layout from the output shape and class count
    pub fn infer(shape: &[usize], num_classes: usize) -> Result<Self, DetectionError> {
        if shape.len() != 3 || shape[0] != 1 {
            return Err(DetectionError::UnexpectedOutput(format!(
                "expected [1, _, _], got {:?}",
                shape
            )));
        }

        if shape[2] == num_classes + 5 {
            Ok(OutputLayout::AnchorRows)
        } else if shape[1] == num_classes + 4 {
            Ok(OutputLayout::AnchorColumns)
        } else if shape[2] == num_classes + 4 {
            Ok(OutputLayout::AnchorFreeRows)
        } else {
            Err(DetectionError::UnexpectedOutput(format!(
                "shape {:?} does not match {} classes",
                shape, num_classes
            )))
        }
    }
}

/// Decode raw model output into candidates above `conf_threshold`
pub fn decode_output(
    output: ArrayViewD<f32>,
    num_classes: usize,
    conf_threshold: f32,
) -> Result<Vec<Candidate>, DetectionError> {
    let layout = OutputLayout::infer(output.shape(), num_classes)?;
    let output: ArrayView3<f32> = output
        .into_dimensionality::<Ix3>()
        .map_err(|e| DetectionError::UnexpectedOutput(e.to_string()))?;

    let (anchors, class_offset) = match layout {
        OutputLayout::AnchorRows => (output.shape()[1], 5),
        OutputLayout::AnchorColumns => (output.shape()[2], 4),
        OutputLayout::AnchorFreeRows => (output.shape()[1], 4),
    };
    let value = |anchor: usize, attr: usize| match layout {
        OutputLayout::AnchorColumns => output[[0, attr, anchor]],
        _ => output[[0, anchor, attr]],
    };

    let mut candidates = Vec::new();
    for anchor in 0..anchors {
        let objectness = if layout == OutputLayout::AnchorRows {
            value(anchor, 4)
        } else {
            1.0
        };
        if objectness < conf_threshold {
            continue;
        }

        let (class_id, class_score) = (0..num_classes)
            .map(|c| (c, value(anchor, class_offset + c)))
            .fold((0, f32::MIN), |best, current| {
                if current.1 > best.1 {
                    current
                } else {
                    best
                }
            });

        let score = class_score * objectness;
        if score < conf_threshold {
            continue;
        }

        let (cx, cy, w, h) = (
            value(anchor, 0),
            value(anchor, 1),
            value(anchor, 2),
            value(anchor, 3),
        );
        candidates.push(Candidate {
            class_id,
            score,
            bbox: [cx - w / 2.0, cy - h / 2.0, cx + w / 2.0, cy + h / 2.0],
        });
    }

    Ok(candidates)
}

/// Class-wise greedy NMS, highest score first, capped at `max_detections`
pub fn non_max_suppression(
    mut candidates: Vec<Candidate>,
    iou_threshold: f32,
    max_detections: usize,
) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut kept: Vec<Candidate> = Vec::new();
    for candidate in candidates {
        if kept.len() >= max_detections {
            break;
        }
        let suppressed = kept
            .iter()
            .any(|k| k.class_id == candidate.class_id && k.iou(&candidate) > iou_threshold);
        if !suppressed {
            kept.push(candidate);
        }
    }

    kept
}
