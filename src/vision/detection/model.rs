// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! YOLO object detection model running on ONNX Runtime

use anyhow::{Context, Result};
use image::DynamicImage;
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, info};

use super::labels::{class_name, COCO_CLASSES};
use super::postprocessing::{decode_output, non_max_suppression};
use super::preprocessing::{preprocess_for_detection, YOLO_INPUT_SIZE};
use super::{DetectionError, ObjectDetector};
use crate::material::RawDetection;

/// Inference parameters for a YOLO export
#[derive(Debug, Clone, PartialEq)]
pub struct YoloParams {
    /// Square model input size (640 typical)
    pub input_size: u32,
    /// Minimum class score (0..1)
    pub conf_threshold: f32,
    /// NMS overlap threshold (0..1)
    pub iou_threshold: f32,
    pub max_detections: usize,
}

impl Default for YoloParams {
    fn default() -> Self {
        Self {
            input_size: YOLO_INPUT_SIZE,
            conf_threshold: 0.25,
            iou_threshold: 0.45,
            max_detections: 300,
        }
    }
}

/// YOLO detector over the COCO-80 classes
///
/// Runs on CPU; the session is shared behind a mutex because inference
/// needs exclusive access.
#[derive(Clone)]
pub struct YoloDetectionModel {
    session: Arc<Mutex<Session>>,
    input_name: String,
    params: YoloParams,
    model_name: String,
}

impl std::fmt::Debug for YoloDetectionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YoloDetectionModel")
            .field("input_name", &self.input_name)
            .field("params", &self.params)
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl YoloDetectionModel {
    /// Load a YOLO ONNX export
    ///
    /// # Errors
    /// Returns error if:
    /// - Model file not found
    /// - ONNX Runtime initialization fails
    pub async fn new<P: AsRef<Path>>(model_path: P, params: YoloParams) -> Result<Self> {
        let model_path = model_path.as_ref();

        if !model_path.exists() {
            return Err(DetectionError::ModelNotFound(model_path.display().to_string()).into());
        }

        info!("Loading YOLO detection model from {}", model_path.display());

        let session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("Failed to set optimization level")?
            .with_intra_threads(4)
            .context("Failed to set intra threads")?
            .commit_from_file(model_path)
            .context(format!(
                "Failed to load YOLO model from {}",
                model_path.display()
            ))?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .unwrap_or_else(|| "images".to_string());

        if let Some(input) = session.inputs.first() {
            debug!("Detection model input: {} {:?}", input_name, input.input_type);
        }

        let model_name = model_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "yolo".to_string());

        info!("✅ YOLO detection model loaded: {} (CPU-only)", model_name);

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            input_name,
            params,
            model_name,
        })
    }

    pub fn params(&self) -> &YoloParams {
        &self.params
    }

    fn run(&self, image: &DynamicImage) -> Result<Vec<RawDetection>, DetectionError> {
        let started = Instant::now();
        let (input, letterbox) = preprocess_for_detection(image, self.params.input_size);

        let input_value =
            Value::from_array(input).map_err(|e| DetectionError::Inference(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| DetectionError::Inference("detection session lock poisoned".into()))?;

        let outputs = session
            .run(ort::inputs![&self.input_name => input_value])
            .map_err(|e| DetectionError::Inference(e.to_string()))?;

        let output_tensor = outputs[0]
            .try_extract_array::<f32>()
            .map_err(|e| DetectionError::UnexpectedOutput(e.to_string()))?;

        debug!("Detection output shape: {:?}", output_tensor.shape());

        let candidates = decode_output(
            output_tensor.view(),
            COCO_CLASSES.len(),
            self.params.conf_threshold,
        )?;
        let kept = non_max_suppression(
            candidates,
            self.params.iou_threshold,
            self.params.max_detections,
        );

        let detections: Vec<RawDetection> = kept
            .into_iter()
            .map(|candidate| {
                let [x1, y1, x2, y2] = letterbox.to_source(candidate.bbox);
                RawDetection::new(
                    class_name(candidate.class_id),
                    candidate.score as f64,
                    [x1 as f64, y1 as f64, x2 as f64, y2 as f64],
                )
            })
            .collect();

        debug!(
            "YOLO inference: {} detections in {}ms",
            detections.len(),
            started.elapsed().as_millis()
        );

        Ok(detections)
    }
}

impl ObjectDetector for YoloDetectionModel {
    fn detect(&self, image: &DynamicImage) -> Result<Vec<RawDetection>, DetectionError> {
        self.run(image)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
