use vigil_base::Rect;

/// One detected object in source-image pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub class: usize,
    pub confidence: f32,
    pub rect: Rect<i32>,
}

/// Detector post-processing configuration.
///
/// The anchor table is a flat list of width/height pairs: the first three
/// pairs belong to the fine output head, the last three to the coarse one.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    conf_threshold: f32,
    iou_threshold: f32,
    num_classes: usize,
    anchors: Vec<f32>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            conf_threshold: 0.5,
            iou_threshold: 0.45,
            num_classes: crate::labels::default_labels().len(),
            anchors: vec![
                12.64, 19.39, 37.88, 51.48, 55.71, 138.31, // fine head
                79.57, 257.11, 140.63, 149.70, 279.92, 258.87, // coarse head
            ],
        }
    }
}

impl DetectorConfig {
    /// Set the minimum confidence for a detection to be kept.
    pub fn with_conf_threshold(mut self, conf_threshold: f32) -> Self {
        self.conf_threshold = conf_threshold;
        self
    }

    /// Set the IoU threshold used by non-maximum suppression.
    pub fn with_iou_threshold(mut self, iou_threshold: f32) -> Self {
        self.iou_threshold = iou_threshold;
        self
    }

    /// Set the number of object classes the model predicts.
    pub fn with_num_classes(mut self, num_classes: usize) -> Self {
        self.num_classes = num_classes;
        self
    }

    /// Replace the anchor table (flat width/height pairs, six pairs).
    pub fn with_anchors(mut self, anchors: Vec<f32>) -> Self {
        self.anchors = anchors;
        self
    }

    pub fn conf_threshold(&self) -> f32 {
        self.conf_threshold
    }

    pub fn iou_threshold(&self) -> f32 {
        self.iou_threshold
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    pub fn anchors(&self) -> &[f32] {
        &self.anchors
    }
}
