use crate::detection::{Detection, DetectorConfig};
use crate::runtime::OutputTensor;
use std::collections::VecDeque;
use vigil_base::{Rect, Vec2};

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Intersection over Union between two boxes.
fn iou(a: &Rect<f32>, b: &Rect<f32>) -> f32 {
    match a.intersection(*b) {
        None => 0.0,
        Some(inter) => {
            let inter_area = inter.area();
            let union_area = a.area() + b.area() - inter_area;
            if union_area > 0.0 {
                inter_area / union_area
            } else {
                0.0
            }
        }
    }
}

/// Class-aware non-maximum suppression. Returns indices of boxes to keep.
fn nms(candidates: &[(Rect<f32>, f32, usize)], iou_threshold: f32) -> Vec<usize> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut indices: VecDeque<usize> = {
        let mut v: Vec<usize> = (0..candidates.len()).collect();
        v.sort_by(|&a, &b| {
            candidates[b]
                .1
                .partial_cmp(&candidates[a].1)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        v.into()
    };

    let mut keep = Vec::new();

    while let Some(current) = indices.pop_front() {
        keep.push(current);

        indices.retain(|&idx| {
            candidates[idx].2 != candidates[current].2
                || iou(&candidates[current].0, &candidates[idx].0) < iou_threshold
        });
    }

    keep
}

/// The post-processor boundary: turns raw output heads into detections in
/// source-image coordinates. The worker appends into `results` and never
/// clears it; the scheduler clears before reuse.
pub trait Postprocess: Send {
    #[allow(clippy::too_many_arguments)]
    fn run(
        &self,
        model_rows: usize,
        model_cols: usize,
        src_height: usize,
        src_width: usize,
        out0: &OutputTensor,
        out1: &OutputTensor,
        results: &mut Vec<Detection>,
    );
}

/// YOLO-fastest style two-head detector post-processing: per-cell anchor
/// decode with sigmoid activations, confidence thresholding, and NMS.
#[derive(Debug, Clone)]
pub struct DetectorPostprocess {
    config: DetectorConfig,
}

impl Default for DetectorPostprocess {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

impl DetectorPostprocess {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Anchor width/height pairs for one head. Output 0 is the coarse
    /// grid (last three pairs of the table), output 1 the fine grid.
    fn head_anchors(&self, head: usize) -> &[f32] {
        let anchors = self.config.anchors();
        let pairs = anchors.len() / 2;
        let per_head = pairs / 2;
        if head == 0 {
            &anchors[per_head * 2..]
        } else {
            &anchors[..per_head * 2]
        }
    }

    fn decode_head(
        &self,
        head: usize,
        out: &OutputTensor,
        model_rows: usize,
        model_cols: usize,
        candidates: &mut Vec<(Rect<f32>, f32, usize)>,
    ) {
        // Accept [gh, gw, c] or [1, gh, gw, c].
        let shape: &[usize] = match out.shape.as_slice() {
            [1, rest @ ..] if rest.len() == 3 => rest,
            s if s.len() == 3 => s,
            s => {
                log::warn!("unexpected output tensor rank {:?}, head skipped", s);
                return;
            }
        };
        let (gh, gw, channels) = (shape[0], shape[1], shape[2]);

        let anchors = self.head_anchors(head);
        let num_anchors = anchors.len() / 2;
        let num_classes = self.config.num_classes();
        let stride = 5 + num_classes;

        if channels != num_anchors * stride || out.data.len() != gh * gw * channels {
            log::warn!(
                "output head {} has {} channels, expected {} ({} anchors x {} values), head skipped",
                head,
                channels,
                num_anchors * stride,
                num_anchors,
                stride
            );
            return;
        }

        let conf_threshold = self.config.conf_threshold();

        for j in 0..gh {
            for i in 0..gw {
                let cell = (j * gw + i) * channels;
                for a in 0..num_anchors {
                    let base = cell + a * stride;
                    let objectness = sigmoid(out.data[base + 4]);
                    if objectness < conf_threshold {
                        continue;
                    }

                    let (mut best_class, mut best_score) = (0, 0.0f32);
                    for c in 0..num_classes {
                        let score = sigmoid(out.data[base + 5 + c]);
                        if score > best_score {
                            best_class = c;
                            best_score = score;
                        }
                    }

                    let confidence = objectness * best_score;
                    if confidence < conf_threshold {
                        continue;
                    }

                    // Decode to fractions of the model input frame.
                    let bx = (i as f32 + sigmoid(out.data[base])) / gw as f32;
                    let by = (j as f32 + sigmoid(out.data[base + 1])) / gh as f32;
                    let bw = anchors[a * 2] * out.data[base + 2].exp() / model_cols as f32;
                    let bh = anchors[a * 2 + 1] * out.data[base + 3].exp() / model_rows as f32;

                    let rect = Rect::from_min_max(
                        Vec2::new(bx - bw / 2.0, by - bh / 2.0),
                        Vec2::new(bx + bw / 2.0, by + bh / 2.0),
                    );
                    candidates.push((rect, confidence, best_class));
                }
            }
        }
    }
}

impl Postprocess for DetectorPostprocess {
    fn run(
        &self,
        model_rows: usize,
        model_cols: usize,
        src_height: usize,
        src_width: usize,
        out0: &OutputTensor,
        out1: &OutputTensor,
        results: &mut Vec<Detection>,
    ) {
        let mut candidates = Vec::new();
        self.decode_head(0, out0, model_rows, model_cols, &mut candidates);
        self.decode_head(1, out1, model_rows, model_cols, &mut candidates);

        for idx in nms(&candidates, self.config.iou_threshold()) {
            let (rect, confidence, class) = candidates[idx];

            // Fractional coords to source pixels, clamped to the frame.
            let x0 = (rect.origin.x * src_width as f32) as i32;
            let y0 = (rect.origin.y * src_height as f32) as i32;
            let x1 = ((rect.origin.x + rect.size.x) * src_width as f32) as i32;
            let y1 = ((rect.origin.y + rect.size.y) * src_height as f32) as i32;

            let x0 = x0.clamp(0, src_width as i32 - 1);
            let y0 = y0.clamp(0, src_height as i32 - 1);
            let x1 = x1.clamp(0, src_width as i32);
            let y1 = y1.clamp(0, src_height as i32);

            results.push(Detection {
                class,
                confidence,
                rect: Rect::from_min_max(Vec2::new(x0, y0), Vec2::new(x1, y1)),
            });
        }
    }
}
