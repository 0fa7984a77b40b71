use crate::config::PipelineConfig;
use crate::control::{CaptureGate, ControlCommand, ControlHandle};
use crate::error::PipelineError;
use crate::handoff::{Handoff, InferenceJob, handoff};
use crate::slot::{FrameSlot, SlotPool, SlotState};
use crate::stats::FrameStats;
use crate::worker::spawn_worker;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use vigil_image::{Image, PixelFormat, draw_box, draw_tag, quantize_to_i8};
use vigil_infer::{ModelRuntime, Postprocess, default_labels};
use vigil_sensor::{DisplaySink, FrameSource};

const CONTROL_CAPACITY: usize = 8;
const BOX_COLOR: (u8, u8, u8) = (0, 0, 255);
const TAG_COLOR: (u8, u8, u8) = (255, 255, 255);

/// The pipeline scheduler: owns the slot pool, the scheduler side of the
/// hand-off, and the capture/display collaborators. The model and
/// post-processor move into the worker at construction.
///
/// Each `tick` advances every slot at most one lifecycle stage, in an
/// order that is load-bearing: harvest the previous inference before
/// submitting the next one (the input scratch buffer may only be
/// rewritten once the prior response is drained), render after submit,
/// capture last so it never waits behind the accelerator.
pub struct Pipeline<S: FrameSource, D: DisplaySink> {
    config: PipelineConfig,
    pool: SlotPool,
    handoff: Handoff,
    worker: JoinHandle<()>,
    source: S,
    sink: D,
    labels: Vec<String>,
    model_cols: usize,
    model_rows: usize,
    signed_input: bool,
    /// Model input scratch buffer. `None` exactly while an inference is
    /// in flight — the buffer travels inside the job.
    scratch: Option<Vec<u8>>,
    control_rx: mpsc::Receiver<ControlCommand>,
    gate: CaptureGate,
    stats: FrameStats,
    exit: bool,
}

impl<S: FrameSource, D: DisplaySink> Pipeline<S, D> {
    /// Build the pipeline and spawn its inference worker.
    ///
    /// Fails if the model input shape is missing, has fewer than three
    /// dimensions, or is not three-channel — the whole pipeline refuses
    /// to start rather than failing per frame.
    pub fn new<M, P>(
        config: PipelineConfig,
        model: M,
        postprocess: P,
        source: S,
        sink: D,
    ) -> Result<(Self, ControlHandle), PipelineError>
    where
        M: ModelRuntime + 'static,
        P: Postprocess + 'static,
    {
        let shape = model.input_shape();
        if shape.is_empty() {
            return Err(PipelineError::BadModel(
                "input tensor shape is missing".to_string(),
            ));
        }
        if shape.len() < 3 {
            return Err(PipelineError::BadModel(format!(
                "input tensor dimension should be >= 3, got {}",
                shape.len()
            )));
        }
        let ndim = shape.len();
        let model_rows = shape[ndim - 3];
        let model_cols = shape[ndim - 2];
        let channels = shape[ndim - 1];
        if channels != 3 {
            return Err(PipelineError::BadModel(format!(
                "expected 3-channel input, got {channels}"
            )));
        }

        let signed_input = model.is_data_signed();
        let scratch = vec![0u8; model_rows * model_cols * 3];

        let pool = SlotPool::new(
            config.slot_count(),
            config.frame_width(),
            config.frame_height(),
            config.frame_format(),
        )?;

        let (handoff, worker_end) = handoff();
        let worker = spawn_worker(model, postprocess, worker_end);

        let (control_tx, control_rx) = mpsc::channel(CONTROL_CAPACITY);

        log::info!(
            "pipeline up: {} slots of {}x{} {:?}, model input {}x{}{}",
            pool.len(),
            config.frame_width(),
            config.frame_height(),
            config.frame_format(),
            model_cols,
            model_rows,
            if signed_input { " (signed)" } else { "" }
        );

        let stats = FrameStats::new(config.stats_period());
        Ok((
            Self {
                config,
                pool,
                handoff,
                worker,
                source,
                sink,
                labels: default_labels(),
                model_cols,
                model_rows,
                signed_input,
                scratch: Some(scratch),
                control_rx,
                gate: CaptureGate::Continuous,
                stats,
                exit: false,
            },
            ControlHandle::new(control_tx),
        ))
    }

    pub fn pool(&self) -> &SlotPool {
        &self.pool
    }

    pub fn gate(&self) -> CaptureGate {
        self.gate
    }

    pub fn exit_requested(&self) -> bool {
        self.exit
    }

    /// Advance every slot at most one lifecycle stage.
    pub async fn tick(&mut self) -> Result<(), PipelineError> {
        self.drain_control();

        // Harvest: collect the response for the previous submission. This
        // is the only place the scheduler waits on the worker.
        let mut harvested: Option<InferenceJob> = None;
        if let Some(idx) = self.pool.find(SlotState::InFlight) {
            let mut job = self.handoff.harvest().await?;
            debug_assert_eq!(job.slot, idx);
            self.scratch = Some(std::mem::take(&mut job.input));
            harvested = Some(job);
        }

        // Submit: scale a full slot into the scratch buffer and hand it
        // to the worker. The scratch is guaranteed back by now.
        if let Some(idx) = self.pool.find(SlotState::Full) {
            if let Some(input) = self.scratch.take() {
                let job = self.prepare_job(idx, input)?;
                self.pool.slot_mut(idx).state = SlotState::InFlight;
                self.handoff.submit(job).await?;
            }
        }

        // Render: overlay and present the slot harvested above, then
        // recycle it.
        if let Some(job) = harvested {
            self.render(job)?;
        }

        // Capture: refill an empty slot, if the operator gate allows.
        if let Some(idx) = self.pool.find(SlotState::Empty) {
            if self.gate.admit_capture() {
                let slot = self.pool.slot_mut(idx);
                let started = Instant::now();
                self.source
                    .capture(&mut slot.image)
                    .await
                    .map_err(PipelineError::Capture)?;
                log::debug!("capture took {:?}", started.elapsed());
                slot.results.clear();
                slot.state = SlotState::Full;
            }
        }

        Ok(())
    }

    /// Run the tick loop until the operator exits or a fatal error hits.
    pub async fn run(mut self) -> Result<(), PipelineError> {
        while !self.exit {
            self.tick().await?;

            // Fully drained and suspended: park on the control channel
            // instead of spinning.
            if self.gate == CaptureGate::Stopped
                && !self.exit
                && self.pool.find(SlotState::InFlight).is_none()
                && self.pool.find(SlotState::Full).is_none()
            {
                log::info!("capture suspended; send next/resume/suspend/exit");
                match self.control_rx.recv().await {
                    Some(cmd) => {
                        if self.gate.apply(cmd) {
                            self.exit = true;
                        }
                    }
                    None => break,
                }
                continue;
            }

            tokio::time::sleep(self.config.tick()).await;
        }

        self.shutdown().await
    }

    fn drain_control(&mut self) {
        while let Ok(cmd) = self.control_rx.try_recv() {
            log::info!("operator command: {cmd:?}");
            if self.gate.apply(cmd) {
                self.exit = true;
            }
        }
    }

    /// Scale and quantize a full slot's frame into the model input
    /// buffer and wrap it in a job recording both geometries.
    fn prepare_job(&mut self, idx: usize, input: Vec<u8>) -> Result<InferenceJob, PipelineError> {
        let (model_cols, model_rows) = (self.model_cols, self.model_rows);
        let slot = self.pool.slot_mut(idx);

        let started = Instant::now();
        let mut model_input = Image::new(model_cols, model_rows, PixelFormat::Rgb888, input)?;
        slot.image.scale_into(&mut model_input)?;
        log::debug!("scale took {:?}", started.elapsed());

        if self.signed_input {
            let started = Instant::now();
            quantize_to_i8(&mut model_input.data);
            log::debug!("quantize took {:?}", started.elapsed());
        }

        Ok(InferenceJob {
            slot: idx,
            model_cols,
            model_rows,
            src_width: slot.image.width(),
            src_height: slot.image.height(),
            input: model_input.data,
            results: std::mem::take(&mut slot.results),
            ok: false,
        })
    }

    /// Draw overlays, present the frame, report results, recycle the slot.
    fn render(&mut self, job: InferenceJob) -> Result<(), PipelineError> {
        let idx = job.slot;

        {
            let FrameSlot {
                image,
                results,
                state,
            } = self.pool.slot_mut(idx);
            debug_assert_eq!(*state, SlotState::InFlight);
            *results = job.results;

            for det in results.iter() {
                draw_box(image, det.rect, BOX_COLOR);
                let tag_width = (det.rect.size.x / 2).max(8);
                draw_tag(
                    image,
                    det.rect.origin.x,
                    det.rect.origin.y - 6,
                    tag_width,
                    TAG_COLOR,
                );
            }

            self.sink.present(image).map_err(PipelineError::Display)?;

            log::info!("final results: {}", results.len());
            for (i, det) in results.iter().enumerate() {
                let label = self
                    .labels
                    .get(det.class)
                    .map(String::as_str)
                    .unwrap_or("?");
                log::info!(
                    "{i}) {label}({:.3}) -> box {{x={},y={},w={},h={}}}",
                    det.confidence,
                    det.rect.origin.x,
                    det.rect.origin.y,
                    det.rect.size.x,
                    det.rect.size.y
                );
            }

            results.clear();
            *state = SlotState::Empty;
        }

        if let Some(fps) = self.stats.record_frame() {
            log::info!("total inference rate: {fps:.1} frames/s");
            self.sink
                .present_status(&format!("frame rate {fps:.1}"))
                .map_err(PipelineError::Display)?;
        }

        Ok(())
    }

    async fn shutdown(self) -> Result<(), PipelineError> {
        let Pipeline {
            handoff, worker, ..
        } = self;

        // Closing the request queue is the worker's stop signal.
        drop(handoff);
        let _ = worker.await;

        log::info!("pipeline stopped");
        Ok(())
    }
}
