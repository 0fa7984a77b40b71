use crate::PipelineError;
use tokio::sync::mpsc;
use vigil_infer::Detection;

/// One inference round trip. Created by the scheduler at submit, consumed
/// by the worker, and returned on the response queue with the results and
/// the runtime's success flag filled in.
///
/// `input` is the model input scratch buffer: it ping-pongs inside the job
/// (moved out on submit, moved back on harvest) so the scheduler can only
/// rewrite it after the previous response has been drained.
#[derive(Debug)]
pub struct InferenceJob {
    pub slot: usize,
    pub model_cols: usize,
    pub model_rows: usize,
    pub src_width: usize,
    pub src_height: usize,
    pub input: Vec<u8>,
    pub results: Vec<Detection>,
    pub ok: bool,
}

/// Scheduler side of the hand-off: capacity-1 request and response queues.
///
/// Capacity 1 enforces the at-most-one-in-flight invariant and gives
/// natural backpressure — a second submit cannot complete before the
/// first response is drained.
pub struct Handoff {
    request_tx: mpsc::Sender<InferenceJob>,
    response_rx: mpsc::Receiver<InferenceJob>,
}

/// Worker side of the hand-off.
pub struct WorkerEnd {
    pub(crate) request_rx: mpsc::Receiver<InferenceJob>,
    pub(crate) response_tx: mpsc::Sender<InferenceJob>,
}

/// Create a connected hand-off pair.
pub fn handoff() -> (Handoff, WorkerEnd) {
    let (request_tx, request_rx) = mpsc::channel(1);
    let (response_tx, response_rx) = mpsc::channel(1);
    (
        Handoff {
            request_tx,
            response_rx,
        },
        WorkerEnd {
            request_rx,
            response_tx,
        },
    )
}

impl Handoff {
    /// Send a job to the worker. Waits until the worker has drained the
    /// previous request; with one job outstanding at a time this never
    /// waits in practice.
    pub async fn submit(&self, job: InferenceJob) -> Result<(), PipelineError> {
        self.request_tx
            .send(job)
            .await
            .map_err(|_| PipelineError::ChannelClosed)
    }

    /// Receive the response for the previously submitted job. Waits for
    /// up to one inference latency; only the harvest step may call this.
    pub async fn harvest(&mut self) -> Result<InferenceJob, PipelineError> {
        self.response_rx
            .recv()
            .await
            .ok_or(PipelineError::ChannelClosed)
    }
}
