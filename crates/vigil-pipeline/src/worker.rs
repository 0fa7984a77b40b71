use crate::handoff::WorkerEnd;
use tokio::task::JoinHandle;
use vigil_infer::{ModelRuntime, Postprocess};

/// Spawn the inference worker on the blocking pool.
///
/// The worker loops forever: block on the request queue, run the model,
/// run post-processing on success, post the job back. It exits when the
/// scheduler drops its end of the hand-off. A failed inference is logged
/// and swallowed — the job still goes back so the pipeline self-heals on
/// the next cycle. The worker never touches slot state; that stays with
/// the scheduler.
pub fn spawn_worker<M, P>(mut model: M, postprocess: P, ends: WorkerEnd) -> JoinHandle<()>
where
    M: ModelRuntime + 'static,
    P: Postprocess + 'static,
{
    let WorkerEnd {
        mut request_rx,
        response_tx,
    } = ends;

    tokio::task::spawn_blocking(move || {
        log::info!("inference worker running");

        while let Some(mut job) = request_rx.blocking_recv() {
            job.ok = model.run_inference(&job.input);

            if job.ok {
                match (model.output_tensor(0), model.output_tensor(1)) {
                    (Some(out0), Some(out1)) => {
                        postprocess.run(
                            job.model_rows,
                            job.model_cols,
                            job.src_height,
                            job.src_width,
                            out0,
                            out1,
                            &mut job.results,
                        );
                    }
                    _ => {
                        log::error!("model produced fewer than two output tensors");
                        job.ok = false;
                    }
                }
            } else {
                log::warn!("inference failed for slot {}, results left empty", job.slot);
            }

            if response_tx.blocking_send(job).is_err() {
                // Scheduler went away mid-flight.
                break;
            }
        }

        log::info!("inference worker stopped");
    })
}
