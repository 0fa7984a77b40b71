//! Demo pipeline run: baked test frames through the synthetic model,
//! detections reported on the console. Operator commands are read from
//! stdin: next, resume, suspend, exit.

use vigil_base::init_stdout_logger;
use vigil_infer::{DetectorPostprocess, SyntheticModel};
use vigil_pipeline::{ControlCommand, ControlHandle, Pipeline, PipelineConfig};
use vigil_sensor::{BakedSource, ConsoleSink};

const MODEL_ROWS: usize = 192;
const MODEL_COLS: usize = 192;
const FRAME_WIDTH: usize = 320;
const FRAME_HEIGHT: usize = 240;
const BAKED_FRAMES: usize = 3;

fn spawn_stdin_reader(control: ControlHandle) {
    // Plain thread rather than spawn_blocking so runtime shutdown never
    // waits on a pending read_line.
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match stdin.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    control.blocking_send(ControlCommand::Exit);
                    break;
                }
                Ok(_) => match line.trim() {
                    "next" => control.blocking_send(ControlCommand::Next),
                    "resume" => control.blocking_send(ControlCommand::Resume),
                    "suspend" => control.blocking_send(ControlCommand::Suspend),
                    "exit" => {
                        control.blocking_send(ControlCommand::Exit);
                        break;
                    }
                    "" => {}
                    other => {
                        log::warn!("unknown command '{other}' (next/resume/suspend/exit)");
                    }
                },
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    let model = SyntheticModel::new(MODEL_ROWS, MODEL_COLS).with_signed_input();
    let postprocess = DetectorPostprocess::default();
    let source = BakedSource::new(BakedSource::test_frames(
        BAKED_FRAMES,
        FRAME_WIDTH,
        FRAME_HEIGHT,
    )?);
    let sink = ConsoleSink::new();

    let config = PipelineConfig::default()
        .with_frame_width(FRAME_WIDTH)
        .with_frame_height(FRAME_HEIGHT);

    let (pipeline, control) = Pipeline::new(config, model, postprocess, source, sink)?;
    spawn_stdin_reader(control);

    log::info!("commands: next, resume, suspend, exit");
    pipeline.run().await?;

    Ok(())
}
