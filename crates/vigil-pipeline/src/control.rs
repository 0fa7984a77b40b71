use tokio::sync::mpsc;

/// Operator commands, mirroring the firmware shell:
/// `next` arms a single capture, `resume` runs continuously, `suspend`
/// halts capture while in-flight work keeps draining, `exit` terminates
/// the pipeline loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Next,
    Resume,
    Suspend,
    Exit,
}

/// Tri-state gate on the capture step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureGate {
    /// Capture every tick.
    Continuous,
    /// Capture once, then stop.
    OneShot,
    /// Capture nothing.
    Stopped,
}

impl CaptureGate {
    /// Apply a command. Returns true when the command asks the pipeline
    /// to exit.
    pub fn apply(&mut self, cmd: ControlCommand) -> bool {
        match cmd {
            ControlCommand::Next => {
                *self = CaptureGate::OneShot;
                false
            }
            ControlCommand::Resume => {
                *self = CaptureGate::Continuous;
                false
            }
            ControlCommand::Suspend => {
                *self = CaptureGate::Stopped;
                false
            }
            ControlCommand::Exit => {
                *self = CaptureGate::Stopped;
                true
            }
        }
    }

    /// Whether the capture step may run this tick. A OneShot gate is
    /// consumed by the call and drops back to Stopped.
    pub fn admit_capture(&mut self) -> bool {
        match *self {
            CaptureGate::Continuous => true,
            CaptureGate::OneShot => {
                *self = CaptureGate::Stopped;
                true
            }
            CaptureGate::Stopped => false,
        }
    }
}

/// Handle for sending operator commands into a running pipeline.
#[derive(Clone)]
pub struct ControlHandle {
    tx: mpsc::Sender<ControlCommand>,
}

impl ControlHandle {
    pub(crate) fn new(tx: mpsc::Sender<ControlCommand>) -> Self {
        Self { tx }
    }

    /// Send a command. Errors (pipeline already gone) are ignored, as an
    /// operator poking a dead pipeline has nothing useful to do with them.
    pub async fn send(&self, cmd: ControlCommand) {
        let _ = self.tx.send(cmd).await;
    }

    pub async fn next(&self) {
        self.send(ControlCommand::Next).await;
    }

    pub async fn resume(&self) {
        self.send(ControlCommand::Resume).await;
    }

    pub async fn suspend(&self) {
        self.send(ControlCommand::Suspend).await;
    }

    pub async fn exit(&self) {
        self.send(ControlCommand::Exit).await;
    }

    /// Send a command from outside the runtime, e.g. a stdin reader
    /// thread. Must not be called from an async context.
    pub fn blocking_send(&self, cmd: ControlCommand) {
        let _ = self.tx.blocking_send(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_then_suspend() {
        let mut gate = CaptureGate::Stopped;
        assert!(!gate.apply(ControlCommand::Resume));
        assert_eq!(gate, CaptureGate::Continuous);
        assert!(gate.admit_capture());
        assert!(gate.admit_capture());

        assert!(!gate.apply(ControlCommand::Suspend));
        assert!(!gate.admit_capture());
        assert!(!gate.admit_capture());
    }

    #[test]
    fn test_one_shot_is_consumed() {
        let mut gate = CaptureGate::Stopped;
        gate.apply(ControlCommand::Next);
        assert!(gate.admit_capture());
        assert!(!gate.admit_capture());
        assert_eq!(gate, CaptureGate::Stopped);
    }

    #[test]
    fn test_exit_requests_termination() {
        let mut gate = CaptureGate::Continuous;
        assert!(gate.apply(ControlCommand::Exit));
        assert!(!gate.admit_capture());
    }
}
