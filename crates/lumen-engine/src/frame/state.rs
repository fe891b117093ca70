use std::fmt;

/// Where the current frame is in its acquire → record → submit → present cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FrameState {
    #[default]
    Idle,
    /// A view is held; nothing recorded yet.
    Acquired,
    /// One command buffer is recorded and not yet submitted.
    Recorded,
    /// The command buffer is on the queue; the frame awaits presentation.
    Submitted,
}

/// A frame-cycle step.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOp {
    Acquire,
    Record,
    Submit,
    Present,
}

impl fmt::Display for FrameOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Acquire => "acquire",
            Self::Record => "record",
            Self::Submit => "submit",
            Self::Present => "present",
        })
    }
}

/// A step was attempted out of order (e.g. submitting twice).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameError {
    pub op: FrameOp,
    pub state: FrameState,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot {} a frame in state {:?}", self.op, self.state)
    }
}

impl std::error::Error for FrameError {}

impl FrameState {
    fn advance(&mut self, op: FrameOp, from: FrameState, to: FrameState) -> Result<(), FrameError> {
        if *self != from {
            return Err(FrameError { op, state: *self });
        }
        *self = to;
        Ok(())
    }

    pub fn acquire(&mut self) -> Result<(), FrameError> {
        self.advance(FrameOp::Acquire, Self::Idle, Self::Acquired)
    }

    pub fn record(&mut self) -> Result<(), FrameError> {
        self.advance(FrameOp::Record, Self::Acquired, Self::Recorded)
    }

    pub fn submit(&mut self) -> Result<(), FrameError> {
        self.advance(FrameOp::Submit, Self::Recorded, Self::Submitted)
    }

    pub fn present(&mut self) -> Result<(), FrameError> {
        self.advance(FrameOp::Present, Self::Submitted, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_returns_to_idle() {
        let mut s = FrameState::default();
        s.acquire().unwrap();
        s.record().unwrap();
        s.submit().unwrap();
        s.present().unwrap();
        assert_eq!(s, FrameState::Idle);
    }

    #[test]
    fn submitting_twice_is_an_error() {
        let mut s = FrameState::default();
        s.acquire().unwrap();
        s.record().unwrap();
        s.submit().unwrap();

        let err = s.submit().unwrap_err();
        assert_eq!(
            err,
            FrameError {
                op: FrameOp::Submit,
                state: FrameState::Submitted
            }
        );
        assert_eq!(err.to_string(), "cannot submit a frame in state Submitted");
    }

    #[test]
    fn present_without_submit_is_an_error() {
        let mut s = FrameState::default();
        s.acquire().unwrap();
        assert!(s.present().is_err());
        // A failed step leaves the state untouched.
        assert_eq!(s, FrameState::Acquired);
    }

    #[test]
    fn second_acquire_before_present_is_an_error() {
        let mut s = FrameState::default();
        s.acquire().unwrap();
        assert_eq!(s.acquire().unwrap_err().op, FrameOp::Acquire);
    }
}
