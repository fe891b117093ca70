use super::{FrameError, FrameState, FrameTarget, PassPlan};

/// Result of one loop iteration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// A frame was recorded, submitted and presented.
    Presented,
    /// No view was available; nothing was recorded.
    Skipped,
    /// The close flag was set; the loop is finished and renders nothing more.
    Closed,
}

/// Running counters over the loop's lifetime.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct FrameStats {
    pub presented: u64,
    pub skipped: u64,
    pub draws: u64,
    pub submits: u64,
}

/// Drives [`FrameTarget`]s through the acquire/record/submit/present cycle.
#[derive(Debug, Default)]
pub struct FrameLoop {
    plan: PassPlan,
    state: FrameState,
    stats: FrameStats,
    closed: bool,
}

impl FrameLoop {
    pub fn new(plan: PassPlan) -> Self {
        Self {
            plan,
            ..Default::default()
        }
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// One iteration of the outer loop.
    ///
    /// `close_requested` is checked before anything else; once it has been
    /// seen, every later call returns [`FrameOutcome::Closed`].
    pub fn iterate<T: FrameTarget>(
        &mut self,
        close_requested: bool,
        target: &mut T,
    ) -> Result<FrameOutcome, FrameError> {
        if close_requested && !self.closed {
            log::info!(
                "close requested after {} frames ({} skipped)",
                self.stats.presented,
                self.stats.skipped
            );
            self.closed = true;
        }
        if self.closed {
            return Ok(FrameOutcome::Closed);
        }

        self.run_frame(target)
    }

    /// Acquires a view and, if one is available, records, submits and
    /// presents a single pass into it.
    pub fn run_frame<T: FrameTarget>(&mut self, target: &mut T) -> Result<FrameOutcome, FrameError> {
        let Some(view) = target.acquire_view() else {
            self.stats.skipped += 1;
            return Ok(FrameOutcome::Skipped);
        };
        self.state.acquire()?;

        let commands = target.encode(&view, &self.plan);
        self.state.record()?;
        self.stats.draws += 1;

        target.submit(commands);
        self.state.submit()?;
        self.stats.submits += 1;

        target.present(view);
        self.state.present()?;
        self.stats.presented += 1;

        Ok(FrameOutcome::Presented)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::frame::{CLEAR_COLOR, FRAME_MARKER};

    /// Records every call; views are numbered, availability is scripted.
    #[derive(Default)]
    struct FakeTarget {
        available: VecDeque<bool>,
        next_view: u32,
        live_views: u32,
        encoded: Vec<(u32, PassPlan)>,
        submitted: Vec<u32>,
        presented: Vec<u32>,
    }

    impl FakeTarget {
        fn scripted(available: &[bool]) -> Self {
            Self {
                available: available.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl FrameTarget for FakeTarget {
        type View = u32;
        type Commands = u32;

        fn acquire_view(&mut self) -> Option<u32> {
            if !self.available.pop_front().unwrap_or(true) {
                return None;
            }
            assert_eq!(self.live_views, 0, "previous view not released");
            self.next_view += 1;
            self.live_views += 1;
            Some(self.next_view)
        }

        fn encode(&mut self, view: &u32, plan: &PassPlan) -> u32 {
            self.encoded.push((*view, plan.clone()));
            *view
        }

        fn submit(&mut self, commands: u32) {
            self.submitted.push(commands);
        }

        fn present(&mut self, view: u32) {
            self.presented.push(view);
            self.live_views -= 1;
        }
    }

    #[test]
    fn happy_path_frame() {
        let mut frames = FrameLoop::new(PassPlan::triangle());
        let mut target = FakeTarget::default();

        let outcome = frames.iterate(false, &mut target).unwrap();

        assert_eq!(outcome, FrameOutcome::Presented);
        assert_eq!(target.encoded.len(), 1);
        let (view, plan) = &target.encoded[0];
        assert_eq!(*view, 1);
        assert_eq!(plan.clear, CLEAR_COLOR);
        assert_eq!(plan.marker, FRAME_MARKER);
        assert_eq!((plan.vertices.clone(), plan.instances.clone()), (0..3, 0..1));
        assert_eq!(target.submitted, vec![1]);
        assert_eq!(target.presented, vec![1]);
        assert_eq!(target.live_views, 0);
    }

    #[test]
    fn lost_surface_drops_only_that_frame() {
        let mut frames = FrameLoop::new(PassPlan::triangle());
        let mut target = FakeTarget::scripted(&[true, false, true]);

        assert_eq!(frames.iterate(false, &mut target).unwrap(), FrameOutcome::Presented);

        let draws_before = target.encoded.len();
        let presents_before = target.presented.len();
        assert_eq!(frames.iterate(false, &mut target).unwrap(), FrameOutcome::Skipped);
        assert_eq!(target.encoded.len(), draws_before);
        assert_eq!(target.presented.len(), presents_before);
        assert!(target.submitted.len() == presents_before);

        assert_eq!(frames.iterate(false, &mut target).unwrap(), FrameOutcome::Presented);
        assert_eq!(target.presented, vec![1, 2]);

        assert_eq!(
            frames.stats(),
            FrameStats {
                presented: 2,
                skipped: 1,
                draws: 2,
                submits: 2,
            }
        );
    }

    #[test]
    fn close_before_first_iteration_records_nothing() {
        let mut frames = FrameLoop::new(PassPlan::triangle());
        let mut target = FakeTarget::default();

        assert_eq!(frames.iterate(true, &mut target).unwrap(), FrameOutcome::Closed);
        assert!(frames.is_closed());
        assert!(target.encoded.is_empty());
        assert!(target.presented.is_empty());
        assert_eq!(target.next_view, 0, "no view acquired");
        assert_eq!(frames.stats(), FrameStats::default());
    }

    #[test]
    fn closed_loop_stays_closed() {
        let mut frames = FrameLoop::new(PassPlan::triangle());
        let mut target = FakeTarget::default();

        frames.iterate(false, &mut target).unwrap();
        frames.iterate(true, &mut target).unwrap();
        assert_eq!(frames.iterate(false, &mut target).unwrap(), FrameOutcome::Closed);
        assert_eq!(target.presented.len(), 1);
    }

    #[test]
    fn every_frame_submits_exactly_one_buffer() {
        let mut frames = FrameLoop::new(PassPlan::triangle());
        let mut target = FakeTarget::default();

        for _ in 0..4 {
            frames.iterate(false, &mut target).unwrap();
        }
        assert_eq!(target.submitted, vec![1, 2, 3, 4]);
        assert_eq!(target.submitted, target.presented);
    }
}
