//! Deferred actions on a virtual clock.
//!
//! Nothing here reads wall-clock time: the clock only moves when the session
//! is ticked, so tests can drive it deterministically. Every action is stamped
//! with the generation current at scheduling time; bumping the generation
//! cancels everything scheduled before it.

use std::collections::VecDeque;
use std::time::Duration;

use bevy::prelude::*;

use super::geometry::{TileGrid, TileOrientation};

/// Work deferred until its due time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Leave corner collection and fill the marked area
    CompleteCorners,
    /// Create one tile of the running job
    PlaceTile {
        index: usize,
        center: Vec3,
        orientation: TileOrientation,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledAction {
    pub due: Duration,
    pub generation: u64,
    pub action: Action,
}

/// The fill currently draining through the scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePlacementJob {
    pub rows: usize,
    pub cols: usize,
    pub total: usize,
    placed: usize,
}

impl TilePlacementJob {
    pub fn placed(&self) -> usize {
        self.placed
    }

    pub fn is_complete(&self) -> bool {
        self.placed == self.total
    }

    /// Count one placement. Returns true only on the placement that completes the job.
    fn record_placement(&mut self) -> bool {
        if self.placed >= self.total {
            return false;
        }
        self.placed += 1;
        self.placed == self.total
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    generation: u64,
    /// Sorted by due time; equal due times keep scheduling order
    pending: VecDeque<ScheduledAction>,
    job: Option<TilePlacementJob>,
}

impl Scheduler {
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn job(&self) -> Option<&TilePlacementJob> {
        self.job.as_ref()
    }

    /// True while a fill still has tiles left to place
    pub fn is_draining(&self) -> bool {
        self.job.as_ref().is_some_and(|job| !job.is_complete())
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn schedule_after(&mut self, delay: Duration, action: Action) {
        let due = self.now + delay;
        let index = self.pending.partition_point(|scheduled| scheduled.due <= due);
        self.pending.insert(
            index,
            ScheduledAction {
                due,
                generation: self.generation,
                action,
            },
        );
    }

    /// Start a job for `grid`, scheduling tile `i` at `i * stagger` from now
    pub fn begin_job(&mut self, grid: &TileGrid, orientation: TileOrientation, stagger: Duration) {
        self.job = Some(TilePlacementJob {
            rows: grid.rows,
            cols: grid.cols,
            total: grid.len(),
            placed: 0,
        });

        for (index, center) in grid.centers.iter().enumerate() {
            let delay = stagger.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
            self.schedule_after(
                delay,
                Action::PlaceTile {
                    index,
                    center: *center,
                    orientation,
                },
            );
        }
    }

    /// Count a completed tile placement. Returns the job total when this
    /// placement finished the job.
    pub fn record_placement(&mut self) -> Option<usize> {
        let job = self.job.as_mut()?;
        if !job.record_placement() {
            return None;
        }
        let total = job.total;
        self.job = None;
        Some(total)
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.now += elapsed;
    }

    /// Take the earliest action that is due and still current
    pub fn pop_due(&mut self) -> Option<ScheduledAction> {
        while self.pending.front()?.due <= self.now {
            let scheduled = self.pending.pop_front()?;
            if scheduled.generation == self.generation {
                return Some(scheduled);
            }
            trace!("Dropping stale {:?}", scheduled.action);
        }
        None
    }

    /// Drop a pending corner fill, leaving the running job alone. Returns
    /// true if one was pending.
    pub fn cancel_corner_fill(&mut self) -> bool {
        let before = self.pending.len();
        self.pending
            .retain(|scheduled| scheduled.action != Action::CompleteCorners);
        self.pending.len() != before
    }

    /// Cancel every pending action and the running job
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.job = None;
        let generation = self.generation;
        self.pending.retain(|scheduled| scheduled.generation == generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(count: usize) -> TileGrid {
        TileGrid {
            rows: 1,
            cols: count,
            centers: (0..count).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect(),
        }
    }

    fn drain(scheduler: &mut Scheduler) -> Vec<ScheduledAction> {
        std::iter::from_fn(|| scheduler.pop_due()).collect()
    }

    #[test]
    fn test_nothing_due_before_time() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule_after(Duration::from_millis(500), Action::CompleteCorners);

        scheduler.advance(Duration::from_millis(499));
        assert!(scheduler.pop_due().is_none());

        scheduler.advance(Duration::from_millis(1));
        let due = scheduler.pop_due().map(|scheduled| scheduled.action);
        assert_eq!(due, Some(Action::CompleteCorners));
    }

    #[test]
    fn test_actions_fire_in_due_order() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule_after(Duration::from_millis(30), Action::CompleteCorners);
        scheduler.begin_job(&grid_of(2), TileOrientation::Vertical, Duration::from_millis(50));

        scheduler.advance(Duration::from_millis(100));
        let dues: Vec<_> = drain(&mut scheduler).iter().map(|s| s.due).collect();
        assert_eq!(
            dues,
            vec![
                Duration::ZERO,
                Duration::from_millis(30),
                Duration::from_millis(50)
            ]
        );
    }

    #[test]
    fn test_job_tiles_are_staggered() {
        let mut scheduler = Scheduler::default();
        scheduler.advance(Duration::from_secs(1));
        scheduler.begin_job(&grid_of(4), TileOrientation::Vertical, Duration::from_millis(50));

        scheduler.advance(Duration::from_millis(200));
        for (i, scheduled) in drain(&mut scheduler).into_iter().enumerate() {
            let offset = Duration::from_millis(50 * i as u64);
            assert_eq!(scheduled.due, Duration::from_secs(1) + offset);
            assert!(matches!(scheduled.action, Action::PlaceTile { index, .. } if index == i));
        }
    }

    #[test]
    fn test_job_completes_once() {
        let mut scheduler = Scheduler::default();
        scheduler.begin_job(&grid_of(3), TileOrientation::Vertical, Duration::from_millis(50));
        assert!(scheduler.is_draining());

        assert_eq!(scheduler.record_placement(), None);
        assert_eq!(scheduler.record_placement(), None);
        assert_eq!(scheduler.job().map(|job| job.placed()), Some(2));
        assert_eq!(scheduler.record_placement(), Some(3));

        assert!(!scheduler.is_draining());
        assert!(scheduler.job().is_none());
        assert_eq!(scheduler.record_placement(), None);
    }

    #[test]
    fn test_invalidate_cancels_pending_work() {
        let mut scheduler = Scheduler::default();
        scheduler.begin_job(&grid_of(5), TileOrientation::Vertical, Duration::from_millis(50));
        let before = scheduler.generation();

        scheduler.invalidate();
        assert_eq!(scheduler.generation(), before + 1);
        assert!(scheduler.job().is_none());
        assert_eq!(scheduler.pending_len(), 0);

        scheduler.advance(Duration::from_secs(1));
        assert!(scheduler.pop_due().is_none());
    }

    #[test]
    fn test_cancel_corner_fill_keeps_tiles() {
        let mut scheduler = Scheduler::default();
        scheduler.begin_job(&grid_of(3), TileOrientation::Vertical, Duration::from_millis(50));
        scheduler.schedule_after(Duration::from_millis(500), Action::CompleteCorners);

        assert!(scheduler.cancel_corner_fill());
        assert!(!scheduler.cancel_corner_fill());
        assert_eq!(scheduler.pending_len(), 3);
        assert!(scheduler.job().is_some());

        scheduler.advance(Duration::from_secs(1));
        let actions = drain(&mut scheduler);
        assert_eq!(actions.len(), 3);
        assert!(actions
            .iter()
            .all(|scheduled| matches!(scheduled.action, Action::PlaceTile { .. })));
    }

    #[test]
    fn test_work_scheduled_after_invalidate_still_runs() {
        let mut scheduler = Scheduler::default();
        scheduler.invalidate();
        scheduler.schedule_after(Duration::ZERO, Action::CompleteCorners);
        assert!(scheduler.pop_due().is_some());
    }
}
