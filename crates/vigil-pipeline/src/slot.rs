use vigil_image::{Image, ImageError, PixelFormat};
use vigil_infer::Detection;

/// Lifecycle state of a frame slot. The state tag decides who may touch
/// the slot: the scheduler owns Empty and Full slots, the worker owns the
/// single InFlight slot's results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Empty,
    Full,
    InFlight,
}

/// One reusable frame buffer plus its detection results and state tag.
#[derive(Debug)]
pub struct FrameSlot {
    pub state: SlotState,
    pub image: Image,
    pub results: Vec<Detection>,
}

/// Fixed pool of frame slots, allocated once at startup and recycled for
/// the lifetime of the pipeline.
#[derive(Debug)]
pub struct SlotPool {
    slots: Vec<FrameSlot>,
}

impl SlotPool {
    /// Allocate `count` slots (count >= 1) of identical geometry.
    pub fn new(
        count: usize,
        width: usize,
        height: usize,
        format: PixelFormat,
    ) -> Result<Self, ImageError> {
        assert!(count >= 1, "slot pool needs at least one slot");
        let mut slots = Vec::with_capacity(count);
        for _ in 0..count {
            slots.push(FrameSlot {
                state: SlotState::Empty,
                image: Image::zeroed(width, height, format)?,
                results: Vec::new(),
            });
        }
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// First slot in `state`, scanning in index order. The pool is small
    /// (2-4 slots) so a linear scan is fine.
    pub fn find(&self, state: SlotState) -> Option<usize> {
        self.slots.iter().position(|s| s.state == state)
    }

    pub fn slot(&self, index: usize) -> &FrameSlot {
        &self.slots[index]
    }

    pub fn slot_mut(&mut self, index: usize) -> &mut FrameSlot {
        &mut self.slots[index]
    }

    /// Number of slots currently owned by the worker. The capacity-1
    /// hand-off keeps this at most 1; tests assert it.
    pub fn in_flight_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| s.state == SlotState::InFlight)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(count: usize) -> SlotPool {
        SlotPool::new(count, 4, 4, PixelFormat::Rgb565).unwrap()
    }

    #[test]
    fn test_new_pool_all_empty() {
        let pool = pool(2);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.find(SlotState::Empty), Some(0));
        assert_eq!(pool.find(SlotState::Full), None);
        assert_eq!(pool.find(SlotState::InFlight), None);
        assert_eq!(pool.in_flight_count(), 0);
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut pool = pool(3);
        pool.slot_mut(0).state = SlotState::Full;
        pool.slot_mut(2).state = SlotState::Full;
        assert_eq!(pool.find(SlotState::Full), Some(0));
        assert_eq!(pool.find(SlotState::Empty), Some(1));
    }

    #[test]
    fn test_in_flight_count() {
        let mut pool = pool(2);
        pool.slot_mut(1).state = SlotState::InFlight;
        assert_eq!(pool.in_flight_count(), 1);
        assert_eq!(pool.find(SlotState::InFlight), Some(1));
    }

    #[test]
    #[should_panic]
    fn test_zero_slots_panics() {
        let _ = pool(0);
    }
}
