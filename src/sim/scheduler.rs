use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::model::SimTime;

/// Opaque handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// What a timer does when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    /// Re-apply an active effect's delta.
    Tick { effect_id: String },
    /// Remove an active effect at the end of its duration.
    Expire { effect_id: String },
}

#[derive(Debug)]
struct Timer {
    action: TimerAction,
    /// Repeat period in milliseconds; `None` for one-shot timers.
    every: Option<u64>,
}

/// Deterministic timer queue over simulated time.
///
/// Timers fire in `(fire time, scheduling order)` order, so a timer scheduled
/// earlier wins a tie at the same instant. Cancelled timers stay in the heap
/// and are skipped when popped.
#[derive(Debug)]
pub struct TimerQueue {
    now: SimTime,
    next_seq: u64,
    next_handle: u64,
    heap: BinaryHeap<Reverse<(SimTime, u64, TimerHandle)>>,
    timers: HashMap<TimerHandle, Timer>,
}

impl TimerQueue {
    pub fn new(start: SimTime) -> Self {
        Self {
            now: start,
            next_seq: 0,
            next_handle: 1,
            heap: BinaryHeap::new(),
            timers: HashMap::new(),
        }
    }

    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Fire `action` once, `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u64, action: TimerAction) -> TimerHandle {
        self.insert(delay_ms, action, None)
    }

    /// Fire `action` every `period_ms`, starting one period from now.
    ///
    /// A zero period is treated as one millisecond.
    pub fn schedule_every(&mut self, period_ms: u64, action: TimerAction) -> TimerHandle {
        let period = period_ms.max(1);
        self.insert(period, action, Some(period))
    }

    fn insert(&mut self, delay_ms: u64, action: TimerAction, every: Option<u64>) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.timers.insert(handle, Timer { action, every });
        self.push(self.now + delay_ms, handle);
        handle
    }

    fn push(&mut self, at: SimTime, handle: TimerHandle) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse((at, seq, handle)));
    }

    /// Cancel a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.remove(&handle).is_some()
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle)
    }

    /// Number of live (not cancelled, not yet fired) timers.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Pop the next live timer due at or before `limit`, moving the clock to
    /// its fire time. Repeating timers are re-queued for their next period.
    pub fn next_due(&mut self, limit: SimTime) -> Option<TimerAction> {
        while let Some(Reverse((at, _, handle))) = self.heap.peek().copied() {
            if at > limit {
                return None;
            }
            self.heap.pop();
            let Some(timer) = self.timers.get(&handle) else {
                continue;
            };
            let action = timer.action.clone();
            let every = timer.every;
            self.now = at;
            match every {
                Some(period) => self.push(at + period, handle),
                None => {
                    self.timers.remove(&handle);
                }
            }
            return Some(action);
        }
        None
    }

    /// Move the clock forward to `time` once every due timer has fired.
    /// Never moves the clock backwards.
    pub fn settle(&mut self, time: SimTime) {
        if time > self.now {
            self.now = time;
        }
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new(SimTime::ZERO)
    }
}
