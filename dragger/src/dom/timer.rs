use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use super::next_handle;

pub type TimerCallback = Rc<dyn Fn()>;

/// Shortest period an interval may run at.
const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

struct Interval {
    id: TimerId,
    period: Duration,
    next_due: Duration,
    callback: TimerCallback,
}

/// Repeating timers on a virtual clock.
///
/// Time only moves when the host calls [`Scheduler::advance`], which runs
/// every callback that falls due, one at a time and in due order. No borrow
/// is held while a callback runs, so callbacks may set or clear intervals.
#[derive(Default)]
pub struct Scheduler {
    now: Cell<Duration>,
    intervals: RefCell<Vec<Interval>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time.
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn set_interval(&self, period: Duration, callback: impl Fn() + 'static) -> TimerId {
        let id = TimerId(next_handle());
        let period = period.max(MIN_PERIOD);
        self.intervals.borrow_mut().push(Interval {
            id,
            period,
            next_due: self.now.get() + period,
            callback: Rc::new(callback),
        });
        log::trace!("[timer] set_interval {:?} every {:?}", id, period);
        id
    }

    /// Cancel an interval. Unknown or already cleared ids are ignored.
    pub fn clear_interval(&self, id: TimerId) -> bool {
        let mut intervals = self.intervals.borrow_mut();
        let before = intervals.len();
        intervals.retain(|i| i.id != id);
        intervals.len() != before
    }

    pub fn active_timers(&self) -> usize {
        self.intervals.borrow().len()
    }

    /// Move the clock forward, firing every tick that falls inside the window.
    /// Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now.get() + by;
        let mut fired = 0;

        loop {
            let next = {
                let mut intervals = self.intervals.borrow_mut();
                let due = intervals
                    .iter_mut()
                    .filter(|i| i.next_due <= target)
                    .min_by_key(|i| i.next_due);
                due.map(|i| {
                    let at = i.next_due;
                    i.next_due += i.period;
                    (at, i.callback.clone())
                })
            };

            let Some((at, callback)) = next else {
                break;
            };
            self.now.set(at);
            callback();
            fired += 1;
        }

        self.now.set(target);
        fired
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.now.get())
            .field("active", &self.active_timers())
            .finish()
    }
}
