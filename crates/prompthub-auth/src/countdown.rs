//! Cancellable verification countdown
//!
//! A `Countdown` owns at most one background tokio task that decrements the
//! remaining seconds once per period until it reaches zero, then stops
//! itself. Starting again replaces the running task. Dropping the countdown
//! aborts the task so no tick ever fires against disposed state.
//!
//! Every start or cancel bumps a generation counter. A task only decrements
//! while its own generation is current, so a superseded task that is already
//! past its tick cannot touch the value of the run that replaced it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub struct Countdown {
    period: Duration,
    remaining: Arc<watch::Sender<u32>>,
    generation: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
}

impl Countdown {
    pub fn new(period: Duration) -> Self {
        let (remaining, _) = watch::channel(0);
        Self {
            period,
            remaining: Arc::new(remaining),
            generation: Arc::new(AtomicU64::new(0)),
            task: None,
        }
    }

    /// Start counting down from `seconds`, calling `on_tick` with the new
    /// remaining value after every decrement.
    ///
    /// Must be called from within a tokio runtime. A running countdown is
    /// cancelled first. Starting from zero sets the value without spawning.
    pub fn start<F>(&mut self, seconds: u32, on_tick: F)
    where
        F: Fn(u32) + Send + 'static,
    {
        self.cancel();
        self.remaining.send_replace(seconds);
        if seconds == 0 {
            return;
        }

        let run = self.generation.load(Ordering::SeqCst);
        let remaining = Arc::clone(&self.remaining);
        let generation = Arc::clone(&self.generation);
        let period = self.period;

        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let Some(left) = decrement(&remaining, &generation, run) else {
                    break;
                };
                if generation.load(Ordering::SeqCst) != run {
                    break;
                }
                on_tick(left);

                if left == 0 {
                    break;
                }
            }
        }));
    }

    /// Abort the running task, keeping the current remaining value.
    ///
    /// Returns whether a task was still running.
    pub fn cancel(&mut self) -> bool {
        self.generation.fetch_add(1, Ordering::SeqCst);
        match self.task.take() {
            Some(task) => {
                let was_running = !task.is_finished();
                task.abort();
                was_running
            }
            None => false,
        }
    }

    /// Cancel and zero the remaining value
    pub fn clear(&mut self) {
        self.cancel();
        self.remaining.send_replace(0);
    }

    pub fn remaining(&self) -> u32 {
        *self.remaining.borrow()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Watch the remaining seconds, e.g. to re-render a timer label
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.remaining.subscribe()
    }

}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Decrement on behalf of run `run`, or return `None` without touching the
/// value once a newer run or a cancel has taken over.
///
/// The generation is read inside the watch write lock, which `start` also
/// takes after bumping it.
fn decrement(remaining: &watch::Sender<u32>, generation: &AtomicU64, run: u64) -> Option<u32> {
    let mut left = None;
    remaining.send_if_modified(|value| {
        if generation.load(Ordering::SeqCst) != run {
            return false;
        }
        *value = value.saturating_sub(1);
        left = Some(*value);
        true
    });
    left
}

/// Render remaining seconds as `MM:SS`
pub fn format_remaining(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(180), "03:00");
        assert_eq!(format_remaining(61), "01:01");
        assert_eq!(format_remaining(9), "00:09");
        assert_eq!(format_remaining(0), "00:00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_counts_down_to_zero_and_stops() {
        let ticks = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&ticks);

        let mut countdown = Countdown::new(Duration::from_secs(1));
        countdown.start(180, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(countdown.remaining(), 180);
        assert!(countdown.is_running());

        tokio::time::sleep(Duration::from_millis(90_500)).await;
        assert_eq!(countdown.remaining(), 90);

        tokio::time::sleep(Duration::from_secs(100)).await;
        assert_eq!(countdown.remaining(), 0);
        assert_eq!(ticks.load(Ordering::SeqCst), 180);
        assert!(!countdown.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_freezes_value() {
        let mut countdown = Countdown::new(Duration::from_secs(1));
        countdown.start(10, |_| {});

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert!(countdown.cancel());
        assert_eq!(countdown.remaining(), 7);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(countdown.remaining(), 7);
        assert!(!countdown.is_running());
        assert!(!countdown.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_running_task() {
        let mut countdown = Countdown::new(Duration::from_secs(1));
        countdown.start(5, |_| {});
        tokio::time::sleep(Duration::from_millis(2_500)).await;
        assert_eq!(countdown.remaining(), 3);

        countdown.start(5, |_| {});
        assert_eq!(countdown.remaining(), 5);
        tokio::time::sleep(Duration::from_millis(1_500)).await;
        assert_eq!(countdown.remaining(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_task() {
        let ticks = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&ticks);

        let mut countdown = Countdown::new(Duration::from_secs(1));
        let watcher = countdown.subscribe();
        countdown.start(30, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(1_500)).await;
        drop(countdown);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
        // Sender dropped with the countdown and its task
        assert!(watcher.has_changed().is_err());
    }

    #[test]
    fn test_superseded_run_cannot_decrement() {
        let (remaining, mut watcher) = watch::channel(180);
        let generation = AtomicU64::new(1);

        assert_eq!(decrement(&remaining, &generation, 1), Some(179));
        assert!(watcher.has_changed().unwrap());
        watcher.borrow_and_update();

        // A resend bumped the generation and reloaded the value
        generation.fetch_add(1, Ordering::SeqCst);
        remaining.send_replace(180);
        watcher.borrow_and_update();

        assert_eq!(decrement(&remaining, &generation, 1), None);
        assert_eq!(*remaining.borrow(), 180);
        assert!(!watcher.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_keeps_full_duration() {
        let ticks = Arc::new(AtomicU32::new(0));
        let mut countdown = Countdown::new(Duration::from_secs(1));
        countdown.start(3, |_| {});
        tokio::time::sleep(Duration::from_millis(1_500)).await;

        let counter = Arc::clone(&ticks);
        countdown.start(3, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(2_500)).await;
        assert_eq!(countdown.remaining(), 1);
        assert_eq!(ticks.load(Ordering::SeqCst), 2);

        countdown.clear();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(countdown.remaining(), 0);
        assert_eq!(ticks.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_start_from_zero_does_not_spawn() {
        let mut countdown = Countdown::new(Duration::from_secs(1));
        countdown.start(0, |_| {});
        assert!(!countdown.is_running());
        assert_eq!(countdown.remaining(), 0);
    }
}
