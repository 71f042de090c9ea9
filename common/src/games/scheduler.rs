use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a deferred task. Cancelling an already finished task is a no-op.
pub trait ScheduledTask: Send {
    fn cancel(&self);
}

/// Runs a task once after a fixed delay.
pub trait Scheduler: Send + Sync + 'static {
    fn schedule(&self, delay: Duration, task: Task) -> Box<dyn ScheduledTask>;
}

pub struct TokioScheduler {
    runtime: Handle,
}

impl TokioScheduler {
    /// Must be called from inside a tokio runtime.
    pub fn current() -> Self {
        Self {
            runtime: Handle::current(),
        }
    }
}

struct TokioTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask for TokioTask {
    fn cancel(&self) {
        self.handle.abort();
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Box<dyn ScheduledTask> {
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        Box::new(TokioTask { handle })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_task_runs_after_delay() {
        let counter = Arc::new(AtomicUsize::new(0));
        let scheduler = TokioScheduler::current();
        let task_counter = counter.clone();
        let _task = scheduler.schedule(
            Duration::from_millis(500),
            Box::new(move || {
                task_counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_task_never_runs() {
        let counter = Arc::new(AtomicUsize::new(0));
        let scheduler = TokioScheduler::current();
        let task_counter = counter.clone();
        let task = scheduler.schedule(
            Duration::from_millis(500),
            Box::new(move || {
                task_counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        task.cancel();
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
