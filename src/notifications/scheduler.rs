//! Daily notification scheduler
//!
//! Polls the wall clock on a dedicated background thread and fires one
//! reminder when the configured hour and minute come around. This is a
//! coarse polling design: if the process is suspended across the target
//! minute, that day's reminder is simply missed.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{Local, NaiveTime};

use super::errors::{NotificationError, Result};
use super::models::{Notification, NotificationTime};
use super::notifier::Notifier;
use crate::quotes::QuoteCatalog;

/// Default delay between clock checks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Extra pause after firing so the same minute cannot fire twice
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(60);

/// Source of the current wall-clock time of day
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

/// Local system time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Message types for scheduler communication
#[derive(Debug)]
enum SchedulerMessage {
    Shutdown,
}

struct Worker {
    sender: mpsc::Sender<SchedulerMessage>,
    handle: JoinHandle<()>,
}

/// Everything the background loop needs, cloned out of the scheduler
#[derive(Clone)]
struct LoopContext {
    catalog: Arc<QuoteCatalog>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    time: Arc<Mutex<NotificationTime>>,
    poll_interval: Duration,
    cooldown: Duration,
}

/// Fires a daily quote notification at a configurable time.
///
/// State machine is Stopped -> Running -> Stopped. `start` is idempotent and
/// `stop` blocks until the background thread has exited, so no notification
/// fires after `stop` returns. Dropping a running scheduler stops it.
pub struct NotificationScheduler {
    context: LoopContext,
    worker: Option<Worker>,
}

impl NotificationScheduler {
    pub fn new(catalog: Arc<QuoteCatalog>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            context: LoopContext {
                catalog,
                notifier,
                clock: Arc::new(SystemClock),
                time: Arc::new(Mutex::new(NotificationTime::default())),
                poll_interval: DEFAULT_POLL_INTERVAL,
                cooldown: DEFAULT_COOLDOWN,
            },
            worker: None,
        }
    }

    /// Replace the clock. Takes effect on the next `start`.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.context.clock = clock;
        self
    }

    /// Override poll interval and post-fire cooldown. Takes effect on the next `start`.
    pub fn with_intervals(mut self, poll_interval: Duration, cooldown: Duration) -> Self {
        self.context.poll_interval = poll_interval;
        self.context.cooldown = cooldown;
        self
    }

    /// Change the target time. Does not start or stop the loop; a running
    /// loop picks the new time up on its next check.
    pub fn set_time(&self, hour: u32, minute: u32) -> Result<()> {
        let time = NotificationTime::new(hour, minute)?;
        self.set_notification_time(time);
        Ok(())
    }

    pub fn set_notification_time(&self, time: NotificationTime) {
        match self.context.time.lock() {
            Ok(mut current) => *current = time,
            Err(poisoned) => *poisoned.into_inner() = time,
        }
        log::info!("Notification time set to {}", time);
    }

    pub fn time(&self) -> NotificationTime {
        self.context.target_time()
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Start the background loop. No-op when already running.
    pub fn start(&mut self) -> Result<()> {
        self.start_with(thread::Builder::new())
    }

    fn start_with(&mut self, builder: thread::Builder) -> Result<()> {
        if self.worker.is_some() {
            log::debug!("Notification scheduler already running");
            return Ok(());
        }

        let (tx, rx) = mpsc::channel();
        let context = self.context.clone();

        let handle = builder
            .name("notification-scheduler".to_string())
            .spawn(move || scheduler_loop(context, rx))
            .map_err(NotificationError::Spawn)?;

        log::info!("Notification scheduler started for {}", self.time());
        self.worker = Some(Worker { sender: tx, handle });
        Ok(())
    }

    /// Stop the background loop and wait for it to exit. No-op when stopped.
    pub fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };

        let _ = worker.sender.send(SchedulerMessage::Shutdown);
        if worker.handle.join().is_err() {
            log::error!("Notification scheduler thread panicked");
        }
        log::info!("Notification scheduler stopped");
    }

    /// Fire one notification right away, independent of the schedule.
    ///
    /// Returns the notification that was handed off, or `None` when the
    /// catalog has no quote to show.
    pub fn fire_now(&self) -> Result<Option<Notification>> {
        fire_notification(&self.context)
    }
}

impl Drop for NotificationScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

impl LoopContext {
    fn target_time(&self) -> NotificationTime {
        match self.time.lock() {
            Ok(time) => *time,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// Main scheduler loop
fn scheduler_loop(context: LoopContext, receiver: mpsc::Receiver<SchedulerMessage>) {
    loop {
        let target = context.target_time();

        let wait = if target.matches(context.clock.now()) {
            match fire_notification(&context) {
                Ok(Some(_)) => log::info!("Daily notification fired for {}", target),
                Ok(None) => log::warn!("No quote available for daily notification"),
                Err(e) => log::error!("Daily notification failed: {}", e),
            }
            context.cooldown + context.poll_interval
        } else {
            context.poll_interval
        };

        match receiver.recv_timeout(wait) {
            Ok(SchedulerMessage::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }
}

fn fire_notification(context: &LoopContext) -> Result<Option<Notification>> {
    let Some(quote) = context.catalog.random_quote(None) else {
        return Ok(None);
    };

    let notification = Notification::for_quote(quote);
    context.notifier.notify(&notification)?;
    Ok(Some(notification))
}
