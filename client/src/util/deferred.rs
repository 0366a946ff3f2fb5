//! Single-shot delayed tasks tied to a component's lifetime.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat widget's scripted reply and each form's simulated network delay
//! are the only asynchronous work in the site. Both go through a `Scheduler`
//! so tests can drive virtual time, and both are wrapped by a `Liveness`
//! guard so a task firing after its component unmounted does nothing.
//!
//! TRADE-OFFS
//! ==========
//! Tasks expose no cancel handle; suppression happens at fire time. The
//! browser backend forgets its `Timeout`, so a suppressed task still wakes
//! once but never touches state.

#[cfg(test)]
#[path = "deferred_test.rs"]
mod deferred_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::*;

/// Delay before the chat widget's scripted reply.
pub const BOT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Simulated network latency for form submission.
pub const FORM_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// A one-shot unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs a task once after a delay.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task);
}

/// Browser timer backend (`setTimeout` via `gloo-timers`).
///
/// Outside the `hydrate` flavour there is no event loop to fire timers, so
/// tasks are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(millis, task).forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, task);
        }
    }
}

/// Scheduler shared through Leptos context.
#[derive(Clone)]
pub struct SchedulerHandle(Arc<dyn Scheduler>);

impl SchedulerHandle {
    pub fn new(scheduler: impl Scheduler + 'static) -> Self {
        Self(Arc::new(scheduler))
    }

    pub fn schedule(&self, delay: Duration, task: Task) {
        self.0.schedule(delay, task);
    }

    pub fn as_dyn(&self) -> &dyn Scheduler {
        self.0.as_ref()
    }
}

impl Default for SchedulerHandle {
    fn default() -> Self {
        Self::new(BrowserScheduler)
    }
}

/// Scheduler from context, or the browser backend when none was provided.
pub fn use_scheduler() -> SchedulerHandle {
    use_context::<SchedulerHandle>().unwrap_or_default()
}

/// Alive flag for one component instance.
///
/// Clones share the flag. `end` is called from the owner's cleanup; tasks
/// wrapped with `guard` check the flag when they fire.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Liveness ended by the current reactive owner's cleanup.
    pub fn for_current_owner() -> Self {
        let liveness = Self::new();
        let ending = liveness.clone();
        on_cleanup(move || ending.end());
        liveness
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Wrap `f` so it only runs while this owner is alive.
    pub fn guard(&self, label: &'static str, f: impl FnOnce() + Send + 'static) -> Task {
        let liveness = self.clone();
        Box::new(move || {
            if liveness.is_alive() {
                f();
            } else {
                leptos::logging::debug_warn!("deferred task '{label}' dropped: owner unmounted");
            }
        })
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}
