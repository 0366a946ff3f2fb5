use std::sync::Mutex;

use super::manual::ManualScheduler;
use super::*;

fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    let make = move |name: &'static str| -> Task {
        let sink = sink.clone();
        Box::new(move || sink.lock().unwrap().push(name))
    };
    (log, make)
}

#[test]
fn reply_and_submit_delays_are_fixed() {
    assert_eq!(BOT_REPLY_DELAY, Duration::from_millis(1000));
    assert_eq!(FORM_SUBMIT_DELAY, Duration::from_millis(2000));
}

#[test]
fn liveness_starts_alive_and_ends() {
    let liveness = Liveness::new();
    assert!(liveness.is_alive());
    let clone = liveness.clone();
    clone.end();
    assert!(!liveness.is_alive());
}

#[test]
fn guard_runs_task_while_alive() {
    let (log, _) = recorder();
    let sink = log.clone();
    let liveness = Liveness::new();
    let task = liveness.guard("test", move || sink.lock().unwrap().push("ran"));
    task();
    assert_eq!(*log.lock().unwrap(), vec!["ran"]);
}

#[test]
fn guard_suppresses_task_after_end() {
    let (log, _) = recorder();
    let sink = log.clone();
    let liveness = Liveness::new();
    let task = liveness.guard("test", move || sink.lock().unwrap().push("ran"));
    liveness.end();
    task();
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn manual_scheduler_waits_for_delay() {
    let (log, make) = recorder();
    let scheduler = ManualScheduler::default();
    scheduler.schedule(Duration::from_millis(1000), make("a"));

    scheduler.advance(Duration::from_millis(999));
    assert!(log.lock().unwrap().is_empty());
    assert_eq!(scheduler.pending(), 1);

    scheduler.advance(Duration::from_millis(1));
    assert_eq!(*log.lock().unwrap(), vec!["a"]);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn manual_scheduler_orders_by_due_time_then_fifo() {
    let (log, make) = recorder();
    let scheduler = ManualScheduler::default();
    scheduler.schedule(Duration::from_millis(2000), make("slow"));
    scheduler.schedule(Duration::from_millis(1000), make("first"));
    scheduler.schedule(Duration::from_millis(1000), make("second"));

    scheduler.advance(Duration::from_secs(5));
    assert_eq!(*log.lock().unwrap(), vec!["first", "second", "slow"]);
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn browser_scheduler_drops_tasks_outside_hydrate() {
    let (log, make) = recorder();
    BrowserScheduler.schedule(Duration::ZERO, make("never"));
    assert!(log.lock().unwrap().is_empty());
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn scheduler_handle_defaults_without_context() {
    let handle = use_scheduler();
    let (log, make) = recorder();
    handle.schedule(Duration::ZERO, make("never"));
    assert!(log.lock().unwrap().is_empty());
}
