//! Preview manager state machine against a recording host

use crate::common::RecordingHost;
use folio_babel::{Mode, PreviewManager, PreviewOptions};
use std::time::{Duration, Instant};

const DEBOUNCE: Duration = Duration::from_millis(300);
const POLL: Duration = Duration::from_millis(1000);

fn manager() -> (PreviewManager<RecordingHost>, RecordingHost) {
    let host = RecordingHost::new();
    let options = PreviewOptions {
        poll_interval: POLL,
        debounce: DEBOUNCE,
        title: "Preview".to_string(),
    };
    (PreviewManager::new(host.clone(), options), host)
}

#[test]
fn test_open_twice_provisions_once() {
    let (mut manager, host) = manager();
    let now = Instant::now();

    manager.open_preview(now);
    manager.open_preview(now);

    let log = host.log.borrow();
    assert_eq!(log.provisions, 1);
    assert_eq!(log.writes.len(), 1);
    assert!(manager.is_external_open());
}

#[test]
fn test_open_never_renders_empty() {
    let (mut manager, host) = manager();
    let now = Instant::now();
    manager.update_content("<p>already here</p>", now);
    manager.open_preview(now);

    let log = host.log.borrow();
    assert!(log.writes[0].contains("<p>already here</p>"));
    assert!(log.writes[0].starts_with("<!DOCTYPE html>"));
}

#[test]
fn test_close_when_closed_is_silent() {
    let (mut manager, host) = manager();
    manager.close_preview();

    let log = host.log.borrow();
    assert_eq!(log.provisions, 0);
    assert_eq!(log.closes, 0);
}

#[test]
fn test_close_then_close_again() {
    let (mut manager, host) = manager();
    manager.open_preview(Instant::now());
    manager.close_preview();
    manager.close_preview();

    assert!(!manager.is_external_open());
    assert_eq!(manager.next_deadline(), None);
    assert_eq!(host.log.borrow().closes, 1);
}

#[test]
fn test_refused_provisioning_stays_closed() {
    let (mut manager, host) = manager();
    host.log.borrow_mut().refuse = true;

    manager.open_preview(Instant::now());

    assert!(!manager.is_external_open());
    assert_eq!(manager.next_deadline(), None);
    assert_eq!(host.log.borrow().provisions, 1);
}

#[test]
fn test_liveness_poll_detects_external_close() {
    let (mut manager, host) = manager();
    let now = Instant::now();
    manager.open_preview(now);

    // The user closes the surface behind the manager's back.
    host.log.borrow_mut().live = false;
    manager.update_content("after close", now);

    manager.tick(now + POLL);
    assert!(!manager.is_external_open());
    assert!(manager.surface().is_none());
    assert_eq!(manager.next_deadline(), None);

    manager.update_content("still closed", now + POLL);
    manager.tick(now + POLL * 5);

    let log = host.log.borrow();
    assert_eq!(log.writes.len(), 1);
    assert_eq!(log.closes, 0);
}

#[test]
fn test_reopen_after_external_close() {
    let (mut manager, host) = manager();
    let now = Instant::now();
    manager.open_preview(now);
    host.log.borrow_mut().live = false;
    manager.tick(now + POLL);

    manager.update_content("fresh", now + POLL);
    manager.open_preview(now + POLL);

    let log = host.log.borrow();
    assert_eq!(log.provisions, 2);
    assert_eq!(log.writes.len(), 2);
    assert!(log.writes[1].contains("fresh"));
}

#[test]
fn test_open_replaces_dead_handle_without_waiting_for_poll() {
    let (mut manager, host) = manager();
    let now = Instant::now();
    manager.open_preview(now);
    host.log.borrow_mut().live = false;

    manager.open_preview(now);

    assert_eq!(host.log.borrow().provisions, 2);
    assert!(manager.is_external_open());
}

#[test]
fn test_debounced_updates_coalesce() {
    let (mut manager, host) = manager();
    let now = Instant::now();
    manager.open_preview(now);

    manager.update_content("<p>one</p>", now);
    manager.update_content("<p>two</p>", now + Duration::from_millis(50));
    manager.update_content("<p>three</p>", now + Duration::from_millis(100));

    // Still inside the quiet period of the last update.
    manager.tick(now + Duration::from_millis(350));
    assert_eq!(host.log.borrow().writes.len(), 1);

    manager.tick(now + Duration::from_millis(400));
    let log = host.log.borrow();
    assert_eq!(log.writes.len(), 2);
    assert!(log.writes[1].contains("<p>three</p>"));
    assert!(!log.writes[1].contains("<p>two</p>"));
}

#[test]
fn test_updates_while_closed_are_not_pushed() {
    let (mut manager, host) = manager();
    let now = Instant::now();
    manager.update_content("x", now);
    manager.tick(now + DEBOUNCE * 2);

    assert_eq!(host.log.borrow().writes.len(), 0);
    assert_eq!(manager.content(), "x");
}

#[test]
fn test_write_failure_is_an_implicit_close() {
    let (mut manager, host) = manager();
    let now = Instant::now();
    manager.open_preview(now);

    host.log.borrow_mut().fail_writes = true;
    manager.update_content("boom", now);
    manager.tick(now + DEBOUNCE);

    assert!(!manager.is_external_open());
    assert_eq!(manager.next_deadline(), None);
}

#[test]
fn test_failing_first_push_leaves_manager_closed() {
    let (mut manager, host) = manager();
    host.log.borrow_mut().fail_writes = true;

    manager.open_preview(Instant::now());

    assert!(!manager.is_external_open());
    assert_eq!(host.log.borrow().provisions, 1);
}

#[test]
fn test_observe_only_schedules_on_change() {
    let (mut manager, host) = manager();
    let now = Instant::now();
    manager.open_preview(now);

    assert!(!manager.observe("", Mode::Structural, now));
    assert_eq!(manager.next_deadline(), Some(now + POLL));

    assert!(manager.observe("# Heading", Mode::Lightweight, now));
    manager.tick(now + DEBOUNCE);

    let log = host.log.borrow();
    assert_eq!(log.writes.len(), 2);
    assert!(log.writes[1].contains("<h1>Heading</h1>"));
}

#[test]
fn test_mode_change_alone_repushes() {
    let (mut manager, host) = manager();
    let now = Instant::now();
    manager.update_content("**x**", now);
    manager.open_preview(now);

    manager.observe("**x**", Mode::Lightweight, now);
    manager.tick(now + DEBOUNCE);

    let log = host.log.borrow();
    assert!(log.writes[0].contains("\n**x**\n"));
    assert!(log.writes[1].contains("\n<strong>x</strong>\n"));
}

#[test]
fn test_teardown_closes_without_pending_push() {
    let (mut manager, host) = manager();
    let now = Instant::now();
    manager.open_preview(now);
    manager.update_content("pending", now);

    manager.teardown();

    let log = host.log.borrow();
    assert_eq!(log.closes, 1);
    assert_eq!(log.writes.len(), 1);
    assert!(!manager.is_external_open());
}

#[test]
fn test_close_errors_are_swallowed() {
    let (mut manager, host) = manager();
    manager.open_preview(Instant::now());
    host.log.borrow_mut().live = false;

    manager.close_preview();

    assert!(!manager.is_external_open());
    assert_eq!(host.log.borrow().closes, 1);
}

#[test]
fn test_independent_managers_do_not_share_timers() {
    let (mut first, first_host) = manager();
    let (mut second, second_host) = manager();
    let now = Instant::now();
    first.open_preview(now);
    second.open_preview(now);

    first.update_content("a", now);
    second.tick(now + DEBOUNCE);
    assert_eq!(first_host.log.borrow().writes.len(), 1);
    assert_eq!(second_host.log.borrow().writes.len(), 1);

    first.tick(now + DEBOUNCE);
    assert_eq!(first_host.log.borrow().writes.len(), 2);
}
