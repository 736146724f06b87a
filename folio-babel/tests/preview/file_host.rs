//! Preview manager driving real files

use folio_babel::preview::{FileHost, PreviewSurface};
use folio_babel::{Mode, PreviewManager, PreviewOptions};
use std::path::PathBuf;
use std::time::{Duration, Instant};

fn options() -> PreviewOptions {
    PreviewOptions {
        poll_interval: Duration::from_millis(1000),
        debounce: Duration::from_millis(300),
        title: "Notes".to_string(),
    }
}

fn open_manager(dir: &std::path::Path) -> (PreviewManager<FileHost>, PathBuf, Instant) {
    let mut manager = PreviewManager::new(FileHost::new(dir).with_browser(false), options());
    let now = Instant::now();
    manager.observe("# Hello", Mode::Lightweight, now);
    manager.open_preview(now);
    let path = manager.surface().expect("surface").path().to_path_buf();
    (manager, path, now)
}

#[test]
fn test_open_writes_standalone_document() {
    let dir = tempfile::tempdir().unwrap();
    let (_manager, path, _) = open_manager(dir.path());

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Notes</title>"));
    assert!(html.contains("<h1>Hello</h1>"));
}

#[test]
fn test_debounced_push_replaces_file() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, path, now) = open_manager(dir.path());

    manager.update_content("*edited* text", now);
    manager.tick(now + Duration::from_millis(300));

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("<p><em>edited</em> text</p>"));
    assert!(!html.contains("<h1>Hello</h1>"));
}

#[test]
fn test_deleting_the_file_closes_the_preview() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, path, now) = open_manager(dir.path());

    std::fs::remove_file(&path).unwrap();
    manager.update_content("ignored", now);
    manager.tick(now + Duration::from_millis(1000));

    assert!(!manager.is_external_open());
    assert!(!path.exists());
}

#[test]
fn test_close_removes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let (mut manager, path, _) = open_manager(dir.path());
    assert!(manager.surface().is_some_and(|surface| surface.is_live()));

    manager.close_preview();
    assert!(!path.exists());
}

#[test]
fn test_drop_removes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let (manager, path, _) = open_manager(dir.path());
    drop(manager);
    assert!(!path.exists());
}
