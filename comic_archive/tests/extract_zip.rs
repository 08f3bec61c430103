//! End-to-end extraction against real ZIP files built on the fly.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use comic_archive::error::ArchiveError;
use comic_archive::extract;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

fn write_zip(dir: &Path, file_name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(file_name);
    let file = File::create(&path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, bytes) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(bytes).unwrap();
    }
    zip.finish().unwrap();
    path
}

#[test]
fn extracts_pages_in_natural_order_from_a_real_zip() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_zip(
        dir.path(),
        "comic.cbz",
        &[
            ("page10.jpg", b"ten"),
            ("page2.jpg", b"two"),
            ("page1.jpg", b"one"),
        ],
    );

    let seq = extract(&path, |_, _| {}).unwrap();
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.name(0), Some("page1.jpg"));
    assert_eq!(seq.name(1), Some("page2.jpg"));
    assert_eq!(seq.name(2), Some("page10.jpg"));
    assert_eq!(seq.bytes(0), Some(&b"one"[..]));
    assert_eq!(seq.bytes(2), Some(&b"ten"[..]));
}

#[test]
fn non_image_entries_and_directories_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("comic.zip");
    let file = File::create(&path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Stored);
    zip.add_directory("pages/", options).unwrap();
    zip.start_file("pages/p1.png", options).unwrap();
    zip.write_all(b"png").unwrap();
    zip.start_file("info.txt", options).unwrap();
    zip.write_all(b"notes").unwrap();
    zip.finish().unwrap();

    let seq = extract(&path, |_, _| {}).unwrap();
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.name(0), Some("pages/p1.png"));
}

#[test]
fn dotfile_companions_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_zip(
        dir.path(),
        "comic.cbz",
        &[("__MACOSX/._p1.jpg", b"junk"), ("p1.jpg", b"real")],
    );

    let seq = extract(&path, |_, _| {}).unwrap();
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.name(0), Some("p1.jpg"));
}

#[test]
fn archive_with_no_images_reports_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_zip(dir.path(), "comic.cbz", &[("readme.txt", b"hi")]);

    assert!(matches!(
        extract(&path, |_, _| {}),
        Err(ArchiveError::NoImages)
    ));
}

#[test]
fn an_unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("comic.tar");
    File::create(&path).unwrap().write_all(b"data").unwrap();

    assert!(matches!(
        extract(&path, |_, _| {}),
        Err(ArchiveError::UnsupportedFormat(ext)) if ext == "tar"
    ));
}

#[test]
fn a_missing_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.cbz");

    assert!(matches!(
        extract(&path, |_, _| {}),
        Err(ArchiveError::NotFound(_))
    ));
}

#[test]
fn garbage_bytes_are_not_a_zip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.cbz");
    File::create(&path)
        .unwrap()
        .write_all(b"this is not a zip archive")
        .unwrap();

    assert!(matches!(extract(&path, |_, _| {}), Err(ArchiveError::Zip(_))));
}

#[test]
fn progress_reports_run_from_start_to_done() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_zip(
        dir.path(),
        "comic.cbz",
        &[("p1.jpg", b"a"), ("p2.jpg", b"b")],
    );

    let mut reports: Vec<(u8, String)> = Vec::new();
    extract(&path, |p, m| reports.push((p, m.to_string()))).unwrap();

    assert_eq!(reports.first().map(|r| r.0), Some(5));
    assert_eq!(reports.first().map(|r| r.1.as_str()), Some("Reading archive..."));
    assert_eq!(reports.last().map(|r| r.0), Some(100));
    assert!(reports.windows(2).all(|w| w[0].0 <= w[1].0));
}
