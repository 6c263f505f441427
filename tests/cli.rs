//! End-to-end CLI tests — drives the built binary against feed fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gallerize"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run gallerize")
}

fn write_csv_feed(dir: &Path) -> PathBuf {
    let path = dir.join("feed.csv");
    fs::write(
        &path,
        "id,image_link\n\
         r1,http://a/1.png\n\
         r2,http://a/2.png\n\
         r3,http://a/3.png\n\
         r4,http://a/4.png\n\
         r5,http://a/5.png\n\
         r6,http://a/6.png\n",
    )
    .unwrap();
    path
}

fn write_xml_feed(dir: &Path) -> PathBuf {
    let path = dir.join("feed.xml");
    fs::write(
        &path,
        "<feed>\
         <item><reference>x1</reference><image>http://a/x1.png</image></item>\
         <item><reference>x2</reference></item>\
         <item><reference>x3</reference><image>http://a/x3.png</image></item>\
         </feed>",
    )
    .unwrap();
    path
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn build_csv_writes_gallery_page() {
    let tmp = TempDir::new().unwrap();
    write_csv_feed(tmp.path());

    let output = run_in(tmp.path(), &["build", "csv"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let page = fs::read_to_string(tmp.path().join("image_gallery.html")).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("\"title\":\"Image 6\""));
    assert!(page.contains("http://a/4.png"));

    // 6 records, page size 5 → 2 pages
    assert!(stdout(&output).contains("6 records across 2 pages"));
}

#[test]
fn build_xml_skips_incomplete_items() {
    let tmp = TempDir::new().unwrap();
    write_xml_feed(tmp.path());

    let output = run_in(tmp.path(), &["build", "xml"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let page = fs::read_to_string(tmp.path().join("image_gallery.html")).unwrap();
    // x2 has no image and must not appear
    assert!(page.contains("\"reference\":\"x1\""));
    assert!(!page.contains("\"reference\":\"x2\""));
    assert!(page.contains("\"reference\":\"x3\""));
}

#[test]
fn unrecognized_format_is_a_usage_error_without_output() {
    let tmp = TempDir::new().unwrap();
    write_csv_feed(tmp.path());

    let output = run_in(tmp.path(), &["build", "json"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("json"));
    assert!(!tmp.path().join("image_gallery.html").exists());
}

#[test]
fn missing_feed_file_fails_without_output() {
    let tmp = TempDir::new().unwrap();

    let output = run_in(tmp.path(), &["build", "xml"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("not found"));
    assert!(stderr(&output).contains("feed.xml"));
    assert!(!tmp.path().join("image_gallery.html").exists());
}

#[test]
fn missing_columns_fail_naming_every_column() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("feed.csv"), "sku,picture\nr1,http://a/1.png\n").unwrap();

    let output = run_in(tmp.path(), &["build", "csv"]);
    assert!(!output.status.success());
    let message = stderr(&output);
    assert!(message.contains("image_link"));
    assert!(message.contains("id"));
    assert!(!tmp.path().join("image_gallery.html").exists());
}

#[test]
fn check_validates_without_writing() {
    let tmp = TempDir::new().unwrap();
    write_csv_feed(tmp.path());

    let output = run_in(tmp.path(), &["check", "csv"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Feed is valid"));
    assert!(!tmp.path().join("image_gallery.html").exists());
}

#[test]
fn config_file_renames_fields() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("feed.csv"), "sku,picture\nr1,http://a/1.png\n").unwrap();
    fs::write(
        tmp.path().join("gallerize.toml"),
        "[csv]\nimage = \"picture\"\nreference = \"sku\"\n",
    )
    .unwrap();

    let output = run_in(tmp.path(), &["build", "csv"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let page = fs::read_to_string(tmp.path().join("image_gallery.html")).unwrap();
    assert!(page.contains("\"reference\":\"r1\""));
}

#[test]
fn explicit_feed_and_output_paths() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("catalog.csv"),
        "id,image_link\nr1,http://a/1.png\n",
    )
    .unwrap();

    let output = run_in(
        tmp.path(),
        &["build", "csv", "--feed", "catalog.csv", "--output", "out.html"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(tmp.path().join("out.html").exists());
    assert!(!tmp.path().join("image_gallery.html").exists());
}

#[test]
fn gen_config_prints_parseable_stock_config() {
    let tmp = TempDir::new().unwrap();

    let output = run_in(tmp.path(), &["gen-config"]);
    assert!(output.status.success());
    let content = stdout(&output);
    assert!(content.contains("[csv]"));
    assert!(content.contains("[xml]"));
    assert!(content.contains("[gallery]"));
    let parsed: toml::Value = toml::from_str(&content).unwrap();
    assert_eq!(
        parsed["csv"]["image"].as_str(),
        Some("image_link"),
    );
}
