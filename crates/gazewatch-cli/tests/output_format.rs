//! Output format tests.
//!
//! Verifies the JSON Lines and JSON array output shapes and the fields of
//! each frame result.

#![allow(clippy::unwrap_used, deprecated)]

use std::path::PathBuf;

use assert_cmd::Command;
use gazewatch_core::LandmarkFrame;
use gazewatch_test_support::{write_frames, SyntheticFaceBuilder};
use serde_json::Value;

/// Writes `frames` to a JSON Lines file in a fresh temp dir.
fn frames_file(frames: &[Option<LandmarkFrame>]) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("frames.jsonl");
    write_frames(&path, frames).unwrap();
    (temp_dir, path)
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

// === JSON Lines ===

#[test]
fn test_jsonl_format_single_object_per_line() {
    let (_dir, path) = frames_file(&[Some(SyntheticFaceBuilder::frontal().build())]);

    let mut cmd = Command::cargo_bin("gazewatch").unwrap();
    cmd.arg("--format").arg("jsonl").arg(&path);
    let stdout = stdout_of(&mut cmd);

    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    let parsed: Value = serde_json::from_str(lines[0]).unwrap();
    assert!(parsed.is_object());
}

#[test]
fn test_jsonl_is_default_format() {
    let (_dir, path) = frames_file(&[
        Some(SyntheticFaceBuilder::frontal().build()),
        Some(SyntheticFaceBuilder::frontal().build()),
        None,
    ]);

    let mut cmd = Command::cargo_bin("gazewatch").unwrap();
    cmd.arg(&path);
    let stdout = stdout_of(&mut cmd);

    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        let parsed: Value = serde_json::from_str(line).unwrap();
        assert!(parsed.is_object(), "each line should be a JSON object");
    }
}

// === JSON array ===

#[test]
fn test_json_format_is_array() {
    let (_dir, path) = frames_file(&[
        Some(SyntheticFaceBuilder::frontal().build()),
        Some(SyntheticFaceBuilder::turned_right().build()),
    ]);

    let mut cmd = Command::cargo_bin("gazewatch").unwrap();
    cmd.arg("--format").arg("json").arg(&path);
    let stdout = stdout_of(&mut cmd);

    let parsed: Value = serde_json::from_str(stdout.trim()).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["state"], "looking_straight");
    assert_eq!(array[1]["state"], "face_turned_right");
}

#[test]
fn test_json_format_empty_array_for_no_frames() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("gazewatch").unwrap();
    cmd.arg("--format").arg("json").arg(temp_dir.path());

    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
}

#[test]
fn test_pretty_format_is_indented() {
    let (_dir, path) = frames_file(&[Some(SyntheticFaceBuilder::frontal().build())]);

    let mut cmd = Command::cargo_bin("gazewatch").unwrap();
    cmd.arg("--format").arg("json").arg("--pretty").arg(&path);
    let stdout = stdout_of(&mut cmd);

    assert!(stdout.lines().count() > 1);
    assert!(stdout.contains("\n  "));
    let _: Value = serde_json::from_str(&stdout).unwrap();
}

#[test]
fn test_non_pretty_format_is_compact() {
    let (_dir, path) = frames_file(&[Some(SyntheticFaceBuilder::frontal().build())]);

    let mut cmd = Command::cargo_bin("gazewatch").unwrap();
    cmd.arg("--format").arg("json").arg(&path);
    let stdout = stdout_of(&mut cmd);

    assert_eq!(stdout.trim().lines().count(), 1);
}

// === Result fields ===

#[test]
fn test_result_has_source_and_frame_fields() {
    let (_dir, path) = frames_file(&[None, Some(SyntheticFaceBuilder::frontal().build())]);

    let mut cmd = Command::cargo_bin("gazewatch").unwrap();
    cmd.arg(&path);
    let stdout = stdout_of(&mut cmd);

    let results: Vec<Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert!(results[0]["source"].as_str().unwrap().ends_with("frames.jsonl"));
    assert_eq!(results[0]["frame"], 0);
    assert_eq!(results[1]["frame"], 1);
}

#[test]
fn test_result_has_timestamp_field() {
    let (_dir, path) = frames_file(&[Some(SyntheticFaceBuilder::frontal().build())]);

    let mut cmd = Command::cargo_bin("gazewatch").unwrap();
    cmd.arg(&path);
    let stdout = stdout_of(&mut cmd);

    let parsed: Value = serde_json::from_str(stdout.trim()).unwrap();
    let timestamp = parsed["timestamp"].as_str().unwrap();

    // RFC 3339: YYYY-MM-DDTHH:MM:SS...Z
    assert!(timestamp.len() >= 20, "timestamp too short: {timestamp}");
    assert_eq!(&timestamp[4..5], "-");
    assert_eq!(&timestamp[10..11], "T");
    assert!(timestamp.ends_with('Z'));
}

#[test]
fn test_result_has_state_and_label() {
    let (_dir, path) = frames_file(&[None]);

    let mut cmd = Command::cargo_bin("gazewatch").unwrap();
    cmd.arg(&path);
    let stdout = stdout_of(&mut cmd);

    let parsed: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed["state"], "no_face_detected");
    assert_eq!(parsed["label"], "No face detected");
}

#[test]
fn test_metrics_flag_includes_ratios() {
    let (_dir, path) = frames_file(&[Some(SyntheticFaceBuilder::frontal().build())]);

    let mut cmd = Command::cargo_bin("gazewatch").unwrap();
    cmd.arg("--metrics").arg(&path);
    let stdout = stdout_of(&mut cmd);

    let parsed: Value = serde_json::from_str(stdout.trim()).unwrap();
    let metrics = parsed["metrics"].as_object().unwrap();
    for key in ["average_ear", "face_turn_ratio", "vertical_face_ratio", "gaze_ratio"] {
        let value = metrics[key].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&value), "{key} = {value}");
    }
    assert!((metrics["face_turn_ratio"].as_f64().unwrap() - 0.5).abs() < 1e-4);
}

#[test]
fn test_metrics_stop_at_matching_rule() {
    let (_dir, path) = frames_file(&[Some(SyntheticFaceBuilder::eyes_closed().build())]);

    let mut cmd = Command::cargo_bin("gazewatch").unwrap();
    cmd.arg("--metrics").arg(&path);
    let stdout = stdout_of(&mut cmd);

    let parsed: Value = serde_json::from_str(stdout.trim()).unwrap();
    let metrics = parsed["metrics"].as_object().unwrap();
    assert!(metrics.contains_key("average_ear"));
    assert!(!metrics.contains_key("face_turn_ratio"));
    assert!(!metrics.contains_key("gaze_ratio"));
}

#[test]
fn test_no_metrics_flag_omits_ratios() {
    let (_dir, path) = frames_file(&[Some(SyntheticFaceBuilder::frontal().build())]);

    let mut cmd = Command::cargo_bin("gazewatch").unwrap();
    cmd.arg(&path);
    let stdout = stdout_of(&mut cmd);

    let parsed: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(parsed.get("metrics").is_none());
}
