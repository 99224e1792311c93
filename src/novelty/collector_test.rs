use super::*;
use std::fs;
use std::path::PathBuf;

use crate::history::{BuildRecord, FileHistory};
use crate::model::{AnalysisResult, Annotation};

fn record(id: &str, workspace: Option<PathBuf>, annotations: Option<Vec<Annotation>>) -> BuildRecord {
    BuildRecord {
        id: id.to_string(),
        commit: None,
        workspace,
        analysis: annotations.map(|annotations| AnalysisResult { annotations }),
    }
}

#[test]
fn no_analysis_result_is_none_and_empty() {
    let history = FileHistory::from_records(vec![record("1", None, None)]).unwrap();
    let collector = AnnotationCollector::new(&history, None);
    assert!(collector.try_collect("1").is_none());
    assert!(collector.collect("1").is_empty());
    assert!(collector.collect("unknown").is_empty());
}

#[test]
fn empty_analysis_result_is_some_empty() {
    let history = FileHistory::from_records(vec![record("1", None, Some(vec![]))]).unwrap();
    let collector = AnnotationCollector::new(&history, None);
    let set = collector.try_collect("1").unwrap();
    assert!(set.is_empty(), "recorded but empty result is still a result");
}

#[test]
fn paths_normalized_against_build_workspace() {
    let dir = tempfile::tempdir().unwrap();
    let ws = dir.path().join("proj");
    fs::create_dir_all(&ws).unwrap();
    let abs = std::path::absolute(&ws).unwrap();
    let raw_path = abs.join("src").join("A.java").display().to_string();

    let history = FileHistory::from_records(vec![record(
        "1",
        Some(ws.clone()),
        Some(vec![
            Annotation::new(raw_path.clone(), 10, "unused var"),
            Annotation::new("src/B.java", 5, "npe"),
        ]),
    )])
    .unwrap();
    let collector = AnnotationCollector::new(&history, None);
    let set = collector.collect("1");

    let expected_a = format!("src{}A.java", std::path::MAIN_SEPARATOR);
    assert!(set.contains(&Annotation::new(expected_a, 10, "unused var")));
    assert!(set.contains(&Annotation::new("src/B.java", 5, "npe")));
    assert_eq!(set.len(), 2);

    // Stored result keeps its original path
    let stored = &history.analysis("1").unwrap().annotations[0];
    assert_eq!(stored.file_path, raw_path);
}

#[test]
fn absolute_and_relative_forms_collapse_to_one_warning() {
    let history = FileHistory::from_records(vec![record(
        "1",
        None,
        Some(vec![
            Annotation::new("/ci/ws/src/A.java", 10, "unused var"),
            Annotation::new("src/A.java", 10, "unused var"),
        ]),
    )])
    .unwrap();
    let collector = AnnotationCollector::new(&history, Some("/ci/ws".to_string()));
    let set = collector.collect("1");
    assert_eq!(set.len(), 1);
    assert!(set.contains(&Annotation::new("src/A.java", 10, "unused var")));
}

#[test]
fn unresolvable_workspace_matches_on_name() {
    let history = FileHistory::from_records(vec![record(
        "1",
        Some(PathBuf::from("/definitely/not/here/proj-ws")),
        Some(vec![Annotation::new(
            "/agent-7/builds/proj-ws/src/A.java",
            1,
            "w",
        )]),
    )])
    .unwrap();
    let collector = AnnotationCollector::new(&history, None);
    let set = collector.collect("1");
    assert!(set.contains(&Annotation::new("src/A.java", 1, "w")));
}

#[test]
fn without_workspace_paths_pass_through() {
    let history = FileHistory::from_records(vec![record(
        "1",
        None,
        Some(vec![Annotation::new("/abs/src/A.java", 1, "w")]),
    )])
    .unwrap();
    let collector = AnnotationCollector::new(&history, None);
    let set = collector.collect("1");
    assert!(set.contains(&Annotation::new("/abs/src/A.java", 1, "w")));
}

#[test]
fn override_root_wins_over_workspace() {
    let history = FileHistory::from_records(vec![record(
        "1",
        Some(PathBuf::from("/definitely/not/here/other")),
        Some(vec![Annotation::new("/mnt/share/proj/src/A.java", 1, "w")]),
    )])
    .unwrap();
    let collector = AnnotationCollector::new(&history, Some("/mnt/share/proj".to_string()));
    assert!(
        collector
            .collect("1")
            .contains(&Annotation::new("src/A.java", 1, "w"))
    );
}
