//! Integration tests for docsim
//!
//! These tests run the full pipeline over real directories:
//! - Document discovery
//! - Corpus building and the minimum-size guard
//! - Pair ranking and report rendering

use docsim::{Analyzer, AnalyzerConfig, Error, Selection};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

fn write_doc(dir: &Path, name: &str, content: &str) {
    let mut file = File::create(dir.join(name)).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

/// Create `count` documents; each shares a common vocabulary and has a few
/// words of its own
fn create_corpus(dir: &Path, count: usize) {
    for i in 0..count {
        let content = format!(
            "Chapter {i}. The study of topic{} continues with topic{} and more.",
            i % 7,
            i % 5
        );
        write_doc(dir, &format!("book{i:03}.txt"), &content);
    }
}

#[test]
fn test_full_corpus_reports_top_ten() {
    let dir = tempdir().unwrap();
    create_corpus(dir.path(), 64);

    let analysis = Analyzer::new(AnalyzerConfig::default())
        .analyze(dir.path())
        .unwrap();

    assert_eq!(analysis.stats.documents, 64);
    assert_eq!(analysis.stats.pairs_scored, 64 * 63 / 2);
    assert_eq!(analysis.pairs.len(), 10);

    for w in analysis.pairs.windows(2) {
        assert!(w[0].score >= w[1].score);
        if w[0].score == w[1].score {
            assert!((w[0].first, w[0].second) < (w[1].first, w[1].second));
        }
    }
    for pair in &analysis.pairs {
        assert!(pair.first < pair.second);
        assert!(pair.score.is_finite());
        assert!(pair.score <= 1.0 + 1e-9);
    }
}

#[test]
fn test_small_corpus_is_rejected() {
    let dir = tempdir().unwrap();
    create_corpus(dir.path(), 63);

    let err = Analyzer::new(AnalyzerConfig::default())
        .analyze(dir.path())
        .unwrap_err();

    match err {
        Error::InsufficientCorpus { found, required } => {
            assert_eq!(found, 63);
            assert_eq!(required, 64);
        }
        other => panic!("expected InsufficientCorpus, got {other}"),
    }
}

#[test]
fn test_non_matching_files_do_not_count() {
    let dir = tempdir().unwrap();
    create_corpus(dir.path(), 60);
    for i in 0..10 {
        write_doc(dir.path(), &format!("notes{i}.md"), "not a text file");
    }

    let err = Analyzer::new(AnalyzerConfig::default())
        .analyze(dir.path())
        .unwrap_err();
    assert!(matches!(err, Error::InsufficientCorpus { found: 60, .. }));
}

#[test]
fn test_reference_scenario() {
    let dir = tempdir().unwrap();
    write_doc(dir.path(), "1.txt", "a b c");
    write_doc(dir.path(), "2.txt", "a b");
    write_doc(dir.path(), "3.txt", "c");

    let config = AnalyzerConfig {
        min_corpus_size: 3,
        ..Default::default()
    };
    let analysis = Analyzer::new(config).analyze(dir.path()).unwrap();

    let order: Vec<(usize, usize)> = analysis.pairs.iter().map(|p| (p.first, p.second)).collect();
    assert_eq!(order, vec![(0, 1), (0, 2), (1, 2)]);

    let expected = [
        2.0 / (3f64.sqrt() * 2f64.sqrt()),
        1.0 / 3f64.sqrt(),
        0.0,
    ];
    for (pair, want) in analysis.pairs.iter().zip(expected) {
        assert!((pair.score - want).abs() < 1e-9);
    }

    let text = analysis.report().to_text();
    assert!(text.starts_with("Top 10 similar pairs:\n"));
    assert!(text.contains("Pair 1: "));
    assert!(text.contains("1.txt and "));
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_identical_and_empty_documents() {
    let dir = tempdir().unwrap();
    write_doc(dir.path(), "a.txt", "the cat sat");
    write_doc(dir.path(), "b.txt", "The CAT sat!");
    write_doc(dir.path(), "c.txt", "");

    let config = AnalyzerConfig {
        min_corpus_size: 3,
        ..Default::default()
    };
    let analysis = Analyzer::new(config).analyze(dir.path()).unwrap();

    assert!((analysis.pairs[0].score - 1.0).abs() < 1e-9);
    assert_eq!((analysis.pairs[0].first, analysis.pairs[0].second), (0, 1));
    assert_eq!(analysis.pairs[1].score, 0.0);
    assert_eq!(analysis.pairs[2].score, 0.0);
}

#[test]
fn test_unreadable_document_fails_run() {
    let dir = tempdir().unwrap();
    write_doc(dir.path(), "good.txt", "plain words");
    File::create(dir.path().join("bad.txt"))
        .unwrap()
        .write_all(&[0xff, 0xfe, 0x00, 0x41])
        .unwrap();

    let config = AnalyzerConfig {
        min_corpus_size: 2,
        ..Default::default()
    };
    let err = Analyzer::new(config).analyze(dir.path()).unwrap_err();

    match err {
        Error::DocumentRead { id, .. } => assert!(id.ends_with("bad.txt")),
        other => panic!("expected DocumentRead, got {other}"),
    }
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_fails_run() {
    let dir = tempdir().unwrap();
    write_doc(dir.path(), "a.txt", "alpha words");
    write_doc(dir.path(), "b.txt", "beta words");
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("c.txt")).unwrap();

    let config = AnalyzerConfig {
        min_corpus_size: 2,
        ..Default::default()
    };
    let err = Analyzer::new(config).analyze(dir.path()).unwrap_err();

    match err {
        Error::DocumentRead { id, .. } => assert!(id.ends_with("c.txt")),
        other => panic!("expected DocumentRead, got {other}"),
    }
}

#[test]
fn test_recursive_glob_selection() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("part1")).unwrap();
    fs::create_dir_all(dir.path().join("part2")).unwrap();
    write_doc(&dir.path().join("part1"), "one.txt", "shared words here");
    write_doc(&dir.path().join("part2"), "two.txt", "shared words there");
    write_doc(dir.path(), "readme.md", "shared words");

    let config = AnalyzerConfig {
        min_corpus_size: 2,
        selection: Selection::glob("*.txt").unwrap(),
        recursive: true,
        ..Default::default()
    };
    let analysis = Analyzer::new(config).analyze(dir.path()).unwrap();

    assert_eq!(analysis.ids.len(), 2);
    assert_eq!(analysis.pairs.len(), 1);
    assert!((analysis.pairs[0].score - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_parallel_run_matches_sequential() {
    let dir = tempdir().unwrap();
    create_corpus(dir.path(), 80);

    let sequential = Analyzer::new(AnalyzerConfig::default())
        .analyze(dir.path())
        .unwrap();
    let parallel = Analyzer::new(AnalyzerConfig {
        parallel: true,
        ..Default::default()
    })
    .analyze(dir.path())
    .unwrap();

    assert_eq!(sequential.pairs, parallel.pairs);
    assert_eq!(sequential.ids, parallel.ids);
}
