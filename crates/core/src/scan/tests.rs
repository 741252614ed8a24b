use super::*;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::run_batch;
use crate::types::{BatchStats, PipelineOptions};

fn temp_dir(suffix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be monotonic")
        .as_nanos();
    std::env::temp_dir().join(format!("codesim-core-{suffix}-{nanos}"))
}

#[test]
fn missing_file_participates_with_empty_fingerprint() -> io::Result<()> {
    let root = temp_dir("missing");
    fs::create_dir_all(&root)?;
    let good = root.join("good.cpp");
    fs::write(&good, "int a; a = a + 1;")?;
    let missing = root.join("missing.cpp");

    let outcome = run_batch(
        &[good, missing.clone()],
        &PipelineOptions::default(),
    )
    .expect("default options are valid");

    let report = outcome.result;
    assert_eq!(report.matrix.len(), 2);
    assert_eq!(report.units[1].label, unit_label(&missing));
    assert_eq!(report.units[1].fingerprint_len, 0);
    assert_eq!(report.matrix.score(0, 1), 0.0);
    assert_eq!(outcome.stats.skipped_not_found, 1);
    assert_eq!(outcome.stats.empty_fingerprints, 1);
    Ok(())
}

#[test]
fn directory_input_expands_to_sorted_source_files() -> io::Result<()> {
    let root = temp_dir("expand");
    fs::create_dir_all(root.join("sub"))?;
    fs::write(root.join("b.cpp"), "int b; b = 2;")?;
    fs::write(root.join("a.cpp"), "int a; a = 1;")?;
    fs::write(root.join("sub/c.cpp"), "int c; c = 3;")?;
    fs::write(root.join("notes.txt"), "not source")?;

    let outcome = run_batch(&[root.clone()], &PipelineOptions::default())
        .expect("default options are valid");

    let labels: Vec<&str> = outcome
        .result
        .matrix
        .labels()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(
        labels,
        [
            unit_label(&root.join("a.cpp")),
            unit_label(&root.join("b.cpp")),
            unit_label(&root.join("sub/c.cpp")),
        ]
    );
    assert_eq!(outcome.stats.candidate_files, 3);
    assert_eq!(outcome.stats.fingerprinted_files, 3);
    Ok(())
}

#[test]
fn ignored_dirs_are_not_walked() -> io::Result<()> {
    let root = temp_dir("ignored");
    fs::create_dir_all(root.join("node_modules"))?;
    fs::write(root.join("keep.cpp"), "int k;")?;
    fs::write(root.join("node_modules/skip.cpp"), "int s;")?;

    let mut stats = BatchStats::default();
    let files = collect_source_files(&root, &PipelineOptions::default(), &mut stats);
    assert_eq!(files, [root.join("keep.cpp")]);
    Ok(())
}

#[test]
fn empty_extension_set_disables_the_filter() -> io::Result<()> {
    let root = temp_dir("extensions");
    fs::create_dir_all(&root)?;
    fs::write(root.join("a.cpp"), "int a;")?;
    fs::write(root.join("b.rs"), "fn b() {}")?;

    let mut stats = BatchStats::default();
    let default_files =
        collect_source_files(&root, &PipelineOptions::default(), &mut stats);
    assert_eq!(default_files, [root.join("a.cpp")]);

    let options = PipelineOptions {
        source_extensions: Default::default(),
        ..PipelineOptions::default()
    };
    let mut stats = BatchStats::default();
    let all_files = collect_source_files(&root, &options, &mut stats);
    assert_eq!(all_files, [root.join("a.cpp"), root.join("b.rs")]);
    Ok(())
}

#[test]
fn oversized_file_degrades_to_empty_unit() -> io::Result<()> {
    let root = temp_dir("oversized");
    fs::create_dir_all(&root)?;
    let big = root.join("big.cpp");
    fs::write(&big, "int a; a = a + 1; a = a + 2; a = a + 3;")?;

    let options = PipelineOptions {
        max_file_size: Some(8),
        ..PipelineOptions::default()
    };
    let outcome = run_batch(&[big], &options).expect("options are valid");
    assert_eq!(outcome.stats.skipped_too_large, 1);
    assert_eq!(outcome.result.units[0].fingerprint_len, 0);
    Ok(())
}

#[test]
fn binary_file_degrades_to_empty_unit() -> io::Result<()> {
    let root = temp_dir("binary");
    fs::create_dir_all(&root)?;
    let binary = root.join("blob.cpp");
    fs::write(&binary, b"int a;\0int b;")?;

    let outcome =
        run_batch(&[binary], &PipelineOptions::default()).expect("default options are valid");
    assert_eq!(outcome.stats.skipped_binary, 1);
    assert_eq!(outcome.result.units[0].fingerprint_len, 0);
    Ok(())
}

#[test]
fn max_files_budget_degrades_later_units() -> io::Result<()> {
    let root = temp_dir("budget");
    fs::create_dir_all(&root)?;
    fs::write(root.join("a.cpp"), "int a; a = a + 1;")?;
    fs::write(root.join("b.cpp"), "int b; b = b + 1;")?;

    let options = PipelineOptions {
        max_files: Some(1),
        ..PipelineOptions::default()
    };
    let outcome = run_batch(&[root], &options).expect("options are valid");

    assert_eq!(outcome.stats.fingerprinted_files, 1);
    assert_eq!(outcome.stats.skipped_budget_max_files, 1);
    assert_eq!(outcome.result.matrix.len(), 2);
    assert_eq!(outcome.result.units[1].fingerprint_len, 0);
    Ok(())
}

#[test]
fn formatting_variants_of_the_same_file_score_one() -> io::Result<()> {
    let root = temp_dir("variants");
    fs::create_dir_all(&root)?;
    fs::write(
        root.join("original.cpp"),
        "int total, step;\ntotal = total + step;\n",
    )?;
    fs::write(
        root.join("reformatted.cpp"),
        "/* rewritten */\nint   count,   delta;\n\ncount = count + delta; // same logic\n",
    )?;

    let outcome = run_batch(&[root], &PipelineOptions::default())
        .expect("default options are valid");
    let report = outcome.result;
    assert_eq!(report.matrix.score(0, 1), 1.0);
    assert_eq!(report.similar_pairs.len(), 1);
    assert_eq!(report.similar_pairs[0].score, 1.0);
    Ok(())
}
