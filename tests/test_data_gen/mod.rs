//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use csvq_core::table::Row;

/// Build records from string literals; record 0 is the header.
pub fn records(rows: &[&[&str]]) -> Vec<Row> {
    rows.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

pub fn people() -> Vec<Row> {
    records(&[
        &["name", "age"],
        &["Alice", "30"],
        &["Bob", "25"],
        &["Cara", "30"],
    ])
}

/// `n` rows of `id,group,score` where group cycles through `groups` values.
pub fn generate_grouped(n: usize, groups: usize) -> Vec<Row> {
    let mut out = vec![vec!["id".to_string(), "group".to_string(), "score".to_string()]];
    for i in 0..n {
        out.push(vec![
            i.to_string(),
            format!("g{}", i % groups),
            ((i * 37) % 101).to_string(),
        ]);
    }
    out
}

/// Fresh, empty directory under the system temp dir.
pub fn create_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("csvq-tests-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

pub fn write_file(dir: &PathBuf, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}
