#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn msim() -> Command {
    cargo_bin_cmd!("minesim")
}

/// Unique config path inside the system temp dir; any existing file is removed
/// so the run starts from built-in defaults.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_minesim.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, empty output directory for exports.
pub fn temp_out_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_minesim_out", name));
    fs::remove_dir_all(&path).ok();
    path
}

/// Write a YAML config file and return its path.
pub fn write_config(name: &str, yaml: &str) -> String {
    let p = temp_config(name);
    fs::write(&p, yaml).expect("write config");
    p
}

/// Sum the `Weight (T)` column of an exported truck log.
pub fn log_weight_sum(path: &PathBuf) -> (usize, f64) {
    let mut rdr = csv::Reader::from_path(path).expect("open truck log");
    let headers = rdr.headers().expect("headers").clone();
    let idx = headers
        .iter()
        .position(|h| h == "Weight (T)")
        .expect("weight column");

    let mut count = 0;
    let mut sum = 0.0;
    for rec in rdr.records() {
        let rec = rec.expect("record");
        sum += rec[idx].parse::<f64>().expect("weight");
        count += 1;
    }
    (count, sum)
}
