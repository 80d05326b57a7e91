//! Path utilities: expand ~, resolve export targets.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `<dir>/<stem>.<ext>`
pub fn output_file(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    dir.join(format!("{stem}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde("/tmp/x.conf"), PathBuf::from("/tmp/x.conf"));
        assert_eq!(expand_tilde("rel/x.conf"), PathBuf::from("rel/x.conf"));
    }

    #[test]
    fn output_file_joins_stem_and_extension() {
        assert_eq!(
            output_file(Path::new("/tmp/out"), "shift_report", "csv"),
            PathBuf::from("/tmp/out/shift_report.csv")
        );
    }
}
