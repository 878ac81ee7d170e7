use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// `*.csv` files below `root`, sorted by path so concatenation order is stable.
pub fn list_csv_files(root: &Path) -> Vec<PathBuf> {
    let mut files = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect::<Vec<_>>();
    files.sort();
    files
}

pub fn resolve_inputs(path: &Path) -> Vec<PathBuf> {
    if path.is_dir() {
        list_csv_files(path)
    } else {
        vec![path.to_path_buf()]
    }
}
