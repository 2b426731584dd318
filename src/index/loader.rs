//! Partition file loading.
//!
//! The upstream computation writes the inverted index as a set of
//! partitioned text files named with the `part-` prefix, one record per
//! line. The loader concatenates all partitions into one record sequence;
//! it does not validate the record shape, which is the builders' concern.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// File-name prefix of the partition files produced by the upstream job.
pub const PARTITION_PREFIX: &str = "part-";

/// Read every `part-*` file under `dir` and concatenate their lines.
///
/// Partitions are read in file-name order, which gives a stable record
/// sequence regardless of the platform's directory enumeration order.
pub fn load_partitions<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let name = entry.file_name();
        if !entry.file_type()?.is_file() {
            continue;
        }
        if name.to_string_lossy().starts_with(PARTITION_PREFIX) {
            paths.push(entry.path());
        }
    }
    paths.sort();

    let mut lines = Vec::new();
    for path in paths {
        let contents = fs::read_to_string(&path)?;
        lines.extend(contents.lines().map(|line| line.to_string()));
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_partitions_concatenates_in_name_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("part-00001"), "dog\tfile1.txt:2:4\n").unwrap();
        fs::write(
            dir.path().join("part-00000"),
            "cat\tfile1.txt:1:1,file1.txt:2:3\n",
        )
        .unwrap();

        let lines = load_partitions(dir.path()).unwrap();
        assert_eq!(
            lines,
            vec![
                "cat\tfile1.txt:1:1,file1.txt:2:3".to_string(),
                "dog\tfile1.txt:2:4".to_string(),
            ]
        );
    }

    #[test]
    fn test_load_partitions_ignores_other_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("part-00000"), "cat\tfile1.txt:1:1\n").unwrap();
        fs::write(dir.path().join("_SUCCESS"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "unrelated\n").unwrap();

        let lines = load_partitions(dir.path()).unwrap();
        assert_eq!(lines, vec!["cat\tfile1.txt:1:1".to_string()]);
    }

    #[test]
    fn test_load_partitions_missing_dir_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(load_partitions(&missing).is_err());
    }
}
