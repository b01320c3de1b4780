use crate::{BPath, BResult};
use anyhow::anyhow;
use fs_err::read_to_string;
use std::path::PathBuf;

/// Looks for `file_name` in `dir` and then in each of its ancestors.
pub fn walk_for_file(mut dir: PathBuf, file_name: &str) -> Option<PathBuf> {
    loop {
        let file_path = dir.join(file_name);
        if file_path.is_file() {
            return Some(file_path);
        }

        if !dir.pop() {
            break;
        }
    }

    None
}

/// Convert PathBuf to Utf8PathBuf
pub fn to_bpath(path_buf: PathBuf) -> BResult<BPath> {
    BPath::from_path_buf(path_buf)
        .map_err(|path| anyhow!("Path is not valid utf8: {}", path.display()))
}

pub fn read_string(path: &BPath) -> BResult<String> {
    read_to_string(path.as_std_path()).map_err(|err| anyhow!(err))
}
