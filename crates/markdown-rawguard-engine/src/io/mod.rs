//! Page files below a site root, addressed by root-relative paths.

use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("No such file: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IoError {
    fn at(path: &Path) -> impl FnOnce(std::io::Error) -> IoError + '_ {
        move |source| IoError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub fn read_page(page: &RelativePath, root: &Path) -> Result<String, IoError> {
    let path = page.to_path(root);
    if !path.is_file() {
        return Err(IoError::NotFound(path));
    }
    fs::read_to_string(&path).map_err(IoError::at(&path))
}

/// Writes `content` to `page` below `root`, creating directories as needed.
pub fn write_page(page: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let path = page.to_path(root);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(IoError::at(dir))?;
    }
    fs::write(&path, content).map_err(IoError::at(&path))
}

/// Every file below `root` whose extension is in `extensions`, as sorted
/// root-relative paths.
pub fn find_pages(root: &Path, extensions: &[String]) -> Result<Vec<RelativePathBuf>, IoError> {
    ensure_dir(root)?;

    let mut pages = vec![];
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).map_err(IoError::at(&dir))? {
            let path = entry.map_err(IoError::at(&dir))?.path();
            if path.is_dir() {
                pending.push(path);
            } else if has_extension(&path, extensions)
                && let Ok(relative) = path.strip_prefix(root)
                && let Ok(page) = RelativePathBuf::from_path(relative)
            {
                pages.push(page);
            }
        }
    }
    pages.sort();
    Ok(pages)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .is_some_and(|ext| extensions.iter().any(|e| ext == e.as_str()))
}

pub fn ensure_dir(path: &Path) -> Result<(), IoError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(IoError::NotADirectory(path.to_path_buf()))
    }
}
