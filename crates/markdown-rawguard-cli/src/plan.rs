//! Turns command-line paths into a list of pages to process.

use anyhow::{Context, Result, bail};
use glob::Pattern;
use markdown_rawguard_engine::io::{find_pages, read_page, write_page};
use relative_path::{RelativePath, RelativePathBuf};
use std::path::{Path, PathBuf};

/// What happens to each processed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the result.
    Stdout,
    /// Rewrite changed files.
    InPlace,
    /// Write results under a directory, mirroring input paths.
    OutputDir(PathBuf),
    /// Write nothing; report pages that would change.
    Check,
}

impl Mode {
    pub fn select(check: bool, in_place: bool, output_dir: Option<PathBuf>) -> Self {
        if check {
            Mode::Check
        } else if in_place {
            Mode::InPlace
        } else if let Some(dir) = output_dir {
            Mode::OutputDir(dir)
        } else {
            Mode::Stdout
        }
    }
}

/// One page to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File { root: PathBuf, path: RelativePathBuf },
}

impl Source {
    pub fn label(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File { root, path } => path.to_path(root).display().to_string(),
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            Source::Stdin => std::io::read_to_string(std::io::stdin()).context("Failed to read stdin"),
            Source::File { root, path } => {
                read_page(path, root).with_context(|| format!("Failed to read {}", self.label()))
            }
        }
    }

    /// Delivers `output` according to `mode`. Returns true if the page changed.
    pub fn deliver(&self, mode: &Mode, input: &str, output: &str) -> Result<bool> {
        let changed = input != output;
        match (mode, self) {
            (Mode::Check, _) => {}
            (Mode::Stdout, _) => print!("{output}"),
            (Mode::InPlace, Source::File { root, path }) => {
                if changed {
                    write_page(path, root, output)
                        .with_context(|| format!("Failed to write {}", self.label()))?;
                }
            }
            (Mode::OutputDir(dir), Source::File { path, .. }) => {
                write_page(path, dir, output).with_context(|| {
                    format!("Failed to write {}", path.to_path(dir).display())
                })?;
            }
            (Mode::InPlace | Mode::OutputDir(_), Source::Stdin) => {
                bail!("stdin input can only be printed or checked")
            }
        }
        Ok(changed)
    }
}

/// File selection rules for directory arguments.
pub struct Selection<'a> {
    pub extensions: &'a [String],
    pub exclude: &'a [Pattern],
}

impl Selection<'_> {
    fn is_excluded(&self, path: &RelativePath) -> bool {
        self.exclude.iter().any(|p| p.matches(path.as_str()))
    }
}

/// Expands `paths` into sources. No paths means stdin; directories are
/// scanned recursively.
pub fn sources(paths: &[PathBuf], selection: &Selection, mode: &Mode) -> Result<Vec<Source>> {
    if paths.is_empty() {
        if matches!(mode, Mode::InPlace | Mode::OutputDir(_)) {
            bail!("--in-place and --output-dir need file or directory arguments");
        }
        return Ok(vec![Source::Stdin]);
    }

    let mut out = vec![];
    for path in paths {
        if path.is_dir() {
            if *mode == Mode::Stdout {
                bail!(
                    "{} is a directory; use --output-dir, --in-place or --check",
                    path.display()
                );
            }
            let files = find_pages(path, selection.extensions)
                .with_context(|| format!("Failed to scan {}", path.display()))?;
            for file in files {
                if selection.is_excluded(&file) {
                    log::debug!("excluded: {file}");
                    continue;
                }
                out.push(Source::File {
                    root: path.clone(),
                    path: file,
                });
            }
        } else {
            out.push(file_source(path)?);
        }
    }
    Ok(out)
}

/// A single file argument: its directory becomes the root.
fn file_source(path: &Path) -> Result<Source> {
    let name = path
        .file_name()
        .with_context(|| format!("Not a file: {}", path.display()))?;
    let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
    let path = RelativePathBuf::from_path(Path::new(name))?;
    Ok(Source::File { root, path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn md() -> Vec<String> {
        vec!["md".to_string()]
    }

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("guide")).unwrap();
        std::fs::create_dir_all(dir.path().join("drafts")).unwrap();
        std::fs::write(dir.path().join("README.md"), "`x`").unwrap();
        std::fs::write(dir.path().join("guide/setup.md"), "text").unwrap();
        std::fs::write(dir.path().join("drafts/wip.md"), "text").unwrap();
        std::fs::write(dir.path().join("logo.png"), "").unwrap();
        dir
    }

    fn relative_paths(sources: &[Source]) -> Vec<String> {
        sources
            .iter()
            .filter_map(|s| match s {
                Source::File { path, .. } => Some(path.to_string()),
                Source::Stdin => None,
            })
            .collect()
    }

    #[test]
    fn mode_precedence() {
        let dir = Some(PathBuf::from("out"));
        assert_eq!(Mode::select(true, true, dir.clone()), Mode::Check);
        assert_eq!(Mode::select(false, true, dir.clone()), Mode::InPlace);
        assert_eq!(Mode::select(false, false, dir), Mode::OutputDir(PathBuf::from("out")));
        assert_eq!(Mode::select(false, false, None), Mode::Stdout);
    }

    #[test]
    fn no_paths_reads_stdin() {
        let selection = Selection { extensions: &md(), exclude: &[] };
        let sources = sources(&[], &selection, &Mode::Stdout).unwrap();
        assert_eq!(sources, vec![Source::Stdin]);
    }

    #[test]
    fn stdin_cannot_be_written_in_place() {
        let selection = Selection { extensions: &md(), exclude: &[] };
        assert!(sources(&[], &selection, &Mode::InPlace).is_err());
    }

    #[test]
    fn directory_is_scanned_and_filtered() {
        let dir = site();
        let exclude = vec![Pattern::new("drafts/**").unwrap()];
        let selection = Selection { extensions: &md(), exclude: &exclude };

        let sources = sources(&[dir.path().to_path_buf()], &selection, &Mode::Check).unwrap();

        assert_eq!(relative_paths(&sources), vec!["README.md", "guide/setup.md"]);
    }

    #[test]
    fn directory_needs_an_output_mode() {
        let dir = site();
        let selection = Selection { extensions: &md(), exclude: &[] };
        assert!(sources(&[dir.path().to_path_buf()], &selection, &Mode::Stdout).is_err());
    }

    #[test]
    fn file_argument_is_rooted_at_its_parent() {
        let dir = site();
        let file = dir.path().join("guide/setup.md");
        let selection = Selection { extensions: &md(), exclude: &[] };

        let sources = sources(&[file.clone()], &selection, &Mode::Stdout).unwrap();

        assert_eq!(
            sources,
            vec![Source::File {
                root: dir.path().join("guide"),
                path: RelativePathBuf::from("setup.md"),
            }]
        );
        assert_eq!(sources[0].label(), file.display().to_string());
    }

    #[test]
    fn output_dir_mirrors_relative_paths() {
        let dir = site();
        let out = TempDir::new().unwrap();
        let source = Source::File {
            root: dir.path().to_path_buf(),
            path: RelativePathBuf::from("guide/setup.md"),
        };

        let changed = source
            .deliver(&Mode::OutputDir(out.path().to_path_buf()), "a", "b")
            .unwrap();

        assert!(changed);
        let written = std::fs::read_to_string(out.path().join("guide/setup.md")).unwrap();
        assert_eq!(written, "b");
    }

    #[test]
    fn in_place_skips_unchanged_files() {
        let dir = site();
        let source = Source::File {
            root: dir.path().to_path_buf(),
            path: RelativePathBuf::from("README.md"),
        };

        let changed = source.deliver(&Mode::InPlace, "same", "same").unwrap();
        assert!(!changed);
        assert_eq!(std::fs::read_to_string(dir.path().join("README.md")).unwrap(), "`x`");

        source.deliver(&Mode::InPlace, "`x`", "new").unwrap();
        assert_eq!(std::fs::read_to_string(dir.path().join("README.md")).unwrap(), "new");
    }

    #[test]
    fn check_writes_nothing() {
        let dir = site();
        let source = Source::File {
            root: dir.path().to_path_buf(),
            path: RelativePathBuf::from("README.md"),
        };

        assert!(source.deliver(&Mode::Check, "`x`", "changed").unwrap());
        assert_eq!(std::fs::read_to_string(dir.path().join("README.md")).unwrap(), "`x`");
    }
}
