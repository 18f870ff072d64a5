use std::{
    fs,
    path::{Path, PathBuf},
};

/// Where module files come from. Sub-programs share the source of the
/// program that loaded them.
pub trait ModuleSource {
    fn exists(&self, path: &str) -> bool;
    fn read(&self, path: &str) -> std::io::Result<String>;
}

/// Resolves module paths against a root directory on disk.
#[derive(Debug, Clone)]
pub struct FsModuleSource {
    root: PathBuf,
}

impl FsModuleSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// A source rooted at the process working directory.
    pub fn current_dir() -> Self {
        Self::new(PathBuf::new())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl ModuleSource for FsModuleSource {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }

    fn read(&self, path: &str) -> std::io::Result<String> {
        fs::read_to_string(self.resolve(path))
    }
}

/// Final `.`-separated token of a module reference.
pub fn last_segment(reference: &str) -> &str {
    reference.rsplit('.').next().unwrap_or(reference)
}

/// File names tried for `reference`, in order: the reference with and
/// without a `.json` suffix, then its last segment with and without it.
pub fn candidate_paths(reference: &str) -> [String; 4] {
    let last = last_segment(reference);
    [
        format!("{reference}.json"),
        reference.to_string(),
        format!("{last}.json"),
        last.to_string(),
    ]
}

/// First candidate for `reference` that exists in `source`.
pub fn locate(source: &dyn ModuleSource, reference: &str) -> Option<String> {
    candidate_paths(reference)
        .into_iter()
        .find(|candidate| source.exists(candidate))
}
