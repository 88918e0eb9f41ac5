//! phpcons_resolver: command discovery over a directory tree.
//!
//! The resolver walks a directory for files matching a name suffix, runs
//! declaration extraction on each, and builds a map from declared command
//! name to fully qualified class name. Files are analyzed in parallel;
//! each file gets its own scanner so no state is shared. A file that fails
//! to read, declares no class, or yields no command name is skipped, never
//! fatal. Name collisions resolve last-write-wins in traversal order,
//! which is pinned by sorting directory entries by file name.

mod loader;

pub use loader::FactoryLoader;

use phpcons_signature::Signature;
use phpcons_source::Source;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default file name suffix for command classes.
pub const COMMAND_SUFFIX: &str = "Command.php";

/// Discovers command classes under a root directory.
#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
    suffix: String,
}

impl Resolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffix: COMMAND_SUFFIX.to_string(),
        }
    }

    /// Override the file name suffix filter. This is a literal suffix, not
    /// a glob.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree and build the command name to class name map. A
    /// missing or unreadable root yields an empty map.
    pub fn commands(&self) -> FxHashMap<String, String> {
        if !self.root.is_dir() {
            return FxHashMap::default();
        }
        let files = self.candidate_files();
        let entries: Vec<_> = files
            .par_iter()
            .map(|path| resolve_file(path))
            .collect();
        let mut commands = FxHashMap::default();
        for (name, class) in entries.into_iter().flatten() {
            commands.insert(name, class);
        }
        commands
    }

    /// Files under the root whose name ends with the suffix, in sorted
    /// traversal order.
    fn candidate_files(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(&self.suffix))
            .map(|entry| entry.into_path())
            .collect()
    }
}

/// Extract `(command name, class name)` from one file, or None when the
/// file does not resolve to a command.
fn resolve_file(path: &Path) -> Option<(String, String)> {
    let mut source = Source::from_file(path).ok()?;
    let class = source.class_name()?;
    let name = command_name(&mut source)?;
    Some((name, class))
}

/// The command name declared by a file: the `name` property when present
/// and non-empty, else the leading token of the `signature` property.
fn command_name(source: &mut Source) -> Option<String> {
    if let Some(name) = source.string_property(&["name"]) {
        let name = name.trim();
        if !name.is_empty() {
            return Some(name.to_string());
        }
    }
    let signature = source.string_property(&["signature"])?;
    let name = Signature::command_name(&signature);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phpcons_source::Source;

    #[test]
    fn test_command_name_prefers_name_property() {
        let mut source = Source::new(
            "<?php class A { protected $name = 'alpha'; protected $signature = 'beta'; }",
        );
        assert_eq!(command_name(&mut source).as_deref(), Some("alpha"));
    }

    #[test]
    fn test_command_name_falls_back_to_signature() {
        let mut source =
            Source::new("<?php class A { protected $signature = 'beta {x}'; }");
        assert_eq!(command_name(&mut source).as_deref(), Some("beta"));
    }

    #[test]
    fn test_blank_name_falls_back_to_signature() {
        let mut source = Source::new(
            "<?php class A { protected $name = ''; protected $signature = 'gamma'; }",
        );
        assert_eq!(command_name(&mut source).as_deref(), Some("gamma"));
    }

    #[test]
    fn test_no_name_at_all() {
        let mut source = Source::new("<?php class A {}");
        assert_eq!(command_name(&mut source), None);
    }
}
