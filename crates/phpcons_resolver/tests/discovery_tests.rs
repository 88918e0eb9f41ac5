//! Directory discovery over real files on disk.

use phpcons_resolver::{FactoryLoader, Resolver};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn builds_name_to_class_map() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "AlphaCommand.php",
        "<?php\nnamespace App;\nclass AlphaCommand {\n    protected $name = 'alpha';\n}\n",
    );
    write_file(
        dir.path(),
        "BetaCommand.php",
        "<?php\nnamespace App;\nclass BetaCommand {\n    protected $signature = 'beta {x}';\n}\n",
    );

    let commands = Resolver::new(dir.path()).commands();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands["alpha"], "App\\AlphaCommand");
    assert_eq!(commands["beta"], "App\\BetaCommand");
}

#[test]
fn walks_nested_directories() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("Deeply/Nested")).unwrap();
    write_file(
        &dir.path().join("Deeply/Nested"),
        "PingCommand.php",
        "<?php\nnamespace App\\Deeply\\Nested;\nclass PingCommand {\n    protected $name = 'ping';\n}\n",
    );

    let commands = Resolver::new(dir.path()).commands();
    assert_eq!(commands["ping"], "App\\Deeply\\Nested\\PingCommand");
}

#[test]
fn suffix_filter_excludes_other_files() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "RealCommand.php",
        "<?php\nnamespace App;\nclass RealCommand {\n    protected $name = 'real';\n}\n",
    );
    write_file(
        dir.path(),
        "Helper.php",
        "<?php\nnamespace App;\nclass Helper {\n    protected $name = 'helper';\n}\n",
    );

    let commands = Resolver::new(dir.path()).commands();
    assert_eq!(commands.len(), 1);
    assert!(commands.contains_key("real"));
}

#[test]
fn custom_suffix() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "SyncTask.php",
        "<?php\nnamespace App;\nclass SyncTask {\n    protected $name = 'sync';\n}\n",
    );

    let commands = Resolver::new(dir.path()).with_suffix("Task.php").commands();
    assert_eq!(commands["sync"], "App\\SyncTask");
}

#[test]
fn collision_keeps_a_single_entry() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "FirstCommand.php",
        "<?php\nnamespace App;\nclass FirstCommand {\n    protected $name = 'dup';\n}\n",
    );
    write_file(
        dir.path(),
        "SecondCommand.php",
        "<?php\nnamespace App;\nclass SecondCommand {\n    protected $name = 'dup';\n}\n",
    );

    let commands = Resolver::new(dir.path()).commands();
    assert_eq!(commands.len(), 1);
    // Traversal order is sorted by file name, so the later file wins.
    assert_eq!(commands["dup"], "App\\SecondCommand");
}

#[test]
fn malformed_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "BrokenCommand.php", "<?php class 'not even close");
    write_file(
        dir.path(),
        "GoodCommand.php",
        "<?php\nnamespace App;\nclass GoodCommand {\n    protected $name = 'good';\n}\n",
    );

    let commands = Resolver::new(dir.path()).commands();
    assert_eq!(commands.len(), 1);
    assert!(commands.contains_key("good"));
}

#[test]
fn file_without_command_name_is_skipped() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "SilentCommand.php",
        "<?php\nnamespace App;\nclass SilentCommand {}\n",
    );

    let commands = Resolver::new(dir.path()).commands();
    assert!(commands.is_empty());
}

#[test]
fn missing_root_yields_empty_map() {
    let commands = Resolver::new("/no/such/directory/anywhere").commands();
    assert!(commands.is_empty());
}

#[test]
fn discovered_map_feeds_lazy_loader() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "AlphaCommand.php",
        "<?php\nnamespace App;\nclass AlphaCommand {\n    protected $name = 'alpha';\n}\n",
    );

    let commands = Resolver::new(dir.path()).commands();
    let mut loader = FactoryLoader::new();
    for (name, class) in commands {
        loader.register(name, move || class.clone());
    }
    assert_eq!(loader.resolve("alpha").as_deref(), Some("App\\AlphaCommand"));
    assert_eq!(loader.resolve("missing"), None);
}
