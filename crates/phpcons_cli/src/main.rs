//! phpcons: static PHP command discovery.
//!
//! Usage:
//!   phpcons [options] [DIR]
//!   phpcons --inspect FILE
//!
//! Scans a directory tree for command classes and prints the command name
//! to class name map, or inspects a single file's declarations.

use clap::Parser as ClapParser;
use phpcons_core::LineAndColumn;
use phpcons_resolver::Resolver;
use phpcons_signature::Signature;
use phpcons_source::Source;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(ClapParser, Debug)]
#[command(
    name = "phpcons",
    about = "phpcons - static command discovery for PHP console applications",
    disable_version_flag = true
)]
struct Cli {
    /// Directory to scan for command classes.
    #[arg(value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Inspect one file's declarations instead of scanning a directory.
    #[arg(long, value_name = "FILE")]
    inspect: Option<PathBuf>,

    /// File name suffix that marks a command class.
    #[arg(long, default_value = phpcons_resolver::COMMAND_SUFFIX)]
    suffix: String,

    /// Emit machine-readable JSON.
    #[arg(long)]
    json: bool,

    /// Print the version.
    #[arg(short = 'v', long)]
    version: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("phpcons Version 0.1.0");
        return;
    }

    let exit_code = if let Some(ref file) = cli.inspect {
        run_inspect(&cli, file.clone())
    } else {
        run_scan(&cli)
    };
    process::exit(exit_code);
}

fn run_scan(cli: &Cli) -> i32 {
    let start = Instant::now();

    if !cli.dir.is_dir() {
        print_error(&format!("'{}' is not a directory.", cli.dir.display()));
        return 1;
    }

    let commands = Resolver::new(&cli.dir)
        .with_suffix(cli.suffix.clone())
        .commands();
    // Sorted for display; discovery order itself carries no meaning.
    let commands: BTreeMap<String, String> = commands.into_iter().collect();

    if cli.json {
        match serde_json::to_string_pretty(&commands) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                print_error(&format!("Failed to serialize commands: {}", e));
                return 1;
            }
        }
        return 0;
    }

    if commands.is_empty() {
        println!("No commands found under '{}'.", cli.dir.display());
        return 0;
    }

    let width = commands.keys().map(String::len).max().unwrap_or(0);
    for (name, class) in &commands {
        if atty_is_terminal() {
            println!("{}{:<width$}{}  {}", CYAN, name, RESET, class);
        } else {
            println!("{:<width$}  {}", name, class);
        }
    }

    let elapsed = start.elapsed();
    if atty_is_terminal() {
        eprintln!(
            "\n{}Found {} command{} in {:.2}s.{}",
            GRAY,
            commands.len(),
            if commands.len() == 1 { "" } else { "s" },
            elapsed.as_secs_f64(),
            RESET
        );
    }

    0
}

fn run_inspect(cli: &Cli, file: PathBuf) -> i32 {
    let mut source = match Source::from_file(&file) {
        Ok(source) => source,
        Err(e) => {
            print_error(&format!("Failed to read '{}': {}", file.display(), e));
            return 1;
        }
    };

    // Namespace and short name share the scan cursor, in that order.
    let namespace = source.namespace();
    let short_name = source.short_class_name();
    let class_name = short_name
        .as_deref()
        .map(|short| phpcons_source::qualify(namespace.as_deref(), short));
    let name = source.string_property(&["name"]);
    let description = source.string_property(&["description"]);
    let signature_text = source.string_property(&["signature"]);
    let signature = signature_text
        .as_deref()
        .and_then(|text| Signature::parse(text).ok());

    if cli.json {
        let report = serde_json::json!({
            "file": file.display().to_string(),
            "namespace": namespace,
            "shortClassName": short_name,
            "className": class_name,
            "name": name,
            "description": description,
            "signature": signature,
            "errors": source.diagnostics().error_count(),
        });
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                print_error(&format!("Failed to serialize report: {}", e));
                return 1;
            }
        }
        return 0;
    }

    println!("file:        {}", file.display());
    println!("namespace:   {}", namespace.as_deref().unwrap_or("(none)"));
    println!("class:       {}", class_name.as_deref().unwrap_or("(none)"));
    println!("name:        {}", name.as_deref().unwrap_or("(none)"));
    println!("description: {}", description.as_deref().unwrap_or("(none)"));
    match signature {
        Some(signature) => {
            println!("signature:   {}", signature_text.as_deref().unwrap_or(""));
            println!("  command:   {}", signature.name);
            for argument in &signature.arguments {
                println!(
                    "  argument:  {}{}",
                    argument.name,
                    if argument.required { "" } else { " (optional)" }
                );
            }
            for option in &signature.options {
                match &option.default {
                    Some(default) => {
                        println!("  option:    --{} (default: {})", option.name, default)
                    }
                    None => println!("  option:    --{}", option.name),
                }
            }
        }
        None => println!("signature:   (none)"),
    }

    let use_color = atty_is_terminal();
    for diagnostic in source.diagnostics().diagnostics() {
        let position = diagnostic
            .span
            .map(|span| source.line_and_column(span.start));
        print_diagnostic(diagnostic, position, use_color);
    }
    if source.diagnostics().has_errors() {
        return 2;
    }

    0
}

fn print_diagnostic(
    diag: &phpcons_diagnostics::Diagnostic,
    position: Option<LineAndColumn>,
    use_color: bool,
) {
    let location = position
        .map(|p| format!("({},{})", p.line + 1, p.character + 1))
        .unwrap_or_default();
    let category = if diag.is_error() { "error" } else { "warning" };
    if use_color {
        let color = if diag.is_error() { RED } else { YELLOW };
        if let Some(ref file) = diag.file {
            eprint!("{}{}{}{}: ", CYAN, file, RESET, location);
        }
        eprintln!(
            "{}{}{}{} {}{}{}: {}",
            BOLD, color, category, RESET,
            CYAN, format!("PC{}", diag.code), RESET,
            diag.message_text
        );
    } else {
        if let Some(ref file) = diag.file {
            eprint!("{}{}: ", file, location);
        }
        eprintln!("{} PC{}: {}", category, diag.code, diag.message_text);
    }
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // Simple check - on Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true // Assume terminal on other platforms
    }
}
