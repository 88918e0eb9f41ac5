//! End-to-end extraction over realistic command files.

use phpcons_source::Source;
use pretty_assertions::assert_eq;

const ALPHA: &str = r#"<?php

namespace App;

class AlphaCommand
{
    protected $name = 'alpha';

    public function handle()
    {
        // does things
    }
}
"#;

#[test]
fn extracts_fully_qualified_name() {
    let mut source = Source::new(ALPHA);
    assert_eq!(source.class_name().as_deref(), Some("App\\AlphaCommand"));
}

#[test]
fn extraction_is_deterministic_across_instances() {
    let run = || {
        let mut source = Source::new(ALPHA);
        (source.namespace(), source.class_name())
    };
    assert_eq!(run(), run());
}

#[test]
fn namespace_then_class_share_the_cursor() {
    let mut source = Source::new(ALPHA);
    assert_eq!(source.namespace().as_deref(), Some("\\App"));
    assert_eq!(source.short_class_name().as_deref(), Some("AlphaCommand"));
}

#[test]
fn property_unaffected_by_prior_queries() {
    let mut source = Source::new(ALPHA);
    source.class_name();
    assert_eq!(source.string_property(&["name"]).as_deref(), Some("alpha"));
}

#[test]
fn broken_file_degrades_to_no_declarations() {
    let mut source = Source::new("<?php class 'oops");
    assert!(source.diagnostics().has_errors());
    assert_eq!(source.class_name(), None);
}

#[test]
fn name_and_description_properties_extract() {
    let text = r#"<?php
namespace App;

class ReportCommand
{
    protected $name = 'report';

    protected $description = 'Render the weekly report';
}
"#;
    let mut source = Source::new(text);
    assert_eq!(source.string_property(&["name"]).as_deref(), Some("report"));
    assert_eq!(
        source.string_property(&["description"]).as_deref(),
        Some("Render the weekly report")
    );
}

#[test]
fn typed_and_attributed_properties_extract() {
    let text = r#"<?php
namespace App;

#[AsCommand]
class WidgetCommand
{
    protected static string $signature = 'widget:list {--all}';
}
"#;
    let mut source = Source::new(text);
    assert_eq!(source.class_name().as_deref(), Some("App\\WidgetCommand"));
    assert_eq!(
        source.string_property(&["signature"]).as_deref(),
        Some("widget:list {--all}")
    );
}
