//! Shared helpers for rule tests.

use std::path::{Path, PathBuf};

use fsd_lint_core::{
    Config, FileRule, Finding, FsdConfig, ImportRef, ImportRule, ImportSyntax, Linter, Location,
    StaticProbe,
};

/// `import x from '<spec>'` on line 1; the span starts after the quote.
pub fn import(file: &str, spec: &str) -> ImportRef {
    syntax_ref(file, spec, ImportSyntax::Import)
}

pub fn require(file: &str, spec: &str) -> ImportRef {
    syntax_ref(file, spec, ImportSyntax::Require)
}

fn syntax_ref(file: &str, spec: &str, syntax: ImportSyntax) -> ImportRef {
    let offset = "import x from '".len();
    ImportRef::new(
        spec,
        syntax,
        Location::new(PathBuf::from(file), 1, offset + 1).with_span(offset, spec.len()),
    )
}

pub fn config(fsd: FsdConfig) -> Config {
    Config {
        fsd,
        ..Config::default()
    }
}

pub fn run_import<R: ImportRule + 'static>(
    rule: R,
    fsd: FsdConfig,
    file: &str,
    spec: &str,
) -> Vec<Finding> {
    let linter = Linter::builder()
        .config(config(fsd))
        .import_rule(rule)
        .probe(StaticProbe::new())
        .build()
        .expect("valid config");
    linter
        .lint_import(Path::new(file), &import(file, spec))
        .expect("lint succeeds")
}

pub fn run_file<R: FileRule + 'static>(
    rule: R,
    fsd: FsdConfig,
    probe: StaticProbe,
    file: &str,
) -> Vec<Finding> {
    let linter = Linter::builder()
        .config(config(fsd))
        .file_rule(rule)
        .probe(probe)
        .build()
        .expect("valid config");
    linter
        .lint_file(Path::new(file), &[])
        .expect("lint succeeds")
}
