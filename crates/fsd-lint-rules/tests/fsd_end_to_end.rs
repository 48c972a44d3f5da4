//! End-to-end tests running the built-in rules against a real directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use fsd_lint_core::{apply_fixes, Config, ImportRef, ImportSyntax, Linter, Location};
use fsd_lint_rules::{all_rules, folder_structure, public_api_only};
use tempfile::TempDir;

fn linter(config: Config) -> Linter {
    all_rules(&config)
        .register(Linter::builder().config(config))
        .build()
        .expect("valid config")
}

fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// Finds every `'…'` literal and reports it as an import with the span
/// inside the quotes.
fn quoted_imports(path: &Path, source: &str) -> Vec<ImportRef> {
    let mut imports = Vec::new();
    let mut rest = source;
    let mut base = 0;
    while let Some(open) = rest.find('\'') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('\'') else { break };
        let offset = base + open + 1;
        imports.push(ImportRef::new(
            &after[..close],
            ImportSyntax::Import,
            Location::new(path.to_path_buf(), 1, offset + 1).with_span(offset, close),
        ));
        base = offset + close + 1;
        rest = &after[close + 1..];
    }
    imports
}

#[test]
fn missing_public_api_disappears_after_index_is_created() {
    let dir = TempDir::new().unwrap();
    let button = write(dir.path(), "src/shared/ui/button/Button.js", "export {};\n");
    let linter = linter(Config::default());

    let structure_findings = |linter: &Linter| {
        linter
            .lint_file(&button, &[])
            .unwrap()
            .into_iter()
            .filter(|f| f.code == folder_structure::CODE)
            .count()
    };

    assert_eq!(structure_findings(&linter), 1);

    write(dir.path(), "src/shared/ui/button/index.js", "export * from './Button';\n");
    assert_eq!(structure_findings(&linter), 0);
}

#[test]
fn fix_rewrites_internal_import_and_relints_clean() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/entities/user/index.ts", "export * from './model/user';\n");
    write(dir.path(), "src/features/auth/index.ts", "export {};\n");
    let source = "import { User } from '@/entities/user/model/user';\n";
    let form = write(dir.path(), "src/features/auth/ui/login-form.ts", source);

    let linter = linter(Config::default());
    let findings = linter
        .lint_file(&form, &quoted_imports(&form, source))
        .unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].code, public_api_only::CODE);

    let outcome = apply_fixes(source, &findings);
    assert_eq!(outcome.output, "import { User } from '@/entities/user';\n");

    let again = linter
        .lint_file(&form, &quoted_imports(&form, &outcome.output))
        .unwrap();
    assert!(again.is_empty(), "{again:?}");
}

#[test]
fn every_violation_in_a_file_is_reported() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/entities/user/index.ts", "");
    let source = "import a from '@/features/auth'; import b from '@/entities/session/model/x';";
    let file = write(dir.path(), "src/entities/user/model/User.ts", source);

    let findings = linter(Config::default())
        .lint_file(&file, &quoted_imports(&file, source))
        .unwrap();
    let mut codes: Vec<_> = findings.iter().map(|f| f.code.as_str()).collect();
    codes.sort_unstable();
    assert_eq!(codes, ["FSD001", "FSD003", "FSD005"]);
}

#[test]
fn configured_src_root_and_disabled_rules() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("app-src");
    let file = write(&root, "features/auth/ui/Form.ts", "");
    write(&root, "features/auth/index.ts", "");

    let toml = format!(
        "[fsd]\nsrc_root_dir = {:?}\n\n[rules.naming-convention]\nenabled = false\n",
        root.to_string_lossy()
    );
    let config = Config::parse(&toml).unwrap();
    let findings = linter(config)
        .lint_file(&file, &[])
        .unwrap();
    assert!(findings.is_empty(), "{findings:?}");
}
