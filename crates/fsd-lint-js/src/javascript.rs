//! JavaScript and TypeScript extractor using Tree-sitter.
//!
//! Collects the specifier of every
//!
//! - `import … from '…'` and side-effect `import '…'`
//! - `export … from '…'`
//! - `require('…')`, at any depth
//! - TypeScript `import x = require('…')`
//!
//! Only plain string literals are collected. `require` with a template or
//! computed argument and `import()` expressions are counted as dynamic and
//! skipped.

use std::path::Path;

use fsd_lint_core::ImportSyntax;
use tree_sitter::{Language, Node, Parser};

use crate::extractor::{ExtractError, FileAnalysis, ImportInfo, LanguageExtractor};

/// Grammar flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `.js`, `.jsx`, `.mjs`, `.cjs`
    JavaScript,
    /// `.ts`, `.mts`, `.cts`
    TypeScript,
    /// `.tsx`
    Tsx,
}

/// Extracts literal import specifiers from JavaScript-family source.
pub struct JsExtractor {
    dialect: Dialect,
    language: Language,
}

impl JsExtractor {
    /// Creates an extractor for `dialect`.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        let language = match dialect {
            Dialect::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        };
        Self { dialect, language }
    }

    /// The grammar flavour.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Records a string literal node as an import.
    fn push_literal(node: &Node<'_>, source: &str, syntax: ImportSyntax, out: &mut FileAnalysis) {
        if node.kind() != "string" {
            out.skipped_dynamic += 1;
            return;
        }
        let (start, end) = (node.start_byte(), node.end_byte());
        if end < start + 2 {
            return;
        }
        let offset = start + 1;
        let length = end - start - 2;
        let Some(specifier) = source.get(offset..offset + length) else {
            return;
        };
        let position = node.start_position();
        out.imports.push(ImportInfo {
            specifier: specifier.to_string(),
            syntax,
            line: position.row + 1,
            column: position.column + 2,
            offset,
            length,
        });
    }

    fn visit(node: &Node<'_>, source: &str, out: &mut FileAnalysis) {
        match node.kind() {
            "import_statement" | "export_statement" => {
                if let Some(src) = node.child_by_field_name("source") {
                    Self::push_literal(&src, source, ImportSyntax::Import, out);
                } else if let Some(src) = Self::require_clause_source(node) {
                    Self::push_literal(&src, source, ImportSyntax::Require, out);
                }
            }
            "call_expression" => {
                let Some(function) = node.child_by_field_name("function") else {
                    return;
                };
                match function.kind() {
                    "import" => out.skipped_dynamic += 1,
                    "identifier" if function.utf8_text(source.as_bytes()) == Ok("require") => {
                        let argument = node
                            .child_by_field_name("arguments")
                            .and_then(|args| args.named_child(0));
                        match argument {
                            Some(arg) => Self::push_literal(&arg, source, ImportSyntax::Require, out),
                            None => out.skipped_dynamic += 1,
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }

    /// `source` of a TypeScript `import x = require('…')`.
    fn require_clause_source<'t>(node: &Node<'t>) -> Option<Node<'t>> {
        let mut cursor = node.walk();
        let clause = node
            .children(&mut cursor)
            .find(|child| child.kind() == "import_require_clause")?;
        if let Some(source) = clause.child_by_field_name("source") {
            return Some(source);
        }
        let mut cursor = clause.walk();
        let mut literals = clause
            .named_children(&mut cursor)
            .filter(|child| child.kind() == "string");
        literals.next()
    }
}

impl LanguageExtractor for JsExtractor {
    fn language_id(&self) -> &'static str {
        match self.dialect {
            Dialect::JavaScript => "javascript",
            Dialect::TypeScript => "typescript",
            Dialect::Tsx => "tsx",
        }
    }

    fn extensions(&self) -> &'static [&'static str] {
        match self.dialect {
            Dialect::JavaScript => &["js", "jsx", "mjs", "cjs"],
            Dialect::TypeScript => &["ts", "mts", "cts"],
            Dialect::Tsx => &["tsx"],
        }
    }

    fn analyze(&self, path: &Path, source: &str) -> Result<FileAnalysis, ExtractError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ExtractError::Language {
                language: self.language_id(),
                message: e.to_string(),
            })?;

        let tree = parser.parse(source, None).ok_or(ExtractError::Parse {
            language: self.language_id(),
        })?;
        let root = tree.root_node();

        let mut result = FileAnalysis {
            file_path: path.to_path_buf(),
            has_syntax_errors: root.has_error(),
            ..FileAnalysis::default()
        };
        if result.has_syntax_errors {
            tracing::debug!("{} has syntax errors, extracting what parsed", path.display());
        }

        let mut cursor = root.walk();
        'walk: loop {
            Self::visit(&cursor.node(), source, &mut result);
            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    break 'walk;
                }
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(dialect: Dialect, src: &str) -> FileAnalysis {
        JsExtractor::new(dialect)
            .analyze(Path::new("/p/src/features/auth/ui/form.ts"), src)
            .unwrap()
    }

    fn specifiers(a: &FileAnalysis) -> Vec<&str> {
        a.imports.iter().map(|i| i.specifier.as_str()).collect()
    }

    #[test]
    fn extracts_esm_imports_and_reexports() {
        let a = analyze(
            Dialect::JavaScript,
            "import a from './a';\nimport './side-effect';\nexport * from '@/entities/user';\nexport { b } from \"../b\";\n",
        );
        assert_eq!(
            specifiers(&a),
            ["./a", "./side-effect", "@/entities/user", "../b"]
        );
        assert!(a.imports.iter().all(|i| i.syntax == ImportSyntax::Import));
    }

    #[test]
    fn local_exports_are_not_imports() {
        let a = analyze(Dialect::JavaScript, "export const x = 1;\nexport default x;\n");
        assert!(a.imports.is_empty());
    }

    #[test]
    fn extracts_nested_require() {
        let a = analyze(
            Dialect::JavaScript,
            "const a = require('entities/user');\nfunction f() { return require('./lazy'); }\n",
        );
        assert_eq!(specifiers(&a), ["entities/user", "./lazy"]);
        assert!(a.imports.iter().all(|i| i.syntax == ImportSyntax::Require));
    }

    #[test]
    fn dynamic_specifiers_are_skipped() {
        let a = analyze(
            Dialect::JavaScript,
            "const n = 'x';\nrequire(n);\nrequire(`./${n}`);\nimport('./lazy');\n",
        );
        assert!(a.imports.is_empty());
        assert_eq!(a.skipped_dynamic, 3);
    }

    #[test]
    fn spans_point_inside_quotes() {
        let src = "// header\nimport { User } from '@/entities/user/model/user';\n";
        let a = analyze(Dialect::TypeScript, src);
        let i = &a.imports[0];
        assert_eq!(&src[i.offset..i.offset + i.length], "@/entities/user/model/user");
        assert_eq!(i.line, 2);
        assert_eq!(i.column, "import { User } from '".len() + 1);
    }

    #[test]
    fn typescript_forms() {
        let a = analyze(
            Dialect::TypeScript,
            "import type { T } from './types';\nimport fs = require('node:fs');\n",
        );
        assert_eq!(specifiers(&a), ["./types", "node:fs"]);
        assert_eq!(a.imports[1].syntax, ImportSyntax::Require);
    }

    #[test]
    fn tsx_with_jsx() {
        let a = analyze(
            Dialect::Tsx,
            "import { Button } from '@/shared/ui';\nexport const C = () => <Button label=\"x\" />;\n",
        );
        assert_eq!(specifiers(&a), ["@/shared/ui"]);
        assert!(!a.has_syntax_errors);
    }

    #[test]
    fn import_refs_carry_the_span() {
        let src = "import a from './a';";
        let a = analyze(Dialect::JavaScript, src);
        let refs = a.import_refs();
        assert_eq!(refs[0].location.offset, 15);
        assert_eq!(refs[0].location.length, 3);
        assert_eq!(refs[0].location.file, Path::new("/p/src/features/auth/ui/form.ts"));
    }
}
