//! GoFile abstraction for structured Go source generation.
//!
//! Imports are grouped the way `goimports` lays them out: standard library
//! first, then third-party modules, then packages of the generated module,
//! each group sorted and separated by a blank line.

use std::collections::BTreeSet;

use svcforge_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A Go import, optionally renamed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Import {
    path: String,
    alias: Option<String>,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Standard library paths have no dot in their first element.
    pub fn is_std(&self) -> bool {
        let first = self.path.split('/').next().unwrap_or_default();
        !first.contains('.')
    }

    fn format(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} \"{}\"", alias, self.path),
            None => format!("\"{}\"", self.path),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum ImportGroup {
    Std,
    ThirdParty,
    Module,
}

/// A structured representation of a Go source file.
///
/// # Example
///
/// ```
/// use svcforge_go::{GoFile, Import};
///
/// let code = GoFile::new("main")
///     .import(Import::new("fmt"))
///     .section("func main() {\n\tfmt.Println(\"hi\")\n}")
///     .render();
///
/// assert_eq!(code, "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"hi\")\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GoFile {
    package: String,
    module: Option<String>,
    imports: BTreeSet<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Module path whose packages form the last import group.
    pub fn in_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.insert(import);
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a top-level declaration.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add a top-level declaration given as Go source text.
    pub fn section(mut self, text: &str) -> Self {
        self.body.push(CodeFragment::text(text.trim_matches('\n')));
        self
    }

    /// Import paths in declaration order, for inspection.
    pub fn import_paths(&self) -> Vec<&str> {
        self.grouped()
            .into_iter()
            .flat_map(|(_, imports)| imports.into_iter().map(Import::path))
            .collect()
    }

    fn group_of(&self, import: &Import) -> ImportGroup {
        let in_module = self.module.as_deref().is_some_and(|module| {
            import.path == module || import.path.starts_with(&format!("{}/", module))
        });
        if in_module {
            ImportGroup::Module
        } else if import.is_std() {
            ImportGroup::Std
        } else {
            ImportGroup::ThirdParty
        }
    }

    fn grouped(&self) -> Vec<(ImportGroup, Vec<&Import>)> {
        let mut groups: Vec<(ImportGroup, Vec<&Import>)> = Vec::new();
        let mut sorted: Vec<&Import> = self.imports.iter().collect();
        sorted.sort_by_key(|import| (self.group_of(import), import.path.as_str()));
        for import in sorted {
            let group = self.group_of(import);
            match groups.last_mut() {
                Some((last, members)) if *last == group => members.push(import),
                _ => groups.push((group, vec![import])),
            }
        }
        groups
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::GO);
        builder.push_line(&format!("package {}", self.package));

        let groups = self.grouped();
        match groups.as_slice() {
            [] => {}
            [(_, single)] if single.len() == 1 => {
                builder.push_blank();
                builder.push_line(&format!("import {}", single[0].format()));
            }
            _ => {
                builder.push_blank();
                builder.push_line("import (");
                builder.push_indent();
                for (i, (_, imports)) in groups.iter().enumerate() {
                    if i > 0 {
                        builder.push_blank();
                    }
                    for import in imports {
                        builder.push_line(&import.format());
                    }
                }
                builder.push_dedent();
                builder.push_line(")");
            }
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

/// A field in a Go struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoField {
    pub name: String,
    pub ty: String,
    pub tag: Option<String>,
}

impl GoField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            tag: None,
        }
    }

    /// Raw struct tag content, without the surrounding backquotes.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn json(self, key: &str) -> Self {
        self.tag(format!("json:\"{}\"", key))
    }

    pub fn yaml(self, key: &str) -> Self {
        self.tag(format!("yaml:\"{}\"", key))
    }
}

/// A Go struct type declaration with gofmt column alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoStruct {
    name: String,
    doc: Option<String>,
    fields: Vec<GoField>,
}

impl GoStruct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn field(mut self, field: GoField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = GoField>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn field_line(&self, field: &GoField, name_width: usize, ty_width: usize) -> String {
        match &field.tag {
            Some(tag) => format!(
                "{:name_width$} {:ty_width$} `{}`",
                field.name, field.ty, tag
            ),
            None => format!("{:name_width$} {}", field.name, field.ty),
        }
    }
}

impl Renderable for GoStruct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::comment(format!("{} {}", self.name, doc)));
        }
        if self.fields.is_empty() {
            fragments.push(CodeFragment::line(format!("type {} struct{{}}", self.name)));
            return fragments;
        }

        let name_width = self.fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
        let ty_width = self.fields.iter().map(|f| f.ty.len()).max().unwrap_or(0);
        let body = self
            .fields
            .iter()
            .map(|field| CodeFragment::line(self.field_line(field, name_width, ty_width)))
            .collect();
        fragments.push(CodeFragment::block(
            format!("type {} struct {{", self.name),
            body,
            "}",
        ));
        fragments
    }
}
