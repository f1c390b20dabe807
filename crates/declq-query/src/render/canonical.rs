//! Canonical declaration text.
//!
//! Headers are printed from their whitespace-normalized source form; record
//! and namespace members are re-indented one level per nesting depth; function
//! bodies are re-laid-out by [`reflow`].

use declq_core::{
    Access, Callable, DeclKind, Declaration, EnumDecl, PrintStyle, RecordDecl, SyntaxTree,
};

use super::RenderOptions;
use super::body::reflow;

/// Print one declaration, including everything nested inside it.
pub(crate) fn print(tree: &SyntaxTree, decl: &Declaration, options: &RenderOptions) -> String {
    let mut printer = Printer {
        tree,
        indent: " ".repeat(options.indent_width),
        terse: options.style == PrintStyle::Terse,
        lines: Vec::new(),
    };
    printer.decl(decl, 0);
    printer.lines.join("\n")
}

struct Printer<'t> {
    tree: &'t SyntaxTree,
    indent: String,
    terse: bool,
    lines: Vec<String>,
}

impl Printer<'_> {
    fn line(&mut self, depth: usize, text: &str) {
        self.lines.push(format!("{}{text}", self.indent.repeat(depth)));
    }

    fn decl(&mut self, decl: &Declaration, depth: usize) {
        if let Some(params) = &decl.template_params {
            self.line(depth, params);
        }
        match &decl.kind {
            DeclKind::Namespace { is_inline } => self.namespace(decl, *is_inline, depth),
            DeclKind::Record(record) => self.record(decl, record, depth),
            DeclKind::Method(method) => self.callable(&method.callable, depth),
            DeclKind::Function(function) => self.callable(&function.callable, depth),
            DeclKind::Field(var) | DeclKind::Variable(var) => {
                self.line(depth, &format!("{};", var.text));
            }
            DeclKind::Enum(decl_enum) => self.enumeration(decl, decl_enum, depth),
            DeclKind::Enumerator { value } => {
                let text = enumerator_text(&decl.name, value.as_deref());
                let terminator = if self.terse { ";" } else { "" };
                self.line(depth, &format!("{text}{terminator}"));
            }
            DeclKind::TypeAlias { text } => self.line(depth, &format!("{text};")),
            // An inline friend definition already ends with its body.
            DeclKind::Verbatim { text } if text.ends_with('}') => self.line(depth, text),
            DeclKind::Verbatim { text } => self.line(depth, &format!("{text};")),
        }
    }

    fn namespace(&mut self, decl: &Declaration, is_inline: bool, depth: usize) {
        let mut header = String::new();
        if is_inline {
            header.push_str("inline ");
        }
        header.push_str("namespace");
        if !decl.name.is_empty() {
            header.push(' ');
            header.push_str(&decl.name);
        }
        if self.terse {
            self.line(depth, &format!("{header};"));
            return;
        }
        self.line(depth, &format!("{header} {{"));
        let tree = self.tree;
        for child in tree.children(decl.id) {
            self.decl(child, depth + 1);
        }
        self.line(depth, "}");
    }

    fn record(&mut self, decl: &Declaration, record: &RecordDecl, depth: usize) {
        let mut header = record.tag.as_str().to_string();
        if !decl.name.is_empty() {
            header.push(' ');
            header.push_str(&decl.name);
        }
        if let Some(bases) = &record.bases {
            header.push_str(" : ");
            header.push_str(bases);
        }
        if self.terse || !record.has_body {
            self.line(depth, &format!("{header};"));
            return;
        }

        self.line(depth, &format!("{header} {{"));
        let tree = self.tree;
        let mut current: Access = record.tag.default_access();
        for member in tree.children(decl.id) {
            if let Some(access) = member.access.filter(|access| *access != current) {
                self.line(depth, &format!("{access}:"));
                current = access;
            }
            self.decl(member, depth + 1);
        }
        self.line(depth, "};");
    }

    fn callable(&mut self, callable: &Callable, depth: usize) {
        let signature = &callable.signature;
        let body = callable.body.as_deref().filter(|_| !self.terse);
        let Some(body) = body else {
            match &callable.trailer {
                Some(trailer) => self.line(depth, &format!("{signature} {trailer};")),
                None => self.line(depth, &format!("{signature};")),
            }
            return;
        };

        let lines = reflow(body);
        match lines.as_slice() {
            [open, close] if open.text == "{" && close.text == "}" => {
                self.line(depth, &format!("{signature} {{}}"));
            }
            [first, rest @ ..] => {
                self.line(depth, &format!("{signature} {}", first.text));
                for line in rest {
                    self.line(depth + line.depth, &line.text);
                }
            }
            [] => self.line(depth, &format!("{signature};")),
        }
    }

    fn enumeration(&mut self, decl: &Declaration, decl_enum: &EnumDecl, depth: usize) {
        let mut header = String::from("enum");
        if decl_enum.is_scoped {
            header.push_str(" class");
        }
        if !decl.name.is_empty() {
            header.push(' ');
            header.push_str(&decl.name);
        }
        if let Some(base) = &decl_enum.base {
            header.push_str(" : ");
            header.push_str(base);
        }
        if self.terse || !decl_enum.has_body {
            self.line(depth, &format!("{header};"));
            return;
        }

        self.line(depth, &format!("{header} {{"));
        let enumerators: Vec<String> = self
            .tree
            .children(decl.id)
            .filter_map(|child| match &child.kind {
                DeclKind::Enumerator { value } => {
                    Some(enumerator_text(&child.name, value.as_deref()))
                }
                _ => None,
            })
            .collect();
        let last = enumerators.len().saturating_sub(1);
        for (idx, text) in enumerators.iter().enumerate() {
            let separator = if idx == last { "" } else { "," };
            self.line(depth + 1, &format!("{text}{separator}"));
        }
        self.line(depth, "};");
    }
}

fn enumerator_text(name: &str, value: Option<&str>) -> String {
    value.map_or_else(|| name.to_string(), |value| format!("{name} = {value}"))
}
