use declq_core::{Declaration, SyntaxTree};

use crate::parser::parse_translation_unit;

mod functions;
mod namespaces;

fn parse(source: &str) -> SyntaxTree {
    parse_translation_unit(source, Some("test.cpp"))
}

fn fixture() -> SyntaxTree {
    let source = include_str!("../../../tests/fixtures/shapes.cpp");
    parse_translation_unit(source, Some("shapes.cpp"))
}

fn find_by_name<'t>(tree: &'t SyntaxTree, name: &str) -> &'t Declaration {
    tree.walk().find(|d| d.name == name).unwrap_or_else(|| {
        let available: Vec<_> = tree
            .walk()
            .map(|d| format!("{}: {}", d.kind_label(), tree.qualified_name(d.id)))
            .collect();
        panic!(
            "declaration {name:?} not found. Available:\n{}",
            available.join("\n")
        );
    })
}

fn find_all<'t>(tree: &'t SyntaxTree, name: &str) -> Vec<&'t Declaration> {
    tree.walk().filter(|d| d.name == name).collect()
}

fn find_kind<'t>(tree: &'t SyntaxTree, name: &str, label: &str) -> &'t Declaration {
    find_all(tree, name)
        .into_iter()
        .find(|d| d.kind_label() == label)
        .unwrap_or_else(|| panic!("no {label} named {name:?}"))
}

fn child_names(tree: &SyntaxTree, decl: &Declaration) -> Vec<String> {
    tree.children(decl.id).map(|d| d.name.clone()).collect()
}
