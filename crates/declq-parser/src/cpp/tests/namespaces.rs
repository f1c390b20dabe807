use declq_core::DeclKind;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn nested_namespace_specifier_opens_each_level() {
    let tree = parse("namespace a::b {\nint x;\n}");
    let a = find_by_name(&tree, "a");
    let b = find_by_name(&tree, "b");
    let x = find_by_name(&tree, "x");
    assert_eq!(b.scope, Some(a.id));
    assert_eq!(x.scope, Some(b.id));
    assert_eq!(tree.qualified_name(x.id), "a::b::x");
}

#[test]
fn anonymous_namespace_has_empty_name() {
    let tree = parse("namespace {\nint hidden;\n}");
    let anon = tree.top_level().next().expect("namespace");
    assert!(matches!(anon.kind, DeclKind::Namespace { .. }));
    assert_eq!(anon.name, "");
    assert_eq!(tree.qualified_name(find_by_name(&tree, "hidden").id), "hidden");
}

#[test]
fn inline_namespace_is_flagged() {
    let tree = parse("inline namespace v1 {\nvoid f();\n}");
    let v1 = find_by_name(&tree, "v1");
    assert!(matches!(v1.kind, DeclKind::Namespace { is_inline: true }));
}

#[test]
fn extern_c_block_is_transparent() {
    let tree = parse("extern \"C\" {\nvoid f();\nint g(int);\n}\nextern \"C\" void h();");
    let names: Vec<_> = tree.top_level().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["f", "g", "h"]);
}

#[test]
fn namespace_members_keep_source_order() {
    let tree = fixture();
    let geo = find_by_name(&tree, "geo");
    assert_eq!(
        child_names(&tree, geo),
        vec!["Unit", "Shape", "Circle", "Circle", "area"]
    );
}
