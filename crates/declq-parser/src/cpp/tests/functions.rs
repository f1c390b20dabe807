use declq_core::DeclKind;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn callable(decl: &Declaration) -> &declq_core::Callable {
    match &decl.kind {
        DeclKind::Method(method) => &method.callable,
        DeclKind::Function(function) => &function.callable,
        other => panic!("expected callable, got {other:?}"),
    }
}

#[test]
fn in_body_definition_is_inline_method() {
    let tree = parse("class Foo {\npublic:\n  int get() const { return 1; }\n};");
    let foo = find_by_name(&tree, "Foo");
    let get = find_by_name(&tree, "get");
    let method = get.as_method().expect("method");
    assert_eq!(method.parent_record, foo.id);
    assert!(get.is_definition());
    assert!(!get.is_out_of_line());
    assert_eq!(method.callable.signature, "int get() const");
    assert_eq!(method.callable.body.as_deref(), Some("{ return 1; }"));
}

#[test]
fn prototype_is_not_a_definition() {
    let tree = parse("void f(int);");
    let f = find_by_name(&tree, "f");
    assert_eq!(f.kind_label(), "function");
    assert!(!f.is_definition());
    assert_eq!(callable(f).signature, "void f(int)");
}

#[test]
fn pure_virtual_keeps_trailer() {
    let tree = parse("class S {\npublic:\n  virtual void f() = 0;\n};");
    let f = find_by_name(&tree, "f");
    assert!(f.as_method().is_some());
    assert!(!f.is_definition());
    assert_eq!(callable(f).trailer.as_deref(), Some("= 0"));
}

#[test]
fn defaulted_constructor_is_a_definition() {
    let tree = parse("struct T {\n  T() = default;\n};");
    let t = find_kind(&tree, "T", "method");
    assert!(t.is_definition());
    assert_eq!(callable(t).trailer.as_deref(), Some("= default"));
    assert!(callable(t).body.is_none());
}

#[test]
fn constructors_and_destructors_are_methods() {
    let tree = parse("class R {\npublic:\n  explicit R(int n);\n  ~R();\n};");
    let r = find_kind(&tree, "R", "class");
    assert_eq!(child_names(&tree, r), vec!["R", "~R"]);
    assert!(tree.methods_of(r.id).all(|m| !m.is_definition()));
}

#[test]
fn template_function_records_parameters() {
    let tree = parse("template <typename T>\nT biggest(T a, T b) { return a > b ? a : b; }");
    let biggest = find_by_name(&tree, "biggest");
    assert_eq!(biggest.template_params.as_deref(), Some("template <typename T>"));
    assert_eq!(callable(biggest).signature, "T biggest(T a, T b)");
    assert!(biggest.is_definition());
}

#[test]
fn initializer_list_stays_in_signature() {
    let tree = fixture();
    let ctor = find_all(&tree, "Circle")
        .into_iter()
        .find(|d| d.is_definition() && d.is_out_of_line())
        .expect("out-of-line constructor");
    assert_eq!(
        callable(ctor).signature,
        "Circle::Circle(double radius) : radius_(radius)"
    );
    assert_eq!(callable(ctor).body.as_deref(), Some("{}"));
}

#[test]
fn operator_names_survive() {
    let tree = fixture();
    let ops = find_all(&tree, "operator+");
    assert_eq!(ops.len(), 2, "in-body declaration and out-of-line definition");
}

#[test]
fn function_pointer_is_a_variable() {
    let tree = parse("int (*handler)(int);");
    let handler = find_by_name(&tree, "handler");
    assert_eq!(handler.kind_label(), "variable");
}

#[rstest]
#[case::plain("operator bool() const;", "operator bool", "operator bool() const")]
#[case::explicit_cast(
    "explicit operator bool() const;",
    "operator bool",
    "explicit operator bool() const"
)]
#[case::pointer_target(
    "operator const char*() const;",
    "operator const char*",
    "operator const char*() const"
)]
fn conversion_operator_declaration_is_a_method(
    #[case] member: &str,
    #[case] name: &str,
    #[case] signature: &str,
) {
    let tree = parse(&format!("class Foo {{\npublic:\n  {member}\n}};"));
    let foo = find_by_name(&tree, "Foo");
    let cast = find_by_name(&tree, name);
    let method = cast.as_method().expect("method");
    assert_eq!(method.parent_record, foo.id);
    assert!(!cast.is_definition());
    assert_eq!(method.callable.signature, signature);
    assert_eq!(child_names(&tree, foo), vec![name]);
}

#[test]
fn inline_conversion_operator_is_a_definition() {
    let tree = parse("class Foo {\npublic:\n  operator int() const { return 1; }\n};");
    let cast = find_by_name(&tree, "operator int");
    assert!(cast.is_definition());
    assert!(!cast.is_out_of_line());
    assert_eq!(callable(cast).signature, "operator int() const");
}

#[rstest]
#[case::glued_pointer("int* get();", "get", "int* get()")]
#[case::spaced_pointer("int *get();", "get", "int *get()")]
#[case::glued_reference(
    "const std::string& name() const;",
    "name",
    "const std::string& name() const"
)]
fn declarator_keeps_source_spacing(
    #[case] member: &str,
    #[case] name: &str,
    #[case] signature: &str,
) {
    let tree = parse(&format!("class Foo {{\n  {member}\n}};"));
    assert_eq!(callable(find_by_name(&tree, name)).signature, signature);
}

#[test]
fn pointer_spacing_matches_out_of_line_definition() {
    let tree = parse("class Foo {\n  int* get();\n};\nint* Foo::get() { return nullptr; }");
    let sigs: Vec<_> = find_all(&tree, "get")
        .into_iter()
        .map(|d| callable(d).signature.replace("Foo::", ""))
        .collect();
    assert_eq!(sigs, vec!["int* get()", "int* get()"]);
}
