//! Rendering the shared front-end fixture.

use declq_core::Target;
use declq_parser::parse_translation_unit;
use declq_query::{Block, RenderOptions, collect, render};
use pretty_assertions::assert_eq;

fn fixture() -> declq_core::SyntaxTree {
    let source = include_str!("../../declq-parser/tests/fixtures/shapes.cpp");
    parse_translation_unit(source, Some("shapes.cpp"))
}

fn render_target(name: &str, options: &RenderOptions) -> String {
    let tree = fixture();
    let target = Target::new(name).expect("target");
    render(&tree, &collect(&tree, &target), options).to_string()
}

#[test]
fn point_renders_struct_then_operator() {
    let text = render_target("Point", &RenderOptions::default());
    let expected_struct = "\
struct Point {
    int x;
    int y;
    Point operator+(const Point& other) const;
};
Point Point::operator+(const Point& other) const {
    return {x + other.x, y + other.y};
}
// ---- end of class Point ----
";
    assert!(
        text.contains(expected_struct),
        "unexpected rendering:\n{text}"
    );
    // The enumerator `geo::Unit::Point` is visited first and closes as a symbol.
    assert!(text.starts_with("Point = 4\n// ---- end of symbol Point ----\n\n"));
}

#[test]
fn template_class_links_its_member() {
    let text = render_target("Box", &RenderOptions::default());
    assert_eq!(
        text,
        "\
template <typename T>
class Box {
public:
    void set(T value);
    T get() const {
        return value_;
    }
private:
    T value_;
};
template <typename T>
void Box<T>::set(T value) {
    value_ = value;
}
// ---- end of class Box ----

"
    );
}

#[test]
fn definitions_inside_namespaces_are_not_top_level() {
    // `Circle::area` is defined inside `namespace geo`, so the top-level scan
    // does not pick it up; only the record and its marker are printed.
    let tree = fixture();
    let target = Target::new("Circle").expect("target");
    let out = render(&tree, &collect(&tree, &target), &RenderOptions::default());
    let record_blocks = out
        .blocks()
        .iter()
        .take_while(|block| !block.is_marker())
        .count();
    assert_eq!(record_blocks, 1);
}

#[test]
fn destructor_defined_at_root_is_linked() {
    let text = render_target("Shape", &RenderOptions::default());
    assert!(text.contains("geo::Shape::~Shape() {}\n// ---- end of class Shape ----"));
}

#[test]
fn terse_fixture_rendering() {
    let text = render_target("main", &RenderOptions::terse());
    assert_eq!(text, "int main();\n// ---- end of symbol main ----\n\n");
}

#[test]
fn full_main_body_is_reflowed() {
    let text = render_target("main", &RenderOptions::default().with_indent(2));
    assert_eq!(
        text,
        "\
int main() {
  Point p{1, 2};
  if (p.x > 0) {
    counter++;
  } else {
    counter--;
  }
  return 0;
}
// ---- end of symbol main ----

"
    );
}

#[test]
fn json_envelope_lists_blocks() {
    let tree = fixture();
    let target = Target::new("Meters").expect("target");
    let out = render(&tree, &collect(&tree, &target), &RenderOptions::default());
    let json = serde_json::to_value(&out).expect("serialize");
    assert_eq!(json["target"], "Meters");
    assert_eq!(json["source"], "shapes.cpp");
    assert_eq!(json["blocks"][0]["text"], "using Meters = double;");
    assert_eq!(json["blocks"][0]["kind"], "type_alias");
    assert!(matches!(out.blocks()[1], Block::ClosingMarker { .. }));
}
