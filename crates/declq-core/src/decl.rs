//! Declaration nodes of the syntax tree.

use serde::{Deserialize, Serialize};

use crate::enums::{Access, RecordTag};
use crate::ids::DeclId;

/// 1-based inclusive line range of a declaration in its source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpan {
    pub start: u32,
    pub end: u32,
}

/// Any named entity in the tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Declaration {
    pub id: DeclId,
    /// Unqualified name; empty for anonymous namespaces and records.
    pub name: String,
    pub kind: DeclKind,
    /// Lexical parent. `None` for direct children of the translation unit.
    pub scope: Option<DeclId>,
    /// Nested declarations in source order.
    pub children: Vec<DeclId>,
    /// Access level when the declaration sits inside a record body.
    pub access: Option<Access>,
    /// Normalized `template <...>` prefix, if the declaration is templated.
    pub template_params: Option<String>,
    pub lines: LineSpan,
}

impl Declaration {
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self.kind, DeclKind::Record(_))
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&RecordDecl> {
        match &self.kind {
            DeclKind::Record(record) => Some(record),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_method(&self) -> Option<&MethodDecl> {
        match &self.kind {
            DeclKind::Method(method) => Some(method),
            _ => None,
        }
    }

    /// Whether this declaration is the defining one for its entity.
    #[must_use]
    pub const fn is_definition(&self) -> bool {
        match &self.kind {
            DeclKind::Record(record) => record.has_body,
            DeclKind::Method(method) => method.callable.is_definition,
            DeclKind::Function(function) => function.callable.is_definition,
            DeclKind::Variable(var) | DeclKind::Field(var) => !var.is_extern,
            DeclKind::Enum(decl) => decl.has_body,
            DeclKind::Namespace { .. }
            | DeclKind::Enumerator { .. }
            | DeclKind::TypeAlias { .. }
            | DeclKind::Verbatim { .. } => true,
        }
    }

    /// A method whose textual definition site is not its owning record's body.
    ///
    /// Always `false` for non-methods.
    #[must_use]
    pub fn is_out_of_line(&self) -> bool {
        self.as_method()
            .is_some_and(|method| self.scope != Some(method.parent_record))
    }

    /// Short human-readable kind label, used in logs and JSON output.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match &self.kind {
            DeclKind::Namespace { .. } => "namespace",
            DeclKind::Record(record) => record.tag.as_str(),
            DeclKind::Method(_) => "method",
            DeclKind::Function(_) => "function",
            DeclKind::Field(_) => "field",
            DeclKind::Variable(_) => "variable",
            DeclKind::Enum(_) => "enum",
            DeclKind::Enumerator { .. } => "enumerator",
            DeclKind::TypeAlias { .. } => "type_alias",
            DeclKind::Verbatim { .. } => "verbatim",
        }
    }
}

/// Kind-specific payload of a declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeclKind {
    Namespace {
        is_inline: bool,
    },
    Record(RecordDecl),
    Method(MethodDecl),
    Function(FunctionDecl),
    Field(VarDecl),
    Variable(VarDecl),
    Enum(EnumDecl),
    Enumerator {
        value: Option<String>,
    },
    /// `using X = ...;` or `typedef ... X;`, kept as normalized text.
    TypeAlias {
        text: String,
    },
    /// Unnamed record member printed as written: friend declarations,
    /// using-declarations, `static_assert`.
    Verbatim {
        text: String,
    },
}

/// Class, struct, or union.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDecl {
    pub tag: RecordTag,
    /// Base clause without the leading colon, e.g. `public Base, private Mixin`.
    pub bases: Option<String>,
    /// `false` for forward declarations.
    pub has_body: bool,
}

/// Header and optional body shared by functions and methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Callable {
    /// Whitespace-normalized header, e.g. `int Foo::get(int x) const`.
    pub signature: String,
    /// Raw body text including the outer braces.
    pub body: Option<String>,
    /// Trailing clause for bodiless definitions: `= default`, `= delete`, `= 0`.
    pub trailer: Option<String>,
    pub is_definition: bool,
}

/// Member function, declared or defined inside a record body or out of line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDecl {
    pub parent_record: DeclId,
    pub callable: Callable,
    /// The in-body declaration an out-of-line definition redeclares.
    pub redeclares: Option<DeclId>,
}

/// Free function, or a qualified definition that could not be tied to a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub callable: Callable,
    /// Scope written before the name (`ns::Missing` in `void ns::Missing::f()`).
    pub qualifier: Option<String>,
}

/// Field or variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarDecl {
    /// Normalized text without the trailing `;`, e.g. `static const int max = 4`.
    pub text: String,
    pub is_extern: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDecl {
    pub is_scoped: bool,
    /// Underlying type, e.g. `uint8_t`.
    pub base: Option<String>,
    pub has_body: bool,
}
