use serde::{Deserialize, Serialize};

/// How a value is packaged when it crosses the worker boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarshalCategory {
    /// Structured-clone copy.
    #[default]
    #[serde(rename = "val")]
    Value,
    /// Byte view whose underlying buffer is transferred.
    #[serde(rename = "binary")]
    Binary,
    /// Handle to an object that lives on the other side.
    #[serde(rename = "obj")]
    Object,
    /// Array of handles. Only produced for `T[]` where `T` is an object.
    #[serde(rename = "obj_array")]
    ObjectArray,
    /// Understood by the dispatch runtime; only reachable through config seeds.
    #[serde(rename = "transferable")]
    Transferable,
}

impl MarshalCategory {
    /// The literal tag the dispatch runtime expects.
    pub fn tag(self) -> &'static str {
        match self {
            MarshalCategory::Value        => "val",
            MarshalCategory::Binary       => "binary",
            MarshalCategory::Object       => "obj",
            MarshalCategory::ObjectArray  => "obj_array",
            MarshalCategory::Transferable => "transferable",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "val"          => Some(MarshalCategory::Value),
            "binary"       => Some(MarshalCategory::Binary),
            "obj"          => Some(MarshalCategory::Object),
            "obj_array"    => Some(MarshalCategory::ObjectArray),
            "transferable" => Some(MarshalCategory::Transferable),
            _              => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgDecl {
    pub name:     String,
    pub type_:    String,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionSignature {
    pub name:        String,
    pub args:        Vec<ArgDecl>,
    pub return_type: String,
    pub is_method:   bool,
    /// Leading whitespace of the source line, reused for the stub.
    pub indent:      String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeclarationKind {
    ClassHeader { name: String },
    Function(FunctionSignature),
    Method(FunctionSignature),
    /// `constructor();` is recognized but never turned into a stub.
    Constructor,
    Comment,
    Passthrough,
}

/// One input line together with what the grammar made of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    pub line:   usize,
    pub text:   String,
    pub kind:   DeclarationKind,
}

/// A return type after promise unwrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnClass {
    /// Always `Promise<T>`.
    pub declared: String,
    pub category: MarshalCategory,
}

/// The parallel lists a stub is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarshaledArgs {
    pub names:      Vec<String>,
    /// `name: type` (or `name?: type`) as it appears in the stub signature.
    pub declared:   Vec<String>,
    pub categories: Vec<MarshalCategory>,
    pub transfer:   Vec<String>,
}

/// Counts collected while emitting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub classes:      usize,
    pub functions:    usize,
    pub methods:      usize,
    pub skipped:      usize,
    pub constructors: usize,
    pub passthrough:  usize,
}
