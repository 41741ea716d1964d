/// The machine type a value occupies in a WASM local, parameter, or result
/// slot. Every `SourceType` maps to exactly one of these (§4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WasmType {
    I32,
    I64,
    F64,
    /// `Unit` has no WASM-level representation; functions returning it
    /// compile to a WASM function with no result.
    None,
}

/// A resolved variant of a tagged-union declaration: a tag value and the
/// ordered field types carried by that variant's payload.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Variant {
    pub name: String,
    pub tag: u32,
    pub fields: Vec<SourceType>,
}

/// The static signature of a function reference, used to lower
/// `call_indirect` through the WASM function table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FnSig {
    pub params: Vec<SourceType>,
    pub result: Box<SourceType>,
}

/// Every type the resolved IR can carry. The type checker (out of scope)
/// guarantees every expression the code generator sees already carries
/// one of these.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SourceType {
    Int64,
    Float64,
    Bool,
    Unit,
    Timestamp,
    String,
    Bytes,
    List(Box<SourceType>),
    Record(Vec<(String, SourceType)>),
    Union(Vec<Variant>),
    Option(Box<SourceType>),
    Result(Box<SourceType>, Box<SourceType>),
    Map(Box<SourceType>, Box<SourceType>),
    FuncRef(FnSig),
}

impl SourceType {
    /// The exactly-one WASM machine type this source type occupies in a
    /// value position (§4.1).
    pub fn to_wasm_type(&self) -> WasmType {
        match self {
            SourceType::Int64 | SourceType::Timestamp => WasmType::I64,
            SourceType::Float64 => WasmType::F64,
            SourceType::Bool => WasmType::I32,
            SourceType::Unit => WasmType::None,
            // Every pointer-shaped and handle-shaped type is a 32-bit value:
            // a heap offset, an opaque registry handle, or a function-table
            // index.
            SourceType::String
            | SourceType::Bytes
            | SourceType::List(_)
            | SourceType::Record(_)
            | SourceType::Union(_)
            | SourceType::Option(_)
            | SourceType::Result(_, _)
            | SourceType::Map(_, _)
            | SourceType::FuncRef(_) => WasmType::I32,
        }
    }

    /// Natural width in bytes of a value of this type when stored inline
    /// in a record field, list element, or union payload slot.
    pub fn natural_width(&self) -> u32 {
        match self.to_wasm_type() {
            WasmType::I64 | WasmType::F64 => 8,
            WasmType::I32 => 4,
            WasmType::None => 0,
        }
    }

    pub fn is_pointer_shaped(&self) -> bool {
        matches!(
            self,
            SourceType::String
                | SourceType::Bytes
                | SourceType::List(_)
                | SourceType::Record(_)
                | SourceType::Union(_)
                | SourceType::Option(_)
                | SourceType::Result(_, _)
        )
    }
}
