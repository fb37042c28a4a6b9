//! The mangler itself: signatures in, decorated names out.

use serde::Serialize;
use target_lexicon::{Architecture, Triple};

use crate::ctype::{CType, Charset};
use crate::errors::{MangleError, MangleResult};
use crate::name::ScopedName;

/// What kind of declaration a signature belongs to.
///
/// The kind picks the access code: `Y` (free), `S` (static member),
/// `QE` + `A`/`B` (non-const/const instance method).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FuncKind {
    Free,
    Static,
    Instance { is_const: bool },
}

/// An exported function signature, as seen from the loader's side.
///
/// For member functions (`Static` and `Instance`), the scope of `name`
/// must include the class name as its innermost segment; the implicit
/// `this` parameter is not listed in `params`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FuncSig {
    pub name: ScopedName,
    pub kind: FuncKind,
    pub params: Vec<CType>,
    pub ret: CType,
    pub charset: Charset,
}

impl FuncSig {
    /// A free function.
    pub fn free(name: ScopedName, params: Vec<CType>, ret: CType) -> Self {
        Self {
            name,
            kind: FuncKind::Free,
            params,
            ret,
            charset: Charset::default(),
        }
    }

    /// A static member function.
    pub fn static_method(name: ScopedName, params: Vec<CType>, ret: CType) -> Self {
        Self {
            name,
            kind: FuncKind::Static,
            params,
            ret,
            charset: Charset::default(),
        }
    }

    /// An instance method, const-qualified or not.
    pub fn method(name: ScopedName, params: Vec<CType>, ret: CType, is_const: bool) -> Self {
        Self {
            name,
            kind: FuncKind::Instance { is_const },
            params,
            ret,
            charset: Charset::default(),
        }
    }

    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }
}

/// Builds VC x64 decorated names.
///
/// The x64 scheme is the only one implemented: pointer codes carry the
/// `E` (`__ptr64`) qualifier and instance methods the `QE` access prefix.
/// [`MsvcMangler::for_triple`] rejects targets the scheme does not cover.
#[derive(Clone, Copy, Debug, Default)]
pub struct MsvcMangler {
    _scheme: (),
}

impl MsvcMangler {
    /// The x64 mangler.
    pub fn x64() -> Self {
        Self { _scheme: () }
    }

    /// Mangler for a target triple; anything but x86-64 is unsupported.
    pub fn for_triple(triple: &Triple) -> MangleResult<Self> {
        match triple.architecture {
            Architecture::X86_64 => Ok(Self::x64()),
            ref other => Err(MangleError::UnsupportedTarget(other.to_string())),
        }
    }

    /// Build the decorated name for a signature.
    ///
    /// Grammar: `?` + name fragment + `@@` + access + `A` + return code
    /// + parameter codes + `@` (or a bare `X` for an empty list) + `Z`.
    pub fn mangle(&self, sig: &FuncSig) -> MangleResult<String> {
        let access = match sig.kind {
            FuncKind::Free => "Y".to_owned(),
            FuncKind::Static => "S".to_owned(),
            FuncKind::Instance { is_const } => {
                format!("QE{}", if is_const { "B" } else { "A" })
            }
        };

        let ret = format!("A{}", sig.ret.code(sig.charset)?);

        let params = if sig.params.is_empty() {
            "X".to_owned()
        } else {
            let mut out = String::new();
            for param in &sig.params {
                if !param.valid_parameter() {
                    return Err(MangleError::UnrepresentableType(format!(
                        "{param:?} as a parameter"
                    )));
                }
                out.push_str(&param.code(sig.charset)?);
            }
            out.push('@');
            out
        };

        Ok(format!(
            "?{}@@{access}{ret}{params}Z",
            sig.name.decorated_fragment()
        ))
    }
}
