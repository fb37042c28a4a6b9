//! The C-level type vocabulary and its decorated-name codes.

use serde::Serialize;
use std::str::FromStr;

use crate::errors::MangleError;

/// Character set a declaration was compiled under.
///
/// Only affects [`CType::Str`]: under `Ansi` the string character type is
/// `char` (`D`), under `Unicode` it is `wchar_t` (`_W`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    Ansi,
    #[default]
    Unicode,
}

/// A C type as it appears in an exported signature.
///
/// `Str` is a convenience for "pointer to const string character": it
/// resolves to `const char*` or `const wchar_t*` depending on the
/// [`Charset`] of the signature being mangled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CType {
    Void,
    Char,
    SChar,
    UChar,
    Short,
    UShort,
    Int,
    UInt,
    Int64,
    UInt64,
    Float,
    Double,
    WChar,
    Str,
    Ptr { is_const: bool, pointee: Box<CType> },
    Ref { is_const: bool, referent: Box<CType> },
}

impl CType {
    /// Shorthand for `const T*`.
    pub fn const_ptr(pointee: CType) -> Self {
        CType::Ptr {
            is_const: true,
            pointee: Box::new(pointee),
        }
    }

    /// Shorthand for `T*`.
    pub fn mut_ptr(pointee: CType) -> Self {
        CType::Ptr {
            is_const: false,
            pointee: Box::new(pointee),
        }
    }

    /// Decorated-name code for this type.
    ///
    /// `D` / `_W` for the char types, `H` for int, and so on; pointers are
    /// `P` + `E` (the x64 `__ptr64` qualifier) + `B`/`A` (const / mutable
    /// pointee) + the pointee's code, references the same with `A` in
    /// place of `P`.
    pub fn code(&self, charset: Charset) -> Result<String, MangleError> {
        let code = match self {
            CType::Void => "X".to_owned(),
            CType::Char => "D".to_owned(),
            CType::SChar => "C".to_owned(),
            CType::UChar => "E".to_owned(),
            CType::Short => "F".to_owned(),
            CType::UShort => "G".to_owned(),
            CType::Int => "H".to_owned(),
            CType::UInt => "I".to_owned(),
            CType::Int64 => "_J".to_owned(),
            CType::UInt64 => "_K".to_owned(),
            CType::Float => "M".to_owned(),
            CType::Double => "N".to_owned(),
            CType::WChar => "_W".to_owned(),
            CType::Str => {
                let ch = match charset {
                    Charset::Ansi => "D",
                    Charset::Unicode => "_W",
                };
                format!("PEB{ch}")
            }
            CType::Ptr { is_const, pointee } => {
                let cv = if *is_const { "B" } else { "A" };
                format!("PE{cv}{}", pointee.code(charset)?)
            }
            CType::Ref { is_const, referent } => {
                let cv = if *is_const { "B" } else { "A" };
                format!("AE{cv}{}", referent.code(charset)?)
            }
        };
        Ok(code)
    }

    /// Whether this type may appear in a parameter list.
    ///
    /// `void` cannot: an empty parameter list is encoded as a bare `X`
    /// by the mangler itself, never as a parameter.
    pub fn valid_parameter(&self) -> bool {
        !matches!(self, CType::Void)
    }
}

impl FromStr for CType {
    type Err = MangleError;

    /// Parse the spellings accepted on the command line.
    ///
    /// Base types use C-ish names (`int`, `uint64`, `wchar`, ...);
    /// `cstr` / `wcstr` are `const char*` / `const wchar_t*`, and `str`
    /// is the charset-dependent string pointer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = match s {
            "void" => CType::Void,
            "char" => CType::Char,
            "schar" => CType::SChar,
            "uchar" => CType::UChar,
            "short" => CType::Short,
            "ushort" => CType::UShort,
            "int" => CType::Int,
            "uint" => CType::UInt,
            "int64" => CType::Int64,
            "uint64" => CType::UInt64,
            "float" => CType::Float,
            "double" => CType::Double,
            "wchar" => CType::WChar,
            "str" => CType::Str,
            "cstr" => CType::const_ptr(CType::Char),
            "wcstr" => CType::const_ptr(CType::WChar),
            other => return Err(MangleError::UnknownTypeName(other.to_owned())),
        };
        Ok(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_codes() {
        let cases = [
            (CType::Char, "D"),
            (CType::SChar, "C"),
            (CType::UChar, "E"),
            (CType::Short, "F"),
            (CType::UShort, "G"),
            (CType::Int, "H"),
            (CType::UInt, "I"),
            (CType::Int64, "_J"),
            (CType::UInt64, "_K"),
            (CType::Float, "M"),
            (CType::Double, "N"),
            (CType::WChar, "_W"),
            (CType::Void, "X"),
        ];
        for (ty, expected) in cases {
            assert_eq!(ty.code(Charset::Unicode).unwrap(), expected);
        }
    }

    #[test]
    fn pointer_codes() {
        assert_eq!(
            CType::const_ptr(CType::Char).code(Charset::Unicode).unwrap(),
            "PEBD"
        );
        assert_eq!(
            CType::const_ptr(CType::WChar)
                .code(Charset::Unicode)
                .unwrap(),
            "PEB_W"
        );
        assert_eq!(
            CType::mut_ptr(CType::Int).code(Charset::Unicode).unwrap(),
            "PEAH"
        );
        // Pointer-to-pointer nests the codes.
        assert_eq!(
            CType::mut_ptr(CType::const_ptr(CType::Char))
                .code(Charset::Unicode)
                .unwrap(),
            "PEAPEBD"
        );
    }

    #[test]
    fn reference_codes() {
        let int_ref = CType::Ref {
            is_const: false,
            referent: Box::new(CType::Int),
        };
        assert_eq!(int_ref.code(Charset::Unicode).unwrap(), "AEAH");
    }

    #[test]
    fn str_follows_charset() {
        assert_eq!(CType::Str.code(Charset::Unicode).unwrap(), "PEB_W");
        assert_eq!(CType::Str.code(Charset::Ansi).unwrap(), "PEBD");
    }

    #[test]
    fn parse_spellings() {
        assert_eq!("int".parse::<CType>().unwrap(), CType::Int);
        assert_eq!(
            "cstr".parse::<CType>().unwrap(),
            CType::const_ptr(CType::Char)
        );
        assert_eq!(
            "wcstr".parse::<CType>().unwrap(),
            CType::const_ptr(CType::WChar)
        );
        assert!("size_t".parse::<CType>().is_err());
    }

    #[test]
    fn void_is_not_a_parameter() {
        assert!(!CType::Void.valid_parameter());
        assert!(CType::Int.valid_parameter());
        assert!(CType::mut_ptr(CType::Void).valid_parameter());
    }
}
