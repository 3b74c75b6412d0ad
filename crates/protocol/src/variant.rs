//! Tagged, typed values exchanged with the remote server.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared data type of a data point or procedure argument.
///
/// Only the integer, float, and boolean families convert from operator
/// text; every other tag takes the string fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    Boolean,
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Double,
    String,
    /// Carried as text through this client.
    DateTime,
    /// Carried as text through this client.
    ByteString,
}

impl TypeTag {
    /// True for the base-10 integer family (signed and unsigned).
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            TypeTag::Int16
                | TypeTag::Int32
                | TypeTag::Int64
                | TypeTag::UInt16
                | TypeTag::UInt32
                | TypeTag::UInt64
        )
    }

    /// True for the base-10 real-number family.
    pub fn is_float(self) -> bool {
        matches!(self, TypeTag::Float | TypeTag::Double)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::Boolean => "Boolean",
            TypeTag::Int16 => "Int16",
            TypeTag::Int32 => "Int32",
            TypeTag::Int64 => "Int64",
            TypeTag::UInt16 => "UInt16",
            TypeTag::UInt32 => "UInt32",
            TypeTag::UInt64 => "UInt64",
            TypeTag::Float => "Float",
            TypeTag::Double => "Double",
            TypeTag::String => "String",
            TypeTag::DateTime => "DateTime",
            TypeTag::ByteString => "ByteString",
        };
        f.pad(name)
    }
}

/// A typed value as read from or written to the server.
///
/// Tags without a dedicated payload ([`TypeTag::DateTime`],
/// [`TypeTag::ByteString`]) travel as [`Variant::String`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Variant {
    Boolean(bool),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float(f32),
    Double(f64),
    String(String),
}

impl Variant {
    /// The type tag this value carries on the wire.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Variant::Boolean(_) => TypeTag::Boolean,
            Variant::Int16(_) => TypeTag::Int16,
            Variant::Int32(_) => TypeTag::Int32,
            Variant::Int64(_) => TypeTag::Int64,
            Variant::UInt16(_) => TypeTag::UInt16,
            Variant::UInt32(_) => TypeTag::UInt32,
            Variant::UInt64(_) => TypeTag::UInt64,
            Variant::Float(_) => TypeTag::Float,
            Variant::Double(_) => TypeTag::Double,
            Variant::String(_) => TypeTag::String,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Boolean(v) => write!(f, "{v}"),
            Variant::Int16(v) => write!(f, "{v}"),
            Variant::Int32(v) => write!(f, "{v}"),
            Variant::Int64(v) => write!(f, "{v}"),
            Variant::UInt16(v) => write!(f, "{v}"),
            Variant::UInt32(v) => write!(f, "{v}"),
            Variant::UInt64(v) => write!(f, "{v}"),
            Variant::Float(v) => write!(f, "{v}"),
            Variant::Double(v) => write!(f, "{v}"),
            Variant::String(v) => f.write_str(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_partition_the_convertible_tags() {
        for tag in [
            TypeTag::Int16,
            TypeTag::Int32,
            TypeTag::Int64,
            TypeTag::UInt16,
            TypeTag::UInt32,
            TypeTag::UInt64,
        ] {
            assert!(tag.is_integer());
            assert!(!tag.is_float());
        }
        assert!(TypeTag::Float.is_float());
        assert!(TypeTag::Double.is_float());
        assert!(!TypeTag::Boolean.is_integer());
        assert!(!TypeTag::String.is_float());
    }

    #[test]
    fn display_renders_payloads_plainly() {
        assert_eq!(Variant::Double(42.5).to_string(), "42.5");
        assert_eq!(Variant::Boolean(true).to_string(), "true");
        assert_eq!(Variant::String("hello".into()).to_string(), "hello");
    }

    #[test]
    fn variant_reports_its_tag() {
        assert_eq!(Variant::Int64(7).type_tag(), TypeTag::Int64);
        assert_eq!(Variant::String(String::new()).type_tag(), TypeTag::String);
    }
}
