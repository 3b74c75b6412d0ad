//! Free-text to variant conversion.

use thiserror::Error;
use uascope_protocol::{TypeTag, Variant};

/// Failed conversion of operator text to a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
	/// Text is not a number of the target family, or does not fit the
	/// target width.
	#[error("\"{text}\" is not a valid {tag}")]
	InvalidNumber { tag: TypeTag, text: String },
}

/// Convert operator-typed text into a value of the declared type.
///
/// Integer and float families parse as base-10 and fail on malformed or
/// out-of-range text. The boolean conversion never fails: `1`, `true`,
/// `t`, `yes`, and `y` in any casing are true, everything else is false.
/// Tags outside those families pass the text through as a string.
///
/// Deterministic and side-effect free; write flows depend on
/// `convert(value.to_string(), tag)` reproducing `value`.
pub fn convert(text: &str, tag: TypeTag) -> Result<Variant, ConvertError> {
	let invalid = || ConvertError::InvalidNumber {
		tag,
		text: text.to_string(),
	};
	let value = match tag {
		TypeTag::Int16 => Variant::Int16(text.trim().parse().map_err(|_| invalid())?),
		TypeTag::Int32 => Variant::Int32(text.trim().parse().map_err(|_| invalid())?),
		TypeTag::Int64 => Variant::Int64(text.trim().parse().map_err(|_| invalid())?),
		TypeTag::UInt16 => Variant::UInt16(text.trim().parse().map_err(|_| invalid())?),
		TypeTag::UInt32 => Variant::UInt32(text.trim().parse().map_err(|_| invalid())?),
		TypeTag::UInt64 => Variant::UInt64(text.trim().parse().map_err(|_| invalid())?),
		TypeTag::Float => Variant::Float(text.trim().parse().map_err(|_| invalid())?),
		TypeTag::Double => Variant::Double(text.trim().parse().map_err(|_| invalid())?),
		TypeTag::Boolean => {
			let lowered = text.to_lowercase();
			Variant::Boolean(matches!(
				lowered.as_str(),
				"1" | "true" | "t" | "yes" | "y"
			))
		}
		TypeTag::String | TypeTag::DateTime | TypeTag::ByteString => {
			Variant::String(text.to_string())
		}
	};
	Ok(value)
}
