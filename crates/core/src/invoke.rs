//! Procedure invocation from operator-typed argument text.

use thiserror::Error;
use uascope_protocol::{ArgumentDescriptor, Variant};
use uascope_runtime::{RemoteSession, SessionError};

use crate::convert::{ConvertError, convert};
use crate::entry::Entry;

/// Why an invocation never reached, or was rejected by, the server.
#[derive(Debug, Error)]
pub enum InvokeError {
	/// Procedures are invoked on their owning container; an entry
	/// without one cannot be called.
	#[error("procedure has no owning container")]
	MissingContainer,

	/// Supplied argument count disagrees with the declared descriptors.
	#[error("argument count mismatch: procedure declares {expected}, got {supplied}")]
	ArgumentCountMismatch { expected: usize, supplied: usize },

	#[error(transparent)]
	Convert(#[from] ConvertError),

	#[error(transparent)]
	Session(#[from] SessionError),
}

/// Convert argument texts against their descriptors and invoke the
/// procedure on its owning container.
///
/// The count check runs first: a mismatch aborts before any conversion
/// and before any remote call is made.
pub async fn invoke_with_texts(
	session: &dyn RemoteSession,
	entry: &Entry,
	descriptors: &[ArgumentDescriptor],
	texts: &[String],
) -> Result<Variant, InvokeError> {
	let container = entry
		.owning_container
		.as_ref()
		.ok_or(InvokeError::MissingContainer)?;
	if descriptors.len() != texts.len() {
		return Err(InvokeError::ArgumentCountMismatch {
			expected: descriptors.len(),
			supplied: texts.len(),
		});
	}

	let mut args = Vec::with_capacity(descriptors.len());
	for (descriptor, text) in descriptors.iter().zip(texts) {
		args.push(convert(text, descriptor.type_tag)?);
	}

	Ok(session.invoke(container, &entry.handle, args).await?)
}
