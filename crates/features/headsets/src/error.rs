use dfh_kernel::error::{Context, format_context};
use std::borrow::Cow;

/// Error types specific to the headset feature.
#[derive(Debug, thiserror::Error)]
pub enum HeadsetError {
    /// A config or catalog file could not be read or written.
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Context },

    /// A config or catalog file is not valid JSON for its type.
    #[error("JSON error{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Context },
}

pub trait HeadsetErrorExt<T> {
    /// Attaches context to the error.
    ///
    /// # Errors
    /// Returns the original error with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, HeadsetError>;
}

impl<T> HeadsetErrorExt<T> for Result<T, HeadsetError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                HeadsetError::Io { context: c, .. } | HeadsetError::Parse { context: c, .. } => {
                    *c = Some(context.into());
                },
            }
            e
        })
    }
}

impl<T> HeadsetErrorExt<T> for Result<T, std::io::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, HeadsetError> {
        self.map_err(|source| HeadsetError::Io { source, context: Some(context.into()) })
    }
}

impl<T> HeadsetErrorExt<T> for Result<T, serde_json::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, HeadsetError> {
        self.map_err(|source| HeadsetError::Parse { source, context: Some(context.into()) })
    }
}
