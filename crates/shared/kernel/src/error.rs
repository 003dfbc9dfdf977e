//! Context plumbing shared by the workspace error enums.
//!
//! Every variant carries `context: Option<Cow<'static, str>>`, rendered after the
//! variant label as ` (context)`.

use std::borrow::Cow;

/// Optional human-readable context attached to an error variant.
pub type Context = Option<Cow<'static, str>>;

/// Renders a context for use inside `#[error(...)]` format strings.
#[must_use]
pub fn format_context(context: &Context) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
