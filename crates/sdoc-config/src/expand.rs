//! `${VAR}` substitution in `sdoc.toml` string values.
//!
//! Only the braced forms are recognised:
//! - `${VAR}`: value of `VAR`, error if unset
//! - `${VAR:-fallback}`: value of `VAR`, or `fallback` if unset
//!
//! Any other `$` is rejected so that a value never expands differently from
//! what its author could see in the file.

use crate::ConfigError;

/// Substitute environment references in one config value.
///
/// `field` names the value in error messages (e.g. `docs.source_dir`).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains('$') {
        return Ok(value.to_owned());
    }
    check_references(value, field)?;

    shellexpand::env_with_context(value, |name| match std::env::var(name) {
        Ok(val) => Ok(Some(val)),
        Err(_) => Err(name.to_owned()),
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause),
    })
}

/// Reject `$` that does not start a well-formed `${...}` reference.
fn check_references(value: &str, field: &str) -> Result<(), ConfigError> {
    let error = |message: String| ConfigError::EnvVar {
        field: field.to_owned(),
        message,
    };

    let mut rest = value;
    while let Some(pos) = rest.find('$') {
        let after = &rest[pos + 1..];
        let Some(body) = after.strip_prefix('{') else {
            return Err(error(format!(
                "bare '$' at \"{}\"; use ${{NAME}}",
                &rest[pos..]
            )));
        };
        let Some(end) = body.find('}') else {
            return Err(error("unterminated '${' reference".to_owned()));
        };
        let name = body[..end].split(":-").next().unwrap_or_default();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(error(format!("invalid variable name '{name}'")));
        }
        rest = &body[end + 1..];
    }
    Ok(())
}
