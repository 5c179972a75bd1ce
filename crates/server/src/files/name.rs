use crate::core::error::{Error, Result};
use tracing::warn;

/// Accept `name` only if it is a single, plain path component.
///
/// Rejects empty names, `.` and `..`, and anything containing a path
/// separator (`/` or `\`) or a NUL byte.
pub fn validate_filename(name: &str) -> Result<&str> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);

    if bad {
        warn!("Rejected filename {:?}", name);
        return Err(Error::InvalidFilename(name.to_string()));
    }
    Ok(name)
}
