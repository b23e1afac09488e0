use std::collections::HashSet;

use super::prelude::*;

/// Resolves a raw thread reference like `project/a-project`.
///
/// Only slugs that are explicitly known are accepted.
pub fn resolve_slug_path(raw: &str, known_slugs: &HashSet<String>) -> Result<SlugPath> {
    let path: SlugPath = raw.parse().map_err(|err| {
        log::warn!("Invalid slug path {raw:?}: {err}");
        err
    })?;
    if !known_slugs.contains(path.slug()) {
        log::warn!("Unknown slug {:?} requested", path.slug());
        return Err(Error::UnknownSlug(path.slug().to_owned()));
    }
    Ok(path)
}
