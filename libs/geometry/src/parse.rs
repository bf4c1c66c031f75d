//! Reader for the bracketed component list produced by `Display`.

use crate::error::{GeometryError, GeometryResult};

/// Reads `"[a, b, ...]"` into its components.
///
/// Whitespace around the brackets and each component is ignored. `"[]"`
/// yields an empty list; callers check the component count.
pub(crate) fn parse_components(input: &str) -> GeometryResult<Vec<f64>> {
    let inner = input
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| GeometryError::parse(input, "expected '[' ... ']'"))?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|_| GeometryError::parse(input, format!("invalid number '{part}'")))
        })
        .collect()
}
