//! Raw byte counts are unreadable in diagnostics output.

/// Renders a byte count as `B`, `KB`, `MB`, or `GB` with two decimals.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let value = bytes as f64;
    match bytes {
        0..1024 => format!("{bytes} B"),
        _ if bytes < 1024 * 1024 => format!("{:.2} KB", value / 1024.0),
        _ if bytes < 1024 * 1024 * 1024 => format!("{:.2} MB", value / (1024.0 * 1024.0)),
        _ => format!("{:.2} GB", value / (1024.0 * 1024.0 * 1024.0)),
    }
}
