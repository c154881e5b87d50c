//! Caption lines for the on-image overlay.
//!
//! The browser UI burns a small caption block into the lower-right corner
//! of each image before it goes into the document. The compositing itself
//! happens outside this crate; here we only decide what the caption says.

use super::types::ExifMetadata;

/// Format a metadata record into overlay caption lines.
///
/// Line order is fixed: GPS position first (six decimal places per axis),
/// then the capture date string verbatim. Fields that were not extracted
/// produce no line, and an empty record produces no caption at all.
pub fn overlay_lines(meta: &ExifMetadata) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(gps) = &meta.gps {
        lines.push(format!("{:.6}°, {:.6}°", gps.latitude, gps.longitude));
    }
    if let Some(date) = &meta.date_time {
        lines.push(date.clone());
    }
    lines
}
