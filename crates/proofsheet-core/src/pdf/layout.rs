//! Page geometry: US Letter pages, orientation per image, aspect-preserving
//! fit with symmetric margins.

/// US Letter width in PDF user-space points (1/72 inch).
pub const LETTER_WIDTH_PT: f64 = 612.0;
/// US Letter height in points.
pub const LETTER_HEIGHT_PT: f64 = 792.0;
/// 10 mm margin on every side, expressed in points.
pub const MARGIN_PT: f64 = 28.35;

/// Page box plus the placement transform for one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page_width: f64,
    pub page_height: f64,
    /// Horizontal scale of the image XObject (its rendered width in points).
    pub scale_x: f64,
    /// Vertical scale of the image XObject (its rendered height in points).
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

/// Compute the page box and placement for an image of the given pixel size.
///
/// Wide images (aspect ratio above 1) get a landscape page, everything else
/// portrait; the page box swaps width and height accordingly. The image is
/// scaled to fit inside the margins with its aspect ratio preserved, and
/// centered on both axes.
pub fn layout_for(width: u32, height: u32) -> PageLayout {
    let landscape = width > height;
    let (page_width, page_height) = if landscape {
        (LETTER_HEIGHT_PT, LETTER_WIDTH_PT)
    } else {
        (LETTER_WIDTH_PT, LETTER_HEIGHT_PT)
    };

    let available_width = page_width - 2.0 * MARGIN_PT;
    let available_height = page_height - 2.0 * MARGIN_PT;
    let w = f64::from(width.max(1));
    let h = f64::from(height.max(1));
    let scale = (available_width / w).min(available_height / h);

    let scale_x = w * scale;
    let scale_y = h * scale;
    PageLayout {
        page_width,
        page_height,
        scale_x,
        scale_y,
        translate_x: (page_width - scale_x) / 2.0,
        translate_y: (page_height - scale_y) / 2.0,
    }
}

/// The content-stream program for one page: scale and position the page's
/// single image XObject.
pub fn content_program(layout: &PageLayout, index: usize) -> String {
    format!(
        "q {:.2} 0 0 {:.2} {:.2} {:.2} cm /Im{} Do Q",
        layout.scale_x, layout.scale_y, layout.translate_x, layout.translate_y, index
    )
}
