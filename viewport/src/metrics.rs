use crate::Rect;
use crate::host::Measure;

/// Reads a surface's bounding box as a plain [`Rect`].
///
/// Only `left`/`top`/`width`/`height` are taken from the host; `right`/`bottom` are derived so the
/// result is always self-consistent.
pub fn read_rect(surface: &(impl Measure + ?Sized)) -> Rect {
    let b = surface.bounding_box();
    Rect::from_origin_size(b.left, b.top, b.width, b.height)
}

/// Normalizes a scroll offset against its maximum.
///
/// Returns `0` when there is nothing to scroll (`max_offset <= 0`, or NaN), otherwise
/// `offset / max_offset` clamped into `[0, 1]`. Overscroll (negative or past-the-end offsets)
/// is clamped; a NaN offset yields `0`.
pub fn ratio(offset: f64, max_offset: f64) -> f64 {
    if !(max_offset > 0.0) {
        return 0.0;
    }
    let r = offset / max_offset;
    if r.is_nan() { 0.0 } else { r.clamp(0.0, 1.0) }
}
