//! Page snapping for flip-views and panoramas.
//!
//! Page `i` rests at offset `-i * page_extent`, so paging forward moves the
//! content towards negative offsets just like a drag to the left.

use metro_physics::InertiaSpec;

/// Chooses the page to settle on after a paging gesture.
///
/// The release `offset` is projected forward by the distance a fling with
/// `velocity` would coast, then rounded to the nearest page. The result is
/// at most one page away from `start_page`, the page shown when the gesture
/// began, and always a valid index below `page_count`.
///
/// A non-positive or non-finite `page_extent` keeps `start_page`. With no
/// pages at all the result is 0.
pub fn snap_page(
    start_page: usize,
    offset: f32,
    velocity: f32,
    page_extent: f32,
    page_count: usize,
    inertia: &InertiaSpec,
) -> usize {
    let Some(last) = page_count.checked_sub(1) else {
        return 0;
    };
    let start = start_page.min(last);
    if !page_extent.is_finite() || page_extent <= 0.0 {
        return start;
    }

    let projected = offset + inertia.predict_distance(velocity);
    let nearest = (-projected / page_extent).round() as i64;
    let start_i = start as i64;
    let page = nearest.clamp(start_i - 1, start_i + 1).clamp(0, last as i64) as usize;

    if page != start {
        log::debug!(
            "snap from page {} to {} (projected {:.1})",
            start,
            page,
            projected
        );
    }
    page
}

/// The resting offset of `page`.
pub fn snap_offset(page: usize, page_extent: f32) -> f32 {
    -(page as f32) * page_extent
}
