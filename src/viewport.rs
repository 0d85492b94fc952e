use leptos::prelude::*;
use leptos_use::use_media_query;

/// Width at which the layout flips from the narrow (tap) to the wide (hover)
/// interaction model.
pub const WIDE_LAYOUT_BREAKPOINT_PX: u32 = 900;

pub(crate) fn wide_layout_query(breakpoint_px: u32) -> String {
    format!("(min-width: {breakpoint_px}px)")
}

/// Reactive wide-layout classification at the default breakpoint.
pub fn use_wide_layout() -> Signal<bool> {
    use_wide_layout_with_breakpoint(WIDE_LAYOUT_BREAKPOINT_PX)
}

/// Reactive wide-layout classification at a custom breakpoint.
///
/// Backed by a media query listener, so updates arrive with the browser's
/// resize/orientation notification. Reads as `false` (narrow) when no window
/// is available, e.g. during server rendering.
pub fn use_wide_layout_with_breakpoint(breakpoint_px: u32) -> Signal<bool> {
    use_media_query(wide_layout_query(breakpoint_px))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_targets_breakpoint() {
        assert_eq!(wide_layout_query(900), "(min-width: 900px)");
        assert_eq!(wide_layout_query(768), "(min-width: 768px)");
    }
}
