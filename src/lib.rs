//! Responsive tooltip for Leptos.
//!
//! Shows a hover tooltip on wide viewports and a tap tooltip on narrow ones,
//! switching at a 900px breakpoint. On narrow viewports at most one tooltip
//! is open at a time and tapping outside dismisses the open one.

pub mod coordination;
#[cfg(feature = "demo")]
pub mod demo;
mod identity;
pub mod overlay;
pub mod tooltip;
pub mod trigger;
pub mod viewport;

pub use coordination::ClickCoordinator;
pub use overlay::Placement;
pub use tooltip::Responsitip;
pub use trigger::{resolve_mode, EffectiveMode, TriggerPreference, TriggerSetting};
pub use viewport::{use_wide_layout, use_wide_layout_with_breakpoint, WIDE_LAYOUT_BREAKPOINT_PX};
