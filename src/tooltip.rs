use gloo::events::EventListener;
use leptos::either::EitherOf3;
use leptos::html::Span;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::coordination::use_click_coordinator;
use crate::identity::TooltipIdentity;
use crate::overlay::{Placement, TooltipOverlay};
use crate::trigger::{resolve_mode, EffectiveMode, TriggerSetting};
use crate::viewport::use_wide_layout;

fn wrapper_class(fill_container: bool, clickable: bool) -> &'static str {
    match (fill_container, clickable) {
        (false, false) => "responsitip relative inline-block",
        (false, true) => "responsitip relative inline-block cursor-pointer",
        (true, false) => {
            "responsitip relative flex justify-center items-center w-full h-full"
        }
        (true, true) => {
            "responsitip relative flex justify-center items-center w-full h-full cursor-pointer"
        }
    }
}

/// Responsive tooltip around a trigger element.
///
/// Resolves an effective mode from the trigger preference and the current
/// layout: hover tooltips on wide viewports, tap tooltips on narrow ones.
/// When the mode resolves to nothing (e.g. a hover tooltip on a phone) the
/// children render bare, with no overlay wiring at all.
///
/// Tap tooltips coordinate through [`crate::ClickCoordinator`]: opening one
/// closes any other open one, and tapping outside closes the open one.
#[component]
pub fn Responsitip(
    /// Overlay body, never inspected.
    #[prop(into)]
    title: ViewFn,
    /// `hover` shows on wide layouts only, `click` on narrow ones only,
    /// `both` covers each. Unrecognized tokens leave the tooltip inert.
    #[prop(optional, into)]
    trigger: TriggerSetting,
    /// Side of the trigger the overlay is pinned to.
    #[prop(optional)]
    placement: Placement,
    /// Stable id for the overlay node, generated when absent.
    #[prop(optional, into)]
    id: Option<String>,
    /// Stretch the wrapper to the parent box. Presentational only.
    #[prop(optional)]
    fill_container: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let identity = TooltipIdentity::new(id);
    let key = identity.key();
    let dom_id = identity.dom_id().to_owned();

    let is_wide = use_wide_layout();
    let mode = Memo::new(move |_| resolve_mode(trigger, is_wide.get()));
    let is_open = RwSignal::new(false);
    let coordinator = use_click_coordinator();
    let wrapper_ref = NodeRef::<Span>::new();
    let outside_click = StoredValue::new_local(None::<EventListener>);

    let close = move || {
        if is_open.get_untracked() {
            is_open.set(false);
            coordinator.notify_closed(key);
        }
    };

    // Crossing the breakpoint while open must not leave a dangling overlay
    // behind the new mode's semantics.
    Effect::new(move |prev: Option<EffectiveMode>| {
        let cur = mode.get();
        if prev.is_some_and(|p| p != cur) {
            close();
        }
        cur
    });

    // Mutual exclusion: while open in click mode, losing the coordinator
    // slot to another instance closes this one. Opening claims the slot
    // first, so an instance never closes itself.
    Effect::new(move |_| {
        if mode.get() == EffectiveMode::Click && is_open.get() && !coordinator.holds(key) {
            is_open.set(false);
        }
    });

    // Outside-dismiss listener, held only while open in click mode. The
    // RAII listener drops on close, mode change, and unmount alike.
    Effect::new(move |_| {
        if mode.get() != EffectiveMode::Click || !is_open.get() {
            outside_click.set_value(None);
            return;
        }
        let listener = EventListener::new(&document(), "click", move |ev| {
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = match (wrapper_ref.get_untracked(), target) {
                (Some(wrapper), Some(node)) => wrapper.contains(Some(&node)),
                _ => false,
            };
            if !inside {
                close();
            }
        });
        outside_click.set_value(Some(listener));
    });

    on_cleanup(move || {
        outside_click.set_value(None);
        coordinator.notify_closed(key);
    });

    let on_activate = move |_| {
        if is_open.get_untracked() {
            close();
        } else {
            // Claim the slot before flipping state so siblings observe the
            // takeover within the same turn.
            coordinator.notify_open(key);
            is_open.set(true);
        }
    };

    move || match mode.get() {
        EffectiveMode::None => EitherOf3::A(children()),
        EffectiveMode::Hover => EitherOf3::B(view! {
            <span
                class=wrapper_class(fill_container, false)
                on:mouseenter=move |_| is_open.set(true)
                on:mouseleave=move |_| is_open.set(false)
                on:focusin=move |_| is_open.set(true)
                on:focusout=move |_| is_open.set(false)
            >
                {children()}
                <TooltipOverlay
                    id=dom_id.clone()
                    placement
                    visible=is_open
                    content=title.clone()
                />
            </span>
        }),
        EffectiveMode::Click => EitherOf3::C(view! {
            <span
                node_ref=wrapper_ref
                class=wrapper_class(fill_container, true)
                on:click=on_activate
            >
                {children()}
                <TooltipOverlay
                    id=dom_id.clone()
                    placement
                    visible=is_open
                    content=title.clone()
                />
            </span>
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_container_only_changes_presentation() {
        for clickable in [false, true] {
            let inline = wrapper_class(false, clickable);
            let filled = wrapper_class(true, clickable);
            assert!(inline.contains("inline-block"));
            assert!(filled.contains("w-full h-full"));
            assert_eq!(inline.contains("cursor-pointer"), clickable);
            assert_eq!(filled.contains("cursor-pointer"), clickable);
        }
    }
}
