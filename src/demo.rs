use leptos::prelude::*;

use crate::coordination::ClickCoordinator;
use crate::overlay::Placement;
use crate::tooltip::Responsitip;
use crate::trigger::TriggerPreference;
use crate::viewport::{use_wide_layout, WIDE_LAYOUT_BREAKPOINT_PX};

#[component]
fn DemoButton(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <button class="py-2 px-4 text-white rounded-md bg-primary-600 hover:bg-primary-700">
            {label}
        </button>
    }
}

/// Exercises every trigger preference, all four placements, rich overlay
/// content, and the one-open-at-a-time behavior between adjacent tooltips.
#[component]
pub fn DemoPage() -> impl IntoView {
    provide_context(ClickCoordinator::new());

    let is_wide = use_wide_layout();

    view! {
        <div class="flex flex-col gap-8 p-8 mx-auto max-w-3xl text-white bg-neutral-900">
            <h1 class="text-2xl font-bold">"Responsitip demo"</h1>
            <div class="p-4 rounded-md bg-neutral-800">
                <p>
                    "Layout: "
                    {move || if is_wide.get() { "wide (hover)" } else { "narrow (tap)" }}
                </p>
                <p class="text-sm text-neutral-400">
                    {format!("Resize across {WIDE_LAYOUT_BREAKPOINT_PX}px to switch modes")}
                </p>
            </div>

            <section class="flex flex-col gap-2">
                <h2 class="font-bold">"Trigger preferences"</h2>
                <div class="flex flex-wrap gap-4">
                    <Responsitip title=|| "Hover tooltip" trigger=TriggerPreference::Hover>
                        <DemoButton label="hover (wide only)" />
                    </Responsitip>
                    <Responsitip title=|| "Tap tooltip" trigger=TriggerPreference::Click>
                        <DemoButton label="click (narrow only)" />
                    </Responsitip>
                    <Responsitip title=|| "Works everywhere" trigger=TriggerPreference::Both>
                        <DemoButton label="both" />
                    </Responsitip>
                </div>
            </section>

            <section class="flex flex-col gap-2">
                <h2 class="font-bold">"Placements"</h2>
                <div class="flex flex-wrap gap-4">
                    <Responsitip
                        title=|| "Top tooltip"
                        trigger=TriggerPreference::Both
                        placement=Placement::Top
                    >
                        <DemoButton label="top" />
                    </Responsitip>
                    <Responsitip
                        title=|| "Right tooltip"
                        trigger=TriggerPreference::Both
                        placement=Placement::Right
                    >
                        <DemoButton label="right" />
                    </Responsitip>
                    <Responsitip
                        title=|| "Bottom tooltip"
                        trigger=TriggerPreference::Both
                        placement=Placement::Bottom
                    >
                        <DemoButton label="bottom" />
                    </Responsitip>
                    <Responsitip
                        title=|| "Left tooltip"
                        trigger=TriggerPreference::Both
                        placement=Placement::Left
                    >
                        <DemoButton label="left" />
                    </Responsitip>
                </div>
            </section>

            <section class="flex flex-col gap-2">
                <h2 class="font-bold">"Rich content"</h2>
                <Responsitip
                    title=|| view! {
                        <div>
                            <strong>"Rich content"</strong>
                            <p class="text-xs">"Any view works as the overlay body"</p>
                        </div>
                    }
                    trigger=TriggerPreference::Both
                >
                    <DemoButton label="rich overlay" />
                </Responsitip>
            </section>

            <section class="flex flex-col gap-2">
                <h2 class="font-bold">"One open at a time"</h2>
                <p class="text-sm text-neutral-400">
                    "On a narrow layout, opening one closes the others; tapping elsewhere closes all"
                </p>
                <div class="flex flex-wrap gap-4">
                    <Responsitip title=|| "First" trigger=TriggerPreference::Both>
                        <DemoButton label="first" />
                    </Responsitip>
                    <Responsitip title=|| "Second" trigger=TriggerPreference::Both>
                        <DemoButton label="second" />
                    </Responsitip>
                    <Responsitip title=|| "Third" trigger=TriggerPreference::Both>
                        <DemoButton label="third" />
                    </Responsitip>
                </div>
            </section>

            <section class="flex flex-col gap-2">
                <h2 class="font-bold">"Fill container"</h2>
                <div class="h-24 rounded-md border border-neutral-700">
                    <Responsitip
                        title=|| "Stretched wrapper"
                        trigger=TriggerPreference::Both
                        fill_container=true
                    >
                        <DemoButton label="fills the box" />
                    </Responsitip>
                </div>
            </section>
        </div>
    }
}
