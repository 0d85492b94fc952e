use leptos::prelude::*;

/// Side of the trigger the overlay is pinned to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
}

impl Placement {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "top" => Some(Self::Top),
            "right" => Some(Self::Right),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    fn bubble_class(self) -> &'static str {
        match self {
            Self::Top => "bottom-full left-1/2 -translate-x-1/2 mb-2",
            Self::Right => "left-full top-1/2 -translate-y-1/2 ml-2",
            Self::Bottom => "top-full left-1/2 -translate-x-1/2 mt-2",
            Self::Left => "right-full top-1/2 -translate-y-1/2 mr-2",
        }
    }

    fn arrow_class(self) -> &'static str {
        match self {
            Self::Top => "top-full left-1/2 -translate-x-1/2 border-t-neutral-800",
            Self::Right => "right-full top-1/2 -translate-y-1/2 border-r-neutral-800",
            Self::Bottom => "bottom-full left-1/2 -translate-x-1/2 border-b-neutral-800",
            Self::Left => "left-full top-1/2 -translate-y-1/2 border-l-neutral-800",
        }
    }
}

impl From<&str> for Placement {
    fn from(token: &str) -> Self {
        Self::from_token(token).unwrap_or_else(|| {
            log::warn!("unrecognized placement {token:?}, falling back to top");
            Self::Top
        })
    }
}

/// Presentation end of the tooltip: fully controlled, renders nothing while
/// `visible` is false and never toggles visibility on its own.
#[component]
pub fn TooltipOverlay(
    #[prop(into)] id: String,
    #[prop(optional)] placement: Placement,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] content: ViewFn,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div
                id=id.clone()
                role="tooltip"
                data-placement=placement.as_str()
                class=format!(
                    "absolute z-[9020] w-max max-w-[65vw] rounded-md bg-neutral-800 px-3 py-1.5 text-sm text-white pointer-events-none md:max-w-[400px] {}",
                    placement.bubble_class(),
                )
            >
                <div class=format!(
                    "absolute w-0 h-0 border-4 border-transparent {}",
                    placement.arrow_class(),
                )></div>
                {content.run()}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_tokens_are_verbatim() {
        assert_eq!(Placement::Top.as_str(), "top");
        assert_eq!(Placement::Right.as_str(), "right");
        assert_eq!(Placement::Bottom.as_str(), "bottom");
        assert_eq!(Placement::Left.as_str(), "left");
    }

    #[test]
    fn tokens_parse_back() {
        for placement in [
            Placement::Top,
            Placement::Right,
            Placement::Bottom,
            Placement::Left,
        ] {
            assert_eq!(Placement::from_token(placement.as_str()), Some(placement));
        }
    }

    #[test]
    fn junk_token_defaults_to_top() {
        assert_eq!(Placement::from("diagonal"), Placement::Top);
        assert_eq!(Placement::from_token("diagonal"), None);
    }
}
