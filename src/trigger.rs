/// How the caller wants the tooltip triggered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerPreference {
    /// Hover on wide layouts, nothing on narrow ones.
    #[default]
    Hover,
    /// Tap on narrow layouts, nothing on wide ones.
    Click,
    /// Hover on wide layouts, tap on narrow ones.
    Both,
}

impl TriggerPreference {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "hover" => Some(Self::Hover),
            "click" => Some(Self::Click),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Click => "click",
            Self::Both => "both",
        }
    }
}

/// The configured preference as given, keeping track of unrecognized input
/// so it can degrade to an inert tooltip instead of failing the render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerSetting(Option<TriggerPreference>);

impl TriggerSetting {
    pub fn preference(self) -> Option<TriggerPreference> {
        self.0
    }
}

impl Default for TriggerSetting {
    fn default() -> Self {
        Self(Some(TriggerPreference::Hover))
    }
}

impl From<TriggerPreference> for TriggerSetting {
    fn from(pref: TriggerPreference) -> Self {
        Self(Some(pref))
    }
}

impl From<&str> for TriggerSetting {
    fn from(token: &str) -> Self {
        let pref = TriggerPreference::from_token(token);
        if pref.is_none() {
            log::warn!("unrecognized trigger preference {token:?}, tooltip will stay inert");
        }
        Self(pref)
    }
}

/// Interaction mode a tooltip actually runs in, resolved from the configured
/// preference and the current layout classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectiveMode {
    Hover,
    Click,
    /// Render the trigger children only, with no overlay wiring at all.
    None,
}

/// Pure preference × layout mapping. Unrecognized preferences resolve to
/// [`EffectiveMode::None`] in both layouts.
pub fn resolve_mode(setting: TriggerSetting, is_wide: bool) -> EffectiveMode {
    use TriggerPreference::*;
    match (setting.preference(), is_wide) {
        (Some(Hover), true) => EffectiveMode::Hover,
        (Some(Hover), false) => EffectiveMode::None,
        (Some(Click), true) => EffectiveMode::None,
        (Some(Click), false) => EffectiveMode::Click,
        (Some(Both), true) => EffectiveMode::Hover,
        (Some(Both), false) => EffectiveMode::Click,
        (None, _) => EffectiveMode::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(pref: TriggerPreference, wide: bool) -> EffectiveMode {
        resolve_mode(pref.into(), wide)
    }

    #[test]
    fn resolution_table() {
        assert_eq!(resolve(TriggerPreference::Hover, true), EffectiveMode::Hover);
        assert_eq!(resolve(TriggerPreference::Hover, false), EffectiveMode::None);
        assert_eq!(resolve(TriggerPreference::Click, true), EffectiveMode::None);
        assert_eq!(resolve(TriggerPreference::Click, false), EffectiveMode::Click);
        assert_eq!(resolve(TriggerPreference::Both, true), EffectiveMode::Hover);
        assert_eq!(resolve(TriggerPreference::Both, false), EffectiveMode::Click);
    }

    #[test]
    fn unknown_preference_is_inert_in_both_layouts() {
        let setting = TriggerSetting::from("tap-and-hold");
        assert_eq!(setting.preference(), None);
        assert_eq!(resolve_mode(setting, true), EffectiveMode::None);
        assert_eq!(resolve_mode(setting, false), EffectiveMode::None);
    }

    #[test]
    fn preference_tokens_round_trip() {
        for pref in [
            TriggerPreference::Hover,
            TriggerPreference::Click,
            TriggerPreference::Both,
        ] {
            assert_eq!(TriggerPreference::from_token(pref.as_str()), Some(pref));
        }
    }

    #[test]
    fn default_setting_is_hover() {
        assert_eq!(
            TriggerSetting::default().preference(),
            Some(TriggerPreference::Hover)
        );
    }
}
