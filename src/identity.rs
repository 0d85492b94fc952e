use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

/// Identity of one mounted tooltip. The key is process-unique and drives
/// open-coordination; the DOM id names the overlay node and may be supplied
/// by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TooltipIdentity {
    key: u64,
    dom_id: String,
}

impl TooltipIdentity {
    pub(crate) fn new(dom_id: Option<String>) -> Self {
        let key = NEXT_KEY.fetch_add(1, Ordering::Relaxed);
        let dom_id = dom_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("responsitip-{key}"));
        Self { key, dom_id }
    }

    pub(crate) fn key(&self) -> u64 {
        self.key
    }

    pub(crate) fn dom_id(&self) -> &str {
        &self.dom_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let a = TooltipIdentity::new(None);
        let b = TooltipIdentity::new(None);
        assert_ne!(a.key(), b.key());
        assert_ne!(a.dom_id(), b.dom_id());
    }

    #[test]
    fn generated_ids_carry_prefix() {
        let id = TooltipIdentity::new(None);
        assert!(id.dom_id().starts_with("responsitip-"));
    }

    #[test]
    fn supplied_id_wins() {
        let id = TooltipIdentity::new(Some("save-hint".into()));
        assert_eq!(id.dom_id(), "save-hint");
    }

    #[test]
    fn empty_id_falls_back_to_generator() {
        let id = TooltipIdentity::new(Some(String::new()));
        assert!(id.dom_id().starts_with("responsitip-"));
    }
}
