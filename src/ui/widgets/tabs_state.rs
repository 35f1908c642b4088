//! String-keyed tab state with unmounted-content semantics.
//!
//! The active key is free-form: selecting a key nobody registered is
//! accepted and simply means no panel content exists, so the panel area
//! renders empty and the tab bar highlights nothing.

/// A registered tab: stable key plus the label shown in the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpec {
    pub key: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone)]
pub struct TabsState {
    tabs: Vec<TabSpec>,
    active: String,
}

impl TabsState {
    pub fn new(tabs: Vec<TabSpec>, default_key: &str) -> Self {
        Self {
            tabs,
            active: default_key.to_string(),
        }
    }

    pub fn tabs(&self) -> &[TabSpec] {
        &self.tabs
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Unconditional select. No validation against the registry.
    pub fn select(&mut self, key: &str) {
        self.active = key.to_string();
    }

    /// Position of the active key among registered tabs, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.key == self.active)
    }

    pub fn next(&mut self) {
        self.cycle(true);
    }

    pub fn prev(&mut self) {
        self.cycle(false);
    }

    fn cycle(&mut self, forward: bool) {
        if self.tabs.is_empty() {
            return;
        }
        let next = match self.selected_index() {
            Some(index) => {
                if forward {
                    (index + 1) % self.tabs.len()
                } else {
                    (index + self.tabs.len() - 1) % self.tabs.len()
                }
            }
            // From an unregistered key, cycling re-enters at the front.
            None => 0,
        };
        self.active = self.tabs[next].key.to_string();
    }

    pub fn select_index(&mut self, index: usize) {
        if let Some(tab) = self.tabs.get(index) {
            self.active = tab.key.to_string();
        }
    }

    /// Panel content for `key`: built and returned only when `key` is
    /// active. Inactive panels are never constructed, not merely
    /// hidden.
    pub fn content_with<T>(&self, key: &str, build: impl FnOnce() -> T) -> Option<T> {
        if self.active == key {
            Some(build())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric_tabs() -> TabsState {
        TabsState::new(
            vec![
                TabSpec {
                    key: "wealth-over-time",
                    title: "Wealth Over Time",
                },
                TabSpec {
                    key: "tax-rates",
                    title: "Tax Rates",
                },
                TabSpec {
                    key: "union-membership",
                    title: "Union Membership",
                },
            ],
            "wealth-over-time",
        )
    }

    #[test]
    fn test_default_key_is_active() {
        let tabs = metric_tabs();
        assert_eq!(tabs.active(), "wealth-over-time");
        assert_eq!(tabs.selected_index(), Some(0));
    }

    #[test]
    fn test_select_switches_active_panel() {
        let mut tabs = metric_tabs();
        tabs.select("tax-rates");
        assert_eq!(tabs.selected_index(), Some(1));
        tabs.select("union-membership");
        assert_eq!(tabs.selected_index(), Some(2));

        let mut built = Vec::new();
        let union = tabs.content_with("union-membership", || {
            built.push("union");
            "union panel"
        });
        let tax = tabs.content_with("tax-rates", || {
            built.push("tax");
            "tax panel"
        });
        assert_eq!(union, Some("union panel"));
        assert_eq!(tax, None);
        // Only the active panel was ever constructed.
        assert_eq!(built, vec!["union"]);
    }

    #[test]
    fn test_unregistered_key_is_accepted() {
        let mut tabs = metric_tabs();
        tabs.select("gdp-growth");
        assert_eq!(tabs.active(), "gdp-growth");
        assert_eq!(tabs.selected_index(), None);
        assert_eq!(tabs.content_with("wealth-over-time", || ()), None);
        assert_eq!(tabs.content_with("tax-rates", || ()), None);
        assert_eq!(tabs.content_with("union-membership", || ()), None);
    }

    #[test]
    fn test_cycling_wraps_and_recovers() {
        let mut tabs = metric_tabs();
        tabs.next();
        assert_eq!(tabs.active(), "tax-rates");
        tabs.next();
        tabs.next();
        assert_eq!(tabs.active(), "wealth-over-time");
        tabs.prev();
        assert_eq!(tabs.active(), "union-membership");

        tabs.select("nonsense");
        tabs.next();
        assert_eq!(tabs.active(), "wealth-over-time");
    }

    #[test]
    fn test_select_index() {
        let mut tabs = metric_tabs();
        tabs.select_index(2);
        assert_eq!(tabs.active(), "union-membership");
        tabs.select_index(9);
        assert_eq!(tabs.active(), "union-membership");
    }
}
