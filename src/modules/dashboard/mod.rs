//! Dashboard module: owns the year selection and the metric tabs.
//!
//! All selection writes funnel through [`Dashboard::set_year`], which
//! clamps into the dataset span, pushes the value through the slider
//! and re-resolves the nearest record. Rendering only reads the
//! resolved snapshot.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use crate::core::{Action, Command, Module, NotifyLevel};
use crate::data::{Dataset, YearRecord};
use crate::ui::widgets::{Slider, TabSpec, TabsState};
use crate::view;

pub const TAB_WEALTH: &str = "wealth-over-time";
pub const TAB_TAX: &str = "tax-rates";
pub const TAB_UNION: &str = "union-membership";

/// Year shown before the user touches anything.
pub const DEFAULT_YEAR: i32 = 2020;

fn metric_tabs() -> Vec<TabSpec> {
    vec![
        TabSpec {
            key: TAB_WEALTH,
            title: "Wealth Distribution Over Time",
        },
        TabSpec {
            key: TAB_TAX,
            title: "Top Tax Rates",
        },
        TabSpec {
            key: TAB_UNION,
            title: "Union Membership",
        },
    ]
}

#[derive(Debug)]
pub struct Dashboard {
    dataset: Dataset,
    slider: Slider,
    tabs: TabsState,
    resolved: YearRecord,
}

impl Dashboard {
    pub fn new(dataset: Dataset, initial_year: Option<i32>) -> Self {
        let year = dataset.clamp_year(initial_year.unwrap_or(DEFAULT_YEAR));
        let resolved = *dataset.nearest(year);
        let slider = Slider::new(year, dataset.min_year(), dataset.max_year(), 1);
        Self {
            dataset,
            slider,
            tabs: TabsState::new(metric_tabs(), TAB_WEALTH),
            resolved,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    pub fn tabs(&self) -> &TabsState {
        &self.tabs
    }

    /// The slider holds the selected year; there is no second copy.
    pub fn selected_year(&self) -> i32 {
        self.slider.value()
    }

    /// The record the current selection resolves to.
    pub fn resolved(&self) -> &YearRecord {
        &self.resolved
    }

    /// Single write path for the year selection. Out-of-range input is
    /// clamped rather than rejected.
    pub fn set_year(&mut self, year: i32) {
        let clamped = self.dataset.clamp_year(year);
        let mut emitted = None;
        self.slider
            .set_value(clamped, |values| emitted = values.first().copied());
        if let Some(value) = emitted {
            self.apply_selection(value);
        }
    }

    pub fn step_year(&mut self, delta_steps: i32) {
        let mut emitted = None;
        self.slider
            .nudge(delta_steps, |values| emitted = values.first().copied());
        if let Some(value) = emitted {
            self.apply_selection(value);
        }
    }

    /// Mouse scrubbing: map a column on the slider track to a year.
    pub fn scrub_to_column(&mut self, track: Rect, column: u16) {
        let target = self.slider.value_at_column(track, column);
        self.set_year(target);
    }

    fn apply_selection(&mut self, year: i32) {
        self.resolved = *self.dataset.nearest(year);
    }

    pub fn select_tab(&mut self, key: &str) {
        self.tabs.select(key);
    }

    pub fn next_tab(&mut self) {
        self.tabs.next();
    }

    pub fn prev_tab(&mut self) {
        self.tabs.prev();
    }

    pub fn select_tab_index(&mut self, index: usize) {
        self.tabs.select_index(index);
    }

    /// Plain-text summary of the resolved record for clipboard copy.
    pub fn summary_text(&self) -> String {
        let record = &self.resolved;
        let (tax_status, _) = view::wealth_tax_status(record);
        let mut lines = vec![format!(
            "Year {} (record {})",
            self.selected_year(),
            record.year
        )];
        for slice in view::pie_slices(record) {
            lines.push(format!(
                "{}: {}",
                slice.name,
                view::format_percent(slice.value)
            ));
        }
        lines.push(format!(
            "Top marginal tax rate: {}",
            view::format_percent(record.top_tax_rate)
        ));
        lines.push(format!(
            "Union membership: {}",
            view::format_percent(record.union_rate)
        ));
        lines.push(tax_status.to_string());
        lines.join("\n")
    }

    /// Run a dashboard-scoped command.
    pub fn execute(&mut self, command: &Command) -> Action {
        match command {
            Command::Year(year) => {
                self.set_year(*year);
                Action::Notify(
                    format!("Year set to {}", self.selected_year()),
                    NotifyLevel::Info,
                )
            }
            Command::Tab(key) => {
                self.select_tab(key);
                if self.tabs.selected_index().is_some() {
                    Action::None
                } else {
                    Action::Notify(format!("Tab '{key}' has no panel"), NotifyLevel::Warn)
                }
            }
            Command::Copy => Action::Copy(self.summary_text()),
            Command::Quit => Action::Quit,
            Command::Unknown(input) => {
                Action::Notify(format!("Unknown command: {input}"), NotifyLevel::Warn)
            }
        }
    }
}

impl Module for Dashboard {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Left | KeyCode::Right, mods) if mods.contains(KeyModifiers::SHIFT) => {
                let delta = if key.code == KeyCode::Left { -10 } else { 10 };
                self.step_year(delta);
            }
            (KeyCode::Left | KeyCode::Char('h'), _) => self.step_year(-1),
            (KeyCode::Right | KeyCode::Char('l'), _) => self.step_year(1),
            (KeyCode::Char('H'), _) => self.step_year(-10),
            (KeyCode::Char('L'), _) => self.step_year(10),
            (KeyCode::Home | KeyCode::Char('g'), _) => self.set_year(self.dataset.min_year()),
            (KeyCode::End | KeyCode::Char('G'), _) => self.set_year(self.dataset.max_year()),
            (KeyCode::Tab | KeyCode::Char(']'), _) => self.next_tab(),
            (KeyCode::BackTab | KeyCode::Char('['), _) => self.prev_tab(),
            (KeyCode::Char('1'), _) => self.select_tab_index(0),
            (KeyCode::Char('2'), _) => self.select_tab_index(1),
            (KeyCode::Char('3'), _) => self.select_tab_index(2),
            _ => {}
        }
        Action::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Dashboard {
        Dashboard::new(Dataset::builtin().unwrap(), None)
    }

    #[test]
    fn test_initial_selection_is_default_year() {
        let dash = dashboard();
        assert_eq!(dash.selected_year(), 2020);
        assert_eq!(dash.resolved().year, 2020);
        assert_eq!(dash.tabs().active(), TAB_WEALTH);
    }

    #[test]
    fn test_initial_year_override_is_clamped() {
        let dash = Dashboard::new(Dataset::builtin().unwrap(), Some(1850));
        assert_eq!(dash.selected_year(), 1925);
        let dash = Dashboard::new(Dataset::builtin().unwrap(), Some(1969));
        assert_eq!(dash.selected_year(), 1969);
        assert_eq!(dash.resolved().year, 1970);
    }

    #[test]
    fn test_set_year_resolves_nearest_record() {
        let mut dash = dashboard();
        dash.set_year(1926);
        assert_eq!(dash.selected_year(), 1926);
        assert_eq!(dash.resolved().year, 1925);
        assert_eq!(dash.resolved().top1, 44.2);
    }

    #[test]
    fn test_year_command_clamps() {
        let mut dash = dashboard();
        let action = dash.execute(&Command::Year(3000));
        assert_eq!(dash.selected_year(), 2025);
        assert_eq!(dash.resolved().top1, 39.6);
        assert_eq!(
            action,
            Action::Notify("Year set to 2025".to_string(), NotifyLevel::Info)
        );

        dash.execute(&Command::Year(1800));
        assert_eq!(dash.selected_year(), 1925);
        assert_eq!(dash.resolved().year, 1925);
    }

    #[test]
    fn test_tab_switching_leaves_year_alone() {
        let mut dash = dashboard();
        dash.set_year(1945);
        dash.select_tab(TAB_TAX);
        dash.select_tab(TAB_UNION);
        assert_eq!(dash.selected_year(), 1945);
        assert_eq!(dash.tabs().active(), TAB_UNION);
    }

    #[test]
    fn test_summary_text_contains_resolved_values() {
        let mut dash = dashboard();
        dash.set_year(2020);
        let summary = dash.summary_text();
        assert!(summary.contains("Top 1%: 38.2%"));
        assert!(summary.contains("Top marginal tax rate: 37.0%"));
        assert!(summary.contains("Union membership: 10.3%"));
        assert!(summary.contains("Estate/Inheritance taxes in effect"));
    }
}
