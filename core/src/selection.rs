use std::collections::BTreeMap;
use std::sync::Arc;

use crate::model::{NavItem, PresentationData};

/// Which main tab is showing and which sub tab each section last showed.
///
/// Transitions never validate ids against the document: an unknown id is
/// stored as given and simply fails to resolve when the view is derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    active_main_tab: String,
    active_sub_tabs: Arc<BTreeMap<String, String>>,
}

impl Selection {
    /// First main-nav entry, plus the first sub-nav entry of every section
    /// that has one.
    pub fn initial(data: &PresentationData) -> Self {
        let active_main_tab = data
            .main_nav
            .first()
            .map(|item| item.id.clone())
            .unwrap_or_default();

        let active_sub_tabs = data
            .sections
            .iter()
            .filter_map(|section| {
                section
                    .sub_nav
                    .first()
                    .map(|item| (section.id.clone(), item.id.clone()))
            })
            .collect();

        Self {
            active_main_tab,
            active_sub_tabs: Arc::new(active_sub_tabs),
        }
    }

    pub fn active_main_tab(&self) -> &str {
        &self.active_main_tab
    }

    pub fn active_sub_tab(&self, section_id: &str) -> Option<&str> {
        self.active_sub_tabs.get(section_id).map(String::as_str)
    }

    pub fn active_sub_tabs(&self) -> &BTreeMap<String, String> {
        &self.active_sub_tabs
    }

    /// Sub tab recorded for the currently active main tab.
    pub fn current_sub_tab(&self) -> Option<&str> {
        self.active_sub_tab(&self.active_main_tab)
    }

    /// The sub-tab map is shared with `self`, not copied.
    pub fn with_main_tab(&self, section_id: impl Into<String>) -> Self {
        Self {
            active_main_tab: section_id.into(),
            active_sub_tabs: Arc::clone(&self.active_sub_tabs),
        }
    }

    /// Copies the sub-tab map and replaces the entry for `section_id` only.
    pub fn with_sub_tab(&self, section_id: impl Into<String>, sub_tab_id: impl Into<String>) -> Self {
        let mut active_sub_tabs = self.active_sub_tabs.as_ref().clone();
        active_sub_tabs.insert(section_id.into(), sub_tab_id.into());
        Self {
            active_main_tab: self.active_main_tab.clone(),
            active_sub_tabs: Arc::new(active_sub_tabs),
        }
    }
}

/// Entry next to `current` in `items`, wrapping at both ends. When `current`
/// is absent or not in `items` the first entry is returned.
pub fn neighbor<'a>(items: &'a [NavItem], current: Option<&str>, forward: bool) -> Option<&'a NavItem> {
    let len = items.len();
    if len == 0 {
        return None;
    }
    let position = current.and_then(|id| items.iter().position(|item| item.id == id));
    let idx = match position {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    };
    items.get(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Section, SlideData};

    fn nav(ids: &[&str]) -> Vec<NavItem> {
        ids.iter().map(|id| NavItem::new(*id, id.to_uppercase())).collect()
    }

    fn document() -> PresentationData {
        PresentationData {
            title: "T".to_string(),
            subtitle: String::new(),
            logos: Default::default(),
            main_nav: Arc::new(nav(&["a", "b", "c"])),
            sections: Arc::new(vec![
                Arc::new(Section::new("a", nav(&["a1", "a2"]), vec![SlideData::new("a1", "", "")])),
                Arc::new(Section::new("b", vec![], vec![])),
                Arc::new(Section::new("c", nav(&["c1"]), vec![])),
            ]),
            footer: String::new(),
        }
    }

    #[test]
    fn test_initial_selection() {
        let selection = Selection::initial(&document());
        assert_eq!(selection.active_main_tab(), "a");
        assert_eq!(selection.active_sub_tab("a"), Some("a1"));
        assert_eq!(selection.active_sub_tab("c"), Some("c1"));
        // sections with an empty sub nav are left out
        assert_eq!(selection.active_sub_tab("b"), None);
        assert_eq!(selection.active_sub_tabs().len(), 2);
    }

    #[test]
    fn test_initial_selection_with_empty_main_nav() {
        let mut data = document();
        data.main_nav = Arc::new(vec![]);
        let selection = Selection::initial(&data);
        assert_eq!(selection.active_main_tab(), "");
        assert_eq!(selection.current_sub_tab(), None);
    }

    #[test]
    fn test_with_main_tab_shares_sub_tab_map() {
        let selection = Selection::initial(&document());
        let next = selection.with_main_tab("c");
        assert_eq!(next.active_main_tab(), "c");
        assert_eq!(next.current_sub_tab(), Some("c1"));
        assert!(Arc::ptr_eq(&selection.active_sub_tabs, &next.active_sub_tabs));
    }

    #[test]
    fn test_with_sub_tab_leaves_previous_untouched() {
        let selection = Selection::initial(&document());
        let next = selection.with_sub_tab("a", "a2");
        assert_eq!(next.active_sub_tab("a"), Some("a2"));
        assert_eq!(next.active_sub_tab("c"), Some("c1"));
        assert_eq!(selection.active_sub_tab("a"), Some("a1"));
    }

    #[test]
    fn test_neighbor_wraps() {
        let items = nav(&["x", "y", "z"]);
        assert_eq!(neighbor(&items, Some("z"), true).unwrap().id, "x");
        assert_eq!(neighbor(&items, Some("x"), false).unwrap().id, "z");
        assert_eq!(neighbor(&items, Some("x"), true).unwrap().id, "y");
        assert_eq!(neighbor(&items, Some("missing"), false).unwrap().id, "x");
        assert_eq!(neighbor(&items, None, true).unwrap().id, "x");
        assert!(neighbor(&[], Some("x"), true).is_none());
    }
}
