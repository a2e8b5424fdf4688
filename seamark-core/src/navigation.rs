//! Navigation state machine
//!
//! Single owner of "what is on screen": the current view, the scroll
//! lock, and the three activation marks of the menu (which entry is
//! active, which submenu is open, which child link is active). All
//! transitions clear the relevant marks before setting new ones, so the
//! at-most-one invariants hold structurally instead of by sweeping the
//! whole menu on every click.
//!
//! Transitions are level-triggered by the current state, not by edge
//! bookkeeping: clicking an already-open submenu closes it, clicking an
//! already-active direct entry deactivates it, and both fall back to
//! the default view.
//!
//! Unknown ids never fail. A click on an entry that does not exist, or
//! a navigation to a view nobody mounted, degrades to a no-op (or to a
//! blank content area) exactly like the production dashboard it models.

use crate::error::{CoreError, CoreResult};
use crate::types::{standard_menu, MenuEntry, MenuId, ViewId, ViewRegistry};

/// Follow-up work a transition asks the embedding UI to run after the
/// visibility change has been applied.
///
/// Height measurement only makes sense once the revealed panel is laid
/// out, which is why these are returned to the caller instead of being
/// executed inside the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// Recompute the shared sticky heights from the live panels.
    SyncLayout,
    /// Zero the shared sticky heights.
    ResetLayout,
    /// Re-run deferred interaction setup for a view that was just shown.
    Remount(ViewId),
}

/// Centralized navigation state.
///
/// Construction validates the menu shape; everything after that is
/// infallible.
#[derive(Debug, Clone)]
pub struct NavigationState {
    menu: Vec<MenuEntry>,
    views: ViewRegistry,
    current_view: Option<ViewId>,
    scroll_locked: bool,
    active_entry: Option<usize>,
    open_entry: Option<usize>,
    active_sub: Option<(usize, ViewId)>,
}

impl NavigationState {
    /// Build a navigation state over `menu` and `views`.
    ///
    /// Rejects menus where an entry id repeats, a submenu is empty, or
    /// the same view is reachable from two places (which would make the
    /// "at most one active" marks ambiguous).
    pub fn new(menu: Vec<MenuEntry>, views: ViewRegistry) -> CoreResult<Self> {
        validate_menu(&menu)?;
        Ok(Self {
            menu,
            views,
            current_view: None,
            scroll_locked: false,
            active_entry: None,
            open_entry: None,
            active_sub: None,
        })
    }

    /// The production menu over the full view registry.
    pub fn standard() -> CoreResult<Self> {
        Self::new(standard_menu(), ViewRegistry::standard())
    }

    /// Initial state: default view shown, first menu entry active and
    /// open, and its link to the default view marked active when it has
    /// one.
    ///
    /// The marks are forced directly rather than replayed through the
    /// click transitions, so a menu whose first entry is a plain link
    /// still boots into the same shape.
    pub fn bootstrap(&mut self) -> Vec<NavEffect> {
        let effects = self.show_view(ViewId::DEFAULT);
        if !self.menu.is_empty() {
            self.active_entry = Some(0);
            self.open_entry = Some(0);
            if let Some(children) = self.menu[0].children() {
                if children.iter().any(|c| c.view == ViewId::DEFAULT) {
                    self.active_sub = Some((0, ViewId::DEFAULT));
                }
            }
        }
        effects
    }

    /// Reveal `id` and hide every other view.
    ///
    /// Menu marks are untouched; callers own them. Returns the layout
    /// and remount work the switch calls for. The scroll lock follows
    /// the requested id even when no panel is mounted for it, matching
    /// the tolerant behaviour of the rest of the machine.
    pub fn show_view(&mut self, id: ViewId) -> Vec<NavEffect> {
        let mut effects = Vec::new();

        self.current_view = if self.views.contains(id) {
            Some(id)
        } else {
            log::debug!("view not mounted: {id}");
            None
        };

        if id.is_scroll_locked() {
            self.scroll_locked = true;
            effects.push(NavEffect::SyncLayout);
        } else {
            self.scroll_locked = false;
            effects.push(NavEffect::ResetLayout);
        }

        // Stale sticky heights used to leave a blank band above the FAQ;
        // force a second reset on top of the regular one.
        if id == ViewId::HelpCenter {
            effects.push(NavEffect::ResetLayout);
        }

        if matches!(id, ViewId::MyConsultant | ViewId::HashValue) {
            effects.push(NavEffect::Remount(id));
        }

        log::debug!("show view: {id}");
        effects
    }

    /// Clear every activation mark, then mark `id` active.
    pub fn activate_entry(&mut self, id: MenuId) {
        let Some(idx) = self.entry_index(id) else {
            log::warn!("menu entry not found: {}", id.name());
            return;
        };
        self.activate_index(idx);
    }

    /// A click on the top-level entry `id`.
    ///
    /// Submenu entries toggle their disclosure; direct entries toggle
    /// their activation. Collapsing or deactivating falls back to the
    /// default view. A pure disclosure (opening a submenu) changes no
    /// view and therefore returns no effects.
    pub fn click_entry(&mut self, id: MenuId) -> Vec<NavEffect> {
        let Some(idx) = self.entry_index(id) else {
            log::warn!("menu entry not found: {}", id.name());
            return Vec::new();
        };

        if self.menu[idx].is_submenu() {
            if self.open_entry == Some(idx) {
                self.clear_activation();
                return self.show_view(ViewId::DEFAULT);
            }
            self.clear_activation();
            self.open_entry = Some(idx);
            return Vec::new();
        }

        if self.active_entry == Some(idx) {
            self.clear_activation();
            return self.show_view(ViewId::DEFAULT);
        }
        self.activate_index(idx);
        // Direct entries always carry a view; unknown shapes fall back
        // to the default.
        let view = self.menu[idx].direct_view().unwrap_or(ViewId::DEFAULT);
        self.show_view(view)
    }

    /// A click on the child link `view` inside the submenu of `parent`.
    ///
    /// Marks the parent active and open, marks the link active, and
    /// navigates. A child that is not actually in that submenu is a
    /// no-op.
    pub fn click_sub_entry(&mut self, parent: MenuId, view: ViewId) -> Vec<NavEffect> {
        let Some(idx) = self.entry_index(parent) else {
            log::warn!("menu entry not found: {}", parent.name());
            return Vec::new();
        };
        let child_exists = self.menu[idx]
            .children()
            .is_some_and(|children| children.iter().any(|c| c.view == view));
        if !child_exists {
            log::warn!("submenu link not found: {} / {view}", parent.name());
            return Vec::new();
        }

        self.activate_index(idx);
        self.open_entry = Some(idx);
        self.active_sub = Some((idx, view));
        self.show_view(view)
    }

    /// The view currently on screen, if any panel is mounted for it.
    #[must_use]
    pub const fn current_view(&self) -> Option<ViewId> {
        self.current_view
    }

    /// Whether page-level scrolling is suppressed.
    #[must_use]
    pub const fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// The menu definition, in display order.
    #[must_use]
    pub fn menu(&self) -> &[MenuEntry] {
        &self.menu
    }

    /// Whether the top-level entry `id` carries the active mark.
    #[must_use]
    pub fn is_entry_active(&self, id: MenuId) -> bool {
        self.entry_index(id)
            .is_some_and(|idx| self.active_entry == Some(idx))
    }

    /// Whether the submenu of `id` is disclosed.
    #[must_use]
    pub fn is_entry_open(&self, id: MenuId) -> bool {
        self.entry_index(id)
            .is_some_and(|idx| self.open_entry == Some(idx))
    }

    /// Whether the child link `view` under `parent` carries the active mark.
    #[must_use]
    pub fn is_sub_active(&self, parent: MenuId, view: ViewId) -> bool {
        self.entry_index(parent)
            .is_some_and(|idx| self.active_sub == Some((idx, view)))
    }

    /// The entry whose submenu is currently open, if any.
    #[must_use]
    pub fn open_entry(&self) -> Option<MenuId> {
        self.open_entry.map(|idx| self.menu[idx].id)
    }

    /// The entry currently marked active, if any.
    #[must_use]
    pub fn active_entry(&self) -> Option<MenuId> {
        self.active_entry.map(|idx| self.menu[idx].id)
    }

    fn entry_index(&self, id: MenuId) -> Option<usize> {
        self.menu.iter().position(|entry| entry.id == id)
    }

    fn activate_index(&mut self, idx: usize) {
        self.clear_activation();
        self.active_entry = Some(idx);
    }

    fn clear_activation(&mut self) {
        self.active_entry = None;
        self.open_entry = None;
        self.active_sub = None;
    }
}

fn validate_menu(menu: &[MenuEntry]) -> CoreResult<()> {
    let mut seen_views: Vec<ViewId> = Vec::new();
    for (i, entry) in menu.iter().enumerate() {
        if menu[..i].iter().any(|other| other.id == entry.id) {
            return Err(CoreError::DuplicateEntry(entry.id.name()));
        }
        if entry.children().is_some_and(<[_]>::is_empty) {
            return Err(CoreError::EmptySubmenu(entry.id.name()));
        }
        for view in entry.target_views() {
            if seen_views.contains(&view) {
                return Err(CoreError::DuplicateViewTarget(view.name()));
            }
            seen_views.push(view);
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::MenuEntry;

    fn standard() -> NavigationState {
        NavigationState::standard().unwrap()
    }

    fn booted() -> NavigationState {
        let mut nav = standard();
        nav.bootstrap();
        nav
    }

    fn active_count(nav: &NavigationState) -> usize {
        nav.menu()
            .iter()
            .filter(|e| nav.is_entry_active(e.id))
            .count()
    }

    fn open_count(nav: &NavigationState) -> usize {
        nav.menu()
            .iter()
            .filter(|e| nav.is_entry_open(e.id))
            .count()
    }

    #[test]
    fn bootstrap_lands_on_default_with_first_entry_open() {
        let mut nav = standard();
        let effects = nav.bootstrap();

        assert_eq!(nav.current_view(), Some(ViewId::Comparison));
        assert!(!nav.scroll_locked());
        assert!(nav.is_entry_active(MenuId::DataBoard));
        assert!(nav.is_entry_open(MenuId::DataBoard));
        assert!(nav.is_sub_active(MenuId::DataBoard, ViewId::Comparison));
        assert_eq!(effects, vec![NavEffect::ResetLayout]);
    }

    #[test]
    fn at_most_one_mark_of_each_kind_survives_any_click_sequence() {
        let mut nav = booted();
        let clicks: Vec<fn(&mut NavigationState) -> Vec<NavEffect>> = vec![
            |n| n.click_entry(MenuId::Consultants),
            |n| n.click_sub_entry(MenuId::Consultants, ViewId::FindConsultant),
            |n| n.click_entry(MenuId::MarketingPlan),
            |n| n.click_sub_entry(MenuId::Compliance, ViewId::HashValue),
            |n| n.click_entry(MenuId::HelpCenter),
            |n| n.click_entry(MenuId::DataBoard),
            |n| n.click_sub_entry(MenuId::DataBoard, ViewId::RealTime),
        ];
        for click in clicks {
            click(&mut nav);
            assert!(active_count(&nav) <= 1);
            assert!(open_count(&nav) <= 1);
        }
    }

    #[test]
    fn clicking_open_submenu_collapses_to_default() {
        let mut nav = booted();
        assert!(nav.is_entry_open(MenuId::DataBoard));

        let effects = nav.click_entry(MenuId::DataBoard);

        assert_eq!(nav.current_view(), Some(ViewId::Comparison));
        assert_eq!(active_count(&nav), 0);
        assert_eq!(open_count(&nav), 0);
        assert_eq!(nav.active_entry(), None);
        assert_eq!(effects, vec![NavEffect::ResetLayout]);
    }

    #[test]
    fn opening_a_submenu_changes_no_view() {
        let mut nav = booted();
        nav.click_sub_entry(MenuId::DataBoard, ViewId::MarketReport);
        assert_eq!(nav.current_view(), Some(ViewId::MarketReport));

        let effects = nav.click_entry(MenuId::Consultants);

        assert!(effects.is_empty());
        assert_eq!(nav.current_view(), Some(ViewId::MarketReport));
        assert!(nav.is_entry_open(MenuId::Consultants));
        assert_eq!(nav.active_entry(), None);
    }

    #[test]
    fn direct_entry_reclick_deactivates_and_falls_back() {
        let mut nav = booted();

        nav.click_entry(MenuId::MarketingPlan);
        assert_eq!(nav.current_view(), Some(ViewId::MarketingPlan));
        assert!(nav.is_entry_active(MenuId::MarketingPlan));
        assert_eq!(open_count(&nav), 0);

        let effects = nav.click_entry(MenuId::MarketingPlan);
        assert_eq!(nav.current_view(), Some(ViewId::Comparison));
        assert_eq!(active_count(&nav), 0);
        assert_eq!(effects, vec![NavEffect::ResetLayout]);
    }

    #[test]
    fn sub_entry_click_marks_parent_and_child() {
        let mut nav = booted();

        nav.click_sub_entry(MenuId::DataBoard, ViewId::MarketReport);

        assert_eq!(nav.current_view(), Some(ViewId::MarketReport));
        assert!(nav.is_entry_active(MenuId::DataBoard));
        assert!(nav.is_entry_open(MenuId::DataBoard));
        assert!(nav.is_sub_active(MenuId::DataBoard, ViewId::MarketReport));
        assert!(!nav.is_sub_active(MenuId::DataBoard, ViewId::Comparison));
    }

    #[test]
    fn switching_submenus_closes_the_previous_one() {
        let mut nav = booted();

        nav.click_sub_entry(MenuId::Compliance, ViewId::CulturalAdaptation);

        assert!(!nav.is_entry_open(MenuId::DataBoard));
        assert!(!nav.is_entry_active(MenuId::DataBoard));
        assert!(nav.is_entry_open(MenuId::Compliance));
        assert!(nav.is_entry_active(MenuId::Compliance));
    }

    #[test]
    fn entering_and_leaving_the_locked_view_emits_layout_effects() {
        let mut nav = booted();

        let entering = nav.click_sub_entry(MenuId::Consultants, ViewId::FindConsultant);
        assert!(nav.scroll_locked());
        assert_eq!(entering, vec![NavEffect::SyncLayout]);

        let leaving = nav.click_sub_entry(MenuId::Consultants, ViewId::MyConsultant);
        assert!(!nav.scroll_locked());
        assert_eq!(
            leaving,
            vec![
                NavEffect::ResetLayout,
                NavEffect::Remount(ViewId::MyConsultant)
            ]
        );
    }

    #[test]
    fn faq_view_resets_layout_twice() {
        let mut nav = booted();
        let effects = nav.click_entry(MenuId::HelpCenter);
        assert_eq!(
            effects,
            vec![NavEffect::ResetLayout, NavEffect::ResetLayout]
        );
    }

    #[test]
    fn unknown_menu_entry_is_a_no_op() {
        let menu = vec![MenuEntry::direct(MenuId::HelpCenter, ViewId::HelpCenter)];
        let mut nav = NavigationState::new(menu, ViewRegistry::standard()).unwrap();
        nav.bootstrap();
        let before = nav.clone();

        let effects = nav.click_entry(MenuId::Cases);

        assert!(effects.is_empty());
        assert_eq!(nav.current_view(), before.current_view());
        assert_eq!(nav.active_entry(), before.active_entry());
    }

    #[test]
    fn unmounted_view_hides_everything_but_keeps_menu_marks() {
        let menu = standard_menu();
        let views = ViewRegistry::with_views(vec![ViewId::Comparison]);
        let mut nav = NavigationState::new(menu, views).unwrap();
        nav.bootstrap();

        let effects = nav.click_sub_entry(MenuId::Compliance, ViewId::HashValue);

        assert_eq!(nav.current_view(), None);
        assert!(nav.is_entry_active(MenuId::Compliance));
        assert!(nav.is_sub_active(MenuId::Compliance, ViewId::HashValue));
        assert_eq!(
            effects,
            vec![
                NavEffect::ResetLayout,
                NavEffect::Remount(ViewId::HashValue)
            ]
        );
    }

    #[test]
    fn sub_entry_outside_its_parent_is_a_no_op() {
        let mut nav = booted();
        let before = nav.clone();

        let effects = nav.click_sub_entry(MenuId::Consultants, ViewId::HashValue);

        assert!(effects.is_empty());
        assert_eq!(nav.current_view(), before.current_view());
        assert_eq!(nav.active_entry(), before.active_entry());
    }

    #[test]
    fn activate_entry_clears_previous_marks() {
        let mut nav = booted();
        nav.activate_entry(MenuId::Cases);

        assert!(nav.is_entry_active(MenuId::Cases));
        assert!(!nav.is_entry_active(MenuId::DataBoard));
        assert_eq!(open_count(&nav), 0);
    }

    #[test]
    fn validation_rejects_duplicate_view_targets() {
        let menu = vec![
            MenuEntry::direct(MenuId::MarketingPlan, ViewId::MarketingPlan),
            MenuEntry::submenu(MenuId::Cases, vec![ViewId::MarketingPlan]),
        ];
        assert_eq!(
            NavigationState::new(menu, ViewRegistry::standard()).err(),
            Some(CoreError::DuplicateViewTarget("marketing-plan"))
        );
    }

    #[test]
    fn validation_rejects_empty_submenus() {
        let menu = vec![MenuEntry::submenu(MenuId::Cases, Vec::new())];
        assert_eq!(
            NavigationState::new(menu, ViewRegistry::standard()).err(),
            Some(CoreError::EmptySubmenu("cases"))
        );
    }

    #[test]
    fn validation_rejects_repeated_entry_ids() {
        let menu = vec![
            MenuEntry::direct(MenuId::HelpCenter, ViewId::HelpCenter),
            MenuEntry::direct(MenuId::HelpCenter, ViewId::Settings),
        ];
        assert_eq!(
            NavigationState::new(menu, ViewRegistry::standard()).err(),
            Some(CoreError::DuplicateEntry("help-center"))
        );
    }
}
