//! End-to-end navigation scenarios
//!
//! Drives the state machine the way a frontend does: click, apply the
//! returned effects to a `LayoutSync`, render from the resulting state.

#![allow(clippy::unwrap_used)]

use seamark_core::{
    standard_menu, LayoutSync, MenuId, MenuTarget, NavEffect, NavigationState, StickyProbe, ViewId,
};

struct FixedProbe {
    header: u16,
    left: u16,
    right: u16,
}

impl StickyProbe for FixedProbe {
    fn header_h(&self) -> Option<u16> {
        Some(self.header)
    }
    fn left_sticky_h(&self) -> Option<u16> {
        Some(self.left)
    }
    fn right_sticky_h(&self) -> Option<u16> {
        Some(self.right)
    }
}

const PROBE: FixedProbe = FixedProbe {
    header: 4,
    left: 12,
    right: 7,
};

fn apply(sync: &mut LayoutSync, effects: &[NavEffect]) {
    for effect in effects {
        match effect {
            NavEffect::SyncLayout => sync.recompute(&PROBE),
            NavEffect::ResetLayout => sync.reset(),
            NavEffect::Remount(_) => {}
        }
    }
}

#[test]
fn every_view_is_reachable_and_only_the_locked_one_keeps_sticky_heights() {
    let mut nav = NavigationState::standard().unwrap();
    let mut sync = LayoutSync::new();
    apply(&mut sync, &nav.bootstrap());

    let mut visited = 0;
    for entry in standard_menu() {
        match &entry.target {
            MenuTarget::View(view) => {
                let effects = nav.click_entry(entry.id);
                apply(&mut sync, &effects);
                assert_eq!(nav.current_view(), Some(*view));
                assert_eq!(sync.params().sticky_max_h, 0);
                visited += 1;
            }
            MenuTarget::Submenu(children) => {
                for child in children {
                    let effects = nav.click_sub_entry(entry.id, child.view);
                    apply(&mut sync, &effects);
                    assert_eq!(nav.current_view(), Some(child.view));
                    if child.view.is_scroll_locked() {
                        assert_eq!(sync.params().sticky_max_h, PROBE.left.max(PROBE.right));
                    } else {
                        assert_eq!(sync.params().sticky_max_h, 0);
                    }
                    visited += 1;
                }
            }
        }
    }
    assert_eq!(visited, ViewId::all().len());
}

#[test]
fn consultant_search_session_keeps_layout_and_lock_in_step() {
    let mut nav = NavigationState::standard().unwrap();
    let mut sync = LayoutSync::new();
    apply(&mut sync, &nav.bootstrap());

    // Disclose the consultant group. Nothing on screen changes yet.
    let effects = nav.click_entry(MenuId::Consultants);
    assert!(effects.is_empty());
    assert_eq!(nav.current_view(), Some(ViewId::Comparison));

    // Enter the search view: lock engages, heights are measured.
    let effects = nav.click_sub_entry(MenuId::Consultants, ViewId::FindConsultant);
    apply(&mut sync, &effects);
    assert!(nav.scroll_locked());
    assert_eq!(sync.params().left_sticky_h, PROBE.left);
    assert_eq!(sync.params().right_sticky_h, PROBE.right);
    assert_eq!(sync.params().sticky_max_h, PROBE.left.max(PROBE.right));

    // A window resize re-measures while the view is up.
    sync.recompute(&PROBE);
    assert_eq!(sync.params().sticky_max_h, PROBE.left.max(PROBE.right));

    // Collapse the open group: back to the default view, heights reset,
    // every menu mark cleared.
    let effects = nav.click_entry(MenuId::Consultants);
    apply(&mut sync, &effects);
    assert_eq!(nav.current_view(), Some(ViewId::Comparison));
    assert!(!nav.scroll_locked());
    assert_eq!(sync.params().sticky_max_h, 0);
    assert_eq!(nav.active_entry(), None);
    assert_eq!(nav.open_entry(), None);
    // The header height survives the reset.
    assert_eq!(sync.params().header_h, PROBE.header);
}

#[test]
fn remount_effects_fire_every_time_their_views_are_shown() {
    let mut nav = NavigationState::standard().unwrap();
    nav.bootstrap();

    let first = nav.click_sub_entry(MenuId::Consultants, ViewId::MyConsultant);
    assert!(first.contains(&NavEffect::Remount(ViewId::MyConsultant)));

    nav.click_sub_entry(MenuId::DataBoard, ViewId::RealTime);

    let again = nav.click_sub_entry(MenuId::Consultants, ViewId::MyConsultant);
    assert!(again.contains(&NavEffect::Remount(ViewId::MyConsultant)));
}
