use super::*;
use crate::cookie::SIDEBAR_COOKIE_NAME;
use crate::host::{MemoryPersistence, NullPersistence};

const DESKTOP: Option<f64> = Some(1280.0);
const PHONE: Option<f64> = Some(390.0);

fn controller(store: &MemoryPersistence, default_open: bool, width: Option<f64>) -> SidebarController {
    let options = SidebarOptions { default_open, ..SidebarOptions::default() };
    SidebarController::new(options, Arc::new(store.clone()), width)
}

// =============================================================
// Construction / cookie restore
// =============================================================

#[test]
fn no_cookie_uses_caller_default() {
    let store = MemoryPersistence::new();
    assert!(controller(&store, true, DESKTOP).open());
    assert!(!controller(&store, false, DESKTOP).open());
}

#[test]
fn exact_cookie_overrides_default() {
    let store = MemoryPersistence::with_entry(SIDEBAR_COOKIE_NAME, "false");
    assert!(!controller(&store, true, DESKTOP).open());

    let store = MemoryPersistence::with_entry(SIDEBAR_COOKIE_NAME, "true");
    assert!(controller(&store, false, DESKTOP).open());
}

#[test]
fn malformed_cookie_falls_back_to_default() {
    let store = MemoryPersistence::with_entry(SIDEBAR_COOKIE_NAME, "yes");
    assert!(controller(&store, true, DESKTOP).open());
    assert!(!controller(&store, false, DESKTOP).open());
}

#[test]
fn mobile_state_never_restored() {
    let store = MemoryPersistence::with_entry(SIDEBAR_COOKIE_NAME, "true");
    let sidebar = controller(&store, true, PHONE);
    assert!(sidebar.is_mobile());
    assert!(!sidebar.open_mobile());
}

#[test]
fn unknown_viewport_is_desktop() {
    let sidebar = controller(&MemoryPersistence::new(), true, None);
    assert!(!sidebar.is_mobile());
}

// =============================================================
// Persistence round-trips
// =============================================================

#[test]
fn set_open_round_trips_through_persistence() {
    for value in [true, false] {
        let store = MemoryPersistence::new();
        let mut sidebar = controller(&store, !value, DESKTOP);
        sidebar.set_open(value);
        assert_eq!(store.load(SIDEBAR_COOKIE_NAME).as_deref(), Some(encode_open_state(value)));

        let remounted = controller(&store, !value, DESKTOP);
        assert_eq!(remounted.open(), value);
    }
}

#[test]
fn closed_sidebar_survives_remount_over_open_default() {
    let store = MemoryPersistence::new();
    let mut sidebar = controller(&store, true, DESKTOP);
    sidebar.set_open(false);
    drop(sidebar);

    let remounted = controller(&store, true, DESKTOP);
    assert!(!remounted.open());
}

#[test]
fn update_open_uses_previous_value_and_persists() {
    let store = MemoryPersistence::new();
    let mut sidebar = controller(&store, true, DESKTOP);
    sidebar.update_open(|prev| !prev);
    assert!(!sidebar.open());
    assert_eq!(store.load(SIDEBAR_COOKIE_NAME).as_deref(), Some("false"));
}

#[test]
fn disabled_persistence_keeps_in_memory_state() {
    let mut sidebar = SidebarController::new(SidebarOptions::default(), Arc::new(NullPersistence), DESKTOP);
    sidebar.set_open(false);
    assert!(!sidebar.open());
    sidebar.toggle();
    assert!(sidebar.open());
}

#[test]
fn mobile_drawer_is_not_persisted() {
    let store = MemoryPersistence::new();
    let mut sidebar = controller(&store, true, PHONE);
    sidebar.set_open_mobile(true);
    sidebar.update_open_mobile(|prev| !prev);
    assert!(!sidebar.open_mobile());
    assert!(store.is_empty());
}

// =============================================================
// Toggle mutual exclusion
// =============================================================

#[test]
fn mobile_toggle_only_touches_drawer() {
    let store = MemoryPersistence::new();
    let mut sidebar = controller(&store, true, PHONE);
    sidebar.toggle();
    assert!(sidebar.open_mobile());
    assert!(sidebar.open());
    assert!(store.is_empty());
}

#[test]
fn desktop_toggle_only_touches_open() {
    let store = MemoryPersistence::new();
    let mut sidebar = controller(&store, true, DESKTOP);
    sidebar.toggle();
    assert!(!sidebar.open());
    assert!(!sidebar.open_mobile());
    assert_eq!(store.load(SIDEBAR_COOKIE_NAME).as_deref(), Some("false"));
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_crosses_breakpoint() {
    let mut sidebar = controller(&MemoryPersistence::new(), true, DESKTOP);
    assert!(!sidebar.resize(800.0));
    assert!(sidebar.resize(767.0));
    assert!(sidebar.is_mobile());
    assert!(!sidebar.resize(500.0));
    assert!(sidebar.resize(768.0));
    assert!(!sidebar.is_mobile());
}

#[test]
fn breakpoint_is_exclusive() {
    assert!(is_mobile_width(767.9, 768));
    assert!(!is_mobile_width(768.0, 768));
}

// =============================================================
// Keyboard shortcut
// =============================================================

#[test]
fn ctrl_b_toggles_and_requests_prevent_default() {
    let mut sidebar = controller(&MemoryPersistence::new(), true, DESKTOP);
    assert!(sidebar.handle_key(&KeyChord::plain("b").with_ctrl()));
    assert!(!sidebar.open());
}

#[test]
fn ctrl_shift_b_is_ignored() {
    let mut sidebar = controller(&MemoryPersistence::new(), true, DESKTOP);
    assert!(!sidebar.handle_key(&KeyChord::plain("b").with_ctrl().with_shift()));
    assert!(sidebar.open());
}

#[test]
fn shortcut_on_mobile_flips_drawer() {
    let mut sidebar = controller(&MemoryPersistence::new(), true, PHONE);
    assert!(sidebar.handle_key(&KeyChord::plain("b").with_meta()));
    assert!(sidebar.open_mobile());
    assert!(sidebar.open());
}

#[test]
fn disabled_shortcut_leaves_state_and_cookie_alone() {
    let store = MemoryPersistence::new();
    let options = SidebarOptions { shortcut_enabled: false, ..SidebarOptions::default() };
    let mut sidebar = SidebarController::new(options, Arc::new(store.clone()), DESKTOP);
    assert!(!sidebar.handle_key(&KeyChord::plain("b").with_ctrl()));
    assert!(sidebar.open());
    assert!(store.is_empty());
}

#[test]
fn nested_sidebar_does_not_clobber_outer_cookie() {
    let cookie = MemoryPersistence::new();
    let mut outer = controller(&cookie, true, DESKTOP);
    let nested_options = SidebarOptions { default_open: false, shortcut_enabled: false, ..SidebarOptions::default() };
    let mut nested = SidebarController::new(nested_options, Arc::new(NullPersistence), DESKTOP);

    let chord = KeyChord::plain("b").with_ctrl();
    assert!(outer.handle_key(&chord));
    assert!(!nested.handle_key(&chord));
    assert!(!outer.open());
    assert!(!nested.open());

    let remounted = controller(&cookie, true, DESKTOP);
    assert!(!remounted.open());
}

// =============================================================
// Deferred restore
// =============================================================

#[test]
fn unrestored_ignores_cookie_and_viewport() {
    let store = MemoryPersistence::with_entry(SIDEBAR_COOKIE_NAME, "false");
    let sidebar = SidebarController::unrestored(SidebarOptions::default(), Arc::new(store));
    assert!(sidebar.open());
    assert!(!sidebar.is_mobile());
}

#[test]
fn restore_applies_cookie_without_rewriting_it() {
    let store = MemoryPersistence::with_entry(SIDEBAR_COOKIE_NAME, "false");
    let mut sidebar = SidebarController::unrestored(SidebarOptions::default(), Arc::new(store.clone()));
    assert!(sidebar.restore());
    assert!(!sidebar.open());
    assert!(!sidebar.restore());
    assert_eq!(store.len(), 1);
}

#[test]
fn restore_keeps_default_for_malformed_cookie() {
    let store = MemoryPersistence::with_entry(SIDEBAR_COOKIE_NAME, "nope");
    let mut sidebar = SidebarController::unrestored(SidebarOptions::default(), Arc::new(store));
    assert!(!sidebar.restore());
    assert!(sidebar.open());
}

// =============================================================
// Snapshot
// =============================================================

#[test]
fn visual_state_follows_open() {
    let mut sidebar = controller(&MemoryPersistence::new(), true, DESKTOP);
    assert_eq!(sidebar.visual_state(), SidebarVisualState::Expanded);
    sidebar.set_open(false);
    assert_eq!(sidebar.visual_state().as_str(), "collapsed");
    assert_eq!(sidebar.snapshot(), SidebarState { open: false, open_mobile: false, is_mobile: false });
}

#[test]
fn independent_instances_do_not_share_state() {
    let mut left = controller(&MemoryPersistence::new(), true, DESKTOP);
    let right = controller(&MemoryPersistence::new(), true, DESKTOP);
    left.toggle();
    assert!(!left.open());
    assert!(right.open());
}
