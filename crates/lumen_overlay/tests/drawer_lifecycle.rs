//! End-to-end overlay scenarios: the mobile drawer with its scroll lock,
//! and a dropdown dismissed through the shared pointer-down router.

use lumen_animation::AnimationScheduler;
use lumen_core::events::Event;
use lumen_core::hit::ParentMapHitTree;
use lumen_overlay::{
    DismissPolicy, DismissRouter, OverlayController, OverlayPhase, ScrollLock,
};

const ROOT: u64 = 1;
const NAV_TRIGGER: u64 = 10;
const DRAWER: u64 = 20;
const DRAWER_LINK: u64 = 21;
const PAGE_CONTENT: u64 = 30;

fn page() -> ParentMapHitTree {
    let mut tree = ParentMapHitTree::new();
    tree.insert_root(ROOT);
    tree.insert(NAV_TRIGGER, ROOT);
    tree.insert(DRAWER, ROOT);
    tree.insert(DRAWER_LINK, DRAWER);
    tree.insert(PAGE_CONTENT, ROOT);
    tree
}

fn pump(scheduler: &AnimationScheduler, overlay: &mut OverlayController) {
    let mut frames = 0;
    while overlay.tick() {
        scheduler.advance(1.0 / 120.0);
        frames += 1;
        assert!(frames < 10_000, "overlay transition never settled");
    }
}

#[test]
fn drawer_holds_scroll_lock_until_settled_closed() {
    let scheduler = AnimationScheduler::new();
    let lock = ScrollLock::new();
    let mut drawer = OverlayController::new(scheduler.handle());
    drawer.lock_scroll(lock.clone());

    drawer.open();
    assert!(lock.is_locked(), "lock engages at the start of opening");
    pump(&scheduler, &mut drawer);
    assert_eq!(drawer.phase(), OverlayPhase::Open);
    assert!(lock.is_locked());

    drawer.close();
    // Still animating shut; the page must not start scrolling under the
    // half-visible drawer
    assert!(lock.is_locked());
    pump(&scheduler, &mut drawer);
    assert_eq!(drawer.phase(), OverlayPhase::Closed);
    assert!(!lock.is_locked());
}

#[test]
fn drawer_close_mid_open_releases_lock_once() {
    let scheduler = AnimationScheduler::new();
    let lock = ScrollLock::new();
    let mut drawer = OverlayController::new(scheduler.handle());
    drawer.lock_scroll(lock.clone());

    drawer.open();
    for _ in 0..2 {
        scheduler.advance(1.0 / 120.0);
        drawer.tick();
    }
    drawer.close();
    drawer.close();
    assert!(lock.is_locked());

    pump(&scheduler, &mut drawer);
    assert_eq!(drawer.phase(), OverlayPhase::Closed);
    assert!(!lock.is_locked());

    // A later unrelated cycle engages it again from scratch
    drawer.open();
    assert!(lock.is_locked());
    pump(&scheduler, &mut drawer);
    drawer.close();
    pump(&scheduler, &mut drawer);
    assert!(!lock.is_locked());
}

#[test]
fn dropdown_outside_click_dismisses_trigger_click_does_not() {
    let tree = page();
    let scheduler = AnimationScheduler::new();
    let router = DismissRouter::new();
    let mut dropdown = OverlayController::new(scheduler.handle());
    dropdown.bind_dismiss(
        router.clone(),
        DismissPolicy::new(DRAWER).ignore(NAV_TRIGGER),
    );

    dropdown.open();
    pump(&scheduler, &mut dropdown);
    assert_eq!(router.len(), 1);

    // Clicks on the trigger and inside the menu leave it open; the trigger's
    // own handler decides whether to toggle
    dropdown.on_pointer_down(&tree, &Event::pointer_down(NAV_TRIGGER));
    dropdown.on_pointer_down(&tree, &Event::pointer_down(DRAWER_LINK));
    assert_eq!(dropdown.phase(), OverlayPhase::Open);

    dropdown.on_pointer_down(&tree, &Event::pointer_down(PAGE_CONTENT));
    assert_eq!(dropdown.phase(), OverlayPhase::Closing);

    pump(&scheduler, &mut dropdown);
    assert_eq!(dropdown.phase(), OverlayPhase::Closed);
    assert!(router.is_empty(), "watcher removed on reaching closed");
}

#[test]
fn router_reports_every_stale_overlay_on_one_click() {
    let tree = page();
    let scheduler = AnimationScheduler::new();
    let router = DismissRouter::new();

    let mut first = OverlayController::new(scheduler.handle());
    first.bind_dismiss(router.clone(), DismissPolicy::new(DRAWER));
    let mut second = OverlayController::new(scheduler.handle());
    second.bind_dismiss(router.clone(), DismissPolicy::new(NAV_TRIGGER));

    first.open();
    second.open();
    assert_eq!(router.len(), 2);

    // A click inside neither overlay is reported for both
    let hits = router.route(&tree, &Event::pointer_down(PAGE_CONTENT));
    assert_eq!(hits.len(), 2);
    assert!(hits.contains(&first.watcher_id().unwrap()));
    assert!(hits.contains(&second.watcher_id().unwrap()));

    // A click inside the first overlay only closes the second
    let hits = router.route(&tree, &Event::pointer_down(DRAWER_LINK));
    assert_eq!(hits.as_slice(), &[second.watcher_id().unwrap()]);
}

#[test]
fn drop_mid_animation_tears_everything_down() {
    let tree = page();
    let scheduler = AnimationScheduler::new();
    let router = DismissRouter::new();
    let lock = ScrollLock::new();

    {
        let mut overlay = OverlayController::new(scheduler.handle());
        overlay.lock_scroll(lock.clone());
        overlay.bind_dismiss(router.clone(), DismissPolicy::new(DRAWER));
        overlay.open();
        scheduler.advance(1.0 / 120.0);
        overlay.tick();
        assert!(lock.is_locked());
        assert_eq!(router.len(), 1);
    }

    // Unmounted mid-open: no orphaned watcher, no stuck lock, no live drive
    assert!(router.is_empty());
    assert!(!lock.is_locked());
    assert!(router.route(&tree, &Event::pointer_down(PAGE_CONTENT)).is_empty());
    assert!(!scheduler.has_active_animations());
}
