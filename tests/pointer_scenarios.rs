//! End-to-end pointer transition scenarios driven through scripted hits
//! and a recording scene.

use glam::Vec3;
use raypoint::{
    Capabilities, PointerConfig, PointerEventKind, PressSignal, Ray, RayPointer, TargetId,
};
use raypoint_testkit::{RecordingScene, ScriptedHitTester};

fn gaze() -> Ray {
    Ray::new(Vec3::ZERO, Vec3::NEG_Z)
}

fn pointer() -> RayPointer {
    RayPointer::new(PointerConfig::new()).expect("default config is valid")
}

fn hit(target: TargetId) -> Option<raypoint::RayHit> {
    Some(ScriptedHitTester::hit(target, 5.0))
}

#[test]
fn first_hover_emits_enter_once() {
    let mut scene = RecordingScene::new();
    let a = scene.add_target(Capabilities::all());
    let hits = ScriptedHitTester::new(vec![hit(a), hit(a), hit(a)]);
    let mut pointer = pointer();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::IDLE);
    assert_eq!(scene.timeline(), vec![(a, PointerEventKind::Enter)]);

    // Hover idempotence: staying on the same target adds nothing.
    pointer.tick(&mut scene, &hits, gaze(), PressSignal::IDLE);
    pointer.tick(&mut scene, &hits, gaze(), PressSignal::IDLE);
    assert_eq!(scene.timeline(), vec![(a, PointerEventKind::Enter)]);
    assert_eq!(pointer.hover_target(), Some(a));
}

#[test]
fn hover_change_emits_exit_before_enter() {
    let mut scene = RecordingScene::new();
    let a = scene.add_target(Capabilities::all());
    let b = scene.add_target(Capabilities::all());
    let hits = ScriptedHitTester::new(vec![hit(a), hit(b)]);
    let mut pointer = pointer();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::IDLE);
    scene.take_events();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::IDLE);
    assert_eq!(
        scene.timeline(),
        vec![(a, PointerEventKind::Exit), (b, PointerEventKind::Enter)]
    );
    assert_eq!(pointer.hover_target(), Some(b));
}

#[test]
fn hover_loss_emits_exit_only() {
    let mut scene = RecordingScene::new();
    let a = scene.add_target(Capabilities::all());
    let hits = ScriptedHitTester::new(vec![hit(a), None]);
    let mut pointer = pointer();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::IDLE);
    scene.take_events();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::IDLE);
    assert_eq!(scene.timeline(), vec![(a, PointerEventKind::Exit)]);
    assert_eq!(pointer.hover_target(), None);
    assert_eq!(pointer.last_hit(), None);
}

#[test]
fn press_release_on_same_target_clicks() {
    let mut scene = RecordingScene::new();
    let a = scene.add_target(Capabilities::all());
    let hits = ScriptedHitTester::new(vec![hit(a), hit(a), hit(a)]);
    let mut pointer = pointer();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::IDLE);
    scene.take_events();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::PRESS);
    assert_eq!(scene.timeline(), vec![(a, PointerEventKind::Down)]);
    assert_eq!(pointer.pressed_target(), Some(a));
    scene.take_events();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::RELEASE);
    assert_eq!(
        scene.timeline(),
        vec![(a, PointerEventKind::Up), (a, PointerEventKind::Click)]
    );
    assert_eq!(pointer.pressed_target(), None);
}

/// Ray hits A (enter), press, then the ray leaves the scene on the
/// release tick: exit comes before up, and no click fires because the
/// hover target is gone at release time.
#[test]
fn release_after_hover_loss_does_not_click() {
    let mut scene = RecordingScene::new();
    let a = scene.add_target(Capabilities::all());
    let hits = ScriptedHitTester::new(vec![hit(a), hit(a), None]);
    let mut pointer = pointer();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::IDLE);
    assert_eq!(scene.timeline(), vec![(a, PointerEventKind::Enter)]);
    scene.take_events();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::PRESS);
    assert_eq!(scene.timeline(), vec![(a, PointerEventKind::Down)]);
    assert_eq!(pointer.pressed_target(), Some(a));
    scene.take_events();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::RELEASE);
    assert_eq!(
        scene.timeline(),
        vec![(a, PointerEventKind::Exit), (a, PointerEventKind::Up)]
    );
    assert_eq!(pointer.pressed_target(), None);
}

#[test]
fn same_tick_press_and_release_is_a_full_click() {
    let mut scene = RecordingScene::new();
    let a = scene.add_target(Capabilities::all());
    let hits = ScriptedHitTester::new(vec![hit(a)]);
    let mut pointer = pointer();

    pointer.tick(
        &mut scene,
        &hits,
        gaze(),
        PressSignal {
            pressed: true,
            released: true,
        },
    );
    assert_eq!(
        scene.timeline(),
        vec![
            (a, PointerEventKind::Enter),
            (a, PointerEventKind::Down),
            (a, PointerEventKind::Up),
            (a, PointerEventKind::Click),
        ]
    );
    assert_eq!(pointer.pressed_target(), None);
}

#[test]
fn press_without_hover_is_a_noop() {
    let mut scene = RecordingScene::new();
    scene.add_target(Capabilities::all());
    let hits = ScriptedHitTester::new(vec![None, None]);
    let mut pointer = pointer();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::PRESS);
    assert!(scene.events().is_empty());
    assert_eq!(pointer.pressed_target(), None);

    // And a release with nothing pressed emits nothing either.
    pointer.tick(&mut scene, &hits, gaze(), PressSignal::RELEASE);
    assert!(scene.events().is_empty());
}

#[test]
fn release_over_other_target_ups_without_click() {
    let mut scene = RecordingScene::new();
    let a = scene.add_target(Capabilities::all());
    let b = scene.add_target(Capabilities::all());
    let hits = ScriptedHitTester::new(vec![hit(a), hit(b)]);
    let mut pointer = pointer();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::PRESS);
    scene.take_events();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::RELEASE);
    assert_eq!(
        scene.timeline(),
        vec![
            (a, PointerEventKind::Exit),
            (b, PointerEventKind::Enter),
            (a, PointerEventKind::Up),
        ]
    );
    assert_eq!(pointer.pressed_target(), None);
}

/// A hit child with no capabilities bubbles every notification to its
/// parent, and the click comparison follows the handling ancestor.
#[test]
fn notifications_bubble_to_capable_ancestor() {
    let mut scene = RecordingScene::new();
    let panel = scene.add_target(Capabilities::all());
    let collider = scene.add_child(panel, Capabilities::empty());
    let hits = ScriptedHitTester::new(vec![hit(collider), hit(collider)]);
    let mut pointer = pointer();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::PRESS);
    assert_eq!(
        scene.timeline(),
        vec![(panel, PointerEventKind::Enter), (panel, PointerEventKind::Down)]
    );
    assert_eq!(pointer.hover_target(), Some(panel));
    assert_eq!(pointer.pressed_target(), Some(panel));
    scene.take_events();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::RELEASE);
    assert_eq!(
        scene.timeline(),
        vec![(panel, PointerEventKind::Up), (panel, PointerEventKind::Click)]
    );
}

/// No ancestor handles anything: nothing is delivered, but hover and
/// press bookkeeping still use the hit object's identity, so the state
/// machine stays consistent.
#[test]
fn capability_less_target_is_tracked_silently() {
    let mut scene = RecordingScene::new();
    let mute = scene.add_target(Capabilities::empty());
    let hits = ScriptedHitTester::new(vec![hit(mute), hit(mute)]);
    let mut pointer = pointer();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::PRESS);
    assert!(scene.events().is_empty());
    assert_eq!(pointer.hover_target(), Some(mute));
    assert_eq!(pointer.pressed_target(), Some(mute));

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::RELEASE);
    assert!(scene.events().is_empty());
    assert_eq!(pointer.pressed_target(), None);
}

#[test]
fn events_carry_hit_and_press_records() {
    let mut scene = RecordingScene::new();
    let a = scene.add_target(Capabilities::all());
    let geometry = ScriptedHitTester::hit(a, 7.5);
    let hits = ScriptedHitTester::new(vec![Some(geometry), Some(geometry)]);
    let mut pointer = pointer();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::PRESS);
    let events = scene.take_events();
    let down = events.last().unwrap();
    assert_eq!(down.kind, PointerEventKind::Down);
    assert_eq!(down.event.current_hit, Some(geometry));
    assert_eq!(down.event.press_hit, Some(geometry));
    // The down event predates press bookkeeping.
    assert_eq!(down.event.pressed_target, None);

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::RELEASE);
    let events = scene.take_events();
    let up = &events[0];
    assert_eq!(up.kind, PointerEventKind::Up);
    assert_eq!(up.event.pressed_target, Some(a));
    assert_eq!(up.event.press_hit, Some(geometry));
}

#[test]
fn line_endpoint_tracks_hits_and_idle_distance() {
    let mut scene = RecordingScene::new();
    let a = scene.add_target(Capabilities::all());
    let geometry = ScriptedHitTester::hit(a, 5.0);
    let hits = ScriptedHitTester::new(vec![Some(geometry), None]);
    let mut pointer = pointer();

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::IDLE);
    assert_eq!(pointer.line_endpoint(), geometry.point);

    pointer.tick(&mut scene, &hits, gaze(), PressSignal::IDLE);
    // Nothing hit: the line ends at the configured idle distance.
    assert_eq!(pointer.line_endpoint(), gaze().at(10.0));
    assert_eq!(pointer.line_endpoint_at(3.0), gaze().at(3.0));
}
