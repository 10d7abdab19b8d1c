//! End-to-end walks through the default room.

use glam::Vec3;
use whiteroom_config::{Config, ConfigError, ItemAction, SceneTable};
use whiteroom_game::{Overlay, Session};
use whiteroom_input::RawKeyEvent;
use whiteroom_interact::Trigger;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

fn session() -> Session {
    Session::new(Config::default(), SceneTable::default()).unwrap()
}

fn press(s: &mut Session, code: KeyCode) {
    s.on_key(RawKeyEvent::pressed(code));
}

fn release(s: &mut Session, code: KeyCode) {
    s.on_key(RawKeyEvent::released(code));
}

#[test]
fn test_gmail_scenario() {
    let mut s = session();
    s.place_player(Vec3::new(0.0, 0.0, 0.0));
    let out = s.tick();
    assert!(out.near_item.is_none());
    let gmail = s.items().iter().find(|i| i.id == "gmail").unwrap();
    let d = gmail.planar_distance(Vec3::ZERO);
    assert!((d - 33.24).abs() < 0.01, "{d}");

    s.place_player(Vec3::new(23.0, 0.0, -24.1));
    let out = s.tick();
    assert_eq!(out.near_item.as_deref(), Some("gmail"));
    assert!(out.near_changed);
    assert!(out.events.is_empty());
    let blend_before = s.camera_control().focus_blend;
    let distance_before = s.camera_control().distance();
    assert!(blend_before > 0.0);
    assert!(distance_before < 10.0);

    press(&mut s, KeyCode::KeyE);
    let out = s.tick();
    assert_eq!(out.events.len(), 1);
    assert_eq!(out.events[0].item_id, "gmail");
    assert_eq!(out.events[0].action, ItemAction::Contact);
    assert_eq!(out.events[0].trigger, Trigger::Interact);
    assert_eq!(out.overlay, Overlay::Contact);
    assert!(out.controls_locked);

    for _ in 0..240 {
        s.tick();
    }
    let cam = s.camera_control();
    assert!(cam.focus_blend > blend_before);
    assert!((cam.focus_blend - 1.0).abs() < 1e-3);
    assert!((cam.distance() - 7.6).abs() < 1e-2, "{}", cam.distance());
    assert_eq!(cam.focus_point, Some(Vec3::new(23.0, 0.8, -24.0)));
}

#[test]
fn test_interact_fires_once_per_press() {
    let mut s = session();
    // LinkedIn opens a link, which does not lock the controls.
    s.place_player(Vec3::new(25.0, 1.0, -20.5));
    assert_eq!(s.tick().near_item.as_deref(), Some("linkedin"));

    press(&mut s, KeyCode::KeyE);
    let fired: usize = (0..5).map(|_| s.tick().events.len()).sum();
    assert_eq!(fired, 1);
    release(&mut s, KeyCode::KeyE);
    assert!(s.tick().events.is_empty());
    press(&mut s, KeyCode::KeyE);
    assert_eq!(s.tick().events.len(), 1);

    let urls = s.take_pending_urls();
    assert_eq!(urls.len(), 2);
    assert!(urls[0].starts_with("https://www.linkedin.com/"));
    assert!(!s.controls_locked());
}

#[test]
fn test_quick_tap_between_ticks_fires_once() {
    let mut s = session();
    s.place_player(Vec3::new(23.0, 0.0, -24.1));
    assert_eq!(s.tick().near_item.as_deref(), Some("gmail"));

    press(&mut s, KeyCode::KeyE);
    release(&mut s, KeyCode::KeyE);
    let out = s.tick();
    assert_eq!(out.events.len(), 1);
    assert_eq!(out.overlay, Overlay::Contact);

    s.close_overlay();
    assert!(s.tick().events.is_empty());
}

#[test]
fn test_click_queued_before_lock_is_dropped() {
    let mut s = session();
    s.set_viewport(800.0, 600.0);
    s.on_cursor_moved(400.0, 300.0);
    assert_eq!(s.tick().hovered_item.as_deref(), Some("aboutTable"));

    s.on_mouse_button(MouseButton::Left, ElementState::Pressed);
    s.set_controls_locked(true);
    let out = s.tick();
    assert!(out.events.is_empty());
    assert_eq!(out.overlay, Overlay::None);

    s.set_controls_locked(false);
    assert!(s.tick().events.is_empty());
}

#[test]
fn test_nothing_fires_away_from_items() {
    let mut s = session();
    press(&mut s, KeyCode::KeyE);
    let out = s.tick();
    assert!(out.events.is_empty());
    assert!(out.near_item.is_none());
    assert_eq!(out.overlay, Overlay::None);
}

#[test]
fn test_project_overlay_locks_until_closed() {
    let mut s = session();
    s.place_player(Vec3::new(-23.0, 1.0, -10.0));
    assert_eq!(s.tick().near_item.as_deref(), Some("chickProject"));
    press(&mut s, KeyCode::KeyE);
    let out = s.tick();
    assert_eq!(out.overlay, Overlay::Project("chick-game".to_string()));

    // Locked: movement and wheel are ignored.
    let before = s.player().position;
    press(&mut s, KeyCode::KeyW);
    s.on_scroll(MouseScrollDelta::PixelDelta(winit::dpi::PhysicalPosition::new(0.0, -300.0)));
    let out = s.tick();
    assert_eq!(out.player.position, before);
    assert_eq!(s.camera_control().user_distance(), 10.0);

    s.close_overlay();
    assert!(!s.controls_locked());
    // E was released by the lock, so holding it on does not re-fire.
    assert!(s.tick().events.is_empty());
    press(&mut s, KeyCode::KeyW);
    let out = s.tick();
    assert_ne!(out.player.position, before);
}

#[test]
fn test_walking_into_table_is_pushed_out() {
    let mut s = session();
    // Walk straight at the table from the spawn point.
    press(&mut s, KeyCode::KeyW);
    let table = s.items().iter().find(|i| i.id == "aboutTable").unwrap().clone();
    let mut furthest = f32::MIN;
    for _ in 0..400 {
        let out = s.tick();
        furthest = furthest.max(out.player.position.z);
    }
    // The table's footprint is ~7.2 deep on z after its quarter turn; the
    // player stops near its front face and never reaches its center.
    assert!(furthest < table.position.z - 2.5, "{furthest}");
    assert!(furthest > 5.0, "{furthest}");
}

#[test]
fn test_camera_stays_inside_room() {
    let mut s = session();
    let interior = s.follow_camera().interior();
    for (keys, ticks) in [
        (&[KeyCode::KeyW, KeyCode::KeyD][..], 600),
        (&[KeyCode::KeyS][..], 600),
        (&[KeyCode::KeyA, KeyCode::ShiftLeft][..], 600),
    ] {
        for &k in keys {
            press(&mut s, k);
        }
        for _ in 0..ticks {
            let out = s.tick();
            assert!(
                interior.contains_point(out.camera.position),
                "{} at player {}",
                out.camera.position,
                out.player.position
            );
        }
        for &k in keys {
            release(&mut s, k);
        }
    }
}

#[test]
fn test_right_drag_turns_camera_and_wheel_zooms() {
    let mut s = session();
    let yaw = s.camera_control().yaw;
    s.on_cursor_moved(100.0, 100.0);
    s.on_mouse_button(MouseButton::Right, ElementState::Pressed);
    s.on_cursor_moved(140.0, 100.0);
    assert!((s.camera_control().yaw - (yaw - 0.2)).abs() < 1e-5);
    s.on_mouse_button(MouseButton::Right, ElementState::Released);
    s.on_cursor_moved(200.0, 100.0);
    assert!((s.camera_control().yaw - (yaw - 0.2)).abs() < 1e-5);

    s.on_scroll(MouseScrollDelta::LineDelta(0.0, -5.0));
    assert!((s.camera_control().user_distance() - 12.0).abs() < 1e-5);
}

#[test]
fn test_click_on_table_opens_about() {
    let mut s = session();
    s.set_viewport(800.0, 600.0);
    s.on_cursor_moved(400.0, 300.0);
    let out = s.tick();
    assert_eq!(out.hovered_item.as_deref(), Some("aboutTable"));

    s.on_mouse_button(MouseButton::Left, ElementState::Pressed);
    s.on_mouse_button(MouseButton::Left, ElementState::Released);
    let out = s.tick();
    assert_eq!(out.events.len(), 1);
    assert_eq!(out.events[0].trigger, Trigger::Click);
    assert_eq!(out.overlay, Overlay::About);
    assert!(out.hovered_item.is_none());

    // A second click while the panel is open does nothing.
    s.on_mouse_button(MouseButton::Left, ElementState::Pressed);
    assert!(s.tick().events.is_empty());
}

#[test]
fn test_hover_highlights_prop() {
    let mut s = session();
    s.set_viewport(800.0, 600.0);
    s.on_cursor_moved(400.0, 300.0);
    let table = s.items().iter().position(|i| i.id == "aboutTable").unwrap();
    let mut out = s.tick();
    for _ in 0..300 {
        out = s.tick();
    }
    assert!((out.highlights[table].scale - 1.04).abs() < 1e-3);
    s.on_cursor_left();
    for _ in 0..300 {
        out = s.tick();
    }
    assert!((out.highlights[table].scale - 1.0).abs() < 1e-3);
    assert_eq!(out.highlights[table].bob, 0.0);
}

#[test]
fn test_load_creates_files_and_rejects_bad_scene() {
    let dir = tempfile::tempdir().unwrap();
    let s = Session::load(dir.path()).unwrap();
    assert_eq!(s.items().len(), 7);
    assert!(dir.path().join("config.ron").exists());
    assert!(dir.path().join("scene.ron").exists());

    let mut scene = SceneTable::default();
    scene.items[3].radius = Some(-1.0);
    scene.save(dir.path()).unwrap();
    assert!(matches!(
        Session::load(dir.path()),
        Err(ConfigError::InvalidScene(_))
    ));
}

#[test]
fn test_load_uses_saved_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.room.spawn = [5.0, 1.0, -3.0];
    config.save(dir.path()).unwrap();
    let s = Session::load(dir.path()).unwrap();
    assert_eq!(s.player().position, Vec3::new(5.0, 1.0, -3.0));
}
