//! One visit to the room: input in, per-tick pipeline, frame snapshot out.

use std::path::Path;

use glam::{Vec2, Vec3};
use tracing::{debug, info};
use whiteroom_config::{Config, ConfigError, SceneTable};
use whiteroom_input::{
    Action, ActionState, InputMap, KeyboardState, PointerState, RawKeyEvent, wheel_pixels,
};
use whiteroom_interact::{
    ActionEvent, HighlightState, InteractiveItem, PropHighlights, ProximityTracker, Trigger, pick,
};
use whiteroom_math::RoomBounds;
use whiteroom_physics::{CollisionResolver, OrientedBoxRegistry, clamp_to_room, walkable_bounds};
use whiteroom_player::{
    AnimationState, CameraControlState, CameraPose, FollowCamera, MoveInput, MovementIntegrator,
    PlayerTransform,
};
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::frame_clock::{FIXED_DT, FrameClock};
use crate::overlay::{Overlay, OverlayRouter};

/// Key bindings file next to `config.ron`.
pub const INPUT_FILE: &str = "input.ron";

/// Everything the renderer and UI need after a frame.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub player: PlayerTransform,
    pub shadow_decal: Vec3,
    pub animation: AnimationState,
    pub camera: CameraPose,
    pub near_item: Option<String>,
    /// The near item differs from the previous frame's.
    pub near_changed: bool,
    pub hovered_item: Option<String>,
    /// Actions raised this frame, already routed.
    pub events: Vec<ActionEvent>,
    /// Per item, in scene order.
    pub highlights: Vec<HighlightState>,
    pub overlay: Overlay,
    pub controls_locked: bool,
    /// Collider corners, only with `debug.show_colliders`.
    pub collider_outlines: Vec<[Vec3; 8]>,
}

pub struct Session {
    config: Config,
    items: Vec<InteractiveItem>,
    registry: OrientedBoxRegistry,
    resolver: CollisionResolver,
    integrator: MovementIntegrator,
    walkable: RoomBounds,
    player: PlayerTransform,
    animation: AnimationState,
    camera_control: CameraControlState,
    camera: FollowCamera,
    proximity: ProximityTracker,
    highlights: PropHighlights,
    keyboard: KeyboardState,
    pointer: PointerState,
    input_map: InputMap,
    actions: ActionState,
    overlay: OverlayRouter,
    host_locked: bool,
    clock: FrameClock,
    viewport: Vec2,
    hovered: Option<usize>,
    pending_clicks: Vec<ActionEvent>,
}

impl Session {
    /// Build a session from an already loaded config and scene.
    pub fn new(config: Config, scene: SceneTable) -> Result<Self, ConfigError> {
        scene.validate()?;
        let items: Vec<InteractiveItem> =
            scene.items.iter().map(InteractiveItem::from_spec).collect();
        let registry = OrientedBoxRegistry::from_items(&scene.items);
        let player = PlayerTransform::spawn(&config.room);
        let camera_control = CameraControlState::new(&config.camera);
        let walkable = walkable_bounds(&config.room);
        let mut camera = FollowCamera::new(&config.camera, &config.room);
        camera.snap(&camera_control, player.position);

        info!(
            "Session started: {} items, {} colliders, spawn ({:.1}, {:.1}, {:.1})",
            items.len(),
            registry.len(),
            player.position.x,
            player.position.y,
            player.position.z,
        );

        Ok(Self {
            resolver: CollisionResolver::from_config(&config.collision),
            integrator: MovementIntegrator::new(&config.movement, walkable),
            walkable,
            proximity: ProximityTracker::new(&config.interaction),
            highlights: PropHighlights::new(&config.interaction, items.len()),
            animation: AnimationState::Idle,
            keyboard: KeyboardState::new(),
            pointer: PointerState::new(),
            input_map: InputMap::default(),
            actions: ActionState::new(),
            overlay: OverlayRouter::new(),
            host_locked: false,
            clock: FrameClock::new(),
            viewport: Vec2::ZERO,
            hovered: None,
            pending_clicks: Vec::new(),
            config,
            items,
            registry,
            player,
            camera_control,
            camera,
        })
    }

    /// Load `config.ron`, `scene.ron` and `input.ron` from `config_dir`,
    /// writing defaults for the first two when missing.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config = Config::load_or_create(config_dir)?;
        Self::load_with_config(config_dir, config)
    }

    /// [`load`](Self::load), with logging installed from the loaded config
    /// before the scene is read. Logs go to `config_dir/logs` in debug
    /// builds.
    pub fn launch(config_dir: &Path) -> Result<Self, ConfigError> {
        let config = Config::load_or_create(config_dir)?;
        whiteroom_log::init_logging(
            Some(&config_dir.join("logs")),
            cfg!(debug_assertions),
            Some(&config),
        );
        Self::load_with_config(config_dir, config)
    }

    fn load_with_config(config_dir: &Path, config: Config) -> Result<Self, ConfigError> {
        let scene = SceneTable::load_or_create(config_dir)?;
        let input_map = InputMap::load(&config_dir.join(INPUT_FILE));
        Ok(Self::new(config, scene)?.with_input_map(input_map))
    }

    #[must_use]
    pub fn with_input_map(mut self, input_map: InputMap) -> Self {
        self.input_map = input_map;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn items(&self) -> &[InteractiveItem] {
        &self.items
    }

    pub fn player(&self) -> &PlayerTransform {
        &self.player
    }

    pub fn camera_control(&self) -> &CameraControlState {
        &self.camera_control
    }

    pub fn camera_pose(&self) -> CameraPose {
        self.camera.pose()
    }

    pub fn follow_camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn near_item(&self) -> Option<&InteractiveItem> {
        self.proximity.near().and_then(|i| self.items.get(i))
    }

    pub fn hovered_item(&self) -> Option<&InteractiveItem> {
        self.hovered.and_then(|i| self.items.get(i))
    }

    pub fn overlay(&self) -> &Overlay {
        self.overlay.current()
    }

    /// Links raised since the last call, for the host to open.
    pub fn take_pending_urls(&mut self) -> Vec<String> {
        self.overlay.take_pending_urls()
    }

    /// True while an overlay is open or the host has locked input.
    pub fn controls_locked(&self) -> bool {
        self.host_locked || self.overlay.is_open()
    }

    /// Lock or unlock input from outside the overlay router, as a host with
    /// its own modal UI would.
    pub fn set_controls_locked(&mut self, locked: bool) {
        let was_locked = self.controls_locked();
        self.host_locked = locked;
        self.lock_changed(was_locked);
    }

    /// Close the open overlay (Escape or its close button).
    pub fn close_overlay(&mut self) {
        let was_locked = self.controls_locked();
        if self.overlay.close() {
            self.lock_changed(was_locked);
        }
    }

    fn lock_changed(&mut self, was_locked: bool) {
        match (was_locked, self.controls_locked()) {
            (false, true) => {
                self.keyboard.release_all();
                self.actions.clear();
                self.hovered = None;
                self.pending_clicks.clear();
                debug!("controls locked");
            }
            (true, false) => debug!("controls unlocked"),
            _ => {}
        }
    }

    /// Move the avatar directly and snap the camera behind it.
    pub fn place_player(&mut self, position: Vec3) {
        if !position.is_finite() {
            return;
        }
        self.player.position = position;
        clamp_to_room(&mut self.player.position, &self.walkable);
        self.camera.snap(&self.camera_control, self.player.position);
    }

    /// Window size in the same units as cursor positions.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    pub fn on_key_event(&mut self, event: &KeyEvent) {
        if let Some(event) = RawKeyEvent::from_winit(event) {
            self.on_key(event);
        }
    }

    /// Key presses are dropped while locked; releases always go through.
    /// Escape closes the open overlay.
    pub fn on_key(&mut self, event: RawKeyEvent) {
        if event.down && !event.repeat && event.code == KeyCode::Escape {
            self.close_overlay();
            return;
        }
        if event.down && self.controls_locked() {
            return;
        }
        self.keyboard.apply(event);
    }

    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        self.pointer.on_cursor_moved(x, y);
        let right_held = self.pointer.is_button_pressed(MouseButton::Right);
        let locked = self.controls_locked();
        self.camera_control
            .pointer_move(self.pointer.position(), right_held, locked);
    }

    /// Right button drives free-look; a left press picks the prop under the
    /// cursor.
    pub fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let went_down = self.pointer.on_button(button, state);
        let locked = self.controls_locked();
        match state {
            ElementState::Pressed => {
                self.camera_control
                    .pointer_down(button, self.pointer.position(), locked);
                if button == MouseButton::Left
                    && went_down
                    && !locked
                    && let Some(i) = self.pick_at_pointer()
                {
                    debug!(item = %self.items[i].id, "click");
                    self.pending_clicks
                        .push(ActionEvent::new(&self.items[i], Trigger::Click));
                }
            }
            ElementState::Released => self.camera_control.pointer_up(button),
        }
    }

    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        let pixels = wheel_pixels(delta);
        let locked = self.controls_locked();
        self.camera_control.wheel(pixels, locked);
    }

    pub fn on_cursor_entered(&mut self) {
        self.pointer.on_cursor_entered();
    }

    pub fn on_cursor_left(&mut self) {
        self.pointer.on_cursor_left();
        self.camera_control.pointer_leave();
        self.hovered = None;
    }

    /// Window lost focus: nothing stays held.
    pub fn on_focus_lost(&mut self) {
        self.keyboard.release_all();
        self.pointer.on_blur();
        self.camera_control.blur();
    }

    fn pick_at_pointer(&self) -> Option<usize> {
        if !self.pointer.is_in_window() {
            return None;
        }
        let (origin, dir) =
            self.camera
                .pose()
                .screen_ray(self.pointer.position(), self.viewport, self.camera.fov_y)?;
        let interaction = &self.config.interaction;
        pick(
            &self.items,
            origin,
            dir,
            interaction.pick_radius,
            interaction.pick_height,
        )
        .map(|hit| hit.index)
    }

    fn route(&mut self, event: &ActionEvent) {
        let was_locked = self.controls_locked();
        if self.overlay.route(event) {
            self.lock_changed(was_locked);
        }
    }

    /// Run exactly one fixed tick.
    pub fn tick(&mut self) -> FrameOutput {
        let mut events = Vec::new();
        let near_changed = self.step(&mut events);
        self.snapshot(events, near_changed)
    }

    /// Run as many fixed ticks as `frame_time` seconds of host time cover.
    /// Events from all of them are returned together.
    pub fn advance(&mut self, frame_time: f64) -> FrameOutput {
        let ticks = self.clock.advance(frame_time);
        let mut events = Vec::new();
        let mut near_changed = false;
        for _ in 0..ticks {
            near_changed |= self.step(&mut events);
        }
        self.snapshot(events, near_changed)
    }

    /// Input, movement, collision, room clamp, proximity, camera, then
    /// highlight. Returns whether the near item changed.
    fn step(&mut self, events: &mut Vec<ActionEvent>) -> bool {
        self.actions.refresh(&self.input_map, &self.keyboard);
        let locked = self.controls_locked();

        let input = MoveInput::from_actions(&self.actions);
        self.animation =
            self.integrator
                .step(&mut self.player, &input, self.camera_control.yaw, locked);
        self.resolver
            .resolve(&self.registry, &mut self.player.position);
        clamp_to_room(&mut self.player.position, &self.walkable);

        let interact = self.actions.is_active(Action::Interact)
            || self.actions.was_pressed(Action::Interact);
        let proximity = self.proximity.update(
            &self.items,
            self.player.position,
            interact,
            locked,
            &mut self.camera_control,
        );
        self.camera
            .update(&self.camera_control, self.player.position);

        self.hovered = if locked {
            None
        } else {
            self.pick_at_pointer()
        };
        self.highlights
            .update(FIXED_DT as f32, proximity.near, self.hovered);

        // Whatever opens an overlay swallows the events queued behind it.
        let mut raised = std::mem::take(&mut self.pending_clicks);
        raised.extend(proximity.event);
        for event in raised {
            if self.controls_locked() {
                break;
            }
            self.route(&event);
            events.push(event);
        }

        self.keyboard.end_tick();
        proximity.changed
    }

    fn snapshot(&self, events: Vec<ActionEvent>, near_changed: bool) -> FrameOutput {
        FrameOutput {
            player: self.player,
            shadow_decal: self.player.shadow_decal(),
            animation: self.animation,
            camera: self.camera.pose(),
            near_item: self.near_item().map(|item| item.id.clone()),
            near_changed,
            hovered_item: self.hovered_item().map(|item| item.id.clone()),
            events,
            highlights: self.highlights.states().to_vec(),
            overlay: self.overlay.current().clone(),
            controls_locked: self.controls_locked(),
            collider_outlines: if self.config.debug.show_colliders {
                self.registry.outlines()
            } else {
                Vec::new()
            },
        }
    }
}
