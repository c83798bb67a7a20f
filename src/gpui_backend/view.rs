use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use gpui::prelude::*;
use gpui::{
    MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point, ScrollWheelEvent,
    Window, canvas, div, px,
};

use crate::geom::ScreenPoint;
use crate::interaction::DragState;
use crate::scene::DdaScene;
use crate::view::ZoomDirection;

use super::config::DdaViewConfig;
use super::frame::build_frame;
use super::paint::{paint_frame, to_hsla};
use super::state::DdaUiState;

/// A GPUI view that renders a [`DdaScene`] with interactive controls.
///
/// Left-drag pans, the wheel zooms by a fixed step around the viewport
/// center, and double-click recenters on the origin. Line inputs are changed
/// through a [`DdaHandle`].
#[derive(Clone)]
pub struct GpuiDdaView {
    scene: Arc<RwLock<DdaScene>>,
    state: Arc<RwLock<DdaUiState>>,
    config: DdaViewConfig,
}

impl GpuiDdaView {
    /// Create a new GPUI view for the given scene.
    ///
    /// Uses the default [`DdaViewConfig`].
    pub fn new(scene: DdaScene) -> Self {
        Self::with_config(scene, DdaViewConfig::default())
    }

    /// Create a new GPUI view with a custom configuration.
    pub fn with_config(scene: DdaScene, config: DdaViewConfig) -> Self {
        Self {
            scene: Arc::new(RwLock::new(scene)),
            state: Arc::new(RwLock::new(DdaUiState::default())),
            config,
        }
    }

    /// Get a handle for mutating the underlying scene.
    ///
    /// This is useful for driving the line inputs from async tasks.
    pub fn scene_handle(&self) -> DdaHandle {
        DdaHandle {
            scene: Arc::clone(&self.scene),
        }
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let pos = screen_point(ev.position);
        if ev.click_count >= 2 {
            write_lock(&self.scene).reset_view();
            tracing::debug!("view reset to origin");
        }

        let mut state = write_lock(&self.state);
        state.cursor = Some(pos);
        state.clear_interaction();
        if ev.click_count == 1 && state.surface_rect.is_some_and(|rect| rect.contains(pos)) {
            state.drag = Some(DragState::new(pos));
        }
        cx.notify();
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        let pos = screen_point(ev.position);
        let delta = {
            let mut state = write_lock(&self.state);
            state.cursor = Some(pos);
            let Some(mut drag) = state.drag else {
                cx.notify();
                return;
            };
            let delta = drag.update(pos, self.config.drag_threshold_px);
            state.drag = Some(drag);
            delta
        };
        if let Some(delta) = delta {
            if let Err(err) = write_lock(&self.scene).pan_by_pixels(delta) {
                tracing::warn!(%err, "pan rejected");
            }
        }
        cx.notify();
    }

    fn on_mouse_up(&mut self, ev: &MouseUpEvent, cx: &mut Context<Self>) {
        let mut state = write_lock(&self.state);
        state.cursor = Some(screen_point(ev.position));
        state.clear_interaction();
        cx.notify();
    }

    fn on_scroll(&mut self, ev: &ScrollWheelEvent, cx: &mut Context<Self>) {
        let delta = ev.delta.pixel_delta(px(self.config.wheel_line_height_px));
        let Some(direction) = ZoomDirection::from_wheel_delta(f64::from(f32::from(delta.y)))
        else {
            return;
        };
        if let Err(err) = write_lock(&self.scene).zoom(direction) {
            tracing::warn!(%err, "zoom rejected");
        }
        cx.notify();
    }
}

impl Render for GpuiDdaView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let scene = Arc::clone(&self.scene);
        let state = Arc::clone(&self.state);
        let config = self.config.clone();
        let background = read_lock(&scene).theme().background;

        div()
            .size_full()
            .bg(to_hsla(background))
            .child(
                canvas(
                    move |bounds, window, _| {
                        let mut scene = write_lock(&scene);
                        let mut state = write_lock(&state);
                        build_frame(&mut scene, &mut state, &config, bounds, window)
                    },
                    move |_, frame, window, cx| {
                        paint_frame(&frame, window, cx);
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
            .on_scroll_wheel(cx.listener(|this, ev, _, cx| {
                this.on_scroll(ev, cx);
            }))
    }
}

/// A handle for mutating a [`DdaScene`] held inside a `GpuiDdaView`.
///
/// The handle clones cheaply and can be moved into async tasks.
#[derive(Clone)]
pub struct DdaHandle {
    scene: Arc<RwLock<DdaScene>>,
}

impl DdaHandle {
    /// Read the scene state.
    ///
    /// The scene is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&DdaScene) -> R) -> R {
        f(&read_lock(&self.scene))
    }

    /// Mutate the scene state.
    ///
    /// The scene is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut DdaScene) -> R) -> R {
        f(&mut write_lock(&self.scene))
    }
}

fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f64::from(f32::from(point.x)), f64::from(f32::from(point.y)))
}

// A panic while holding the lock leaves the scene in a consistent state:
// every mutation replaces whole values.
fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
