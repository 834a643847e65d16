use std::sync::Arc;
use std::time::{Duration, Instant};

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{debug, info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, ExternalError, OsError};
use winit::event::{DeviceEvent, ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Fullscreen, Window, WindowBuilder};

use crate::app::metrics::{LoopMetricsSnapshot, MetricsAccumulator};
use crate::app::rendering::PlanRenderer;
use crate::app::tools::OverlayData;
use crate::sim::{
    CameraPose, CaptureFlag, GallerySimulation, InputTracker, RoomGeometry, SimConfig, SimError,
};

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub target_tps: u32,
    pub max_frame_delta: Duration,
    pub max_ticks_per_frame: u32,
    pub metrics_log_interval: Duration,
    pub overlay_visible: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "Gallery Walkthrough".to_string(),
            window_width: 1280,
            window_height: 720,
            target_tps: 60,
            max_frame_delta: Duration::from_millis(250),
            max_ticks_per_frame: 5,
            metrics_log_interval: Duration::from_secs(1),
            overlay_visible: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Simulation(#[from] SimError),
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

/// Runs the walkthrough against a generated room until the window closes.
///
/// The simulation is constructed before any windowing so that geometry or
/// config problems surface as an error return instead of a dead window.
/// Per frame the fixed-timestep accumulator decides how many ticks to run;
/// each tick consumes one input snapshot and writes the resulting pose to
/// the camera, which the plan renderer then presents.
pub fn run_app(
    config: LoopConfig,
    geometry: RoomGeometry,
    sim_config: SimConfig,
) -> Result<(), AppError> {
    let mut sim = GallerySimulation::new(geometry, sim_config)?;

    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                config.window_width as f64,
                config.window_height as f64,
            ))
            .build(&event_loop)
            .map_err(AppError::CreateWindow)?,
    );
    let mut renderer = PlanRenderer::new(Arc::clone(&window)).map_err(AppError::CreateRenderer)?;

    event_loop.set_control_flow(ControlFlow::Poll);

    let capture = CaptureFlag::new();
    let mut input = InputTracker::new(capture.clone());
    let mut pose = CameraPose::default();

    let target_tps = config.target_tps.max(1);
    let fixed_dt = Duration::from_secs_f64(1.0 / target_tps as f64);
    let fixed_dt_seconds = fixed_dt.as_secs_f32();
    let max_frame_delta = non_zero_or(config.max_frame_delta, Duration::from_millis(250));
    let max_ticks_per_frame = config.max_ticks_per_frame.max(1);
    let metrics_log_interval = non_zero_or(config.metrics_log_interval, Duration::from_secs(1));

    info!(
        target_tps,
        max_frame_delta_ms = max_frame_delta.as_millis() as u64,
        max_ticks_per_frame,
        metrics_log_interval_ms = metrics_log_interval.as_millis() as u64,
        "loop_config"
    );
    info!(
        room_length = sim.geometry().length,
        artworks = sim.geometry().artworks.len(),
        benches = sim.geometry().benches.len(),
        "scene_ready"
    );

    let mut accumulator = Duration::ZERO;
    let mut last_frame_instant = Instant::now();
    let mut metrics_accumulator = MetricsAccumulator::new(metrics_log_interval);
    let mut last_metrics = LoopMetricsSnapshot::default();
    let mut overlay_visible = config.overlay_visible;

    let window_for_loop = Arc::clone(&window);
    event_loop
        .run(move |event, window_target| match event {
            Event::WindowEvent { window_id, event } if window_id == window_for_loop.id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        info!(reason = "window_close", "shutdown_requested");
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        if let Err(error) = renderer.resize(new_size.width, new_size.height) {
                            warn!(error = %error, "renderer_resize_failed");
                            window_target.exit();
                        }
                    }
                    WindowEvent::ScaleFactorChanged { .. } => {
                        let size = window_for_loop.inner_size();
                        if let Err(error) = renderer.resize(size.width, size.height) {
                            warn!(error = %error, "renderer_resize_failed");
                            window_target.exit();
                        }
                    }
                    WindowEvent::Focused(false) => {
                        // Key-up events can be lost while unfocused; clearing
                        // everything now prevents stuck-key drift. Capture is
                        // treated as lost too and re-acquired on click.
                        input.clear_all();
                        release_capture(&window_for_loop, &capture);
                        debug!("input_cleared_on_blur");
                    }
                    WindowEvent::Focused(true) => {}
                    WindowEvent::KeyboardInput { event, .. } => {
                        if let PhysicalKey::Code(code) = event.physical_key {
                            match code {
                                KeyCode::Escape => {
                                    if event.state == ElementState::Pressed {
                                        release_capture(&window_for_loop, &capture);
                                    }
                                }
                                KeyCode::F3 => {
                                    if event.state == ElementState::Pressed && !event.repeat {
                                        overlay_visible = !overlay_visible;
                                        info!(overlay_visible, "overlay_toggled");
                                    }
                                }
                                KeyCode::F11 => {
                                    if event.state == ElementState::Pressed && !event.repeat {
                                        toggle_fullscreen(&window_for_loop);
                                    }
                                }
                                _ => input.handle_key(code, event.state),
                            }
                        }
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } => {
                        // The user gesture that acquires (or retries) capture.
                        if !capture.get() {
                            request_capture(&window_for_loop, &capture);
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        let now = Instant::now();
                        let raw_frame_dt = now.saturating_duration_since(last_frame_instant);
                        last_frame_instant = now;

                        accumulator =
                            accumulator.saturating_add(raw_frame_dt.min(max_frame_delta));
                        let plan = plan_ticks(accumulator, fixed_dt, max_ticks_per_frame);
                        accumulator = plan.remaining;

                        for _ in 0..plan.ticks_to_run {
                            let snapshot = input.snapshot_for_tick();
                            sim.tick(fixed_dt_seconds, &snapshot, &mut pose);
                            metrics_accumulator.record_tick();
                        }
                        if plan.dropped_backlog > Duration::ZERO {
                            warn!(
                                dropped_backlog_ms = plan.dropped_backlog.as_millis() as u64,
                                max_ticks_per_frame, "sim_clamp_triggered"
                            );
                        }

                        let overlay = overlay_visible.then(|| OverlayData {
                            metrics: last_metrics,
                            position: sim.player().position,
                            yaw: sim.player().yaw,
                            pitch: sim.player().pitch,
                            grounded: sim.player().is_grounded(),
                            captured: capture.get(),
                            artwork_count: sim.geometry().artworks.len(),
                            rejected_ticks: sim.rejected_ticks(),
                        });
                        if let Err(error) =
                            renderer.render(sim.geometry(), &pose, overlay.as_ref())
                        {
                            warn!(error = %error, "renderer_draw_failed");
                            window_target.exit();
                        }

                        metrics_accumulator.record_frame(raw_frame_dt);
                        if let Some(snapshot) = metrics_accumulator.maybe_snapshot(now) {
                            last_metrics = snapshot;
                            info!(
                                fps = snapshot.fps,
                                tps = snapshot.tps,
                                frame_time_ms = snapshot.frame_time_ms,
                                rejected_ticks = sim.rejected_ticks(),
                                "loop_metrics"
                            );
                        }
                    }
                    _ => {}
                }
            }
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } => {
                // Raw relative motion; the tracker discards it unless
                // capture is held.
                input.accumulate_pointer(delta.0, delta.1);
            }
            Event::AboutToWait => {
                window_for_loop.request_redraw();
            }
            Event::LoopExiting => {
                input.clear_all();
                info!("shutdown");
            }
            _ => {}
        })
        .map_err(AppError::EventLoopRun)
}

/// Asks the platform for pointer capture. A rejection is logged and left
/// for the next click to retry; it is never surfaced as a fatal error.
fn request_capture(window: &Window, capture: &CaptureFlag) {
    let locked = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_: ExternalError| window.set_cursor_grab(CursorGrabMode::Confined));
    match locked {
        Ok(()) => {
            window.set_cursor_visible(false);
            capture.set(true);
            debug!("pointer_captured");
        }
        Err(error) => {
            warn!(error = %error, "capture_request_failed");
        }
    }
}

/// Drops pointer capture. Safe to call when capture is not held.
fn release_capture(window: &Window, capture: &CaptureFlag) {
    if let Err(error) = window.set_cursor_grab(CursorGrabMode::None) {
        debug!(error = %error, "capture_release_failed");
    }
    window.set_cursor_visible(true);
    if capture.get() {
        capture.set(false);
        debug!("pointer_released");
    }
}

fn toggle_fullscreen(window: &Window) {
    if window.fullscreen().is_some() {
        window.set_fullscreen(None);
        info!(fullscreen = false, "display_mode_changed");
    } else {
        window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        info!(fullscreen = true, "display_mode_changed");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TickPlan {
    ticks_to_run: u32,
    remaining: Duration,
    dropped_backlog: Duration,
}

/// Converts accumulated frame time into a bounded number of fixed ticks.
/// Anything beyond the per-frame cap is dropped, not deferred, so a stall
/// cannot snowball into a death spiral of catch-up ticks.
fn plan_ticks(accumulated: Duration, fixed_dt: Duration, max_ticks_per_frame: u32) -> TickPlan {
    let mut remaining = accumulated;
    let mut ticks_to_run = 0u32;
    while remaining >= fixed_dt && ticks_to_run < max_ticks_per_frame {
        remaining = remaining.saturating_sub(fixed_dt);
        ticks_to_run = ticks_to_run.saturating_add(1);
    }

    if remaining >= fixed_dt {
        TickPlan {
            ticks_to_run,
            remaining: Duration::ZERO,
            dropped_backlog: remaining,
        }
    } else {
        TickPlan {
            ticks_to_run,
            remaining,
            dropped_backlog: Duration::ZERO,
        }
    }
}

fn non_zero_or(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}
