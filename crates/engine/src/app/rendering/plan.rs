//! Top-down plan presentation.
//!
//! Draws the generated room as a floor plan: walkable floor, wall outline,
//! artwork slots on their walls, barrier and bench exclusion zones, and the
//! player as a dot with a heading line. This is the diagnostic view; a 3D
//! backend consumes the same `SceneNode` pose writes instead.

use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use crate::app::tools::{draw_overlay, OverlayData};
use crate::sim::layout::{ENTRY_MARGIN, SIDE_SETBACK};
use crate::sim::{CameraPose, RoomGeometry, WallSide};

use super::{
    draw_line, fill_circle, fill_rect, stroke_circle, stroke_rect, PlanView, Viewport,
};

const CLEAR_COLOR: [u8; 4] = [20, 22, 28, 255];
const FLOOR_COLOR: [u8; 4] = [46, 40, 34, 255];
const WALL_COLOR: [u8; 4] = [214, 205, 176, 255];
const WALKABLE_EDGE_COLOR: [u8; 4] = [66, 72, 84, 255];
const ARTWORK_LEFT_COLOR: [u8; 4] = [212, 168, 84, 255];
const ARTWORK_RIGHT_COLOR: [u8; 4] = [168, 196, 120, 255];
const BARRIER_COLOR: [u8; 4] = [140, 96, 60, 255];
const BENCH_COLOR: [u8; 4] = [120, 82, 52, 255];
const PLAYER_COLOR: [u8; 4] = [92, 220, 255, 255];
const PLAYER_DOT_RADIUS: f32 = 4.0;
const HEADING_LENGTH_PX: f32 = 14.0;
const PLAN_PADDING_PX: f32 = 24.0;
const ARTWORK_MARK_HALF_PX: i32 = 3;

pub struct PlanRenderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    viewport: Viewport,
}

impl PlanRenderer {
    pub fn new(window: Arc<Window>) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(Arc::clone(&window), size.width, size.height)?;
        Ok(Self {
            window,
            pixels,
            viewport: Viewport {
                width: size.width,
                height: size.height,
            },
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), width, height)?;
        self.viewport = Viewport { width, height };
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(width, height, window);
        Pixels::new(width, height, surface)
    }

    pub(crate) fn render(
        &mut self,
        geometry: &RoomGeometry,
        pose: &CameraPose,
        overlay: Option<&OverlayData>,
    ) -> Result<(), Error> {
        let Viewport { width, height } = self.viewport;
        if width == 0 || height == 0 {
            return Ok(());
        }

        let frame = self.pixels.frame_mut();
        for chunk in frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&CLEAR_COLOR);
        }

        // Fit the full footprint, walls included.
        let half_width = geometry.width / 2.0;
        let view = PlanView::fit(
            (-ENTRY_MARGIN - 4.0, -half_width - 4.0),
            (geometry.length + ENTRY_MARGIN + 4.0, half_width + 4.0),
            self.viewport,
            PLAN_PADDING_PX,
        );

        draw_room(frame, width, height, &view, geometry);
        draw_player(frame, width, height, &view, pose);

        if let Some(data) = overlay {
            draw_overlay(frame, width, height, data);
        }

        self.pixels.render()
    }
}

fn draw_room(frame: &mut [u8], width: u32, height: u32, view: &PlanView, geometry: &RoomGeometry) {
    let half_width = geometry.width / 2.0;

    // Floor slab between the entry overrun and the back wall.
    let (floor_left, floor_top) = view.to_px(-ENTRY_MARGIN, -half_width + SIDE_SETBACK);
    let (floor_right, floor_bottom) = view.to_px(geometry.length + ENTRY_MARGIN, half_width - SIDE_SETBACK);
    fill_rect(
        frame,
        width,
        height,
        floor_left,
        floor_top,
        floor_right - floor_left,
        floor_bottom - floor_top,
        FLOOR_COLOR,
    );

    // Wall outline around the full room footprint.
    let (wall_left, wall_top) = view.to_px(-ENTRY_MARGIN - 2.0, -half_width - 2.0);
    let (wall_right, wall_bottom) = view.to_px(geometry.length + ENTRY_MARGIN + 2.0, half_width + 2.0);
    stroke_rect(
        frame,
        width,
        height,
        wall_left,
        wall_top,
        wall_right - wall_left,
        wall_bottom - wall_top,
        WALL_COLOR,
    );

    // Walkable bounds, the rectangle the resolver actually enforces.
    let bounds = &geometry.bounds;
    let (bounds_left, bounds_top) = view.to_px(bounds.min_x, bounds.min_z);
    let (bounds_right, bounds_bottom) = view.to_px(bounds.max_x, bounds.max_z);
    stroke_rect(
        frame,
        width,
        height,
        bounds_left,
        bounds_top,
        bounds_right - bounds_left,
        bounds_bottom - bounds_top,
        WALKABLE_EDGE_COLOR,
    );

    for barrier in &geometry.barriers {
        for center_z in [barrier.left_z, barrier.right_z] {
            let (cx, cy) = view.to_px(barrier.center_x, center_z);
            stroke_circle(
                frame,
                width,
                height,
                cx,
                cy,
                view.len_px(barrier.radius),
                BARRIER_COLOR,
            );
        }
    }

    for bench in &geometry.benches {
        let (cx, cy) = view.to_px(bench.x, bench.z);
        fill_circle(
            frame,
            width,
            height,
            cx,
            cy,
            view.len_px(bench.radius),
            BENCH_COLOR,
        );
    }

    for slot in &geometry.artworks {
        let (cx, cy) = view.to_px(slot.x, slot.z);
        let color = match slot.side {
            WallSide::Left => ARTWORK_LEFT_COLOR,
            WallSide::Right => ARTWORK_RIGHT_COLOR,
        };
        fill_rect(
            frame,
            width,
            height,
            cx - ARTWORK_MARK_HALF_PX,
            cy - ARTWORK_MARK_HALF_PX,
            ARTWORK_MARK_HALF_PX * 2,
            ARTWORK_MARK_HALF_PX * 2,
            color,
        );
    }
}

fn draw_player(frame: &mut [u8], width: u32, height: u32, view: &PlanView, pose: &CameraPose) {
    let (px, py) = view.to_px(pose.position.x, pose.position.z);
    fill_circle(frame, width, height, px, py, PLAYER_DOT_RADIUS, PLAYER_COLOR);

    // Heading on the XZ plane; yaw zero faces -Z, which is up the screen.
    let rad = pose.yaw.to_radians();
    let dir_x = -rad.sin();
    let dir_z = -rad.cos();
    let tip = (
        px + (dir_x * HEADING_LENGTH_PX).round() as i32,
        py + (dir_z * HEADING_LENGTH_PX).round() as i32,
    );
    draw_line(frame, width, height, (px, py), tip, PLAYER_COLOR);
}
