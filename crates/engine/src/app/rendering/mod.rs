mod plan;

pub use plan::PlanRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Uniform world-to-screen mapping for the top-down plan: world X runs along
/// screen X, world Z down screen Y, scaled to fit the room in the viewport
/// with a fixed padding and centered on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PlanView {
    scale: f32,
    origin_x: f32,
    origin_y: f32,
}

impl PlanView {
    pub(crate) fn fit(
        world_min: (f32, f32),
        world_max: (f32, f32),
        viewport: Viewport,
        padding: f32,
    ) -> Self {
        let span_x = (world_max.0 - world_min.0).max(1.0);
        let span_z = (world_max.1 - world_min.1).max(1.0);
        let avail_w = (viewport.width as f32 - padding * 2.0).max(1.0);
        let avail_h = (viewport.height as f32 - padding * 2.0).max(1.0);
        let scale = (avail_w / span_x).min(avail_h / span_z);

        let center_x = (world_min.0 + world_max.0) * 0.5;
        let center_z = (world_min.1 + world_max.1) * 0.5;
        Self {
            scale,
            origin_x: viewport.width as f32 * 0.5 - center_x * scale,
            origin_y: viewport.height as f32 * 0.5 - center_z * scale,
        }
    }

    pub(crate) fn to_px(&self, x: f32, z: f32) -> (i32, i32) {
        (
            (self.origin_x + x * self.scale).round() as i32,
            (self.origin_y + z * self.scale).round() as i32,
        )
    }

    pub(crate) fn len_px(&self, world_len: f32) -> f32 {
        world_len * self.scale
    }
}

pub(crate) fn put_pixel(frame: &mut [u8], width: u32, height: u32, x: i32, y: i32, color: [u8; 4]) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let index = (y as usize * width as usize + x as usize) * 4;
    if let Some(pixel) = frame.get_mut(index..index + 4) {
        pixel.copy_from_slice(&color);
    }
}

pub(crate) fn fill_rect(
    frame: &mut [u8],
    width: u32,
    height: u32,
    left: i32,
    top: i32,
    rect_width: i32,
    rect_height: i32,
    color: [u8; 4],
) {
    for y in top..top + rect_height {
        for x in left..left + rect_width {
            put_pixel(frame, width, height, x, y, color);
        }
    }
}

pub(crate) fn stroke_rect(
    frame: &mut [u8],
    width: u32,
    height: u32,
    left: i32,
    top: i32,
    rect_width: i32,
    rect_height: i32,
    color: [u8; 4],
) {
    if rect_width <= 0 || rect_height <= 0 {
        return;
    }
    let right = left + rect_width - 1;
    let bottom = top + rect_height - 1;
    for x in left..=right {
        put_pixel(frame, width, height, x, top, color);
        put_pixel(frame, width, height, x, bottom, color);
    }
    for y in top..=bottom {
        put_pixel(frame, width, height, left, y, color);
        put_pixel(frame, width, height, right, y, color);
    }
}

pub(crate) fn fill_circle(
    frame: &mut [u8],
    width: u32,
    height: u32,
    center_x: i32,
    center_y: i32,
    radius: f32,
    color: [u8; 4],
) {
    let extent = radius.ceil() as i32;
    let radius_sq = radius * radius;
    for dy in -extent..=extent {
        for dx in -extent..=extent {
            if (dx * dx + dy * dy) as f32 <= radius_sq {
                put_pixel(frame, width, height, center_x + dx, center_y + dy, color);
            }
        }
    }
}

pub(crate) fn stroke_circle(
    frame: &mut [u8],
    width: u32,
    height: u32,
    center_x: i32,
    center_y: i32,
    radius: f32,
    color: [u8; 4],
) {
    let extent = radius.ceil() as i32 + 1;
    let outer_sq = radius * radius;
    let inner = (radius - 1.2).max(0.0);
    let inner_sq = inner * inner;
    for dy in -extent..=extent {
        for dx in -extent..=extent {
            let dist_sq = (dx * dx + dy * dy) as f32;
            if dist_sq <= outer_sq && dist_sq >= inner_sq {
                put_pixel(frame, width, height, center_x + dx, center_y + dy, color);
            }
        }
    }
}

pub(crate) fn draw_line(
    frame: &mut [u8],
    width: u32,
    height: u32,
    from: (i32, i32),
    to: (i32, i32),
    color: [u8; 4],
) {
    let (mut x, mut y) = from;
    let dx = (to.0 - from.0).abs();
    let dy = -(to.1 - from.1).abs();
    let step_x = if from.0 < to.0 { 1 } else { -1 };
    let step_y = if from.1 < to.1 { 1 } else { -1 };
    let mut error = dx + dy;

    loop {
        put_pixel(frame, width, height, x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let doubled = error * 2;
        if doubled >= dy {
            error += dy;
            x += step_x;
        }
        if doubled <= dx {
            error += dx;
            y += step_y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport {
            width: 200,
            height: 100,
        }
    }

    #[test]
    fn fit_centers_the_world_rectangle() {
        let view = PlanView::fit((-10.0, -5.0), (10.0, 5.0), viewport(), 10.0);
        assert_eq!(view.to_px(0.0, 0.0), (100, 50));
    }

    #[test]
    fn fit_uses_the_tighter_axis_for_scale() {
        // World is 20 x 10; viewport (after padding) is 180 x 80, so the Z
        // axis constrains the scale at 8 px per unit.
        let view = PlanView::fit((-10.0, -5.0), (10.0, 5.0), viewport(), 10.0);
        assert!((view.len_px(1.0) - 8.0).abs() < 1e-3);

        let (left_x, _) = view.to_px(-10.0, 0.0);
        let (right_x, _) = view.to_px(10.0, 0.0);
        assert_eq!(right_x - left_x, 160);
    }

    #[test]
    fn z_increases_down_the_screen() {
        let view = PlanView::fit((-10.0, -5.0), (10.0, 5.0), viewport(), 10.0);
        let (_, near) = view.to_px(0.0, -5.0);
        let (_, far) = view.to_px(0.0, 5.0);
        assert!(far > near);
    }

    #[test]
    fn put_pixel_ignores_out_of_bounds_writes() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        put_pixel(&mut frame, 4, 4, -1, 0, [255; 4]);
        put_pixel(&mut frame, 4, 4, 4, 0, [255; 4]);
        put_pixel(&mut frame, 4, 4, 0, 4, [255; 4]);
        assert!(frame.iter().all(|&byte| byte == 0));

        put_pixel(&mut frame, 4, 4, 3, 3, [9, 8, 7, 255]);
        assert_eq!(&frame[(3 * 4 + 3) * 4..(3 * 4 + 3) * 4 + 4], &[9, 8, 7, 255]);
    }

    #[test]
    fn fill_rect_clips_to_the_frame() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        fill_rect(&mut frame, 4, 4, 2, 2, 10, 10, [1, 1, 1, 255]);
        // Only the 2x2 in-bounds corner is written.
        let written = frame.chunks_exact(4).filter(|px| px[3] == 255).count();
        assert_eq!(written, 4);
    }

    #[test]
    fn draw_line_connects_endpoints() {
        let mut frame = vec![0u8; 8 * 8 * 4];
        draw_line(&mut frame, 8, 8, (0, 0), (7, 7), [5, 5, 5, 255]);
        let at = |x: usize, y: usize| &frame[(y * 8 + x) * 4..(y * 8 + x) * 4 + 4];
        assert_eq!(at(0, 0)[3], 255);
        assert_eq!(at(7, 7)[3], 255);
    }
}
