use glam::Vec3;

use crate::app::metrics::LoopMetricsSnapshot;
use crate::app::rendering::{fill_rect, put_pixel, stroke_rect};

const GLYPH_WIDTH: i32 = 3;
const GLYPH_HEIGHT: i32 = 5;
const TEXT_SCALE: i32 = 2;
const GLYPH_ADVANCE: i32 = (GLYPH_WIDTH + 1) * TEXT_SCALE;
const LINE_ADVANCE: i32 = (GLYPH_HEIGHT + 2) * TEXT_SCALE;
const OVERLAY_PADDING: i32 = 12;
const PANEL_INSET_X: i32 = 8;
const PANEL_INSET_Y: i32 = 6;
const TEXT_PRIMARY_COLOR: [u8; 4] = [244, 248, 252, 255];
const TEXT_DIM_COLOR: [u8; 4] = [176, 198, 220, 255];
const PANEL_BG_COLOR: [u8; 4] = [10, 12, 16, 210];
const PANEL_BORDER_COLOR: [u8; 4] = [92, 106, 126, 255];

/// Everything the F3 overlay shows for one frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OverlayData {
    pub metrics: LoopMetricsSnapshot,
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub grounded: bool,
    pub captured: bool,
    pub artwork_count: usize,
    pub rejected_ticks: u64,
}

pub(crate) fn draw_overlay(frame: &mut [u8], width: u32, height: u32, data: &OverlayData) {
    if width == 0 || height == 0 {
        return;
    }

    let lines = build_overlay_lines(data);
    let longest = lines
        .iter()
        .map(|line| line.chars().count() as i32)
        .max()
        .unwrap_or(0);
    let panel_width = longest * GLYPH_ADVANCE + PANEL_INSET_X * 2;
    let panel_height = lines.len() as i32 * LINE_ADVANCE + PANEL_INSET_Y * 2;
    let panel_left = OVERLAY_PADDING - PANEL_INSET_X / 2;
    let panel_top = OVERLAY_PADDING - PANEL_INSET_Y / 2;
    fill_rect(
        frame,
        width,
        height,
        panel_left,
        panel_top,
        panel_width,
        panel_height,
        PANEL_BG_COLOR,
    );
    stroke_rect(
        frame,
        width,
        height,
        panel_left,
        panel_top,
        panel_width,
        panel_height,
        PANEL_BORDER_COLOR,
    );

    let mut y = OVERLAY_PADDING;
    for line in &lines {
        let color = if line.contains(':') {
            TEXT_PRIMARY_COLOR
        } else {
            TEXT_DIM_COLOR
        };
        draw_text(frame, width, height, OVERLAY_PADDING, y, line, color);
        y += LINE_ADVANCE;
    }
}

fn build_overlay_lines(data: &OverlayData) -> Vec<String> {
    vec![
        "PERF".to_string(),
        format!("FPS: {:.1}", data.metrics.fps),
        format!("TPS: {:.1}", data.metrics.tps),
        format!("FRAME: {:.2} MS", data.metrics.frame_time_ms),
        String::new(),
        "PLAYER".to_string(),
        format!(
            "POS: {:.1}, {:.1}, {:.1}",
            data.position.x, data.position.y, data.position.z
        ),
        format!("YAW: {:.1} PITCH: {:.1}", data.yaw, data.pitch),
        format!(
            "GROUND: {}",
            if data.grounded { "YES" } else { "AIR" }
        ),
        format!(
            "CAPTURE: {}",
            if data.captured { "ON" } else { "OFF" }
        ),
        format!("ROLLBACKS: {}", data.rejected_ticks),
        String::new(),
        "ROOM".to_string(),
        format!("ARTWORKS: {}", data.artwork_count),
    ]
}

fn draw_text(
    frame: &mut [u8],
    width: u32,
    height: u32,
    left: i32,
    top: i32,
    text: &str,
    color: [u8; 4],
) {
    let mut x = left;
    for ch in text.chars() {
        draw_glyph(frame, width, height, x, top, ch, color);
        x += GLYPH_ADVANCE;
    }
}

fn draw_glyph(
    frame: &mut [u8],
    width: u32,
    height: u32,
    left: i32,
    top: i32,
    ch: char,
    color: [u8; 4],
) {
    let rows = glyph(ch);
    for (row_index, row) in rows.iter().enumerate() {
        for column in 0..GLYPH_WIDTH {
            if row & (0b100 >> column) == 0 {
                continue;
            }
            for sy in 0..TEXT_SCALE {
                for sx in 0..TEXT_SCALE {
                    put_pixel(
                        frame,
                        width,
                        height,
                        left + column * TEXT_SCALE + sx,
                        top + row_index as i32 * TEXT_SCALE + sy,
                        color,
                    );
                }
            }
        }
    }
}

/// 3x5 bitmap per character, one byte per row, bit 2 leftmost. Uppercase
/// and the handful of punctuation the overlay lines use.
fn glyph(ch: char) -> [u8; 5] {
    match ch.to_ascii_uppercase() {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b011, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b010, 0b001],
        'R' => [0b110, 0b101, 0b110, 0b110, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b011, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        ' ' => [0b000; 5],
        _ => [0b111; 5],
    }
}
