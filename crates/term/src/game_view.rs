//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Outcome, Phase};
use crate::fb::{Rgb, Style, Surface};
use crate::types::GRID_SIZE;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const HEAD_FG: Rgb = Rgb::new(46, 125, 50);
const BODY_FG: Rgb = Rgb::new(76, 175, 80);
const FOOD_FG: Rgb = Rgb::new(244, 67, 54);

/// A lightweight terminal view for the snake board and HUD.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into a fresh framebuffer sized to the viewport.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> Surface {
        let mut fb = Surface::new(viewport.width, viewport.height);
        fb.clear(Style::default());

        let board_px_w = (GRID_SIZE as u16) * self.cell_w;
        let board_px_h = (GRID_SIZE as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        // Play area, then border around it.
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            board_px_w,
            board_px_h,
            ' ',
            Style::plain(BOARD_BG, BOARD_BG),
        );
        self.draw_border(
            &mut fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            Style::plain(BORDER_FG, Rgb::new(0, 0, 0)),
        );

        // Food under the snake in draw order; the engine keeps them disjoint.
        self.fill_cell(
            &mut fb,
            start_x,
            start_y,
            snap.food.x as u16,
            snap.food.y as u16,
            '●',
            Style::plain(FOOD_FG, BOARD_BG),
        );

        for (i, cell) in snap.body.iter().enumerate() {
            let style = if i == 0 {
                Style {
                    bold: true,
                    ..Style::plain(HEAD_FG, BOARD_BG)
                }
            } else {
                Style::plain(BODY_FG, BOARD_BG)
            };
            self.fill_cell(
                &mut fb,
                start_x,
                start_y,
                cell.x as u16,
                cell.y as u16,
                '█',
                style,
            );
        }

        self.draw_side_panel(&mut fb, snap, viewport, start_x, start_y, frame_w);
        self.draw_overlay(&mut fb, snap, start_x, start_y, frame_w, frame_h);

        fb
    }

    fn draw_border(&self, fb: &mut Surface, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut Surface,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut Surface,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        if viewport.width - panel_x < 12 {
            return;
        }

        let label = Style {
            bold: true,
            ..Style::default()
        };
        let value = Style::default();
        let hint = Style {
            dim: true,
            ..Style::default()
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{} ms", snap.tick_interval_ms), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        for line in [
            "arrows/wasd steer",
            "space start",
            "r reset",
            "q quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut Surface,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let mut lines: Vec<String> = Vec::new();
        match snap.phase {
            Phase::Running => return,
            Phase::Idle => lines.push("PRESS SPACE TO START".to_string()),
            Phase::Ended => {
                let banner = match snap.outcome {
                    Some(Outcome::Won) => "YOU WIN",
                    _ => "GAME OVER",
                };
                lines.push(banner.to_string());
                lines.push(format!("FINAL SCORE {}", snap.score));
                lines.push("R TO PLAY AGAIN".to_string());
            }
        }

        let style = Style {
            bold: true,
            ..Style::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        let base_y = start_y + frame_h / 2;
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, base_y.saturating_add(i as u16), text, style);
        }
    }
}
