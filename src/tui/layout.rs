//! Layout definitions for the TUI
//!
//! Menu frames are drawn as cascading boxes: each deeper frame is shifted
//! right and down inside a centred region.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Share of the screen, in percent, used by the box region
pub const BOX_REGION_PERCENT: u16 = 80;
/// Columns each level is shifted right
pub const LEVEL_INSET_X: u16 = 3;
/// Rows each level is shifted down
pub const LEVEL_INSET_Y: u16 = 2;
/// Smallest box drawn, screen permitting
pub const MIN_BOX_WIDTH: u16 = 24;
pub const MIN_BOX_HEIGHT: u16 = 8;

/// Layout regions for the review screen
pub struct ReviewLayout {
    /// Area holding the cascading menus
    pub menus: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl ReviewLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        Self {
            menus: vertical[0],
            status_bar: vertical[1],
        }
    }
}

/// Box for the frame at `level` (0 = root) when up to `max_levels` can be open
pub fn cascade_rect(area: Rect, level: usize, max_levels: usize) -> Rect {
    let region = centered_rect(BOX_REGION_PERCENT, BOX_REGION_PERCENT, area);
    // cap levels at what the width can show
    let spare_levels = max_levels
        .saturating_sub(1)
        .min(usize::from(area.width / LEVEL_INSET_X)) as u16;
    let level = level.min(usize::from(spare_levels)) as u16;

    let width = region
        .width
        .saturating_sub(spare_levels.saturating_mul(LEVEL_INSET_X))
        .max(MIN_BOX_WIDTH)
        .min(area.width);
    let height = region
        .height
        .saturating_sub(spare_levels.saturating_mul(LEVEL_INSET_Y))
        .max(MIN_BOX_HEIGHT)
        .min(area.height);

    // keep the shifted box on screen
    let x = region
        .x
        .saturating_add(level.saturating_mul(LEVEL_INSET_X))
        .min(area.right().saturating_sub(width));
    let y = region
        .y
        .saturating_add(level.saturating_mul(LEVEL_INSET_Y))
        .min(area.bottom().saturating_sub(height));

    Rect::new(x, y, width, height)
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_shift_right_and_down() {
        let area = Rect::new(0, 0, 100, 50);
        let root = cascade_rect(area, 0, 4);
        let second = cascade_rect(area, 1, 4);

        assert_eq!(second.x, root.x + LEVEL_INSET_X);
        assert_eq!(second.y, root.y + LEVEL_INSET_Y);
        assert_eq!(second.width, root.width);
        assert_eq!(second.height, root.height);
    }

    #[test]
    fn test_deepest_box_fits_region() {
        let area = Rect::new(0, 0, 100, 50);
        let region = centered_rect(BOX_REGION_PERCENT, BOX_REGION_PERCENT, area);
        let last = cascade_rect(area, 3, 4);

        assert!(last.right() <= region.right());
        assert!(last.bottom() <= region.bottom());
    }

    #[test]
    fn test_small_screen_stays_on_screen() {
        let area = Rect::new(0, 0, 20, 6);
        for level in 0..4 {
            let rect = cascade_rect(area, level, 4);
            assert!(rect.right() <= area.right());
            assert!(rect.bottom() <= area.bottom());
        }
    }

    #[test]
    fn test_huge_depth_stays_on_screen() {
        let area = Rect::new(0, 0, 120, 40);
        for level in [0, 1, 500, 29_999] {
            let rect = cascade_rect(area, level, 30_000);
            assert!(rect.right() <= area.right());
            assert!(rect.bottom() <= area.bottom());
            assert!(rect.width >= MIN_BOX_WIDTH);
        }
    }

    #[test]
    fn test_centered_rect_fixed() {
        let rect = centered_rect_fixed(50, 7, Rect::new(0, 0, 100, 30));
        assert_eq!(rect, Rect::new(25, 11, 50, 7));
    }
}
