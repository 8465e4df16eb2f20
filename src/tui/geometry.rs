//! # Panel Geometry
//!
//! The widget is a fixed-width panel pinned at an anchor cell. Its height
//! follows its content: it grows as items are added and shrinks as they are
//! deleted, capped at a share of the screen height. The anchor never moves;
//! only the bottom edge does.
//!
//! ```text
//! (0,0) ───────────────────────── screen
//!   │   anchor ┌──────────┐
//!   │          │ clock    │  ┐
//!   │          │ quote    │  │ chrome
//!   │          │          │  ┘
//!   │          │ [ ] item │  ┐ content (scrolls past the cap)
//!   │          │ [x] item │  ┘
//!   │          └──────────┘  ← moves with content
//! ```

use ratatui::layout::{Position, Rect};

use crate::core::config::PanelConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowGeometry {
    anchor: Position,
    width: u16,
    max_height_percent: u16,
    /// Last fitted area in screen coordinates.
    area: Rect,
}

impl WindowGeometry {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            anchor: Position::new(config.anchor_x, config.anchor_y),
            width: config.width,
            max_height_percent: config.max_height_percent.min(100),
            area: Rect::default(),
        }
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Largest height the panel may take on a screen of `screen_height` rows.
    pub fn max_height(&self, screen_height: u16) -> u16 {
        (u32::from(screen_height) * u32::from(self.max_height_percent) / 100) as u16
    }

    /// Panel width on `screen`, narrowed if the anchor leaves less room.
    pub fn width_on(&self, screen: Rect) -> u16 {
        self.width.min(screen.width.saturating_sub(self.anchor.x))
    }

    /// Resize the panel around `content_height` rows of content plus
    /// `chrome_height` rows of fixed furniture, keeping the anchor fixed.
    ///
    /// The result is clamped to the cap and to whatever part of the screen
    /// lies below and to the right of the anchor.
    pub fn fit(&mut self, content_height: u16, chrome_height: u16, screen: Rect) -> Rect {
        let preferred = content_height.saturating_add(chrome_height);
        let room_below = screen.height.saturating_sub(self.anchor.y);

        let height = preferred
            .min(self.max_height(screen.height))
            .min(room_below);
        let width = self.width_on(screen);

        self.area = Rect::new(
            screen.x.saturating_add(self.anchor.x),
            screen.y.saturating_add(self.anchor.y),
            width,
            height,
        );
        self.area
    }
}
