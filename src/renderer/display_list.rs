//! In-memory surface that records draw calls

use glam::Vec2;

use super::Surface;

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear {
        width: f32,
        height: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: String,
        alpha: f32,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: String,
        line_width: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: String,
        line_width: f32,
    },
}

/// Ordered draw calls for one or more frames
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pub cmds: Vec<DrawCmd>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last `Clear`
    pub fn last_frame(&self) -> &[DrawCmd] {
        let start = self
            .cmds
            .iter()
            .rposition(|c| matches!(c, DrawCmd::Clear { .. }))
            .unwrap_or(0);
        &self.cmds[start..]
    }

    /// Drop recorded commands, keeping the allocation
    pub fn reset(&mut self) {
        self.cmds.clear();
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, width: f32, height: f32) {
        self.cmds.push(DrawCmd::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32) {
        self.cmds.push(DrawCmd::FillCircle {
            center,
            radius,
            color: color.to_string(),
            alpha,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str, line_width: f32) {
        self.cmds.push(DrawCmd::StrokeCircle {
            center,
            radius,
            color: color.to_string(),
            line_width,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: &str, line_width: f32) {
        self.cmds.push(DrawCmd::Line {
            from,
            to,
            color: color.to_string(),
            line_width,
        });
    }
}
