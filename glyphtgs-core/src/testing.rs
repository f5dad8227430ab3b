//! In-memory fonts for tests.

use std::collections::HashMap;

use glyphtgs_fonts::{GlyphSource, OutlineSink};

#[derive(Debug, Clone, Copy)]
pub enum Cmd {
    Move(f64, f64),
    Line(f64, f64),
    Quad(f64, f64, f64, f64),
    Cubic(f64, f64, f64, f64, f64, f64),
    Close,
}

/// A font whose glyphs are lists of outline commands.
#[derive(Debug, Default)]
pub struct FakeFont {
    pub units_per_em: u16,
    cmap: HashMap<char, u16>,
    glyphs: Vec<Vec<Cmd>>,
}

impl FakeFont {
    pub fn new(units_per_em: u16) -> Self {
        Self {
            units_per_em,
            ..Self::default()
        }
    }

    /// Map `ch` to a new glyph drawn by `cmds` (empty for blank glyphs).
    #[expect(clippy::cast_possible_truncation, reason = "test fonts are tiny")]
    pub fn with_glyph(mut self, ch: char, cmds: Vec<Cmd>) -> Self {
        let id = self.glyphs.len() as u16;
        self.glyphs.push(cmds);
        self.cmap.insert(ch, id);
        self
    }

    /// Map `ch` to a rectangle spanning the given extents.
    pub fn with_rect(self, ch: char, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        self.with_glyph(
            ch,
            vec![
                Cmd::Move(min_x, min_y),
                Cmd::Line(max_x, min_y),
                Cmd::Line(max_x, max_y),
                Cmd::Line(min_x, max_y),
                Cmd::Close,
            ],
        )
    }
}

impl GlyphSource for FakeFont {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_id(&self, ch: char) -> Option<u16> {
        self.cmap.get(&ch).copied()
    }

    fn outline(&self, glyph_id: u16, sink: &mut dyn OutlineSink) -> bool {
        let Some(cmds) = self.glyphs.get(usize::from(glyph_id)) else {
            return false;
        };
        if cmds.is_empty() {
            return false;
        }
        for cmd in cmds {
            match *cmd {
                Cmd::Move(x, y) => sink.move_to(x, y),
                Cmd::Line(x, y) => sink.line_to(x, y),
                Cmd::Quad(x1, y1, x, y) => sink.quad_to(x1, y1, x, y),
                Cmd::Cubic(x1, y1, x2, y2, x, y) => sink.curve_to(x1, y1, x2, y2, x, y),
                Cmd::Close => sink.close(),
            }
        }
        true
    }
}
