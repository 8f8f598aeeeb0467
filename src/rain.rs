//! Column state for the falling-glyph background animation.
//!
//! [`RainField`] tracks one integer depth per glyph column and knows nothing
//! about canvases: each [`RainField::advance`] call returns the glyphs to
//! paint for one frame, with randomness injected by the caller. The render
//! layer owns the timer, the 2d context and the trail fade.

/// Every glyph is drawn from this pool.
pub const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ123456789@#$%^&*()*&^%+-/~{[|`]}";

/// Glyph cell size in CSS pixels. Also the column width.
pub const FONT_SIZE: u32 = 10;

/// Frame interval for the animation timer.
pub const TICK_MS: u64 = 35;

/// Translucent backdrop color painted each frame to fade older glyphs.
pub const TRAIL_FILL: &str = "rgba(10, 10, 15, 0.04)";

/// Fill color for freshly drawn glyphs.
pub const GLYPH_FILL: &str = "#00ffff";

/// A column below the viewport respawns at the top only when the roll
/// exceeds this, which staggers the streams instead of looping them in
/// lockstep.
const RESET_THRESHOLD: f64 = 0.975;

/// One glyph to paint this frame, in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub x: f64,
    pub y: f64,
    pub ch: char,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RainField {
    font_size: u32,
    depths: Vec<u32>,
}

impl RainField {
    /// Builds one column per `font_size` pixels of width, every stream
    /// starting just below the top edge.
    pub fn new(width_px: u32, font_size: u32) -> Self {
        let columns = width_px.div_ceil(font_size) as usize;
        RainField {
            font_size,
            depths: vec![1; columns],
        }
    }

    pub fn columns(&self) -> usize {
        self.depths.len()
    }

    pub fn depths(&self) -> &[u32] {
        &self.depths
    }

    /// Grows the field to cover a wider viewport. Newly exposed columns start
    /// at depth 1; existing streams keep falling where they were. The field
    /// never shrinks, so narrowing the window leaves off-screen columns
    /// ticking harmlessly.
    pub fn resize(&mut self, width_px: u32) {
        let columns = width_px.div_ceil(self.font_size) as usize;
        if columns > self.depths.len() {
            self.depths.resize(columns, 1);
        }
    }

    /// Steps every column one cell down and reports the glyphs to draw.
    ///
    /// `rng` must yield values in `[0, 1)`; it picks each column's glyph and
    /// rolls for respawn once the stream has left the bottom of the viewport.
    pub fn advance<R: FnMut() -> f64>(&mut self, height_px: u32, mut rng: R) -> Vec<Glyph> {
        let font_size = self.font_size;
        self.depths
            .iter_mut()
            .enumerate()
            .map(|(column, depth)| {
                let pick = (rng() * CHARSET.len() as f64) as usize % CHARSET.len();
                let glyph = Glyph {
                    x: (column as u32 * font_size) as f64,
                    y: (*depth * font_size) as f64,
                    ch: CHARSET[pick] as char,
                };
                if *depth * font_size > height_px && rng() > RESET_THRESHOLD {
                    *depth = 0;
                }
                *depth += 1;
                glyph
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cycles through a fixed list of rolls.
    fn scripted(rolls: Vec<f64>) -> impl FnMut() -> f64 {
        let mut at = 0;
        move || {
            let roll = rolls[at % rolls.len()];
            at += 1;
            roll
        }
    }

    #[test]
    fn column_count_scales_with_width() {
        assert_eq!(RainField::new(800, FONT_SIZE).columns(), 80);
        assert_eq!(RainField::new(1600, FONT_SIZE).columns(), 160);
        // Partial columns still get a stream.
        assert_eq!(RainField::new(805, FONT_SIZE).columns(), 81);
    }

    #[test]
    fn streams_start_just_below_the_top() {
        let field = RainField::new(300, FONT_SIZE);
        assert!(field.depths().iter().all(|&d| d == 1));
    }

    #[test]
    fn advance_emits_one_glyph_per_column_at_cell_coordinates() {
        let mut field = RainField::new(30, 10);
        let glyphs = field.advance(600, scripted(vec![0.0]));

        assert_eq!(glyphs.len(), 3);
        assert_eq!(glyphs[0], Glyph { x: 0.0, y: 10.0, ch: 'A' });
        assert_eq!(glyphs[1].x, 10.0);
        assert_eq!(glyphs[2].x, 20.0);
        assert_eq!(field.depths(), &[2, 2, 2]);
    }

    #[test]
    fn glyphs_are_always_drawn_from_the_charset() {
        let mut field = RainField::new(100, 10);
        let mut roll = 0.05;
        let glyphs = field.advance(600, move || {
            roll = (roll + 0.13) % 1.0;
            roll
        });
        for glyph in glyphs {
            assert!(CHARSET.contains(&(glyph.ch as u8)), "{:?}", glyph.ch);
        }
    }

    #[test]
    fn streams_above_the_bottom_never_respawn() {
        let mut field = RainField::new(10, 10);
        // High rolls would trigger a respawn, but the stream is still on
        // screen at depth 1 with a 600px viewport.
        field.advance(600, scripted(vec![0.99]));
        assert_eq!(field.depths(), &[2]);
    }

    #[test]
    fn stream_below_the_bottom_respawns_on_a_high_roll() {
        let mut field = RainField::new(10, 10);
        // Fall for 7 frames with low rolls: depth 1 -> 8, 80px > 50px.
        for _ in 0..7 {
            field.advance(50, scripted(vec![0.0]));
        }
        assert_eq!(field.depths(), &[8]);

        // First roll picks the glyph, second decides the respawn.
        field.advance(50, scripted(vec![0.5, 0.99]));
        assert_eq!(field.depths(), &[1]);
    }

    #[test]
    fn stream_below_the_bottom_keeps_falling_on_a_low_roll() {
        let mut field = RainField::new(10, 10);
        for _ in 0..7 {
            field.advance(50, scripted(vec![0.0]));
        }

        field.advance(50, scripted(vec![0.5, 0.5]));
        assert_eq!(field.depths(), &[9]);
    }

    #[test]
    fn widening_preserves_existing_streams_and_seeds_new_ones() {
        let mut field = RainField::new(800, FONT_SIZE);
        for _ in 0..4 {
            field.advance(2000, scripted(vec![0.0]));
        }
        assert!(field.depths().iter().all(|&d| d == 5));

        field.resize(1600);
        assert_eq!(field.columns(), 160);
        assert!(field.depths()[..80].iter().all(|&d| d == 5));
        assert!(field.depths()[80..].iter().all(|&d| d == 1));
    }

    #[test]
    fn narrowing_never_drops_columns() {
        let mut field = RainField::new(1600, FONT_SIZE);
        field.resize(400);
        assert_eq!(field.columns(), 160);
    }

    #[test]
    fn a_full_roll_is_clamped_into_the_charset() {
        let mut field = RainField::new(10, 10);
        // A roll of exactly 1.0 must wrap, not index out of bounds.
        let glyphs = field.advance(600, scripted(vec![1.0]));
        assert_eq!(glyphs[0].ch, 'A');
    }
}
