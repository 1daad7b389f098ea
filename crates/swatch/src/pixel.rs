//! Pure-computation pixel buffer conversion from a list of suggestions.

use hsl_adjust_core::Suggestion;

/// Width and height in pixels of a strip of `count` square cells.
pub fn strip_dimensions(count: usize, cell: usize) -> (usize, usize) {
    (count * cell, cell)
}

/// Lays suggestions out left to right as `cell × cell` squares and returns
/// the RGBA8 buffer, row-major.
///
/// Each pixel is written as four bytes (R, G, B, 255). The buffer length is
/// `count * cell * cell * 4`; empty input or a zero cell yields an empty buffer.
pub fn swatches_to_rgba(swatches: &[Suggestion], cell: usize) -> Vec<u8> {
    let (width, height) = strip_dimensions(swatches.len(), cell);
    (0..height)
        .flat_map(|_| 0..width)
        .flat_map(|x| {
            let c = swatches[x / cell].color.rgb();
            [c.r, c.g, c.b, 255u8]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsl_adjust_core::{enumerate_suggestions, Axis, Sweep};

    fn hue_swatches() -> Vec<Suggestion> {
        enumerate_suggestions("C0D4ED", &Sweep::curated(Axis::Hue))
            .unwrap()
            .collect()
    }

    #[test]
    fn swatches_to_rgba_correct_length() {
        let swatches = hue_swatches();
        let buf = swatches_to_rgba(&swatches, 4);
        assert_eq!(buf.len(), swatches.len() * 4 * 4 * 4);
    }

    #[test]
    fn swatches_to_rgba_alpha_always_255() {
        let buf = swatches_to_rgba(&hue_swatches(), 2);
        for (i, &byte) in buf.iter().enumerate() {
            if i % 4 == 3 {
                assert_eq!(byte, 255, "alpha at pixel {} should be 255", i / 4);
            }
        }
    }

    #[test]
    fn swatches_to_rgba_cells_carry_their_color() {
        let swatches = hue_swatches();
        let cell = 3;
        let buf = swatches_to_rgba(&swatches, cell);
        let (width, _) = strip_dimensions(swatches.len(), cell);
        // Bottom-right pixel of the middle (zero-delta) cell.
        let x = 6 * cell + cell - 1;
        let y = cell - 1;
        let i = (y * width + x) * 4;
        assert_eq!(&buf[i..i + 3], &[0xC0, 0xD4, 0xED]);
    }

    #[test]
    fn empty_input_or_zero_cell_yields_empty_buffer() {
        assert!(swatches_to_rgba(&[], 8).is_empty());
        assert!(swatches_to_rgba(&hue_swatches(), 0).is_empty());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn buffer_length_matches_dimensions(count in 1usize..13, cell in 1usize..6) {
                let swatches: Vec<Suggestion> = hue_swatches().into_iter().take(count).collect();
                let (w, h) = strip_dimensions(swatches.len(), cell);
                prop_assert_eq!(swatches_to_rgba(&swatches, cell).len(), w * h * 4);
            }
        }
    }
}
