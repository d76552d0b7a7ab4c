//! Integration tests for the palette width distribution and drawing.
//!
//! Sweeps the layout across many (width, count) pairs:
//! - odd counts are symmetric and use every column
//! - even counts are symmetric outside the two middle slots
//! - spare columns never pile up on a single swatch

use lazyhue::models::{ColorState, RgbColor};
use lazyhue::tui::palette_box::{distribute_widths, PALETTE_PADDING};
use lazyhue::tui::{PaletteBox, Theme, Widget};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

fn layout(total: u16, count: usize) -> (PaletteBox, Vec<usize>) {
    let mut pb = PaletteBox::new(Theme::dark(), false);
    pb.resize_for(total, count);
    let widths = pb.box_widths(count);
    (pb, widths)
}

#[test]
fn test_sweep_odd_counts_symmetric_and_full() {
    for count in (1..=25).step_by(2) {
        for total in (2 * count as u16).max(4)..=240 {
            let (pb, widths) = layout(total, count);
            let padding = usize::from(PALETTE_PADDING);

            assert_eq!(widths.len(), count);
            assert_eq!(
                widths.iter().sum::<usize>(),
                usize::from(total) - padding - 1,
                "total={total} count={count} widths={widths:?}"
            );
            assert_eq!(widths.iter().sum::<usize>(), pb.width());
            for i in 0..count {
                assert_eq!(widths[i], widths[count - 1 - i], "total={total} count={count}");
            }
        }
    }
}

#[test]
fn test_sweep_even_counts_outer_pairs_symmetric() {
    for count in (2..=24).step_by(2) {
        for total in (2 * count as u16).max(4)..=240 {
            let (_, widths) = layout(total, count);
            let center = count / 2;
            for i in 0..center.saturating_sub(1) {
                assert_eq!(widths[i], widths[count - 1 - i], "total={total} count={count}");
            }
        }
    }
}

#[test]
fn test_sweep_extra_stays_small() {
    for count in 1..=30 {
        for total in (2 * count as u16).max(4)..=200 {
            let (pb, widths) = layout(total, count);
            for w in &widths {
                assert!(
                    *w <= pb.box_width() + 2,
                    "total={total} count={count} widths={widths:?}"
                );
            }
        }
    }
}

#[test]
fn test_large_stretch_spills_into_first_slot() {
    // More stretch than resize would ever produce still must not panic
    let widths = distribute_widths(3, 1, 40);
    assert_eq!(widths.len(), 3);
    assert_eq!(widths[0], widths[2]);
}

#[test]
fn test_five_swatches_at_fifty_columns() {
    let mut state = ColorState::from_rgb(&[
        RgbColor::new(10, 20, 30),
        RgbColor::new(40, 50, 60),
        RgbColor::new(70, 80, 90),
        RgbColor::new(100, 110, 120),
        RgbColor::new(130, 140, 150),
    ])
    .unwrap();
    state.next();
    state.next();
    assert_eq!(state.pos(), 2);

    let mut pb = PaletteBox::new(Theme::dark(), false);
    pb.resize(50, &state);
    let widths = pb.box_widths(5);
    assert_eq!(widths, vec![9, 9, 11, 9, 9]);

    let mut buf = Buffer::empty(Rect::new(0, 0, 50, 20));
    pb.draw(0, 0, &mut buf, &state);

    let start = PALETTE_PADDING + (47 - 11) / 2;
    let readout: String = (start..start + 11)
        .map(|x| buf[(x, 0)].symbol().to_string())
        .collect();
    assert_eq!(readout, state.selected().rgb().readout());
    assert_eq!(readout, "070 080 090");
}
