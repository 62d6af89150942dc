//! Display a fraction as a horizontal bar chart with "high" resolution by using Unicode block
//! characters.

// Use only two different levels of "fullness" since the other unicode characters may look slightly
// different depending on the font.
const PARTIAL_BLOCKS: [&str; 3] = [" ", "▌", "█"];

/// Returns a bar of exactly `max_width` characters, of which `fraction` (in `[0, 1]`) is filled.
pub fn unicode_bar(fraction: f64, max_width: usize) -> String {
    debug_assert!((0.0..=1.0).contains(&fraction), "fraction out of range: {fraction}");
    let ideal_width = fraction.clamp(0.0, 1.0) * max_width as f64;

    let full_width = ideal_width.floor();
    let mut bar = PARTIAL_BLOCKS[2].repeat(full_width as usize);

    let partial_width = ideal_width - full_width;
    if partial_width > 0.0 {
        let block_index = (partial_width * (PARTIAL_BLOCKS.len() - 1) as f64).floor() as usize;
        bar.push_str(PARTIAL_BLOCKS[block_index]);
    }

    let empty_width = max_width - bar.chars().count();
    bar.push_str(&PARTIAL_BLOCKS[0].repeat(empty_width));

    debug_assert_eq!(bar.chars().count(), max_width);
    bar
}

#[test]
fn test_bar() {
    assert_eq!(unicode_bar(0.0, 4), "    ");
    assert_eq!(unicode_bar(1.0, 4), "████");
    assert_eq!(unicode_bar(0.5, 4), "██  ");
    assert_eq!(unicode_bar(0.375, 4), "█▌  ");
    // Less than half a block is drawn as an empty block.
    assert_eq!(unicode_bar(0.3, 4), "█   ");
    for i in 0..=100 {
        assert_eq!(unicode_bar(i as f64 / 100.0, 10).chars().count(), 10);
    }
}
