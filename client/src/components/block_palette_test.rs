use super::*;

#[test]
fn block_swatch_uses_block_colors() {
    let style = swatch_style(Brush::Block(BlockKind::Ladder), false);
    assert_eq!(style, "background:#ffcc33;color:black;border-color:transparent");
}

#[test]
fn dark_blocks_get_white_text() {
    let style = swatch_style(Brush::Block(BlockKind::Wall), false);
    assert!(style.contains("color:white"));
}

#[test]
fn selected_block_has_accent_border() {
    let style = swatch_style(Brush::Block(BlockKind::Floor), true);
    assert!(style.ends_with("border-color:#00ffcc"));
}

#[test]
fn selected_eraser_has_red_border() {
    let style = swatch_style(Brush::Eraser, true);
    assert!(style.ends_with("border-color:#ff4444"));
}
