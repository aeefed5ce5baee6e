//! End-to-end scenarios combining the parser, mutator, and resampler
//!
//! Exercises the flows an editor drives: resolving a drawing payload from a
//! parsed line, rewriting it for a new resolution, and splicing tag edits
//! while keeping the line parseable.

use ass_markup::{
    parse, resample_drawing, set_tag, strip_tags, DialogueBlock, ResampleState, TagEdit,
};
use pretty_assertions::assert_eq;

/// Rescale every drawing payload of a line, the way a resolution change does
fn resample_line(text: &str, state: &ResampleState) -> String {
    let mut out = String::with_capacity(text.len());
    for block in parse(text) {
        match block {
            DialogueBlock::Drawing { span, .. } => out.push_str(&resample_drawing(span, state)),
            other => out.push_str(other.span()),
        }
    }
    out
}

#[test]
fn drawing_blocks_follow_their_override() {
    let line = "{\\an7\\p1}m 0 0 l 100 0 100 100{\\p0}caption";
    let blocks = parse(line);
    for (index, block) in blocks.iter().enumerate() {
        if matches!(block, DialogueBlock::Drawing { .. }) {
            assert!(index > 0);
            assert!(matches!(blocks[index - 1], DialogueBlock::Override { .. }));
        }
    }
}

#[test]
fn resolution_change_rewrites_only_drawings() {
    let line = "{\\p1}m 0 0 l 100 0{\\p0}text stays";
    let state = ResampleState::from_resolutions((640, 480), (1280, 960), [0.0; 4]).unwrap();
    assert_eq!(
        resample_line(line, &state),
        "{\\p1}m 0 0 l 200 0{\\p0}text stays"
    );
}

#[test]
fn resampled_line_still_parses_as_drawing() {
    let line = "{\\p1}m 0 0 l 100 0";
    let state = ResampleState {
        margin: [8.0, 8.0, 0.0, 0.0],
        scale_x: 1.5,
        scale_y: 1.5,
    };
    let rewritten = resample_line(line, &state);
    let blocks = parse(&rewritten);
    assert!(matches!(blocks[1], DialogueBlock::Drawing { .. }));
}

#[test]
fn repeated_color_edits_converge() {
    let mut line = String::from("First {\\i1}spoken{\\i0} words");
    let mut caret = 9;
    for _ in 0..3 {
        let TagEdit { text, range } = set_tag(&line, caret, "c", "&HFF8800&");
        line = text;
        caret = range.end;
    }
    assert_eq!(line, "First {\\i1\\c&HFF8800&}spoken{\\i0} words");
}

#[test]
fn edit_then_strip_drops_all_markup() {
    let edit = set_tag("plain words", 5, "b", "1");
    assert_eq!(edit.text, "plain{\\b1} words");
    assert_eq!(strip_tags(&edit.text), "plain words");
}

#[test]
fn edited_range_is_cursor_ready() {
    // the returned range brackets exactly the new markup, so a caller can
    // place the caret or a highlight without re-parsing
    let line = "abc";
    let edit = set_tag(line, 1, "fs", "32");
    assert_eq!(&edit.text[..edit.range.start], "a");
    assert_eq!(&edit.text[edit.range.clone()], "{\\fs32}");
    assert_eq!(&edit.text[edit.range.end..], "bc");
}

#[test]
fn setting_position_replaces_movement_alias() {
    // \move and \pos drive the same property; setting one replaces the other
    let line = "{\\move(0,0,10,10)}x";
    let edit = set_tag(line, 18, "pos", "(320,240)");
    assert_eq!(edit.text, "{\\pos(320,240)}x");
}

#[test]
fn malformed_lines_remain_editable() {
    let edit = set_tag("broken{\\b1", 3, "i", "1");
    assert_eq!(edit.text, "bro{\\i1}ken{\\b1");

    let blocks = parse(&edit.text);
    let joined: String = blocks.iter().map(DialogueBlock::span).collect();
    assert_eq!(joined, edit.text);
}
