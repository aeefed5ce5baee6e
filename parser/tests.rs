//! Tests for block grouping, drawing reclassification, and degradation

use super::*;
use alloc::string::String;

/// Round-trip helper: blocks must tile the source exactly
fn assert_partitions(text: &str) {
    let blocks = parse(text);
    let joined: String = blocks.iter().map(|block| block.span()).collect();
    assert_eq!(joined, text, "blocks must reproduce the input");
    let mut offset = 0;
    for block in &blocks {
        assert_eq!(block.start(), offset, "input: {text}");
        offset = block.end();
    }
    assert_eq!(offset, text.len(), "input: {text}");
}

#[test]
fn empty_line_is_one_plain_block() {
    let blocks = parse("");
    assert_eq!(blocks, [DialogueBlock::Plain { span: "", end: 0 }]);
}

#[test]
fn interleaved_overrides_and_text() {
    let blocks = parse("Yes, I {\\i1}am{\\i0} here.");
    assert_eq!(blocks.len(), 5);
    assert_eq!(blocks[0].span(), "Yes, I ");
    assert_eq!(blocks[1].tags()[0].name, "i");
    assert_eq!(blocks[2].span(), "am");
    assert_eq!(blocks[4].span(), " here.");
    assert_partitions("Yes, I {\\i1}am{\\i0} here.");
}

#[test]
fn tag_ranges_cover_name_and_arguments() {
    let blocks = parse("{\\b1\\pos(10,20)}x");
    let tags = blocks[0].tags();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0], Tag::new("b", 1, 4));
    assert_eq!(tags[1], Tag::new("pos", 4, 15));
}

#[test]
fn nested_tag_belongs_to_parent_arguments() {
    let text = "{\\t(0,100,\\clip(1, m 0 0))}x";
    let blocks = parse(text);
    let tags = blocks[0].tags();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "t");
    assert_eq!(tags[0].end, text.len() - 2);
    assert_partitions(text);
}

#[test]
fn braces_without_tags_are_comments() {
    let blocks = parse("before{just a note}after");
    assert_eq!(blocks.len(), 3);
    assert_eq!(
        blocks[1],
        DialogueBlock::Comment {
            span: "{just a note}",
            end: 19,
        }
    );
    assert_partitions("before{just a note}after");
}

#[test]
fn empty_braces_are_a_comment() {
    let blocks = parse("{}");
    assert_eq!(
        blocks,
        [DialogueBlock::Comment {
            span: "{}",
            end: 2,
        }]
    );
}

#[test]
fn bare_backslash_does_not_make_a_tag() {
    let blocks = parse("{\\ }x");
    assert!(matches!(blocks[0], DialogueBlock::Comment { .. }));
}

#[test]
fn drawing_mode_reclassifies_following_text() {
    let blocks = parse("{\\p1}m 0 0 l 10 10{\\p0}after");
    assert_eq!(blocks.len(), 4);
    assert!(matches!(blocks[0], DialogueBlock::Override { .. }));
    assert_eq!(
        blocks[1],
        DialogueBlock::Drawing {
            span: "m 0 0 l 10 10",
            end: 18,
        }
    );
    assert_eq!(blocks[3].span(), "after");
    assert!(matches!(blocks[3], DialogueBlock::Plain { .. }));
    assert_partitions("{\\p1}m 0 0 l 10 10{\\p0}after");
}

#[test]
fn drawing_scale_accepts_leading_zeros() {
    let blocks = parse("{\\p007}m 0 0");
    assert!(matches!(blocks[1], DialogueBlock::Drawing { .. }));
}

#[test]
fn drawing_scale_zero_disables() {
    let blocks = parse("{\\p0}m 0 0");
    assert!(matches!(blocks[1], DialogueBlock::Plain { .. }));
}

#[test]
fn drawing_scale_missing_disables() {
    let blocks = parse("{\\p1}a{\\p}b");
    assert!(matches!(blocks[1], DialogueBlock::Drawing { .. }));
    assert!(matches!(blocks[3], DialogueBlock::Plain { .. }));
}

#[test]
fn longer_tag_name_does_not_touch_drawing_mode() {
    // \pbo and friends share the prefix but are different tags
    let blocks = parse("{\\p1}a{\\pbo2}b");
    assert!(matches!(blocks[1], DialogueBlock::Drawing { .. }));
    assert!(matches!(blocks[3], DialogueBlock::Drawing { .. }));
}

#[test]
fn last_p_tag_in_block_wins() {
    let blocks = parse("{\\p1\\p0}text");
    assert!(matches!(blocks[1], DialogueBlock::Plain { .. }));
}

#[test]
fn unclosed_override_degrades_to_plain() {
    let blocks = parse("tail{\\b1");
    assert_eq!(
        blocks,
        [DialogueBlock::Plain {
            span: "tail{\\b1",
            end: 8,
        }]
    );
}

#[test]
fn unclosed_override_after_closed_one() {
    let blocks = parse("{\\b1}x{\\i1");
    assert_eq!(blocks.len(), 2);
    assert!(matches!(blocks[0], DialogueBlock::Override { .. }));
    assert_eq!(blocks[1].span(), "x{\\i1");
    assert_partitions("{\\b1}x{\\i1");
}

#[test]
fn unclosed_drawing_tail() {
    let blocks = parse("{\\p1}m 0 0{\\clip");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1].span(), "m 0 0{\\clip");
    assert!(matches!(blocks[1], DialogueBlock::Drawing { .. }));
}

#[test]
fn line_breaks_stay_inside_plain_blocks() {
    let blocks = parse("one\\Ntwo{\\b1}three");
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0].span(), "one\\Ntwo");
}

#[test]
fn mixed_comment_and_tags_is_an_override() {
    // leading filler before the first backslash stays inside the block span
    let text = "{note\\b1}x";
    let blocks = parse(text);
    assert_eq!(blocks[0].tags().len(), 1);
    assert_eq!(blocks[0].tags()[0], Tag::new("b", 5, 8));
    assert_partitions(text);
}

#[test]
fn strip_tags_keeps_only_plain_text() {
    assert_eq!(strip_tags("{\\b1}bold{\\b0} text"), "bold text");
    assert_eq!(strip_tags("a{note}b"), "ab");
    assert_eq!(strip_tags("{\\p1}m 0 0{\\p0}x"), "x");
    assert_eq!(strip_tags("keep\\Nbreak"), "keep\\Nbreak");
    assert_eq!(strip_tags(""), "");
}

#[test]
fn partition_holds_for_awkward_inputs() {
    for text in [
        "",
        "}",
        "{{",
        "{}",
        "{\\}",
        "a}b{c",
        "{\\pos(0,0}a",
        "{\\fnComic Sans MS}text",
        "\u{3042}{\\b1}\u{3044}",
    ] {
        assert_partitions(text);
    }
}
