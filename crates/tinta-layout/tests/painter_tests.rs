//! Integration tests for block stacking and display list generation.

use tinta_layout::align::RIGHT_ALIGN_OFFSET;
use tinta_layout::{
    ApproximateFontMetrics, DisplayCommand, DisplayList, Element, LayoutConfig, Painter,
    TextMetrics,
};
use tinta_markup::{ColorValue, SAMPLE_MARKUP, TagName, extract_tags};

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn painter() -> Painter<'static, ApproximateFontMetrics> {
    Painter::new(&ApproximateFontMetrics, LayoutConfig::default())
}

/// Paint a single element at the top of the canvas and return its commands.
fn paint_one(element: &Element) -> (f32, DisplayList) {
    let mut list = DisplayList::new();
    let height = painter().paint_element(element, (0.0, 0.0), 800.0, &mut list);
    (height, list)
}

fn text_x(list: &DisplayList) -> f32 {
    list.commands()
        .iter()
        .find_map(|c| match c {
            DisplayCommand::DrawText { x, .. } => Some(*x),
            DisplayCommand::FillRect { .. } => None,
        })
        .expect("no DrawText command")
}

#[test]
fn test_block_height_is_text_height_plus_padding() {
    let element = Element::new(TagName::Header, "", "Page Title");
    let (height, _) = paint_one(&element);
    let text_height = ApproximateFontMetrics
        .measure(&element.display_text(), element.font())
        .height;
    assert!(approx_eq(height, text_height + 20.0));
}

#[test]
fn test_background_then_text() {
    let element = Element::new(
        TagName::Div,
        "background-color: blue; color: white; text-align: left",
        "Blue Box",
    );
    let (height, list) = paint_one(&element);
    assert_eq!(list.len(), 2);
    match &list.commands()[0] {
        DisplayCommand::FillRect {
            x,
            y,
            width,
            height: h,
            color,
        } => {
            assert!(approx_eq(*x, 0.0));
            assert!(approx_eq(*y, 0.0));
            assert!(approx_eq(*width, 800.0));
            assert!(approx_eq(*h, height));
            assert_eq!(*color, ColorValue::BLUE);
        }
        other => panic!("expected FillRect, got {other:?}"),
    }
    match &list.commands()[1] {
        DisplayCommand::DrawText { text, color, .. } => {
            assert_eq!(text, "Blue Box");
            assert_eq!(*color, ColorValue::WHITE);
        }
        other => panic!("expected DrawText, got {other:?}"),
    }
}

#[test]
fn test_default_colors() {
    let (_, list) = paint_one(&Element::new(TagName::P, "", "plain"));
    assert!(matches!(
        &list.commands()[0],
        DisplayCommand::FillRect { color, .. } if *color == ColorValue::WHITE
    ));
    assert!(matches!(
        &list.commands()[1],
        DisplayCommand::DrawText { color, .. } if *color == ColorValue::BLACK
    ));
}

#[test]
fn test_center_alignment_offset() {
    let element = Element::new(TagName::P, "text-align: center", "centered text");
    let width = ApproximateFontMetrics
        .measure(&element.display_text(), element.font())
        .width;
    let (_, list) = paint_one(&element);
    assert!(approx_eq(text_x(&list), (800.0 - width) / 2.0));
}

#[test]
fn test_left_alignment_offset() {
    let (_, list) = paint_one(&Element::new(TagName::P, "text-align: left", "left"));
    assert!(approx_eq(text_x(&list), 0.0));
}

#[test]
fn test_right_alignment_uses_fixed_offset() {
    let (_, list) = paint_one(&Element::new(TagName::P, "text-align: right", "right"));
    assert!(approx_eq(text_x(&list), RIGHT_ALIGN_OFFSET));
}

#[test]
fn test_missing_alignment_is_flush_right() {
    let element = Element::new(TagName::A, "", "Visit Our Site");
    let width = ApproximateFontMetrics
        .measure(&element.display_text(), element.font())
        .width;
    let (_, list) = paint_one(&element);
    assert!(approx_eq(text_x(&list), 800.0 - width));
}

#[test]
fn test_origin_shifts_commands() {
    let element = Element::new(TagName::P, "text-align: left", "x");
    let mut list = DisplayList::new();
    let _ = painter().paint_element(&element, (5.0, 40.0), 300.0, &mut list);
    assert!(matches!(
        &list.commands()[0],
        DisplayCommand::FillRect { x, y, width, .. }
            if approx_eq(*x, 5.0) && approx_eq(*y, 40.0) && approx_eq(*width, 300.0)
    ));
    assert!(matches!(
        &list.commands()[1],
        DisplayCommand::DrawText { x, y, .. } if approx_eq(*x, 5.0) && approx_eq(*y, 40.0)
    ));
}

#[test]
fn test_cursor_accumulates_heights_and_gaps() {
    let tags = extract_tags(SAMPLE_MARKUP);
    let painted = painter().paint_document(&tags);
    assert_eq!(painted.elements.len(), 4);

    let expected = painted.elements.iter().fold(10.0, |acc, element| {
        let text_height = ApproximateFontMetrics
            .measure(&element.display_text(), element.font())
            .height;
        acc + text_height + 20.0 + 10.0
    });
    assert!(approx_eq(painted.cursor, expected));
}

#[test]
fn test_blocks_are_stacked_in_source_order() {
    let painted = painter().paint_document(&extract_tags(SAMPLE_MARKUP));
    let bottoms: Vec<f32> = painted
        .display_list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DisplayCommand::FillRect { y, height, .. } => Some(*y + *height),
            DisplayCommand::DrawText { .. } => None,
        })
        .collect();
    let starts: Vec<f32> = painted
        .display_list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DisplayCommand::FillRect { y, .. } => Some(*y),
            DisplayCommand::DrawText { .. } => None,
        })
        .collect();
    assert_eq!(starts.len(), 4);
    assert!(approx_eq(starts[0], 10.0));
    for i in 1..starts.len() {
        assert!(approx_eq(starts[i], bottoms[i - 1] + 10.0));
    }
}

#[test]
fn test_sample_display_text() {
    let painted = painter().paint_document(&extract_tags(SAMPLE_MARKUP));
    let texts: Vec<&str> = painted
        .display_list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DisplayCommand::DrawText { text, .. } => Some(text.as_str()),
            DisplayCommand::FillRect { .. } => None,
        })
        .collect();
    assert_eq!(
        texts,
        vec![
            "Page Title",
            "Welcome to our page!\n\nEnjoy your stay.",
            "Blue Box",
            "Visit Our Site"
        ]
    );
}

#[test]
fn test_empty_document_leaves_cursor_at_start() {
    let painted = painter().paint_document(&[]);
    assert!(painted.display_list.is_empty());
    assert!(approx_eq(painted.cursor, 10.0));
}

#[test]
fn test_display_list_serializes() {
    let (_, list) = paint_one(&Element::new(TagName::P, "", "x"));
    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json["commands"][0]["op"], "fill_rect");
    assert_eq!(json["commands"][1]["op"], "draw_text");
    assert_eq!(json["commands"][1]["font"]["face"], "regular");
}
