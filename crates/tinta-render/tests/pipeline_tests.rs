//! End-to-end tests for the render pipeline.
//!
//! Tests that draw text need a system font. When none of the search paths
//! resolve on this machine they log and return early.

use image::Rgb;
use tempfile::tempdir;
use tinta_layout::{FontFace, TextMetrics};
use tinta_render::{
    DEFAULT_MARKUP, FontBook, FontConfig, FontError, FontdueFontMetrics, RenderConfig,
    RenderError, render_markup, render_to_file,
};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Render the sample page, or `None` when this machine lacks the fonts.
fn render_sample(config: &RenderConfig) -> Option<tinta_render::RenderedPage> {
    match render_markup(DEFAULT_MARKUP, config) {
        Ok(page) => Some(page),
        Err(RenderError::Font(err)) => {
            eprintln!("skipping: {err}");
            None
        }
        Err(err) => panic!("render failed: {err}"),
    }
}

#[test]
fn test_markup_without_tags_renders_blank_page() {
    let page = render_markup("<span>nothing here</span>", &RenderConfig::default()).unwrap();
    assert_eq!(page.image.dimensions(), (800, 600));
    assert!(page.image.pixels().all(|p| *p == WHITE));
    assert!(page.document.elements.is_empty());
}

#[test]
fn test_blank_page_saves_png() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blank.png");
    let _ = render_to_file("", &RenderConfig::default(), &path).unwrap();

    let reloaded = image::open(&path).unwrap();
    assert_eq!((reloaded.width(), reloaded.height()), (800, 600));
}

#[test]
fn test_missing_explicit_font_is_fatal() {
    let config = RenderConfig {
        fonts: FontConfig::default()
            .with_font(FontFace::Regular, "/nonexistent/tinta/regular.ttf"),
        ..RenderConfig::default()
    };
    let err = render_markup("<p>text</p>", &config).err().unwrap();
    assert!(matches!(
        err,
        RenderError::Font(FontError::Io {
            face: FontFace::Regular,
            ..
        })
    ));
}

#[test]
fn test_unparsable_explicit_font_is_fatal() {
    let dir = tempdir().unwrap();
    let bogus = dir.path().join("bogus.ttf");
    std::fs::write(&bogus, b"not a font").unwrap();
    let config = RenderConfig {
        fonts: FontConfig::default().with_font(FontFace::Italic, &bogus),
        ..RenderConfig::default()
    };
    let err = render_markup("<i>slanted</i>", &config).err().unwrap();
    assert!(matches!(
        err,
        RenderError::Font(FontError::Parse {
            face: FontFace::Italic,
            ..
        })
    ));
}

#[test]
fn test_unused_face_is_never_loaded() {
    // Only the regular face is needed, so a broken bold override is ignored.
    let config = RenderConfig {
        fonts: FontConfig::default().with_font(FontFace::Bold, "/nonexistent/tinta/bold.ttf"),
        ..RenderConfig::default()
    };
    match render_markup("<p>plain</p>", &config) {
        Ok(page) => assert_eq!(page.document.elements.len(), 1),
        Err(RenderError::Font(FontError::NotFound {
            face: FontFace::Regular,
            ..
        })) => eprintln!("skipping: no regular system font"),
        Err(err) => panic!("unexpected error: {err}"),
    }
}

#[test]
fn test_sample_page_end_to_end() {
    let Some(page) = render_sample(&RenderConfig::default()) else {
        return;
    };
    assert_eq!(page.image.dimensions(), (800, 600));
    assert_eq!(page.document.elements.len(), 4);
    assert!(page.image.pixels().any(|p| *p != WHITE));

    // The header's grey background starts at the initial cursor.
    assert_eq!(*page.image.get_pixel(0, 10), Rgb([128, 128, 128]));

    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.png");
    page.save(&path).unwrap();
    let reloaded = image::open(&path).unwrap();
    assert_eq!((reloaded.width(), reloaded.height()), (800, 600));
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_sample_cursor_matches_measured_heights() {
    let Some(page) = render_sample(&RenderConfig::default()) else {
        return;
    };
    let fonts = FontBook::load(&FontConfig::default(), [FontFace::Regular, FontFace::Bold])
        .expect("fonts loaded for the render must load again");
    let metrics = FontdueFontMetrics::new(&fonts);
    let expected = page.document.elements.iter().fold(10.0, |acc, element| {
        acc + metrics.measure(&element.display_text(), element.font()).height + 20.0 + 10.0
    });
    assert!((page.document.cursor - expected).abs() < 1e-3);
}

#[test]
fn test_canvas_size_is_configurable() {
    let config = RenderConfig {
        width: 320,
        height: 200,
        ..RenderConfig::default()
    };
    assert!((config.layout().available_width - 320.0).abs() < f32::EPSILON);
    let page = render_markup("", &config).unwrap();
    assert_eq!(page.image.dimensions(), (320, 200));
}
