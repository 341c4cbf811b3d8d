//! End-to-end renders with a real Chrome/Chromium and ImageMagick.

use image::{GenericImageView, ImageFormat};

#[cfg(feature = "async")]
use rfrender::{render_async, RenderConfig, RenderRequest, Viewport};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

#[test]
#[ignore] // Requires Chrome and ImageMagick to be installed
fn test_html_to_png() {
    let png = rfrender::render("html", "<p>hi</p>", "png", None, None, None).expect("render failed");

    assert!(png.len() > 8, "PNG data seems too small");
    assert_eq!(&png[0..8], PNG_MAGIC);

    let img = image::load_from_memory(&png).expect("decode png");
    assert_eq!(image::guess_format(&png).unwrap(), ImageFormat::Png);
    let (w, h) = img.dimensions();
    assert!(w > 0 && h > 0);
    // trimmed to the visible text, well inside the 1000x2000 window
    assert!(w < 1000 && h < 2000, "not trimmed: {}x{}", w, h);
}

#[test]
#[ignore] // Requires Chrome and ImageMagick to be installed
fn test_html_to_jpg() {
    let jpg = rfrender::render("html", "<p>hi</p>", "jpg", None, None, None).expect("render failed");

    assert_eq!(image::guess_format(&jpg).unwrap(), ImageFormat::Jpeg);
    let img = image::load_from_memory_with_format(&jpg, ImageFormat::Jpeg).expect("decode jpeg");
    assert!(!img.color().has_alpha(), "jpeg output has alpha: {:?}", img.color());
    let (w, h) = img.dimensions();
    assert!(w > 0 && h > 0);
}

#[test]
#[ignore] // Requires Chrome and ImageMagick to be installed
fn test_svg_with_asset_base() {
    let assets = tempfile::tempdir().unwrap();
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="20"><rect width="40" height="20" fill="red"/></svg>"#;

    let png = rfrender::render("svg", svg, "png", Some(200), Some(100), Some(assets.path()))
        .expect("render failed");
    assert_eq!(&png[0..8], PNG_MAGIC);
}

#[cfg(feature = "async")]
#[tokio::test]
#[ignore] // Requires Chrome and ImageMagick to be installed
async fn test_async_render() {
    let req = RenderRequest::new("text/html", "<h1>Hello</h1>", "png")
        .viewport(Viewport { width: 400, height: 300 });

    let png = render_async(RenderConfig::default().with_env_overrides(), req)
        .await
        .expect("render failed");
    assert_eq!(&png[0..8], PNG_MAGIC);
}
