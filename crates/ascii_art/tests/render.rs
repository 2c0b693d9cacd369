//! End-to-end rendering through the public API.

use ascii_art::{
    ansi, render, AsciiError, AsciiRenderer, ColorMode, GlyphRamp, PixelSource, RampKind,
    RenderConfig, DEFAULT_RAMP, MAX_CELLS,
};
use image::{DynamicImage, Rgb, RgbImage};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

fn checker_2x2() -> RgbImage {
    let mut image = RgbImage::new(2, 2);
    image.put_pixel(0, 0, BLACK);
    image.put_pixel(1, 0, WHITE);
    image.put_pixel(0, 1, WHITE);
    image.put_pixel(1, 1, BLACK);
    image
}

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        Rgb([r, g, r.wrapping_add(g)])
    })
}

fn first_glyph() -> char {
    DEFAULT_RAMP.chars().next().unwrap()
}

fn last_glyph() -> char {
    DEFAULT_RAMP.chars().last().unwrap()
}

#[test]
fn checker_renders_dark_sparse_and_bright_dense() {
    let config = RenderConfig::builder().output_width(2).cell_aspect(1.0).build().unwrap();
    let lines = render(&checker_2x2(), &config).unwrap();

    let (sparse, dense) = (first_glyph(), last_glyph());
    assert_eq!(lines, vec![format!("{sparse}{dense}"), format!("{dense}{sparse}")]);
}

#[test]
fn checker_collapses_to_top_row_with_default_aspect() {
    let config = RenderConfig::new(2).unwrap();
    let lines = render(&checker_2x2(), &config).unwrap();
    assert_eq!(lines, vec![format!("{}{}", first_glyph(), last_glyph())]);
}

#[test]
fn line_count_and_width_match_geometry() {
    let images = [gradient(64, 48), gradient(3, 200), gradient(500, 7), gradient(1, 1)];
    for image in &images {
        for width in [1u32, 2, 17, 80, 333] {
            for color in [false, true] {
                let config =
                    RenderConfig::builder().output_width(width).color(color).build().unwrap();
                let output = AsciiRenderer.render_image(image, &config).unwrap();
                let lines = output.lines();

                assert_eq!(lines.len(), output.geometry.rows as usize);
                assert!(output.geometry.rows >= 1);
                for line in &lines {
                    assert_eq!(ansi::strip(line).chars().count(), width as usize);
                }
            }
        }
    }
}

#[test]
fn row_count_follows_aspect_formula() {
    let image = gradient(300, 200);
    let config = RenderConfig::builder().output_width(90).cell_aspect(0.5).build().unwrap();
    let lines = render(&image, &config).unwrap();
    assert_eq!(lines.len(), 30);
}

#[test]
fn width_one_yields_single_column() {
    let config = RenderConfig::new(1).unwrap();
    let lines = render(&gradient(40, 40), &config).unwrap();
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|line| line.chars().count() == 1));
}

#[test]
fn rendering_is_repeatable() {
    let image = gradient(120, 90);
    let config = RenderConfig::builder()
        .output_width(40)
        .ramp(RampKind::Extended)
        .color(true)
        .build()
        .unwrap();
    assert_eq!(render(&image, &config).unwrap(), render(&image, &config).unwrap());
}

#[test]
fn invert_mirrors_every_cell() {
    let image = gradient(90, 60);
    for ramp in [RampKind::Default, RampKind::Extended] {
        let plain = RenderConfig::builder().output_width(30).ramp(ramp).build().unwrap();
        let inverted =
            RenderConfig::builder().output_width(30).ramp(ramp).invert(true).build().unwrap();

        let plain = AsciiRenderer.render_image(&image, &plain).unwrap();
        let inverted = AsciiRenderer.render_image(&image, &inverted).unwrap();
        let max_level = GlyphRamp::preset(ramp).max_level();

        assert_eq!(plain.grid.cells.len(), inverted.grid.cells.len());
        for (a, b) in plain.grid.cells.iter().zip(&inverted.grid.cells) {
            assert_eq!(a.rgb, b.rgb);
            assert_eq!(b.level, max_level - a.level);
        }
    }
}

#[test]
fn brighter_pixels_never_pick_sparser_glyphs() {
    let ramp = GlyphRamp::preset(RampKind::Extended);
    let samples: Vec<[u8; 3]> = (0..=255u8)
        .flat_map(|v| [[v, 0, 0], [0, v, 0], [0, 0, v], [v, v, v]])
        .collect();
    for a in &samples {
        for b in &samples {
            if ascii_art::luminance(*a) <= ascii_art::luminance(*b) {
                assert!(ramp.level_for(*a, false) <= ramp.level_for(*b, false));
            }
        }
    }
}

#[test]
fn foreground_color_wraps_each_glyph() {
    let image = RgbImage::from_pixel(4, 4, Rgb([255, 0, 0]));
    let config = RenderConfig::builder().output_width(1).color(true).build().unwrap();
    let lines = render(&image, &config).unwrap();

    let ramp = GlyphRamp::preset(RampKind::Default);
    let glyph = ramp.char_at(ramp.level_for([255, 0, 0], false));
    assert_eq!(lines[0], format!("\x1b[38;2;255;0;0m{glyph}\x1b[0m"));
}

#[test]
fn background_color_uses_bg_escape() {
    let image = RgbImage::from_pixel(2, 2, Rgb([0, 128, 255]));
    let config =
        RenderConfig::builder().output_width(2).color(true).background(true).build().unwrap();
    let output = AsciiRenderer.render_image(&image, &config).unwrap();
    assert_eq!(output.color_mode, ColorMode::Background);

    let line = &output.lines()[0];
    assert!(line.starts_with(&ansi::background([0, 128, 255])));
    assert!(line.ends_with(ansi::RESET));
    assert!(!line.contains("\x1b[38;2;"));
}

#[test]
fn plain_output_has_no_escapes() {
    let config = RenderConfig::new(20).unwrap();
    let lines = render(&gradient(50, 50), &config).unwrap();
    assert!(lines.iter().all(|line| !line.contains('\x1b')));
}

#[test]
fn zero_sized_image_is_unsupported() {
    let config = RenderConfig::new(10).unwrap();
    for image in [RgbImage::new(0, 5), RgbImage::new(5, 0), RgbImage::new(0, 0)] {
        let err = render(&image, &config).unwrap_err();
        assert!(matches!(err, AsciiError::UnsupportedImage(_)), "{err}");
    }
}

#[test]
fn zero_width_fails_before_sampling() {
    struct Untouchable;

    impl PixelSource for Untouchable {
        fn dimensions(&self) -> (u32, u32) {
            panic!("image inspected before config validation")
        }

        fn pixel_at(&self, _x: u32, _y: u32) -> [u8; 3] {
            panic!("image sampled before config validation")
        }
    }

    let result = RenderConfig::new(0).and_then(|config| render(&Untouchable, &config));
    assert!(matches!(result, Err(AsciiError::InvalidConfig(_))));
}

#[test]
fn dynamic_images_render_like_rgb_buffers() {
    let rgb = gradient(33, 21);
    let dynamic = DynamicImage::ImageRgb8(rgb.clone());
    let config = RenderConfig::new(12).unwrap();
    assert_eq!(render(&rgb, &config).unwrap(), render(&dynamic, &config).unwrap());
}

#[test]
fn render_path_decodes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checker.png");
    checker_2x2().save(&path).unwrap();

    let config = RenderConfig::builder().output_width(2).cell_aspect(1.0).build().unwrap();
    let output = AsciiRenderer.render_path(&path, &config).unwrap();
    assert_eq!(output.lines(), render(&checker_2x2(), &config).unwrap());
}

#[test]
fn render_path_reports_missing_file_as_io() {
    let dir = tempfile::tempdir().unwrap();
    let config = RenderConfig::new(10).unwrap();
    let err = AsciiRenderer.render_path(dir.path().join("missing.png"), &config).unwrap_err();
    assert!(matches!(err, AsciiError::Io(_)), "{err}");
}

#[test]
fn render_path_reports_garbage_as_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    let config = RenderConfig::new(10).unwrap();
    let err = AsciiRenderer.render_path(&path, &config).unwrap_err();
    assert!(matches!(err, AsciiError::UnsupportedImage(_)), "{err}");
}

#[test]
fn huge_grid_is_an_error_not_a_panic() {
    let image = RgbImage::from_pixel(1, 1, WHITE);
    let config = RenderConfig::builder()
        .output_width(MAX_CELLS as u32)
        .cell_aspect(f32::MAX)
        .build()
        .unwrap();

    let result = std::panic::catch_unwind(|| render(&image, &config));
    let err = result.expect("render panicked").unwrap_err();
    assert!(matches!(err, AsciiError::InvalidConfig(_)), "{err}");

    let tall = RgbImage::from_pixel(1, 4096, WHITE);
    let config = RenderConfig::builder().output_width(4096).cell_aspect(1.0).build().unwrap();
    assert!(matches!(render(&tall, &config), Err(AsciiError::InvalidConfig(_))));
}
