//! End-to-end rendering tests.

use std::fs::File;

use dreamstar::render::{BackgroundMode, PosterPipeline, SizeTier, Stage};
use dreamstar::{render_poster, PosterConfig, PosterError};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn config(seed: &str) -> PosterConfig {
    PosterConfig {
        seed: seed.to_string(),
        dpi: 24.0,
        ..PosterConfig::default()
    }
}

#[test]
fn seeded_renders_are_identical() {
    let first = render_poster(&config("42")).unwrap();
    let second = render_poster(&config("42")).unwrap();

    assert_eq!(first.layout(), second.layout());
    assert!(first.canvas() == second.canvas());
    assert_eq!(first.to_image().as_raw(), second.to_image().as_raw());
}

#[test]
fn seeded_layout_follows_tiers() {
    let poster = render_poster(&config("42")).unwrap();
    let stars = &poster.layout().stars;
    assert_eq!(stars.len(), 14);

    for star in stars {
        let (tier, lo, hi) = match star.index {
            0..=2 => (SizeTier::Large, 0.17, 0.25),
            3..=7 => (SizeTier::Medium, 0.11, 0.17),
            _ => (SizeTier::Small, 0.07, 0.11),
        };
        assert_eq!(star.tier, tier);
        assert!(star.size >= lo && star.size < hi, "star {} size {}", star.index, star.size);
        assert!(star.center.x >= 0.07 && star.center.x < 0.93);
        assert!(star.center.y >= 0.08 && star.center.y < 0.92);
        assert!(star.alpha >= 0.26 && star.alpha < 0.72);
        assert!(star.palette_index.unwrap() < 12);
    }
}

#[test]
fn different_seeds_differ() {
    let a = render_poster(&config("1")).unwrap();
    let b = render_poster(&config("2")).unwrap();
    assert!(a.layout().stars != b.layout().stars);
}

#[test]
fn blank_seed_renders_differ() {
    let a = render_poster(&config("")).unwrap();
    let b = render_poster(&config("  ")).unwrap();
    assert_eq!(a.layout().seed, None);
    assert!(a.layout().stars != b.layout().stars);
}

#[test]
fn invalid_seed_is_unseeded_not_an_error() {
    let poster = render_poster(&config("not a number")).unwrap();
    assert_eq!(poster.layout().seed, None);
}

#[test]
fn solid_background_without_title() {
    let mut cfg = config("8");
    cfg.background = BackgroundMode::Solid;
    cfg.title = false;
    let poster = render_poster(&cfg).unwrap();
    assert_eq!(poster.layout().background, BackgroundMode::Solid);
    assert_eq!(poster.layout().title_lines, 0);
}

#[test]
fn exported_png_carries_dpi_and_size() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dreamy_star_poster.png");

    let cfg = PosterConfig {
        seed: "42".to_string(),
        width: 6.0,
        height: 9.0,
        dpi: 50.0,
        ..PosterConfig::default()
    };
    render_poster(&cfg).unwrap().write_png(&path).unwrap();

    // 6in square at 50dpi, with round(0.05 * 50) = 3px padding each side.
    let decoder = png::Decoder::new(File::open(&path).unwrap());
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    assert_eq!((info.width, info.height), (306, 306));
    let dims = info.pixel_dims.unwrap();
    assert_eq!(dims.xppu, 1969);
    assert_eq!(dims.unit, png::Unit::Meter);

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert!(img.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn pipeline_rejects_skipped_stages() {
    let cfg = config("42");
    let mut pipeline = PosterPipeline::new(&cfg);
    pipeline.seed().unwrap();

    let err = pipeline.draw_stars().unwrap_err();
    assert!(matches!(err, PosterError::Render { .. }));
    assert_eq!(pipeline.stage(), Stage::Seeded);

    pipeline.draw_background().unwrap();
    pipeline.draw_atmosphere().unwrap();
    pipeline.draw_stars().unwrap();
    let poster = pipeline.finalize().unwrap();
    assert_eq!(poster.layout().stars.len(), 14);
}

#[test]
fn out_of_range_config_is_rejected() {
    let cfg = PosterConfig {
        dpi: 5.0,
        ..PosterConfig::default()
    };
    assert!(matches!(render_poster(&cfg), Err(PosterError::Validation { .. })));
}

#[test]
fn layout_json_written() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layout.json");
    let poster = render_poster(&config("7")).unwrap();
    poster.layout().write_json(&path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["seed"], 7);
    assert_eq!(json["palette"].as_array().unwrap().len(), 12);
    assert!(json["palette"][0].as_str().unwrap().starts_with('#'));
}
