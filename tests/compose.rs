//! End-to-end compositing against real files.

use std::path::{Path, PathBuf};

use tempfile::tempdir;
use tga_compositor::image_pipeline::tga::{decode_header, read_pixels};
use tga_compositor::image_pipeline::{
    CompositeConfig, CompositeError, CompositePipeline, Pixel, StandardTgaWriter, TgaHeader,
    TgaImage, TgaWriter, parse_operations,
};

fn write_image(dir: &Path, name: &str, width: i16, height: i16, pixels: Vec<Pixel>) -> PathBuf {
    let path = dir.join(name);
    let image = TgaImage::new(TgaHeader::true_color(width, height), pixels);
    let mut file = std::fs::File::create(&path).unwrap();
    StandardTgaWriter.write_tga(&image, &mut file).unwrap();
    path
}

fn read_image(path: &Path) -> TgaImage {
    let mut file = std::fs::File::open(path).unwrap();
    let header = decode_header(&mut file).unwrap();
    let (width, height) = header.dimensions().unwrap();
    let pixels = read_pixels(&mut file, width, height).unwrap();
    TgaImage::new(header, pixels)
}

#[test]
fn test_multiply_then_flip_on_disk() {
    let dir = tempdir().unwrap();
    let input = write_image(
        dir.path(),
        "layer1.tga",
        2,
        2,
        vec![Pixel::WHITE, Pixel::gray(128), Pixel::rgb(255, 0, 0), Pixel::BLACK],
    );
    let pattern = write_image(dir.path(), "pattern.tga", 2, 2, vec![Pixel::gray(128); 4]);
    let output = dir.path().join("out.tga");

    let ops = parse_operations([
        "multiply".to_string(),
        pattern.display().to_string(),
        "flip".to_string(),
    ])
    .unwrap();
    let pipeline = CompositePipeline::new(CompositeConfig::default());
    pipeline.run(&input, &output, &ops).unwrap();

    let result = read_image(&output);
    assert_eq!(result.header, TgaHeader::true_color(2, 2));
    assert_eq!(
        result.pixels,
        vec![Pixel::BLACK, Pixel::rgb(128, 0, 0), Pixel::gray(64), Pixel::gray(128)]
    );
}

#[test]
fn test_combine_on_disk() {
    let dir = tempdir().unwrap();
    let red = write_image(dir.path(), "red.tga", 1, 2, vec![Pixel::rgb(10, 0, 0), Pixel::rgb(20, 0, 0)]);
    let green = write_image(dir.path(), "green.tga", 1, 2, vec![Pixel::rgb(0, 30, 0), Pixel::rgb(0, 40, 0)]);
    let blue = write_image(dir.path(), "blue.tga", 1, 2, vec![Pixel::rgb(0, 0, 50), Pixel::rgb(0, 0, 60)]);
    let output = dir.path().join("combined.tga");

    let ops = parse_operations([
        "combine".to_string(),
        green.display().to_string(),
        blue.display().to_string(),
    ])
    .unwrap();
    CompositePipeline::new(CompositeConfig::default())
        .run(&red, &output, &ops)
        .unwrap();

    let result = read_image(&output);
    assert_eq!(result.pixels, vec![Pixel::rgb(10, 30, 50), Pixel::rgb(20, 40, 60)]);
}

#[test]
fn test_zero_width_image_round_trips() {
    let dir = tempdir().unwrap();
    let input = write_image(dir.path(), "empty.tga", 0, 5, vec![]);
    let output = dir.path().join("out.tga");

    CompositePipeline::new(CompositeConfig::default())
        .run(&input, &output, &[])
        .unwrap();

    let result = read_image(&output);
    assert_eq!(result.header, TgaHeader::true_color(0, 5));
    assert!(result.pixels.is_empty());
    assert_eq!(std::fs::metadata(&output).unwrap().len(), 18);
}

#[test]
fn test_failed_operation_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = write_image(dir.path(), "in.tga", 2, 1, vec![Pixel::WHITE; 2]);
    let small = write_image(dir.path(), "small.tga", 1, 1, vec![Pixel::WHITE]);
    let output = dir.path().join("out.tga");

    let ops = parse_operations(["screen".to_string(), small.display().to_string()]).unwrap();
    let err = CompositePipeline::new(CompositeConfig::default())
        .run(&input, &output, &ops)
        .unwrap_err();

    assert!(matches!(err, CompositeError::DimensionMismatch { expected: 2, actual: 1 }));
    assert!(!output.exists());
    // staged temp files are cleaned up too
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn test_missing_operand_file_detected_before_loading() {
    let dir = tempdir().unwrap();
    let input = write_image(dir.path(), "in.tga", 1, 1, vec![Pixel::WHITE]);
    let output = dir.path().join("out.tga");
    let missing = dir.path().join("missing.tga");

    let ops = parse_operations([
        "flip".to_string(),
        "overlay".to_string(),
        missing.display().to_string(),
    ])
    .unwrap();
    let err = CompositePipeline::new(CompositeConfig::default())
        .run(&input, &output, &ops)
        .unwrap_err();

    assert!(matches!(err, CompositeError::FileNotFound(_)));
    assert!(!output.exists());
}

#[test]
fn test_truncated_input_is_io_error() {
    let dir = tempdir().unwrap();
    let input = write_image(dir.path(), "in.tga", 2, 2, vec![Pixel::WHITE; 4]);
    let data = std::fs::read(&input).unwrap();
    std::fs::write(&input, &data[..data.len() - 1]).unwrap();

    let output = dir.path().join("out.tga");
    let err = CompositePipeline::new(CompositeConfig::default())
        .run(&input, &output, &[])
        .unwrap_err();

    assert!(matches!(err, CompositeError::IoError(_)));
    assert!(!output.exists());
}

#[test]
fn test_non_atomic_write_and_overwrite() {
    let dir = tempdir().unwrap();
    let input = write_image(dir.path(), "in.tga", 1, 1, vec![Pixel::rgb(1, 2, 3)]);
    let output = dir.path().join("out.tga");
    std::fs::write(&output, b"stale").unwrap();

    let config = CompositeConfig::builder().atomic_write(false).build();
    let ops = parse_operations(["onlyblue"]).unwrap();
    CompositePipeline::new(config).run(&input, &output, &ops).unwrap();

    assert_eq!(read_image(&output).pixels, vec![Pixel::gray(3)]);
}
