mod common;

use std::fs;

use common::{numbered_canvas, temp_path, BLUE, RED};
use lib_pixel::constants::MAX_FILE_GRID_SIZE;
use lib_pixel::file::{is_grid_file, picker_filter, DecodeError, FileError};
use lib_pixel::{decode, encode, load_canvas, save_canvas, Canvas, Color, GridFile};

#[test]
fn test_encode_layout() {
    let file = GridFile::new(vec![vec![RED, Color::WHITE], vec![BLUE, Color::BLACK]]);
    let encoded = encode(&file).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&encoded).unwrap();
    assert_eq!(value["grid_size"], 2);
    assert_eq!(value["colors"][0][0], "#ff0000");
    assert_eq!(value["colors"][0][1], "#ffffff");
    assert_eq!(value["colors"][1][0], "#0000ff");
}

#[test]
fn test_encode_decode_canvas() {
    let canvas = numbered_canvas(5);
    let encoded = encode(&GridFile::from_canvas(&canvas)).unwrap();

    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.grid_size, Some(5));

    let mut restored = Canvas::new(5).unwrap();
    restored.load_file(&decoded).unwrap();
    assert_eq!(restored.grid(), canvas.grid());
}

#[test]
fn test_decode_without_grid_size() {
    let decoded = decode(br##"{ "colors": [["#000000", "#ffffff"], ["#ffffff", "#000000"]] }"##)
        .unwrap();
    assert_eq!(decoded.grid_size, None);
    assert_eq!(decoded.advisory_size(), 2);

    let mut canvas = Canvas::new(16).unwrap();
    canvas.load_file(&decoded).unwrap();
    assert_eq!(canvas.size(), 2);
    assert_eq!(canvas.pixel(0, 0).unwrap(), Color::BLACK);
    assert_eq!(canvas.pixel(1, 0).unwrap(), Color::WHITE);
}

#[test]
fn test_decode_prefers_actual_rows() {
    let decoded = decode(br##"{ "grid_size": 32, "colors": [["#ff0000"]] }"##).unwrap();
    assert_eq!(decoded.advisory_size(), 32);

    let mut canvas = Canvas::new(8).unwrap();
    canvas.load_file(&decoded).unwrap();
    assert_eq!(canvas.size(), 1);
    assert_eq!(canvas.pixel(0, 0).unwrap(), RED);
}

#[test]
fn test_decode_jagged_rows() {
    let decoded = decode(br##"{ "colors": [["#ff0000", "#ff0000"], []] }"##).unwrap();
    let mut canvas = Canvas::new(8).unwrap();
    canvas.load_file(&decoded).unwrap();
    assert_eq!(canvas.pixel(1, 0).unwrap(), RED);
    assert_eq!(canvas.pixel(0, 1).unwrap(), Color::WHITE);
    assert_eq!(canvas.pixel(1, 1).unwrap(), Color::WHITE);
}

#[test]
fn test_decode_errors() {
    assert!(matches!(
        decode(br#"{ "grid_size": 4 }"#),
        Err(DecodeError::MissingColors)
    ));
    assert!(matches!(
        decode(br#"{ "colors": [] }"#),
        Err(DecodeError::EmptyGrid)
    ));
    assert!(matches!(decode(b"not json"), Err(DecodeError::Malformed(_))));
    assert!(matches!(
        decode(br#"{ "colors": [["blue"]] }"#),
        Err(DecodeError::Malformed(_))
    ));
}

#[test]
fn test_save_and_load() {
    let path = temp_path("save_and_load.json");
    let source = numbered_canvas(6);
    save_canvas(&path, &source).unwrap();

    let mut target = Canvas::new(16).unwrap();
    let advisory = load_canvas(&path, &mut target).unwrap();

    assert_eq!(advisory, 6);
    assert_eq!(target.grid(), source.grid());

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_missing_colors_keeps_canvas() {
    let path = temp_path("missing_colors.json");
    fs::write(&path, br#"{ "grid_size": 3 }"#).unwrap();

    let mut canvas = numbered_canvas(4);
    let before = canvas.export_data();
    let err = load_canvas(&path, &mut canvas).unwrap_err();

    assert!(err.is_invalid_file());
    assert!(matches!(
        err,
        FileError::InvalidFile(DecodeError::MissingColors)
    ));
    assert_eq!(canvas.export_data(), before);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_missing_file_is_io_error() {
    let mut canvas = numbered_canvas(4);
    let before = canvas.export_data();
    let err = load_canvas(temp_path("does_not_exist.json"), &mut canvas).unwrap_err();

    assert!(matches!(err, FileError::IoError(_)));
    assert!(!err.is_invalid_file());
    assert_eq!(canvas.export_data(), before);
}

#[test]
fn test_save_to_bad_path_is_io_error() {
    let canvas = Canvas::new(2).unwrap();
    let path = temp_path("no_such_dir").join("out.json");
    assert!(matches!(
        save_canvas(&path, &canvas),
        Err(FileError::IoError(_))
    ));
}

#[test]
fn test_grid_file_extension() {
    assert!(is_grid_file("art/sprite.json"));
    assert!(is_grid_file("SPRITE.JSON"));
    assert!(!is_grid_file("sprite.png"));
    assert!(!is_grid_file("sprite"));

    let (name, extensions) = picker_filter();
    assert_eq!(name, "Pixel Grid");
    assert_eq!(extensions, ["json"]);
}

#[test]
fn test_decode_rejects_oversized_grid() {
    let rows = MAX_FILE_GRID_SIZE as usize + 1;
    let data = format!(r#"{{ "colors": [{}] }}"#, vec!["[]"; rows].join(","));

    assert!(matches!(
        decode(data.as_bytes()),
        Err(DecodeError::TooLarge { rows: r, max }) if r == rows && max == MAX_FILE_GRID_SIZE
    ));
}

#[test]
fn test_load_oversized_grid_keeps_canvas() {
    let path = temp_path("oversized.json");
    let rows = vec!["[]"; 200_000].join(",");
    fs::write(&path, format!(r#"{{ "colors": [{}] }}"#, rows)).unwrap();

    let mut canvas = numbered_canvas(4);
    let before = canvas.export_data();
    let err = load_canvas(&path, &mut canvas).unwrap_err();

    assert!(err.is_invalid_file());
    assert!(matches!(
        err,
        FileError::InvalidFile(DecodeError::TooLarge { .. })
    ));
    assert_eq!(canvas.export_data(), before);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_decode_largest_allowed_grid() {
    let rows = vec!["[]"; MAX_FILE_GRID_SIZE as usize].join(",");
    let decoded = decode(format!(r#"{{ "colors": [{}] }}"#, rows).as_bytes()).unwrap();
    assert_eq!(decoded.colors.len(), MAX_FILE_GRID_SIZE as usize);
}

#[test]
fn test_decode_bad_color_digits() {
    assert!(matches!(
        decode(br##"{ "colors": [["#+f+f+f"]] }"##),
        Err(DecodeError::Malformed(_))
    ));
}

#[test]
fn test_decode_ignores_unusable_grid_size() {
    for grid_size in ["-1", "\"16\"", "4294967296", "2.5", "null"] {
        let data = format!(r##"{{ "grid_size": {}, "colors": [["#ff0000"]] }}"##, grid_size);
        let decoded = decode(data.as_bytes()).unwrap();

        assert_eq!(decoded.grid_size, None, "grid_size {}", grid_size);
        assert_eq!(decoded.advisory_size(), 1);
    }
}
