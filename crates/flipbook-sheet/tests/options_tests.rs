use flipbook_sheet::*;

#[test]
fn test_default_options() {
    let options = SheetOptions::default();

    assert_eq!(options.sort_strategy, SortStrategy::CaptureTime);
    assert_eq!(options.paper_size, PaperSize::Letter);
    assert_eq!(options.orientation, Orientation::Landscape);
    assert_eq!(options.columns, 3);
    assert_eq!(options.rows, 4);
    assert_eq!(options.capacity(), 12);
    assert_eq!(options.jpeg_quality, 95);
    assert!((options.preview_scale - 1.5).abs() < f32::EPSILON);
    // Quarter-inch margin and tenth-inch gutter
    assert!((options.margin_mm - 6.35).abs() < f32::EPSILON);
    assert!((options.gutter_mm - 2.54).abs() < f32::EPSILON);
}

#[test]
fn test_validate_accepts_defaults() {
    assert!(SheetOptions::default().validate().is_ok());
}

#[test]
fn test_validate_rejects_out_of_range_grid() {
    for (columns, rows) in [(1, 4), (9, 4), (3, 1), (3, 8)] {
        let options = SheetOptions {
            columns,
            rows,
            ..Default::default()
        };
        match options.validate() {
            Err(SheetError::Config(_)) => {}
            other => panic!("Expected Config error for {}x{}, got {:?}", columns, rows, other),
        }
    }
}

#[test]
fn test_validate_rejects_bad_scalars() {
    let negative_margin = SheetOptions {
        margin_mm: -1.0,
        ..Default::default()
    };
    assert!(negative_margin.validate().is_err());

    let upscaling_preview = SheetOptions {
        preview_scale: 0.5,
        ..Default::default()
    };
    assert!(upscaling_preview.validate().is_err());

    let zero_quality = SheetOptions {
        jpeg_quality: 0,
        ..Default::default()
    };
    assert!(zero_quality.validate().is_err());
}

#[test]
fn test_grid_range_boundaries_accepted() {
    for (columns, rows) in [(2, 2), (8, 7), (2, 7), (8, 2)] {
        let options = SheetOptions {
            columns,
            rows,
            ..Default::default()
        };
        assert!(options.validate().is_ok(), "{}x{} should validate", columns, rows);
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_save_load_roundtrip() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("sheet_options.json");

    let options = SheetOptions {
        sort_strategy: SortStrategy::Filename,
        orientation: Orientation::Portrait,
        columns: 4,
        rows: 5,
        ..Default::default()
    };

    options.save(&path).await.unwrap();
    let loaded = SheetOptions::load(&path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_malformed_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    tokio::fs::write(&path, b"{not json").await.unwrap();

    match SheetOptions::load(&path).await {
        Err(SheetError::Config(_)) => {}
        other => panic!("Expected Config error, got {:?}", other),
    }
}
