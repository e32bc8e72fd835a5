use flipbook_sheet::*;

fn named_inputs(names: &[&str]) -> Vec<SourceImage> {
    names
        .iter()
        .map(|name| SourceImage::new(*name, vec![0u8; 16]))
        .collect()
}

#[test]
fn test_page_count_is_ceiling_of_capacity() {
    let options = SheetOptions::default(); // capacity 12

    for (count, pages) in [(1, 1), (11, 1), (12, 1), (13, 2), (24, 2), (25, 3)] {
        let names: Vec<String> = (0..count).map(|i| format!("img_{:03}.jpg", i)).collect();
        let refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
        let stats = calculate_statistics(&named_inputs(&refs), &options).unwrap();
        assert_eq!(stats.pages, pages, "wrong page count for {} images", count);
        assert_eq!(stats.frames, count);
    }
}

#[test]
fn test_hidden_names_counted_separately() {
    let stats = calculate_statistics(
        &named_inputs(&["a.jpg", ".DS_Store", "b.jpg", "._photo.jpg"]),
        &SheetOptions::default(),
    )
    .unwrap();

    assert_eq!(stats.valid_images, 2);
    assert_eq!(stats.skipped_hidden, 2);
}

#[test]
fn test_all_hidden_is_an_error() {
    let result = calculate_statistics(
        &named_inputs(&[".DS_Store", "._a.jpg"]),
        &SheetOptions::default(),
    );

    match result {
        Err(SheetError::NoInput) => {}
        other => panic!("Expected NoInput, got {:?}", other),
    }
}

#[test]
fn test_no_inputs_is_an_error() {
    match calculate_statistics(&[], &SheetOptions::default()) {
        Err(SheetError::NoInput) => {}
        other => panic!("Expected NoInput, got {:?}", other),
    }
}

#[test]
fn test_invalid_options_rejected_first() {
    let options = SheetOptions {
        rows: 9,
        ..Default::default()
    };

    match calculate_statistics(&named_inputs(&["a.jpg"]), &options) {
        Err(SheetError::Config(_)) => {}
        other => panic!("Expected Config, got {:?}", other),
    }
}

#[test]
fn test_capacity_follows_grid_shape() {
    let options = SheetOptions {
        columns: 2,
        rows: 2,
        ..Default::default()
    };

    let names: Vec<String> = (0..9).map(|i| format!("img_{}.jpg", i)).collect();
    let refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
    let stats = calculate_statistics(&named_inputs(&refs), &options).unwrap();

    // 9 frames over capacity 4
    assert_eq!(stats.pages, 3);
}
