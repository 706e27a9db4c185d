//! Batch driver regression test
//!
//! Run with:
//! ```
//! cargo test -p fibermorph --test batch_reg
//! ```
//!
//! Generate golden files:
//! ```
//! REGTEST_MODE=generate cargo test -p fibermorph --test batch_reg
//! ```

use fibermorph::io::{IMAGE_SUMMARY_HEADERS, write_image_file};
use fibermorph::{AnalysisConfig, CurvatureAnalyzer, SUMMARY_FILE_NAME, analyze_file_batch};
use fibermorph_test::{RegParams, fixtures, scratch_dir};

#[test]
fn batch_reg() {
    let mut rp = RegParams::new("batch");
    let dir = scratch_dir("batch").unwrap();
    let input = dir.join("input");
    let output = dir.join("output");
    std::fs::create_dir_all(&input).unwrap();

    let line = fixtures::horizontal_line(60, 9, 4, 5, 45);
    let arc = fixtures::arc(110, 60, 50.0, 55.0, 40.0, 20.0, 160.0);
    let cross = fixtures::cross(41, 41, 20, 20, 15);
    let mut paths = Vec::new();
    for (name, image) in [("line", &line), ("arc", &arc), ("cross", &cross)] {
        let path = input.join(format!("{name}.png"));
        write_image_file(image, &path).unwrap();
        paths.push(path);
    }
    paths.push(input.join("missing.png"));

    let config = AnalysisConfig::default()
        .with_resolution(1.0)
        .with_window_size(vec![10.0, 20.0])
        .with_save_img(true);
    let analyzer = CurvatureAnalyzer::new(config).unwrap().with_output_dir(&output);
    let batch = analyze_file_batch(&analyzer, &paths);

    // Three images succeed, the missing file is recorded
    rp.compare_values(4.0, batch.entries.len() as f64, 0.0);
    rp.compare_values(3.0, batch.succeeded() as f64, 0.0);
    let failed: Vec<&str> = batch.failures().map(|(name, _)| name).collect();
    rp.compare_strings(b"missing", failed.join(",").as_bytes());

    // Two window sizes per image; the cross arms (13 px) are too short for 20 px
    let rows = batch.summary_rows();
    rp.compare_values(5.0, rows.len() as f64, 0.0);
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    rp.compare_strings(b"line_WindowSize-10px", ids[0].as_bytes());
    rp.compare_strings(b"cross_WindowSize-10px", ids[4].as_bytes());

    // Summary table: header plus one line per row
    let summary = output.join(SUMMARY_FILE_NAME);
    rp.compare_values(
        1.0,
        (batch.summary_path.as_deref() == Some(summary.as_path())) as u8 as f64,
        0.0,
    );
    let text = std::fs::read_to_string(&summary).unwrap();
    let mut lines = text.lines();
    rp.compare_strings(
        IMAGE_SUMMARY_HEADERS.join(",").as_bytes(),
        lines.next().unwrap_or_default().as_bytes(),
    );
    rp.compare_values(5.0, lines.count() as f64, 0.0);
    rp.write_data_and_check(text.as_bytes(), "csv").unwrap();

    // Pruned visualizations were saved for the readable images
    for name in ["line", "arc", "cross"] {
        let png = output.join("pruned").join(format!("{name}.png"));
        rp.compare_values(1.0, png.exists() as u8 as f64, 0.0);
    }

    // Validation runs skip visualizations but keep the numbers
    let test_out = dir.join("test_run");
    let config = analyzer.config().clone().with_test(true);
    let analyzer = CurvatureAnalyzer::new(config).unwrap().with_output_dir(&test_out);
    let test_batch = analyze_file_batch(&analyzer, &paths[..3]);
    rp.compare_values(0.0, test_out.join("pruned").exists() as u8 as f64, 0.0);
    rp.compare_values(1.0, (test_batch.summary_rows() == rows) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "batch regression test failed");
}
