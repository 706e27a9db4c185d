//! Orientation and numeric series regression test
//!
//! Run with:
//! ```
//! cargo test -p fibermorph-core --test orientation_reg
//! ```

use fibermorph_core::{BinaryImage, Numa, check_binary, normalize_orientation};
use fibermorph_test::{RegParams, fixtures};

#[test]
fn orientation_reg() {
    let mut rp = RegParams::new("orientation");

    // Normalization is idempotent and leaves foreground in the minority
    for (density, seed) in [(0.2, 1), (0.5, 2), (0.8, 3), (0.97, 4)] {
        let img = fixtures::noise(64, 48, density, seed);
        let once = check_binary(&img);
        let twice = check_binary(&once);
        rp.compare_images(&once, &twice);
        let fg = once.count_foreground();
        rp.compare_values(1.0, (fg <= once.len() - fg) as u8 as f64, 0.0);
    }

    // Dense masks flip, sparse skeletons pass through
    let line = fixtures::horizontal_line(30, 10, 5, 2, 25);
    rp.compare_images(&line, &check_binary(&line));
    let inverted = line.invert();
    rp.compare_images(&line, &check_binary(&inverted));

    // Numeric matrices: 0/255 masks and more-than-binary input
    let values: Vec<u8> = line
        .as_slice()
        .iter()
        .map(|&set| if set { 0 } else { 255 })
        .collect();
    let from_values = normalize_orientation(30, 10, &values).unwrap();
    rp.compare_images(&line, &from_values);

    let gray: Vec<u16> = line
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, &set)| if set { 1 + (i % 7) as u16 } else { 0 })
        .collect();
    let from_gray = normalize_orientation(30, 10, &gray).unwrap();
    rp.compare_images(&line, &from_gray);

    let single = BinaryImage::new(4, 4).unwrap();
    rp.compare_images(&single, &check_binary(&single));

    assert!(rp.cleanup(), "orientation regression test failed");
}

#[test]
fn numa_trim_reg() {
    let mut rp = RegParams::new("numa_trim");

    // 101 evenly spaced values: the 1%/99% band drops exactly the two ends
    let series: Numa = (0..=100).map(|i| i as f64).collect();
    rp.compare_values(1.0, series.quantile(0.01).unwrap(), 1e-12);
    rp.compare_values(99.0, series.quantile(0.99).unwrap(), 1e-12);
    let trimmed = series.trim_quantiles(0.01, 0.99).unwrap();
    rp.compare_values(99.0, trimmed.len() as f64, 0.0);
    rp.compare_values(50.0, trimmed.mean().unwrap(), 1e-12);
    rp.compare_values(50.0, trimmed.median().unwrap(), 0.0);

    // NaN entries are ignored by every statistic
    let with_nan = Numa::from_vec(vec![1.0, f64::NAN, 3.0, 2.0, f64::NAN]);
    rp.compare_values(2.0, with_nan.mean().unwrap(), 0.0);
    rp.compare_values(2.0, with_nan.median().unwrap(), 0.0);
    rp.compare_values(3.0, with_nan.non_nan().len() as f64, 0.0);

    // Even length median averages the middle pair
    let even = Numa::from_vec(vec![4.0, 1.0, 3.0, 2.0]);
    rp.compare_values(2.5, even.median().unwrap(), 0.0);

    rp.compare_values(1.0, Numa::new().mean().is_none() as u8 as f64, 0.0);
    rp.compare_values(1.0, Numa::new().median().is_err() as u8 as f64, 0.0);

    assert!(rp.cleanup(), "numa trim regression test failed");
}
