// File: crates/sparkline-examples/src/bin/basic.rs
// Summary: Minimal example that renders an animated sparkline to SVG.

use sparkline_core::{InstanceId, Sparkline, SparklineOptions};

fn main() {
    let data = vec![4.0, 6.5, 5.0, 8.0, 7.25, 9.5, 8.0, 11.0, 10.5, 12.0];

    let chart = Sparkline::new(InstanceId::new("example"), data, SparklineOptions::default())
        .expect("default options are valid");

    let out = std::path::PathBuf::from("target/out/example_sparkline.svg");
    chart.write_svg(&out).expect("write svg");
    println!("Wrote {}", out.display());
}
