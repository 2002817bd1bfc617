// Deduplicate the fixed five-point sample and print the index list followed by
// the unique points.
// Run with `cargo run --example sample_points` (set RUST_LOG=debug for pass summaries).

use mesh_weld::geometry::point::Point2;
use mesh_weld::weld::dedup::dedup_points;

fn main() {
    env_logger::init();

    let vertices: Vec<Point2> = [
        (0, 0),
        (1, 0),
        (0, 0), // repeat
        (2, 2),
        (0, 0), // repeat again
    ]
    .into_iter()
    .map(Point2::from)
    .collect();

    let out = dedup_points(&vertices);
    println!("{out}");
}
