#![deny(clippy::all)]
#![forbid(unsafe_code)]

use log::{debug, info};
use std::mem::size_of;

use vec2d_ops::Vec2D;

/// Sum of the two unit axes, normalized back to unit length.
fn normalized_diagonal() -> Vec2D<f32> {
    let right = Vec2D::new(0.0_f32, 1.0);
    let up = Vec2D::new(1.0_f32, 0.0);

    let diagonal = up + right;
    debug!("diagonal={}, length={}", diagonal, diagonal.length());

    diagonal.normalized()
}

/// The line written to stdout: byte size of the vector type.
fn size_report() -> String {
    format!("{}\n", size_of::<Vec2D<f32>>())
}

fn main() {
    env_logger::init();

    let normalized = normalized_diagonal();
    info!("normalized diagonal={}", normalized);

    print!("{}", size_report());
}
