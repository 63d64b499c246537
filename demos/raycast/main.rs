//! Raycast — casts a few rays against a small terrain patch and prints the result.
//!
//! Usage:
//! ```text
//! cargo run --example raycast
//! RUST_LOG=geokernel=debug cargo run --example raycast   # show degenerate-input events
//! ```

use geokernel::{GeometryKernel, Point3, Result, Vector3};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for geokernel.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geokernel=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("raycast=info".parse().unwrap_or_default())
        .add_directive("geokernel=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let kernel = GeometryKernel::default();

    // Two triangles forming a sloped quad, wound so both normals point up (+y).
    let quad = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 4.0),
        Point3::new(4.0, 2.0, 4.0),
        Point3::new(4.0, 1.0, 0.0),
    ];
    let tris = [[quad[0], quad[1], quad[2]], [quad[0], quad[2], quad[3]]];

    let down = Vector3::new(0.0, -1.0, 0.0);
    for (x, z) in [(1.0, 1.0), (3.0, 1.0), (2.0, 3.5), (5.0, 5.0)] {
        let origin = Point3::new(x, 10.0, z);
        let hit = tris
            .iter()
            .find_map(|[a, b, c]| kernel.ray_triangle_intersect(&origin, &down, a, b, c));
        match hit {
            Some(hit) => tracing::info!(x, z, y = hit.point.y, t = hit.t, "ground hit"),
            None => tracing::info!(x, z, "no ground"),
        }
    }

    let plane = kernel.build_plane(&quad[0], &quad[1], &quad[2])?;
    if let Some(ground) = kernel.ray_plane_intersect_xz(&plane, &Point3::new(2.0, 0.0, 2.0)) {
        tracing::info!(?ground, "height under (2, 2)");
    }

    let rail = kernel.nearest_point_on_segment(&Point3::new(6.0, 0.0, 1.0), &quad[0], &quad[3]);
    tracing::info!(?rail, "closest point on front edge");

    // Degenerate input is reported, never turned into NaN.
    if let Err(err) = kernel.build_plane(&quad[0], &quad[0], &quad[3]) {
        tracing::warn!(%err, "plane rejected");
    }

    Ok(())
}
