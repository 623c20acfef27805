//! Line inspector: classifies a few line pairs and reports their
//! intersections, closest points and distances.
//!
//! Usage:
//! ```text
//! cargo run --example inspect
//! RUST_LOG=plucker=trace cargo run --example inspect   # show degenerate branches
//! ```

use plucker::math::{hnormalized, Point3, Vector3, Vector4};
use plucker::operations::distance::{distance_between_lines, distance_from_origin, distance_to_point};
use plucker::operations::find::{
    find_closest_points, find_line_intersection, find_plane_intersection, find_plane_through_line,
};
use plucker::operations::query::classify_lines;
use plucker::{Plane, Plucker, Real};
use tracing::{info, warn};

fn main() -> plucker::Result<()> {
    // Default: WARN for everything, INFO for this demo and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=plucker=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("inspect=info".parse().unwrap_or_default())
        .add_directive("plucker=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let tol = f64::DEFAULT_TOLERANCE;
    let point = |x: f64, y: f64, z: f64| Vector4::new(x, y, z, 1.0);

    let base = Plucker::try_from_points(&point(0.0, 2.0, 6.0), &point(0.0, 2.0, 4.0), tol)?;
    info!(line = ?base.coord(), d0 = distance_from_origin(&base), "base line");

    let others = [
        ("reversed", Plucker::try_from_points(&point(0.0, 2.0, 4.0), &point(0.0, 2.0, 6.0), tol)?),
        ("parallel", Plucker::try_from_points(&point(2.0, 0.0, 6.0), &point(2.0, 0.0, 4.0), tol)?),
        ("crossing", Plucker::try_from_points(&point(0.0, 2.0, 0.0), &point(2.0, 2.0, 0.0), tol)?),
        ("skew", Plucker::try_from_points(&point(0.0, 0.0, 0.0), &point(2.0, 0.0, 0.0), tol)?),
    ];

    for (name, other) in &others {
        let relation = classify_lines(&base, other, tol);
        let distance = distance_between_lines(&base, other, tol);
        let hit = find_line_intersection(&base, other, tol).and_then(hnormalized);
        let closest = find_closest_points(&base, other, tol)
            .and_then(|(a, b)| Some((hnormalized(a)?, hnormalized(b)?)));
        info!(name, ?relation, distance, ?hit, ?closest, "line pair");
    }

    let origin = point(0.0, 0.0, 0.0);
    info!(distance = distance_to_point(&base, &origin, tol), "origin to base line");

    if let Some(plane) = find_plane_through_line(&base, tol) {
        info!(plane = ?plane.coord(), "plane through base line");
    }

    let x1 = Plane::from_point_normal(&Point3::new(1.0, 0.0, 0.0), Vector3::x());
    let y2 = Plane::from_point_normal(&Point3::new(0.0, 2.0, 0.0), Vector3::y());
    match find_plane_intersection(&x1, &y2, tol) {
        Some(line) => info!(line = ?line.coord(), "x = 1 meets y = 2"),
        None => warn!("planes x = 1 and y = 2 reported parallel"),
    }

    if let Err(err) = Plucker::try_from_points(&origin, &origin, tol) {
        info!(%err, "degenerate line rejected");
    }

    Ok(())
}
