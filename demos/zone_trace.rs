//! Scripted zone tracing session.
//!
//! Replays clicks the way a drawing surface would: every traced vertex is
//! accepted or rejected, the zone is closed, then hit tests run against it.
//!
//! Usage:
//! ```text
//! cargo run --example zone_trace
//! RUST_LOG=zonegeo=trace cargo run --example zone_trace
//! ```

use zonegeo::operations::query::{LinePolygonIntersect, PointInPolygon};
use zonegeo::{Point2, Polyline, Segment, ZoneError};

fn main() -> Result<(), ZoneError> {
    // Default: WARN for everything, INFO for the demo and zonegeo.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("zone_trace=info".parse().unwrap_or_default())
        .add_directive("zonegeo=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let clicks = [
        (0.0, 0.0),
        (40.0, 0.0),
        (40.0, 20.0),
        (10.0, -5.0), // crosses the first edge
        (20.0, 20.0),
        (20.0, 40.0),
        (0.0, 40.0),
    ];

    let mut outline = Polyline::new();
    for (x, y) in clicks {
        let point = Point2::new(x, y);
        if outline.try_push(point) {
            tracing::info!(x, y, "vertex accepted");
        } else {
            tracing::warn!(x, y, "vertex rejected: outline would cross itself");
        }
    }

    if !outline.can_close() {
        tracing::warn!("outline cannot be closed");
        return Ok(());
    }
    let zone = outline.into_polygon()?;
    tracing::info!(vertices = zone.vertex_count(), "zone closed");

    for (x, y) in [(5.0, 5.0), (30.0, 30.0), (0.0, 20.0), (10.0, 30.0)] {
        let inside = PointInPolygon::new(Point2::new(x, y)).execute(&zone);
        tracing::info!(x, y, inside, "hit test");
    }

    let probes = [
        Segment::new(Point2::new(30.0, 30.0), Point2::new(10.0, 10.0)),
        Segment::new(Point2::new(30.0, 30.0), Point2::new(20.0, 20.0)),
        Segment::new(Point2::new(-5.0, 50.0), Point2::new(-5.0, -5.0)),
    ];
    for probe in probes {
        let crosses = LinePolygonIntersect::new(probe).execute(&zone);
        tracing::info!(?probe, crosses, "boundary probe");
    }

    Ok(())
}
