//! Real and ideal length of a full route traversal.

use crate::distance::table::DistanceTable;
use crate::identifiers::StopId;
use crate::models::types::{RouteDistances, RouteKind};
use crate::spatial::great_circle_distance;
use crate::store::EntityStore;

/// Measure a route over `stops` against the distances recorded so far.
///
/// A round trip is walked once along `stops`. An out-and-back route is walked
/// forward then backward, resolving each return leg in its own direction, so
/// asymmetric recorded distances both count. Great-circle distance is
/// symmetric, which makes the ideal length of an out-and-back route twice its
/// forward length.
pub fn measure_route(
    store: &EntityStore,
    table: &DistanceTable,
    stops: &[StopId],
    kind: RouteKind,
) -> RouteDistances {
    let mut distances = RouteDistances::default();

    for leg in stops.windows(2) {
        let (from, to) = (leg[0], leg[1]);
        distances.real += table.resolve(store, from, to);
        distances.ideal +=
            great_circle_distance(store.stop(from).coordinates, store.stop(to).coordinates);
    }

    if kind == RouteKind::OutAndBack {
        for leg in stops.windows(2).rev() {
            distances.real += table.resolve(store, leg[1], leg[0]);
        }
        distances.ideal *= 2.0;
    }

    distances
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::identifiers::StopName;
    use crate::models::types::{Coordinates, Stop};

    struct Fixture {
        store: EntityStore,
        table: DistanceTable,
        stops: Vec<StopId>,
    }

    // Three stops on a line of longitude, recorded distances asymmetric on one leg
    fn fixture() -> Fixture {
        let mut store = EntityStore::new();
        let stops: Vec<StopId> = [55.60, 55.61, 55.62]
            .into_iter()
            .enumerate()
            .map(|(i, lat)| {
                store.push_stop(Stop {
                    name: StopName::new(format!("S{}", i + 1)),
                    coordinates: Coordinates::new(lat, 37.2),
                })
            })
            .collect();

        let mut table = DistanceTable::new();
        table.set(stops[0], stops[1], 1500);
        table.set(stops[1], stops[0], 1700);
        table.set(stops[1], stops[2], 1200);

        Fixture { store, table, stops }
    }

    fn gc(f: &Fixture, i: usize, j: usize) -> f64 {
        great_circle_distance(
            f.store.stop(f.stops[i]).coordinates,
            f.store.stop(f.stops[j]).coordinates,
        )
    }

    #[test]
    fn test_round_trip() {
        let f = fixture();
        let d = measure_route(&f.store, &f.table, &f.stops, RouteKind::RoundTrip);

        assert_eq!(d.real, 1500.0 + 1200.0);
        assert_relative_eq!(d.ideal, gc(&f, 0, 1) + gc(&f, 1, 2));
    }

    #[test]
    fn test_out_and_back_uses_both_directions() {
        let f = fixture();
        let d = measure_route(&f.store, &f.table, &f.stops, RouteKind::OutAndBack);

        // Forward 1500 + 1200, back 1200 (reverse fallback) + 1700
        assert_eq!(d.real, 1500.0 + 1200.0 + 1200.0 + 1700.0);
        assert_relative_eq!(d.ideal, 2.0 * (gc(&f, 0, 1) + gc(&f, 1, 2)));
    }

    #[test]
    fn test_curvature_not_below_one_when_recorded_exceeds_geometry() {
        let f = fixture();
        for kind in [RouteKind::RoundTrip, RouteKind::OutAndBack] {
            let d = measure_route(&f.store, &f.table, &f.stops, kind);
            assert!(d.curvature() >= 1.0 - 1e-9);
        }
    }

    #[test]
    fn test_unrecorded_legs_are_straight() {
        let f = fixture();
        let empty = DistanceTable::new();
        let d = measure_route(&f.store, &empty, &f.stops, RouteKind::OutAndBack);

        assert_relative_eq!(d.curvature(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_single_stop_route_is_degenerate() {
        let f = fixture();
        let d = measure_route(&f.store, &f.table, &f.stops[..1], RouteKind::RoundTrip);

        assert_eq!(d, RouteDistances::default());
        assert!(d.curvature().is_nan());
    }
}
