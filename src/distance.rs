use crate::Station;

/// The straight-line Distance between two Stations.
///
/// This is the Cost of travelling along a Link.
///
/// ## Examples
/// ```
/// # use transit_pathfinding::{distance, Network};
/// let mut builder = Network::builder();
/// let a = builder.add_station("A", (0.0, 0.0)).unwrap();
/// let b = builder.add_station("B", (3.0, 4.0)).unwrap();
/// let network = builder.build();
///
/// assert_eq!(distance(&network[a], &network[b]), 5.0);
/// ```
pub fn distance(a: &Station, b: &Station) -> f64 {
    a.position().distance_to(b.position())
}

/// Estimates the remaining Cost from `station` to `goal`.
///
/// Since no chain of Links can be shorter than the straight line, this never overestimates
/// and A* using it returns optimal Paths.
pub fn heuristic(station: &Station, goal: &Station) -> f64 {
    distance(station, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn station(id: usize, lat: f64, lon: f64) -> Station {
        Station::new(id, id.to_string(), Position::new(lat, lon))
    }

    #[test]
    fn euclidean() {
        let a = station(0, 1.0, 1.0);
        let b = station(1, 4.0, 5.0);

        assert_eq!(distance(&a, &b), 5.0);
        assert_eq!(distance(&b, &a), 5.0);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn heuristic_is_distance() {
        let a = station(0, -2.0, 0.5);
        let goal = station(1, 1.0, 4.5);

        assert_eq!(heuristic(&a, &goal), distance(&a, &goal));
        assert_eq!(heuristic(&goal, &goal), 0.0);
    }
}
