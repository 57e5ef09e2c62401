/// The Type used to reference a Station in a [`Network`](super::Network)
pub type StationId = usize;

/// A Position on the map, usually latitude and longitude.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Position {
    /// the first coordinate
    pub lat: f64,
    /// the second coordinate
    pub lon: f64,
}

impl Position {
    /// creates a new Position
    pub fn new(lat: f64, lon: f64) -> Position {
        Position { lat, lon }
    }

    /// The straight-line (euclidean) Distance to `other`.
    /// ## Examples
    /// ```
    /// # use transit_pathfinding::Position;
    /// let a = Position::new(0.0, 0.0);
    /// let b = Position::new(3.0, 4.0);
    ///
    /// assert_eq!(a.distance_to(b), 5.0);
    /// ```
    pub fn distance_to(self, other: Position) -> f64 {
        let d_lat = other.lat - self.lat;
        let d_lon = other.lon - self.lon;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }
}

impl From<(f64, f64)> for Position {
    fn from((lat, lon): (f64, f64)) -> Position {
        Position { lat, lon }
    }
}

/// A single Station of a [`Network`](super::Network).
///
/// Stations are created through a [`NetworkBuilder`](super::NetworkBuilder) and never change
/// afterwards. Links are stored as [`StationId`]s into the owning Network.
#[derive(Clone, Debug)]
pub struct Station {
    pub(crate) id: StationId,
    pub(crate) name: String,
    pub(crate) position: Position,
    pub(crate) links: Vec<StationId>,
}

impl Station {
    pub(crate) fn new(id: StationId, name: String, position: Position) -> Station {
        Station {
            id,
            name,
            position,
            links: Vec::new(),
        }
    }

    /// the id of this Station within its Network
    pub fn id(&self) -> StationId {
        self.id
    }

    /// the unique name of this Station
    pub fn name(&self) -> &str {
        &self.name
    }

    /// where this Station is located
    pub fn position(&self) -> Position {
        self.position
    }

    /// all Stations directly reachable from this one, in the order they were linked
    pub fn links(&self) -> &[StationId] {
        &self.links
    }

    pub(crate) fn add_link(&mut self, other: StationId) {
        if other != self.id && !self.links.contains(&other) {
            self.links.push(other);
        }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Station) -> bool {
        self.id == other.id
    }
}
impl Eq for Station {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_are_unique() {
        let mut station = Station::new(0, "Bank".into(), Position::new(0.0, 0.0));
        station.add_link(1);
        station.add_link(2);
        station.add_link(1);
        station.add_link(0);

        assert_eq!(station.links(), &[1, 2]);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Position::new(51.5, -0.1);
        let b = Position::new(51.6, -0.2);

        assert_eq!(a.distance_to(b), b.distance_to(a));
        assert_eq!(a.distance_to(a), 0.0);
    }
}
