//! The Transit Network that searches run on.
//!
//! Stations live in an arena and refer to each other through [`StationId`]s, so the
//! back-and-forth Links between Stations never form ownership cycles.

mod station;
pub use station::{Position, Station, StationId};

mod builder;
pub use builder::NetworkBuilder;

use crate::SearchError;
use hashbrown::HashMap;

/// A named sequence of Stations, e.g. an underground Line.
///
/// Lines carry no meaning for the search itself. They are kept as metadata for whatever
/// displays the resulting Paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub(crate) name: String,
    pub(crate) stations: Vec<StationId>,
}

impl Line {
    /// the name of the Line
    pub fn name(&self) -> &str {
        &self.name
    }

    /// the Stations along the Line, in order
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }
}

/// An immutable Network of Stations.
///
/// Create one with [`Network::builder`].
#[derive(Clone, Debug)]
pub struct Network {
    pub(crate) stations: slab::Slab<Station>,
    pub(crate) by_name: HashMap<String, StationId>,
    pub(crate) lines: Vec<Line>,
}

impl Network {
    /// Starts building a new Network
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::new()
    }

    /// the number of Stations
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// `true` if the Network has no Stations
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// The id of the Station called `name`, if there is one
    pub fn id_of(&self, name: &str) -> Option<StationId> {
        self.by_name.get(name).copied()
    }

    /// Like [`id_of`](Network::id_of), but reports a missing Station as [`SearchError::UnknownStation`]
    pub fn lookup(&self, name: &str) -> Result<StationId, SearchError> {
        self.id_of(name)
            .ok_or_else(|| SearchError::UnknownStation(name.to_owned()))
    }

    /// The Station with the given id, if there is one
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    /// An Iterator over all Stations, ordered by id
    pub fn iter(&self) -> impl Iterator<Item = &Station> + '_ {
        self.stations.iter().map(|(_, station)| station)
    }

    /// all Lines, in the order they were added
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// the Stations directly linked to `id`
    #[track_caller]
    pub fn neighbors(&self, id: StationId) -> &[StationId] {
        self[id].links()
    }

    /// `true` if there is a direct Link between `a` and `b`
    pub fn are_linked(&self, a: StationId, b: StationId) -> bool {
        self.station(a)
            .map_or(false, |station| station.links().contains(&b))
    }
}

use std::ops::Index;
impl Index<StationId> for Network {
    type Output = Station;
    #[track_caller]
    fn index(&self, index: StationId) -> &Station {
        &self.stations[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_network() -> Network {
        let mut builder = Network::builder();
        builder.add_station("A", (0.0, 0.0)).unwrap();
        builder.add_station("B", (0.0, 1.0)).unwrap();
        builder.add_station("C", (5.0, 5.0)).unwrap();
        builder.link("A", "B").unwrap();
        builder.build()
    }

    #[test]
    fn lookup() {
        let network = small_network();

        let b = network.lookup("B").unwrap();
        assert_eq!(network[b].name(), "B");
        assert_eq!(network[b].position(), Position::new(0.0, 1.0));
        assert_eq!(
            network.lookup("NotAStation"),
            Err(SearchError::UnknownStation("NotAStation".into()))
        );
        assert!(network.station(42).is_none());
    }

    #[test]
    fn iter_in_id_order() {
        let network = small_network();

        let names: Vec<_> = network.iter().map(Station::name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert!(network.iter().enumerate().all(|(i, station)| station.id() == i));
    }

    #[test]
    fn neighbors() {
        let network = small_network();
        let [a, b, c] = ["A", "B", "C"].map(|name| network.id_of(name).unwrap());

        assert_eq!(network.neighbors(a), &[b]);
        assert_eq!(network.neighbors(b), &[a]);
        assert!(network.neighbors(c).is_empty());
        assert!(!network.are_linked(a, c));
        assert!(!network.are_linked(99, a));
    }
}
