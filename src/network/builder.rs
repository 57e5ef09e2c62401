use super::{Line, Network, Position, Station, StationId};
use crate::NetworkError;
use hashbrown::HashMap;

/// Collects Stations, Links and Lines and turns them into an immutable [`Network`].
///
/// Every Link is checked against the Stations added so far, so a finished Network never refers
/// to a Station it does not contain.
///
/// ## Examples
/// ```
/// # use transit_pathfinding::{Network, NetworkError};
/// let mut builder = Network::builder();
/// builder.add_station("Bank", (51.5133, -0.0886))?;
/// builder.add_station("Moorgate", (51.5186, -0.0886))?;
/// builder.link("Bank", "Moorgate")?;
///
/// assert_eq!(
///     builder.link("Bank", "Atlantis"),
///     Err(NetworkError::UnknownStation("Atlantis".into()))
/// );
///
/// let network = builder.build();
/// let bank = network.id_of("Bank").unwrap();
/// let moorgate = network.id_of("Moorgate").unwrap();
/// assert!(network.are_linked(bank, moorgate));
/// assert!(network.are_linked(moorgate, bank));
/// # Ok::<(), NetworkError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct NetworkBuilder {
    stations: slab::Slab<Station>,
    by_name: HashMap<String, StationId>,
    lines: Vec<Line>,
}

impl NetworkBuilder {
    /// Creates an empty builder
    pub fn new() -> NetworkBuilder {
        NetworkBuilder::default()
    }

    /// Adds a Station without any Links.
    ///
    /// Fails with [`NetworkError::DuplicateStation`] if the name is already taken.
    pub fn add_station(
        &mut self,
        name: impl Into<String>,
        position: impl Into<Position>,
    ) -> Result<StationId, NetworkError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(NetworkError::DuplicateStation(name));
        }
        let entry = self.stations.vacant_entry();
        let id = entry.key();
        entry.insert(Station::new(id, name.clone(), position.into()));
        self.by_name.insert(name, id);
        Ok(id)
    }

    /// Links two Stations in both directions.
    ///
    /// Linking a Station to itself or linking the same pair twice has no effect.
    pub fn link(&mut self, a: &str, b: &str) -> Result<(), NetworkError> {
        let a = self.id_of(a)?;
        let b = self.id_of(b)?;
        self.link_ids(a, b);
        Ok(())
    }

    /// Adds a Line running through `stations` in order, linking each consecutive pair.
    ///
    /// Nothing is changed if any of the names is unknown.
    pub fn add_line(&mut self, name: impl Into<String>, stations: &[&str]) -> Result<(), NetworkError> {
        let ids = stations
            .iter()
            .map(|name| self.id_of(name))
            .collect::<Result<Vec<_>, _>>()?;

        for pair in ids.windows(2) {
            self.link_ids(pair[0], pair[1]);
        }
        self.lines.push(Line {
            name: name.into(),
            stations: ids,
        });
        Ok(())
    }

    /// the number of Stations added so far
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// `true` if no Station was added yet
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Finishes the Network. It can no longer be changed afterwards.
    pub fn build(self) -> Network {
        search_log!(
            debug,
            "built network with {} stations and {} lines",
            self.stations.len(),
            self.lines.len()
        );
        Network {
            stations: self.stations,
            by_name: self.by_name,
            lines: self.lines,
        }
    }

    fn id_of(&self, name: &str) -> Result<StationId, NetworkError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| NetworkError::UnknownStation(name.to_owned()))
    }

    fn link_ids(&mut self, a: StationId, b: StationId) {
        self.stations[a].add_link(b);
        self.stations[b].add_link(a);
    }
}
