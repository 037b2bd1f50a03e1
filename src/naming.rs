use std::collections::HashMap;

use crate::{Error, Result};

/// Letters usable as vertex names, in index order
const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Bidirectional lookup between single-letter vertex names and dense indices.
///
/// The table is fixed at construction (A=0, B=1, ... Z=25) and never changes,
/// so one instance can be shared by reference across every case.
#[derive(Debug, Clone)]
pub struct VertexNamer {
    names: Vec<String>,
    indices: HashMap<String, usize>,
}

impl VertexNamer {
    /// Builds the A..Z lookup
    pub fn alphabet() -> Self {
        let names: Vec<String> = ALPHABET.chars().map(String::from).collect();
        let indices = names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect();

        VertexNamer { names, indices }
    }

    /// Number of names in the table
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the name of a vertex index
    pub fn name_of(&self, index: usize) -> Result<&str> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownVertexName(index.to_string()))
    }

    /// Returns the index of a vertex name
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.indices
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownVertexName(name.to_string()))
    }

    /// Iterates the names in index order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

impl Default for VertexNamer {
    fn default() -> Self {
        Self::alphabet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_dense_and_ordered() {
        let namer = VertexNamer::alphabet();
        assert_eq!(namer.len(), 26);
        assert_eq!(namer.index_of("A").unwrap(), 0);
        assert_eq!(namer.index_of("B").unwrap(), 1);
        assert_eq!(namer.index_of("Z").unwrap(), 25);
        assert_eq!(namer.name_of(2).unwrap(), "C");

        for (index, name) in namer.names().enumerate() {
            assert_eq!(namer.index_of(name).unwrap(), index);
            assert_eq!(namer.name_of(index).unwrap(), name);
        }
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        let namer = VertexNamer::alphabet();
        assert!(matches!(namer.index_of("a"), Err(Error::UnknownVertexName(_))));
        assert!(matches!(namer.index_of("AB"), Err(Error::UnknownVertexName(_))));
        assert!(matches!(namer.index_of("?"), Err(Error::UnknownVertexName(_))));
        assert!(matches!(namer.name_of(26), Err(Error::UnknownVertexName(_))));
    }
}
