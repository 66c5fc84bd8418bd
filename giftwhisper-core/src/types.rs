use std::collections::{HashMap, HashSet};

use crate::pairing::Strategy;

/// A directed gift edge: `(gifter, receiver)` participant IDs.
pub type Pairing = (i64, i64);

/// Internal indexed pairing (usize indices, not caller IDs).
pub(crate) type IndexedPairing = (usize, usize);

/// Options for one draw invocation.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawOptions {
    /// Which generator to use.
    pub strategy: Strategy,
    /// Replace random selection with a successor walk over the input order.
    /// Only meaningful for `Strategy::Chained`; exists so the structural
    /// invariants are testable without randomness.
    pub deterministic: bool,
    /// Seed for a reproducible draw. `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl Default for DrawOptions {
    fn default() -> Self {
        DrawOptions {
            strategy: Strategy::Chained,
            deterministic: false,
            seed: None,
        }
    }
}

/// A completed draw: the pairing list in gifter input order, plus direct
/// lookups in both directions for the room-creation side of the system.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Draw {
    pairings: Vec<Pairing>,
    receiver_by_gifter: HashMap<i64, i64>,
    gifter_by_receiver: HashMap<i64, i64>,
}

impl Draw {
    pub(crate) fn new(pairings: Vec<Pairing>) -> Self {
        let receiver_by_gifter = pairings.iter().copied().collect();
        let gifter_by_receiver = pairings.iter().map(|&(g, r)| (r, g)).collect();
        Draw {
            pairings,
            receiver_by_gifter,
            gifter_by_receiver,
        }
    }

    /// All pairings, one per gifter, in participant input order.
    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Who `gifter` gives to, if `gifter` was part of the draw.
    pub fn receiver_of(&self, gifter: i64) -> Option<i64> {
        self.receiver_by_gifter.get(&gifter).copied()
    }

    /// Who gives to `receiver`, if `receiver` was part of the draw.
    pub fn gifter_of(&self, receiver: i64) -> Option<i64> {
        self.gifter_by_receiver.get(&receiver).copied()
    }
}

/// Maps internal 0..N indices back to caller-provided i64 IDs.
///
/// Construction rejects duplicate IDs: distinctness is a caller contract.
#[derive(Debug)]
pub(crate) struct IdMap {
    ids: Vec<i64>,
}

impl IdMap {
    pub fn from_ids(ids: &[i64]) -> Self {
        let mut seen = HashSet::with_capacity(ids.len());
        for &id in ids {
            assert!(seen.insert(id), "Duplicate participant ID: {}", id);
        }
        IdMap { ids: ids.to_vec() }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn to_id(&self, idx: usize) -> i64 {
        self.ids[idx]
    }
}
