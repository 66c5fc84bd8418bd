/// Draw orchestrator.
///
/// Adapted for a pure computation crate — no IO, no persistence. The
/// caller maps IDs back to people and stores whatever the pairs imply
/// (chat rooms, notifications) inside its own transaction.
use crate::constants::MIN_PARTICIPANTS;
use crate::error::{DrawError, Result};
use crate::pairing::generate_indexed;
use crate::types::{Draw, DrawOptions, IdMap};

/// Binds a validated participant list to draw options.
///
/// `run()` performs exactly one generation attempt. Re-running on
/// `PairingImpossible` is caller policy, not engine behavior; a bounded
/// retry loop at the call site is the expected pattern.
#[derive(Debug)]
pub struct DrawEngine {
    /// Maps internal 0..N indices back to caller i64 IDs.
    id_map: IdMap,
    options: DrawOptions,
}

impl DrawEngine {
    /// Validate the participant list and build an engine.
    ///
    /// Panics on duplicate IDs: distinct identifiers are a caller
    /// contract, not a runtime condition.
    pub fn new(participant_ids: &[i64], options: DrawOptions) -> Result<Self> {
        if participant_ids.len() < MIN_PARTICIPANTS {
            return Err(DrawError::InsufficientParticipants {
                found: participant_ids.len(),
            });
        }
        Ok(DrawEngine {
            id_map: IdMap::from_ids(participant_ids),
            options,
        })
    }

    /// Number of participants in the draw.
    pub fn num_participants(&self) -> usize {
        self.id_map.len()
    }

    /// Run one draw. Returns pairs of participant IDs wrapped with lookup
    /// tables in both directions.
    pub fn run(&self) -> Result<Draw> {
        let index_pairs = generate_indexed(self.id_map.len(), &self.options)?;
        let pairings = index_pairs
            .into_iter()
            .map(|(g, r)| (self.id_map.to_id(g), self.id_map.to_id(r)))
            .collect();
        Ok(Draw::new(pairings))
    }
}
