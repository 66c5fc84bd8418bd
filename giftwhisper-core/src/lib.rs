/// giftwhisper-core: Pure-computation Secret Santa draw engine.
///
/// Participant list in, one (gifter, receiver) edge per participant out:
/// nobody gifts themselves, and nobody gifts their own gifter back. No IO
/// and no persistence; the surrounding system stores the pairs and opens
/// the chat rooms.
///
/// Participants are identified by caller-provided `i64` IDs. The crate
/// handles the internal mapping to efficient array indices — callers never
/// think about indices.
///
/// # Quick start
///
/// ```rust
/// use giftwhisper_core::{generate_pairs, DrawOptions};
///
/// let member_ids = vec![100, 200, 300, 400]; // your IDs — any i64 values
///
/// let pairings = generate_pairs(&member_ids, &DrawOptions::default())
///     .expect("unsatisfiable realization, re-run the draw");
///
/// for (gifter, receiver) in &pairings {
///     println!("{gifter} gifts to {receiver}");
/// }
/// ```

pub mod constants;
pub mod engine;
pub mod error;
pub mod pairing;
pub mod types;

// Re-export primary public API at crate root.
pub use engine::DrawEngine;
pub use error::{DrawError, Result};
pub use pairing::{generate_pairs, Strategy};
pub use types::{Draw, DrawOptions, Pairing};
