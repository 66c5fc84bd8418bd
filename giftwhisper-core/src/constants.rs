/// Minimum viable number of participants in a draw.
///
/// With two participants the only derangement is the swap a<->b, which is
/// exactly the reciprocal pair the draw forbids. With fewer the notion is
/// meaningless. Three is the smallest set admitting a valid assignment
/// (a single 3-cycle).
pub const MIN_PARTICIPANTS: usize = 3;

/// Maximum permutations the uniform strategy samples before giving up.
///
/// A random permutation of n >= 3 elements has no fixed point and no
/// 2-cycle with probability approaching e^(-3/2) ~= 0.22 (already 1/3 at
/// n = 3), so the expected number of attempts stays under 5 at any group
/// size. 64 attempts put the odds of spurious failure below 1e-7; the
/// bound only exists so the sampler is total.
pub const MAX_SAMPLING_ATTEMPTS: usize = 64;
