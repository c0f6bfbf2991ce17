//! `HealthStateV1`: the four tracked metrics of one planning step.
//!
//! # Equality semantics
//!
//! `HealthStateV1` holds floats and does **not** derive `Eq` or `Hash`.
//!
//! - Search identity (for dedup): `(bmi, activity_score, blood_sugar)` only,
//!   compared bitwise — use [`HealthStateV1::visited_key`].
//! - `age` is carried through every transition unchanged and is deliberately
//!   not part of the identity.

/// Immutable snapshot of a person's tracked metrics.
///
/// No range checks happen here. The caller is responsible for handing in a
/// sensible start state (`bmi > 0`, `activity_score` in `0..=100`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthStateV1 {
    /// Body-mass index.
    pub bmi: f64,
    /// Age in years. Never changed by a transition.
    pub age: u32,
    /// Activity score, nominally 0–100.
    pub activity_score: f64,
    /// Blood sugar level, the metric driven toward the target.
    pub blood_sugar: f64,
}

impl HealthStateV1 {
    /// Construct a state from its four metrics.
    #[must_use]
    pub const fn new(bmi: f64, age: u32, activity_score: f64, blood_sugar: f64) -> Self {
        Self {
            bmi,
            age,
            activity_score,
            blood_sugar,
        }
    }

    /// The dedup identity of this state.
    #[must_use]
    pub fn visited_key(&self) -> VisitedKey {
        VisitedKey::from(self)
    }

    /// Identity bytes: the little-endian bit patterns of the visited-key triple.
    ///
    /// Two states with the same [`VisitedKey`] produce the same bytes.
    #[must_use]
    pub fn identity_bytes(&self) -> [u8; 24] {
        let key = self.visited_key();
        let mut out = [0u8; 24];
        out[..8].copy_from_slice(&key.bmi_bits.to_le_bytes());
        out[8..16].copy_from_slice(&key.activity_bits.to_le_bytes());
        out[16..].copy_from_slice(&key.blood_sugar_bits.to_le_bytes());
        out
    }
}

/// Bitwise identity of `(bmi, activity_score, blood_sugar)`.
///
/// `-0.0` is folded into `0.0` so the two zeros share one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisitedKey {
    bmi_bits: u64,
    activity_bits: u64,
    blood_sugar_bits: u64,
}


impl From<&HealthStateV1> for VisitedKey {
    fn from(state: &HealthStateV1) -> Self {
        Self {
            bmi_bits: normalized_bits(state.bmi),
            activity_bits: normalized_bits(state.activity_score),
            blood_sugar_bits: normalized_bits(state.blood_sugar),
        }
    }
}

fn normalized_bits(value: f64) -> u64 {
    // Adding positive zero maps -0.0 to +0.0 and leaves every other value alone.
    (value + 0.0).to_bits()
}
