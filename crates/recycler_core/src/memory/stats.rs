//! # Pool Statistics
//!
//! Traffic counters, cheap enough to keep on in the hot path.

/// Counters describing how a pool has been used.
///
/// All counters only ever grow, except when [`PoolStats::reset`] is called.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PoolStats {
    /// Calls to `acquire`.
    pub acquired: u64,
    /// Acquires that had to construct a fresh instance.
    pub created: u64,
    /// Acquires served from the idle set.
    pub reused: u64,
    /// Releases of a present instance, retained or not.
    pub released: u64,
    /// Releases of an absent instance.
    pub rejected: u64,
    /// Releases dropped because the idle set was at its cap.
    pub discarded: u64,
}

impl PoolStats {
    /// Instances handed out and not yet returned.
    #[inline]
    #[must_use]
    pub const fn outstanding(&self) -> u64 {
        self.acquired.saturating_sub(self.released)
    }

    /// Fraction of acquires served without construction, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn reuse_ratio(&self) -> f64 {
        if self.acquired == 0 {
            0.0
        } else {
            self.reused as f64 / self.acquired as f64
        }
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outstanding() {
        let stats = PoolStats {
            acquired: 5,
            released: 3,
            ..PoolStats::default()
        };
        assert_eq!(stats.outstanding(), 2);

        // Foreign instances returned to the pool can push released past acquired.
        let stats = PoolStats {
            acquired: 1,
            released: 4,
            ..PoolStats::default()
        };
        assert_eq!(stats.outstanding(), 0);
    }

    #[test]
    fn test_reuse_ratio() {
        assert!(PoolStats::default().reuse_ratio().abs() < f64::EPSILON);

        let stats = PoolStats {
            acquired: 4,
            created: 1,
            reused: 3,
            ..PoolStats::default()
        };
        assert!((stats.reuse_ratio() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset() {
        let mut stats = PoolStats {
            acquired: 9,
            created: 9,
            ..PoolStats::default()
        };
        stats.reset();
        assert_eq!(stats, PoolStats::default());
    }
}
