//! Greedy plate selection.
//!
//! Greedy is exact for the shipped catalogs, where it also gives the fewest
//! plates. It is not a subset-sum solver and may miss a loadable weight for an
//! arbitrary catalog.

use std::iter::repeat_n;

use tracing::trace;

use crate::{configuration::Configuration, plate::Plate, weight::Weight};

/// Plates for one side of the bar that bring it closest to `target` from below,
/// heaviest first. A target lighter than the bar and collars loads nothing.
#[must_use]
pub fn allocate(target: Weight, configuration: &Configuration) -> Vec<Weight> {
    allocate_with(
        target,
        configuration.base_weight(),
        configuration.unit().catalog(),
    )
}

/// `catalog` must be ordered heaviest first. Loads beyond [`Weight::MAX`] are
/// capped there.
#[must_use]
pub fn allocate_with(target: Weight, base: Weight, catalog: &[Plate]) -> Vec<Weight> {
    // Both sides at once, so halving never rounds.
    let mut remaining = target.saturating_sub(base).min(Weight::MAX);
    if remaining.is_negative() {
        trace!(%target, %base, "target below bar");
        return Vec::new();
    }

    let mut plates = Vec::new();
    for plate in catalog {
        let pair = plate.weight() * 2;
        if pair <= Weight::ZERO {
            continue;
        }

        let count = remaining.milli() / pair.milli();
        plates.extend(repeat_n(plate.weight(), usize::try_from(count).unwrap_or_default()));
        remaining = remaining - pair * count;
    }

    trace!(%target, %base, %remaining, count = plates.len(), "allocated plates");
    plates
}
