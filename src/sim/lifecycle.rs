//! Adoption lifecycle
//!
//! A pet is adopted the moment all three stats are at the maximum. Adoption
//! is one-way: there is no path back to unadopted.

use super::state::Pet;
use super::stats::PetStats;

/// True iff every stat is exactly at `max`
pub fn can_adopt(stats: &PetStats, max: u8) -> bool {
    stats.all_at(max)
}

/// Adopt the pet if it qualifies and isn't adopted yet.
///
/// Returns true when this call performed the transition.
pub fn check_adoption(pet: &mut Pet, max: u8, now: u64) -> bool {
    if pet.is_adopted || !can_adopt(&pet.stats, max) {
        return false;
    }
    pet.is_adopted = true;
    pet.adopted_at = Some(now);
    log::info!("{} has been adopted!", pet.name);
    true
}
