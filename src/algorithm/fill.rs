//! Filler letters for cells no placement covers
//!
//! Word search only; crossword grids mark untouched cells as blocked when
//! they freeze, so "no letter" and "filler letter" stay distinguishable.

use ndarray::Array2;
use rand::Rng;
use rand::rngs::StdRng;

/// Replace every unoccupied cell with a uniformly random letter from the
/// input alphabet (`A..=Z`)
pub fn fill_unused(letters: &mut Array2<Option<char>>, rng: &mut StdRng) {
    for slot in letters.iter_mut() {
        if slot.is_none() {
            *slot = char::from_u32('A' as u32 + rng.random_range(0..26));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fill_unused;
    use ndarray::Array2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_fill_covers_gaps_and_preserves_placements() {
        let mut letters = Array2::from_elem((3, 3), None);
        if let Some(slot) = letters.get_mut([1, 1]) {
            *slot = Some('Q');
        }

        let mut rng = StdRng::seed_from_u64(5);
        fill_unused(&mut letters, &mut rng);

        assert_eq!(letters.get([1, 1]).copied(), Some(Some('Q')));
        assert!(
            letters
                .iter()
                .all(|slot| slot.is_some_and(|ch| ch.is_ascii_uppercase()))
        );
    }
}
