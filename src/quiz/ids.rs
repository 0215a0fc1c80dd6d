use std::collections::HashSet;

use rand::Rng;

const ID_RANGE: std::ops::RangeInclusive<u32> = 100_000..=999_999;

/// Ids handed out by one generator. A drawn id that was already issued is
/// redrawn, so every id is unique for the lifetime of the registry.
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    issued: HashSet<u32>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        loop {
            let id = rng.gen_range(ID_RANGE);
            if self.issued.insert(id) {
                return id;
            }
            log::debug!("Id {} already issued, redrawing", id);
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.issued.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn issued_ids_are_unique_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut registry = IdRegistry::new();
        let ids: Vec<u32> = (0..5000).map(|_| registry.issue(&mut rng)).collect();

        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(registry.len(), ids.len());
        assert!(ids.iter().all(|id| ID_RANGE.contains(id)));
        assert!(registry.contains(ids[0]));
    }
}
