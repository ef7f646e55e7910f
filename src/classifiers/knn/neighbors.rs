use crate::utils::math::majority_index;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub distance: f64,
    pub class: usize,
}

/// The `k` closest candidates offered so far.
///
/// A plain vector with a linear scan for the current worst: `O(k)` per
/// offer, which is fine for the small `k` this is used with but is not a
/// spatial index.
#[derive(Debug, Clone)]
pub struct NeighborSet {
    k: usize,
    held: Vec<Neighbor>,
}

impl NeighborSet {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            held: Vec::with_capacity(k),
        }
    }

    /// Keeps `candidate` while fewer than `k` are held; afterwards it
    /// replaces the farthest held neighbour (the first of equals) only if
    /// strictly closer.
    pub fn offer(&mut self, candidate: Neighbor) {
        if self.held.len() < self.k {
            self.held.push(candidate);
            return;
        }
        let Some(worst) = self.worst() else {
            return;
        };
        if candidate.distance < self.held[worst].distance {
            self.held[worst] = candidate;
        }
    }

    fn worst(&self) -> Option<usize> {
        let mut worst: Option<usize> = None;
        for (i, n) in self.held.iter().enumerate() {
            if worst.is_none_or(|w| n.distance > self.held[w].distance) {
                worst = Some(i);
            }
        }
        worst
    }

    pub fn neighbors(&self) -> &[Neighbor] {
        &self.held
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Most frequent class among the held neighbours, lowest class index on
    /// ties. `None` when nothing is held.
    pub fn majority_class(&self, number_of_classes: usize) -> Option<usize> {
        let mut votes = vec![0usize; number_of_classes];
        for n in &self.held {
            votes[n.class] += 1;
        }
        majority_index(&votes)
    }
}
