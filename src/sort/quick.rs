use super::{Algorithm, Direction, Step};

/// Quicksort with Lomuto partitioning around the last element of each range.
/// Pending ranges are half-open and always hold at least two elements.
pub struct Quick {
    direction: Direction,
    ranges: Vec<(usize, usize)>,
    partition: Option<Partition>,
}

struct Partition {
    lo: usize,
    pivot: usize,
    store: usize,
    scan: usize,
}

impl Quick {
    pub fn new(len: usize, direction: Direction) -> Self {
        let ranges = if len > 1 { vec![(0, len)] } else { Vec::new() };
        Self {
            direction,
            ranges,
            partition: None,
        }
    }

    pub fn boxed<T: PartialOrd>(len: usize, direction: Direction) -> Box<dyn Algorithm<T>> {
        Box::new(Self::new(len, direction))
    }

    fn schedule(&mut self, lo: usize, hi: usize) {
        if hi - lo > 1 {
            self.ranges.push((lo, hi));
        }
    }
}

impl<T: PartialOrd> Algorithm<T> for Quick {
    fn step(&mut self, list: &mut [T]) -> Option<Step> {
        if self.partition.is_none() {
            let (lo, hi) = self.ranges.pop()?;
            self.partition = Some(Partition {
                lo,
                pivot: hi - 1,
                store: lo,
                scan: lo,
            });
        }

        let partition = self.partition.as_mut()?;
        if partition.scan < partition.pivot {
            let j = partition.scan;
            partition.scan += 1;
            if self.direction.precedes(&list[j], &list[partition.pivot]) {
                let i = partition.store;
                partition.store += 1;
                if i != j {
                    list.swap(i, j);
                    return Some(Step::swapped(i, j));
                }
            }
            return Some(Step::compared(j, partition.pivot));
        }

        let Partition {
            lo, pivot, store, ..
        } = *partition;
        list.swap(store, pivot);
        self.partition = None;
        // Right half first so the left half is partitioned next.
        self.schedule(store + 1, pivot + 1);
        self.schedule(lo, store);
        Some(Step::placed_from(store, pivot))
    }
}

#[cfg(test)]
mod tests {
    use super::super::{fixtures::drain, AlgorithmKind, Role};
    use super::*;

    #[test]
    fn partitions_around_the_last_element() {
        let mut list = vec![3, 7, 1, 4];
        let mut quick = Quick::new(list.len(), Direction::Ascending);

        assert_eq!(quick.step(&mut list), Some(Step::compared(0, 3)));
        assert_eq!(quick.step(&mut list), Some(Step::compared(1, 3)));
        assert_eq!(quick.step(&mut list), Some(Step::swapped(1, 2)));
        assert_eq!(list, [3, 1, 7, 4]);
        assert_eq!(quick.step(&mut list), Some(Step::placed_from(2, 3)));
        assert_eq!(list, [3, 1, 4, 7]);
        while quick.step(&mut list).is_some() {}
        assert_eq!(list, [1, 3, 4, 7]);
    }

    #[test]
    fn every_pivot_is_placed_once() {
        let mut list = vec![9, 2, 6, 2, 8, 1, 7];
        let steps = drain(AlgorithmKind::Quick, &mut list, Direction::Descending);
        let placed: Vec<usize> = steps
            .iter()
            .flat_map(|step| step.marks())
            .filter(|mark| mark.role == Role::Placed)
            .map(|mark| mark.index)
            .collect();

        let mut unique = placed.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), placed.len());
        assert_eq!(list, [9, 8, 7, 6, 2, 2, 1]);
    }
}
