use super::{Algorithm, Direction, Step};

/// Insertion sort: the value being inserted sits at `cursor` and moves one
/// slot to the left per step until its neighbour no longer has to follow it.
pub struct Insertion {
    len: usize,
    direction: Direction,
    next: usize,
    cursor: usize,
}

impl Insertion {
    pub fn new(len: usize, direction: Direction) -> Self {
        Self {
            len,
            direction,
            next: 1,
            cursor: 0,
        }
    }

    pub fn boxed<T: PartialOrd>(len: usize, direction: Direction) -> Box<dyn Algorithm<T>> {
        Box::new(Self::new(len, direction))
    }
}

impl<T: PartialOrd> Algorithm<T> for Insertion {
    fn step(&mut self, list: &mut [T]) -> Option<Step> {
        if self.cursor == 0 {
            if self.next >= self.len {
                return None;
            }
            self.cursor = self.next;
            self.next += 1;
        }

        let j = self.cursor;
        if self.direction.precedes(&list[j], &list[j - 1]) {
            list.swap(j - 1, j);
            self.cursor -= 1;
            Some(Step::swapped(j - 1, j))
        } else {
            self.cursor = 0;
            Some(Step::compared(j - 1, j))
        }
    }
}
