use super::{Algorithm, Direction, Step};

/// Adjacent compare-and-swap passes, stopping after a pass with no swaps.
pub struct Bubble {
    len: usize,
    direction: Direction,
    pass: usize,
    index: usize,
    swapped: bool,
}

impl Bubble {
    pub fn new(len: usize, direction: Direction) -> Self {
        Self {
            len,
            direction,
            pass: 0,
            index: 0,
            swapped: false,
        }
    }

    pub fn boxed<T: PartialOrd>(len: usize, direction: Direction) -> Box<dyn Algorithm<T>> {
        Box::new(Self::new(len, direction))
    }
}

impl<T: PartialOrd> Algorithm<T> for Bubble {
    fn step(&mut self, list: &mut [T]) -> Option<Step> {
        if self.pass + 1 >= self.len {
            return None;
        }

        let j = self.index;
        let step = if self.direction.precedes(&list[j + 1], &list[j]) {
            list.swap(j, j + 1);
            self.swapped = true;
            Step::swapped(j, j + 1)
        } else {
            Step::compared(j, j + 1)
        };

        // The last `pass` elements are already in their final place.
        self.index += 1;
        if self.index + 1 >= self.len - self.pass {
            self.pass = if self.swapped { self.pass + 1 } else { self.len };
            self.index = 0;
            self.swapped = false;
        }

        Some(step)
    }
}
