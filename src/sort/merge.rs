use super::{Algorithm, Direction, Step};

/// Top-down merge sort with the recursion kept on an explicit stack.
///
/// `Sort` frames split their range and schedule the two halves followed by
/// the merge of both, so a merge only runs once its halves are sorted in the
/// shared list. Each merge copies its halves out and writes one element back
/// per step.
pub struct Merge<T> {
    direction: Direction,
    stack: Vec<Frame>,
    run: Option<Run<T>>,
}

enum Frame {
    Sort { lo: usize, hi: usize },
    Merge { lo: usize, mid: usize, hi: usize },
}

struct Run<T> {
    left: Vec<T>,
    right: Vec<T>,
    l: usize,
    r: usize,
    write: usize,
}

impl<T: PartialOrd + Copy> Run<T> {
    fn new(list: &[T], lo: usize, mid: usize, hi: usize) -> Self {
        Self {
            left: list[lo..mid].to_vec(),
            right: list[mid..hi].to_vec(),
            l: 0,
            r: 0,
            write: lo,
        }
    }

    fn place(&mut self, list: &mut [T], direction: Direction) -> Option<Step> {
        let value = match (self.left.get(self.l).copied(), self.right.get(self.r).copied()) {
            // Ties go left, which keeps the sort stable.
            (Some(a), Some(b)) if direction.in_order(&a, &b) => {
                self.l += 1;
                a
            }
            (_, Some(b)) => {
                self.r += 1;
                b
            }
            (Some(a), None) => {
                self.l += 1;
                a
            }
            (None, None) => return None,
        };

        list[self.write] = value;
        let step = Step::placed(self.write);
        self.write += 1;
        Some(step)
    }
}

impl<T: PartialOrd + Copy + 'static> Merge<T> {
    pub fn new(len: usize, direction: Direction) -> Self {
        let stack = if len > 1 {
            vec![Frame::Sort { lo: 0, hi: len }]
        } else {
            Vec::new()
        };
        Self {
            direction,
            stack,
            run: None,
        }
    }

    pub fn boxed(len: usize, direction: Direction) -> Box<dyn Algorithm<T>> {
        Box::new(Self::new(len, direction))
    }
}

impl<T: PartialOrd + Copy> Algorithm<T> for Merge<T> {
    fn step(&mut self, list: &mut [T]) -> Option<Step> {
        loop {
            if let Some(run) = self.run.as_mut() {
                if let Some(step) = run.place(list, self.direction) {
                    return Some(step);
                }
                self.run = None;
            }

            match self.stack.pop()? {
                Frame::Sort { lo, hi } => {
                    if hi - lo > 1 {
                        let mid = lo + (hi - lo) / 2;
                        self.stack.push(Frame::Merge { lo, mid, hi });
                        self.stack.push(Frame::Sort { lo: mid, hi });
                        self.stack.push(Frame::Sort { lo, hi: mid });
                    }
                }
                Frame::Merge { lo, mid, hi } => {
                    self.run = Some(Run::new(list, lo, mid, hi));
                }
            }
        }
    }
}
