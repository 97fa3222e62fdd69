use itertools::Itertools;
use strum_macros::{EnumIter, EnumString};

mod bubble;
mod insertion;
mod merge;
mod quick;

#[derive(Clone, Copy, Debug, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// `a` may stay in front of `b`. Equal values are in order.
    pub fn in_order<T: PartialOrd>(self, a: &T, b: &T) -> bool {
        match self {
            Direction::Ascending => a <= b,
            Direction::Descending => a >= b,
        }
    }

    /// `a` must come strictly before `b`.
    pub fn precedes<T: PartialOrd>(self, a: &T, b: &T) -> bool {
        match self {
            Direction::Ascending => a < b,
            Direction::Descending => a > b,
        }
    }

    pub fn is_sorted<T: PartialOrd>(self, list: &[T]) -> bool {
        list.iter().tuple_windows().all(|(a, b)| self.in_order(a, b))
    }
}

#[derive(Clone, Copy, Debug, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum AlgorithmKind {
    Bubble,
    Insertion,
    Merge,
    Quick,
}

impl AlgorithmKind {
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "bubble sort",
            AlgorithmKind::Insertion => "insertion sort",
            AlgorithmKind::Merge => "merge sort",
            AlgorithmKind::Quick => "quick sort",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Role {
    Compared,
    Swapped,
    Placed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Mark {
    pub index: usize,
    pub role: Role,
}

/// The indices touched by one step of an algorithm, at most two of them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Step {
    marks: Vec<Mark>,
}

impl Step {
    pub fn compared(a: usize, b: usize) -> Self {
        Self::pair(a, b, Role::Compared)
    }

    pub fn swapped(a: usize, b: usize) -> Self {
        Self::pair(a, b, Role::Swapped)
    }

    pub fn placed(index: usize) -> Self {
        Self {
            marks: vec![Mark {
                index,
                role: Role::Placed,
            }],
        }
    }

    /// A placement that displaced the element at `from`.
    pub fn placed_from(index: usize, from: usize) -> Self {
        let mut step = Self::placed(index);
        if from != index {
            step.marks.push(Mark {
                index: from,
                role: Role::Swapped,
            });
        }
        step
    }

    fn pair(a: usize, b: usize, role: Role) -> Self {
        Self {
            marks: vec![Mark { index: a, role }, Mark { index: b, role }],
        }
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn role_of(&self, index: usize) -> Option<Role> {
        self.marks
            .iter()
            .find(|mark| mark.index == index)
            .map(|mark| mark.role)
    }

    pub fn mutated(&self) -> bool {
        self.marks.iter().any(|mark| mark.role != Role::Compared)
    }
}

/// A sorting algorithm unrolled into a resumable state machine.
///
/// Every call performs one comparison-driven action on `list` and reports
/// what it touched, or returns `None` once the list is sorted.
pub trait Algorithm<T> {
    fn step(&mut self, list: &mut [T]) -> Option<Step>;
}

type Factory<T> = fn(usize, Direction) -> Box<dyn Algorithm<T>>;

fn factories<T>() -> [(AlgorithmKind, Factory<T>); 4]
where
    T: PartialOrd + Copy + 'static,
{
    [
        (AlgorithmKind::Bubble, bubble::Bubble::boxed as Factory<T>),
        (AlgorithmKind::Insertion, insertion::Insertion::boxed as Factory<T>),
        (AlgorithmKind::Merge, merge::Merge::boxed as Factory<T>),
        (AlgorithmKind::Quick, quick::Quick::boxed as Factory<T>),
    ]
}

/// One in-progress sort over a list owned by the caller.
///
/// The stepper keeps only the algorithm's bookkeeping; the list is lent to
/// it on every `advance`, and must keep the length it had at creation.
pub struct Stepper<T> {
    kind: AlgorithmKind,
    algorithm: Box<dyn Algorithm<T>>,
    len: usize,
    steps: usize,
    exhausted: bool,
}

impl<T> Stepper<T>
where
    T: PartialOrd + Copy + 'static,
{
    pub fn new(kind: AlgorithmKind, list: &[T], direction: Direction) -> Self {
        let (_, factory) = factories::<T>()
            .iter()
            .copied()
            .find(|(candidate, _)| *candidate == kind)
            .expect("every algorithm kind has a factory");
        Self {
            kind,
            algorithm: factory(list.len(), direction),
            len: list.len(),
            steps: 0,
            exhausted: false,
        }
    }

    /// Performs the next step, or returns `None` when the sort is complete.
    ///
    /// # Panics
    ///
    /// Panics when called again after returning `None`, or with a list whose
    /// length differs from the one the stepper was created for.
    pub fn advance(&mut self, list: &mut [T]) -> Option<Step> {
        assert!(!self.exhausted, "advance() called on an exhausted stepper");
        assert_eq!(list.len(), self.len, "list resized during a sort");

        match self.algorithm.step(list) {
            Some(step) => {
                self.steps += 1;
                Some(step)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }

    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}


#[cfg(test)]
mod tests {
    use super::{fixtures::*, *};
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest(
        direction,
        list,
        expected,
        case(Direction::Ascending, vec![1, 2, 2, 3], true),
        case(Direction::Ascending, vec![3, 2], false),
        case(Direction::Descending, vec![5, 5, 1], true),
        case(Direction::Descending, vec![1, 5], false),
        case(Direction::Ascending, vec![], true)
    )]
    fn is_sorted(direction: Direction, list: Vec<i32>, expected: bool) {
        assert_eq!(direction.is_sorted(&list), expected);
    }

    #[rstest(
        input,
        expected,
        case("bubble", AlgorithmKind::Bubble),
        case("insertion", AlgorithmKind::Insertion),
        case("merge", AlgorithmKind::Merge),
        case("quick", AlgorithmKind::Quick)
    )]
    fn parse_algorithm(input: &str, expected: AlgorithmKind) {
        assert_eq!(input.parse::<AlgorithmKind>().unwrap(), expected);
    }

    #[test]
    fn parse_direction() {
        assert_eq!("descending".parse::<Direction>().unwrap(), Direction::Descending);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn every_kind_sorts_every_list() {
        for kind in AlgorithmKind::iter() {
            for direction in Direction::iter() {
                for original in random_lists(12345) {
                    let mut list = original.clone();
                    drain(kind, &mut list, direction);

                    let mut expected = original.clone();
                    expected.sort();
                    if direction == Direction::Descending {
                        expected.reverse();
                    }
                    assert_eq!(list, expected, "{:?} {:?} on {:?}", kind, direction, original);
                }
            }
        }
    }

    #[rstest(
        kind,
        case(AlgorithmKind::Bubble),
        case(AlgorithmKind::Insertion),
        case(AlgorithmKind::Merge),
        case(AlgorithmKind::Quick)
    )]
    fn short_lists_finish_without_steps(kind: AlgorithmKind) {
        for mut list in vec![vec![], vec![1]] {
            let mut stepper = Stepper::new(kind, &list, Direction::Ascending);
            assert_eq!(stepper.advance(&mut list), None);
            assert_eq!(stepper.steps(), 0);
        }
    }

    #[rstest(
        kind,
        case(AlgorithmKind::Bubble),
        case(AlgorithmKind::Insertion),
        case(AlgorithmKind::Merge),
        case(AlgorithmKind::Quick)
    )]
    fn marks_stay_in_bounds(kind: AlgorithmKind) {
        for mut list in random_lists(7) {
            let len = list.len();
            for step in drain(kind, &mut list, Direction::Descending) {
                assert!(!step.marks().is_empty() && step.marks().len() <= 2);
                assert!(step.marks().iter().all(|mark| mark.index < len));
            }
        }
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn advancing_past_the_end_panics() {
        let mut list = vec![2, 1];
        let mut stepper = Stepper::new(AlgorithmKind::Bubble, &list, Direction::Ascending);
        while stepper.advance(&mut list).is_some() {}
        stepper.advance(&mut list);
    }

    #[test]
    #[should_panic(expected = "resized")]
    fn resized_list_panics() {
        let list = vec![3, 2, 1];
        let mut stepper = Stepper::new(AlgorithmKind::Insertion, &list, Direction::Ascending);
        let mut shorter = vec![3, 2];
        stepper.advance(&mut shorter);
    }

    #[test]
    fn stepper_counts_steps() {
        let mut list = vec![5, 3, 8, 1];
        let mut stepper = Stepper::new(AlgorithmKind::Bubble, &list, Direction::Ascending);
        let mut taken = 0;
        while stepper.advance(&mut list).is_some() {
            assert!(!stepper.is_exhausted());
            taken += 1;
        }
        assert!(stepper.is_exhausted());
        assert_eq!(stepper.steps(), taken);
        assert_eq!(stepper.kind(), AlgorithmKind::Bubble);
    }

    #[test]
    fn fresh_stepper_is_not_exhausted() {
        let list = vec![1];
        let stepper = Stepper::new(AlgorithmKind::Merge, &list, Direction::Ascending);
        assert!(!stepper.is_exhausted());
    }

    #[rstest(
        kind,
        direction,
        case(AlgorithmKind::Bubble, Direction::Ascending),
        case(AlgorithmKind::Bubble, Direction::Descending),
        case(AlgorithmKind::Insertion, Direction::Ascending),
        case(AlgorithmKind::Insertion, Direction::Descending)
    )]
    fn quadratic_sorts_write_at_most_once_per_pair(kind: AlgorithmKind, direction: Direction) {
        for mut list in random_lists(99) {
            let n = list.len();
            let writes = drain(kind, &mut list, direction)
                .iter()
                .filter(|step| step.mutated())
                .count();
            assert!(
                writes <= n * n.saturating_sub(1) / 2,
                "{:?} wrote {} times on {} values",
                kind,
                writes,
                n
            );
        }
    }

    #[test]
    fn role_is_usable_as_a_key() {
        use std::collections::HashSet;

        let roles: HashSet<Role> = [Role::Compared, Role::Swapped, Role::Placed, Role::Compared]
            .iter()
            .copied()
            .collect();
        assert_eq!(roles.len(), 3);
    }

    #[test]
    fn highlight_lookup() {
        let step = Step::placed_from(4, 1);
        assert_eq!(step.role_of(4), Some(Role::Placed));
        assert_eq!(step.role_of(1), Some(Role::Swapped));
        assert_eq!(step.role_of(0), None);
        assert!(step.mutated());
        assert!(!Step::compared(0, 1).mutated());
        assert_eq!(Step::placed_from(2, 2).marks().len(), 1);
    }
}
