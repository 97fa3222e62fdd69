use crate::config::Config;
use crate::list;
use crate::sort::{AlgorithmKind, Direction, Step, Stepper};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, info, trace};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    Idle,
    Running,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Reset,
    Start,
    SetDirection(Direction),
    SelectAlgorithm(AlgorithmKind),
}

/// Everything the renderer needs for one frame.
pub struct Scene<'a> {
    pub list: &'a [i64],
    pub highlight: Option<&'a Step>,
    pub algorithm: AlgorithmKind,
    pub direction: Direction,
    pub state: SessionState,
    pub steps: usize,
    pub writes: usize,
}

/// The run/idle state machine around the list being sorted.
///
/// The session is running exactly when it holds a stepper, so a stepper
/// can never outlive the list it was created for.
pub struct Session {
    config: Config,
    rng: Xoshiro256PlusPlus,
    list: Vec<i64>,
    direction: Direction,
    algorithm: AlgorithmKind,
    stepper: Option<Stepper<i64>>,
    last_step: Option<Step>,
    steps: usize,
    writes: usize,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let mut rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_entropy(),
        };
        let list = list::generate(&mut rng, config.size, config.min_val, config.max_val);
        Self::assemble(config, rng, list)
    }

    /// Starts from a given list instead of a generated one. Resets still
    /// draw fresh lists from the configuration.
    #[cfg(test)]
    pub fn with_list(config: Config, list: Vec<i64>) -> Self {
        let rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_entropy(),
        };
        Self::assemble(config, rng, list)
    }

    fn assemble(config: Config, rng: Xoshiro256PlusPlus, list: Vec<i64>) -> Self {
        Self {
            direction: config.direction,
            algorithm: config.algorithm,
            config,
            rng,
            list,
            stepper: None,
            last_step: None,
            steps: 0,
            writes: 0,
        }
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Reset => self.reset(),
            Command::Start => self.start(),
            Command::SetDirection(direction) => self.set_direction(direction),
            Command::SelectAlgorithm(algorithm) => self.set_algorithm(algorithm),
        }
    }

    pub fn reset(&mut self) {
        if self.stepper.take().is_some() {
            info!("sort abandoned by reset");
        }
        self.last_step = None;
        self.steps = 0;
        self.writes = 0;
        self.list = list::generate(
            &mut self.rng,
            self.config.size,
            self.config.min_val,
            self.config.max_val,
        );
        info!(size = self.list.len(), "list regenerated");
    }

    pub fn start(&mut self) {
        if self.state() == SessionState::Running {
            debug!("start ignored while running");
            return;
        }
        info!(
            algorithm = self.algorithm.name(),
            direction = ?self.direction,
            size = self.list.len(),
            "sort started"
        );
        self.steps = 0;
        self.writes = 0;
        self.stepper = Some(Stepper::new(self.algorithm, &self.list, self.direction));
    }

    /// Advances the running sort by exactly one step.
    pub fn tick(&mut self) {
        let stepper = match self.stepper.as_mut() {
            Some(stepper) => stepper,
            None => return,
        };

        match stepper.advance(&mut self.list) {
            Some(step) => {
                trace!(marks = ?step.marks(), "step");
                if step.mutated() {
                    self.writes += 1;
                }
                self.steps = stepper.steps();
                self.last_step = Some(step);
            }
            None => {
                info!(
                    algorithm = stepper.kind().name(),
                    steps = self.steps,
                    writes = self.writes,
                    "sort finished"
                );
                debug_assert!(stepper.is_exhausted());
                debug_assert!(self.direction.is_sorted(&self.list));
                self.stepper = None;
                self.last_step = None;
            }
        }
    }

    pub fn set_direction(&mut self, direction: Direction) {
        match self.state() {
            SessionState::Idle => self.direction = direction,
            SessionState::Running => debug!(?direction, "direction change ignored while running"),
        }
    }

    pub fn set_algorithm(&mut self, algorithm: AlgorithmKind) {
        match self.state() {
            SessionState::Idle => self.algorithm = algorithm,
            SessionState::Running => debug!(?algorithm, "algorithm change ignored while running"),
        }
    }

    pub fn state(&self) -> SessionState {
        match self.stepper {
            Some(_) => SessionState::Running,
            None => SessionState::Idle,
        }
    }

    pub fn list(&self) -> &[i64] {
        &self.list
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    pub fn last_step(&self) -> Option<&Step> {
        self.last_step.as_ref()
    }

    pub fn scene(&self) -> Scene<'_> {
        Scene {
            list: self.list(),
            highlight: self.last_step(),
            algorithm: self.algorithm(),
            direction: self.direction(),
            state: self.state(),
            steps: self.steps,
            writes: self.writes,
        }
    }
}
