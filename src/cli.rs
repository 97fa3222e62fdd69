use crate::config::{Config, ConfigError};
use crate::sort::{AlgorithmKind, Direction};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sortviz",
    about = "Watch comparison sorts work, one step per frame",
    after_help = "Logging is enabled with RUST_LOG and only when stderr is redirected, \
                  e.g. RUST_LOG=debug sortviz 2> sortviz.log"
)]
pub struct Opt {
    /// Number of bars
    #[structopt(short = "n", long, default_value = "50")]
    pub size: usize,
    /// Smallest value a bar can take
    #[structopt(long = "min", default_value = "0", allow_hyphen_values = true)]
    pub min_val: i64,
    /// Largest value a bar can take
    #[structopt(long = "max", default_value = "100", allow_hyphen_values = true)]
    pub max_val: i64,
    #[structopt(
        short,
        long,
        default_value = "ascending",
        possible_values = &["ascending", "descending"]
    )]
    pub direction: Direction,
    #[structopt(
        short,
        long,
        default_value = "bubble",
        possible_values = &["bubble", "insertion", "merge", "quick"]
    )]
    pub algorithm: AlgorithmKind,
    /// Upper bound on frames (and sort steps) per second
    #[structopt(long, default_value = "60")]
    pub fps: u32,
    /// Seed for reproducible lists
    #[structopt(long)]
    pub seed: Option<u64>,
}

impl Opt {
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let config = Config {
            size: self.size,
            min_val: self.min_val,
            max_val: self.max_val,
            direction: self.direction,
            algorithm: self.algorithm,
            fps: self.fps,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults() {
        let config = Opt::from_iter(&["sortviz"]).into_config().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn every_option() {
        let opt = Opt::from_iter(&[
            "sortviz", "-n", "12", "--min", "-5", "--max", "5", "-d", "descending", "-a",
            "merge", "--fps", "80", "--seed", "3",
        ]);
        let config = opt.into_config().unwrap();
        assert_eq!(
            config,
            Config {
                size: 12,
                min_val: -5,
                max_val: 5,
                direction: Direction::Descending,
                algorithm: AlgorithmKind::Merge,
                fps: 80,
                seed: Some(3),
            }
        );
    }

    #[rstest(
        args,
        expected,
        case(vec!["sortviz", "-n", "0"], ConfigError::EmptyList),
        case(vec!["sortviz", "--min", "9", "--max", "1"], ConfigError::InvertedRange { min: 9, max: 1 }),
        case(vec!["sortviz", "--fps", "0"], ConfigError::ZeroTickRate)
    )]
    fn invalid_configuration(args: Vec<&str>, expected: ConfigError) {
        let error = Opt::from_iter(args).into_config().unwrap_err();
        assert_eq!(error, expected);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert!(Opt::from_iter_safe(&["sortviz", "-a", "bogo"]).is_err());
    }
}
