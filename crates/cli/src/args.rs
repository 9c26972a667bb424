//! Command line argument parsing.

use crate::{
    error::{CliError, Result},
    sweep::SweepRange,
};

/// Tolerance used when `--epsilon` is not given.
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Initial guess used when `--guess` is not given.
pub const DEFAULT_GUESS: f64 = -20.0;

pub const USAGE: &str = "\
Usage:
  newtonraphson [solve] [--epsilon E] [--guess G]
  newtonraphson cgi
  newtonraphson sweep --min A --max B --step S [--guess G]

Finds a root of x^3 - x^2 + 2 using the Newton-Raphson method.
Log verbosity is controlled with RUST_LOG (default: warn).";

/// A parsed invocation of the binary.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Solve once and print the root.
    Solve { epsilon: f64, guess: f64 },
    /// Read a JSON request from stdin and answer with a CGI response.
    Cgi,
    /// Solve for each tolerance in a range.
    Sweep { range: SweepRange, guess: f64 },
    /// Print usage.
    Help,
}

impl Command {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidArgument`] for unknown modes or flags,
    /// missing or unparsable values, and flags that do not apply to the mode.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_owned()).collect();

        let (mode, rest) = match args.first().map(String::as_str) {
            Some("solve") => ("solve", &args[1..]),
            Some("cgi") => ("cgi", &args[1..]),
            Some("sweep") => ("sweep", &args[1..]),
            Some("help" | "-h" | "--help") => return Ok(Self::Help),
            Some(flag) if flag.starts_with("--") => ("solve", &args[..]),
            Some(other) => {
                return Err(CliError::InvalidArgument(format!("unknown mode `{other}`")));
            }
            None => ("solve", &args[..]),
        };

        let flags = Flags::parse(rest)?;

        match mode {
            "cgi" => {
                flags.only(&[])?;
                Ok(Self::Cgi)
            }
            "sweep" => {
                flags.only(&["min", "max", "step", "guess"])?;
                let range = SweepRange::new(
                    flags.required("min")?,
                    flags.required("max")?,
                    flags.required("step")?,
                )?;
                Ok(Self::Sweep {
                    range,
                    guess: flags.optional("guess")?.unwrap_or(DEFAULT_GUESS),
                })
            }
            _ => {
                flags.only(&["epsilon", "guess"])?;
                Ok(Self::Solve {
                    epsilon: flags.optional("epsilon")?.unwrap_or(DEFAULT_EPSILON),
                    guess: flags.optional("guess")?.unwrap_or(DEFAULT_GUESS),
                })
            }
        }
    }
}

/// `--name value` and `--name=value` pairs in the order given.
struct Flags(Vec<(String, String)>);

impl Flags {
    fn parse(args: &[String]) -> Result<Self> {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            let Some(flag) = arg.strip_prefix("--") else {
                return Err(CliError::InvalidArgument(format!(
                    "unexpected argument `{arg}`"
                )));
            };

            let (name, value) = match flag.split_once('=') {
                Some((name, value)) => (name.to_owned(), value.to_owned()),
                None => {
                    let value = iter.next().ok_or_else(|| {
                        CliError::InvalidArgument(format!("missing value for `--{flag}`"))
                    })?;
                    (flag.to_owned(), value.clone())
                }
            };

            if pairs.iter().any(|(seen, _)| *seen == name) {
                return Err(CliError::InvalidArgument(format!(
                    "`--{name}` given more than once"
                )));
            }
            pairs.push((name, value));
        }

        Ok(Self(pairs))
    }

    fn only(&self, allowed: &[&str]) -> Result<()> {
        match self.0.iter().find(|(name, _)| !allowed.contains(&name.as_str())) {
            Some((name, _)) => Err(CliError::InvalidArgument(format!(
                "unknown flag `--{name}`"
            ))),
            None => Ok(()),
        }
    }

    fn optional(&self, name: &str) -> Result<Option<f64>> {
        self.0
            .iter()
            .find(|(flag, _)| flag == name)
            .map(|(_, value)| {
                value.parse::<f64>().map_err(|_| {
                    CliError::InvalidArgument(format!("`--{name}` expects a number, got `{value}`"))
                })
            })
            .transpose()
    }

    fn required(&self, name: &str) -> Result<f64> {
        self.optional(name)?
            .ok_or_else(|| CliError::InvalidArgument(format!("missing required flag `--{name}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test]
    fn no_arguments_solve_the_classic_example() {
        let command = Command::parse(Vec::<String>::new()).unwrap();
        assert_eq!(
            command,
            Command::Solve {
                epsilon: DEFAULT_EPSILON,
                guess: DEFAULT_GUESS,
            }
        );
    }

    #[test]
    fn flags_without_mode_imply_solve() {
        let command = Command::parse(["--guess", "5", "--epsilon=1e-6"]).unwrap();
        assert_eq!(
            command,
            Command::Solve {
                epsilon: 1e-6,
                guess: 5.0,
            }
        );
    }

    #[test]
    fn parses_sweep() {
        let command =
            Command::parse(["sweep", "--min", "0.1", "--max", "0.3", "--step", "0.1"]).unwrap();
        assert_eq!(
            command,
            Command::Sweep {
                range: SweepRange::new(0.1, 0.3, 0.1).unwrap(),
                guess: DEFAULT_GUESS,
            }
        );
    }

    #[test]
    fn parses_cgi_and_help() {
        assert_eq!(Command::parse(["cgi"]).unwrap(), Command::Cgi);
        assert_eq!(Command::parse(["--help"]).unwrap(), Command::Help);
    }

    #[test_case(&["bogus"] ; "unknown mode")]
    #[test_case(&["--epsilon"] ; "missing value")]
    #[test_case(&["--epsilon", "tiny"] ; "not a number")]
    #[test_case(&["--guess", "1", "--guess", "2"] ; "repeated flag")]
    #[test_case(&["solve", "--min", "1"] ; "flag from another mode")]
    #[test_case(&["cgi", "--guess", "1"] ; "cgi takes no flags")]
    #[test_case(&["sweep", "--min", "0.1", "--max", "0.2"] ; "sweep missing step")]
    #[test_case(&["solve", "extra"] ; "stray positional")]
    fn rejects(args: &[&str]) {
        let result = Command::parse(args);
        assert!(
            matches!(result, Err(CliError::InvalidArgument(_))),
            "got {result:?}"
        );
    }
}
