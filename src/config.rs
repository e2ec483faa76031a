use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing argument <{0}>")]
    Missing(&'static str),
    #[error("invalid value for <{name}>: {value:?}")]
    Parse { name: &'static str, value: String },
    #[error("unexpected argument {0:?}")]
    Unexpected(String),
}

/// Parameters for one generate-and-solve run: `<rows> <cols> [seed]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub rows: u16,
    pub cols: u16,
    pub seed: Option<u64>,
}

impl Config {
    /// Parses positional arguments, not including the executable name.
    ///
    /// Dimensions are only parsed here; zero is rejected when the grid is built.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let rows = parse_next(&mut args, "rows")?.ok_or(ConfigError::Missing("rows"))?;
        let cols = parse_next(&mut args, "cols")?.ok_or(ConfigError::Missing("cols"))?;
        let seed = parse_next(&mut args, "seed")?;
        if let Some(extra) = args.next() {
            return Err(ConfigError::Unexpected(extra));
        }
        Ok(Config { rows, cols, seed })
    }
}

fn parse_next<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    args.next()
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::Parse { name, value })
        })
        .transpose()
}
