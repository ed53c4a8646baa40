use anyhow::{bail, Error, Result};
use tracing_subscriber::EnvFilter;

pub fn init_tracing_subscriber(default_filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(Error::msg)
}

pub fn setup_rayon(num_threads: Option<usize>) -> Result<()> {
    if let Some(num_threads) = num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()?;
    }
    Ok(())
}

/// Variable symbols from a string such as `"ABCD"` or `"A,B,C"`.
pub fn parse_variables(s: &str) -> Result<Vec<char>> {
    let variables: Vec<char> = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if variables.is_empty() {
        bail!("no variables given");
    }
    Ok(variables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variables() {
        assert_eq!(vec!['A', 'B', 'C'], parse_variables("ABC").unwrap());
        assert_eq!(vec!['x', 'y'], parse_variables(" x, y ").unwrap());
        assert!(parse_variables(" , ").is_err());
    }
}
