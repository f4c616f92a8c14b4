use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Build a linked list, reverse it in place and check the result.
#[derive(Parser, Debug)]
#[command(name = "listrev", version)]
pub struct Cli {
    /// Comma-separated list values in traversal order
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "count")]
    pub values: Option<Vec<i32>>,

    /// Build the list 1..=COUNT instead of passing --values
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i32).range(0..))]
    pub count: i32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info", env = "LISTREV_LOG")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    pub fn list_values(&self) -> Vec<i32> {
        match &self.values {
            Some(values) => values.clone(),
            None => (1..=self.count).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fixture() {
        let cli = Cli::try_parse_from(["listrev"]).unwrap();

        assert_eq!(cli.list_values(), (1..=10).collect::<Vec<_>>());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.log_json);
    }

    #[test]
    fn test_values_flag() {
        let cli = Cli::try_parse_from(["listrev", "--values", "3,-1,7", "--format", "json"]).unwrap();

        assert_eq!(cli.list_values(), vec![3, -1, 7]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_values_conflicts_with_count() {
        let err = Cli::try_parse_from(["listrev", "--values", "1", "--count", "4"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_negative_count_rejected() {
        assert!(Cli::try_parse_from(["listrev", "--count", "-2"]).is_err());
    }

    #[test]
    fn test_count_zero_is_empty() {
        let cli = Cli::try_parse_from(["listrev", "--count", "0"]).unwrap();
        assert!(cli.list_values().is_empty());
    }
}
