use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "impact-tracker")]
#[command(about = "Impact Project Tracker API with JSON-LD submissions")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "8000")]
    pub port: u16,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["impact-tracker"]);
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert!(!config.verbose);
    }

    #[test]
    fn test_overrides() {
        let config =
            CliConfig::parse_from(["impact-tracker", "--host", "127.0.0.1", "--port", "9090"]);
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }
}
