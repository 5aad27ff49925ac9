use clap::{ArgAction, Parser};
use url::Url;

use crate::{Error, Result};

pub const DEFAULT_COBALT_URL: &str = "https://api.cobalt.tools";

/// Runtime configuration, from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cobalt-relay",
    version,
    about = "Discord bot relaying video downloads through a cobalt instance"
)]
pub struct Config {
    /// Discord application access token
    #[arg(long = "token", env = "DISCORD_TOKEN", hide_env_values = true, default_value = "")]
    pub discord_token: String,

    /// Base URL for the cobalt API
    #[arg(long = "cobalt", env = "COBALT_URL", default_value = DEFAULT_COBALT_URL)]
    pub cobalt_url: String,

    /// API key for cobalt API authentication
    #[arg(long = "apikey", env = "COBALT_API_KEY", hide_env_values = true)]
    pub cobalt_api_key: Option<String>,

    /// Test guild ID. If not passed, commands are registered globally
    #[arg(long = "guild", env = "DISCORD_GUILD_ID", default_value = "")]
    pub guild: String,

    /// Remove all commands after shutting down
    #[arg(long = "rmcmd", env = "REMOVE_COMMANDS", default_value_t = true, action = ArgAction::Set)]
    pub remove_commands: bool,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.discord_token.trim().is_empty() {
            return Err(Error::Config(
                "Discord token is required (--token or DISCORD_TOKEN)".to_string(),
            ));
        }
        self.base_url()?;
        self.guild_id()?;
        Ok(())
    }

    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.cobalt_url)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(Error::InvalidUrl(format!(
                "unsupported scheme {} in {}",
                scheme, self.cobalt_url
            ))),
        }
    }

    pub fn api_key(&self) -> Option<String> {
        self.cobalt_api_key.clone().filter(|k| !k.is_empty())
    }

    /// Guild the commands are scoped to, `None` for global registration.
    pub fn guild_id(&self) -> Result<Option<u64>> {
        let guild = self.guild.trim();
        if guild.is_empty() {
            return Ok(None);
        }
        match guild.parse::<u64>() {
            Ok(id) if id != 0 => Ok(Some(id)),
            _ => Err(Error::Config(format!("invalid guild id: {}", guild))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("cobalt-relay").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["--token", "abc"]);

        assert_eq!(config.cobalt_url, DEFAULT_COBALT_URL);
        assert!(config.remove_commands);
        assert_eq!(config.guild_id().unwrap(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rmcmd_can_be_disabled() {
        let config = parse(&["--token", "abc", "--rmcmd", "false"]);
        assert!(!config.remove_commands);
    }

    #[test]
    fn test_guild_scope() {
        let config = parse(&["--token", "abc", "--guild", "1344356700919955539"]);
        assert_eq!(config.guild_id().unwrap(), Some(1344356700919955539));

        let config = parse(&["--token", "abc", "--guild", "not-a-number"]);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_empty_api_key_is_none() {
        let config = parse(&["--token", "abc", "--apikey", ""]);
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_invalid_base_url() {
        let config = parse(&["--token", "abc", "--cobalt", "ftp://example.com"]);
        assert!(matches!(config.base_url(), Err(Error::InvalidUrl(_))));
    }
}
