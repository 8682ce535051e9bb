use std::{path::PathBuf, time::Duration};

use log::debug;

use crate::{breach, generator::GeneratorConfig};
pub use crate::error::{Error, Result};

/// Settings for the breach check transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreachSettings {
    pub endpoint: String,
    pub timeout: Duration,
    pub add_padding: bool,
}

/// Everything read from the settings file and the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub generator: GeneratorConfig,
    pub breach: BreachSettings,
    /// `None` leaves copied passwords on the clipboard.
    pub clipboard_clear_after: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            generator: GeneratorConfig::default(),
            breach: BreachSettings {
                endpoint: breach::DEFAULT_ENDPOINT.to_owned(),
                timeout: breach::DEFAULT_TIMEOUT,
                add_padding: false,
            },
            clipboard_clear_after: Some(Duration::from_secs(DEFAULT_CLIPBOARD_CLEAR_SECS)),
        }
    }
}

pub const DEFAULT_CLIPBOARD_CLEAR_SECS: u64 = 40;

/// Location of the settings file, `$XDG_CONFIG_HOME/passgan/settings.toml` falling back to
/// `$HOME/.config/passgan/settings.toml`.
pub fn xdg_config_file_location(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<PathBuf> {
    let config_home = match xdg_config_home {
        Some(path) => path.clone(),
        None => match home {
            Some(home) => home.join(".config"),
            None => return Err(Error::Generic("no home directory set")),
        },
    };

    Ok(config_home.join("passgan").join("settings.toml"))
}

fn defaults() -> Result<config::Config> {
    let defaults = Settings::default();
    let mut settings = config::Config::default();

    settings.set_default("generator.length", defaults.generator.length as i64)?;
    settings.set_default("generator.uppercase", defaults.generator.use_upper)?;
    settings.set_default("generator.lowercase", defaults.generator.use_lower)?;
    settings.set_default("generator.digits", defaults.generator.use_digits)?;
    settings.set_default("generator.symbols", defaults.generator.use_symbols)?;
    settings.set_default("breach.endpoint", defaults.breach.endpoint)?;
    settings.set_default("breach.timeout_secs", defaults.breach.timeout.as_secs() as i64)?;
    settings.set_default("breach.add_padding", defaults.breach.add_padding)?;
    settings.set_default("clipboard.clear_after_secs", DEFAULT_CLIPBOARD_CLEAR_SECS as i64)?;

    Ok(settings)
}

fn non_negative(settings: &config::Config, key: &'static str) -> Result<u64> {
    let value = settings.get_int(key)?;
    if value < 0 {
        return Err(config::ConfigError::Message(format!("{key} can't be negative")).into());
    }
    Ok(value as u64)
}

fn positive(settings: &config::Config, key: &'static str) -> Result<u64> {
    match non_negative(settings, key)? {
        0 => Err(config::ConfigError::Message(format!("{key} must be at least 1")).into()),
        value => Ok(value),
    }
}

/// Reads the settings from `config`, validating the generator part.
pub fn from_config(settings: &config::Config) -> Result<Settings> {
    let generator = GeneratorConfig {
        length: non_negative(settings, "generator.length")? as usize,
        use_upper: settings.get_bool("generator.uppercase")?,
        use_lower: settings.get_bool("generator.lowercase")?,
        use_digits: settings.get_bool("generator.digits")?,
        use_symbols: settings.get_bool("generator.symbols")?,
    };
    generator.validate()?;

    let clear_after = non_negative(settings, "clipboard.clear_after_secs")?;

    Ok(Settings {
        generator,
        breach: BreachSettings {
            endpoint: settings.get_str("breach.endpoint")?,
            timeout: Duration::from_secs(positive(settings, "breach.timeout_secs")?),
            add_padding: settings.get_bool("breach.add_padding")?,
        },
        clipboard_clear_after: match clear_after {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        },
    })
}

/// Layers the defaults, the settings file and `PASSGAN_` environment variables.
pub fn read_config(home: &Option<PathBuf>, xdg_config_home: &Option<PathBuf>) -> Result<Settings> {
    let mut settings = defaults()?;

    match xdg_config_file_location(home, xdg_config_home) {
        Ok(path) => {
            debug!("reading settings from {}", path.display());
            settings.merge(config::File::from(path).required(false))?;
        }
        Err(err) => debug!("skipping the settings file: {}", err),
    }

    settings.merge(config::Environment::with_prefix("PASSGAN").separator("__"))?;

    from_config(&settings)
}

/// `read_config` with the locations taken from `$HOME` and `$XDG_CONFIG_HOME`.
pub fn load() -> Result<Settings> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);

    read_config(&home, &xdg_config_home)
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod settings_tests;
