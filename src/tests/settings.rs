use super::*;

use std::{
    fs::File,
    io::Write,
    sync::{Mutex, MutexGuard},
};

// read_config sees the whole process environment
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_settings(dir: &std::path::Path, contents: &str) -> Result<()> {
    std::fs::create_dir_all(dir.join("passgan"))?;
    let mut file = File::create(dir.join("passgan").join("settings.toml"))?;
    writeln!(&file, "{}", contents)?;
    file.flush()?;
    Ok(())
}

#[test]
fn xdg_config_file_location_no_home() {
    let result = xdg_config_file_location(&None, &None);

    assert!(matches!(result, Err(Error::Generic(_))));
}

#[test]
fn xdg_config_file_location_home() -> Result<()> {
    let path = xdg_config_file_location(&Some(PathBuf::from("/home/user")), &None)?;

    assert_eq!(PathBuf::from("/home/user/.config/passgan/settings.toml"), path);
    Ok(())
}

#[test]
fn xdg_config_file_location_xdg_wins() -> Result<()> {
    let path = xdg_config_file_location(
        &Some(PathBuf::from("/home/user")),
        &Some(PathBuf::from("/tmp/config")),
    )?;

    assert_eq!(PathBuf::from("/tmp/config/passgan/settings.toml"), path);
    Ok(())
}

#[test]
fn read_config_without_file() -> Result<()> {
    let _env = env_lock();
    let dir = tempfile::tempdir().unwrap();

    let settings = read_config(&Some(dir.path().to_path_buf()), &None)?;

    assert_eq!(Settings::default(), settings);
    Ok(())
}

#[test]
fn read_config_without_home() -> Result<()> {
    let _env = env_lock();
    let settings = read_config(&None, &None)?;

    assert_eq!(GeneratorConfig::default(), settings.generator);
    Ok(())
}

#[test]
fn read_config_from_file() -> Result<()> {
    let _env = env_lock();
    let dir = tempfile::tempdir().unwrap();
    write_settings(
        dir.path(),
        "[generator]\nlength = 24\nsymbols = false\n\n[breach]\nendpoint = \"http://localhost:8080/range/\"\ntimeout_secs = 3\nadd_padding = true\n\n[clipboard]\nclear_after_secs = 0\n",
    )?;

    let settings = read_config(&None, &Some(dir.path().to_path_buf()))?;

    assert_eq!(
        GeneratorConfig {
            length: 24,
            use_upper: true,
            use_lower: true,
            use_digits: true,
            use_symbols: false,
        },
        settings.generator
    );
    assert_eq!("http://localhost:8080/range/", settings.breach.endpoint);
    assert_eq!(Duration::from_secs(3), settings.breach.timeout);
    assert!(settings.breach.add_padding);
    assert_eq!(None, settings.clipboard_clear_after);
    Ok(())
}

#[test]
fn read_config_rejects_all_classes_disabled() -> Result<()> {
    let _env = env_lock();
    let dir = tempfile::tempdir().unwrap();
    write_settings(
        dir.path(),
        "[generator]\nuppercase = false\nlowercase = false\ndigits = false\nsymbols = false\n",
    )?;

    let result = read_config(&None, &Some(dir.path().to_path_buf()));

    assert!(matches!(result, Err(Error::NoCharacterClass)));
    Ok(())
}

#[test]
fn read_config_rejects_short_length() -> Result<()> {
    let _env = env_lock();
    let dir = tempfile::tempdir().unwrap();
    write_settings(dir.path(), "[generator]\nlength = 4\n")?;

    let result = read_config(&None, &Some(dir.path().to_path_buf()));

    assert!(matches!(result, Err(Error::InvalidLength(4))));
    Ok(())
}

#[test]
fn from_config_negative_timeout() -> Result<()> {
    let mut config = defaults()?;
    config.set("breach.timeout_secs", -1i64)?;

    let result = from_config(&config);

    assert!(matches!(result, Err(Error::Config(_))));
    Ok(())
}

#[test]
fn from_config_zero_timeout() -> Result<()> {
    let mut config = defaults()?;
    config.set("breach.timeout_secs", 0i64)?;

    let result = from_config(&config);

    assert!(matches!(result, Err(Error::Config(_))));
    Ok(())
}

#[test]
fn read_config_zero_timeout_in_file() -> Result<()> {
    let _env = env_lock();
    let dir = tempfile::tempdir().unwrap();
    write_settings(dir.path(), "[breach]\ntimeout_secs = 0\n")?;

    let result = read_config(&None, &Some(dir.path().to_path_buf()));

    assert!(matches!(result, Err(Error::Config(_))));
    Ok(())
}

#[test]
fn read_config_environment_wins() -> Result<()> {
    let _env = env_lock();
    let dir = tempfile::tempdir().unwrap();
    write_settings(dir.path(), "[generator]\nlength = 20\n")?;
    std::env::set_var("PASSGAN_GENERATOR__LENGTH", "24");
    std::env::set_var("PASSGAN_BREACH__ADD_PADDING", "true");

    let result = read_config(&None, &Some(dir.path().to_path_buf()));

    std::env::remove_var("PASSGAN_GENERATOR__LENGTH");
    std::env::remove_var("PASSGAN_BREACH__ADD_PADDING");

    let settings = result?;
    assert_eq!(24, settings.generator.length);
    assert!(settings.breach.add_padding);
    assert_eq!(breach::DEFAULT_ENDPOINT, settings.breach.endpoint);
    Ok(())
}

#[test]
fn from_config_string_values_are_parsed() -> Result<()> {
    let mut config = defaults()?;
    config.set("generator.length", "32")?;
    config.set("generator.digits", "false")?;

    let settings = from_config(&config)?;

    assert_eq!(32, settings.generator.length);
    assert!(!settings.generator.use_digits);
    Ok(())
}
