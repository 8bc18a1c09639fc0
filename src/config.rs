/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::path::PathBuf;
use std::{fmt, fs};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Clone, Debug, EnumIter, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ConfigKey {
    AuthToken,
    AuthTokenIssuedAt,
    Server,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::iter()
            .find(|key| format!("{}", key) == s.to_lowercase())
            .ok_or(())
    }
}

fn get_config_file() -> PathBuf {
    let mut config_dir = dirs::config_dir().expect("Could not find configuration directory");
    config_dir.push("jobby");
    config_dir.push("config.toml");
    config_dir
}

pub fn load_config() -> HashMap<ConfigKey, Option<String>> {
    let mut config: HashMap<ConfigKey, Option<String>> =
        ConfigKey::iter().map(|key| (key, None)).collect();

    let config_file = get_config_file();
    if config_file.exists() {
        let contents = fs::read_to_string(&config_file).expect("Failed to read configuration file");
        let stored: BTreeMap<String, String> =
            toml::from_str(&contents).expect("Failed to parse configuration file");

        for (key, value) in stored {
            if let Ok(key) = key.parse::<ConfigKey>() {
                config.insert(key, Some(value));
            }
        }
    }

    config
}

pub fn save_config(config: &HashMap<ConfigKey, Option<String>>) {
    let config_file = get_config_file();
    let config_dir = config_file
        .parent()
        .expect("Failed to get configuration directory");

    fs::create_dir_all(config_dir).expect("Failed to create configuration directory");

    // Unset keys are dropped from the file rather than stored as empty.
    let stored: BTreeMap<String, String> = config
        .iter()
        .filter_map(|(key, value)| value.clone().map(|value| (key.to_string(), value)))
        .collect();

    let contents = toml::to_string_pretty(&stored).expect("Failed to serialize configuration");
    let mut file = fs::File::create(config_file).expect("Failed to create configuration file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write configuration file");
}

pub fn set_get_value(key: ConfigKey, value: Option<String>, quiet: bool) -> Option<String> {
    if let Some(value) = value {
        let mut config = load_config();
        config.insert(key.clone(), Some(value.clone()));
        save_config(&config);

        if !quiet {
            println!("{} set to \"{}\"", key, value);
        }

        Some(value)
    } else {
        let found = load_config().get(&key).cloned().flatten();

        if !quiet {
            match &found {
                Some(value) => println!("{}", value),
                None => println!("[unset]"),
            }
        }

        found
    }
}

pub fn unset_value(key: ConfigKey) {
    let mut config = load_config();
    config.insert(key, None);
    save_config(&config);
}

pub fn set_get_value_from_string(
    key: String,
    value: Option<String>,
    quiet: bool,
) -> Result<Option<String>, String> {
    match key.parse::<ConfigKey>() {
        Ok(key) => Ok(set_get_value(key, value, quiet)),
        Err(()) => {
            if !quiet {
                eprintln!("Invalid key: {}", key);
                eprintln!("Valid keys are:");
                for key in ConfigKey::iter() {
                    eprintln!("{}", key);
                }
            }

            Err("Invalid key".to_string())
        }
    }
}
