// ABOUTME: Credential resolution from the environment or the persisted config file
// ABOUTME: Environment wins over config; masking keeps only the first and last four characters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

use std::fmt::{self, Display, Formatter};

use hevy_core::{HevyError, HevyResult};
use serde::Serialize;

use crate::config::{environment, Config, ConfigStore};

/// Character used in place of hidden key characters
const MASK_CHAR: char = '*';
/// Characters kept visible on each end of a long key
const VISIBLE_EDGE: usize = 4;

/// Where the resolved credential came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialOrigin {
    /// `HEVY_API_KEY` environment variable
    Env,
    /// Persisted config file
    Config,
    /// No credential anywhere
    Absent,
}

impl Display for CredentialOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env => write!(f, "env"),
            Self::Config => write!(f, "config"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

/// Resolved credential together with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCredential {
    /// The API key, `None` when origin is `Absent`
    pub key: Option<String>,
    /// Where the key came from
    pub origin: CredentialOrigin,
}

impl ResolvedCredential {
    /// The key, or the user-actionable missing-credential error
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when no credential was found
    pub fn require(self) -> HevyResult<String> {
        self.key.ok_or(HevyError::MissingApiKey)
    }
}

/// Pure resolution: environment value first, then config
#[must_use]
pub fn resolve_with(env_value: Option<String>, config: &Config) -> ResolvedCredential {
    if let Some(key) = env_value.filter(|k| !k.is_empty()) {
        return ResolvedCredential {
            key: Some(key),
            origin: CredentialOrigin::Env,
        };
    }

    match config.api_key.as_deref().filter(|k| !k.is_empty()) {
        Some(key) => ResolvedCredential {
            key: Some(key.to_owned()),
            origin: CredentialOrigin::Config,
        },
        None => ResolvedCredential {
            key: None,
            origin: CredentialOrigin::Absent,
        },
    }
}

/// Resolve with the config store opened only when the environment has no key
///
/// A set environment key wins without touching the store, so an unreadable
/// config file or a missing home directory cannot block it.
///
/// # Errors
///
/// Returns an error from `open_store` or from reading the config file, and
/// only on the fallback path
pub fn resolve_lazily<F>(
    env_value: Option<String>,
    open_store: F,
) -> HevyResult<ResolvedCredential>
where
    F: FnOnce() -> HevyResult<ConfigStore>,
{
    if let Some(key) = env_value.filter(|k| !k.is_empty()) {
        return Ok(ResolvedCredential {
            key: Some(key),
            origin: CredentialOrigin::Env,
        });
    }
    Ok(resolve_with(None, &open_store()?.read()?))
}

/// Resolve from `HEVY_API_KEY` and the given config store
///
/// # Errors
///
/// Returns an error only if no env key is set and the config file exists
/// but cannot be read
pub fn resolve(store: &ConfigStore) -> HevyResult<ResolvedCredential> {
    resolve_lazily(environment::api_key_from_env(), || Ok(store.clone()))
}

/// Mask a key for display
///
/// Keys of eight characters or fewer are fully hidden. Longer keys keep the
/// first and last four characters.
#[must_use]
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let len = chars.len();

    if len <= VISIBLE_EDGE * 2 {
        return MASK_CHAR.to_string().repeat(len);
    }

    let head: String = chars[..VISIBLE_EDGE].iter().collect();
    let tail: String = chars[len - VISIBLE_EDGE..].iter().collect();
    let hidden = MASK_CHAR.to_string().repeat(len - VISIBLE_EDGE * 2);
    format!("{head}{hidden}{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(key: Option<&str>) -> Config {
        Config {
            api_key: key.map(str::to_owned),
            ..Config::default()
        }
    }

    #[test]
    fn test_env_key_skips_unusable_store() {
        let resolved = resolve_lazily(Some("from-env".into()), || {
            Err(HevyError::HomeDirUnavailable)
        })
        .unwrap();
        assert_eq!(resolved.key.as_deref(), Some("from-env"));
        assert_eq!(resolved.origin, CredentialOrigin::Env);
    }

    #[test]
    fn test_store_errors_surface_without_env_key() {
        let result = resolve_lazily(None, || Err(HevyError::HomeDirUnavailable));
        assert!(matches!(result, Err(HevyError::HomeDirUnavailable)));

        let result = resolve_lazily(Some(String::new()), || Err(HevyError::HomeDirUnavailable));
        assert!(matches!(result, Err(HevyError::HomeDirUnavailable)));
    }

    #[test]
    fn test_env_overrides_config() {
        let resolved = resolve_with(Some("from-env".into()), &config_with(Some("from-file")));
        assert_eq!(resolved.key.as_deref(), Some("from-env"));
        assert_eq!(resolved.origin, CredentialOrigin::Env);
    }

    #[test]
    fn test_config_used_without_env() {
        let resolved = resolve_with(None, &config_with(Some("from-file")));
        assert_eq!(resolved.key.as_deref(), Some("from-file"));
        assert_eq!(resolved.origin, CredentialOrigin::Config);
    }

    #[test]
    fn test_absent_when_nothing_set() {
        let resolved = resolve_with(None, &config_with(None));
        assert_eq!(resolved.origin, CredentialOrigin::Absent);
        assert!(matches!(resolved.require(), Err(HevyError::MissingApiKey)));
    }

    #[test]
    fn test_empty_values_count_as_absent() {
        let resolved = resolve_with(Some(String::new()), &config_with(Some("")));
        assert_eq!(resolved.origin, CredentialOrigin::Absent);
    }

    #[test]
    fn test_mask_short_keys_fully() {
        assert_eq!(mask_key("abc"), "***");
        assert_eq!(mask_key("12345678"), "********");
        assert!(mask_key("short").chars().all(|c| c == MASK_CHAR));
    }

    #[test]
    fn test_mask_long_keys_keeps_edges() {
        assert_eq!(mask_key("123456789"), "1234*6789");
        let masked = mask_key("abcd-0000-1111-wxyz");
        assert!(masked.starts_with("abcd"));
        assert!(masked.ends_with("wxyz"));
        assert_eq!(masked.chars().count(), 19);
        assert_eq!(masked[4..15].chars().filter(|c| *c == MASK_CHAR).count(), 11);
    }

    #[test]
    fn test_mask_counts_characters_not_bytes() {
        let masked = mask_key("ééééxxxxxüüüü");
        assert_eq!(masked, "éééé*****üüüü");
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(CredentialOrigin::Env.to_string(), "env");
        assert_eq!(CredentialOrigin::Config.to_string(), "config");
        assert_eq!(CredentialOrigin::Absent.to_string(), "absent");
    }
}
