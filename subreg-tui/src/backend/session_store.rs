//! 登录会话存储
//!
//! 后端通过 `user-cookie` 识别登录用户。会话值优先取 `SUBREG_SESSION`，
//! 否则从系统钥匙串读取：
//! - Windows: Credential Manager
//! - macOS: Keychain
//! - Linux: Secret Service (GNOME Keyring / KWallet)

use anyhow::{Context, Result};
use keyring::Entry;

const SERVICE_NAME: &str = "subreg";
const SESSION_KEY: &str = "session";

pub const ENV_SESSION: &str = "SUBREG_SESSION";

/// 基于系统钥匙串的会话存储（只读）
#[derive(Debug, Default)]
pub struct KeyringSessionStore;

impl KeyringSessionStore {
    pub fn new() -> Self {
        Self
    }

    /// 从钥匙串读取会话，没有条目时返回 `None`
    pub fn load(&self) -> Result<Option<String>> {
        let entry =
            Entry::new(SERVICE_NAME, SESSION_KEY).context("Failed to create keyring entry")?;

        match entry.get_password() {
            Ok(session) => Ok(Some(session)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).context("Failed to read session from keyring"),
        }
    }

    /// 环境变量优先，其次钥匙串
    pub fn resolve(&self, env_value: Option<String>) -> Result<Option<String>> {
        match env_value.filter(|v| !v.trim().is_empty()) {
            Some(session) => Ok(Some(session)),
            None => self.load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_session_wins() -> Result<()> {
        let store = KeyringSessionStore::new();
        assert_eq!(
            store.resolve(Some("abc123".into()))?,
            Some("abc123".to_string())
        );
        Ok(())
    }

    #[test]
    fn missing_keyring_entry_is_no_session() -> Result<()> {
        keyring::set_default_credential_builder(keyring::mock::default_credential_builder());
        let store = KeyringSessionStore::new();
        assert_eq!(store.resolve(Some(String::new()))?, None);
        Ok(())
    }
}
