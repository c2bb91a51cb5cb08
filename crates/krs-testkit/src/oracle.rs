//! `keyctl(1)` as an independent view of the kernel key store.
//!
//! Integration tests act through the client and check the result through the
//! command-line tool, so a bug shared by the client and its own readers can't
//! hide itself.

use std::process::{Command, Output};

use anyhow::{bail, Context};

use krs_core::{KeyHandle, KeyPermissions, KeyType};

/// Runs the `keyctl` binary.
#[derive(Debug, Clone)]
pub struct KeyctlOracle {
    program: String,
}

impl KeyctlOracle {
    /// Locate a working `keyctl` with access to a session keyring.
    ///
    /// Returns `None` when the tool is missing or the kernel has no key
    /// retention service, so callers can skip.
    pub fn probe() -> Option<Self> {
        let oracle = Self {
            program: "keyctl".to_string(),
        };
        match oracle.run(&["show", "@s"]) {
            Ok(_) => Some(oracle),
            Err(e) => {
                tracing::info!(error = %e, "keyctl oracle unavailable");
                None
            }
        }
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<Output> {
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .with_context(|| format!("failed to run {} {}", self.program, args.join(" ")))?;
        if !output.status.success() {
            bail!(
                "{} {} failed: {}",
                self.program,
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(output)
    }

    fn run_text(&self, args: &[&str]) -> anyhow::Result<String> {
        let output = self.run(args)?;
        Ok(String::from_utf8(output.stdout)?.trim().to_string())
    }

    fn parse_handle(text: &str) -> anyhow::Result<KeyHandle> {
        let id: i32 = text
            .trim()
            .parse()
            .with_context(|| format!("not a key id: {text:?}"))?;
        Ok(KeyHandle::new(id))
    }

    /// Render a handle the way `keyctl` takes it.
    fn arg(id: KeyHandle) -> String {
        match id {
            KeyHandle::THREAD_KEYRING => "@t".to_string(),
            KeyHandle::PROCESS_KEYRING => "@p".to_string(),
            KeyHandle::SESSION_KEYRING => "@s".to_string(),
            KeyHandle::USER_KEYRING => "@u".to_string(),
            KeyHandle::USER_SESSION_KEYRING => "@us".to_string(),
            KeyHandle::GROUP_KEYRING => "@g".to_string(),
            KeyHandle::REQKEY_AUTH_KEY => "@a".to_string(),
            other => other.to_string(),
        }
    }

    /// Add a key and return its id.
    pub fn add(
        &self,
        key_type: KeyType,
        name: &str,
        data: &str,
        keyring: KeyHandle,
    ) -> anyhow::Result<KeyHandle> {
        let keyring = Self::arg(keyring);
        let id = match key_type {
            KeyType::Keyring => self.run_text(&["newring", name, &keyring])?,
            KeyType::User => self.run_text(&["add", "user", name, data, &keyring])?,
        };
        Self::parse_handle(&id)
    }

    /// Find a key by type and description in the caller's keyrings.
    pub fn request(&self, key_type: KeyType, name: &str) -> anyhow::Result<KeyHandle> {
        let id = self.run_text(&["request", key_type.as_str(), name])?;
        Self::parse_handle(&id)
    }

    pub fn revoke(&self, id: KeyHandle) -> anyhow::Result<()> {
        self.run(&["revoke", &Self::arg(id)])?;
        Ok(())
    }

    pub fn unlink(&self, id: KeyHandle, keyring: KeyHandle) -> anyhow::Result<()> {
        self.run(&["unlink", &Self::arg(id), &Self::arg(keyring)])?;
        Ok(())
    }

    /// Whether `keyctl describe` still succeeds for the key.
    pub fn is_accessible(&self, id: KeyHandle) -> bool {
        self.run(&["describe", &Self::arg(id)]).is_ok()
    }

    /// The fields of `keyctl describe`: id, permissions, uid, gid, type, name.
    fn describe_fields(&self, id: KeyHandle) -> anyhow::Result<Vec<String>> {
        let text = self.run_text(&["describe", &Self::arg(id)])?;
        let fields: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        if fields.len() < 6 {
            bail!("unexpected describe output: {text:?}");
        }
        Ok(fields)
    }

    /// The permission mask, decoded from the text `keyctl` prints.
    pub fn permissions(&self, id: KeyHandle) -> anyhow::Result<KeyPermissions> {
        let fields = self.describe_fields(id)?;
        Ok(KeyPermissions::decode(&fields[1])?)
    }

    /// The description of a key (the last field; names with spaces are not
    /// supported).
    pub fn description(&self, id: KeyHandle) -> anyhow::Result<String> {
        let mut fields = self.describe_fields(id)?;
        fields.pop().context("empty describe output")
    }

    pub fn set_permissions(&self, id: KeyHandle, perm: KeyPermissions) -> anyhow::Result<()> {
        self.run(&["setperm", &Self::arg(id), &format!("{:#010x}", perm.bits())])?;
        Ok(())
    }

    /// The payload of a user key.
    pub fn pipe(&self, id: KeyHandle) -> anyhow::Result<Vec<u8>> {
        Ok(self.run(&["pipe", &Self::arg(id)])?.stdout)
    }

    /// The handles linked into a keyring.
    pub fn rlist(&self, keyring: KeyHandle) -> anyhow::Result<Vec<KeyHandle>> {
        let text = self.run_text(&["rlist", &Self::arg(keyring)])?;
        text.split_whitespace().map(Self::parse_handle).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_handle() {
        assert_eq!(
            KeyctlOracle::parse_handle("123456\n").unwrap(),
            KeyHandle::new(123456)
        );
        assert!(KeyctlOracle::parse_handle("keyctl: error").is_err());
    }

    #[test]
    fn test_special_handles_use_shorthand() {
        assert_eq!(KeyctlOracle::arg(KeyHandle::SESSION_KEYRING), "@s");
        assert_eq!(KeyctlOracle::arg(KeyHandle::USER_SESSION_KEYRING), "@us");
        assert_eq!(KeyctlOracle::arg(KeyHandle::new(991)), "991");
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let oracle = KeyctlOracle {
            program: "keyctl-does-not-exist".to_string(),
        };
        assert!(oracle.run(&["show"]).is_err());
        assert!(!oracle.is_accessible(KeyHandle::new(1)));
    }
}
