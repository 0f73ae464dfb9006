use alloy_json_abi::JsonAbi;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{LoaderError, Result};

/// Reads ABI documents from a fixed directory, by default the one holding the running executable.
#[derive(Debug, Clone)]
pub struct AbiLoader {
    base_dir: PathBuf,
}

impl AbiLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    /// Loader rooted next to the current executable
    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| {
            LoaderError::Configuration(format!("Cannot locate current executable: {}", e))
        })?;
        let dir = exe.parent().ok_or_else(|| {
            LoaderError::Configuration(format!("Executable {:?} has no parent directory", exe))
        })?;
        Ok(Self::new(dir))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    /// Read `filename` and parse it as an untyped JSON document.
    pub fn load(&self, filename: &str) -> Result<Value> {
        let path = self.resolve(filename);
        let data = read(&path)?;
        serde_json::from_str(&data).map_err(|source| LoaderError::AbiParse { path, source })
    }

    /// Same as [`AbiLoader::load`], but parsed into alloy's typed ABI.
    pub fn load_json_abi(&self, filename: &str) -> Result<JsonAbi> {
        let path = self.resolve(filename);
        let data = read(&path)?;
        serde_json::from_str::<JsonAbi>(&data).map_err(|source| LoaderError::AbiParse { path, source })
    }
}

fn read(path: &Path) -> Result<String> {
    debug!("Reading ABI file {:?}", path);
    fs::read_to_string(path).map_err(|source| LoaderError::AbiRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON ABI document that sits next to the running executable.
pub fn load_abi(filename: &str) -> Result<Value> {
    AbiLoader::beside_executable()?.load(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_abi() -> Value {
        json!([
            {
                "type": "function",
                "name": "balanceOf",
                "inputs": [{ "name": "owner", "type": "address", "internalType": "address" }],
                "outputs": [{ "name": "", "type": "uint256", "internalType": "uint256" }],
                "stateMutability": "view"
            },
            {
                "type": "event",
                "name": "Transfer",
                "inputs": [
                    { "name": "from", "type": "address", "indexed": true },
                    { "name": "to", "type": "address", "indexed": true },
                    { "name": "value", "type": "uint256", "indexed": false }
                ],
                "anonymous": false
            }
        ])
    }

    #[test]
    fn test_load_returns_parsed_document() {
        let dir = tempfile::tempdir().unwrap();
        let abi = sample_abi();
        fs::write(dir.path().join("token_ABI.json"), serde_json::to_string_pretty(&abi).unwrap()).unwrap();

        let loader = AbiLoader::new(dir.path());
        assert_eq!(loader.load("token_ABI.json").unwrap(), abi);
    }

    #[test]
    fn test_load_json_abi_typed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("token_ABI.json"), sample_abi().to_string()).unwrap();

        let abi = AbiLoader::new(dir.path()).load_json_abi("token_ABI.json").unwrap();
        assert!(abi.function("balanceOf").is_some());
        assert!(abi.event("Transfer").is_some());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AbiLoader::new(dir.path());

        match loader.load("missing.json") {
            Err(LoaderError::AbiRead { path, source }) => {
                assert_eq!(path, dir.path().join("missing.json"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected AbiRead, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "[{\"type\": \"function\",").unwrap();

        let loader = AbiLoader::new(dir.path());
        assert!(matches!(loader.load("broken.json"), Err(LoaderError::AbiParse { .. })));
        assert!(matches!(loader.load_json_abi("broken.json"), Err(LoaderError::AbiParse { .. })));
    }

    #[test]
    fn test_untyped_load_skips_abi_validation() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("odd.json"), r#"{"not": "an abi"}"#).unwrap();

        let loader = AbiLoader::new(dir.path());
        assert_eq!(loader.load("odd.json").unwrap(), json!({"not": "an abi"}));
        assert!(matches!(loader.load_json_abi("odd.json"), Err(LoaderError::AbiParse { .. })));
    }

    #[test]
    fn test_beside_executable_resolves_next_to_binary() {
        let loader = AbiLoader::beside_executable().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(loader.base_dir(), exe.parent().unwrap());
        assert_eq!(loader.resolve("x.json"), exe.parent().unwrap().join("x.json"));
        assert!(matches!(load_abi("no-such-abi-file.json"), Err(LoaderError::AbiRead { .. })));
    }
}
