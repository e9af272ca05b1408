//! 状态文件服务 - 业务能力层
//!
//! 只负责"读写 state.json"能力。读取失败一律视为首次运行；
//! 写入采用先写临时文件再重命名的方式，避免留下半截文件。

use crate::error::StateError;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 轮换状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationState {
    /// 上次发布的题目位置
    pub last_question_index: Option<usize>,
}

impl RotationState {
    pub fn new(last_question_index: Option<usize>) -> Self {
        Self {
            last_question_index,
        }
    }
}

/// 状态文件服务
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取状态
    ///
    /// 文件不存在、无法读取或内容损坏时返回空状态，不会报错
    pub fn load(&self) -> RotationState {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("📄 状态文件不存在，按首次运行处理: {}", self.path.display());
                return RotationState::default();
            }
            Err(e) => {
                warn!("⚠️ 无法读取状态文件 {}: {}，按首次运行处理", self.path.display(), e);
                return RotationState::default();
            }
        };

        match serde_json::from_str::<RotationState>(&content) {
            Ok(state) => {
                debug!("读取状态: {:?}", state);
                state
            }
            Err(e) => {
                warn!("⚠️ 状态文件已损坏 {}: {}，按首次运行处理", self.path.display(), e);
                RotationState::default()
            }
        }
    }

    /// 整体覆盖写入状态
    pub fn save(&self, state: &RotationState) -> Result<(), StateError> {
        let bytes = serde_json::to_vec_pretty(state)?;
        let tmp_path = self.tmp_path();

        self.write_tmp(&tmp_path, &bytes)
            .and_then(|_| fs::rename(&tmp_path, &self.path))
            .map_err(|source| {
                let _ = fs::remove_file(&tmp_path);
                StateError::WriteFailed {
                    path: self.path.display().to_string(),
                    source,
                }
            })?;

        debug!("写入状态: {:?} -> {}", state, self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_tmp(&self, tmp_path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(tmp_path)?;
        file.write_all(bytes)?;
        file.write_all(b"\n")?;
        file.sync_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));
        assert_eq!(store.load(), RotationState::default());
    }

    #[test]
    fn test_corrupt_file_is_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(StateStore::new(&path).load().last_question_index, None);

        fs::write(&path, r#"{"last_question_index": "three"}"#).unwrap();
        assert_eq!(StateStore::new(&path).load().last_question_index, None);
    }

    #[test]
    fn test_null_index_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"last_question_index": null}"#).unwrap();
        assert_eq!(StateStore::new(&path).load().last_question_index, None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("nested").join("state.json"));
        store.save(&RotationState::new(Some(41))).unwrap();
        assert_eq!(store.load(), RotationState::new(Some(41)));
        assert!(!dir.path().join("nested").join("state.json.tmp").exists());
    }

    #[test]
    fn test_saved_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        StateStore::new(&path)
            .save(&RotationState::new(Some(3)))
            .unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({ "last_question_index": 3 }));
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"last_question_index": 9, "extra": true}"#).unwrap();
        let store = StateStore::new(&path);
        store.save(&RotationState::new(Some(0))).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("extra"));
        assert_eq!(store.load().last_question_index, Some(0));
    }
}
