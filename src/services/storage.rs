//! 记录存储 - 业务能力层
//!
//! 每份试卷一个 JSON 文件：`<output_dir>/<exam_type>/<exam_id>.json`，
//! 两空格缩进，非 ASCII 字符不转义。

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::{AppResult, StorageError};
use crate::models::{ExamRecord, ExamType};

/// 已保存记录的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub exam_id: u32,
    pub path: PathBuf,
}

/// 记录存储
#[derive(Debug, Clone)]
pub struct ExamStore {
    root: PathBuf,
}

impl ExamStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 某一题型的目录
    pub fn dir_for(&self, exam_type: ExamType) -> PathBuf {
        self.root.join(exam_type.name())
    }

    /// 某份试卷的文件路径
    pub fn path_for(&self, exam_type: ExamType, exam_id: &str) -> PathBuf {
        self.dir_for(exam_type).join(format!("{}.json", exam_id))
    }

    /// 保存记录，返回写入的路径
    pub async fn save(&self, record: &ExamRecord) -> AppResult<PathBuf> {
        let dir = self.dir_for(record.exam_type);
        fs::create_dir_all(&dir)
            .await
            .map_err(|source| StorageError::CreateDirFailed {
                path: dir.display().to_string(),
                source,
            })?;

        let path = self.path_for(record.exam_type, &record.exam_id);
        let json = serde_json::to_string_pretty(record).map_err(|source| {
            StorageError::JsonFailed {
                path: path.display().to_string(),
                source,
            }
        })?;

        fs::write(&path, json)
            .await
            .map_err(|source| StorageError::WriteFailed {
                path: path.display().to_string(),
                source,
            })?;

        info!("💾 已保存: {}", path.display());
        Ok(path)
    }

    /// 按数字 ID 升序列出某一题型已保存的记录
    ///
    /// 文件名不是数字的文件会被忽略；目录不存在时返回空列表。
    pub async fn list(&self, exam_type: ExamType) -> AppResult<Vec<StoredRecord>> {
        let dir = self.dir_for(exam_type);
        if !dir.exists() {
            debug!("目录不存在: {}", dir.display());
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&dir)
            .await
            .map_err(|source| StorageError::ReadFailed {
                path: dir.display().to_string(),
                source,
            })?;

        let mut records = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| StorageError::ReadFailed {
                path: dir.display().to_string(),
                source,
            })?
        {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            match path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<u32>().ok())
            {
                Some(exam_id) => records.push(StoredRecord { exam_id, path }),
                None => warn!("忽略非数字文件名: {}", path.display()),
            }
        }

        records.sort_by_key(|r| r.exam_id);
        Ok(records)
    }

    /// 读取单个记录
    pub async fn load(&self, path: &Path) -> AppResult<ExamRecord> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| StorageError::ReadFailed {
                path: path.display().to_string(),
                source,
            })?;
        let record = serde_json::from_str(&content).map_err(|source| StorageError::JsonFailed {
            path: path.display().to_string(),
            source,
        })?;
        Ok(record)
    }

    /// 删除单个记录
    pub async fn delete(&self, path: &Path) -> AppResult<()> {
        fs::remove_file(path)
            .await
            .map_err(|source| StorageError::DeleteFailed {
                path: path.display().to_string(),
                source,
            })?;
        debug!("已删除: {}", path.display());
        Ok(())
    }
}
