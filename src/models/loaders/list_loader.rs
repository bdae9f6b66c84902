use crate::error::{FileError, Result};
use std::path::Path;
use tokio::fs;

/// 从文本文件加载化合物名单
///
/// 文件格式：每行一个名称，无表头；行首尾空白会被去掉，空行被跳过，
/// 其余行保持原有顺序
pub async fn load_compound_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).await.map_err(|e| {
        let path = path.display().to_string();
        if e.kind() == std::io::ErrorKind::NotFound {
            FileError::NotFound { path }
        } else {
            FileError::ReadFailed { path, source: e }
        }
    })?;

    let names = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    Ok(names)
}
