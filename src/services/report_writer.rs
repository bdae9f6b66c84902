//! CSV 报告写入服务 - 业务能力层
//!
//! 只负责"把结果表写成 CSV 文件"能力，不关心流程

use crate::models::ResultTable;
use anyhow::{Context, Result};
use tokio::fs;
use tracing::debug;

/// CSV 表头
const CSV_HEADER: &str = "Compound_Name,SMILES,Status";

/// CSV 报告写入服务
pub struct ReportWriter {
    output_path: String,
}

impl ReportWriter {
    /// 创建新的报告写入服务
    pub fn new(output_path: impl Into<String>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// 把结果表写入 CSV 文件
    ///
    /// # 参数
    /// - `table`: 完整的结果表，行顺序即写入顺序
    ///
    /// # 返回
    /// 返回是否成功写入
    pub async fn write_csv(&self, table: &ResultTable) -> Result<()> {
        let content = render_csv(table);

        debug!("写入 CSV: {} 行 -> {}", table.len(), self.output_path);

        fs::write(&self.output_path, content)
            .await
            .with_context(|| format!("无法写入结果文件: {}", self.output_path))?;

        Ok(())
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }
}

/// 渲染整个结果表为 CSV 文本
///
/// Status 为 Not Found 时 SMILES 列为空
fn render_csv(table: &ResultTable) -> String {
    let mut content = String::from(CSV_HEADER);
    content.push('\n');

    for row in table.rows() {
        content.push_str(&escape_csv_field(&row.compound_name));
        content.push(',');
        content.push_str(&escape_csv_field(row.smiles.as_deref().unwrap_or("")));
        content.push(',');
        content.push_str(&escape_csv_field(&row.status.to_string()));
        content.push('\n');
    }

    content
}

/// 转义单个 CSV 字段
///
/// 含逗号、引号或换行的字段加引号，内部引号双写
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResolutionResult;

    #[test]
    fn test_escape_plain_field() {
        assert_eq!(escape_csv_field("undecane"), "undecane");
    }

    #[test]
    fn test_escape_field_with_comma() {
        assert_eq!(
            escape_csv_field("2,4-dimethylpentane"),
            "\"2,4-dimethylpentane\""
        );
    }

    #[test]
    fn test_escape_field_with_quote() {
        assert_eq!(escape_csv_field("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_render_csv_rows_and_header() {
        let mut table = ResultTable::new();
        table.push(ResolutionResult::new(
            "mesitylene",
            Some("CC1=CC(=CC(=C1)C)C".to_string()),
        ));
        table.push(ResolutionResult::new("unobtainium", None));

        let csv = render_csv(&table);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Compound_Name,SMILES,Status");
        assert_eq!(lines[1], "mesitylene,CC1=CC(=CC(=C1)C)C,Found");
        assert_eq!(lines[2], "unobtainium,,Not Found");
    }

    #[tokio::test]
    async fn test_write_csv_to_disk() {
        let path = std::env::temp_dir().join(format!("smiles_report_{}.csv", std::process::id()));

        let mut table = ResultTable::new();
        table.push(ResolutionResult::new("water", Some("O".to_string())));

        let writer = ReportWriter::new(path.to_string_lossy().to_string());
        writer.write_csv(&table).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Compound_Name,SMILES,Status\n"));
        assert!(content.contains("water,O,Found"));

        let _ = std::fs::remove_file(&path);
    }
}
