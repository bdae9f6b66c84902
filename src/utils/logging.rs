use crate::config::Config;
/// 日志工具模块
///
/// 提供报告格式化和输出的辅助函数
use crate::models::ResultTable;
use tracing::info;

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 程序配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - PubChem SMILES 批量获取");
    info!("🌐 API 地址: {}", config.pubchem_api_base_url);
    info!("⏱️ 请求间隔: {} ms", config.request_delay_ms);
    info!("{}", "=".repeat(60));
}

/// 打印格式化的结果表
///
/// # 参数
/// - `table`: 完整的结果表
pub fn print_result_table(table: &ResultTable) {
    info!("\n{}", "=".repeat(60));
    info!("RESULTS:");
    info!("{}", "=".repeat(60));

    let name_width = column_width(table.rows().iter().map(|r| r.compound_name.len()), "Compound_Name");
    let smiles_width = column_width(
        table.rows().iter().map(|r| r.smiles.as_deref().unwrap_or("").len()),
        "SMILES",
    );

    info!(
        "{:<name_width$}  {:<smiles_width$}  {}",
        "Compound_Name", "SMILES", "Status"
    );

    for row in table.rows() {
        info!(
            "{:<name_width$}  {:<smiles_width$}  {}",
            row.compound_name,
            row.smiles.as_deref().unwrap_or(""),
            row.status
        );
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `table`: 完整的结果表
/// - `output_path`: CSV 输出路径
pub fn print_final_summary(table: &ResultTable, output_path: &str) {
    info!("\n结果已保存至: {}", output_path);
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!(
        "\nSummary: {}/{} compounds found",
        table.found_count(),
        table.len()
    );
}

/// 列宽：取表头和所有值中的最大长度
fn column_width(values: impl Iterator<Item = usize>, header: &str) -> usize {
    values.fold(header.len(), usize::max)
}
