use crate::clients::PubChemClient;
use crate::config::Config;
use crate::models::ResultTable;
use crate::orchestrator;
use crate::services::{ReportWriter, SmilesService};
use crate::utils::logging;
use anyhow::Result;

/// 应用主结构
pub struct App {
    config: Config,
    service: SmilesService,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config);

        let client = PubChemClient::new(&config)?;
        let service = SmilesService::new(client);

        Ok(Self { config, service })
    }

    /// 运行应用主逻辑
    ///
    /// 解析名单（内置列表或配置的文件）、打印报告、写出 CSV。
    /// 单个化合物的失败不会让运行失败，报告总是会产生
    pub async fn run(&self) -> Result<()> {
        let table = self.resolve_all().await;

        logging::print_result_table(&table);

        let writer = ReportWriter::new(self.config.output_csv_file.clone());
        writer.write_csv(&table).await?;

        logging::print_final_summary(&table, writer.output_path());

        Ok(())
    }

    /// 解析全部化合物
    ///
    /// 配置了名单文件时从文件读取，否则使用内置列表
    async fn resolve_all(&self) -> ResultTable {
        let delay = self.config.request_delay();

        if self.config.compound_list_file.is_empty() {
            let compound_names = default_compound_names();
            orchestrator::resolve_batch(&self.service, &compound_names, delay).await
        } else {
            orchestrator::resolve_from_file(&self.service, &self.config.compound_list_file, delay)
                .await
        }
    }
}

/// 内置化合物名单
fn default_compound_names() -> Vec<String> {
    [
        "mesitylene",
        "5-ethyl-2-methylheptane",
        "undecane",
        "methyl octanoate",
        "methyl tridecanoate",
        "undecanoic acid",
        "octyl 10-undecenoate",
        "methyl tetradecanoate",
        "capric acid",
        "pentadecyl pentanoate",
        "methyl 14-methylpentadecanoate",
        "hexadecanoic acid",
        "methyl linoleate",
        "methyl oleate",
        "methyl stearate",
        "oleic acid",
        "octadecanoic acid",
        "1-fluorodecane",
        "methyl icosanoate",
        "octadecanal",
        "9-octadecanone",
        "4-ethyl-1-octyn-3-ol",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_compound_names_count() {
        assert_eq!(default_compound_names().len(), 22);
        assert_eq!(default_compound_names()[0], "mesitylene");
    }
}
