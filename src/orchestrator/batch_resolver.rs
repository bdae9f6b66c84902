//! 批量解析器 - 编排层
//!
//! 定义一批化合物的完整处理流程：逐个解析、记录结果、请求间限速。
//! 严格顺序执行，前一个化合物的结果落表之前不会开始下一个。

use crate::models::{load_compound_list, ResolutionResult, ResultTable};
use crate::services::SmilesService;
use std::path::Path;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info};

/// 批量解析化合物名称
///
/// # 参数
/// - `service`: 单化合物解析服务
/// - `compound_names`: 名称列表，结果行顺序与其一致
/// - `delay`: 两次解析之间的延迟（最后一个之后不等待）
///
/// # 返回
/// 返回完整的结果表：每个输入恰好一行，失败的行状态为 Not Found，
/// 本函数不会因单个化合物失败而中断
pub async fn resolve_batch(
    service: &SmilesService,
    compound_names: &[String],
    delay: Duration,
) -> ResultTable {
    let total = compound_names.len();
    let mut table = ResultTable::new();

    info!("开始处理 {} 个化合物...", total);

    for (i, compound_name) in compound_names.iter().enumerate() {
        info!("🔍 处理 {}/{}: {}", i + 1, total, compound_name);

        let smiles = service.resolve(compound_name).await;
        table.push(ResolutionResult::new(compound_name.clone(), smiles));

        if i + 1 < total {
            sleep(delay).await;
        }
    }

    table
}

/// 从文件加载名单并批量解析
///
/// 文件无法读取时记录日志并返回空表，不向外传播错误
pub async fn resolve_from_file(
    service: &SmilesService,
    path: impl AsRef<Path>,
    delay: Duration,
) -> ResultTable {
    let path = path.as_ref();

    match load_compound_list(path).await {
        Ok(compound_names) => resolve_batch(service, &compound_names, delay).await,
        Err(e) => {
            error!("无法读取化合物名单 {}: {}", path.display(), e);
            ResultTable::new()
        }
    }
}
