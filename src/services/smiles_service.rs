//! SMILES 解析服务 - 业务能力层
//!
//! 只负责"把一个名称解析成 SMILES"能力，不关心批次和顺序

use crate::clients::PubChemClient;
use crate::error::{ApiError, Result};
use tracing::warn;

/// SMILES 解析服务
///
/// 职责：
/// - 单个化合物的两步解析（name → CID → SMILES）
/// - 把所有失败（网络、超时、JSON、空列表、缺字段）降级为 None 并记录日志
/// - 不出现 Vec<ResolutionResult>
/// - 不关心批次顺序
pub struct SmilesService {
    client: PubChemClient,
}

impl SmilesService {
    /// 创建新的解析服务
    pub fn new(client: PubChemClient) -> Self {
        Self { client }
    }

    /// 解析单个化合物名称
    ///
    /// # 参数
    /// - `compound_name`: 化合物名称（如 "mesitylene"）
    ///
    /// # 返回
    /// 成功时返回 SMILES 字符串，任何失败都返回 None；
    /// 错误不会越过这个边界向外传播
    pub async fn resolve(&self, compound_name: &str) -> Option<String> {
        match self.try_resolve(compound_name).await {
            Ok(smiles) => Some(smiles),
            Err(e) => {
                warn!("获取 {} 的 SMILES 失败: {}", compound_name, e);
                None
            }
        }
    }

    /// 两步解析，任一步失败立即返回错误
    ///
    /// CID 查询失败时属性查询不会发起
    async fn try_resolve(&self, compound_name: &str) -> Result<String> {
        let cids = self.client.fetch_cids(compound_name).await?;

        // 注意：模糊名称可能匹配多个 CID，这里固定取第一个，
        // 结果可复现但不一定是想要的化合物
        let cid = cids.first().copied().ok_or_else(|| ApiError::CidNotFound {
            compound_name: compound_name.to_string(),
        })?;

        let properties = self.client.fetch_smiles_properties(cid).await?;
        let record = properties
            .first()
            .ok_or(ApiError::PropertyNotFound { cid })?;

        // CanonicalSMILES 优先，缺失时退回 ConnectivitySMILES
        let smiles = record
            .preferred_smiles()
            .ok_or(ApiError::SmilesMissing { cid })?;

        Ok(smiles.to_string())
    }
}
