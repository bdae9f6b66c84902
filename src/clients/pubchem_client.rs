/// PubChem API 客户端
///
/// 封装所有与 PubChem PUG REST API 相关的调用逻辑
use crate::config::Config;
use crate::error::{ApiError, AppError, Result};
use crate::models::pubchem::{CidResponse, CompoundProperties, PropertyResponse};
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// PubChem API 客户端
///
/// 持有唯一的 reqwest::Client，显式构造后注入到需要它的服务中，
/// 不依赖任何全局状态
pub struct PubChemClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PubChemClient {
    /// 创建新的 PubChem 客户端
    ///
    /// 超时和基础 URL 来自配置；基础 URL 在这里解析一次，
    /// 之后只做路径拼接
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.pubchem_api_base_url)
            .map_err(|e| AppError::Config(format!("无法解析基础 URL {}: {}", config.pubchem_api_base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "基础 URL 不能作为路径前缀: {}",
                config.pubchem_api_base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("无法构建 HTTP 客户端: {}", e)))?;

        Ok(Self { http, base_url })
    }

    /// 按名称查询化合物的 CID 列表
    ///
    /// # 参数
    /// - `compound_name`: 化合物名称，作为路径段自动做百分号转义
    ///
    /// # 返回
    /// 返回 PubChem 返回的全部 CID，响应中缺失列表时返回空 Vec
    pub async fn fetch_cids(&self, compound_name: &str) -> Result<Vec<u64>> {
        let url = self.endpoint_url(&["name", compound_name, "cids", "JSON"])?;
        let response: CidResponse = self.get_json(url, "cids").await?;

        let cids = response.into_cids();
        debug!("化合物 {} 匹配到 {} 个 CID", compound_name, cids.len());

        Ok(cids)
    }

    /// 按 CID 查询 CanonicalSMILES 属性记录
    ///
    /// # 参数
    /// - `cid`: 化合物的数字标识符
    ///
    /// # 返回
    /// 返回属性记录列表，响应中缺失表时返回空 Vec
    pub async fn fetch_smiles_properties(&self, cid: u64) -> Result<Vec<CompoundProperties>> {
        let cid_string = cid.to_string();
        let url = self.endpoint_url(&["cid", &cid_string, "property", "CanonicalSMILES", "JSON"])?;
        let response: PropertyResponse = self.get_json(url, "property").await?;

        Ok(response.into_properties())
    }

    /// 拼接端点 URL，路径段逐个转义
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config("基础 URL 不能作为路径前缀".to_string()))?
            .extend(segments);
        Ok(url)
    }

    /// 发送 GET 请求并解析 JSON 响应
    ///
    /// 非 2xx 状态视为错误，不读取响应体
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url, endpoint: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed {
                endpoint: endpoint.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::BadStatus {
                endpoint: endpoint.to_string(),
                status,
            }
            .into());
        }

        let parsed = response.json().await.map_err(|e| ApiError::JsonParseFailed {
            endpoint: endpoint.to_string(),
            source: e,
        })?;

        Ok(parsed)
    }
}
