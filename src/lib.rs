//! # PubChem SMILES Fetcher
//!
//! 一个用于批量获取化合物 SMILES 表示的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的三层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 持有 HTTP 连接资源，只暴露原始 API 能力
//! - `PubChemClient` - 唯一的 reqwest::Client owner，封装两个 PUG REST 端点
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个化合物
//! - `SmilesService` - name → CID → SMILES 的解析能力
//! - `ReportWriter` - 写 CSV 报告能力
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_resolver` - 批量解析器，管理顺序和限速
//!
//! ## 流程
//!
//! 每个化合物完全解析完成（成功或失败）后才开始下一个，
//! 两次请求之间按配置的延迟休眠，失败只记录不中断批次。

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use clients::PubChemClient;
pub use config::Config;
pub use error::{ApiError, AppError, FileError};
pub use models::{CompoundProperties, ResolutionResult, ResolutionStatus, ResultTable};
pub use orchestrator::{resolve_batch, resolve_from_file};
pub use services::{ReportWriter, SmilesService};
