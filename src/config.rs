/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// PubChem PUG REST 基础 URL
    pub pubchem_api_base_url: String,
    /// 单次 HTTP 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 两次请求之间的延迟（毫秒），尊重 PubChem 的限速要求
    pub request_delay_ms: u64,
    /// 结果 CSV 输出路径
    pub output_csv_file: String,
    /// 化合物名单文件（每行一个名称），为空则使用内置列表
    pub compound_list_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pubchem_api_base_url: "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound".to_string(),
            request_timeout_secs: 10,
            request_delay_ms: 200,
            output_csv_file: "compound_smiles.csv".to_string(),
            compound_list_file: String::new(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            pubchem_api_base_url: std::env::var("PUBCHEM_API_BASE_URL").unwrap_or(default.pubchem_api_base_url),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            request_delay_ms: std::env::var("REQUEST_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_delay_ms),
            output_csv_file: std::env::var("OUTPUT_CSV_FILE").unwrap_or(default.output_csv_file),
            compound_list_file: std::env::var("COMPOUND_LIST_FILE").unwrap_or(default.compound_list_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 两次请求之间的延迟
    pub fn request_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_delay_ms)
    }
}
