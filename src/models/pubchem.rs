//! PubChem PUG REST 响应模型
//!
//! 两个端点的 JSON 结构，所有可能缺失的键都用 Option / default 显式建模

use serde::Deserialize;

/// `name/{name}/cids/JSON` 端点的响应
#[derive(Debug, Deserialize)]
pub struct CidResponse {
    #[serde(rename = "IdentifierList")]
    pub identifier_list: Option<IdentifierList>,
}

impl CidResponse {
    /// 取出 CID 列表，缺失时视为空列表
    pub fn into_cids(self) -> Vec<u64> {
        self.identifier_list.map(|list| list.cid).unwrap_or_default()
    }
}

/// CID 标识符列表
#[derive(Debug, Deserialize)]
pub struct IdentifierList {
    #[serde(rename = "CID", default)]
    pub cid: Vec<u64>,
}

/// `cid/{cid}/property/CanonicalSMILES/JSON` 端点的响应
#[derive(Debug, Deserialize)]
pub struct PropertyResponse {
    #[serde(rename = "PropertyTable")]
    pub property_table: Option<PropertyTable>,
}

impl PropertyResponse {
    /// 取出属性记录列表，缺失时视为空列表
    pub fn into_properties(self) -> Vec<CompoundProperties> {
        self.property_table.map(|table| table.properties).unwrap_or_default()
    }
}

/// 属性表
#[derive(Debug, Deserialize)]
pub struct PropertyTable {
    #[serde(rename = "Properties", default)]
    pub properties: Vec<CompoundProperties>,
}

/// 单个化合物的属性记录
#[derive(Debug, Clone, Deserialize)]
pub struct CompoundProperties {
    #[serde(rename = "CID")]
    pub cid: Option<u64>,
    #[serde(rename = "CanonicalSMILES")]
    pub canonical_smiles: Option<String>,
    #[serde(rename = "ConnectivitySMILES")]
    pub connectivity_smiles: Option<String>,
}

impl CompoundProperties {
    /// 选择首选的 SMILES 表示
    ///
    /// CanonicalSMILES 是标准化形式，优先于 ConnectivitySMILES；
    /// 空字符串视为缺失，不算有效的 SMILES
    pub fn preferred_smiles(&self) -> Option<&str> {
        self.canonical_smiles
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self
                .connectivity_smiles
                .as_deref()
                .filter(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cid_response() {
        let json = r#"{"IdentifierList":{"CID":[7583]}}"#;
        let response: CidResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_cids(), vec![7583]);
    }

    #[test]
    fn test_parse_cid_response_missing_list() {
        let json = r#"{}"#;
        let response: CidResponse = serde_json::from_str(json).unwrap();
        assert!(response.into_cids().is_empty());
    }

    #[test]
    fn test_parse_cid_response_empty_list() {
        let json = r#"{"IdentifierList":{"CID":[]}}"#;
        let response: CidResponse = serde_json::from_str(json).unwrap();
        assert!(response.into_cids().is_empty());
    }

    #[test]
    fn test_parse_property_response() {
        let json = r#"{"PropertyTable":{"Properties":[{"CID":7583,"CanonicalSMILES":"CC1=CC(=CC(=C1)C)C"}]}}"#;
        let response: PropertyResponse = serde_json::from_str(json).unwrap();
        let properties = response.into_properties();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].preferred_smiles(), Some("CC1=CC(=CC(=C1)C)C"));
    }

    #[test]
    fn test_preferred_smiles_canonical_first() {
        let record = CompoundProperties {
            cid: Some(1),
            canonical_smiles: Some("CCO".to_string()),
            connectivity_smiles: Some("C-C-O".to_string()),
        };
        assert_eq!(record.preferred_smiles(), Some("CCO"));
    }

    #[test]
    fn test_preferred_smiles_connectivity_fallback() {
        let record = CompoundProperties {
            cid: Some(1),
            canonical_smiles: None,
            connectivity_smiles: Some("C-C-O".to_string()),
        };
        assert_eq!(record.preferred_smiles(), Some("C-C-O"));
    }

    #[test]
    fn test_preferred_smiles_empty_canonical_falls_back() {
        let record = CompoundProperties {
            cid: Some(1),
            canonical_smiles: Some(String::new()),
            connectivity_smiles: Some("CCO".to_string()),
        };
        assert_eq!(record.preferred_smiles(), Some("CCO"));
    }

    #[test]
    fn test_preferred_smiles_both_empty_is_none() {
        let record = CompoundProperties {
            cid: Some(1),
            canonical_smiles: Some(String::new()),
            connectivity_smiles: Some(String::new()),
        };
        assert_eq!(record.preferred_smiles(), None);
    }

    #[test]
    fn test_preferred_smiles_neither() {
        let record = CompoundProperties {
            cid: Some(1),
            canonical_smiles: None,
            connectivity_smiles: None,
        };
        assert_eq!(record.preferred_smiles(), None);
    }
}
