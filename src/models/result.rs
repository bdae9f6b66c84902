//! 解析结果模型

use std::fmt;

/// 单个化合物的解析状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStatus {
    Found,
    NotFound,
}

impl fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionStatus::Found => write!(f, "Found"),
            ResolutionStatus::NotFound => write!(f, "Not Found"),
        }
    }
}

/// 单个化合物的解析结果
///
/// 每个输入名称恰好产生一条记录，产生后不再修改
#[derive(Debug, Clone)]
pub struct ResolutionResult {
    pub compound_name: String,
    pub smiles: Option<String>,
    pub status: ResolutionStatus,
}

impl ResolutionResult {
    /// 由解析结果构造记录，状态由 SMILES 是否存在决定
    pub fn new(compound_name: impl Into<String>, smiles: Option<String>) -> Self {
        let status = if smiles.is_some() {
            ResolutionStatus::Found
        } else {
            ResolutionStatus::NotFound
        };
        Self {
            compound_name: compound_name.into(),
            smiles,
            status,
        }
    }
}

/// 解析结果表
///
/// 行顺序与输入顺序一致
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    rows: Vec<ResolutionResult>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ResolutionResult) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ResolutionResult] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 成功解析的数量
    pub fn found_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.status == ResolutionStatus::Found)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_smiles_presence() {
        let found = ResolutionResult::new("undecane", Some("CCCCCCCCCCC".to_string()));
        assert_eq!(found.status, ResolutionStatus::Found);

        let missing = ResolutionResult::new("unobtainium", None);
        assert_eq!(missing.status, ResolutionStatus::NotFound);
        assert!(missing.smiles.is_none());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ResolutionStatus::Found.to_string(), "Found");
        assert_eq!(ResolutionStatus::NotFound.to_string(), "Not Found");
    }

    #[test]
    fn test_found_count() {
        let mut table = ResultTable::new();
        table.push(ResolutionResult::new("a", Some("C".to_string())));
        table.push(ResolutionResult::new("b", None));
        table.push(ResolutionResult::new("c", Some("CC".to_string())));

        assert_eq!(table.len(), 3);
        assert_eq!(table.found_count(), 2);
    }
}
