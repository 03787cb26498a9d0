//! Station Context - Value Objects

use serde::{Deserialize, Serialize};

/// 车站唯一标识（由存储层分配）
///
/// 所有比较都按值进行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(i64);

impl StationId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for StationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 车站名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationName(String);

impl StationName {
    pub const MAX_CHARS: usize = 255;

    pub fn new(name: impl Into<String>) -> Result<Self, &'static str> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("역 이름은 비어 있을 수 없습니다");
        }
        if name.chars().count() > Self::MAX_CHARS {
            return Err("역 이름은 255자를 넘을 수 없습니다");
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_id_value_equality() {
        // 大数值 id 同样按值比较
        let a = StationId::new(100_000);
        let b = StationId::from(100_000);
        assert_eq!(a, b);
        assert_ne!(a, StationId::new(100_001));
    }

    #[test]
    fn test_station_name_validation() {
        assert!(StationName::new("강남역").is_ok());
        assert!(StationName::new("").is_err());
        assert!(StationName::new("   ").is_err());
        assert!(StationName::new("역".repeat(256)).is_err());
    }
}
