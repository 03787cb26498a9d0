//! Line Context - Value Objects

use serde::{Deserialize, Serialize};

/// 线路唯一标识（由存储层分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(i64);

impl LineId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for LineId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 线路名称与颜色共用的长度上限
const MAX_LABEL_CHARS: usize = 20;

/// 线路名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineName(String);

impl LineName {
    pub fn new(name: impl Into<String>) -> Result<Self, &'static str> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("노선 이름은 비어 있을 수 없습니다");
        }
        if name.chars().count() > MAX_LABEL_CHARS {
            return Err("노선 이름은 20자를 넘을 수 없습니다");
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LineName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 线路颜色（如 "bg-red-600"）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineColor(String);

impl LineColor {
    pub fn new(color: impl Into<String>) -> Result<Self, &'static str> {
        let color = color.into();
        if color.trim().is_empty() {
            return Err("노선 색상은 비어 있을 수 없습니다");
        }
        if color.chars().count() > MAX_LABEL_CHARS {
            return Err("노선 색상은 20자를 넘을 수 없습니다");
        }
        Ok(Self(color))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LineColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 区间距离，必须为正整数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(i64);

impl Distance {
    pub fn new(distance: i64) -> Result<Self, &'static str> {
        if distance <= 0 {
            return Err("구간 거리는 0보다 커야 합니다");
        }
        Ok(Self(distance))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
