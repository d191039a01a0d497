//! 通用类型定义

/// 边权重
pub type Weight = f64;

/// 不可达距离
pub const INFINITY: Weight = f64::INFINITY;
