// ==========================================
// 应急物资调配规划系统 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 场景结构错误 =====
    #[error("场景中没有任何需求地点")]
    NoLocations,

    #[error("地点名称重复: {name}")]
    DuplicateLocation { name: String },

    // ===== 字段取值错误 =====
    #[error("地点 {name} 的优先级必须为正整数")]
    InvalidPriority { name: String },

    #[error("地点 {name} 的可达性必须为正整数")]
    InvalidAccessibility { name: String },

    #[error("地点 {name} 的距离必须为非负有限数")]
    InvalidDistance { name: String },

    #[error("车队平均速度必须为正有限数: {speed}")]
    InvalidAverageSpeed { speed: f64 },

    // ===== 物资种类一致性错误 =====
    #[error("地点 {name} 需求的物资种类 {kind} 不在资源池中")]
    NeedKindMissingFromPool { name: String, kind: String },

    #[error("地点 {name} 的需求未覆盖资源池物资种类 {kind}")]
    PoolKindMissingFromNeed { name: String, kind: String },

    #[error("资源池物资种类 {kind} 缺少运输限额")]
    PoolKindMissingFromLimits { kind: String },

    #[error("运输限额物资种类 {kind} 不在资源池中")]
    LimitKindMissingFromPool { kind: String },

    // ===== 加载错误 =====
    #[error("读取场景文件失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("解析场景 JSON 失败: {0}")]
    Json(#[from] serde_json::Error),
}
