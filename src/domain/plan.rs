// ==========================================
// 应急物资调配规划系统 - 调配方案领域模型
// ==========================================
// 红线: 方案是管线结束后的不可变快照,
//       展示层只读, 不可反向污染地点状态
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// AllocationRecord - 单地点分配记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRecord {
    pub location: String,                    // 地点名称
    pub allocated: BTreeMap<String, u32>,    // 最终分配量 (物资种类 -> 数量)
    pub fulfilled: bool,                     // 是否完全满足 (逐种类 allocated == need)
}

// ==========================================
// DeliveryStop - 配送节点
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryStop {
    pub location: String,                // 地点名称
    pub estimated_delivery_time: f64,    // 预计送达时间 (累计, 距离/速度单位)
}

// ==========================================
// AllocationPlan - 调配方案
// ==========================================
// 用途: 管线输出, 交由展示层渲染
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationPlan {
    pub allocations: Vec<AllocationRecord>,    // 分配记录 (按分配排序顺序)
    pub delivery_sequence: Vec<DeliveryStop>,  // 配送顺序 (按调度排序顺序)
}
