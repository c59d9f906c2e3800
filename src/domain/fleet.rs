// ==========================================
// 应急物资调配规划系统 - 车队信息领域模型
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// FleetInfo - 车队信息
// ==========================================
// 说明: 车辆数与单车容量仅作信息记录, 核心算法
//       按单链串行配送建模, 不做多车装载约束
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetInfo {
    pub vehicle_count: u32,                // 车辆数
    pub capacity: BTreeMap<String, u32>,   // 单车容量 (物资种类 -> 数量, 信息性)
    pub average_speed: f64,                // 平均速度 (距离/时间单位, 须为正)
}
