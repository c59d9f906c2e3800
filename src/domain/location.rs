// ==========================================
// 应急物资调配规划系统 - 需求地点领域模型
// ==========================================
// 红线: allocated 在管线结束时不得超过 need
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// Location - 需求地点
// ==========================================
// 用途: 承载单个受灾地点的需求与当前分配状态
// 说明: 物资种类映射统一使用 BTreeMap, 保证迭代顺序
//       跨进程稳定 (固定种子可复现同一方案)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    // ===== 标识 =====
    pub name: String,              // 地点名称 (唯一)

    // ===== 调配参数 =====
    pub priority: u32,             // 优先级 (正整数, 越大越紧急)
    pub need: BTreeMap<String, u32>, // 需求量 (物资种类 -> 数量)
    pub distance: f64,             // 距补给点距离 (非负)
    pub accessibility: u32,        // 可达性 (正整数, 越大越易到达)

    // ===== 当前分配 =====
    #[serde(default)]
    pub allocated: BTreeMap<String, u32>, // 已分配量 (物资种类 -> 数量)
}

impl Location {
    /// 获取指定物资种类的已分配量 (未分配视为 0)
    pub fn allocated_qty(&self, kind: &str) -> u32 {
        self.allocated.get(kind).copied().unwrap_or(0)
    }

    /// 获取指定物资种类的需求量 (未声明视为 0)
    pub fn need_qty(&self, kind: &str) -> u32 {
        self.need.get(kind).copied().unwrap_or(0)
    }

    /// 计算指定物资种类的未满足需求量
    ///
    /// 使用饱和减法, 分配超出需求时返回 0 而非负数
    pub fn outstanding_need(&self, kind: &str) -> u32 {
        self.need_qty(kind).saturating_sub(self.allocated_qty(kind))
    }

    /// 判断是否完全满足 (所有物资种类的已分配量等于需求量)
    pub fn is_fulfilled(&self) -> bool {
        self.need
            .iter()
            .all(|(kind, &need)| self.allocated_qty(kind) == need)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location_with(need: &[(&str, u32)], allocated: &[(&str, u32)]) -> Location {
        Location {
            name: "测试地点".to_string(),
            priority: 1,
            need: need.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            distance: 0.0,
            accessibility: 1,
            allocated: allocated.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    #[test]
    fn test_outstanding_need_saturates_at_zero() {
        let loc = location_with(&[("food", 10)], &[("food", 15)]);
        assert_eq!(loc.outstanding_need("food"), 0);
    }

    #[test]
    fn test_outstanding_need_for_unallocated_kind() {
        let loc = location_with(&[("water", 8)], &[]);
        assert_eq!(loc.outstanding_need("water"), 8);
    }

    #[test]
    fn test_is_fulfilled_requires_every_kind() {
        let full = location_with(&[("food", 10), ("water", 5)], &[("food", 10), ("water", 5)]);
        assert!(full.is_fulfilled());

        let partial = location_with(&[("food", 10), ("water", 5)], &[("food", 10), ("water", 4)]);
        assert!(!partial.is_fulfilled());
    }

    #[test]
    fn test_is_fulfilled_with_zero_need() {
        // 需求为 0 的种类: 分配 0 即视为满足
        let loc = location_with(&[("medical", 0)], &[("medical", 0)]);
        assert!(loc.is_fulfilled());
    }
}
