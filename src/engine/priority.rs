// ==========================================
// 应急物资调配规划系统 - 地点排序引擎
// ==========================================
// 职责: 两套互不混用的排序
//   分配排序: 优先级降序, 同级可达性升序 (难到达者先分)
//   调度排序: 优先级降序, 同级距离升序 (近者先送)
// ==========================================

use crate::domain::Location;
use std::cmp::Ordering;

// ==========================================
// PrioritySorter - 地点排序引擎
// ==========================================
pub struct PrioritySorter {
    // 无状态引擎, 不需要注入依赖
}

impl PrioritySorter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 分配排序
    ///
    /// 排序键:
    /// 1) priority 降序 (越紧急越先分配)
    /// 2) accessibility 升序 (同级中难到达者优先)
    ///
    /// 排序稳定, 其余并列保持输入顺序
    ///
    /// # 参数
    /// - `locations`: 待排序的地点列表
    ///
    /// # 返回
    /// 排序后的地点列表
    pub fn sort_for_allocation(&self, mut locations: Vec<Location>) -> Vec<Location> {
        locations.sort_by(|a, b| self.compare_for_allocation(a, b));
        locations
    }

    /// 调度排序
    ///
    /// 排序键:
    /// 1) priority 降序
    /// 2) distance 升序 (同级中近者先送)
    pub fn sort_for_delivery(&self, mut locations: Vec<Location>) -> Vec<Location> {
        locations.sort_by(|a, b| self.compare_for_delivery(a, b));
        locations
    }

    // ==========================================
    // 比较函数
    // ==========================================

    fn compare_for_allocation(&self, a: &Location, b: &Location) -> Ordering {
        b.priority
            .cmp(&a.priority)
            .then(a.accessibility.cmp(&b.accessibility))
    }

    fn compare_for_delivery(&self, a: &Location, b: &Location) -> Ordering {
        b.priority
            .cmp(&a.priority)
            .then(a.distance.total_cmp(&b.distance))
    }
}
