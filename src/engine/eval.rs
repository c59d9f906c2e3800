// ==========================================
// 应急物资调配规划系统 - 目标函数评估引擎
// ==========================================
// 职责: 对候选分配打分
//   score = Σ (allocated[k] / need[k]) * priority
// 红线: need[k] == 0 的项贡献 0, 绝不除零
// ==========================================

use crate::domain::Location;

// ==========================================
// ObjectiveEvaluator - 目标函数评估引擎
// ==========================================
pub struct ObjectiveEvaluator {
    // 无状态引擎, 不需要注入依赖
}

impl ObjectiveEvaluator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 评估候选分配的总分 (越高越好)
    ///
    /// # 参数
    /// - `locations`: 候选分配 (含各地点 allocated 映射)
    ///
    /// # 返回
    /// 优先级加权满足度总和
    pub fn evaluate(&self, locations: &[Location]) -> f64 {
        locations
            .iter()
            .map(|loc| {
                loc.allocated
                    .iter()
                    .map(|(kind, &allocated)| Self::term(loc.priority, loc.need_qty(kind), allocated))
                    .sum::<f64>()
            })
            .sum()
    }

    /// 计算一次转移带来的分数变化
    ///
    /// 把 `amount` 个 `kind` 从 `from` 转给 `to` 后,
    /// 总分中只有这两项发生变化, 其余项不动,
    /// 因此增量与整体重评完全等价
    ///
    /// # 返回
    /// 转移后总分减转移前总分
    pub fn transfer_delta(&self, from: &Location, to: &Location, kind: &str, amount: u32) -> f64 {
        if amount == 0 {
            return 0.0;
        }

        let from_need = from.need_qty(kind);
        let from_alloc = from.allocated_qty(kind);
        let to_need = to.need_qty(kind);
        let to_alloc = to.allocated_qty(kind);

        Self::term(from.priority, from_need, from_alloc.saturating_sub(amount))
            - Self::term(from.priority, from_need, from_alloc)
            + Self::term(to.priority, to_need, to_alloc + amount)
            - Self::term(to.priority, to_need, to_alloc)
    }

    /// 单个 (地点, 种类) 项的贡献
    fn term(priority: u32, need: u32, allocated: u32) -> f64 {
        if need == 0 {
            return 0.0;
        }
        (allocated as f64 / need as f64) * priority as f64
    }
}
