// ==========================================
// 应急物资调配规划系统 - 剩余物资再分配引擎
// ==========================================
// 职责: 裁剪与初分后, 把资源池剩余量单遍扫描
//       补给未满足需求
// 红线:
//   1) 单遍扫描, 非不动点循环: 序列靠前的地点
//      对剩余量有优先权, 后续释放不回头再补,
//      允许滞留 (策略影响输出确定性, 不得"修复")
//   2) 补给同时受未满足需求 / 池余量 / 运输限额
//      三者约束, 不得破坏裁剪后的单地点上限
// ==========================================

use crate::domain::{Location, ResourcePool, TransportLimits};
use tracing::debug;

// ==========================================
// ExcessRedistributor - 剩余物资再分配引擎
// ==========================================
pub struct ExcessRedistributor {
    // 无状态引擎, 不需要注入依赖
}

impl ExcessRedistributor {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行单遍再分配
    ///
    /// # 参数
    /// - `locations`: 地点列表 (按当前序列顺序扫描, 会被修改)
    /// - `pool`: 资源池剩余量 (含裁剪回补, 会被扣减)
    /// - `limits`: 运输限额
    pub fn redistribute(
        &self,
        locations: &mut [Location],
        pool: &mut ResourcePool,
        limits: &TransportLimits,
    ) {
        let kinds = pool.kinds();

        for loc in locations.iter_mut() {
            for kind in &kinds {
                let outstanding = loc.outstanding_need(kind);
                if outstanding == 0 {
                    continue;
                }

                // 运输限额剩余空间 (无限额登记的种类不受限)
                let cap_room = limits
                    .limit_of(kind)
                    .map(|limit| limit.saturating_sub(loc.allocated_qty(kind)))
                    .unwrap_or(u32::MAX);

                let granted = pool.take(kind, outstanding.min(cap_room));
                if granted > 0 {
                    *loc.allocated.entry(kind.clone()).or_insert(0) += granted;
                    debug!(
                        location = %loc.name,
                        kind = %kind,
                        granted,
                        "剩余物资补给"
                    );
                }
            }
        }

        debug!(stranded = pool.total_remaining(), "再分配结束, 池内滞留量");
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn kinds(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn location(name: &str, need: &[(&str, u32)], allocated: &[(&str, u32)]) -> Location {
        Location {
            name: name.to_string(),
            priority: 1,
            need: kinds(need),
            distance: 0.0,
            accessibility: 1,
            allocated: kinds(allocated),
        }
    }

    #[test]
    fn test_earlier_location_wins_leftovers() {
        let redistributor = ExcessRedistributor::new();
        let mut pool = ResourcePool::new(kinds(&[("food", 10)]));
        let limits = TransportLimits::new(kinds(&[("food", 100)]));
        let mut locations = vec![
            location("前", &[("food", 20)], &[("food", 12)]),
            location("后", &[("food", 20)], &[("food", 12)]),
        ];

        redistributor.redistribute(&mut locations, &mut pool, &limits);

        // 前者先拿 8, 后者只剩 2
        assert_eq!(locations[0].allocated_qty("food"), 20);
        assert_eq!(locations[1].allocated_qty("food"), 14);
        assert_eq!(pool.remaining_of("food"), 0);
    }

    #[test]
    fn test_grant_bounded_by_transport_limit() {
        let redistributor = ExcessRedistributor::new();
        let mut pool = ResourcePool::new(kinds(&[("food", 40)]));
        let limits = TransportLimits::new(kinds(&[("food", 50)]));
        // 需求 80, 已在上限 50: 补给空间为 0
        let mut locations = vec![location("甲", &[("food", 80)], &[("food", 50)])];

        redistributor.redistribute(&mut locations, &mut pool, &limits);

        assert_eq!(locations[0].allocated_qty("food"), 50);
        assert_eq!(pool.remaining_of("food"), 40);
    }

    #[test]
    fn test_single_pass_not_fixpoint() {
        let redistributor = ExcessRedistributor::new();
        let mut pool = ResourcePool::new(kinds(&[("food", 5)]));
        // 前者受限额约束只能吃 3, 剩 2 给后者;
        // 后者吃完后即便前者仍有缺口也不回头
        let limits = TransportLimits::new(kinds(&[("food", 10)]));
        let mut locations = vec![
            location("前", &[("food", 20)], &[("food", 7)]),
            location("后", &[("food", 2)], &[("food", 0)]),
        ];

        redistributor.redistribute(&mut locations, &mut pool, &limits);

        assert_eq!(locations[0].allocated_qty("food"), 10);
        assert_eq!(locations[1].allocated_qty("food"), 2);
        assert_eq!(pool.remaining_of("food"), 0);
    }

    #[test]
    fn test_never_exceeds_need() {
        let redistributor = ExcessRedistributor::new();
        let mut pool = ResourcePool::new(kinds(&[("water", 100)]));
        let limits = TransportLimits::new(kinds(&[("water", 100)]));
        let mut locations = vec![location("甲", &[("water", 9)], &[("water", 4)])];

        redistributor.redistribute(&mut locations, &mut pool, &limits);

        assert_eq!(locations[0].allocated_qty("water"), 9);
        assert_eq!(pool.remaining_of("water"), 95);
    }
}
