// ==========================================
// 应急物资调配规划系统 - 贪心初始分配引擎
// ==========================================
// 职责: 按分配排序顺序, 逐地点逐种类从资源池
//       扣减 min(需求量, 池余量)
// 红线: 分配不超需求, 扣减不超池余量
// 说明: 种类遍历顺序取资源池迭代顺序 (字典序);
//       某种类在中途耗尽时哪个地点"抢到"尾量
//       依赖该顺序, 属既定不关心项
// ==========================================

use crate::domain::{Location, ResourcePool};
use tracing::debug;

// ==========================================
// GreedyAllocator - 贪心初始分配引擎
// ==========================================
pub struct GreedyAllocator {
    // 无状态引擎, 不需要注入依赖
}

impl GreedyAllocator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行初始贪心分配
    ///
    /// 每个地点对资源池的每个种类写入一条分配记录
    /// (包括分到 0 的种类), 供局部搜索采样使用
    ///
    /// # 参数
    /// - `locations`: 地点列表 (须已按分配顺序排序, 会被修改)
    /// - `pool`: 共享资源池 (会被扣减)
    pub fn allocate(&self, locations: &mut [Location], pool: &mut ResourcePool) {
        let kinds = pool.kinds();

        for loc in locations.iter_mut() {
            for kind in &kinds {
                let want = loc.need_qty(kind);
                let granted = pool.take(kind, want);
                loc.allocated.insert(kind.clone(), granted);
            }
            debug!(
                location = %loc.name,
                allocated = ?loc.allocated,
                "初始分配完成"
            );
        }

        debug!(pool_remaining = ?pool.remaining, "初始分配后资源池余量");
    }
}
