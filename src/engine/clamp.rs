// ==========================================
// 应急物资调配规划系统 - 运输限额裁剪引擎
// ==========================================
// 职责: 搜索结束后, 把超出单地点运输上限的分配
//       压回上限, 并统计释放量供资源池回补
// 红线: 只减不增; 对已裁剪解重复执行为空操作
// ==========================================

use crate::domain::{Location, TransportLimits};
use std::collections::BTreeMap;
use tracing::debug;

// ==========================================
// TransportClamp - 运输限额裁剪引擎
// ==========================================
pub struct TransportClamp {
    // 无状态引擎, 不需要注入依赖
}

impl TransportClamp {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行运输限额裁剪
    ///
    /// # 参数
    /// - `locations`: 地点列表 (会被修改)
    /// - `limits`: 运输限额
    ///
    /// # 返回
    /// 各种类被裁剪释放的总量 (由编排器回补资源池)
    pub fn apply(
        &self,
        locations: &mut [Location],
        limits: &TransportLimits,
    ) -> BTreeMap<String, u32> {
        let mut freed: BTreeMap<String, u32> = BTreeMap::new();

        for loc in locations.iter_mut() {
            for (kind, allocated) in loc.allocated.iter_mut() {
                if let Some(limit) = limits.limit_of(kind) {
                    if *allocated > limit {
                        let cut = *allocated - limit;
                        debug!(
                            location = %loc.name,
                            kind = %kind,
                            allocated = *allocated,
                            limit,
                            cut,
                            "分配超出运输限额, 裁剪至上限"
                        );
                        *allocated = limit;
                        *freed.entry(kind.clone()).or_insert(0) += cut;
                    }
                }
            }
        }

        freed
    }
}
