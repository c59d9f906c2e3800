// ==========================================
// 应急物资调配规划系统 - 资源池领域模型
// ==========================================
// 红线: 资源池余量不得为负
// 写入方: 仅初始贪心分配与剩余再分配两处扣减,
//         仅运输限额裁剪回补一处增加
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// ResourcePool - 共享资源池
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePool {
    pub remaining: BTreeMap<String, u32>, // 剩余量 (物资种类 -> 数量)
}

impl ResourcePool {
    /// 从初始库存构造资源池
    pub fn new(remaining: BTreeMap<String, u32>) -> Self {
        Self { remaining }
    }

    /// 获取指定物资种类的剩余量 (未登记视为 0)
    pub fn remaining_of(&self, kind: &str) -> u32 {
        self.remaining.get(kind).copied().unwrap_or(0)
    }

    /// 资源池登记的全部物资种类 (快照, 字典序)
    pub fn kinds(&self) -> Vec<String> {
        self.remaining.keys().cloned().collect()
    }

    /// 从池中扣减物资
    ///
    /// # 参数
    /// - `kind`: 物资种类
    /// - `want`: 期望数量
    ///
    /// # 返回
    /// 实际扣减数量 = min(期望数量, 剩余量), 池余量绝不为负
    pub fn take(&mut self, kind: &str, want: u32) -> u32 {
        let granted = want.min(self.remaining_of(kind));
        if granted > 0 {
            if let Some(remaining) = self.remaining.get_mut(kind) {
                *remaining -= granted;
            }
        }
        granted
    }

    /// 向池中回补物资 (运输限额裁剪释放的数量)
    pub fn credit(&mut self, kind: &str, qty: u32) {
        if qty > 0 {
            *self.remaining.entry(kind.to_string()).or_insert(0) += qty;
        }
    }

    /// 池内剩余物资总量
    pub fn total_remaining(&self) -> u32 {
        self.remaining.values().sum()
    }
}

// ==========================================
// TransportLimits - 运输限额
// ==========================================
// 用途: 单地点单种类可运送上限 (非全局总量上限)
// 说明: 输入后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportLimits {
    pub limits: BTreeMap<String, u32>, // 限额 (物资种类 -> 数量)
}

impl TransportLimits {
    pub fn new(limits: BTreeMap<String, u32>) -> Self {
        Self { limits }
    }

    /// 获取指定物资种类的单地点运输上限
    pub fn limit_of(&self, kind: &str) -> Option<u32> {
        self.limits.get(kind).copied()
    }
}
