// ==========================================
// 应急物资调配规划系统 - 引擎编排器
// ==========================================
// 用途: 协调调配管线各引擎的执行顺序
// 管线: 校验 -> 分配排序 -> 贪心初分 -> 局部搜索
//       -> 限额裁剪 -> 池回补 -> 剩余再分配
//       -> 配送排程 -> 方案快照
// 红线: 阶段严格串行, 数据依赖显式经由签名传递
// ==========================================

use crate::config::{ConfigError, ScenarioConfig};
use crate::domain::{AllocationPlan, AllocationRecord, ResourcePool, TransportLimits};
use crate::engine::{
    DeliverySequencer, ExcessRedistributor, GreedyAllocator, LocalSearchRefiner, PrioritySorter,
    TransportClamp,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

// ==========================================
// DispatchOrchestrator - 引擎编排器
// ==========================================
pub struct DispatchOrchestrator {
    sorter: PrioritySorter,
    allocator: GreedyAllocator,
    clamp: TransportClamp,
    redistributor: ExcessRedistributor,
    sequencer: DeliverySequencer,
}

impl DispatchOrchestrator {
    /// 创建新的编排器实例
    pub fn new() -> Self {
        Self {
            sorter: PrioritySorter::new(),
            allocator: GreedyAllocator::new(),
            clamp: TransportClamp::new(),
            redistributor: ExcessRedistributor::new(),
            sequencer: DeliverySequencer::new(),
        }
    }

    /// 执行完整调配管线 (使用场景内显式种子)
    ///
    /// # 参数
    /// - `config`: 场景配置 (先校验后执行)
    ///
    /// # 返回
    /// 调配方案; 配置不合法时整体失败, 不产出部分方案
    pub fn generate_plan(&self, config: &ScenarioConfig) -> Result<AllocationPlan, ConfigError> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        self.generate_plan_with_rng(config, &mut rng)
    }

    /// 执行完整调配管线 (注入随机源, 供测试固定采样序列)
    pub fn generate_plan_with_rng<R: Rng>(
        &self,
        config: &ScenarioConfig,
        rng: &mut R,
    ) -> Result<AllocationPlan, ConfigError> {
        config.validate()?;

        info!(
            locations = config.locations.len(),
            kinds = config.resources.len(),
            max_iterations = config.max_iterations,
            seed = config.seed,
            "开始执行调配管线"
        );

        let mut pool = ResourcePool::new(config.resources.clone());
        let limits = TransportLimits::new(config.transportation_limits.clone());

        // ==========================================
        // 步骤1: 分配排序 (优先级降序, 同级难达者先)
        // ==========================================
        debug!("步骤1: 分配排序");
        let mut locations = self.sorter.sort_for_allocation(config.locations.clone());

        // ==========================================
        // 步骤2: 贪心初始分配 (逐地点逐种类扣池)
        // ==========================================
        debug!("步骤2: 贪心初始分配");
        self.allocator.allocate(&mut locations, &mut pool);

        // ==========================================
        // 步骤3: 局部搜索优化 (固定迭代预算)
        // ==========================================
        debug!("步骤3: 局部搜索优化");
        let refiner = LocalSearchRefiner::new(config.max_iterations);
        let outcome = refiner.refine(&mut locations, rng);
        info!(
            accepted_moves = outcome.accepted_moves,
            initial_score = outcome.initial_score,
            final_score = outcome.final_score,
            "局部搜索优化完成"
        );

        // ==========================================
        // 步骤4: 运输限额裁剪 + 释放量回补资源池
        // ==========================================
        debug!("步骤4: 运输限额裁剪");
        let freed = self.clamp.apply(&mut locations, &limits);
        for (kind, qty) in &freed {
            pool.credit(kind, *qty);
        }
        if !freed.is_empty() {
            info!(freed = ?freed, "裁剪释放量已回补资源池");
        }

        // ==========================================
        // 步骤5: 剩余物资单遍再分配
        // ==========================================
        debug!("步骤5: 剩余物资再分配");
        self.redistributor
            .redistribute(&mut locations, &mut pool, &limits);

        // ==========================================
        // 步骤6: 配送排程
        // ==========================================
        debug!("步骤6: 配送排程");
        let delivery_sequence = self.sequencer.sequence(&locations, &config.fleet);

        // ==========================================
        // 步骤7: 汇总方案快照
        // ==========================================
        let allocations: Vec<AllocationRecord> = locations
            .iter()
            .map(|loc| AllocationRecord {
                location: loc.name.clone(),
                allocated: loc.allocated.clone(),
                fulfilled: loc.is_fulfilled(),
            })
            .collect();

        info!(
            fulfilled = allocations.iter().filter(|r| r.fulfilled).count(),
            total = allocations.len(),
            stranded = pool.total_remaining(),
            "调配管线执行完成"
        );

        Ok(AllocationPlan {
            allocations,
            delivery_sequence,
        })
    }
}

