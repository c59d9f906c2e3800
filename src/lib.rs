// ==========================================
// 应急物资调配规划系统 - 核心库
// ==========================================
// 技术栈: Rust (纯同步单线程管线)
// 系统定位: 决策支持系统 (分配方案供人工最终确认)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 场景输入与校验
pub mod config;

// 引擎层 - 分配业务规则
pub mod engine;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    AllocationPlan, AllocationRecord, DeliveryStop, FleetInfo, Location, ResourcePool,
    TransportLimits,
};

// 配置
pub use config::{ConfigError, ScenarioConfig};

// 引擎
pub use engine::{
    DeliverySequencer, DispatchOrchestrator, ExcessRedistributor, GreedyAllocator,
    LocalSearchRefiner, ObjectiveEvaluator, PrioritySorter, RefineOutcome, TransportClamp,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "应急物资调配规划系统";

// 默认局部搜索迭代次数
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

// ==========================================
// 预编译检查
// ==========================================
