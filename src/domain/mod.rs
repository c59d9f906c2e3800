// ==========================================
// 应急物资调配规划系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含配置加载逻辑,不含引擎逻辑
// ==========================================

pub mod fleet;
pub mod location;
pub mod plan;
pub mod resource;

// 重导出核心类型
pub use fleet::FleetInfo;
pub use location::Location;
pub use plan::{AllocationPlan, AllocationRecord, DeliveryStop};
pub use resource::{ResourcePool, TransportLimits};
