// ==========================================
// 应急物资调配规划系统 - 引擎层
// ==========================================
// 职责: 实现调配业务规则
// 红线: 引擎无状态, 阶段顺序由编排器可见地串联,
//       不依赖共享可变全局状态
// ==========================================

pub mod allocator;
pub mod clamp;
pub mod delivery;
pub mod eval;
pub mod local_search;
pub mod orchestrator;
pub mod priority;
pub mod redistribute;

// 重导出核心引擎
pub use allocator::GreedyAllocator;
pub use clamp::TransportClamp;
pub use delivery::DeliverySequencer;
pub use eval::ObjectiveEvaluator;
pub use local_search::{LocalSearchRefiner, RefineOutcome};
pub use orchestrator::DispatchOrchestrator;
pub use priority::PrioritySorter;
pub use redistribute::ExcessRedistributor;
