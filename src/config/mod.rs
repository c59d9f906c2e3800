// ==========================================
// 应急物资调配规划系统 - 配置层
// ==========================================
// 职责: 场景输入的加载与校验
// 红线: 配置不合法必须在管线启动前报错,
//       绝不输出部分/错误方案
// ==========================================

pub mod error;
pub mod scenario;

// 重导出核心配置类型
pub use error::ConfigError;
pub use scenario::ScenarioConfig;
