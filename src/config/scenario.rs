// ==========================================
// 应急物资调配规划系统 - 场景配置
// ==========================================
// 职责: 场景输入结构 (地点/资源池/运输限额/车队)
//       + 启动前一致性校验
// 存储: JSON 文件 (展示层传入路径)
// ==========================================

use crate::config::error::ConfigError;
use crate::domain::{FleetInfo, Location};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// 默认局部搜索迭代次数
fn default_max_iterations() -> u32 {
    crate::DEFAULT_MAX_ITERATIONS
}

// ==========================================
// ScenarioConfig - 调配场景配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// 需求地点列表
    pub locations: Vec<Location>,

    /// 共享资源池初始库存 (物资种类 -> 数量)
    pub resources: BTreeMap<String, u32>,

    /// 运输限额 (单地点单种类可运送上限)
    pub transportation_limits: BTreeMap<String, u32>,

    /// 车队信息
    pub fleet: FleetInfo,

    /// 局部搜索迭代次数 (默认 1000)
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// 随机种子 (显式播种, 保证方案可复现)
    #[serde(default)]
    pub seed: u64,
}

impl ScenarioConfig {
    /// 从 JSON 文件加载场景配置
    ///
    /// # 参数
    /// - `path`: 场景文件路径
    ///
    /// # 返回
    /// 加载并通过校验的场景配置
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// 从 JSON 字符串加载场景配置 (加载后立即校验)
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: ScenarioConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验场景一致性
    ///
    /// 校验规则:
    /// 1) 至少一个地点, 名称唯一
    /// 2) 优先级/可达性为正整数, 距离非负有限, 平均速度为正有限
    /// 3) 物资种类三方一致: 需求/资源池/运输限额互相覆盖
    ///    (任一方向的缺失都是配置错误, 不做静默跳过)
    ///
    /// # 返回
    /// - `Ok(())`: 场景合法
    /// - `Err(ConfigError)`: 首个发现的配置错误
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locations.is_empty() {
            return Err(ConfigError::NoLocations);
        }

        // 地点字段与名称唯一性
        let mut seen_names: BTreeSet<&str> = BTreeSet::new();
        for loc in &self.locations {
            if !seen_names.insert(loc.name.as_str()) {
                return Err(ConfigError::DuplicateLocation {
                    name: loc.name.clone(),
                });
            }
            if loc.priority == 0 {
                return Err(ConfigError::InvalidPriority {
                    name: loc.name.clone(),
                });
            }
            if loc.accessibility == 0 {
                return Err(ConfigError::InvalidAccessibility {
                    name: loc.name.clone(),
                });
            }
            if !loc.distance.is_finite() || loc.distance < 0.0 {
                return Err(ConfigError::InvalidDistance {
                    name: loc.name.clone(),
                });
            }
        }

        if !self.fleet.average_speed.is_finite() || self.fleet.average_speed <= 0.0 {
            return Err(ConfigError::InvalidAverageSpeed {
                speed: self.fleet.average_speed,
            });
        }

        // 物资种类一致性: 需求 <-> 资源池
        for loc in &self.locations {
            for kind in loc.need.keys() {
                if !self.resources.contains_key(kind) {
                    return Err(ConfigError::NeedKindMissingFromPool {
                        name: loc.name.clone(),
                        kind: kind.clone(),
                    });
                }
            }
            for kind in self.resources.keys() {
                if !loc.need.contains_key(kind) {
                    return Err(ConfigError::PoolKindMissingFromNeed {
                        name: loc.name.clone(),
                        kind: kind.clone(),
                    });
                }
            }
        }

        // 物资种类一致性: 资源池 <-> 运输限额
        for kind in self.resources.keys() {
            if !self.transportation_limits.contains_key(kind) {
                return Err(ConfigError::PoolKindMissingFromLimits { kind: kind.clone() });
            }
        }
        for kind in self.transportation_limits.keys() {
            if !self.resources.contains_key(kind) {
                return Err(ConfigError::LimitKindMissingFromPool { kind: kind.clone() });
            }
        }

        Ok(())
    }

    /// 内置示例场景 (三地点抗灾调配)
    ///
    /// 展示层无输入文件时使用, 集成测试亦以此为基准场景
    pub fn sample() -> Self {
        fn kinds(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
            entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
        }

        ScenarioConfig {
            locations: vec![
                Location {
                    name: "Location A".to_string(),
                    priority: 3,
                    need: kinds(&[("food", 50), ("water", 40), ("medical", 20)]),
                    distance: 10.0,
                    accessibility: 2,
                    allocated: BTreeMap::new(),
                },
                Location {
                    name: "Location B".to_string(),
                    priority: 2,
                    need: kinds(&[("food", 40), ("water", 30), ("medical", 10)]),
                    distance: 150.0,
                    accessibility: 3,
                    allocated: BTreeMap::new(),
                },
                Location {
                    name: "Location C".to_string(),
                    priority: 3,
                    need: kinds(&[("food", 30), ("water", 20), ("medical", 5)]),
                    distance: 200.0,
                    accessibility: 4,
                    allocated: BTreeMap::new(),
                },
            ],
            resources: kinds(&[("food", 100), ("water", 90), ("medical", 50)]),
            transportation_limits: kinds(&[("food", 50), ("water", 50), ("medical", 20)]),
            fleet: FleetInfo {
                vehicle_count: 3,
                capacity: kinds(&[("food", 50), ("water", 50), ("medical", 20)]),
                average_speed: 50.0,
            },
            max_iterations: crate::DEFAULT_MAX_ITERATIONS,
            seed: 0,
        }
    }
}
