// ==========================================
// 场景配置加载测试
// ==========================================
// 测试目标: 验证 JSON 场景文件的加载与校验
// 工具: tempfile 临时文件
// ==========================================

use relief_allocation_aps::{ConfigError, ScenarioConfig};
use std::io::Write;

// ==========================================
// 测试辅助函数
// ==========================================

/// 合法的最小场景 JSON
fn minimal_scenario_json() -> &'static str {
    r#"{
        "locations": [
            {
                "name": "安置点一",
                "priority": 3,
                "need": {"food": 50, "water": 40},
                "distance": 10.0,
                "accessibility": 2
            },
            {
                "name": "安置点二",
                "priority": 2,
                "need": {"food": 40, "water": 30},
                "distance": 150.0,
                "accessibility": 3
            }
        ],
        "resources": {"food": 80, "water": 60},
        "transportation_limits": {"food": 50, "water": 50},
        "fleet": {
            "vehicle_count": 2,
            "capacity": {"food": 50, "water": 50},
            "average_speed": 50.0
        },
        "max_iterations": 200,
        "seed": 11
    }"#
}

fn write_temp_scenario(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("创建临时文件失败");
    file.write_all(content.as_bytes()).expect("写入临时文件失败");
    file
}

// ==========================================
// 加载路径测试
// ==========================================

#[test]
fn test_load_valid_scenario_from_file() {
    let file = write_temp_scenario(minimal_scenario_json());

    let config = ScenarioConfig::from_json_file(file.path()).expect("合法场景应加载成功");

    assert_eq!(config.locations.len(), 2);
    assert_eq!(config.max_iterations, 200);
    assert_eq!(config.seed, 11);
    assert_eq!(config.resources["food"], 80);
    // allocated 未出现在文件中, 默认空映射
    assert!(config.locations[0].allocated.is_empty());
}

#[test]
fn test_missing_file_reports_io_error() {
    let result = ScenarioConfig::from_json_file(std::path::Path::new("/不存在/场景.json"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_invalid_json_reports_parse_error() {
    let file = write_temp_scenario("{ 这不是JSON ");
    let result = ScenarioConfig::from_json_file(file.path());
    assert!(matches!(result, Err(ConfigError::Json(_))));
}

#[test]
fn test_mismatched_kinds_rejected_on_load() {
    // 限额缺少 water: 加载即失败, 不进入管线
    let json = minimal_scenario_json().replace(
        r#""transportation_limits": {"food": 50, "water": 50}"#,
        r#""transportation_limits": {"food": 50}"#,
    );
    let file = write_temp_scenario(&json);

    let result = ScenarioConfig::from_json_file(file.path());
    assert!(matches!(
        result,
        Err(ConfigError::PoolKindMissingFromLimits { ref kind }) if kind == "water"
    ));
}

#[test]
fn test_loaded_scenario_round_trips_through_json() {
    let file = write_temp_scenario(minimal_scenario_json());
    let config = ScenarioConfig::from_json_file(file.path()).unwrap();

    let text = serde_json::to_string(&config).unwrap();
    let reparsed = ScenarioConfig::from_json_str(&text).unwrap();
    assert_eq!(config, reparsed);
}
