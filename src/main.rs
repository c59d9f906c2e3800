// ==========================================
// 应急物资调配规划系统 - 命令行主入口
// ==========================================
// 定位: 展示层 (核心管线之外)
// 职责: 加载场景 -> 运行管线 -> 渲染文本方案
// ==========================================

use anyhow::Context;
use relief_allocation_aps::{DispatchOrchestrator, ScenarioConfig};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    relief_allocation_aps::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", relief_allocation_aps::APP_NAME);
    tracing::info!("系统版本: {}", relief_allocation_aps::VERSION);
    tracing::info!("==================================================");

    // 加载场景: 命令行传入 JSON 路径, 否则使用内置示例
    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("加载场景文件: {}", path);
            ScenarioConfig::from_json_file(Path::new(&path))
                .with_context(|| format!("场景文件加载失败: {}", path))?
        }
        None => {
            tracing::info!("未指定场景文件, 使用内置示例场景");
            ScenarioConfig::sample()
        }
    };

    // 运行调配管线
    let orchestrator = DispatchOrchestrator::new();
    let plan = orchestrator
        .generate_plan(&config)
        .context("调配方案生成失败")?;

    // 渲染分配结果
    for record in &plan.allocations {
        let status = if record.fulfilled {
            "完全满足"
        } else {
            "未完全满足"
        };
        let allocated = serde_json::to_string(&record.allocated)?;
        println!("{}: {}, 状态: {}", record.location, allocated, status);
    }

    // 渲染配送顺序
    println!();
    println!("配送顺序:");
    for stop in &plan.delivery_sequence {
        println!(
            "地点: {}, 预计送达时间: {:.1} 小时",
            stop.location, stop.estimated_delivery_time
        );
    }

    Ok(())
}
