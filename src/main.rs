// ==========================================
// 退货分拣人力规划 - 命令行入口
// ==========================================
// 用法: returns-planner [场景配置.json] [线路文件.csv|.xlsx]
// 未指定配置时按默认路径加载（不存在则使用默认参数）
// 报告以 JSON 输出到 stdout
// ==========================================

use anyhow::Context;
use returns_planner::{logging, PlannerApi};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", returns_planner::APP_NAME, returns_planner::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let routes_path = args.next().map(PathBuf::from);

    // 加载场景配置
    let api = PlannerApi::load(config_path.as_deref()).context("无法加载场景配置")?;

    // 导入线路文件（失败时继续使用手工总量）
    let report = match &routes_path {
        Some(path) => match api.import_routes(path).await {
            Ok(outcome) => {
                tracing::info!(
                    route_count = outcome.batch.route_count,
                    total_parcels = outcome.batch.total_parcels,
                    "线路导入成功"
                );
                outcome.report
            }
            Err(e) => {
                tracing::error!("线路导入失败: {}", e);
                api.compute()?
            }
        },
        None => api.compute()?,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
