// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的场景构造、临时线路文件生成等功能
// ==========================================

#![allow(dead_code)]

use returns_planner::domain::{PlannedHeadcount, PlanningConfig, PlanningState, RouteRecord};
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{Builder, NamedTempFile};

/// 构造基础场景: 默认曲线,指定日总量
pub fn scenario_with_total(total_parcels: f64) -> PlanningState {
    PlanningState {
        config: PlanningConfig {
            total_parcels,
            ..PlanningConfig::default()
        },
        ..PlanningState::default()
    }
}

/// 构造带计划人数的场景
pub fn scenario_with_plan(total_parcels: f64, plan: PlannedHeadcount) -> PlanningState {
    let mut state = scenario_with_total(total_parcels);
    state.config.plan = plan;
    state
}

/// 构造线路列表
pub fn routes(data: &[(&str, f64)]) -> Vec<RouteRecord> {
    data.iter()
        .map(|(id, parcels)| RouteRecord::new(*id, *parcels))
        .collect()
}

/// 测试数据文件路径（tests/fixtures 下）
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// 写入临时文件（指定扩展名）
///
/// # 返回
/// - NamedTempFile: 临时文件（需要保持存活）
pub fn write_temp_file(suffix: &str, content: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = Builder::new().suffix(suffix).tempfile()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// 写入临时 CSV 线路文件
pub fn write_routes_csv(content: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    write_temp_file(".csv", content)
}

/// 标准线路 CSV: 两行前导说明 + 表头 + 4 条记录（其中 1 条退件为 0）
pub fn standard_routes_csv() -> &'static str {
    "Daily returns export\n\
     Generated by depot system\n\
     Route,Driver,Parcels_Returned\n\
     R-01,Ann,500\n\
     R-02,Bo,300\n\
     R-03,Cy,0\n\
     R-04,Di,100\n"
}
