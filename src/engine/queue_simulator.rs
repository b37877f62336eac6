// ==========================================
// 退货分拣人力规划 - 排队积压仿真
// ==========================================
// 职责: 按时段顺序推进,计划人数固定,累计未满足的袋/白件需求
// 规则:
//   rate      = 3600 / sec（sec = 0 时为 0）
//   cap       = floor(plan × rate × u_i)
//   bag_cap   = min(stage_cap, seg_cap)   两段串行,取窄口
//   backlog  ← max(0, backlog + arrivals - cap)
// 红线: 每次仿真从零积压开始
// ==========================================

use crate::domain::planning::{HourlyPlan, PlanningConfig};
use crate::domain::queue::{QueueHourRow, QueueSimulation, QueueState};
use crate::engine::hourly_requirement::SECONDS_PER_HOUR;
use tracing::{debug, instrument};

/// 单人每小时处理量
pub fn stream_rate(service_sec: f64) -> f64 {
    if service_sec > 0.0 {
        SECONDS_PER_HOUR / service_sec
    } else {
        0.0
    }
}

/// 时段产能 = floor(人数 × 速率 × 利用率)
pub fn hourly_capacity(heads: u64, rate: f64, utilization: f64) -> u64 {
    let cap = (heads as f64 * rate * utilization).floor();
    if cap.is_finite() && cap > 0.0 {
        cap as u64
    } else {
        0
    }
}

pub struct QueueSimulator {
    // 无状态引擎
}

impl QueueSimulator {
    pub fn new() -> Self {
        Self {}
    }

    #[instrument(skip_all, fields(hours = hourly.len()))]
    pub fn simulate(&self, config: &PlanningConfig, hourly: &[HourlyPlan]) -> QueueSimulation {
        let stage_rate = stream_rate(config.stage_sec);
        let seg_rate = stream_rate(config.seg_sec);
        let intake_rate = stream_rate(config.intake_sec);
        let ppb = config.parcels_per_bag.max(1.0);
        let w_share = config.white_share();
        let plan = &config.plan;

        let mut state = QueueState::default();
        let mut rows = Vec::with_capacity(hourly.len());

        for hour in hourly {
            let stage_cap = hourly_capacity(plan.stage, stage_rate, hour.utilization);
            let seg_cap = hourly_capacity(plan.seg, seg_rate, hour.utilization);
            let bag_cap = stage_cap.min(seg_cap);
            state.bag_backlog = QueueState::carry(state.bag_backlog, hour.bags, bag_cap);

            let white_demand = (hour.bags as f64 * ppb * w_share).round().max(0.0) as u64;
            let intake_cap = hourly_capacity(plan.intake, intake_rate, hour.utilization);
            state.white_backlog = QueueState::carry(state.white_backlog, white_demand, intake_cap);

            rows.push(QueueHourRow {
                index: hour.index,
                hour: hour.hour.clone(),
                arrivals_bags: hour.bags,
                stage_cap,
                seg_cap,
                bag_cap,
                bag_backlog: state.bag_backlog,
                white_demand,
                intake_cap,
                white_backlog: state.white_backlog,
            });
        }

        debug!(
            bag_backlog = state.bag_backlog,
            white_backlog = state.white_backlog,
            "积压仿真完成"
        );

        QueueSimulation {
            rows,
            end_state: state,
        }
    }
}

impl Default for QueueSimulator {
    fn default() -> Self {
        Self::new()
    }
}
