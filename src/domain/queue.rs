// ==========================================
// 退货分拣人力规划 - 排队积压模型
// ==========================================
// 职责: 积压状态 + 小时仿真行
// 模型: 每个作业流一个无界 FIFO,未处理量全额结转,不流失不重排
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// QueueState - 积压计数
// ==========================================
// 每次完整仿真开始时归零
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueState {
    pub bag_backlog: u64,     // 袋积压
    pub white_backlog: u64,   // 白件积压
}

impl QueueState {
    /// 本时段结转: max(0, backlog + arrivals - capacity)
    pub fn carry(backlog: u64, arrivals: u64, capacity: u64) -> u64 {
        backlog.saturating_add(arrivals).saturating_sub(capacity)
    }
}

// ==========================================
// QueueHourRow - 单时段仿真结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueHourRow {
    pub index: usize,
    pub hour: String,
    pub arrivals_bags: u64,     // 到达袋数
    pub stage_cap: u64,         // 上架产能（袋/时）
    pub seg_cap: u64,           // 分拣产能（袋/时）
    pub bag_cap: u64,           // 生效袋产能 = min(stage_cap, seg_cap)
    pub bag_backlog: u64,       // 时段末袋积压
    pub white_demand: u64,      // 白件需求
    pub intake_cap: u64,        // 收货产能（件/时）
    pub white_backlog: u64,     // 时段末白件积压
}

// ==========================================
// QueueSimulation - 全日仿真结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueSimulation {
    pub rows: Vec<QueueHourRow>,
    pub end_state: QueueState,   // 日终积压
}
