// ==========================================
// 退货分拣人力规划 - 领域类型定义
// ==========================================
// 职责: 作业流 / 校验状态 / 曲线校验状态
// 序列化格式: SCREAMING_SNAKE_CASE
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 作业流 (Work Stream)
// ==========================================
// 三段处理: 上架(staging) → 分拣(segregation) → 白件收货(intake)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stream {
    Stage,  // 上架
    Seg,    // 分拣
    Intake, // 白件收货
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Stage => write!(f, "STAGE"),
            Stream::Seg => write!(f, "SEG"),
            Stream::Intake => write!(f, "INTAKE"),
        }
    }
}

// ==========================================
// 校验状态 (Check Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl CheckStatus {
    /// planned >= required 即通过
    pub fn from_comparison(planned: u64, required: u64) -> Self {
        if planned >= required {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Fail => write!(f, "FAIL"),
        }
    }
}

// ==========================================
// 到货曲线校验状态 (Profile Status)
// ==========================================
// 仅提示,不阻断计算
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileStatus {
    Ok,
    Fix { sum_pct: f64 },
}

impl ProfileStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, ProfileStatus::Ok)
    }
}

impl fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileStatus::Ok => write!(f, "OK (100%)"),
            ProfileStatus::Fix { sum_pct } => {
                write!(f, "FIX: sum is {:.1}% (must be 100%)", sum_pct)
            }
        }
    }
}
