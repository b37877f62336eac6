// ==========================================
// 退货分拣人力规划 - 引擎层
// ==========================================
// 职责: 纯数值计算管线,不读文件,不做渲染
// 红线: 引擎只消费已校验的快照,所有计算均为全函数
// ==========================================

pub mod gap_evaluator;
pub mod hourly_requirement;
pub mod orchestrator;
pub mod peak_detector;
pub mod profile_normalizer;
pub mod progress_tracker;
pub mod queue_simulator;
pub mod route_ranking;
pub mod stress_tester;

// 重导出核心引擎
pub use gap_evaluator::{GapEvaluation, GapEvaluator, StreamGap};
pub use hourly_requirement::HourlyRequirementCalculator;
pub use orchestrator::{DailySummary, PlanningOrchestrator, PlanningReport};
pub use peak_detector::PeakDetector;
pub use profile_normalizer::{NormalizedProfile, ProfileNormalizer};
pub use progress_tracker::{ProgressReport, ProgressRow, ProgressTracker};
pub use queue_simulator::QueueSimulator;
pub use route_ranking::{RankedRoute, RouteRanking};
pub use stress_tester::{StressEstimate, StressTester};
