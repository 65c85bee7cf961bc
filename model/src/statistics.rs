//! Aggregate reporting types for the statistics endpoint.

use crate::request::RequestPriority;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status counts over a scope, fetched in one aggregate query
#[derive(Debug, Clone, Copy, Default, sqlx::FromRow)]
pub struct StatusCounts {
    /// All requests in scope
    pub total: i64,
    /// Requests still `Pending`
    pub pending: i64,
    /// Requests `Approved`
    pub approved: i64,
    /// Requests `Rejected`
    pub rejected: i64,
}

/// Request count for one priority value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct PriorityCount {
    /// The priority
    pub priority: RequestPriority,
    /// How many requests carry it
    pub count: i64,
}

/// Request count for one calendar month
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct MonthlyCount {
    /// Month label, `YYYY-MM`
    pub month: String,
    /// Requests created in that month
    pub count: i64,
}

/// The assembled statistics payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequestStatistics {
    /// All requests in scope
    pub total: i64,
    /// Requests still `Pending`
    pub pending: i64,
    /// Requests `Approved`
    pub approved: i64,
    /// Requests `Rejected`
    pub rejected: i64,
    /// `approved / total` as a ratio in `[0, 1]`; exactly `0` on an empty
    /// scope
    pub approval_rate: f64,
    /// Counts per priority value present in scope
    pub priority_distribution: Vec<PriorityCount>,
    /// Requests created per calendar month over the most recent six months,
    /// ascending; empty months are absent
    pub monthly_trend: Vec<MonthlyCount>,
}

impl RequestStatistics {
    /// Assemble the payload from its fetched parts, guarding the rate
    /// against an empty scope
    pub fn from_parts(
        counts: StatusCounts,
        priority_distribution: Vec<PriorityCount>,
        monthly_trend: Vec<MonthlyCount>,
    ) -> Self {
        let approval_rate = if counts.total > 0 {
            counts.approved as f64 / counts.total as f64
        } else {
            0.0
        };

        RequestStatistics {
            total: counts.total,
            pending: counts.pending,
            approved: counts.approved,
            rejected: counts.rejected,
            approval_rate,
            priority_distribution,
            monthly_trend,
        }
    }
}
