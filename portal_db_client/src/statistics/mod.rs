//! Aggregate queries behind the request statistics endpoint.

use anyhow::Context;
use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, Utc};
use model::statistics::{MonthlyCount, PriorityCount, RequestStatistics, StatusCounts};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

/// Optional narrowing of the statistics scope. Dates are inclusive calendar
/// days interpreted in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsScope {
    /// Only requests against this portal
    pub portal_id: Option<Uuid>,
    /// Only requests created on or after this day
    pub start_date: Option<NaiveDate>,
    /// Only requests created on or before this day
    pub end_date: Option<NaiveDate>,
}

const STATUS_COUNTS_BASE: &str = r#"
SELECT
    COUNT(*) AS total,
    COUNT(*) FILTER (WHERE pr.status = 'Pending') AS pending,
    COUNT(*) FILTER (WHERE pr.status = 'Approved') AS approved,
    COUNT(*) FILTER (WHERE pr.status = 'Rejected') AS rejected
FROM portal_requests pr
WHERE pr.deleted_at IS NULL"#;

const PRIORITY_DISTRIBUTION_BASE: &str = r#"
SELECT pr.priority, COUNT(*) AS count
FROM portal_requests pr
WHERE pr.deleted_at IS NULL"#;

const MONTHLY_TREND_BASE: &str = r#"
SELECT
    to_char(date_trunc('month', pr.created_at), 'YYYY-MM') AS month,
    COUNT(*) AS count
FROM portal_requests pr
WHERE pr.deleted_at IS NULL"#;

/// Run the three aggregate queries and assemble the statistics payload.
///
/// The portal filter narrows every part. The date filters narrow the counts
/// and the priority distribution; the monthly trend always covers the six
/// calendar months ending in the month of `today`.
#[tracing::instrument(skip(pool))]
pub async fn get_request_statistics(
    pool: &PgPool,
    scope: &StatisticsScope,
    today: NaiveDate,
) -> anyhow::Result<RequestStatistics> {
    let start_bound = scope
        .start_date
        .map(|day| day.and_time(NaiveTime::MIN).and_utc());
    let end_bound = match scope.end_date {
        Some(day) => Some(
            day.succ_opt()
                .context("statistics end date out of range")?
                .and_time(NaiveTime::MIN)
                .and_utc(),
        ),
        None => None,
    };
    let window_start = trend_window_start(today)
        .context("trend window start out of range")?
        .and_time(NaiveTime::MIN)
        .and_utc();

    let mut counts_builder = QueryBuilder::new(STATUS_COUNTS_BASE);
    push_portal_scope(&mut counts_builder, scope.portal_id);
    push_date_scope(&mut counts_builder, start_bound, end_bound);
    let counts: StatusCounts = counts_builder
        .build_query_as()
        .fetch_one(pool)
        .await
        .context("failed to count requests by status")?;

    let mut priority_builder = QueryBuilder::new(PRIORITY_DISTRIBUTION_BASE);
    push_portal_scope(&mut priority_builder, scope.portal_id);
    push_date_scope(&mut priority_builder, start_bound, end_bound);
    priority_builder.push(" GROUP BY pr.priority ORDER BY pr.priority");
    let priority_distribution: Vec<PriorityCount> = priority_builder
        .build_query_as()
        .fetch_all(pool)
        .await
        .context("failed to count requests by priority")?;

    let mut trend_builder = QueryBuilder::new(MONTHLY_TREND_BASE);
    push_portal_scope(&mut trend_builder, scope.portal_id);
    trend_builder
        .push(" AND pr.created_at >= ")
        .push_bind(window_start);
    trend_builder.push(" GROUP BY 1 ORDER BY 1");
    let monthly_trend: Vec<MonthlyCount> = trend_builder
        .build_query_as()
        .fetch_all(pool)
        .await
        .context("failed to count requests by month")?;

    Ok(RequestStatistics::from_parts(
        counts,
        priority_distribution,
        monthly_trend,
    ))
}

/// First day of the calendar month five months before the month of `today`,
/// so the window spans six months including the current one
pub fn trend_window_start(today: NaiveDate) -> Option<NaiveDate> {
    today.with_day(1)?.checked_sub_months(Months::new(5))
}

fn push_portal_scope(builder: &mut QueryBuilder<'_, Postgres>, portal_id: Option<Uuid>) {
    if let Some(portal_id) = portal_id {
        builder.push(" AND pr.portal_id = ").push_bind(portal_id);
    }
}

fn push_date_scope(
    builder: &mut QueryBuilder<'_, Postgres>,
    start_bound: Option<DateTime<Utc>>,
    end_bound: Option<DateTime<Utc>>,
) {
    if let Some(start) = start_bound {
        builder.push(" AND pr.created_at >= ").push_bind(start);
    }
    if let Some(end) = end_bound {
        builder.push(" AND pr.created_at < ").push_bind(end);
    }
}
