//! Filtered, sorted, paginated request listing with free-text search.

use model::pagination::{PageParams, Paginated, SortDirection};
use model::request::{PortalRequestDetails, RequestPriority, RequestSortField, RequestStatus};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

/// Active filters for a request listing. Everything is AND'ed together;
/// the search term alone fans out with OR semantics.
#[derive(Debug, Clone, Default)]
pub struct RequestFilters {
    /// Free-text term matched against comments, reason, the public UUID,
    /// submitter name, submitter email, and portal name
    pub search: Option<String>,
    /// Only requests against this portal
    pub portal_id: Option<Uuid>,
    /// Only requests in this status
    pub status: Option<RequestStatus>,
    /// Only requests with this priority
    pub priority: Option<RequestPriority>,
    /// Only requests from this submitter
    pub submitted_by: Option<Uuid>,
}

const SELECT_BASE: &str = r#"
SELECT
    pr.*,
    u.name AS submitter_name,
    u.email AS submitter_email,
    p.name AS portal_name
FROM portal_requests pr
JOIN users u ON u.id = pr.submitted_by
JOIN portals p ON p.id = pr.portal_id
WHERE pr.deleted_at IS NULL"#;

const COUNT_BASE: &str = r#"
SELECT COUNT(*)
FROM portal_requests pr
JOIN users u ON u.id = pr.submitted_by
JOIN portals p ON p.id = pr.portal_id
WHERE pr.deleted_at IS NULL"#;

/// Fetch one page of requests plus the total match count
#[tracing::instrument(skip(pool))]
pub async fn list_requests(
    pool: &PgPool,
    filters: &RequestFilters,
    sort_field: RequestSortField,
    sort_direction: SortDirection,
    params: PageParams,
) -> Result<Paginated<PortalRequestDetails>, sqlx::Error> {
    let mut count_builder = QueryBuilder::new(COUNT_BASE);
    push_filters(&mut count_builder, filters);
    let total: i64 = count_builder.build_query_scalar().fetch_one(pool).await?;

    let mut builder = QueryBuilder::new(SELECT_BASE);
    push_filters(&mut builder, filters);
    push_order_and_page(&mut builder, sort_field, sort_direction, params);

    let rows = builder
        .build_query_as::<PortalRequestDetails>()
        .fetch_all(pool)
        .await?;

    Ok(Paginated::new(rows, params, total.max(0) as u64))
}

/// Append the WHERE conditions for the active filters
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filters: &RequestFilters) {
    if let Some(portal_id) = filters.portal_id {
        builder.push(" AND pr.portal_id = ").push_bind(portal_id);
    }

    if let Some(status) = filters.status {
        builder.push(" AND pr.status = ").push_bind(status);
    }

    if let Some(priority) = filters.priority {
        builder.push(" AND pr.priority = ").push_bind(priority);
    }

    if let Some(submitted_by) = filters.submitted_by {
        builder.push(" AND pr.submitted_by = ").push_bind(submitted_by);
    }

    if let Some(search) = filters.search.as_deref() {
        let pattern = format!("%{}%", escape_like_pattern(search));
        builder
            .push(" AND (pr.comments ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR pr.reason ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR pr.uuid::text ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR u.name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR u.email ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR p.name ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

/// Append ORDER BY, LIMIT and OFFSET. Sort column and direction come from
/// closed enums, never from raw caller input.
fn push_order_and_page(
    builder: &mut QueryBuilder<'_, Postgres>,
    sort_field: RequestSortField,
    sort_direction: SortDirection,
    params: PageParams,
) {
    builder.push(format!(
        " ORDER BY {} {}, pr.id",
        sort_field.column(),
        sort_direction.as_sql()
    ));
    builder
        .push(" LIMIT ")
        .push_bind(params.limit())
        .push(" OFFSET ")
        .push_bind(params.offset());
}

/// Escape LIKE wildcards so search terms match literally
fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql_for(filters: &RequestFilters) -> String {
        let mut builder = QueryBuilder::new(SELECT_BASE);
        push_filters(&mut builder, filters);
        builder.into_sql()
    }

    #[test]
    fn no_filters_only_excludes_soft_deleted_rows() {
        let sql = sql_for(&RequestFilters::default());
        assert!(sql.ends_with("WHERE pr.deleted_at IS NULL"));
        assert!(!sql.contains("ILIKE"));
    }

    #[test]
    fn search_fans_out_over_request_submitter_and_portal_columns() {
        let sql = sql_for(&RequestFilters {
            search: Some("outage".to_string()),
            ..Default::default()
        });

        assert!(sql.contains("pr.comments ILIKE"));
        assert!(sql.contains("pr.reason ILIKE"));
        assert!(sql.contains("pr.uuid::text ILIKE"));
        assert!(sql.contains("u.name ILIKE"));
        assert!(sql.contains("u.email ILIKE"));
        assert!(sql.contains("p.name ILIKE"));
        assert_eq!(sql.matches(" OR ").count(), 5);
        // the whole search group is AND'ed with the rest of the WHERE
        assert!(sql.contains(" AND (pr.comments ILIKE"));
    }

    #[test]
    fn scalar_filters_are_anded() {
        let sql = sql_for(&RequestFilters {
            portal_id: Some(Uuid::new_v4()),
            status: Some(RequestStatus::Pending),
            priority: Some(RequestPriority::High),
            submitted_by: Some(Uuid::new_v4()),
            ..Default::default()
        });

        assert!(sql.contains(" AND pr.portal_id = "));
        assert!(sql.contains(" AND pr.status = "));
        assert!(sql.contains(" AND pr.priority = "));
        assert!(sql.contains(" AND pr.submitted_by = "));
        assert!(!sql.contains(" OR "));
    }

    #[test]
    fn order_and_page_use_validated_column_names() {
        let mut builder = QueryBuilder::new(SELECT_BASE);
        push_order_and_page(
            &mut builder,
            RequestSortField::Priority,
            SortDirection::Asc,
            PageParams::new(Some(2), Some(25)),
        );
        let sql = builder.into_sql();

        assert!(sql.contains("ORDER BY pr.priority ASC, pr.id"));
        assert!(sql.contains("LIMIT "));
        assert!(sql.contains("OFFSET "));
    }

    #[test]
    fn default_sort_is_created_at() {
        assert_eq!(RequestSortField::default().column(), "pr.created_at");
        assert_eq!(SortDirection::default().as_sql(), "DESC");
    }

    #[test]
    fn test_escape_like_pattern() {
        assert_eq!(escape_like_pattern("plain"), "plain");
        assert_eq!(escape_like_pattern("50%"), r"50\%");
        assert_eq!(escape_like_pattern("a_b"), r"a\_b");
        assert_eq!(escape_like_pattern(r"back\slash"), r"back\\slash");
    }
}
