//! Headcount and payroll statistics endpoints.

use axum::Json;
use axum::extract::State;

use innkeep_types::statistics::{DepartmentStatistics, EmployeeStatistics};

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestContext};
use crate::state::AppState;

/// GET /api/v1/employees/statistics
pub async fn employee_statistics(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<EmployeeStatistics>>, AppError> {
    let ctx = RequestContext::start();
    let stats = state.employee_service.employee_statistics().await?;

    Ok(Json(
        ctx.success(stats)
            .with_link("self", "/api/v1/employees/statistics")
            .with_link("departments", "/api/v1/employees/statistics/departments"),
    ))
}

/// GET /api/v1/employees/statistics/departments
pub async fn department_statistics(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<DepartmentStatistics>>>, AppError> {
    let ctx = RequestContext::start();
    let stats = state.employee_service.department_statistics().await?;

    Ok(Json(
        ctx.success(stats)
            .with_link("self", "/api/v1/employees/statistics/departments"),
    ))
}

/// GET /api/v1/employees/count
pub async fn count_employees(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<u64>>, AppError> {
    let ctx = RequestContext::start();
    let count = state.employee_service.count_employees().await?;
    Ok(Json(ctx.success(count)))
}

/// GET /api/v1/employees/count/active - Status compared ignoring case.
pub async fn count_active(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<u64>>, AppError> {
    let ctx = RequestContext::start();
    let count = state.employee_service.count_active().await?;
    Ok(Json(ctx.success(count)))
}
