//! Employee directory handlers for the REST API.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use innkeep_types::employee::{Employee, EmployeeId, EmployeeRecord};
use innkeep_types::error::EmployeeError;

use crate::http::error::AppError;
use crate::http::extractors::query::{SearchQuery, StatusQuery};
use crate::http::handlers::parse_id;
use crate::http::response::{ApiResponse, RequestContext};
use crate::state::AppState;

fn self_link(id: EmployeeId) -> String {
    format!("/api/v1/employees/{id}")
}

/// POST /api/v1/employees - Create an employee.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(body): Json<EmployeeRecord>,
) -> Result<(StatusCode, Json<ApiResponse<Employee>>), AppError> {
    let ctx = RequestContext::start();

    let employee = state.employee_service.create_employee(body).await?;
    let link = self_link(employee.id);

    let resp = ctx
        .success(employee)
        .with_message("Employee created successfully")
        .with_link("self", &link)
        .with_link("employees", "/api/v1/employees");

    Ok((StatusCode::CREATED, Json(resp)))
}

/// GET /api/v1/employees - List every employee.
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, AppError> {
    let ctx = RequestContext::start();
    let employees = state.employee_service.list_employees().await?;

    Ok(Json(ctx.success(employees).with_link("self", "/api/v1/employees")))
}

/// GET /api/v1/employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<Employee>>, AppError> {
    let ctx = RequestContext::start();
    let id: EmployeeId = parse_id(&raw_id, "employee")?;

    let employee = state
        .employee_service
        .get_employee(id)
        .await?
        .ok_or(EmployeeError::NotFound(id))?;

    Ok(Json(
        ctx.success(employee)
            .with_link("self", &self_link(id))
            .with_link("employees", "/api/v1/employees"),
    ))
}

/// GET /api/v1/employees/email/{email}
pub async fn get_employee_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<ApiResponse<Employee>>, AppError> {
    let ctx = RequestContext::start();

    let employee = state
        .employee_service
        .get_employee_by_email(&email)
        .await?
        .ok_or(AppError::EmployeeEmailNotFound(email))?;
    let link = self_link(employee.id);

    Ok(Json(ctx.success(employee).with_link("self", &link)))
}

/// GET /api/v1/employees/department/{department}
pub async fn list_by_department(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, AppError> {
    let ctx = RequestContext::start();
    let employees = state.employee_service.list_by_department(&department).await?;
    Ok(Json(ctx.success(employees)))
}

/// GET /api/v1/employees/status/{status}
pub async fn list_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, AppError> {
    let ctx = RequestContext::start();
    let employees = state.employee_service.list_by_status(&status).await?;
    Ok(Json(ctx.success(employees)))
}

/// GET /api/v1/employees/position/{position}
pub async fn list_by_position(
    State(state): State<AppState>,
    Path(position): Path<String>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, AppError> {
    let ctx = RequestContext::start();
    let employees = state.employee_service.list_by_position(&position).await?;
    Ok(Json(ctx.success(employees)))
}

/// GET /api/v1/employees/search?name= - Case-sensitive substring search.
pub async fn search_employees(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, AppError> {
    let ctx = RequestContext::start();
    let employees = state.employee_service.search_by_name(&query.name).await?;
    Ok(Json(ctx.success(employees)))
}

/// PUT /api/v1/employees/{id} - Full replace of every field but the id.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(body): Json<EmployeeRecord>,
) -> Result<Json<ApiResponse<Employee>>, AppError> {
    let ctx = RequestContext::start();
    let id: EmployeeId = parse_id(&raw_id, "employee")?;

    let employee = state.employee_service.update_employee(id, body).await?;

    Ok(Json(
        ctx.success(employee)
            .with_message("Employee updated successfully")
            .with_link("self", &self_link(id)),
    ))
}

/// PATCH /api/v1/employees/{id}/status?status=
pub async fn update_status(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<ApiResponse<Employee>>, AppError> {
    let ctx = RequestContext::start();
    let id: EmployeeId = parse_id(&raw_id, "employee")?;

    let employee = state
        .employee_service
        .update_status(id, &query.status)
        .await?;

    Ok(Json(
        ctx.success(employee)
            .with_message("Employee status updated successfully")
            .with_link("self", &self_link(id)),
    ))
}

/// DELETE /api/v1/employees/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let ctx = RequestContext::start();
    let id: EmployeeId = parse_id(&raw_id, "employee")?;

    state.employee_service.delete_employee(id).await?;

    Ok(Json(
        ctx.success(serde_json::json!({ "deleted": true, "id": id }))
            .with_message("Employee deleted successfully")
            .with_link("employees", "/api/v1/employees"),
    ))
}
