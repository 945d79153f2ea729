// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use shiftboard_api::{
    ApiError, AssignmentMutationResponse, AssignmentPolicy, BatchCalendarTagsRequest,
    CalendarTagInfo, CalendarWriteResponse, CreateLeaveTypeRequest, CreateUserRequest,
    DailyOverviewResponse, DeleteResponse, EligibleLeaveTypesResponse, EmployeeInfo,
    LeaveTypeInfo, ListAssignmentsResponse, ListCalendarTagsResponse, ListLeaveTypesResponse,
    ListUsersResponse, LoginRequest, LoginResponse, MoveAssignmentRequest, RotationRequest,
    SetAssignmentRequest, SetCalendarTagRequest, SetCalendarTagResponse, UpdateLeaveTypeRequest,
    UpdateUserRequest, WeeklyHoursRequest, WeeklyHoursResponse,
};
use shiftboard_domain::{DEFAULT_DAILY_SHIFT_HOURS, DEFAULT_WEEKLY_HOURS_CAP, WeeklyHoursPolicy};
use shiftboard_persistence::Persistence;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Shiftboard Server - HTTP server for the Shiftboard scheduling system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3001)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Reject assignment writes that push a week over the hours cap
    #[arg(long)]
    enforce_weekly_hours: bool,

    /// Hours credited for a scheduled or overtime day
    #[arg(long, default_value_t = DEFAULT_DAILY_SHIFT_HOURS)]
    daily_shift_hours: u32,

    /// Maximum hours per Monday-start week
    #[arg(long, default_value_t = DEFAULT_WEEKLY_HOURS_CAP)]
    weekly_hours_cap: u32,
}

impl Args {
    const fn assignment_policy(&self) -> AssignmentPolicy {
        AssignmentPolicy {
            enforce_weekly_hours: self.enforce_weekly_hours,
            weekly: WeeklyHoursPolicy::new(self.daily_shift_hours, self.weekly_hours_cap),
        }
    }
}

/// Application state shared across handlers.
///
/// Every request takes the persistence lock for its whole unit of work, so
/// reads never observe a half-applied write.
#[derive(Clone)]
struct AppState {
    /// The persistence layer.
    persistence: Arc<Mutex<Persistence>>,
    /// How assignment writes are checked against the weekly cap.
    policy: AssignmentPolicy,
}

/// Query parameters for the daily overview.
#[derive(Debug, Deserialize)]
struct OverviewQuery {
    /// Optional `D`/`N` cohort filter.
    day_night: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

const fn created_or_ok(created: bool) -> StatusCode {
    if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    }
}

// ============================================================================
// Employees
// ============================================================================

/// Handler for POST `/api/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(employee_id = %req.employee_id, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = shiftboard_api::login(&mut persistence, &req)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for GET `/api/users`.
async fn handle_list_users(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListUsersResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListUsersResponse = shiftboard_api::list_users(&mut persistence)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for POST `/api/users`.
async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<EmployeeInfo>), HttpError> {
    info!(employee_id = %req.employee_id, "Handling create_user request");

    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeInfo = shiftboard_api::create_user(&mut persistence, &req)?;
    drop(persistence);
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/api/users/{employee_id}`.
async fn handle_get_user(
    AxumState(app_state): AxumState<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<EmployeeInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeInfo = shiftboard_api::get_user(&mut persistence, &employee_id)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for PUT `/api/users/{employee_id}`.
async fn handle_update_user(
    AxumState(app_state): AxumState<AppState>,
    Path(employee_id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<EmployeeInfo>, HttpError> {
    info!(employee_id = %employee_id, "Handling update_user request");

    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeInfo =
        shiftboard_api::update_user(&mut persistence, &employee_id, &req)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for DELETE `/api/users/{employee_id}`.
async fn handle_delete_user(
    AxumState(app_state): AxumState<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(employee_id = %employee_id, "Handling delete_user request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteResponse = shiftboard_api::delete_user(&mut persistence, &employee_id)?;
    drop(persistence);
    Ok(Json(response))
}

// ============================================================================
// Calendar
// ============================================================================

/// Handler for GET `/api/calendar-tags`.
async fn handle_list_calendar_tags(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListCalendarTagsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListCalendarTagsResponse = shiftboard_api::list_calendar_tags(&mut persistence)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for POST `/api/calendar-tags/batch`.
async fn handle_batch_calendar_tags(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<BatchCalendarTagsRequest>,
) -> Result<Json<CalendarWriteResponse>, HttpError> {
    info!(count = req.tags.len(), "Handling batch calendar tag request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CalendarWriteResponse =
        shiftboard_api::batch_set_calendar_tags(&mut persistence, &req)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for POST `/api/calendar-tags/rotation`.
async fn handle_apply_rotation(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RotationRequest>,
) -> Result<Json<CalendarWriteResponse>, HttpError> {
    info!(
        start_date = %req.start_date,
        start_pattern = %req.start_pattern,
        "Handling rotation request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CalendarWriteResponse = shiftboard_api::apply_rotation(&mut persistence, &req)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for GET `/api/calendar-tags/{date}`.
async fn handle_get_calendar_tag(
    AxumState(app_state): AxumState<AppState>,
    Path(date): Path<String>,
) -> Result<Json<CalendarTagInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: CalendarTagInfo = shiftboard_api::get_calendar_tag(&mut persistence, &date)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for PUT `/api/calendar-tags/{date}`.
///
/// Responds `201 Created` when the date had no tag.
async fn handle_set_calendar_tag(
    AxumState(app_state): AxumState<AppState>,
    Path(date): Path<String>,
    Json(req): Json<SetCalendarTagRequest>,
) -> Result<(StatusCode, Json<SetCalendarTagResponse>), HttpError> {
    info!(date = %date, "Handling set_calendar_tag request");

    let mut persistence = app_state.persistence.lock().await;
    let response: SetCalendarTagResponse =
        shiftboard_api::set_calendar_tag(&mut persistence, &date, &req)?;
    drop(persistence);
    Ok((created_or_ok(response.created), Json(response)))
}

/// Handler for DELETE `/api/calendar-tags/{date}`.
async fn handle_delete_calendar_tag(
    AxumState(app_state): AxumState<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(date = %date, "Handling delete_calendar_tag request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteResponse = shiftboard_api::delete_calendar_tag(&mut persistence, &date)?;
    drop(persistence);
    Ok(Json(response))
}

// ============================================================================
// Leave Types
// ============================================================================

/// Handler for GET `/api/leave-types`.
async fn handle_list_leave_types(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListLeaveTypesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListLeaveTypesResponse = shiftboard_api::list_leave_types(&mut persistence)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for POST `/api/leave-types`.
async fn handle_create_leave_type(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateLeaveTypeRequest>,
) -> Result<(StatusCode, Json<LeaveTypeInfo>), HttpError> {
    info!(name = %req.name, "Handling create_leave_type request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LeaveTypeInfo = shiftboard_api::create_leave_type(&mut persistence, &req)?;
    drop(persistence);
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/api/leave-types/{leave_id}`.
async fn handle_get_leave_type(
    AxumState(app_state): AxumState<AppState>,
    Path(leave_id): Path<i64>,
) -> Result<Json<LeaveTypeInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: LeaveTypeInfo = shiftboard_api::get_leave_type(&mut persistence, leave_id)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for PUT `/api/leave-types/{leave_id}`.
async fn handle_update_leave_type(
    AxumState(app_state): AxumState<AppState>,
    Path(leave_id): Path<i64>,
    Json(req): Json<UpdateLeaveTypeRequest>,
) -> Result<Json<LeaveTypeInfo>, HttpError> {
    info!(leave_id, "Handling update_leave_type request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LeaveTypeInfo =
        shiftboard_api::update_leave_type(&mut persistence, leave_id, &req)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for DELETE `/api/leave-types/{leave_id}`.
async fn handle_delete_leave_type(
    AxumState(app_state): AxumState<AppState>,
    Path(leave_id): Path<i64>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(leave_id, "Handling delete_leave_type request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteResponse = shiftboard_api::delete_leave_type(&mut persistence, leave_id)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for GET `/api/eligible-leave-types/{employee_id}/{date}`.
async fn handle_eligible_leave_types(
    AxumState(app_state): AxumState<AppState>,
    Path((employee_id, date)): Path<(String, String)>,
) -> Result<Json<EligibleLeaveTypesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: EligibleLeaveTypesResponse =
        shiftboard_api::get_eligible_leave_types(&mut persistence, &employee_id, &date)?;
    drop(persistence);
    Ok(Json(response))
}

// ============================================================================
// Assignments
// ============================================================================

/// Handler for GET `/api/shift-assignments/{employee_id}`.
async fn handle_list_assignments(
    AxumState(app_state): AxumState<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<ListAssignmentsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListAssignmentsResponse =
        shiftboard_api::list_assignments(&mut persistence, &employee_id)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for PUT `/api/shift-assignments/{employee_id}/{date}`.
async fn handle_set_assignment(
    AxumState(app_state): AxumState<AppState>,
    Path((employee_id, date)): Path<(String, String)>,
    Json(req): Json<SetAssignmentRequest>,
) -> Result<Json<AssignmentMutationResponse>, HttpError> {
    info!(
        employee_id = %employee_id,
        date = %date,
        shift_type = %req.shift_type,
        "Handling set_assignment request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: AssignmentMutationResponse = shiftboard_api::set_assignment(
        &mut persistence,
        &app_state.policy,
        &employee_id,
        &date,
        &req,
    )?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for DELETE `/api/shift-assignments/{employee_id}/{date}`.
async fn handle_clear_assignment(
    AxumState(app_state): AxumState<AppState>,
    Path((employee_id, date)): Path<(String, String)>,
) -> Result<Json<AssignmentMutationResponse>, HttpError> {
    info!(employee_id = %employee_id, date = %date, "Handling clear_assignment request");

    let mut persistence = app_state.persistence.lock().await;
    let response: AssignmentMutationResponse =
        shiftboard_api::clear_assignment(&mut persistence, &employee_id, &date)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for POST `/api/shift-assignments/{employee_id}/move`.
async fn handle_move_assignment(
    AxumState(app_state): AxumState<AppState>,
    Path(employee_id): Path<String>,
    Json(req): Json<MoveAssignmentRequest>,
) -> Result<Json<AssignmentMutationResponse>, HttpError> {
    info!(
        employee_id = %employee_id,
        from_date = %req.from_date,
        to_employee_id = %req.to_employee_id,
        to_date = %req.to_date,
        "Handling move_assignment request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: AssignmentMutationResponse = shiftboard_api::move_assignment(
        &mut persistence,
        &app_state.policy,
        &employee_id,
        &req,
    )?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for POST `/api/shift-assignments/{employee_id}/weekly-hours`.
async fn handle_check_weekly_hours(
    AxumState(app_state): AxumState<AppState>,
    Path(employee_id): Path<String>,
    Json(req): Json<WeeklyHoursRequest>,
) -> Result<Json<WeeklyHoursResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: WeeklyHoursResponse = shiftboard_api::check_weekly_hours(
        &mut persistence,
        &app_state.policy,
        &employee_id,
        &req,
    )?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for GET `/api/overview/{date}`.
async fn handle_daily_overview(
    AxumState(app_state): AxumState<AppState>,
    Path(date): Path<String>,
    Query(query): Query<OverviewQuery>,
) -> Result<Json<DailyOverviewResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: DailyOverviewResponse =
        shiftboard_api::get_daily_overview(&mut persistence, &date, query.day_night.as_deref())?;
    drop(persistence);
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/login", post(handle_login))
        .route("/api/users", get(handle_list_users).post(handle_create_user))
        .route(
            "/api/users/{employee_id}",
            get(handle_get_user)
                .put(handle_update_user)
                .delete(handle_delete_user),
        )
        .route("/api/calendar-tags", get(handle_list_calendar_tags))
        .route("/api/calendar-tags/batch", post(handle_batch_calendar_tags))
        .route("/api/calendar-tags/rotation", post(handle_apply_rotation))
        .route(
            "/api/calendar-tags/{date}",
            get(handle_get_calendar_tag)
                .put(handle_set_calendar_tag)
                .delete(handle_delete_calendar_tag),
        )
        .route(
            "/api/leave-types",
            get(handle_list_leave_types).post(handle_create_leave_type),
        )
        .route(
            "/api/leave-types/{leave_id}",
            get(handle_get_leave_type)
                .put(handle_update_leave_type)
                .delete(handle_delete_leave_type),
        )
        .route(
            "/api/eligible-leave-types/{employee_id}/{date}",
            get(handle_eligible_leave_types),
        )
        .route(
            "/api/shift-assignments/{employee_id}",
            get(handle_list_assignments),
        )
        .route(
            "/api/shift-assignments/{employee_id}/move",
            post(handle_move_assignment),
        )
        .route(
            "/api/shift-assignments/{employee_id}/weekly-hours",
            post(handle_check_weekly_hours),
        )
        .route(
            "/api/shift-assignments/{employee_id}/{date}",
            put(handle_set_assignment).delete(handle_clear_assignment),
        )
        .route("/api/overview/{date}", get(handle_daily_overview))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Shiftboard Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let policy: AssignmentPolicy = args.assignment_policy();
    info!(
        enforce_weekly_hours = policy.enforce_weekly_hours,
        daily_shift_hours = policy.weekly.daily_hours,
        weekly_hours_cap = policy.weekly.weekly_cap,
        "Assignment policy configured"
    );

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        policy,
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
