//! Content and user reports.
//!
//! Post, post comment, article comment and profile comment reports share one set
//! of handlers; the `{kind}` route segment selects the table.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        report::{NewReportDto, NewReportUserDto, ReportDto, ReportUserDto, UpdateReportDto},
    },
    server::{
        data::report::{
            user::UserReportRepository, ArticleCommentReportRepository,
            PostCommentReportRepository, PostReportRepository, ProfileCommentReportRepository,
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::report::{
            CreateReportParams, CreateUserReportParams, ReportKey, ReportKind, UpdateReportParams,
        },
        state::AppState,
        util::validation::validate_request,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Runs `$body` with `$repo` bound to the repository of the given report kind.
macro_rules! with_report_repository {
    ($kind:expr, $db:expr, |$repo:ident| $body:expr) => {
        match $kind {
            ReportKind::Post => {
                let $repo = PostReportRepository::new($db);
                $body
            }
            ReportKind::PostComment => {
                let $repo = PostCommentReportRepository::new($db);
                $body
            }
            ReportKind::ArticleComment => {
                let $repo = ArticleCommentReportRepository::new($db);
                $body
            }
            ReportKind::ProfileComment => {
                let $repo = ProfileCommentReportRepository::new($db);
                $body
            }
        }
    };
}

fn report_not_found() -> AppError {
    AppError::NotFound("Report not found".to_string())
}

/// Get all reports of one kind, most recent first.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/reports/{kind}",
    tag = REPORT_TAG,
    params(("kind" = String, Path, description = "post, post-comment, article-comment or profile-comment")),
    responses(
        (status = 200, description = "Reports of this kind", body = Vec<ReportDto>),
        (status = 400, description = "Unknown report kind", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reports(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(kind): Path<ReportKind>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let reports = with_report_repository!(kind, &state.db, |repo| repo.get_all().await?);

    Ok((
        StatusCode::OK,
        Json(reports.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one report by reporter, reported row and reason.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/reports/{kind}/{id_user}/{id_target}/{id_reason}",
    tag = REPORT_TAG,
    params(
        ("kind" = String, Path, description = "post, post-comment, article-comment or profile-comment"),
        ("id_user" = i32, Path, description = "Reporting user id"),
        ("id_target" = i32, Path, description = "Reported post or comment id"),
        ("id_reason" = i32, Path, description = "Reason id")
    ),
    responses(
        (status = 200, description = "The report", body = ReportDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((kind, id_user, id_target, id_reason)): Path<(ReportKind, i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let key = ReportKey::new(id_user, id_target, id_reason);
    let report = with_report_repository!(kind, &state.db, |repo| repo.get(key).await?);

    match report {
        Some(report) => Ok((StatusCode::OK, Json(report.into_dto()))),
        None => Err(report_not_found()),
    }
}

/// File a report.
///
/// # Access Control
/// - `Member` - Reporting as oneself, or an admin
///
/// # Arguments
/// - `kind` - What is being reported
/// - `payload` - Reporter, reported row, reason and description
///
/// # Returns
/// - `201 Created` - The stored report
/// - `400 Bad Request` - Invalid body, unknown kind, or the same report exists
/// - `403 Forbidden` - Reporting as another user
/// - `404 Not Found` - Reporter, reported row or reason not found
#[utoipa::path(
    post,
    path = "/api/reports/{kind}",
    tag = REPORT_TAG,
    params(("kind" = String, Path, description = "post, post-comment, article-comment or profile-comment")),
    request_body = NewReportDto,
    responses(
        (status = 201, description = "Report filed", body = ReportDto),
        (status = 400, description = "Invalid request or duplicate report", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Reporter, target or reason not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(kind): Path<ReportKind>,
    Json(payload): Json<NewReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    validate_request(&payload)?;

    let params = CreateReportParams::from_dto(payload);
    let report = with_report_repository!(kind, &state.db, |repo| repo
        .create(params, &actor)
        .await?);

    match report {
        Some(report) => Ok((StatusCode::CREATED, Json(report.into_dto()))),
        None => Err(AppError::NotFound(
            "Reporter, target or reason not found".to_string(),
        )),
    }
}

/// Update the description and viewed flag of a report.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    put,
    path = "/api/reports/{kind}/{id_user}/{id_target}/{id_reason}",
    tag = REPORT_TAG,
    params(
        ("kind" = String, Path, description = "post, post-comment, article-comment or profile-comment"),
        ("id_user" = i32, Path, description = "Reporting user id"),
        ("id_target" = i32, Path, description = "Reported post or comment id"),
        ("id_reason" = i32, Path, description = "Reason id")
    ),
    request_body = UpdateReportDto,
    responses(
        (status = 200, description = "Report updated", body = ReportDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((kind, id_user, id_target, id_reason)): Path<(ReportKind, i32, i32, i32)>,
    Json(payload): Json<UpdateReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    validate_request(&payload)?;

    let key = ReportKey::new(id_user, id_target, id_reason);
    let params = UpdateReportParams::from_dto(payload);
    let report = with_report_repository!(kind, &state.db, |repo| repo
        .update(key, params)
        .await?);

    match report {
        Some(report) => Ok((StatusCode::OK, Json(report.into_dto()))),
        None => Err(report_not_found()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/reports/{kind}/{id_user}/{id_target}/{id_reason}",
    tag = REPORT_TAG,
    params(
        ("kind" = String, Path, description = "post, post-comment, article-comment or profile-comment"),
        ("id_user" = i32, Path, description = "Reporting user id"),
        ("id_target" = i32, Path, description = "Reported post or comment id"),
        ("id_reason" = i32, Path, description = "Reason id")
    ),
    responses(
        (status = 204, description = "Report deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((kind, id_user, id_target, id_reason)): Path<(ReportKind, i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let key = ReportKey::new(id_user, id_target, id_reason);
    let deleted = with_report_repository!(kind, &state.db, |repo| repo.delete(key).await?);

    match deleted {
        Some(()) => Ok(StatusCode::NO_CONTENT),
        None => Err(report_not_found()),
    }
}

/// Get all user reports, most recent first.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/user-reports",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "All user reports", body = Vec<ReportUserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_reports(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let reports = UserReportRepository::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(reports.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/user-reports/{id}",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "User report id")),
    responses(
        (status = 200, description = "The report", body = ReportUserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    match UserReportRepository::new(&state.db).get(id).await? {
        Some(report) => Ok((StatusCode::OK, Json(report.into_dto()))),
        None => Err(report_not_found()),
    }
}

/// Report another user.
///
/// # Access Control
/// - `Member` - Reporting as oneself, or an admin
///
/// # Returns
/// - `201 Created` - The stored report
/// - `400 Bad Request` - Invalid body, or a user reporting themselves
/// - `404 Not Found` - Either user or the reason not found
#[utoipa::path(
    post,
    path = "/api/user-reports",
    tag = REPORT_TAG,
    request_body = NewReportUserDto,
    responses(
        (status = 201, description = "Report filed", body = ReportUserDto),
        (status = 400, description = "Invalid body or self report", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User or reason not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_user_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewReportUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    validate_request(&payload)?;

    match UserReportRepository::new(&state.db)
        .create(CreateUserReportParams::from_dto(payload), &actor)
        .await?
    {
        Some(report) => Ok((StatusCode::CREATED, Json(report.into_dto()))),
        None => Err(AppError::NotFound("User or reason not found".to_string())),
    }
}

#[utoipa::path(
    put,
    path = "/api/user-reports/{id}",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "User report id")),
    request_body = UpdateReportDto,
    responses(
        (status = 200, description = "Report updated", body = ReportUserDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_user_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    validate_request(&payload)?;

    match UserReportRepository::new(&state.db)
        .update(id, UpdateReportParams::from_dto(payload))
        .await?
    {
        Some(report) => Ok((StatusCode::OK, Json(report.into_dto()))),
        None => Err(report_not_found()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/user-reports/{id}",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "User report id")),
    responses(
        (status = 204, description = "Report deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    match UserReportRepository::new(&state.db).delete(id).await? {
        Some(()) => Ok(StatusCode::NO_CONTENT),
        None => Err(report_not_found()),
    }
}
