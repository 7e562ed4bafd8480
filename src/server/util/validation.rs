use validator::{Validate, ValidationErrors};

use crate::{model::api::ViolationDto, server::error::AppError};

/// Runs the declared field constraints of a request body.
///
/// # Arguments
/// - `dto` - Deserialized request body
///
/// # Returns
/// - `Ok(())` - Every constraint holds
/// - `Err(AppError::ValidationErr)` - At least one constraint failed
pub fn validate_request<T: Validate>(dto: &T) -> Result<(), AppError> {
    dto.validate()?;
    Ok(())
}

/// Ensures the id in the route matches the id carried in the body.
pub fn ensure_same_id(route_id: i32, body_id: i32) -> Result<(), AppError> {
    if route_id != body_id {
        return Err(AppError::BadRequest(
            "Id from route and Id in body have to be same".to_string(),
        ));
    }

    Ok(())
}

/// Flattens validation errors into one entry per violated constraint, ordered by field.
pub fn violations(errors: &ValidationErrors) -> Vec<ViolationDto> {
    let mut violations: Vec<ViolationDto> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| ViolationDto {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string()),
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
    violations
}
