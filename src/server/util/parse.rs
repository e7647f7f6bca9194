use chrono::NaiveDate;
use entity::{attendance::AttendanceStatus, observation::ObservationType, user::Role};
use sea_orm::{ActiveEnum, Iterable};

use crate::server::error::AppError;

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed date
/// - `Err(AppError::BadRequest)` - Value is not a valid ISO date
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Fecha inválida '{}', use YYYY-MM-DD", value)))
}

/// Parses an account role from its lowercase name.
pub fn parse_role(value: &str) -> Result<Role, AppError> {
    find_variant(value).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Rol inválido '{}'. Valores permitidos: {}",
            value,
            names::<Role>().join(", ")
        ))
    })
}

/// Parses an attendance status, ignoring case (`PRESENTE` and `Presente` are equivalent).
pub fn parse_attendance_status(value: &str) -> Result<AttendanceStatus, AppError> {
    find_variant(value).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Estado inválido '{}'. Valores permitidos: {}",
            value,
            names::<AttendanceStatus>().join(", ")
        ))
    })
}

/// Parses an observation type, ignoring case.
pub fn parse_observation_type(value: &str) -> Result<ObservationType, AppError> {
    find_variant(value).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Tipo inválido '{}'. Valores permitidos: {}",
            value,
            names::<ObservationType>().join(", ")
        ))
    })
}

/// Stored names of every variant of a string-backed enum, in declaration order.
pub fn names<E>() -> Vec<String>
where
    E: ActiveEnum<Value = String> + Iterable,
{
    E::iter().map(|variant| variant.to_value()).collect()
}

/// Requires a non-blank string field, returning it trimmed.
///
/// # Returns
/// - `Ok(String)` - Trimmed value
/// - `Err(AppError::BadRequest)` - Field missing or blank
pub fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("El campo {} es requerido", field))),
    }
}

/// Requires a non-empty value without trimming it, for passwords.
pub fn required_secret(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("El campo {} es requerido", field)))
}

/// Trims an optional field, rejecting values that are present but blank.
pub fn optional_text(value: Option<String>, field: &str) -> Result<Option<String>, AppError> {
    value.map(|v| required_text(Some(v), field)).transpose()
}

fn find_variant<E>(value: &str) -> Option<E>
where
    E: ActiveEnum<Value = String> + Iterable,
{
    let value = value.trim();
    E::iter().find(|variant| variant.to_value().eq_ignore_ascii_case(value))
}
