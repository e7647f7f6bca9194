//! Observation service.

use entity::user::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{observation::ObservationRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        observation::{
            AddObservationParams, CreateObservationParams, ObservationFilter,
            ObservationWithNames, UpdateObservationParams,
        },
        pagination::{Page, PageRequest},
        user::User,
    },
    service::student::ensure_student_exists,
};

pub struct ObservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ObservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Observations about students of a course, newest first.
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<ObservationWithNames>, AppError> {
        Ok(ObservationRepository::new(self.db)
            .get_by_course(course_id)
            .await?)
    }

    pub async fn get_by_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<ObservationWithNames>, AppError> {
        ensure_student_exists(self.db, student_id).await?;

        Ok(ObservationRepository::new(self.db)
            .get_by_student(student_id)
            .await?)
    }

    pub async fn get_paginated(
        &self,
        filter: ObservationFilter,
        page: PageRequest,
    ) -> Result<Page<ObservationWithNames>, AppError> {
        if let (Some(from), Some(to)) = (filter.from, filter.to) {
            if from > to {
                return Err(AppError::BadRequest(
                    "fecha_inicio no puede ser posterior a fecha_fin".to_string(),
                ));
            }
        }

        let (observations, total) = ObservationRepository::new(self.db)
            .get_paginated(filter, page)
            .await?;

        Ok(Page::new(observations, total, page))
    }

    /// Records an observation.
    ///
    /// The caller is the author. Admins may record on behalf of another teacher by naming
    /// them; anyone else naming a different author is refused.
    ///
    /// # Returns
    /// - `Ok(ObservationWithNames)` - Created observation with student and author names
    /// - `Err(AppError::AuthErr(AccessDenied))` - Non-admin named another author
    /// - `Err(AppError::NotFound)` - Student or named author does not exist
    pub async fn create(
        &self,
        caller: &User,
        params: AddObservationParams,
    ) -> Result<ObservationWithNames, AppError> {
        let teacher_id = match params.teacher_id {
            None => caller.id,
            Some(id) if id == caller.id => id,
            Some(id) if caller.is_admin() => {
                let author = UserRepository::new(self.db).find_by_id(id).await?;
                match author {
                    Some(author) if author.role != Role::Familia => author.id,
                    _ => return Err(AppError::NotFound("Docente no encontrado".to_string())),
                }
            }
            Some(id) => {
                return Err(AuthError::AccessDenied(
                    caller.id,
                    format!("attempted to author an observation as user {}", id),
                )
                .into())
            }
        };

        ensure_student_exists(self.db, params.student_id).await?;

        let observation_repo = ObservationRepository::new(self.db);
        let observation = observation_repo
            .create(CreateObservationParams {
                student_id: params.student_id,
                teacher_id,
                date: params.date,
                kind: params.kind,
                detail: params.detail,
            })
            .await?;

        tracing::info!(
            "User {} added observation {} for student {}",
            caller.id,
            observation.id,
            observation.student_id
        );

        observation_repo
            .find_with_names(observation.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Observation missing after insert".to_string()))
    }

    /// Edits an observation. Only its author or an admin may do so.
    pub async fn update(
        &self,
        caller: &User,
        id: i32,
        params: UpdateObservationParams,
    ) -> Result<ObservationWithNames, AppError> {
        let observation_repo = ObservationRepository::new(self.db);

        let Some(existing) = observation_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Observación no encontrada".to_string()));
        };

        if existing.teacher_id != caller.id && !caller.is_admin() {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("attempted to edit observation {} by user {}", id, existing.teacher_id),
            )
            .into());
        }

        observation_repo.update(id, params).await?;

        observation_repo
            .find_with_names(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Observación no encontrada".to_string()))
    }
}
