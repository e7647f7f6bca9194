use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

// Glob imports bring in the `__path_*` items that `routes!` resolves next to each handler.
use crate::server::{
    controller::{
        attendance::*, auth::*, course::*, dashboard::*, grade::*, health::*, message::*,
        observation::*, student::*, user::*,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Schoolboard API", description = "School management backend"),
    modifiers(&BearerAuth),
    tags(
        (name = HEALTH_TAG, description = "Liveness probe"),
        (name = AUTH_TAG, description = "Login, token refresh and account registration"),
        (name = USER_TAG, description = "User accounts"),
        (name = COURSE_TAG, description = "Courses"),
        (name = STUDENT_TAG, description = "Students"),
        (name = GRADE_TAG, description = "Grades"),
        (name = ATTENDANCE_TAG, description = "Daily attendance"),
        (name = OBSERVATION_TAG, description = "Teacher observations"),
        (name = MESSAGE_TAG, description = "Internal messaging"),
        (name = DASHBOARD_TAG, description = "Teacher and family dashboards")
    )
)]
struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application router with every API route, Swagger UI at `/api/docs`,
/// request tracing and permissive CORS.
pub fn router(state: AppState) -> Router {
    let (router, api) = api_router().split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health))
        // auth
        .routes(routes!(login))
        .routes(routes!(refresh))
        .routes(routes!(profile))
        .routes(routes!(register))
        // users
        .routes(routes!(get_users))
        .routes(routes!(get_families))
        .routes(routes!(get_teachers))
        .routes(routes!(get_user))
        .routes(routes!(update_user))
        // courses
        .routes(routes!(get_courses, create_course))
        .routes(routes!(get_course, update_course, delete_course))
        // students
        .routes(routes!(get_students, create_student))
        .routes(routes!(get_student))
        .routes(routes!(get_students_by_course))
        // grades
        .routes(routes!(get_grades, create_grade))
        .routes(routes!(update_grade))
        .routes(routes!(search_grades))
        .routes(routes!(save_grades))
        .routes(routes!(get_periods))
        .routes(routes!(get_subjects))
        // attendance
        .routes(routes!(get_attendance))
        .routes(routes!(get_attendance_by_date))
        .routes(routes!(save_attendance))
        .routes(routes!(get_attendance_stats))
        .routes(routes!(get_attendance_statuses))
        // observations
        .routes(routes!(get_observations))
        .routes(routes!(update_observation))
        .routes(routes!(get_observations_by_course))
        .routes(routes!(add_observation))
        .routes(routes!(get_observation_types))
        // messages
        .routes(routes!(get_mailbox))
        .routes(routes!(get_user_messages))
        .routes(routes!(send_message))
        .routes(routes!(mark_message_read))
        .routes(routes!(get_conversation))
        // dashboards
        .routes(routes!(get_teacher_dashboard))
        .routes(routes!(get_family_dashboard))
        .routes(routes!(get_child_grades))
        .routes(routes!(get_child_attendance))
        .routes(routes!(get_child_observations))
}
