//! Pending-task feed for the teacher dashboard.

use crate::server::model::dashboard::PendingTask;

/// Source of pending tasks for a teacher.
pub trait TaskFeed: Send + Sync {
    fn pending_tasks(&self, teacher_id: i32) -> Vec<PendingTask>;
}

/// Fixed placeholder list shown to every teacher until tasks are derived from data.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticTaskFeed;

impl TaskFeed for StaticTaskFeed {
    fn pending_tasks(&self, _teacher_id: i32) -> Vec<PendingTask> {
        [
            ("asistencia", "7°B", "Registrar asistencia", "hoy"),
            (
                "calificaciones",
                "8°A",
                "Calificar tareas de Matemáticas",
                "vence hoy",
            ),
            ("boletines", "Todos", "Enviar boletines 2025-P2", "próximamente"),
        ]
        .into_iter()
        .map(|(kind, course, description, urgency)| PendingTask {
            kind: kind.to_string(),
            course: course.to_string(),
            description: description.to_string(),
            urgency: urgency.to_string(),
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_feed_is_the_same_for_every_teacher() {
        let feed = StaticTaskFeed;

        let tasks = feed.pending_tasks(1);

        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].kind, "asistencia");
        assert_eq!(tasks[2].course, "Todos");
        assert_eq!(tasks, feed.pending_tasks(99));
    }
}
