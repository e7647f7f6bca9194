use sea_orm::entity::prelude::*;

/// A score for one student in one subject and period.
///
/// `(student_id, subject, period)` is the natural key; at most one row exists per triple.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "calificaciones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "estudiante_id")]
    pub student_id: i32,
    #[sea_orm(column_name = "asignatura")]
    pub subject: String,
    #[sea_orm(column_name = "periodo")]
    pub period: String,
    #[sea_orm(column_name = "nota")]
    pub score: f64,
    #[sea_orm(column_name = "fecha_registro")]
    pub recorded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
