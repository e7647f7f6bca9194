use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum AttendanceStatus {
    #[sea_orm(string_value = "Presente")]
    Present,
    #[sea_orm(string_value = "Ausente")]
    Absent,
    #[sea_orm(string_value = "Tarde")]
    Late,
    #[sea_orm(string_value = "Justificado")]
    Excused,
}

/// Attendance mark; `(student_id, date)` is the natural key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "asistencia")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "estudiante_id")]
    pub student_id: i32,
    #[sea_orm(column_name = "fecha")]
    pub date: Date,
    #[sea_orm(column_name = "estado")]
    pub status: AttendanceStatus,
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
