//! A record tying a student, an instructor, an event, and a course together.
//! `student_uuid` and `instructor_uuid` both reference `person`, so the two
//! person navigations are spelled out as named links.

use sea_orm::entity::prelude::*;
use sea_orm::Linked;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "qualification_record"
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveModel, DeriveActiveModel)]
pub struct Model {
    pub uuid: Uuid,
    pub student_uuid: Uuid,
    pub instructor_uuid: Uuid,
    pub event_uuid: Uuid,
    pub course_uuid: Uuid,
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    Uuid,
    StudentUuid,
    InstructorUuid,
    EventUuid,
    CourseUuid,
    Timestamp,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    Uuid,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;

    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Student,
    Instructor,
    Event,
    Course,
}

impl ColumnTrait for Column {
    type EntityName = Entity;

    fn def(&self) -> ColumnDef {
        match self {
            Self::Uuid => ColumnType::Uuid.def(),
            Self::StudentUuid => ColumnType::Uuid.def(),
            Self::InstructorUuid => ColumnType::Uuid.def(),
            Self::EventUuid => ColumnType::Uuid.def(),
            Self::CourseUuid => ColumnType::Uuid.def(),
            Self::Timestamp => ColumnType::TimestampWithTimeZone.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Student => Entity::belongs_to(super::person::Entity)
                .from(Column::StudentUuid)
                .to(super::person::Column::Uuid)
                .into(),
            Self::Instructor => Entity::belongs_to(super::person::Entity)
                .from(Column::InstructorUuid)
                .to(super::person::Column::Uuid)
                .into(),
            Self::Event => Entity::belongs_to(super::event::Entity)
                .from(Column::EventUuid)
                .to(super::event::Column::Uuid)
                .into(),
            Self::Course => Entity::belongs_to(super::course::Entity)
                .from(Column::CourseUuid)
                .to(super::course::Column::Uuid)
                .into(),
        }
    }
}

// Event and course are referenced once each, so plain `Related` works.
impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

/// The person this record qualifies.
pub struct Student;

impl Linked for Student {
    type FromEntity = Entity;
    type ToEntity = super::person::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::Student.def()]
    }
}

/// The person who signed the record off.
pub struct Instructor;

impl Linked for Instructor {
    type FromEntity = Entity;
    type ToEntity = super::person::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::Instructor.def()]
    }
}

impl ActiveModelBehavior for ActiveModel {}
