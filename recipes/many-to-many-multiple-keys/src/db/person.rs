use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use sea_orm::Linked;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "person"
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveModel, DeriveActiveModel)]
pub struct Model {
    pub uuid: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    Uuid,
    Name,
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
pub enum Relation {}

impl ColumnTrait for Column {
    type EntityName = Entity;

    fn def(&self) -> ColumnDef {
        match self {
            Self::Uuid => ColumnType::Uuid.def(),
            Self::Name => ColumnType::String(StringLen::N(50)).def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

// Two foreign keys on qualification_record point at this table, so the
// generic `Related` navigation cannot serve both; each direction gets a
// named link instead.

/// Records in which this person is the student.
pub struct Qualifications;

impl Linked for Qualifications {
    type FromEntity = Entity;
    type ToEntity = super::qualification_record::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![super::qualification_record::Relation::Student.def().rev()]
    }
}

/// Records in which this person is the instructor.
pub struct Instructed;

impl Linked for Instructed {
    type FromEntity = Entity;
    type ToEntity = super::qualification_record::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![super::qualification_record::Relation::Instructor.def().rev()]
    }
}

impl ActiveModelBehavior for ActiveModel {}
