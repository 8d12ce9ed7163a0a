use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub kind: String,
    pub favorite_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::holocron_user::Entity",
        from = "Column::UserId",
        to = "super::holocron_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    HolocronUser,
}

impl Related<super::holocron_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HolocronUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
