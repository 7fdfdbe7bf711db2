use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "airports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub icao_code: String,
    /// 查询键，未加唯一约束，重复时由查询端取第一条
    pub iata_code: String,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub elevation_ft: i32,
    pub city_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::CityId",
        to = "super::city::Column::Id"
    )]
    City,
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
