//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations. The lookup joins
//! airports, cities and countries in one round trip so a request never fans
//! out into per-relation follow-up queries.

use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QuerySelect,
    RelationTrait,
};
use tracing::trace;

use super::SeaOrmStorage;
use super::converters::row_to_airport_view;
use crate::errors::Result;
use crate::storage::models::AirportView;

use migration::entities::{airport, city, country};

/// 联表查询的扁平结果行（airports LEFT JOIN cities LEFT JOIN countries）
///
/// 城市与国家两组列各自独立取值：city_country_id 是城市行自己的外键原值，
/// country_id 是联到的国家行主键，二者不互相推导。
#[derive(Debug, FromQueryResult)]
pub(super) struct AirportLookupRow {
    pub id: i32,
    pub icao_code: String,
    pub iata_code: String,
    pub name: String,
    pub kind: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub elevation_ft: i32,
    pub city_id: Option<i32>,
    pub city_name: Option<String>,
    pub city_country_id: Option<i32>,
    pub city_is_active: Option<bool>,
    pub city_lat: Option<f64>,
    pub city_long: Option<f64>,
    pub country_id: Option<i32>,
    pub country_name: Option<String>,
    pub country_code_two: Option<String>,
    pub country_code_three: Option<String>,
    pub country_mobile_code: Option<i32>,
    pub country_continent_id: Option<i32>,
}

impl SeaOrmStorage {
    /// 按 IATA 码查询机场，单条 SQL 同时取回城市与国家
    ///
    /// 入参不做任何格式校验，原样下推到存储层。重复 IATA 码时返回
    /// 第一条匹配（LIMIT 1，顺序由数据库决定）。
    pub async fn find_by_iata(&self, code: &str) -> Result<Option<AirportView>> {
        trace!("Looking up airport by IATA code: {}", code);

        let row = airport::Entity::find()
            .filter(airport::Column::IataCode.eq(code))
            .join(JoinType::LeftJoin, airport::Relation::City.def())
            .join(JoinType::LeftJoin, city::Relation::Country.def())
            .select_only()
            .column_as(airport::Column::Id, "id")
            .column_as(airport::Column::IcaoCode, "icao_code")
            .column_as(airport::Column::IataCode, "iata_code")
            .column_as(airport::Column::Name, "name")
            .column_as(airport::Column::Kind, "kind")
            .column_as(airport::Column::LatitudeDeg, "latitude_deg")
            .column_as(airport::Column::LongitudeDeg, "longitude_deg")
            .column_as(airport::Column::ElevationFt, "elevation_ft")
            .column_as(city::Column::Id, "city_id")
            .column_as(city::Column::Name, "city_name")
            .column_as(city::Column::CountryId, "city_country_id")
            .column_as(city::Column::IsActive, "city_is_active")
            .column_as(city::Column::Lat, "city_lat")
            .column_as(city::Column::Long, "city_long")
            .column_as(country::Column::Id, "country_id")
            .column_as(country::Column::Name, "country_name")
            .column_as(country::Column::CountryCodeTwo, "country_code_two")
            .column_as(country::Column::CountryCodeThree, "country_code_three")
            .column_as(country::Column::MobileCode, "country_mobile_code")
            .column_as(country::Column::ContinentId, "country_continent_id")
            .into_model::<AirportLookupRow>()
            .one(&self.db)
            .await?;

        Ok(row.map(row_to_airport_view))
    }

    /// airports 表行数（健康检查与启动自检用）
    pub async fn count_airports(&self) -> Result<u64> {
        Ok(airport::Entity::find().count(&self.db).await?)
    }
}
