use serde::{Deserialize, Serialize};

/// 按 IATA 码查询后对外返回的扁平化机场数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportView {
    pub id: i32,
    pub icao_code: String,
    pub iata_code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub elevation_ft: i32,
    pub address: AirportAddress,
}

/// 机场的地理归属，城市与国家均可缺失
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportAddress {
    pub city: Option<CityView>,
    pub country: Option<CountryView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityView {
    pub id: i32,
    pub name: String,
    /// 城市行自身的外键原值，与 address.country 是否存在无关
    pub country_id: Option<i32>,
    pub is_active: bool,
    pub lat: f64,
    pub long: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryView {
    pub id: i32,
    pub name: String,
    pub country_code_two: String,
    pub country_code_three: String,
    pub mobile_code: i32,
    pub continent_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StorageBackendInfo {
    pub storage_type: String,
}
