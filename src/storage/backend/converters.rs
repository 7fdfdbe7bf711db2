use super::query::AirportLookupRow;
use crate::storage::models::{AirportAddress, AirportView, CityView, CountryView};

/// 将联表查询行投影为 AirportView
///
/// 国家经由城市解析：没有城市时国家必为空。city.country_id 直接取
/// 城市行的外键原值，即使国家行缺失也照常返回。
pub(super) fn row_to_airport_view(row: AirportLookupRow) -> AirportView {
    let AirportLookupRow {
        id,
        icao_code,
        iata_code,
        name,
        kind,
        latitude_deg,
        longitude_deg,
        elevation_ft,
        city_id,
        city_name,
        city_country_id,
        city_is_active,
        city_lat,
        city_long,
        country_id,
        country_name,
        country_code_two,
        country_code_three,
        country_mobile_code,
        country_continent_id,
    } = row;

    let city = city_id.map(|id| CityView {
        id,
        name: city_name.unwrap_or_default(),
        country_id: city_country_id,
        is_active: city_is_active.unwrap_or(false),
        lat: city_lat.unwrap_or(0.0),
        long: city_long.unwrap_or(0.0),
    });

    let country = city.as_ref().and(country_id).map(|id| CountryView {
        id,
        name: country_name.unwrap_or_default(),
        country_code_two: country_code_two.unwrap_or_default(),
        country_code_three: country_code_three.unwrap_or_default(),
        mobile_code: country_mobile_code.unwrap_or(0),
        continent_id: country_continent_id.unwrap_or(0),
    });

    AirportView {
        id,
        icao_code,
        iata_code,
        name,
        kind,
        latitude_deg,
        longitude_deg,
        elevation_ft,
        address: AirportAddress { city, country },
    }
}
