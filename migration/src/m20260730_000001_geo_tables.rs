use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 countries 表
        manager
            .create_table(
                Table::create()
                    .table(Country::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Country::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Country::Name).string().not_null())
                    .col(ColumnDef::new(Country::CountryCodeTwo).string().not_null())
                    .col(
                        ColumnDef::new(Country::CountryCodeThree)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Country::MobileCode).integer().not_null())
                    .col(ColumnDef::new(Country::ContinentId).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建 cities 表（country_id 可空，外部数据源可能先导入城市）
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(City::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(City::Name).string().not_null())
                    .col(ColumnDef::new(City::CountryId).integer().null())
                    .col(ColumnDef::new(City::IsActive).boolean().not_null())
                    .col(ColumnDef::new(City::Lat).double().not_null())
                    .col(ColumnDef::new(City::Long).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cities_country_id")
                            .from(City::Table, City::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建 airports 表（city_id 可空）
        manager
            .create_table(
                Table::create()
                    .table(Airport::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Airport::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Airport::IcaoCode).string().not_null())
                    .col(ColumnDef::new(Airport::IataCode).string().not_null())
                    .col(ColumnDef::new(Airport::Name).string().not_null())
                    .col(ColumnDef::new(Airport::Type).string().not_null())
                    .col(ColumnDef::new(Airport::LatitudeDeg).double().not_null())
                    .col(ColumnDef::new(Airport::LongitudeDeg).double().not_null())
                    .col(ColumnDef::new(Airport::ElevationFt).integer().not_null())
                    .col(ColumnDef::new(Airport::CityId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_airports_city_id")
                            .from(Airport::Table, Airport::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建 IATA 查询索引（非唯一，重复 IATA 码由查询端取第一条）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_airports_iata_code")
                    .table(Airport::Table)
                    .col(Airport::IataCode)
                    .to_owned(),
            )
            .await?;

        // 创建外键联表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_airports_city_id")
                    .table(Airport::Table)
                    .col(Airport::CityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cities_country_id")
                    .table(City::Table)
                    .col(City::CountryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 删除索引
        manager
            .drop_index(Index::drop().name("idx_cities_country_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_airports_city_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_airports_iata_code").to_owned())
            .await?;

        // 删除表（先子表后父表）
        manager
            .drop_table(Table::drop().table(Airport::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Country::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Country {
    #[sea_orm(iden = "countries")]
    Table,
    Id,
    Name,
    CountryCodeTwo,
    CountryCodeThree,
    MobileCode,
    ContinentId,
}

#[derive(DeriveIden)]
enum City {
    #[sea_orm(iden = "cities")]
    Table,
    Id,
    Name,
    CountryId,
    IsActive,
    Lat,
    Long,
}

#[derive(DeriveIden)]
enum Airport {
    #[sea_orm(iden = "airports")]
    Table,
    Id,
    IcaoCode,
    IataCode,
    Name,
    Type,
    LatitudeDeg,
    LongitudeDeg,
    ElevationFt,
    CityId,
}
