use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ========== LOCATIONS ==========
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::Name).string_len(128).not_null())
                    .col(ColumnDef::new(Locations::Latitude).double())
                    .col(ColumnDef::new(Locations::Longitude).double())
                    .col(ColumnDef::new(Locations::Altitude).double())
                    .col(ColumnDef::new(Locations::Description).string_len(256))
                    .to_owned(),
            )
            .await?;

        // ========== SENSORS ==========
        manager
            .create_table(
                Table::create()
                    .table(Sensors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sensors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Sensors::Name)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Sensors::Model).string_len(128).not_null())
                    .col(ColumnDef::new(Sensors::LocationId).integer().unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sensors_location")
                            .from(Sensors::Table, Sensors::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // ========== DEPLOYMENTS ==========
        manager
            .create_table(
                Table::create()
                    .table(Deployments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Deployments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Deployments::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Deployments::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Deployments::Name).string_len(128).not_null())
                    .to_owned(),
            )
            .await?;

        // Join rows disappear with either side
        manager
            .create_table(
                Table::create()
                    .table(SensorDeployments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SensorDeployments::DeploymentId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SensorDeployments::SensorId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(SensorDeployments::DeploymentId)
                            .col(SensorDeployments::SensorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sensor_deployments_deployment")
                            .from(SensorDeployments::Table, SensorDeployments::DeploymentId)
                            .to(Deployments::Table, Deployments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sensor_deployments_sensor")
                            .from(SensorDeployments::Table, SensorDeployments::SensorId)
                            .to(Sensors::Table, Sensors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ========== MEASUREMENTS ==========
        manager
            .create_table(
                Table::create()
                    .table(Measurements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Measurements::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Measurements::SensorId).integer())
                    .col(ColumnDef::new(Measurements::Value).double().not_null())
                    .col(
                        ColumnDef::new(Measurements::Time)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_measurements_sensor")
                            .from(Measurements::Table, Measurements::SensorId)
                            .to(Sensors::Table, Sensors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_measurements_sensor_time")
                    .table(Measurements::Table)
                    .col(Measurements::SensorId)
                    .col(Measurements::Time)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Measurements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SensorDeployments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Deployments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sensors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Locations {
    Table,
    Id,
    Name,
    Latitude,
    Longitude,
    Altitude,
    Description,
}

#[derive(DeriveIden)]
enum Sensors {
    Table,
    Id,
    Name,
    Model,
    LocationId,
}

#[derive(DeriveIden)]
enum Deployments {
    Table,
    Id,
    StartTime,
    EndTime,
    Name,
}

#[derive(DeriveIden)]
enum SensorDeployments {
    Table,
    DeploymentId,
    SensorId,
}

#[derive(DeriveIden)]
enum Measurements {
    Table,
    Id,
    SensorId,
    Value,
    Time,
}
