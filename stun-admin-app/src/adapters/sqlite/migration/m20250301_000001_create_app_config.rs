use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppConfig::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AppConfig::Namespace).string().not_null())
                    .col(ColumnDef::new(AppConfig::Name).string().not_null())
                    .col(ColumnDef::new(AppConfig::Value).text().not_null())
                    .col(ColumnDef::new(AppConfig::UpdatedAt).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(AppConfig::Namespace)
                            .col(AppConfig::Name),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AppConfig {
    #[sea_orm(iden = "app_config")]
    Table,
    Namespace,
    Name,
    Value,
    UpdatedAt,
}
