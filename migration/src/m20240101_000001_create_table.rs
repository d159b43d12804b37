use models::domains::{scores, users};
use sea_orm_migration::prelude::*;

const SCORES_LOOKUP_INDEX: &str = "idx-scores-user_id-game_name-date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(users::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(users::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(users::Column::Username)
                            .string_len(80)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(users::Column::Email)
                            .string_len(120)
                            .null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(users::Column::Passhash).string().not_null())
                    .col(
                        ColumnDef::new(users::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(scores::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(scores::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(scores::Column::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(scores::Column::GameName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(scores::Column::Value).integer().not_null())
                    .col(ColumnDef::new(scores::Column::Date).date().not_null())
                    .col(
                        ColumnDef::new(scores::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-scores-user_id")
                            .from(scores::Entity, scores::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Plain index: one row per (user, game, date) is kept by the upsert logic.
        manager
            .create_index(
                Index::create()
                    .name(SCORES_LOOKUP_INDEX)
                    .table(scores::Entity)
                    .col(scores::Column::UserId)
                    .col(scores::Column::GameName)
                    .col(scores::Column::Date)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(SCORES_LOOKUP_INDEX)
                    .table(scores::Entity)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(scores::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(users::Entity).to_owned())
            .await?;

        Ok(())
    }
}
