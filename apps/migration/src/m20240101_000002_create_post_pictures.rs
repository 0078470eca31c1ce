use sea_orm_migration::prelude::*;

/// Mirror of the remote picture metadata. Nothing populates it yet; pictures
/// are served from the network listing.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostPictures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PostPictures::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PostPictures::Author).string().not_null())
                    .col(ColumnDef::new(PostPictures::Width).integer().not_null())
                    .col(ColumnDef::new(PostPictures::Height).integer().not_null())
                    .col(ColumnDef::new(PostPictures::Url).text().not_null())
                    .col(ColumnDef::new(PostPictures::DownloadUrl).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostPictures::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PostPictures {
    Table,
    Id,
    Author,
    Width,
    Height,
    Url,
    DownloadUrl,
}
