//! Initial schema: profiles, the four aggregate roots, and the four ledger
//! tables. Every ledger table carries a UNIQUE (parent_id, actor_id) index;
//! that constraint is the database-side backstop for the ledger's
//! uniqueness invariant.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .col(ColumnDef::new(Profiles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Profiles::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Profiles::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Profiles::Name).string().not_null())
                    .col(ColumnDef::new(Profiles::Username).string().not_null().unique_key())
                    .col(ColumnDef::new(Profiles::PrimaryCraft).string().not_null())
                    .col(ColumnDef::new(Profiles::ExperienceLevel).string().not_null())
                    .col(ColumnDef::new(Profiles::Bio).text())
                    .col(ColumnDef::new(Profiles::Location).string())
                    .col(
                        ColumnDef::new(Profiles::Skills)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Profiles::PortfolioUrl).string())
                    .col(ColumnDef::new(Profiles::AvatarUrl).string())
                    .col(
                        ColumnDef::new(Profiles::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Profiles::IsProfileComplete)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Profiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .col(ColumnDef::new(Posts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Posts::UserId).uuid().not_null())
                    .col(ColumnDef::new(Posts::Content).text().not_null())
                    .col(
                        ColumnDef::new(Posts::MediaUrls)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Posts::MediaTypes)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Posts::ProjectTitle).string())
                    .col(
                        ColumnDef::new(Posts::CraftTags)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Posts::Location).string())
                    .col(
                        ColumnDef::new(Posts::CollaborationOpen)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Posts::Visibility)
                            .string()
                            .not_null()
                            .default("public"),
                    )
                    .col(
                        ColumnDef::new(Posts::LikesCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Posts::CommentsCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Posts::SharesCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Posts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-posts-user")
                            .from(Posts::Table, Posts::UserId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .col(ColumnDef::new(Jobs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Jobs::PostedBy).uuid().not_null())
                    .col(ColumnDef::new(Jobs::Title).string().not_null())
                    .col(ColumnDef::new(Jobs::Description).text().not_null())
                    .col(ColumnDef::new(Jobs::CraftRequired).string().not_null())
                    .col(
                        ColumnDef::new(Jobs::AdditionalCrafts)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Jobs::ExperienceLevel).string().not_null())
                    .col(ColumnDef::new(Jobs::JobType).string().not_null())
                    .col(ColumnDef::new(Jobs::Location).string())
                    .col(
                        ColumnDef::new(Jobs::RemoteAllowed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Jobs::BudgetMin).integer())
                    .col(ColumnDef::new(Jobs::BudgetMax).integer())
                    .col(
                        ColumnDef::new(Jobs::Currency)
                            .string()
                            .not_null()
                            .default("USD"),
                    )
                    .col(ColumnDef::new(Jobs::Deadline).date())
                    .col(
                        ColumnDef::new(Jobs::Status)
                            .string()
                            .not_null()
                            .default("open"),
                    )
                    .col(
                        ColumnDef::new(Jobs::ApplicationsCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Jobs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Jobs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-jobs-poster")
                            .from(Jobs::Table, Jobs::PostedBy)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Collaborations::Table)
                    .col(
                        ColumnDef::new(Collaborations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Collaborations::CreatorId).uuid().not_null())
                    .col(ColumnDef::new(Collaborations::Title).string().not_null())
                    .col(ColumnDef::new(Collaborations::Description).text().not_null())
                    .col(ColumnDef::new(Collaborations::ProjectType).string())
                    .col(
                        ColumnDef::new(Collaborations::NeededCrafts)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Collaborations::Timeline).string())
                    .col(ColumnDef::new(Collaborations::BudgetRange).string())
                    .col(ColumnDef::new(Collaborations::Location).string())
                    .col(
                        ColumnDef::new(Collaborations::RemoteAllowed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Collaborations::Status)
                            .string()
                            .not_null()
                            .default("open"),
                    )
                    .col(ColumnDef::new(Collaborations::MaxCollaborators).integer())
                    .col(
                        ColumnDef::new(Collaborations::CurrentCollaborators)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Collaborations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-collaborations-creator")
                            .from(Collaborations::Table, Collaborations::CreatorId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .col(ColumnDef::new(Events::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Events::OrganizerId).uuid().not_null())
                    .col(ColumnDef::new(Events::Title).string().not_null())
                    .col(ColumnDef::new(Events::Description).text().not_null())
                    .col(ColumnDef::new(Events::EventType).string().not_null())
                    .col(ColumnDef::new(Events::Date).date().not_null())
                    .col(ColumnDef::new(Events::Time).time().not_null())
                    .col(ColumnDef::new(Events::Location).string())
                    .col(
                        ColumnDef::new(Events::IsVirtual)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Events::MaxAttendees).integer())
                    .col(ColumnDef::new(Events::Price).double())
                    .col(
                        ColumnDef::new(Events::CraftFocus)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Events::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-events-organizer")
                            .from(Events::Table, Events::OrganizerId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PostLikes::Table)
                    .col(ColumnDef::new(PostLikes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(PostLikes::PostId).uuid().not_null())
                    .col(ColumnDef::new(PostLikes::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(PostLikes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-post-likes-post")
                            .from(PostLikes::Table, PostLikes::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-post-likes-user")
                            .from(PostLikes::Table, PostLikes::UserId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-post-likes-post-user")
                    .table(PostLikes::Table)
                    .col(PostLikes::PostId)
                    .col(PostLikes::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobApplications::Table)
                    .col(
                        ColumnDef::new(JobApplications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobApplications::JobId).uuid().not_null())
                    .col(ColumnDef::new(JobApplications::ApplicantId).uuid().not_null())
                    .col(
                        ColumnDef::new(JobApplications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-job-applications-job")
                            .from(JobApplications::Table, JobApplications::JobId)
                            .to(Jobs::Table, Jobs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-job-applications-applicant")
                            .from(JobApplications::Table, JobApplications::ApplicantId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-job-applications-job-applicant")
                    .table(JobApplications::Table)
                    .col(JobApplications::JobId)
                    .col(JobApplications::ApplicantId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CollaborationParticipants::Table)
                    .col(
                        ColumnDef::new(CollaborationParticipants::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CollaborationParticipants::CollaborationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CollaborationParticipants::UserId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CollaborationParticipants::CraftRole)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CollaborationParticipants::Status)
                            .string()
                            .not_null()
                            .default("accepted"),
                    )
                    .col(
                        ColumnDef::new(CollaborationParticipants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-collaboration-participants-collaboration")
                            .from(
                                CollaborationParticipants::Table,
                                CollaborationParticipants::CollaborationId,
                            )
                            .to(Collaborations::Table, Collaborations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-collaboration-participants-user")
                            .from(
                                CollaborationParticipants::Table,
                                CollaborationParticipants::UserId,
                            )
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-collaboration-participants-collab-user")
                    .table(CollaborationParticipants::Table)
                    .col(CollaborationParticipants::CollaborationId)
                    .col(CollaborationParticipants::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventRegistrations::Table)
                    .col(
                        ColumnDef::new(EventRegistrations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventRegistrations::EventId).uuid().not_null())
                    .col(ColumnDef::new(EventRegistrations::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(EventRegistrations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event-registrations-event")
                            .from(EventRegistrations::Table, EventRegistrations::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event-registrations-user")
                            .from(EventRegistrations::Table, EventRegistrations::UserId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-event-registrations-event-user")
                    .table(EventRegistrations::Table)
                    .col(EventRegistrations::EventId)
                    .col(EventRegistrations::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventRegistrations::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(CollaborationParticipants::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(JobApplications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PostLikes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Collaborations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    Username,
    PrimaryCraft,
    ExperienceLevel,
    Bio,
    Location,
    Skills,
    PortfolioUrl,
    AvatarUrl,
    Verified,
    IsProfileComplete,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    UserId,
    Content,
    MediaUrls,
    MediaTypes,
    ProjectTitle,
    CraftTags,
    Location,
    CollaborationOpen,
    Visibility,
    LikesCount,
    CommentsCount,
    SharesCount,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Jobs {
    Table,
    Id,
    PostedBy,
    Title,
    Description,
    CraftRequired,
    AdditionalCrafts,
    ExperienceLevel,
    JobType,
    Location,
    RemoteAllowed,
    BudgetMin,
    BudgetMax,
    Currency,
    Deadline,
    Status,
    ApplicationsCount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Collaborations {
    Table,
    Id,
    CreatorId,
    Title,
    Description,
    ProjectType,
    NeededCrafts,
    Timeline,
    BudgetRange,
    Location,
    RemoteAllowed,
    Status,
    MaxCollaborators,
    CurrentCollaborators,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    OrganizerId,
    Title,
    Description,
    EventType,
    Date,
    Time,
    Location,
    IsVirtual,
    MaxAttendees,
    Price,
    CraftFocus,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PostLikes {
    Table,
    Id,
    PostId,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum JobApplications {
    Table,
    Id,
    JobId,
    ApplicantId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CollaborationParticipants {
    Table,
    Id,
    CollaborationId,
    UserId,
    CraftRole,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EventRegistrations {
    Table,
    Id,
    EventId,
    UserId,
    CreatedAt,
}
