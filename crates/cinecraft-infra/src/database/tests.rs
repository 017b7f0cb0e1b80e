#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbBackend, MockDatabase, MockExecResult, QueryTrait, Value};
    use uuid::Uuid;

    use cinecraft_core::domain::{Collaboration, Job, JobStatus};
    use cinecraft_core::ports::{
        BaseRepository, CollaborationRepository, EventFilter, JobFilter, LedgerError,
        ParticipationLedger,
    };

    use crate::database::entity::{
        collaboration, collaboration_participant, event, event_registration, job, job_application,
        post, post_like, user,
    };
    use crate::database::ledger::PostgresParticipationLedger;
    use crate::database::postgres_repo::{PostgresCollaborationRepository, PostgresJobRepository};
    use crate::database::query::{event_filter_condition, job_filter_condition};

    fn user_model(primary_craft: &str) -> user::Model {
        let now = Utc::now();
        user::Model {
            id: Uuid::new_v4(),
            email: "mira@example.com".to_owned(),
            password_hash: "argon2-hash".to_owned(),
            name: "Mira Holt".to_owned(),
            username: "mira".to_owned(),
            primary_craft: primary_craft.to_owned(),
            experience_level: "Senior".to_owned(),
            bio: None,
            location: None,
            skills: vec![],
            portfolio_url: None,
            avatar_url: None,
            verified: false,
            is_profile_complete: true,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn post_model(likes_count: i32) -> post::Model {
        post::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            content: "Wrapped the night shoot".to_owned(),
            media_urls: vec![],
            media_types: vec![],
            project_title: None,
            craft_tags: vec![],
            location: None,
            collaboration_open: false,
            visibility: "public".to_owned(),
            likes_count,
            comments_count: 0,
            shares_count: 0,
            created_at: Utc::now().into(),
        }
    }

    fn job_model(status: &str) -> job::Model {
        let now = Utc::now();
        job::Model {
            id: Uuid::new_v4(),
            posted_by: Uuid::new_v4(),
            title: "Gaffer for indie feature".to_owned(),
            description: "Three week shoot in Austin".to_owned(),
            craft_required: "Gaffer".to_owned(),
            additional_crafts: vec![],
            experience_level: "Mid".to_owned(),
            job_type: "Contract".to_owned(),
            location: Some("Austin, TX".to_owned()),
            remote_allowed: false,
            budget_min: Some(3000),
            budget_max: Some(5000),
            currency: "USD".to_owned(),
            deadline: None,
            status: status.to_owned(),
            applications_count: 0,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn collaboration_model(
        status: &str,
        max_collaborators: Option<i32>,
        current_collaborators: i32,
    ) -> collaboration::Model {
        collaboration::Model {
            id: Uuid::new_v4(),
            creator_id: Uuid::new_v4(),
            title: "Anthology horror short".to_owned(),
            description: "Looking for crew".to_owned(),
            project_type: Some("Short film".to_owned()),
            needed_crafts: vec!["Editor".to_owned(), "Sound Designer".to_owned()],
            timeline: None,
            budget_range: None,
            location: None,
            remote_allowed: true,
            status: status.to_owned(),
            max_collaborators,
            current_collaborators,
            created_at: Utc::now().into(),
        }
    }

    fn event_model(max_attendees: Option<i32>) -> event::Model {
        event::Model {
            id: Uuid::new_v4(),
            organizer_id: Uuid::new_v4(),
            title: "Cinematography meetup".to_owned(),
            description: "Lens talk and networking".to_owned(),
            event_type: "networking".to_owned(),
            date: Utc::now().date_naive(),
            time: chrono::NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            location: Some("Los Angeles".to_owned()),
            is_virtual: false,
            max_attendees,
            price: None,
            craft_focus: vec!["Cinematographer".to_owned()],
            created_at: Utc::now().into(),
        }
    }

    fn like_row(post_id: Uuid, user_id: Uuid) -> post_like::Model {
        post_like::Model {
            id: Uuid::new_v4(),
            post_id,
            user_id,
            created_at: Utc::now().into(),
        }
    }

    fn exec_ok() -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        let mut row = BTreeMap::new();
        row.insert("num_items", Value::BigInt(Some(n)));
        row
    }

    // ---------- entity store ----------

    #[tokio::test]
    async fn test_find_job_by_id() {
        let model = job_model("open");
        let job_id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model]])
            .into_connection();

        let repo = PostgresJobRepository::new(db);

        let result: Option<Job> = repo.find_by_id(job_id).await.unwrap();

        let found = result.unwrap();
        assert_eq!(found.id, job_id);
        assert_eq!(found.status, JobStatus::Open);
        assert_eq!(found.title, "Gaffer for indie feature");
    }

    #[tokio::test]
    async fn test_create_collaboration_seeds_creator_participant() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_ok(), exec_ok()])
            .into_connection();

        let repo = PostgresCollaborationRepository::new(db);
        let collab = Collaboration::new(
            Uuid::new_v4(),
            "Doc series".to_owned(),
            "Episodic documentary".to_owned(),
            vec!["Editor".to_owned()],
        );

        let created = repo.create_with_creator(collab.clone()).await.unwrap();

        assert_eq!(created.id, collab.id);
        assert_eq!(created.current_collaborators, 1);
    }

    // ---------- participation ledger: likes ----------

    #[tokio::test]
    async fn test_toggle_like_inserts_and_increments() {
        let parent = post_model(0);
        let post_id = parent.id;
        let viewer = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![parent]])
            .append_query_results([Vec::<post_like::Model>::new()])
            .append_exec_results([exec_ok(), exec_ok()])
            .into_connection();

        let ledger = PostgresParticipationLedger::new(db);

        let outcome = ledger.toggle_like(post_id, viewer).await.unwrap();

        assert!(outcome.liked);
        assert_eq!(outcome.likes_count, 1);
    }

    #[tokio::test]
    async fn test_toggle_like_removes_and_decrements() {
        let parent = post_model(1);
        let post_id = parent.id;
        let viewer = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![parent]])
            .append_query_results([vec![like_row(post_id, viewer)]])
            .append_exec_results([exec_ok(), exec_ok()])
            .into_connection();

        let ledger = PostgresParticipationLedger::new(db);

        let outcome = ledger.toggle_like(post_id, viewer).await.unwrap();

        assert!(!outcome.liked);
        assert_eq!(outcome.likes_count, 0);
    }

    #[tokio::test]
    async fn test_toggle_like_is_symmetric_across_calls() {
        let viewer = Uuid::new_v4();
        let before = post_model(0);
        let post_id = before.id;
        let mut after = before.clone();
        after.likes_count = 1;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // First call: no existing like.
            .append_query_results([vec![before]])
            .append_query_results([Vec::<post_like::Model>::new()])
            // Second call: the like from the first call is present.
            .append_query_results([vec![after]])
            .append_query_results([vec![like_row(post_id, viewer)]])
            .append_exec_results([exec_ok(), exec_ok(), exec_ok(), exec_ok()])
            .into_connection();

        let ledger = PostgresParticipationLedger::new(db);

        let first = ledger.toggle_like(post_id, viewer).await.unwrap();
        assert!(first.liked);
        assert_eq!(first.likes_count, 1);

        let second = ledger.toggle_like(post_id, viewer).await.unwrap();
        assert!(!second.liked);
        assert_eq!(second.likes_count, 0);
    }

    #[tokio::test]
    async fn test_toggle_like_missing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection();

        let ledger = PostgresParticipationLedger::new(db);

        let result = ledger.toggle_like(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), LedgerError::ParentMissing));
    }

    // ---------- participation ledger: job applications ----------

    #[tokio::test]
    async fn test_apply_records_one_application() {
        let parent = job_model("open");
        let job_id = parent.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![parent]])
            .append_query_results([Vec::<job_application::Model>::new()])
            .append_exec_results([exec_ok(), exec_ok()])
            .into_connection();

        let ledger = PostgresParticipationLedger::new(db);

        let application_id = ledger.apply_to_job(job_id, Uuid::new_v4()).await.unwrap();

        assert!(!application_id.is_nil());
    }

    #[tokio::test]
    async fn test_second_application_is_rejected_without_increment() {
        let parent = job_model("open");
        let job_id = parent.id;
        let applicant = Uuid::new_v4();

        let existing = job_application::Model {
            id: Uuid::new_v4(),
            job_id,
            applicant_id: applicant,
            created_at: Utc::now().into(),
        };

        // No exec results appended: a second increment would fail the mock.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![parent]])
            .append_query_results([vec![existing]])
            .into_connection();

        let ledger = PostgresParticipationLedger::new(db);

        let result = ledger.apply_to_job(job_id, applicant).await;

        assert!(matches!(result.unwrap_err(), LedgerError::AlreadyApplied));
    }

    #[tokio::test]
    async fn test_apply_to_closed_job_rejected() {
        let parent = job_model("closed");
        let job_id = parent.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![parent]])
            .append_query_results([Vec::<job_application::Model>::new()])
            .into_connection();

        let ledger = PostgresParticipationLedger::new(db);

        let result = ledger.apply_to_job(job_id, Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), LedgerError::JobNotOpen));
    }

    // ---------- participation ledger: collaboration joins ----------

    #[tokio::test]
    async fn test_join_assigns_primary_craft_as_role() {
        let parent = collaboration_model("open", Some(4), 2);
        let collab_id = parent.id;
        let actor = user_model("Sound Designer");
        let actor_id = actor.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![parent]])
            .append_query_results([Vec::<collaboration_participant::Model>::new()])
            .append_query_results([vec![actor]])
            .append_exec_results([exec_ok(), exec_ok()])
            .into_connection();

        let ledger = PostgresParticipationLedger::new(db);

        let participant_id = ledger.join_collaboration(collab_id, actor_id).await.unwrap();

        assert!(!participant_id.is_nil());
    }

    #[tokio::test]
    async fn test_join_full_collaboration_rejected() {
        // Two of two seats taken (creator counted): the third joiner must
        // see CollaborationFull and no write may happen.
        let parent = collaboration_model("open", Some(2), 2);
        let collab_id = parent.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![parent]])
            .append_query_results([Vec::<collaboration_participant::Model>::new()])
            .into_connection();

        let ledger = PostgresParticipationLedger::new(db);

        let result = ledger.join_collaboration(collab_id, Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), LedgerError::CollaborationFull));
    }

    #[tokio::test]
    async fn test_join_closed_collaboration_rejected() {
        let parent = collaboration_model("completed", None, 3);
        let collab_id = parent.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![parent]])
            .append_query_results([Vec::<collaboration_participant::Model>::new()])
            .into_connection();

        let ledger = PostgresParticipationLedger::new(db);

        let result = ledger.join_collaboration(collab_id, Uuid::new_v4()).await;

        assert!(matches!(
            result.unwrap_err(),
            LedgerError::CollaborationNotOpen
        ));
    }

    #[tokio::test]
    async fn test_rejoin_rejected_before_capacity() {
        let parent = collaboration_model("open", Some(2), 2);
        let collab_id = parent.id;
        let actor_id = Uuid::new_v4();

        let existing = collaboration_participant::Model {
            id: Uuid::new_v4(),
            collaboration_id: collab_id,
            user_id: actor_id,
            craft_role: "Editor".to_owned(),
            status: "accepted".to_owned(),
            created_at: Utc::now().into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![parent]])
            .append_query_results([vec![existing]])
            .into_connection();

        let ledger = PostgresParticipationLedger::new(db);

        let result = ledger.join_collaboration(collab_id, actor_id).await;

        assert!(matches!(
            result.unwrap_err(),
            LedgerError::AlreadyParticipating
        ));
    }

    // ---------- participation ledger: event registrations ----------

    #[tokio::test]
    async fn test_register_counts_ledger_under_capacity() {
        let parent = event_model(Some(50));
        let event_id = parent.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![parent]])
            .append_query_results([Vec::<event_registration::Model>::new()])
            .append_query_results([vec![count_row(3)]])
            .append_exec_results([exec_ok()])
            .into_connection();

        let ledger = PostgresParticipationLedger::new(db);

        ledger
            .register_for_event(event_id, Uuid::new_v4())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_register_full_event_rejected() {
        let parent = event_model(Some(2));
        let event_id = parent.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![parent]])
            .append_query_results([Vec::<event_registration::Model>::new()])
            .append_query_results([vec![count_row(2)]])
            .into_connection();

        let ledger = PostgresParticipationLedger::new(db);

        let result = ledger.register_for_event(event_id, Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), LedgerError::EventFull));
    }

    #[tokio::test]
    async fn test_register_twice_rejected() {
        let parent = event_model(Some(50));
        let event_id = parent.id;
        let attendee = Uuid::new_v4();

        let existing = event_registration::Model {
            id: Uuid::new_v4(),
            event_id,
            user_id: attendee,
            created_at: Utc::now().into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![parent]])
            .append_query_results([vec![existing]])
            .into_connection();

        let ledger = PostgresParticipationLedger::new(db);

        let result = ledger.register_for_event(event_id, attendee).await;

        assert!(matches!(result.unwrap_err(), LedgerError::AlreadyRegistered));
    }

    #[tokio::test]
    async fn test_uncapped_event_skips_count() {
        let parent = event_model(None);
        let event_id = parent.id;

        // Only the parent lock and the uniqueness probe are queried; no
        // count result is appended.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![parent]])
            .append_query_results([Vec::<event_registration::Model>::new()])
            .append_exec_results([exec_ok()])
            .into_connection();

        let ledger = PostgresParticipationLedger::new(db);

        ledger
            .register_for_event(event_id, Uuid::new_v4())
            .await
            .unwrap();
    }

    // ---------- filter conditions ----------

    #[test]
    fn test_job_filter_defaults_to_open_only() {
        let sql = job::Entity::find()
            .filter(job_filter_condition(&JobFilter::default()))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""jobs"."status" = 'open'"#));
        assert!(!sql.contains("ILIKE"));
    }

    #[test]
    fn test_job_filter_budget_max_keeps_unbounded_minimums() {
        // A budget_max filter of 1800 must keep (1000, 2000) and (null,
        // 1500) shaped jobs: budget_min absent counts as unconstrained.
        let filter = JobFilter {
            budget_max: Some(1800),
            ..Default::default()
        };
        let sql = job::Entity::find()
            .filter(job_filter_condition(&filter))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""jobs"."budget_min" IS NULL"#));
        assert!(sql.contains(r#""jobs"."budget_min" <= 1800"#));
        assert!(!sql.contains("budget_max"));
    }

    #[test]
    fn test_job_filter_budget_min_checks_job_maximum() {
        let filter = JobFilter {
            budget_min: Some(1800),
            ..Default::default()
        };
        let sql = job::Entity::find()
            .filter(job_filter_condition(&filter))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""jobs"."budget_max" IS NULL"#));
        assert!(sql.contains(r#""jobs"."budget_max" >= 1800"#));
    }

    #[test]
    fn test_job_filter_search_is_case_insensitive_over_title_and_description() {
        let filter = JobFilter {
            search: Some("grade".to_owned()),
            remote_only: true,
            ..Default::default()
        };
        let sql = job::Entity::find()
            .filter(job_filter_condition(&filter))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""jobs"."title" ILIKE '%grade%'"#));
        assert!(sql.contains(r#""jobs"."description" ILIKE '%grade%'"#));
        assert!(sql.contains(r#""jobs"."remote_allowed" = TRUE"#));
    }

    #[test]
    fn test_event_filter_craft_membership_and_upcoming() {
        let filter = EventFilter {
            event_type: None,
            craft: Some("Editor".to_owned()),
            upcoming: true,
        };
        let sql = event::Entity::find()
            .filter(event_filter_condition(&filter))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains("= ANY"));
        assert!(sql.contains(r#""events"."date" >="#));
    }
}
