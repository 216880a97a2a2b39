use workout_core::db::open_db_in_memory;
use workout_core::repo::athlete_repo::{AthleteRepository, SqliteAthleteRepository};
use workout_core::repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
use workout_core::repo::training_center_repo::{
    SqliteTrainingCenterRepository, TrainingCenterRepository,
};
use workout_core::{
    create_athlete, create_training_center, AthleteFilter, AthleteService, CategoryIn,
    CategoryService, NewAthlete, Session, SessionFactory, Sex, SqliteController,
    SqliteSessionFactory, StoreError, TrainingCenterIn, TrainingCenterService,
};

fn new_athlete(name: &str, taxpayer_id: &str) -> NewAthlete {
    NewAthlete {
        name: name.to_string(),
        taxpayer_id: taxpayer_id.to_string(),
        age: 28,
        weight: 62.3,
        height: 1.65,
        sex: Sex::Female,
        category_name: "RX".to_string(),
        training_center_name: "CT Champions".to_string(),
    }
}

#[test]
fn category_names_are_unique() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    repo.create_category(&CategoryIn::new("RX").unwrap())
        .unwrap();
    let err = repo
        .create_category(&CategoryIn::new("RX").unwrap())
        .unwrap_err();

    assert!(matches!(
        err,
        StoreError::Duplicate {
            entity: "category",
            ref key,
        } if key == "RX"
    ));
    assert_eq!(repo.list_categories().unwrap().len(), 1);
}

#[test]
fn repositories_reject_invalid_input_before_writing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTrainingCenterRepository::new(&conn);
    let input = TrainingCenterIn {
        name: "CT King".to_string(),
        address: String::new(),
        owner: "Marcos Silva".to_string(),
    };

    let err = repo.create_training_center(&input).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(repo.list_training_centers().unwrap().is_empty());
}

#[test]
fn athlete_rows_resolve_names_and_filter_exactly() {
    let conn = open_db_in_memory().unwrap();
    SqliteCategoryRepository::new(&conn)
        .create_category(&CategoryIn::new("RX").unwrap())
        .unwrap();
    SqliteTrainingCenterRepository::new(&conn)
        .create_training_center(
            &TrainingCenterIn::new("CT Champions", "Av. Paulista, 1000", "Ana Paula Costa")
                .unwrap(),
        )
        .unwrap();

    let repo = SqliteAthleteRepository::new(&conn);
    let maria = new_athlete("Maria Santos", "98765432109").to_input().unwrap();
    let sofia = new_athlete("Sofia Moreira", "90099900011").to_input().unwrap();
    let created = repo.create_athlete(&maria).unwrap();
    repo.create_athlete(&sofia).unwrap();

    let filtered = repo
        .list_athletes(&AthleteFilter::by_name("Maria Santos"))
        .unwrap();
    assert_eq!(filtered, vec![created]);
    assert_eq!(filtered[0].category.name, "RX");
    assert_eq!(filtered[0].training_center.name, "CT Champions");
    assert_eq!(filtered[0].sex, Sex::Female);

    assert!(repo
        .list_athletes(&AthleteFilter::by_name("Maria"))
        .unwrap()
        .is_empty());
    assert_eq!(repo.list_athletes(&AthleteFilter::default()).unwrap().len(), 2);
}

#[test]
fn duplicate_taxpayer_id_leaves_no_second_row() {
    let conn = open_db_in_memory().unwrap();
    SqliteCategoryRepository::new(&conn)
        .create_category(&CategoryIn::new("RX").unwrap())
        .unwrap();
    SqliteTrainingCenterRepository::new(&conn)
        .create_training_center(
            &TrainingCenterIn::new("CT Champions", "Av. Paulista, 1000", "Ana Paula Costa")
                .unwrap(),
        )
        .unwrap();
    let repo = SqliteAthleteRepository::new(&conn);

    repo.create_athlete(&new_athlete("Maria Santos", "98765432109").to_input().unwrap())
        .unwrap();
    let err = repo
        .create_athlete(&new_athlete("Maria Clone", "98765432109").to_input().unwrap())
        .unwrap_err();

    assert!(matches!(err, StoreError::Duplicate { entity: "athlete", .. }));
    assert_eq!(repo.list_athletes(&AthleteFilter::default()).unwrap().len(), 1);
}

#[tokio::test]
async fn caller_session_is_reused_and_stays_usable() {
    let dir = tempfile::tempdir().unwrap();
    let factory = SqliteSessionFactory::bootstrap(dir.path().join("seed.db")).unwrap();
    let controller = SqliteController;
    let session = factory.open().await.unwrap();

    CategoryService::new(&factory, &controller)
        .with_session(&session)
        .create("RX")
        .await
        .unwrap();
    create_training_center(
        &factory,
        &controller,
        "CT Champions",
        "Av. Paulista, 1000, Bela Vista",
        "Ana Paula Costa",
        Some(&session),
    )
    .await
    .unwrap();
    create_athlete(
        &factory,
        &controller,
        &new_athlete("Maria Santos", "98765432109"),
        Some(&session),
    )
    .await
    .unwrap();

    let athletes = AthleteService::new(&factory, &controller)
        .with_session(&session)
        .get_all(Some("Maria Santos"))
        .await
        .unwrap();
    assert_eq!(athletes.len(), 1);

    let centers = TrainingCenterService::new(&factory, &controller)
        .get_all()
        .await
        .unwrap();
    assert_eq!(centers.len(), 1);

    session.close().await.unwrap();
}

#[tokio::test]
async fn bootstrap_fails_for_unopenable_database_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing_parent = dir.path().join("missing").join("seed.db");

    assert!(SqliteSessionFactory::bootstrap(&missing_parent).is_err());

    let factory = SqliteSessionFactory::new(&missing_parent);
    assert_eq!(factory.db_path(), missing_parent.as_path());
    let err = CategoryService::new(&factory, &SqliteController)
        .create("RX")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Db(_)));
}
