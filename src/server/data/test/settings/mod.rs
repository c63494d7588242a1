use crate::server::{
    data::settings::{AdminUserRecord, AdminUserRepository, RoleRepository},
    model::settings::RoleParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests that account reads carry the role name.
///
/// Expected: Ok with role joined on get_by_id
#[tokio::test]
async fn joins_role_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let role = RoleRepository::new(db)
        .create(RoleParams {
            name: "moderator".to_string(),
            permissions: serde_json::json!({ "listings": ["read", "update"] }),
        })
        .await?;

    let repo = AdminUserRepository::new(db);
    let user = repo
        .create(
            AdminUserRecord {
                username: "Merdan".to_string(),
                login: "merdan".to_string(),
                role_id: role.id,
            },
            "hash".to_string(),
        )
        .await?;

    let found = repo.get_by_id(user.id).await?.unwrap();
    assert_eq!(found.role_name.as_deref(), Some("moderator"));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that an update without a new hash keeps the stored password.
///
/// Expected: Ok with the original hash
#[tokio::test]
async fn update_keeps_hash_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::settings::create_role(db).await?;
    let user = factory::settings::create_admin_user(db, role.id).await?;

    let repo = AdminUserRepository::new(db);
    repo.update(
        user.id,
        AdminUserRecord {
            username: "Renamed".to_string(),
            login: user.login.clone(),
            role_id: role.id,
        },
        None,
    )
    .await?;

    let stored = repo.find_by_login(&user.login).await?.unwrap();
    assert_eq!(stored.username, "Renamed");
    assert_eq!(stored.password_hash, user.password_hash);

    Ok(())
}
