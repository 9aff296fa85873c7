use hrdesk::db::migrate::applied_versions;
use hrdesk::db::pool::DbPool;
use hrdesk::errors::AppError;
use hrdesk::models::tenant::TenantBranding;
use hrdesk::session::store::{KeyValueStore, MemoryStore, SqliteStore};
use hrdesk::session::{KEY_USER, SessionContext};
use std::sync::Arc;

mod common;
use common::{setup_test_db, signed_in_session, test_user};

#[test]
fn test_kv_roundtrip_and_overwrite() {
    let store = SqliteStore::in_memory().unwrap();
    assert_eq!(store.get("missing").unwrap(), None);

    store.set("auth_token", "abc").unwrap();
    store.set("auth_token", "def").unwrap();
    assert_eq!(store.get("auth_token").unwrap().as_deref(), Some("def"));

    store.remove("auth_token").unwrap();
    assert_eq!(store.get("auth_token").unwrap(), None);
}

#[test]
fn test_store_survives_reopen() {
    let db_path = setup_test_db("store_survives_reopen");
    {
        let store = SqliteStore::open(&db_path).unwrap();
        store.set("tenantName", "Acme Corp").unwrap();
    }
    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(store.get("tenantName").unwrap().as_deref(), Some("Acme Corp"));
}

#[test]
fn test_migrations_apply_once() {
    let db_path = setup_test_db("migrations_apply_once");
    let first = {
        let pool = DbPool::new(&db_path).unwrap();
        applied_versions(&pool.conn).unwrap()
    };
    let pool = DbPool::new(&db_path).unwrap();
    let second = applied_versions(&pool.conn).unwrap();

    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert!(first.iter().any(|v| v.contains("create_kv_store")));
}

#[test]
fn test_login_state_and_clear_auth() {
    let session = signed_in_session(Some(7));
    assert!(session.is_authenticated().unwrap());
    assert_eq!(session.require_user().unwrap(), test_user(Some(7)));
    assert_eq!(session.active_tenant_id().unwrap(), Some(7));

    session.clear_auth().unwrap();
    assert!(!session.is_authenticated().unwrap());
    assert!(matches!(session.require_user(), Err(AppError::NotLoggedIn)));
}

#[test]
fn test_corrupt_user_is_ignored() {
    let store = Arc::new(MemoryStore::new());
    store.set("auth_token", "tok").unwrap();
    store.set(KEY_USER, "{not json").unwrap();
    let session = SessionContext::new(store);

    assert_eq!(session.user().unwrap(), None);
    assert!(matches!(session.require_user(), Err(AppError::NotLoggedIn)));
}

#[test]
fn test_stale_tag_detected_after_context_change() {
    let session = signed_in_session(Some(1));
    let tag = session.tag();
    assert!(session.ensure_current(tag).is_ok());

    session.store_login("tok-2", &test_user(Some(2))).unwrap();
    assert!(!session.is_current(tag));
    assert!(matches!(
        session.ensure_current(tag),
        Err(AppError::StaleContext)
    ));
}

#[test]
fn test_first_launch_marker() {
    let session = SessionContext::new(Arc::new(SqliteStore::in_memory().unwrap()));
    assert!(session.take_first_launch().unwrap());
    assert!(!session.take_first_launch().unwrap());

    session.clear_all().unwrap();
    assert!(!session.take_first_launch().unwrap());
}

#[test]
fn test_clear_all_wipes_session_state() {
    let session = signed_in_session(Some(1));
    session
        .set_branding(&TenantBranding {
            logo_url: None,
            tenant_name: "Acme".into(),
        })
        .unwrap();
    session.set_device_token("push-1").unwrap();

    session.clear_all().unwrap();

    let ctx = session.tenant_context().unwrap();
    assert_eq!(ctx.auth_token, None);
    assert_eq!(ctx.active_tenant_id, None);
    assert_eq!(ctx.branding, None);
    assert_eq!(session.device_token().unwrap(), None);
}

#[test]
fn test_blank_tenant_name_falls_back() {
    let session = signed_in_session(Some(1));
    session
        .set_branding(&TenantBranding {
            logo_url: Some(String::new()),
            tenant_name: " ".into(),
        })
        .unwrap();

    let b = session.branding().unwrap().unwrap();
    assert_eq!(b.tenant_name, "Unknown Tenant");
    assert_eq!(b.logo_url, None);
}

#[test]
fn test_audit_lines_land_in_log_table() {
    let store = Arc::new(SqliteStore::in_memory().unwrap());
    let session = SessionContext::new(store.clone());
    session.audit("punch", "check-in", "Successfully checked in");

    let entries = store
        .with_conn(hrdesk::core::log::LogLogic::entries)
        .unwrap();
    assert!(entries.iter().any(|e| e.operation == "punch"));
}
