use hrdesk::core::tenant::{SwitchOutcome, TenantSwitcher, branding};
use hrdesk::errors::AppError;
use hrdesk::models::tenant::TenantBranding;
use hrdesk::models::user::{LoginResponse, SelectTenantResponse};
use std::sync::atomic::Ordering;
use std::sync::{Mutex, mpsc};
use std::thread;

mod common;
use common::{CountingShell, FakeTenants, signed_in_session, tenant};

fn org_tenants() -> Vec<hrdesk::models::tenant::Tenant> {
    vec![
        tenant(1, "Acme Corp", true),
        tenant(2, "Dormant Ltd", false),
        tenant(3, "Globex", true),
    ]
}

fn selected(tenant_id: i64, token: &str) -> SelectTenantResponse {
    SelectTenantResponse {
        success: true,
        data: Some(LoginResponse {
            id: 42,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            token: token.into(),
            current_tenant_id: Some(tenant_id),
            ..LoginResponse::default()
        }),
        message: None,
    }
}

#[test]
fn test_current_tenant_is_a_no_op() {
    let session = signed_in_session(Some(1));
    let api = FakeTenants::new(org_tenants());
    let shell = CountingShell::default();
    let switcher = TenantSwitcher::new(&api, &session, &shell);
    let tag = session.tag();

    let outcome = switcher.switch(&tenant(1, "Acme Corp", true)).unwrap();

    assert_eq!(outcome, SwitchOutcome::AlreadyActive);
    assert!(api.calls().is_empty());
    assert_eq!(shell.reloads.load(Ordering::SeqCst), 0);
    assert!(session.is_current(tag));
}

#[test]
fn test_switch_by_current_id_makes_no_calls() {
    let session = signed_in_session(Some(1));
    let api = FakeTenants::new(org_tenants());
    let shell = CountingShell::default();
    let switcher = TenantSwitcher::new(&api, &session, &shell);
    let tag = session.tag();

    let outcome = switcher.switch_by_id(1).unwrap();

    assert_eq!(outcome, SwitchOutcome::AlreadyActive);
    assert!(api.calls().is_empty());
    assert_eq!(shell.reloads.load(Ordering::SeqCst), 0);
    assert!(session.is_current(tag));
}

#[test]
fn test_inactive_tenant_is_rejected_without_request() {
    let session = signed_in_session(Some(1));
    let api = FakeTenants::new(org_tenants());
    let shell = CountingShell::default();
    let switcher = TenantSwitcher::new(&api, &session, &shell);

    let err = switcher.switch(&tenant(2, "Dormant Ltd", false)).unwrap_err();

    assert!(matches!(err, AppError::InactiveTenant(2)));
    assert!(api.calls().is_empty());
    assert_eq!(session.auth_token().unwrap().as_deref(), Some("tok-initial"));
    assert!(!switcher.is_switching());
}

#[test]
fn test_switch_persists_token_branding_and_reloads() {
    let session = signed_in_session(Some(1));
    let mut api = FakeTenants::new(org_tenants());
    *api.select.lock().unwrap() = Some(selected(3, "tok-globex"));
    api.branding = Some(TenantBranding {
        logo_url: Some("https://cdn.example.com/globex.png".into()),
        tenant_name: "Globex".into(),
    });
    let shell = CountingShell::default();
    let switcher = TenantSwitcher::new(&api, &session, &shell);
    let before = session.tag();

    let outcome = switcher.switch_by_id(3).unwrap();

    assert!(matches!(outcome, SwitchOutcome::Switched { tenant_id: 3, .. }));
    assert_eq!(api.calls(), vec!["list", "select:3", "details"]);
    assert_eq!(session.auth_token().unwrap().as_deref(), Some("tok-globex"));
    assert_eq!(session.active_tenant_id().unwrap(), Some(3));
    assert_eq!(session.branding().unwrap().unwrap().tenant_name, "Globex");
    assert_eq!(shell.reloads.load(Ordering::SeqCst), 1);
    assert!(!session.is_current(before));
    assert!(!switcher.is_switching());
}

#[test]
fn test_empty_token_keeps_existing_one() {
    let session = signed_in_session(Some(1));
    let api = FakeTenants::new(org_tenants());
    *api.select.lock().unwrap() = Some(selected(3, ""));
    let shell = CountingShell::default();
    let switcher = TenantSwitcher::new(&api, &session, &shell);

    let outcome = switcher.switch(&tenant(3, "Globex", true)).unwrap();

    assert_eq!(
        outcome,
        SwitchOutcome::Switched {
            tenant_id: 3,
            branding: None
        }
    );
    assert_eq!(session.auth_token().unwrap().as_deref(), Some("tok-initial"));
    assert_eq!(session.active_tenant_id().unwrap(), Some(3));
    // branding fetch failed: cache stays empty
    assert_eq!(session.branding().unwrap(), None);
}

#[test]
fn test_rejected_switch_leaves_session_untouched() {
    let session = signed_in_session(Some(1));
    let api = FakeTenants::new(org_tenants());
    *api.select.lock().unwrap() = Some(SelectTenantResponse {
        success: false,
        data: None,
        message: Some("Not a member".into()),
    });
    let shell = CountingShell::default();
    let switcher = TenantSwitcher::new(&api, &session, &shell);

    let err = switcher.switch(&tenant(3, "Globex", true)).unwrap_err();

    match err {
        AppError::Api { message, .. } => assert_eq!(message, "Not a member"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(session.auth_token().unwrap().as_deref(), Some("tok-initial"));
    assert_eq!(session.active_tenant_id().unwrap(), Some(1));
    assert_eq!(shell.reloads.load(Ordering::SeqCst), 0);
    assert!(!switcher.is_switching());
}

#[test]
fn test_unknown_tenant_id() {
    let session = signed_in_session(Some(1));
    let api = FakeTenants::new(org_tenants());
    let shell = CountingShell::default();
    let switcher = TenantSwitcher::new(&api, &session, &shell);

    assert!(matches!(
        switcher.switch_by_id(77),
        Err(AppError::UnknownTenant(77))
    ));
}

#[test]
fn test_tenants_listed_active_first() {
    let session = signed_in_session(Some(1));
    let api = FakeTenants::new(org_tenants());
    let shell = CountingShell::default();
    let switcher = TenantSwitcher::new(&api, &session, &shell);

    let ids: Vec<i64> = switcher.tenants().unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3, 2]);
}

#[test]
fn test_second_switch_while_in_flight_is_ignored() {
    let session = signed_in_session(Some(1));
    let (entered_tx, entered_rx) = mpsc::channel::<()>();
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let entered_tx = Mutex::new(entered_tx);
    let release_rx = Mutex::new(release_rx);

    let mut api = FakeTenants::new(org_tenants());
    *api.select.lock().unwrap() = Some(selected(3, "tok-globex"));
    api.during_select = Some(Box::new(move || {
        entered_tx.lock().unwrap().send(()).unwrap();
        release_rx.lock().unwrap().recv().unwrap();
    }));
    let shell = CountingShell::default();
    let switcher = TenantSwitcher::new(&api, &session, &shell);
    let globex = tenant(3, "Globex", true);

    thread::scope(|s| {
        let first = s.spawn(|| switcher.switch(&globex));

        entered_rx.recv().unwrap();
        assert!(switcher.is_switching());
        assert_eq!(switcher.switch(&globex).unwrap(), SwitchOutcome::InFlight);

        release_tx.send(()).unwrap();
        let outcome = first.join().unwrap().unwrap();
        assert!(matches!(outcome, SwitchOutcome::Switched { tenant_id: 3, .. }));
    });

    let selects = api.calls().iter().filter(|c| c.starts_with("select")).count();
    assert_eq!(selects, 1);
    assert_eq!(shell.reloads.load(Ordering::SeqCst), 1);
}

#[test]
fn test_branding_is_cached_after_first_fetch() {
    let session = signed_in_session(Some(1));
    let mut api = FakeTenants::new(org_tenants());
    api.branding = Some(TenantBranding {
        logo_url: None,
        tenant_name: "Acme Corp".into(),
    });

    assert_eq!(branding(&api, &session).unwrap().tenant_name, "Acme Corp");
    assert_eq!(branding(&api, &session).unwrap().tenant_name, "Acme Corp");
    assert_eq!(api.calls(), vec!["details"]);
}

#[test]
fn test_initials_badge() {
    assert_eq!(tenant(1, "acme corp", true).initials(), "AC");
    assert_eq!(tenant(1, "42", true).initials(), "??");
}
