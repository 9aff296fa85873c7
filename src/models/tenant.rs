use serde::{Deserialize, Serialize};

/// An organization the user belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
}

impl Tenant {
    /// Two-letter badge from the alphabetic characters of the name.
    pub fn initials(&self) -> String {
        let letters: String = self
            .name
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .take(2)
            .collect();
        if letters.is_empty() {
            "??".to_string()
        } else {
            letters.to_uppercase()
        }
    }
}

/// Cached tenant branding (`tenantLogo` / `tenantName`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantBranding {
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub tenant_name: String,
}

/// Active organization, as carried by the session context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TenantContext {
    pub active_tenant_id: Option<i64>,
    pub auth_token: Option<String>,
    pub branding: Option<TenantBranding>,
}
