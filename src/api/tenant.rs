use super::{ApiClient, TenantApi};
use crate::errors::AppResult;
use crate::models::api::ApiResponse;
use crate::models::tenant::{Tenant, TenantBranding};
use crate::models::user::SelectTenantResponse;

impl TenantApi for ApiClient {
    fn list_tenants(&self) -> AppResult<Vec<Tenant>> {
        let resp: ApiResponse<Vec<Tenant>> = self.get("/Tenants/user", &[])?;
        Ok(resp.data)
    }

    fn select_tenant(&self, tenant_id: i64) -> AppResult<SelectTenantResponse> {
        self.post(
            &format!("/Account/selectTenant/{tenant_id}"),
            &serde_json::json!({}),
        )
    }

    fn tenant_details(&self) -> AppResult<TenantBranding> {
        let resp: ApiResponse<TenantBranding> = self.get("/Tenants", &[])?;
        Ok(resp.data)
    }
}
