use crate::api::ApiClient;
use crate::errors::AppResult;
use crate::session::SessionContext;
use std::fs;
use std::path::{Path, PathBuf};

pub fn payslip_file_name(month: u32, year: i32) -> String {
    format!("Payslip-{year}-{month:02}.pdf")
}

/// Download the payslip PDF for `month`/`year` into `dir`.
pub fn download(
    api: &ApiClient,
    session: &SessionContext,
    month: u32,
    year: i32,
    dir: &Path,
) -> AppResult<PathBuf> {
    let user = session.require_user()?;
    let bytes = api.payslip_pdf(month, year, user.id)?;
    if !bytes.starts_with(b"%PDF") {
        tracing::warn!(len = bytes.len(), "payslip download does not look like a PDF");
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(payslip_file_name(month, year));
    fs::write(&path, &bytes)?;
    session.audit(
        "payslip_download",
        &format!("{year}-{month:02}"),
        &path.to_string_lossy(),
    );
    Ok(path)
}
