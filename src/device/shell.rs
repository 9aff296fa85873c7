use crate::errors::AppResult;
use crate::session::SessionContext;
use crate::ui::messages::info;

/// Full reload of the application shell after a context change.
pub trait ShellReloader {
    fn reload(&self, session: &SessionContext) -> AppResult<()>;
}

/// CLI shell: cached state lives only in the session store, so a reload
/// invalidates outstanding work and tells the user.
pub struct CliShell;

impl ShellReloader for CliShell {
    fn reload(&self, session: &SessionContext) -> AppResult<()> {
        session.bump_generation();
        info("Session reloaded for the new organization.");
        Ok(())
    }
}
