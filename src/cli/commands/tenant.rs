use crate::cli::context::AppContext;
use crate::cli::parser::{Commands, TenantAction};
use crate::config::Config;
use crate::core::tenant::{SwitchOutcome, TenantSwitcher, branding};
use crate::device::shell::CliShell;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{GREEN, GREY, RESET, paint};
use crate::utils::formatting::bold;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Tenant { action } = cmd else {
        return Ok(());
    };

    let ctx = AppContext::open(cfg)?;
    ctx.session.require_user()?;
    let shell = CliShell;
    let switcher = TenantSwitcher::new(&ctx.api, &ctx.session, &shell);

    match action {
        TenantAction::List => {
            let active = ctx.session.active_tenant_id()?;
            let tenants = switcher.tenants()?;
            if tenants.is_empty() {
                warning("You do not belong to any organization.");
                return Ok(());
            }
            let mut table = Table::new(["", "ID", "Organization", "State"]);
            for t in &tenants {
                let state = if Some(t.id) == active {
                    paint("Current", GREEN)
                } else if !t.is_active {
                    format!("{GREY}Inactive{RESET}")
                } else {
                    String::new()
                };
                table.add_row(vec![bold(&t.initials()), t.id.to_string(), t.name.clone(), state]);
            }
            print!("{}", table.render());
        }
        TenantAction::Switch { id } => match switcher.switch_by_id(*id)? {
            SwitchOutcome::Switched { branding, .. } => {
                let name = branding
                    .map(|b| b.tenant_name)
                    .unwrap_or_else(|| format!("organization {id}"));
                success(format!("Switched to {name}."));
            }
            SwitchOutcome::AlreadyActive => info(format!("Organization {id} is already active.")),
            SwitchOutcome::InFlight => warning("A switch is already in progress."),
        },
        TenantAction::Current => {
            let context = ctx.session.tenant_context()?;
            let b = branding(&ctx.api, &ctx.session)?;
            println!("{}", bold(&b.tenant_name));
            match context.active_tenant_id {
                Some(id) => println!("  id  : {id}"),
                None => println!("  id  : {GREY}--{RESET}"),
            }
            if let Some(logo) = &b.logo_url {
                println!("  logo: {logo}");
            }
        }
    }

    Ok(())
}
