use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREY, RESET};
use crate::utils::date::pretty_date;
use crate::utils::formatting::bold;
use std::io::{self, BufRead, Write};

fn resolve_password(flag: Option<&String>) -> AppResult<String> {
    if let Some(p) = flag {
        return Ok(p.clone());
    }
    if let Ok(p) = std::env::var("HRDESK_PASSWORD") {
        return Ok(p);
    }
    eprint!("Password: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let pw = line.trim_end_matches(['\r', '\n']).to_string();
    if pw.is_empty() {
        return Err(AppError::Validation("password is required".into()));
    }
    Ok(pw)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let ctx = AppContext::open(cfg)?;

    match cmd {
        Commands::Login { email, password } => {
            let password = resolve_password(password.as_ref())?;
            let user = AuthLogic::login(&ctx.api, &ctx.session, email, &password)?;
            success(format!("Signed in as {} ({}).", user.name, user.role));
        }
        Commands::Logout => {
            AuthLogic::logout(&ctx.api, &ctx.session)?;
            success("Signed out.");
        }
        Commands::Whoami => {
            let user = ctx.session.require_user()?;
            println!("{}", bold(&user.display_name()));
            println!("  e-mail      : {}", user.email);
            println!("  role        : {}", user.role);
            if let Some(p) = &user.position {
                println!("  position    : {}", p);
            }
            if let Some(d) = &user.department {
                println!("  department  : {}", d);
            }
            match ctx.session.branding()? {
                Some(b) => println!("  organization: {}", b.tenant_name),
                None => match user.current_tenant_id {
                    Some(id) => println!("  organization: #{id}"),
                    None => println!("  organization: {GREY}--{RESET}"),
                },
            }
        }
        Commands::Profile => {
            let user = ctx.session.require_user()?;
            let profile = ctx.api.user_profile(user.id)?;
            println!("{}", bold(&profile.full_name()));
            let rows = [
                ("employee no.", profile.employee_number.clone()),
                ("e-mail", Some(profile.email.clone())),
                ("phone", profile.phone_number.clone()),
                ("designation", profile.designation.clone()),
                ("department", profile.department_name.clone()),
                ("location", profile.work_location.clone()),
                ("joined", profile.date_of_joining.as_deref().map(pretty_date)),
                ("birthday", profile.date_of_birth.as_deref().map(pretty_date)),
                ("last login", profile.last_login.clone()),
            ];
            for (label, value) in rows {
                match value.filter(|v| !v.trim().is_empty()) {
                    Some(v) => println!("  {:<13}: {}", label, v),
                    None => println!("  {:<13}: {GREY}--{RESET}", label),
                }
            }
        }
        _ => info("Nothing to do."),
    }

    Ok(())
}
