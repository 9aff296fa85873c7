use crate::cli::context::AppContext;
use crate::cli::parser::{Commands, LeaveAction};
use crate::config::Config;
use crate::core::leave::{LeaveApplication, LeaveLogic};
use crate::errors::AppResult;
use crate::models::leave::{LeaveRequest, LeaveStatus};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{GREY, RESET, colorize_optional, paint};
use crate::utils::date::pretty_date;
use crate::utils::formatting::truncate;
use crate::utils::table::Table;

fn fmt_days(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{:.1}", v)
    }
}

fn status_cell(status: LeaveStatus) -> String {
    paint(&format!("{} {}", status.icon(), status.label()), status.color())
}

fn leave_table(rows: &[(LeaveRequest, LeaveStatus)]) -> Table {
    let mut table = Table::new(["ID", "Date", "Type", "Status", "Reason"]);
    for (leave, status) in rows {
        table.add_row(vec![
            leave.id.map(|i| i.to_string()).unwrap_or_default(),
            pretty_date(leave.display_date()),
            colorize_optional(leave.leave_type_name.as_deref().unwrap_or("--")),
            status_cell(*status),
            truncate(leave.reason.as_deref().unwrap_or(""), 40),
        ]);
    }
    table
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Leave { action } = cmd else {
        return Ok(());
    };

    // Presentation of a status code needs no session.
    if let LeaveAction::Status { code } = action {
        let status = LeaveStatus::from_code(*code);
        println!("{}", status_cell(status));
        return Ok(());
    }

    let ctx = AppContext::open(cfg)?;

    match action {
        LeaveAction::Balance => {
            let buckets = LeaveLogic::balances(&ctx.api, &ctx.session)?;
            if buckets.is_empty() {
                warning("No leave balances available.");
                return Ok(());
            }
            header("Leave balance");
            let mut table = Table::new(["Type", "Available", "Planned", "Used"]);
            for b in &buckets {
                let name = b
                    .leave_type
                    .as_ref()
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| format!("#{}", b.leave_type_id));
                table.add_row(vec![
                    name,
                    fmt_days(b.available_leaves),
                    fmt_days(b.planned_leaves),
                    fmt_days(b.used_leaves),
                ]);
            }
            print!("{}", table.render());
        }
        LeaveAction::Types => {
            ctx.session.require_user()?;
            let types = ctx.api.leave_types()?;
            let mut table = Table::new(["ID", "Name", "Code", "Paid"]);
            for t in types.iter().filter(|t| t.status) {
                table.add_row(vec![
                    t.id.to_string(),
                    t.name.clone(),
                    colorize_optional(t.short_code.as_deref().unwrap_or("--")),
                    if t.is_paid { "yes" } else { "no" }.to_string(),
                ]);
            }
            if table.is_empty() {
                warning("No active leave types.");
            } else {
                print!("{}", table.render());
            }
        }
        LeaveAction::List => {
            let overview = LeaveLogic::overview(&ctx.api, &ctx.session)?;

            header("Upcoming");
            if overview.upcoming.is_empty() {
                println!("{GREY}No upcoming leaves.{RESET}");
            } else {
                print!("{}", leave_table(&overview.upcoming).render());
            }

            println!();
            header("Past");
            if overview.past.is_empty() {
                println!("{GREY}No past leaves.{RESET}");
            } else {
                print!("{}", leave_table(&overview.past).render());
            }

            let tally = overview.tally();
            if !tally.is_empty() {
                let parts: Vec<String> = tally.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                println!("\n{}", parts.join("  "));
            }
        }
        LeaveAction::Apply {
            leave_type,
            from,
            to,
            reason,
            start_first_half,
            start_second_half,
            end_first_half,
            end_second_half,
            notify,
        } => {
            let form = LeaveApplication {
                leave_type_id: *leave_type,
                start_date: from.clone(),
                end_date: to.clone(),
                reason: reason.clone(),
                start_first_half: *start_first_half,
                start_second_half: *start_second_half,
                end_first_half: *end_first_half,
                end_second_half: *end_second_half,
                notify: notify.clone(),
            };
            let created = LeaveLogic::apply(&ctx.api, &ctx.session, &form)?;
            success(format!(
                "Leave request submitted ({}).",
                status_cell(created.status())
            ));
        }
        LeaveAction::Cancel { id } => {
            LeaveLogic::cancel(&ctx.api, &ctx.session, *id)?;
            success(format!("Leave request {id} cancelled."));
        }
        LeaveAction::Status { .. } => info("Nothing to do."),
    }

    Ok(())
}
