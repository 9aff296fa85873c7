use crate::cli::context::AppContext;
use crate::cli::parser::{Commands, PayslipAction};
use crate::config::Config;
use crate::core::payslip;
use crate::errors::AppResult;
use crate::models::payslip::Payslip;
use crate::ui::messages::{header, success, warning};
use crate::utils::colors::{GREEN, RED, paint};
use crate::utils::date::{parse_month, pretty_date};
use crate::utils::formatting::{bold, money};
use crate::utils::path::output_dir;
use crate::utils::table::Table;

fn print_payslip(p: &Payslip) {
    println!(
        "{}  {}",
        bold(&format!("{} {}", p.first_name, p.last_name)),
        p.designation.as_deref().unwrap_or("")
    );
    println!(
        "Period {} – {}, paid on {}",
        pretty_date(&p.pay_start_date),
        pretty_date(&p.pay_end_date),
        pretty_date(&p.pay_date)
    );
    println!("Paid days {}  LOP days {}\n", p.paid_days, p.lop_days);

    let mut earnings = Table::new(["Earnings", "Amount"]);
    for c in &p.payslip_components {
        earnings.add_row(vec![c.salary_component_name.clone(), money(c.amount)]);
    }
    earnings.add_row(vec![bold("Gross"), bold(&money(p.gross_earnings))]);
    print!("{}", earnings.render());
    println!();

    let mut deductions = Table::new(["Deductions", "Amount"]);
    for d in &p.payslip_deductions {
        deductions.add_row(vec![d.tenant_deduction_name.clone(), money(d.amount)]);
    }
    deductions.add_row(vec!["Taxes".to_string(), money(p.taxes)]);
    deductions.add_row(vec![bold("Total"), bold(&money(p.deductions + p.taxes))]);
    print!("{}", deductions.render());

    println!("\nNet payable: {}", paint(&money(p.total_net_payable), GREEN));
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Payslip { action } = cmd else {
        return Ok(());
    };
    let ctx = AppContext::open(cfg)?;

    match action {
        PayslipAction::List => {
            ctx.session.require_user()?;
            let slips = ctx.api.payslips()?;
            if slips.is_empty() {
                warning("No payslips yet.");
                return Ok(());
            }
            header("Payslips");
            let mut table = Table::new(["Pay date", "Period", "Net", "Status"]);
            for p in &slips {
                table.add_row(vec![
                    pretty_date(&p.pay_date),
                    format!("{} – {}", pretty_date(&p.pay_start_date), pretty_date(&p.pay_end_date)),
                    money(p.total_net_payable),
                    if p.payment_status {
                        paint("paid", GREEN)
                    } else {
                        paint("pending", RED)
                    },
                ]);
            }
            print!("{}", table.render());
        }
        PayslipAction::Show { month } => {
            let user = ctx.session.require_user()?;
            let (m, y) = parse_month(month.as_deref())?;
            let slip = ctx.api.payslip_for(m, y, user.id)?;
            header(format!("Payslip {y}-{m:02}"));
            print_payslip(&slip);
        }
        PayslipAction::Download { month, dir } => {
            let (m, y) = parse_month(month.as_deref())?;
            let path = payslip::download(&ctx.api, &ctx.session, m, y, &output_dir(dir.as_deref()))?;
            success(format!("Payslip saved to {}", path.display()));
        }
    }

    Ok(())
}
