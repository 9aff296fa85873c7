use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::{AttendanceGate, PunchIntent};
use crate::core::dashboard::DashboardLogic;
use crate::core::session_clock::{session_time, session_time_now};
use crate::core::watch::RefreshSchedule;
use crate::device::location::{ConfiguredLocation, LocationProvider};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceRecord;
use crate::ui::messages::{header, success, warning};
use crate::utils::colors::{GREEN, YELLOW, colorize_optional, paint};
use crate::utils::date::{parse_month, pretty_date, today};
use crate::utils::table::Table;
use crate::utils::time::trim_total_hours;
use chrono::Local;
use std::io::Write;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn print_record(record: &AttendanceRecord) {
    let clock = session_time_now(record);
    let state = if record.is_checked_in() {
        paint("checked in", GREEN)
    } else {
        paint("checked out", YELLOW)
    };

    println!("📅 {}  ({})", pretty_date(&record.date), state);
    println!("   Total hours    : {}", trim_total_hours(record.total_hours.as_deref()));
    println!("   Current session: {}", colorize_optional(&clock));

    if record.time_logs.is_empty() {
        println!("   No time logs yet.");
        return;
    }

    let mut table = Table::new(["#", "In", "Out", "Hours"]);
    for (i, log) in record.time_logs.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            log.start_time.clone(),
            colorize_optional(log.end_time.as_deref().unwrap_or("--:--")),
            colorize_optional(log.hours.as_deref().unwrap_or("--")),
        ]);
    }
    println!();
    print!("{}", table.render());
}

fn print_history(records: &[AttendanceRecord]) {
    if records.is_empty() {
        warning("No attendance records for this period.");
        return;
    }
    let mut table = Table::new(["Date", "Status", "Logs", "Total"]);
    for r in records {
        table.add_row(vec![
            pretty_date(&r.date),
            colorize_optional(r.attendance_status.as_deref().unwrap_or("--")),
            r.time_logs.len().to_string(),
            colorize_optional(&trim_total_hours(r.total_hours.as_deref())),
        ]);
    }
    print!("{}", table.render());
}

fn location_for(cfg: &Config, lat: Option<f64>, lon: Option<f64>) -> Arc<dyn LocationProvider> {
    Arc::new(ConfiguredLocation::from_config(&cfg.location).with_override(lat, lon))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let ctx = AppContext::open(cfg)?;

    match cmd {
        Commands::Status => {
            let gate = AttendanceGate::new(&ctx.api, &ctx.session, location_for(cfg, None, None));
            let now = Local::now().naive_local();
            let record = gate.today(now)?;
            header("Today's attendance");
            print_record(&record);
            let next = PunchIntent::for_record(&record, now);
            println!("\n   Next action: {}", next);
        }
        Commands::Punch { lat, lon } => {
            let gate = AttendanceGate::new(&ctx.api, &ctx.session, location_for(cfg, *lat, *lon));
            let outcome = gate.perform(Local::now().naive_local())?;
            success(&outcome.message);
            match &outcome.record {
                Some(r) => print_record(r),
                None => warning("Could not refresh today's attendance; run `hrdesk status`."),
            }
        }
        Commands::Attendance { week, month } => {
            ctx.session.require_user()?;
            if *week {
                header("This week");
                print_history(&ctx.api.weekly_attendance()?);
            } else {
                let (m, y) = parse_month(month.as_deref())?;
                header(format!("Attendance {y}-{m:02}"));
                print_history(&ctx.api.monthly_attendance(m, y)?);
            }
        }
        Commands::Watch { ticks } => watch(&ctx, cfg, *ticks)?,
        _ => {}
    }

    Ok(())
}

/// One-second clock; the record, unread count and dashboard feed refresh
/// every poll interval.
fn watch(ctx: &AppContext, cfg: &Config, ticks: Option<u64>) -> AppResult<()> {
    let gate = AttendanceGate::new(&ctx.api, &ctx.session, location_for(cfg, None, None));
    let mut schedule = RefreshSchedule::new(Duration::from_secs(cfg.poll_interval_secs.max(1)));
    let mut record = AttendanceRecord::default();
    let mut unread: Option<u32> = None;
    let mut announcements: Option<usize> = None;
    let mut elapsed_ticks = 0u64;

    loop {
        let now = Instant::now();
        if schedule.due(now) {
            match gate.today(Local::now().naive_local()) {
                Ok(r) => record = r,
                Err(e @ (AppError::Unauthorized | AppError::NotLoggedIn)) => return Err(e),
                Err(e) => tracing::warn!(error = %e, "attendance refresh failed, keeping last record"),
            }
            unread = match ctx.api.unread_count() {
                Ok(n) => Some(n),
                Err(e) => {
                    tracing::warn!(error = %e, "unread count refresh failed");
                    unread
                }
            };
            announcements = match DashboardLogic::load(&ctx.api, &ctx.session, today()) {
                Ok(feed) => Some(feed.announcements.len()),
                Err(e @ (AppError::Unauthorized | AppError::NotLoggedIn)) => return Err(e),
                Err(e) => {
                    tracing::warn!(error = %e, "dashboard refresh failed");
                    announcements
                }
            };
            schedule.mark(now);
        }

        let clock = session_time(&record, Local::now().naive_local());
        let mut badge = unread.map(|n| format!("  🔔 {n}")).unwrap_or_default();
        if let Some(n) = announcements {
            badge.push_str(&format!("  📣 {n}"));
        }
        print!("\r⏱  {}  total {}{}   ", clock, trim_total_hours(record.total_hours.as_deref()), badge);
        std::io::stdout().flush()?;

        elapsed_ticks += 1;
        if ticks.is_some_and(|t| elapsed_ticks >= t) {
            println!();
            return Ok(());
        }
        thread::sleep(Duration::from_secs(1));
    }
}
