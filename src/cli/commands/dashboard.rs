use crate::cli::context::AppContext;
use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::errors::AppResult;
use crate::models::dashboard::DashboardFeed;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET};
use crate::utils::date::{pretty_date, today};
use crate::utils::table::Table;

fn section<F>(title: &str, rows: usize, build: F)
where
    F: FnOnce() -> Table,
{
    header(title);
    if rows == 0 {
        println!("{GREY}Nothing to show.{RESET}\n");
    } else {
        print!("{}", build().render());
        println!();
    }
}

fn print_feed(feed: &DashboardFeed) {
    section("Announcements", feed.announcements.len(), || {
        let mut t = Table::new(["Date", "Announcement"]);
        for a in &feed.announcements {
            t.add_row(vec![pretty_date(&a.date), a.name.clone()]);
        }
        t
    });

    section("Upcoming holidays", feed.upcoming_holidays.len(), || {
        let mut t = Table::new(["Date", "Holiday"]);
        for h in &feed.upcoming_holidays {
            t.add_row(vec![pretty_date(&h.date), h.name.clone()]);
        }
        t
    });

    section("Birthdays", feed.upcoming_birthdays.len(), || {
        let mut t = Table::new(["Date", "Name", "Department"]);
        for b in &feed.upcoming_birthdays {
            t.add_row(vec![
                pretty_date(b.date.as_deref().unwrap_or("")),
                b.display_name(),
                b.department_or_unknown().to_string(),
            ]);
        }
        t
    });

    section("Work anniversaries", feed.work_anniversaries.len(), || {
        let mut t = Table::new(["Joined", "Name", "Department", "Years"]);
        for w in &feed.work_anniversaries {
            t.add_row(vec![
                pretty_date(w.anniversary_date()),
                w.display_name(),
                w.department_or_unknown().to_string(),
                w.tenure.unwrap_or(0).to_string(),
            ]);
        }
        t
    });
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let ctx = AppContext::open(cfg)?;
    let feed = DashboardLogic::load(&ctx.api, &ctx.session, today())?;
    print_feed(&feed);
    Ok(())
}
