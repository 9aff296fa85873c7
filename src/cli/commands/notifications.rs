use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::api::FlexibleId;
use crate::ui::messages::{header, success};
use crate::utils::colors::{CYAN, GREY, RESET, paint};
use crate::utils::date::pretty_date;
use crate::utils::formatting::{bold, wrap_indented};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Notifications {
        count,
        read,
        read_all,
    } = cmd
    else {
        return Ok(());
    };

    let ctx = AppContext::open(cfg)?;
    ctx.session.require_user()?;

    if *count {
        println!("{}", ctx.api.unread_count()?);
        return Ok(());
    }

    if let Some(id) = read {
        let id = match id.parse::<i64>() {
            Ok(n) => FlexibleId::Num(n),
            Err(_) => FlexibleId::Str(id.clone()),
        };
        ctx.api.mark_read(&id)?;
        success(format!("Notification {id} marked as read."));
        return Ok(());
    }

    if *read_all {
        ctx.api.mark_all_read()?;
        success("All notifications marked as read.");
        return Ok(());
    }

    let items = ctx.api.notifications()?;
    if items.is_empty() {
        println!("{GREY}No notifications.{RESET}");
        return Ok(());
    }

    header("Notifications");
    for n in &items {
        let marker = if n.read { " " } else { "●" };
        let title = if n.read { n.title.clone() } else { bold(&n.title) };
        println!(
            "{} {}  {}  {}",
            paint(marker, CYAN),
            title,
            paint(&format!("[{}]", n.id), GREY),
            paint(&pretty_date(&n.created_at), GREY)
        );
        if !n.message.trim().is_empty() {
            println!("{}", wrap_indented(&n.message, 76, "    "));
        }
    }

    Ok(())
}
