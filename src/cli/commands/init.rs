use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::{initialize::init_db, log};
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the local SQLite store and its migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.api_url.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing hrdesk…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Store       : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    log::ttlog_quiet(&conn, "init", "store", &format!("Store initialized at {}", &db_path));

    println!("🎉 hrdesk initialization completed!");
    Ok(())
}
