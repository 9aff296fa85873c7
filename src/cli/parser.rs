use clap::{Parser, Subcommand};

/// Command-line interface definition for hrdesk
#[derive(Parser)]
#[command(
    name = "hrdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "HR self-service from the terminal: check in/out, time off, payslips and organizations",
    long_about = None
)]
pub struct Cli {
    /// Override the local store path (useful for tests or multiple accounts)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the API base URL (e.g. https://hr.example.com/api)
    #[arg(global = true, long = "api-url")]
    pub api_url: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the local store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration
        #[arg(long = "print")]
        print_config: bool,

        /// Edit the configuration file ($EDITOR, or nano/notepad)
        #[arg(long = "edit")]
        edit_config: bool,

        /// Editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor")]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print")]
        print: bool,
    },

    /// Sign in and store the session token
    Login {
        /// Account e-mail
        #[arg(long)]
        email: String,

        /// Password (falls back to $HRDESK_PASSWORD, then stdin)
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign out and clear the local session
    Logout,

    /// Show the signed-in user and active organization (offline)
    Whoami,

    /// Show the full employee profile
    Profile,

    /// Announcements, holidays, birthdays and work anniversaries
    Dashboard,

    /// Today's attendance and the running session clock
    Status,

    /// Check in, or check out when a session is running
    Punch {
        /// Latitude to send (enables location for this punch)
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude to send
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// Attendance history
    Attendance {
        /// Current week
        #[arg(long, conflicts_with = "month")]
        week: bool,

        /// Month as YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// Live session clock, refreshed periodically
    Watch {
        /// Stop after this many seconds (default: run until interrupted)
        #[arg(long)]
        ticks: Option<u64>,
    },

    /// Time off: balances, requests, apply, cancel
    Leave {
        #[command(subcommand)]
        action: LeaveAction,
    },

    /// Payslips: list, show, download
    Payslip {
        #[command(subcommand)]
        action: PayslipAction,
    },

    /// Notifications
    Notifications {
        /// Only print the unread count
        #[arg(long, conflicts_with_all = ["read", "read_all"])]
        count: bool,

        /// Mark one notification as read
        #[arg(long, value_name = "ID")]
        read: Option<String>,

        /// Mark all notifications as read
        #[arg(long = "read-all")]
        read_all: bool,
    },

    /// Organizations: list or switch
    Tenant {
        #[command(subcommand)]
        action: TenantAction,
    },

    /// Push-notification device registration
    Device {
        #[command(subcommand)]
        action: DeviceAction,
    },
}

#[derive(Subcommand)]
pub enum LeaveAction {
    /// Leave balances per type
    Balance,

    /// Available leave types
    Types,

    /// Upcoming and past requests with their status
    List,

    /// Apply for time off
    Apply {
        /// Leave type id (see `leave types`)
        #[arg(long = "type")]
        leave_type: Option<i64>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD, default: start date)
        #[arg(long)]
        to: Option<String>,

        #[arg(long)]
        reason: Option<String>,

        /// Start day: first half only
        #[arg(long)]
        start_first_half: bool,
        /// Start day: second half only
        #[arg(long)]
        start_second_half: bool,
        /// End day: first half only
        #[arg(long)]
        end_first_half: bool,
        /// End day: second half only
        #[arg(long)]
        end_second_half: bool,

        /// Users to notify on approval (repeatable)
        #[arg(long = "notify")]
        notify: Vec<String>,
    },

    /// Cancel a request
    Cancel {
        id: i64,
    },

    /// Show how a status code is presented (1, 2, 3)
    Status {
        #[arg(allow_hyphen_values = true)]
        code: Option<i64>,
    },
}

#[derive(Subcommand)]
pub enum PayslipAction {
    /// All payslips
    List,

    /// One month in detail
    Show {
        /// Month as YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// Save the PDF
    Download {
        /// Month as YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,

        /// Target directory (default: current directory)
        #[arg(long)]
        dir: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TenantAction {
    /// Organizations you belong to
    List,

    /// Switch the active organization
    Switch { id: i64 },

    /// Active organization and branding
    Current,
}

#[derive(Subcommand)]
pub enum DeviceAction {
    /// Register a push token with the backend
    Register {
        #[arg(long)]
        token: String,

        #[arg(long, default_value = "cli")]
        platform: String,

        #[arg(long, default_value = "terminal")]
        model: String,
    },

    /// Unregister the stored push token
    Unregister,
}
