//! hrdesk main entrypoint.

use hrdesk::run;

fn main() {
    if let Err(e) = run() {
        hrdesk::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
