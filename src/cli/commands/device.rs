use crate::cli::context::AppContext;
use crate::cli::parser::{Commands, DeviceAction};
use crate::config::Config;
use crate::core::device::DeviceLogic;
use crate::errors::AppResult;
use crate::models::user::DeviceRegistration;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Device { action } = cmd else {
        return Ok(());
    };

    let ctx = AppContext::open(cfg)?;

    match action {
        DeviceAction::Register {
            token,
            platform,
            model,
        } => {
            let reg = DeviceRegistration {
                device_token: token.clone(),
                platform: platform.clone(),
                app_version: env!("CARGO_PKG_VERSION").to_string(),
                device_model: model.clone(),
            };
            DeviceLogic::register(&ctx.api, &ctx.session, &reg)?;
            success("Device registered for notifications.");
        }
        DeviceAction::Unregister => {
            if DeviceLogic::unregister(&ctx.api, &ctx.session)? {
                success("Device unregistered.");
            } else {
                info("No device is registered.");
            }
        }
    }

    Ok(())
}
