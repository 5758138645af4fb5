use s3publish::{ConfigError, PublishError};

use crate::ui::json::{emit, events::ErrorEvent};

pub fn format_error(err: &anyhow::Error) -> String {
    let mut message = format!("[ERROR] {}\n", err);

    let hint = match err.downcast_ref::<PublishError>() {
        Some(PublishError::Config(config)) => config_hint(config),
        _ => err.downcast_ref::<ConfigError>().and_then(config_hint),
    };
    if let Some(hint) = hint {
        message.push_str(&format!("  hint: {}\n", hint));
    }

    message
}

fn config_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::MissingDeployEnv => Some("Pass the environment, e.g. `--env=staging`."),
        ConfigError::CredentialsFileMissing { .. } => {
            Some("Create it with {\"key\": \"...\", \"secret\": \"...\"}.")
        }
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = emit(&ErrorEvent::new(err.to_string()));
        return;
    }

    eprint!("{}", format_error(err));
}
