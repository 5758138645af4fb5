use anyhow::Result;

use s3publish::application::publish::DEFAULT_SOURCE_DIR;
use s3publish::config;
use s3publish::presentation::factory::create_publish_use_case;

use crate::ui::json::{emit, events::CheckEvent};
use crate::ui::views::check::render_check;

pub fn cmd_check(deploy_env: Option<String>, json: bool) -> Result<()> {
    let config = config::from_process_env(deploy_env.as_deref())?;

    let source = std::path::Path::new(DEFAULT_SOURCE_DIR);
    let assets = create_publish_use_case(&config).discover(source)?;

    if json {
        emit(&CheckEvent::new(
            &config,
            source.display().to_string(),
            assets.len(),
        ))?;
    } else {
        print!("{}", render_check(&config, source, assets.len()));
    }

    Ok(())
}
