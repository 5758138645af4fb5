use std::sync::Arc;

use anyhow::{bail, Result};

use s3publish::application::publish::DEFAULT_SOURCE_DIR;
use s3publish::config;
use s3publish::domain::ports::{ObjectStore, PublishEventSink};
use s3publish::domain::value_objects::ObjectAcl;
use s3publish::infrastructure::{ConsoleEventSink, JsonEventSink};
use s3publish::presentation::factory::create_publish_use_case;
use s3publish::PublishOptions;

use crate::ui::views::publish::{render_publish_header, render_publish_summary};

pub struct PublishArgs {
    pub deploy_env: Option<String>,
    pub dry_run: bool,
    pub concurrency: usize,
    pub acl: ObjectAcl,
    pub gzip_ext: Option<String>,
}

pub async fn cmd_publish(args: PublishArgs, json: bool) -> Result<()> {
    let config = config::from_process_env(args.deploy_env.as_deref())?;

    let options = PublishOptions::new(DEFAULT_SOURCE_DIR)
        .with_dry_run(args.dry_run)
        .with_concurrency(args.concurrency)
        .with_acl(args.acl)
        .with_key_suffix(args.gzip_ext);

    let use_case = create_publish_use_case(&config);

    if !json {
        print!(
            "{}",
            render_publish_header(
                &options.source,
                use_case.store().bucket(),
                &config.destination_prefix(),
                options.dry_run,
            )
        );
    }

    let sink: Arc<dyn PublishEventSink> = if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stderr())
    };

    let report = use_case
        .execute_with_events(&config, &options, sink)
        .await?;

    if !json {
        print!("{}", render_publish_summary(&report));
    }

    if !report.is_success() {
        bail!(
            "{} of {} uploads failed",
            report.failed(),
            report.total()
        );
    }

    Ok(())
}
