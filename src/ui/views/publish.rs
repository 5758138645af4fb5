use std::path::Path;

use s3publish::PublishReport;

use super::{count, format_bytes};

pub fn render_publish_header(source: &Path, bucket: &str, prefix: &str, dry_run: bool) -> String {
    let mut out = String::from("s3publish Publish\n");
    out.push_str(&format!("  Source: {}\n", source.display()));
    out.push_str(&format!("  Bucket: {}\n", bucket));
    out.push_str(&format!("  Prefix: {}\n", prefix));
    if dry_run {
        out.push_str("  Mode: dry run\n");
    }
    out
}

pub fn render_publish_summary(report: &PublishReport) -> String {
    let title = if report.is_success() {
        "Publish Complete"
    } else {
        "Publish Results"
    };

    let mut out = format!("\n{}\n", title);
    if report.dry_run() > 0 {
        out.push_str(&format!(
            "  {} would be uploaded\n",
            count(report.dry_run(), "file")
        ));
    } else {
        out.push_str(&format!("  {} uploaded\n", count(report.uploaded(), "file")));
    }
    out.push_str(&format!("  {}\n", count(report.failed(), "error")));
    if report.total() > 0 {
        out.push_str(&format!(
            "  {} -> {} gzip\n",
            format_bytes(report.total_size()),
            format_bytes(report.total_encoded_size())
        ));
    }

    for failure in report.failures() {
        out.push_str(&format!(
            "  ! {}: {}\n",
            failure.destination_key(),
            failure.error().unwrap_or("unknown error")
        ));
    }

    out
}
