use std::path::Path;

use s3publish::config::DeployConfig;

use super::count;

/// Resolved configuration, without the secret
pub fn render_check(config: &DeployConfig, source: &Path, file_count: usize) -> String {
    let mut out = String::from("s3publish Check\n");
    out.push_str(&format!("  Bucket: {}\n", config.bucket_name()));
    out.push_str(&format!("  Prefix: {}\n", config.destination_prefix()));
    out.push_str(&format!("  Region: {}\n", config.region()));
    if let Some(endpoint) = config.endpoint() {
        out.push_str(&format!("  Endpoint: {}\n", endpoint));
    }
    out.push_str(&format!("  Access key: {}\n", config.access_key_id()));
    out.push_str(&format!(
        "  Source: {} ({})\n",
        source.display(),
        count(file_count, "file")
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_view_singular_file() {
        let config =
            DeployConfig::new("myapp", "prod", "assets", "AKIA123", "s3cr3t", "creds.json")
                .unwrap();

        let rendered = render_check(&config, Path::new("build/static"), 1);
        assert!(rendered.contains("Source: build/static (1 file)\n"));
    }

    #[test]
    fn check_view_omits_secret() {
        let config =
            DeployConfig::new("myapp", "prod", "assets", "AKIA123", "s3cr3t", "creds.json")
                .unwrap();

        let rendered = render_check(&config, Path::new("build/static"), 4);
        insta::assert_snapshot!(rendered.trim_end(), @r"
        s3publish Check
          Bucket: assets
          Prefix: myapp/prod/
          Region: us-east-1
          Access key: AKIA123
          Source: build/static (4 files)
        ");
        assert!(!rendered.contains("s3cr3t"));
    }
}
