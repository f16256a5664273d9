//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use chrono::NaiveDate;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use lumen_config::LumenConfig;

#[test]
fn loads_browse_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[browse]
reference_date = "2023-10-14"
tag_cloud_size = 10
abstract_width = 40
"#,
        )?;

        let config: LumenConfig = Figment::from(Serialized::defaults(LumenConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.browse.tag_cloud_size, 10);
        assert_eq!(config.browse.abstract_width, 40);
        assert_eq!(
            config.browse.reference_date().expect("valid date"),
            NaiveDate::from_ymd_opt(2023, 10, 14)
        );
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[general]
default_limit = 5
",
        )?;

        let config: LumenConfig = Figment::from(Serialized::defaults(LumenConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 5);
        assert_eq!(config.browse.tag_cloud_size, 6);
        assert!(config.browse.reference_date.is_empty());
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lumen")?;
        jail.create_file(
            ".lumen/config.toml",
            r"
[browse]
tag_cloud_size = 3
",
        )?;

        let config = LumenConfig::load().expect("config loads");
        assert_eq!(config.browse.tag_cloud_size, 3);
        Ok(())
    });
}

#[test]
fn load_rejects_malformed_reference_date() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lumen")?;
        jail.create_file(
            ".lumen/config.toml",
            r#"
[browse]
reference_date = "last tuesday"
"#,
        )?;

        let err = LumenConfig::load().expect_err("bad date should fail");
        assert!(err.to_string().contains("browse.reference_date"));
        Ok(())
    });
}
