use declq_config::DeclqConfig;
use declq_core::PrintStyle;
use figment::Jail;

#[test]
fn env_sets_render_values() {
    Jail::expect_with(|jail| {
        let dir = jail.directory().display().to_string();
        jail.set_env("XDG_CONFIG_HOME", dir);
        jail.set_env("DECLQ_RENDER__STYLE", "terse");
        jail.set_env("DECLQ_RENDER__INDENT_WIDTH", "2");

        let config = DeclqConfig::load(None).expect("config loads");
        assert_eq!(config.render.style, PrintStyle::Terse);
        assert_eq!(config.render.indent_width, 2);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        let dir = jail.directory().display().to_string();
        jail.set_env("XDG_CONFIG_HOME", dir);
        jail.create_file(".declq.toml", "[log]\nfilter = \"info\"\n")?;
        jail.set_env("DECLQ_LOG__FILTER", "debug");

        let config = DeclqConfig::load(None).expect("config loads");
        assert_eq!(config.log.filter, "debug");
        Ok(())
    });
}

#[test]
fn log_filter_variable_is_not_a_config_key() {
    Jail::expect_with(|jail| {
        let dir = jail.directory().display().to_string();
        jail.set_env("XDG_CONFIG_HOME", dir);
        jail.set_env("DECLQ_LOG", "trace");

        let config = DeclqConfig::load(None).expect("config loads");
        assert_eq!(config.log.filter, "warn");
        Ok(())
    });
}
