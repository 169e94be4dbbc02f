//! Configuration loading integration tests
//!
//! Load configuration files from disk and build the effective catalog.

#[cfg(test)]
mod tests {
    use opsdesk::config::{Config, LogFormat};
    use opsdesk::ui::{Sidebar, SidebarState};
    use opsdesk::{AccessError, AuthProvider, AuthenticatedUser, Permission, Role};
    use std::io::Write;
    use std::time::{Duration, Instant};
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_full_config_file() {
        let file = write_config(
            r#"
rbac:
  enforce_monotonic: true
  grants:
    viewer: ["dashboard:read"]
    member: ["dashboard:read", "time:write"]
    manager: ["dashboard:read", "time:write", "time:approve"]
    admin: ["dashboard:read", "time:write", "time:approve", "admin:settings"]
sidebar:
  hover_delay_ms: 120
logging:
  level: opsdesk=debug
  format: json
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);

        let provider = AuthProvider::new(config.catalog().unwrap());
        provider.set_user(Some(AuthenticatedUser::new(
            "u-9",
            "Rowan Hale",
            "rowan@opsdesk.test",
            Role::Manager,
        )));
        let scope = provider.scope();
        assert!(scope.has_permission(&Permission::TIME_APPROVE).unwrap());
        assert!(!scope.has_permission(&Permission::CLIENTS_READ).unwrap());

        let mut sidebar = Sidebar::from_config(&config.sidebar);
        let start = Instant::now();
        sidebar.hover_enter(start);
        assert_eq!(
            sidebar.tick(start + Duration::from_millis(120)),
            SidebarState::Peek
        );
    }

    #[tokio::test]
    async fn test_load_rejects_non_monotonic_file() {
        let file = write_config(
            r#"
rbac:
  grants:
    viewer: ["clients:read"]
    member: []
    manager: []
    admin: []
"#,
        );

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("clients:read"));
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_yaml() {
        let file = write_config("sidebar: [not, a, map]\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, AccessError::Yaml(_)));
    }

    #[tokio::test]
    async fn test_load_rejects_bad_sidebar_delay() {
        let file = write_config("sidebar:\n  hover_delay_ms: 0\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Sidebar config error"));
    }
}
