//! Access guard scenario tests
//!
//! End-to-end guard decisions through a provider-bound scope.

#[cfg(test)]
mod tests {
    use crate::common::{UserFactory, provider_with, scope_for};
    use opsdesk::ui::{NavSection, visible_sections};
    use opsdesk::{AccessGuard, AuthScope, Guarded, Permission, Role, RoleCatalog};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    /// Member asking for an admin-only permission sees the denial view
    #[test]
    fn test_scenario_member_denied_clients_delete() {
        let scope = scope_for(Some(UserFactory::member()));

        let rendered = AccessGuard::new("client delete button")
            .require_permission(Permission::CLIENTS_DELETE)
            .render(&scope)
            .unwrap();

        match rendered {
            Guarded::Denied(view) => {
                assert_eq!(view.current_role(), Some(Role::Member));
                assert!(view.to_string().contains("member"));
            }
            other => panic!("expected denial, got {:?}", other),
        }
    }

    /// Admin outranks manager
    #[test]
    fn test_scenario_admin_passes_manager_requirement() {
        let scope = scope_for(Some(UserFactory::admin()));

        let rendered = AccessGuard::new("team page")
            .require_role(Role::Manager)
            .render(&scope)
            .unwrap();

        assert_eq!(rendered, Guarded::Content("team page"));
    }

    /// No user and no requirements still needs authentication
    #[test]
    fn test_scenario_anonymous_denied_without_requirements() {
        let scope = scope_for(None);

        let rendered = AccessGuard::new("dashboard").render(&scope).unwrap();

        match rendered {
            Guarded::Denied(view) => assert_eq!(view.current_role(), None),
            other => panic!("expected denial, got {:?}", other),
        }
    }

    /// Manager satisfies both a manager permission and a member role
    #[test]
    fn test_scenario_manager_passes_permission_and_role() {
        let scope = scope_for(Some(UserFactory::manager()));

        let rendered = AccessGuard::new("approve invoice")
            .require_permission(Permission::INVOICING_APPROVE)
            .require_role(Role::Member)
            .render(&scope)
            .unwrap();

        assert!(rendered.is_granted());
    }

    #[test]
    fn test_each_requirement_alone_can_deny() {
        // Permission passes, role fails
        let scope = scope_for(Some(UserFactory::member()));
        let rendered = AccessGuard::new(())
            .require_permission(Permission::TIME_WRITE)
            .require_role(Role::Manager)
            .render(&scope)
            .unwrap();
        assert!(!rendered.is_granted());

        // Role passes, permission fails
        let rendered = AccessGuard::new(())
            .require_permission(Permission::TIME_APPROVE)
            .require_role(Role::Viewer)
            .render(&scope)
            .unwrap();
        assert!(!rendered.is_granted());
    }

    #[test]
    fn test_permission_only_guard_matches_resolved_set() {
        let catalog = RoleCatalog::shared();
        for role in Role::ALL {
            let scope = scope_for(Some(UserFactory::with_role(role)));
            for permission in catalog.all_permissions() {
                let granted = AccessGuard::new(())
                    .require_permission(permission.clone())
                    .render(&scope)
                    .unwrap()
                    .is_granted();
                assert_eq!(granted, catalog.role_has_permission(role, permission));
            }
        }
    }

    #[test]
    fn test_unauthenticated_denied_for_every_requirement() {
        let scope = scope_for(None);
        let catalog = RoleCatalog::shared();

        for permission in catalog.all_permissions() {
            assert!(!scope.has_permission(permission).unwrap());
        }
        for role in Role::ALL {
            assert!(!scope.has_role(role).unwrap());
            let rendered = AccessGuard::new(()).require_role(role).render(&scope).unwrap();
            assert!(!rendered.is_granted());
        }
        assert!(scope.permissions().unwrap().is_empty());
    }

    #[test]
    fn test_denial_view_never_names_requirement() {
        let scope = scope_for(Some(UserFactory::viewer()));
        let rendered = AccessGuard::new(())
            .require_permission(Permission::ADMIN_AUDIT)
            .require_role(Role::Admin)
            .render(&scope)
            .unwrap();

        let Guarded::Denied(view) = rendered else {
            panic!("expected denial");
        };
        let text = view.to_string();
        assert!(text.contains("Current role: viewer"));
        assert!(!text.contains("admin:audit"));
        assert!(!text.contains("admin"));
    }

    #[test]
    fn test_session_swap_grants_previously_denied_guard() {
        let provider = provider_with(Some(UserFactory::viewer()));
        let guard = AccessGuard::new("invoices").require_permission(Permission::INVOICING_WRITE);

        assert!(!guard.clone().render(&provider.scope()).unwrap().is_granted());

        provider.set_user(Some(UserFactory::manager()));
        assert!(guard.clone().render(&provider.scope()).unwrap().is_granted());

        provider.set_user(None);
        assert!(!guard.render(&provider.scope()).unwrap().is_granted());
    }

    #[test]
    fn test_old_scope_keeps_consistent_snapshot() {
        let provider = provider_with(Some(UserFactory::admin()));
        let old_scope = provider.scope();

        provider.set_user(Some(UserFactory::viewer()));

        assert!(old_scope.has_permission(&Permission::ADMIN_SETTINGS).unwrap());
        assert!(old_scope.has_role(Role::Admin).unwrap());
        assert!(!provider.scope().has_role(Role::Admin).unwrap());
    }

    #[test]
    fn test_concurrent_readers_see_whole_sessions() {
        let provider = Arc::new(provider_with(Some(UserFactory::viewer())));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let provider = Arc::clone(&provider);
                thread::spawn(move || {
                    for _ in 0..500 {
                        let session = provider.session();
                        let role = session.current_role().expect("user present");
                        // Permissions always match the role they were resolved for
                        assert_eq!(
                            session.permissions(),
                            session.catalog().permissions_for(role)
                        );
                    }
                })
            })
            .collect();

        for i in 0..500 {
            let role = Role::ALL[i % Role::COUNT];
            provider.set_user(Some(UserFactory::with_role(role)));
        }

        for reader in readers {
            reader.join().unwrap();
        }
    }

    #[test]
    fn test_logout_through_scope() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let provider = opsdesk::AuthProvider::new(RoleCatalog::shared()).with_logout(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        provider.set_user(Some(UserFactory::member()));

        provider.scope().logout().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_detached_scope_is_configuration_error() {
        let scope = AuthScope::detached();

        let err = AccessGuard::new(()).render(&scope).unwrap_err();
        assert!(err.is_config());
        assert!(visible_sections(&scope).unwrap_err().is_config());
    }

    #[test]
    fn test_navigation_follows_role() {
        let member = visible_sections(&scope_for(Some(UserFactory::member()))).unwrap();
        assert!(member.contains(&NavSection::Clients));
        assert!(!member.contains(&NavSection::Reports));

        let admin = visible_sections(&scope_for(Some(UserFactory::admin()))).unwrap();
        assert!(admin.contains(&NavSection::Settings));
    }
}
