//! Role catalog law tests
//!
//! Properties of the shipped catalog that every consumer relies on.

#[cfg(test)]
mod tests {
    use crate::common::UserFactory;
    use opsdesk::{AuthSession, Permission, Role, RoleCatalog};

    #[test]
    fn test_ranks_unique_and_ordered() {
        let catalog = RoleCatalog::shared();
        let mut ranks: Vec<u8> = Role::ALL.iter().map(|r| catalog.rank_of(*r)).collect();
        let ordered = ranks.clone();
        ranks.dedup();
        assert_eq!(ranks.len(), Role::COUNT);
        assert!(ordered.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_viewer_grants_held_by_everyone() {
        let catalog = RoleCatalog::shared();
        for permission in catalog.permissions_for(Role::Viewer) {
            assert_eq!(catalog.grants_of(permission), Role::ALL.to_vec());
        }
    }

    #[test]
    fn test_shipped_catalog_is_monotonic() {
        assert!(RoleCatalog::shared().check_monotonic().is_ok());
    }

    #[test]
    fn test_has_role_matrix() {
        for held in Role::ALL {
            let session = AuthSession::for_user(UserFactory::with_role(held), RoleCatalog::shared());
            for required in Role::ALL {
                let expected = held.rank() >= required.rank();
                assert_eq!(session.has_role(required), expected);
            }
        }
    }

    #[test]
    fn test_named_grants() {
        let catalog = RoleCatalog::shared();
        assert_eq!(catalog.grants_of(&Permission::CLIENTS_DELETE), vec![Role::Admin]);
        assert_eq!(
            catalog.grants_of(&Permission::INVOICING_APPROVE),
            vec![Role::Manager, Role::Admin]
        );
        assert_eq!(
            catalog.grants_of(&Permission::TIME_WRITE),
            vec![Role::Member, Role::Manager, Role::Admin]
        );
    }
}
