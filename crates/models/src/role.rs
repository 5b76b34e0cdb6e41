//! User roles as the client understands them.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Fixed role set. The backend sends free-form claim strings; `from_claim`
/// is the only way a claim becomes a `Role`, so an arbitrary string is
/// never stored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, Default,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Role {
    Admin,
    Supervisor,
    #[default]
    Vendedor,
}

impl Role {
    /// Derive a role from a backend claim by case-insensitive substring
    /// match, fixed priority: ADMIN > SUPERVISOR > else VENDEDOR.
    pub fn from_claim(claim: &str) -> Self {
        let claim = claim.to_lowercase();
        if claim.contains("admin") {
            Role::Admin
        } else if claim.contains("supervisor") {
            Role::Supervisor
        } else {
            Role::Vendedor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_matching_is_case_insensitive_substring() {
        assert_eq!(Role::from_claim("ROLE_ADMIN"), Role::Admin);
        assert_eq!(Role::from_claim("Administrador"), Role::Admin);
        assert_eq!(Role::from_claim("supervisor_sucursal"), Role::Supervisor);
        assert_eq!(Role::from_claim("VENDEDOR"), Role::Vendedor);
        assert_eq!(Role::from_claim("cualquier cosa"), Role::Vendedor);
    }

    #[test]
    fn admin_wins_over_supervisor() {
        assert_eq!(Role::from_claim("admin_supervisor"), Role::Admin);
    }

    #[test]
    fn display_is_uppercase() {
        assert_eq!(Role::Admin.to_string(), "ADMIN");
        assert_eq!(Role::Vendedor.to_string(), "VENDEDOR");
    }

    #[test]
    fn parses_stored_uppercase_value() {
        assert_eq!("SUPERVISOR".parse::<Role>().unwrap(), Role::Supervisor);
    }
}
