//! # Access Control
//!
//! Staff roles and the permissions they carry. Permissions are enforced by
//! [`Session`](crate::service::Session) before any collection is touched; they are not
//! just display flags.
//!
//! | Role | Permissions |
//! |---|---|
//! | Owner | everything |
//! | Manager | everything except `ManageStaff` |
//! | Chef | `ManageOrders`, `ManageInventory` |
//! | Waiter | `ManageOrders`, `ManageTables`, `ManageCustomers` |
//! | Cashier | `ManageOrders`, `ProcessPayments`, `ManageCustomers` |

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    ManageMenu,
    ManageOrders,
    ManageTables,
    ManageInventory,
    ManageStaff,
    ViewAnalytics,
    ProcessPayments,
    ManageCustomers,
}

impl Permission {
    pub const ALL: [Permission; 8] = [
        Permission::ManageMenu,
        Permission::ManageOrders,
        Permission::ManageTables,
        Permission::ManageInventory,
        Permission::ManageStaff,
        Permission::ViewAnalytics,
        Permission::ProcessPayments,
        Permission::ManageCustomers,
    ];

    /// What the permission lets someone do, for error messages.
    pub fn describe(self) -> &'static str {
        match self {
            Permission::ManageMenu => "manage the menu",
            Permission::ManageOrders => "manage orders",
            Permission::ManageTables => "manage tables",
            Permission::ManageInventory => "manage inventory",
            Permission::ManageStaff => "manage staff",
            Permission::ViewAnalytics => "view analytics",
            Permission::ProcessPayments => "process payments",
            Permission::ManageCustomers => "manage customers",
        }
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Owner,
    Manager,
    Chef,
    Waiter,
    Cashier,
}

impl StaffRole {
    /// The permission template a new member of this role starts with.
    pub fn default_permissions(self) -> Permissions {
        use Permission::*;
        let granted: &[Permission] = match self {
            StaffRole::Owner => &Permission::ALL,
            StaffRole::Manager => &[
                ManageMenu,
                ManageOrders,
                ManageTables,
                ManageInventory,
                ViewAnalytics,
                ProcessPayments,
                ManageCustomers,
            ],
            StaffRole::Chef => &[ManageOrders, ManageInventory],
            StaffRole::Waiter => &[ManageOrders, ManageTables, ManageCustomers],
            StaffRole::Cashier => &[ManageOrders, ProcessPayments, ManageCustomers],
        };
        granted.iter().copied().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaffStatus {
    Active,
    Inactive,
    OnLeave,
}

impl Display for StaffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            StaffStatus::Active => "active",
            StaffStatus::Inactive => "inactive",
            StaffStatus::OnLeave => "on leave",
        })
    }
}

/// A set of granted permissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions(BTreeSet<Permission>);

impl Permissions {
    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    pub fn grant(&mut self, permission: Permission) {
        self.0.insert(permission);
    }

    pub fn revoke(&mut self, permission: Permission) {
        self.0.remove(&permission);
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Permission> for Permissions {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub name: String,
    pub role: StaffRole,
    pub permissions: Permissions,
    pub status: StaffStatus,
}

impl StaffMember {
    /// An active member with the role's default permissions.
    pub fn new(name: impl Into<String>, role: StaffRole) -> Self {
        Self {
            name: name.into(),
            role,
            permissions: role.default_permissions(),
            status: StaffStatus::Active,
        }
    }

    pub fn with_status(mut self, status: StaffStatus) -> Self {
        self.status = status;
        self
    }

    /// Fails unless the member is active and holds `permission`.
    pub fn authorize(&self, permission: Permission) -> Result<(), AccessError> {
        self.ensure_active()?;
        if !self.permissions.contains(permission) {
            return Err(AccessError::Forbidden {
                staff: self.name.clone(),
                permission,
            });
        }
        Ok(())
    }

    /// Fails unless the member is active. Used for reads open to every role.
    pub fn ensure_active(&self) -> Result<(), AccessError> {
        if self.status != StaffStatus::Active {
            return Err(AccessError::Inactive {
                staff: self.name.clone(),
                status: self.status,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccessError {
    #[error("{staff} is not allowed to {permission}")]
    Forbidden {
        staff: String,
        permission: Permission,
    },

    #[error("{staff} is {status} and cannot make changes")]
    Inactive { staff: String, status: StaffStatus },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_templates() {
        let owner = StaffRole::Owner.default_permissions();
        assert!(Permission::ALL.iter().all(|p| owner.contains(*p)));

        let manager = StaffRole::Manager.default_permissions();
        assert!(!manager.contains(Permission::ManageStaff));
        assert!(manager.contains(Permission::ViewAnalytics));

        let chef = StaffRole::Chef.default_permissions();
        assert_eq!(
            chef.iter().collect::<Vec<_>>(),
            vec![Permission::ManageOrders, Permission::ManageInventory]
        );

        let cashier = StaffRole::Cashier.default_permissions();
        assert!(cashier.contains(Permission::ProcessPayments));
        assert!(!cashier.contains(Permission::ManageMenu));
    }

    #[test]
    fn authorize_checks_status_before_permission() {
        let chef = StaffMember::new("Ravi", StaffRole::Chef);
        assert!(chef.authorize(Permission::ManageOrders).is_ok());
        assert_eq!(
            chef.authorize(Permission::ProcessPayments),
            Err(AccessError::Forbidden {
                staff: "Ravi".into(),
                permission: Permission::ProcessPayments
            })
        );

        let away = chef.with_status(StaffStatus::OnLeave);
        assert!(matches!(
            away.authorize(Permission::ManageOrders),
            Err(AccessError::Inactive {
                status: StaffStatus::OnLeave,
                ..
            })
        ));
    }

    #[test]
    fn permissions_can_be_adjusted_per_member() {
        let mut waiter = StaffMember::new("Kamala", StaffRole::Waiter);
        waiter.permissions.grant(Permission::ProcessPayments);
        waiter.permissions.revoke(Permission::ManageTables);
        assert!(waiter.authorize(Permission::ProcessPayments).is_ok());
        assert!(waiter.authorize(Permission::ManageTables).is_err());
    }
}
