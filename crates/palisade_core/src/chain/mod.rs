pub mod account;
pub mod authorization_manager;
pub mod config;
pub mod genesis;
pub mod native;
pub mod state;
pub mod utils;

// Re-export types for easier access
pub mod permission {
    pub use palisade_permission::{
        AccountPermissions, BasePermissions, GLOBAL_PERMISSIONS_ADDRESS, PermFlag, PermissionError,
        RoleId,
    };
}

pub use palisade_error::ChainError;
