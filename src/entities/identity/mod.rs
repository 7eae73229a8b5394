//! Authentication schema: users, roles and their claims, logins and tokens.

pub mod role;
pub mod role_claim;
pub mod user;
pub mod user_claim;
pub mod user_login;
pub mod user_role;
pub mod user_token;

pub use role::Entity as Role;
pub use user::Entity as User;
pub use user_role::Entity as UserRole;
