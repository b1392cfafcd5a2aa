//! Session module - explicit session context, auth models, services, and traits.

mod session_model;
mod session_service;
mod session_traits;

pub use session_model::{AuthToken, Gender, LoginCredentials, NewUser, Role, SessionContext};
pub use session_service::AuthService;
pub use session_traits::{AuthRepositoryTrait, AuthServiceTrait};
