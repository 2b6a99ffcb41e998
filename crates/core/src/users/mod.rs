//! Users module - account records and profile updates.

mod users_model;
mod users_service;
mod users_traits;


pub use users_model::{normalize_email, NewUser, User, UserProfile};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
