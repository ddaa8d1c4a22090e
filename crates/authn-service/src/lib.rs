//! # authn-service
//!
//! Application layer containing the sign-in decision, DTOs, and the profile mapper.

pub mod dto;
pub mod services;

pub use dto::{
    AuthenticationResponse, HealthResponse, MappingError, ReadinessResponse, SignInRequest,
    UserProfileResponse,
};
pub use services::{AuthService, ServiceContext, ServiceError, ServiceResult};
