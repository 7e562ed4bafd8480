pub mod authorizer;
pub mod validation;
