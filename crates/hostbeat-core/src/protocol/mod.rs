//! Wire-level response contracts shared by the server and its tests.

pub mod responses;

pub use responses::{
    ComputeResponse, HealthResponse, HealthStatus, InfoResponse, SystemData, SystemDataResponse,
};
