//! Sample Commands
//!
//! Frontend bindings for sample endpoints.

use crate::models::Sample;
use super::{get_json, ApiResult};

pub async fn list_samples() -> ApiResult<Vec<Sample>> {
    get_json("/samples").await
}

