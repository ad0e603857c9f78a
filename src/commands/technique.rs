//! Technique Process Commands
//!
//! Frontend bindings for the ordered technique steps of a sample.

use serde::Serialize;

use crate::models::TechniqueProcess;
use super::{get_json, send_empty, send_json, ApiResult};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct TechniqueOrderArgs<'a> {
    #[serde(rename = "techniqueIds")]
    technique_ids: &'a [u32],
}

fn techniques_path(sample_id: u32) -> String {
    format!("/samples/{}/techniques", sample_id)
}

// ========================
// Commands
// ========================

/// Active technique steps of a sample, in processing order
pub async fn list_sample_techniques(sample_id: u32) -> ApiResult<Vec<TechniqueProcess>> {
    get_json(&techniques_path(sample_id)).await
}

/// Persist the processing order
pub async fn set_technique_order(sample_id: u32, technique_ids: &[u32]) -> ApiResult<()> {
    let path = format!("{}/order", techniques_path(sample_id));
    send_json("PUT", &path, &TechniqueOrderArgs { technique_ids }).await
}

/// Unbind a technique from the sample
pub async fn remove_sample_technique(sample_id: u32, technique_id: u32) -> ApiResult<()> {
    let path = format!("{}/{}", techniques_path(sample_id), technique_id);
    send_empty("DELETE", &path).await
}

/// Bind a previously removed technique again (appended at the end)
pub async fn reinsert_sample_technique(sample_id: u32, technique_id: u32) -> ApiResult<()> {
    let path = format!("{}/{}", techniques_path(sample_id), technique_id);
    send_empty("POST", &path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_args_json() {
        let json = serde_json::to_string(&TechniqueOrderArgs { technique_ids: &[3, 1, 2] }).unwrap();
        assert_eq!(json, r#"{"techniqueIds":[3,1,2]}"#);
    }

    #[test]
    fn test_techniques_path() {
        assert_eq!(techniques_path(12), "/samples/12/techniques");
    }
}
