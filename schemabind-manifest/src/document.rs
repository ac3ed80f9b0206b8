//! Loading the API description document.

use std::path::Path;

use schemabind_ir::ApiDescription;

use crate::{Error, Result, SourceContext};

/// Read and parse an API description from disk.
pub fn load_document(path: impl AsRef<Path>) -> Result<ApiDescription> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_document(&content, &path.display().to_string())
}

/// Parse an API description, reporting JSON errors against `filename`.
///
/// Only the document shape is checked here; semantic checks (resolvable
/// references, return lists) belong to the compilation pipeline.
pub fn parse_document(content: &str, filename: &str) -> Result<ApiDescription> {
    let api: ApiDescription = serde_json::from_str(content)
        .map_err(|e| SourceContext::new(content, filename).document_error(e))?;
    tracing::debug!(
        file = filename,
        version = api.version.as_deref().unwrap_or("unknown"),
        types = api.types.len(),
        methods = api.methods.len(),
        "loaded API description"
    );
    Ok(api)
}
