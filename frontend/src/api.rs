use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::InspectionResponse;
use thiserror::Error;

/// Base URL of the corrosion detection endpoint. The annotated image paths
/// in its responses are relative to this.
pub const API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("network error: {0}")]
    Network(gloo_net::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(gloo_net::Error),
}

/// Sends the selected image plus project metadata as a multipart POST and
/// decodes the inference result. Non-2xx statuses are reported as
/// `UploadError::Server` rather than falling through to the JSON decoder.
pub async fn submit_inspection(
    file: &GlooFile,
    project_id: &str,
    project_description: &str,
) -> Result<InspectionResponse, UploadError> {
    let form_data = web_sys::FormData::new().expect("FormData constructor failed");
    form_data
        .append_with_blob("file", file.as_ref())
        .expect("failed to append file to form");
    form_data
        .append_with_str("project_id", project_id)
        .expect("failed to append project_id to form");
    form_data
        .append_with_str("project_description", project_description)
        .expect("failed to append project_description to form");

    let response = Request::post(&format!("{API_BASE}/upload"))
        .body(form_data)
        .map_err(UploadError::Network)?
        .send()
        .await
        .map_err(UploadError::Network)?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(UploadError::Server { status, body });
    }

    response
        .json::<InspectionResponse>()
        .await
        .map_err(UploadError::Decode)
}
