// responses/assets.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use mime::Mime;

pub const MAIN_CSS: &str = include_str!("../../static/main.css");

/// Serve an asset compiled into the binary.
pub fn asset_response(content: &'static str, content_type: Mime) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.to_string())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(content))
        .map_err(|e| ServerError::InternalError(e.to_string()))
}
