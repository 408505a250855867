use crate::errors::ServerError;
use crate::loader::PageLoader;
use crate::responses::{asset_response, html_response, json_response, ResultResp, MAIN_CSS};
use crate::templates;
use astra::Request;
use serde::Serialize;

const ROUTES: [&str; 4] = ["/", "/about", "/api/home", "/static/main.css"];

/// Shape of `/api/home`: the home page loader's data, as JSON.
#[derive(Serialize)]
struct HomePayload<'a> {
    ok: bool,
    #[serde(flatten)]
    data: &'a crate::loader::HomeData,
}

pub fn handle(req: Request, loader: &PageLoader) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::home_page(&loader.load_home())),
        ("GET", "/about") => html_response(templates::pages::about_page()),
        ("GET", "/api/home") => {
            let data = loader.load_home();
            json_response(&HomePayload {
                ok: true,
                data: &data,
            })
        }
        ("GET", "/static/main.css") => asset_response(MAIN_CSS, mime::TEXT_CSS_UTF_8),
        (method, path) if ROUTES.contains(&path) => {
            Err(ServerError::MethodNotAllowed(method.to_string()))
        }
        _ => Err(ServerError::NotFound),
    }
}
