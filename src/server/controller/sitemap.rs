//! HTML sitemap served at `/`.

use utoipa::openapi::OpenApi;

/// Path serving the Swagger UI
pub static DOCS_PATH: &str = "/api/docs";

/// Lists the documented paths that answer `GET`, followed by the API docs
pub fn sitemap_paths(api: &OpenApi) -> Vec<String> {
    let mut paths: Vec<String> = api
        .paths
        .paths
        .iter()
        .filter(|(_, item)| item.get.is_some())
        .map(|(path, _)| path.clone())
        .collect();

    paths.push(DOCS_PATH.to_string());

    paths
}

/// Renders the sitemap served at `/` as an HTML page of links
pub fn render_sitemap(paths: &[String]) -> String {
    let links: String = paths
        .iter()
        .map(|path| format!("<li><a href=\"{path}\">{path}</a></li>"))
        .collect();

    format!(
        "<!DOCTYPE html>\
        <html><head><meta charset=\"utf-8\"><title>Holocron API</title></head>\
        <body><h1>Hello! Your API is running</h1>\
        <p>Endpoints:</p><ul>{links}</ul></body></html>"
    )
}
