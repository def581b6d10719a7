//! `worker://projects/<id>` links to a single project.

use reqwest::Url;

pub const SCHEME: &str = "worker";
pub const PROJECTS_HOST: &str = "projects";

pub fn project_uri(project_id: i64) -> String {
    format!("{}://{}/{}", SCHEME, PROJECTS_HOST, project_id)
}

/// Project id carried by a link.
///
/// Absent or malformed links yield 0, which matches no project, and log a
/// warning instead of failing.
pub fn project_id(uri: Option<&str>) -> i64 {
    let Some(uri) = uri else {
        tracing::warn!("No deep link was given");
        return 0;
    };

    match parse_project_id(uri) {
        Some(id) => id,
        None => {
            tracing::warn!(uri, "Unable to read project id from deep link");
            0
        }
    }
}

fn parse_project_id(uri: &str) -> Option<i64> {
    let url = Url::parse(uri.trim()).ok()?;
    if url.scheme() != SCHEME || url.host_str() != Some(PROJECTS_HOST) {
        return None;
    }

    let mut segments = url.path_segments()?;
    let id = segments.next()?.parse().ok()?;
    match segments.next() {
        None => Some(id),
        Some(rest) if rest.is_empty() => Some(id),
        Some(_) => None,
    }
}
