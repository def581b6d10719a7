use crate::{
    db::projects::Projects,
    libs::{deeplink::project_id, messages::Message},
    msg_error,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// A link such as worker://projects/1
    uri: Option<String>,
}

/// Shows the project a link points at.
pub fn cmd(args: OpenArgs) -> Result<()> {
    let id = project_id(args.uri.as_deref());
    if id == 0 {
        match args.uri {
            Some(uri) => msg_error!(Message::InvalidDeepLink(uri)),
            None => msg_error!(Message::MissingDeepLink),
        }
        return Ok(());
    }

    match Projects::new()?.fetch_by_id(id)? {
        Some(project) => super::project::show(&project),
        None => {
            msg_error!(Message::ProjectNotFoundWithId(id));
            Ok(())
        }
    }
}
