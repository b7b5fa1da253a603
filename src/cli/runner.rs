//! CLI runner - executes commands

use crate::auth::{User, SESSION_COOKIE_PREFIX};
use crate::cli::commands::{Category, Cli, Commands, OutputFormat, ShareKind};
use crate::config::DabConfig;
use crate::error::{Error, Result, ResultExt};
use crate::extension::{
    AlbumClient, ArtistClient, DabExtension, LibraryFeedClient, LoginClient, SearchFeedClient,
    ShareClient, TrackClient, ALBUMS_SHELF, TRACKS_SHELF,
};
use crate::feed::Feed;
use crate::media::{Album, Artist, MediaItem, Streamable, Track};
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let ext = self.extension().await?;

        match &self.cli.command {
            Commands::Search { query } => {
                let feed = ext.load_search_feed(query).await?;
                self.output(&feed_json(&feed));
            }
            Commands::More {
                category,
                query,
                cursor,
            } => self.more(&ext, *category, query, cursor).await?,
            Commands::Album { id } => {
                let album = ext
                    .load_album(Album {
                        id: id.clone(),
                        ..Default::default()
                    })
                    .await?;
                self.output(&to_json(&album)?);
            }
            Commands::Artist { id } => {
                let artist = ext
                    .load_artist(Artist {
                        id: id.clone(),
                        ..Default::default()
                    })
                    .await?;
                self.output(&to_json(&artist)?);
            }
            Commands::Stream { track_id } => {
                let streamable = Streamable {
                    id: track_id.clone(),
                    quality: 0,
                    title: String::new(),
                };
                let media = ext.load_streamable_media(&streamable).await?;
                self.output(&to_json(&media)?);
            }
            Commands::Login { email, password } => {
                let data = HashMap::from([
                    ("email".to_string(), email.clone()),
                    ("password".to_string(), password.clone()),
                ]);
                let users = ext.on_login("login", &data).await?;
                self.output(&to_json(&users)?);
            }
            Commands::Register {
                username,
                email,
                password,
            } => {
                let data = HashMap::from([
                    ("username".to_string(), username.clone()),
                    ("email".to_string(), email.clone()),
                    ("password".to_string(), password.clone()),
                ]);
                let users = ext.on_login("register", &data).await?;
                self.output(&to_json(&users)?);
            }
            Commands::Library => {
                let feed = ext.load_library_feed().await?;
                self.output(&feed_json(&feed));
            }
            Commands::FavoriteAdd { album_id, track_id } => {
                let track = find_track(&ext, album_id, track_id).await?;
                ext.add_favourite(&track).await?;
                self.output(&json!({ "added": track.id }));
            }
            Commands::FavoriteRemove { track_id } => {
                let track = Track {
                    id: track_id.clone(),
                    ..Default::default()
                };
                ext.remove_favourite(&track).await?;
                self.output(&json!({ "removed": track.id }));
            }
            Commands::Share { kind, id, album_id } => {
                let item = share_target(&ext, *kind, id, album_id.as_deref()).await?;
                let link = ext.share(&item).await?;
                self.output(&json!({ "link": link }));
            }
            Commands::Forms => {
                self.output(&to_json(&ext.login_forms())?);
            }
        }

        Ok(())
    }

    /// Build the extension from config and the `--session` flag
    async fn extension(&self) -> Result<DabExtension> {
        let config = match &self.cli.config {
            Some(path) => DabConfig::from_file(path)
                .with_context(|| format!("Loading {}", path.display()))?,
            None => DabConfig::default(),
        }
        .with_env_overrides()?;
        debug!(base_url = %config.base_url, "Loaded configuration");

        let ext = DabExtension::new(config)?;
        if let Some(session) = &self.cli.session {
            let user = User::with_session("cli", "cli", normalize_session(session));
            ext.set_login_user(Some(&user)).await;
        }
        Ok(ext)
    }

    /// Page through a search category from a cursor
    async fn more(&self, ext: &DabExtension, category: Category, query: &str, cursor: &str) -> Result<()> {
        let shelf_id = match category {
            Category::Albums => ALBUMS_SHELF,
            Category::Tracks => TRACKS_SHELF,
        };
        let page = ext.resume_search(shelf_id, query, cursor).await?;
        self.output(&to_json(&page)?);
        Ok(())
    }

    /// Output a message
    fn output(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Accept a bare token as well as `session=<token>`
fn normalize_session(raw: &str) -> String {
    let raw = raw.trim();
    if raw.starts_with(SESSION_COOKIE_PREFIX) {
        raw.to_string()
    } else {
        format!("{SESSION_COOKIE_PREFIX}{raw}")
    }
}

/// Shelves plus per-category failures as one JSON document
fn feed_json(feed: &Feed) -> Value {
    let failures: Vec<Value> = feed
        .failures
        .iter()
        .map(|f| json!({ "id": f.id, "title": f.title, "error": f.error.to_string() }))
        .collect();
    json!({ "shelves": feed.shelves, "failures": failures })
}

async fn find_track(ext: &DabExtension, album_id: &str, track_id: &str) -> Result<Track> {
    let album = Album {
        id: album_id.to_string(),
        ..Default::default()
    };
    ext.load_album_tracks(&album)
        .await?
        .unwrap_or_default()
        .into_iter()
        .find(|t| t.id == track_id)
        .ok_or_else(|| {
            Error::invalid_argument(format!("Track {track_id} not found in album {album_id}"))
        })
}

async fn share_target(
    ext: &DabExtension,
    kind: ShareKind,
    id: &str,
    album_id: Option<&str>,
) -> Result<MediaItem> {
    Ok(match kind {
        ShareKind::Track => {
            let album_id = album_id.ok_or_else(|| Error::missing_field("album_id"))?;
            Track {
                id: id.to_string(),
                album: Some(Album {
                    id: album_id.to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }
            .into()
        }
        ShareKind::Album => Album {
            id: id.to_string(),
            ..Default::default()
        }
        .into(),
        // slug comes from the artist details
        ShareKind::Artist => ext
            .load_artist(Artist {
                id: id.to_string(),
                ..Default::default()
            })
            .await?
            .into(),
    })
}
