//! Read-only library commands: listing, lyrics and export.

use std::path::Path;
use tokio::runtime::Runtime;
use tracing::info;

use super::build_service;
use crate::config::Config;
use crate::error::ResultExt;
use crate::model::{Pagination, Song, SongFilters};

/// List one page of songs
pub fn cmd_list(
    rt: &Runtime,
    config: &Config,
    group: Option<String>,
    song: Option<String>,
    page: i64,
    per_page: i64,
) -> anyhow::Result<()> {
    rt.block_on(async {
        let service = build_service(config).await?;
        let filters = SongFilters::new(group, song);
        let songs = service.songs(&filters, Pagination::new(page, per_page)).await?;

        if songs.is_empty() {
            println!("No songs found.");
        }
        for song in &songs {
            println!("{}", format_song(song));
        }
        Ok::<_, anyhow::Error>(())
    })
}

/// Print one page of a song's verses
pub fn cmd_lyrics(rt: &Runtime, config: &Config, id: i64, page: i64, per_page: i64) -> anyhow::Result<()> {
    rt.block_on(async {
        let service = build_service(config).await?;
        let verses = service.song_text(id, Pagination::new(page, per_page)).await?;

        if verses.is_empty() {
            println!("No verses on page {}.", page.max(1));
        } else {
            println!("{}", verses.join("\n\n"));
        }
        Ok::<_, anyhow::Error>(())
    })
}

/// Dump every song as pretty JSON
pub fn cmd_export(rt: &Runtime, config: &Config, output: Option<&Path>) -> anyhow::Result<()> {
    rt.block_on(async {
        let service = build_service(config).await?;
        let songs = service.all_songs().await?;
        let json = serde_json::to_string_pretty(&songs)?;

        match output {
            Some(path) => {
                std::fs::write(path, json)
                    .with_context(format!("writing export to {}", path.display()))?;
                info!(count = songs.len(), path = %path.display(), "Exported songs");
                println!("Exported {} songs to {}", songs.len(), path.display());
            }
            None => println!("{json}"),
        }
        Ok::<_, anyhow::Error>(())
    })
}

fn format_song(song: &Song) -> String {
    let mut line = format!("[{}] {} - {}", song.id, song.group_name, song.song_name);
    if !song.release_date.is_empty() {
        line.push_str(&format!(" ({})", song.release_date));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_song() {
        let song = Song {
            id: 3,
            release_date: "16.07.2006".to_string(),
            ..Song::new("Muse", "Supermassive Black Hole")
        };
        assert_eq!(format_song(&song), "[3] Muse - Supermassive Black Hole (16.07.2006)");

        let bare = Song::new("Muse", "Uprising");
        assert_eq!(format_song(&bare), "[0] Muse - Uprising");
    }

    #[test]
    fn test_export_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("export.db");
        let out = dir.path().join("songs.json");

        let mut config = Config::default();
        config.database.url = crate::db::db_url(Some(db_path.as_path()));

        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let service = build_service(&config).await.unwrap();
            service.add_song(Song::new("Muse", "Uprising")).await.unwrap();
        });

        cmd_export(&rt, &config, Some(out.as_path())).unwrap();

        let songs: Vec<Song> = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].song_name, "Uprising");
    }
}
