use chrono::Local;
use tracing_subscriber::EnvFilter;

use matchday::audio::{SilentCuePlayer, SoundSettings};
use matchday::directory::{load_players_or_fallback, HttpPlayerDirectory};
use matchday::export::{ExportSink, FileExportSink};
use matchday::settings::MemorySettingsStore;
use matchday::{export_filename, DirectoryConfig, MatchEngine, SharedEngine, Team};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let directory = HttpPlayerDirectory::new(&DirectoryConfig::default())?;
    let players = load_players_or_fallback(&directory).await;
    println!("{} players in the directory", players.len());

    let store = MemorySettingsStore::new();
    let sounds = SoundSettings::load(&store);
    let cues = SilentCuePlayer;

    let engine = SharedEngine::new(MatchEngine::new());
    engine
        .with(|engine| {
            for (i, player) in players.iter().take(10).enumerate() {
                let team = if i % 2 == 0 { Team::Yellow } else { Team::Blue };
                engine.add_player(team, &player.name)?;
            }
            engine.start_match()
        })
        .await?;

    let (yellow, blue) = engine
        .with(|engine| {
            let roster = |team| -> Vec<String> {
                engine.roster(team).iter().map(|p| p.name.clone()).collect()
            };
            (roster(Team::Yellow), roster(Team::Blue))
        })
        .await;

    let goal = engine
        .with(|engine| engine.record_goal(Team::Yellow, &yellow[0], Some(yellow[1].as_str())))
        .await?;
    sounds.announce(&cues, &goal);

    let own_goal = engine.with(|engine| engine.record_own_goal(Team::Blue)).await?;
    sounds.announce(&cues, &own_goal);
    engine.with(|engine| engine.undo_last()).await?;

    let goal = engine
        .with(|engine| engine.record_goal(Team::Blue, &blue[0], None))
        .await?;
    sounds.announce(&cues, &goal);

    let date = Local::now().format("%d.%m.%Y").to_string();
    let summary = engine.with(|engine| engine.build_export_summary(&date)).await;
    println!("{summary}");

    let sink = FileExportSink::new(std::env::temp_dir());
    let filename = export_filename(&date);
    sink.export(&summary, &filename)?;
    println!("written to {}", sink.dir().join(filename).display());

    Ok(())
}
