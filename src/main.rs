use engine::{
    CommentaryGenerator, EngineError, Formation, GameState, LineupManager, PlayStyle, Season,
    StateStore, TeamBuilder, TeamRecord,
};
use env_logger::Env;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::fs;
use std::path::PathBuf;

/// JSON file implementation of the engine's persistence seam.
struct JsonFileStore {
    path: PathBuf,
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<GameState>, EngineError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .map_err(|e| EngineError::Storage(e.to_string()))?;
        let state = serde_json::from_str(&raw).map_err(|e| EngineError::Storage(e.to_string()))?;

        Ok(Some(state))
    }

    fn save(&mut self, state: &GameState) -> Result<(), EngineError> {
        let json =
            serde_json::to_string_pretty(state).map_err(|e| EngineError::Storage(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| EngineError::Storage(e.to_string()))
    }
}

fn demo_records() -> Vec<TeamRecord> {
    let clubs = [
        ("Atletico Riviera", PlayStyle::TikiTaka, 78),
        ("Borgo United", PlayStyle::Counterattack, 74),
        ("Calcio Ponente", PlayStyle::Balanced, 71),
        ("Dinamo Levante", PlayStyle::HighPressing, 76),
        ("Estuario FC", PlayStyle::Balanced, 69),
        ("Fortezza Nord", PlayStyle::Counterattack, 72),
        ("Gran Sasso", PlayStyle::TikiTaka, 75),
        ("Herona Citta", PlayStyle::Balanced, 70),
    ];

    clubs
        .iter()
        .enumerate()
        .map(|(i, &(name, style, strength))| TeamRecord {
            id: i as u32 + 1,
            name: name.to_string(),
            crest: None,
            squad: None,
            style: Some(style),
            strength: Some(strength),
        })
        .collect()
}

fn load_records() -> color_eyre::Result<Vec<TeamRecord>> {
    match env::args().nth(1) {
        Some(path) => {
            let raw = fs::read_to_string(&path)?;
            let records: Vec<TeamRecord> = serde_json::from_str(&raw)?;
            info!("loaded {} team records from {}", records.len(), path);
            Ok(records)
        }
        None => Ok(demo_records()),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let teams = TeamBuilder::build_all(load_records()?);
    let user_team_id = teams[0].id;
    let user_name = teams[0].name.clone();

    let mut manager = LineupManager::new(Formation::default_formation(), teams[0].squad.clone());
    manager.auto_fill();
    let lineup = manager.confirm()?;

    info!(
        "{} lines up in a {} with {} on the bench",
        user_name,
        manager.formation().name,
        manager.bench().len()
    );

    let mut season = Season::new(teams, user_team_id)?;
    let mut rng = StdRng::seed_from_u64(rand::random());

    let mut store = JsonFileStore {
        path: PathBuf::from("season.json"),
    };

    while !season.is_finished() {
        let day = season.current_matchday;

        let user_result = match season.user_fixture() {
            Some(_) => {
                let mut engine = season.play_user_match(&lineup)?;
                engine.play_to_end(&mut rng);
                let result = engine.into_result();

                println!("\nMatchday {} - {}:", day, result.id);
                for line in CommentaryGenerator::generate(&result.events, result.home_id) {
                    println!("  {}' {}", line.minute, line.text);
                }
                println!("  final score {} - {}", result.home_score, result.away_score);

                Some(result)
            }
            None => None,
        };

        season.finish_matchday(user_result, &mut rng)?;

        store.save(&GameState {
            team_id: user_team_id,
            formation: lineup.formation.clone(),
            style: season.team(user_team_id).map(|t| t.style).unwrap_or_default(),
            lineup: Some(lineup.clone()),
            season: season.clone(),
        })?;
    }

    let table = season.standings();

    println!("\nFinal table:");
    println!(
        "{:<4}{:<20}{:>4}{:>4}{:>4}{:>4}{:>5}{:>5}{:>5}",
        "#", "Team", "P", "W", "D", "L", "GF", "GA", "Pts"
    );
    for (position, row) in table.rows.iter().enumerate() {
        println!(
            "{:<4}{:<20}{:>4}{:>4}{:>4}{:>4}{:>5}{:>5}{:>5}",
            position + 1,
            row.team_name,
            row.played,
            row.wins,
            row.draws,
            row.losses,
            row.goals_for,
            row.goals_against,
            row.points
        );
    }

    println!("\nTop scorers:");
    for scorer in season.top_scorers().iter().take(10) {
        println!(
            "  {:<24}{:<20}{}",
            scorer.player_name, scorer.team_name, scorer.goals
        );
    }

    if let Some(champion) = table.rows.first() {
        info!("champions: {}", champion.team_name);
    }

    Ok(())
}
