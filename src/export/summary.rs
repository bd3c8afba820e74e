use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::model::{ActionKind, GameAction, MatchView, Player, Team};

/// Render the match log as plain text.
///
/// Layout: a header with `date_label` and the final score, the chronological
/// action list, then every player with at least one goal or assist, sorted by
/// goals and then assists (both descending). Equal players keep roster order,
/// yellow before blue.
pub fn build_export_summary(view: &MatchView, date_label: &str) -> String {
    let mut lines = vec![
        format!("Dziennik meczu - {date_label}"),
        format!(
            "Wynik: {} {} - {} {}",
            Team::Yellow.label(),
            view.scoreboard.yellow,
            view.scoreboard.blue,
            Team::Blue.label()
        ),
        String::new(),
        "Przebieg meczu:".to_string(),
    ];

    if view.actions.is_empty() {
        lines.push("Brak akcji".to_string());
    } else {
        lines.extend(view.actions.iter().map(action_line));
    }

    lines.push(String::new());
    lines.push("Statystyki zawodników:".to_string());

    let contributors = Team::iter()
        .flat_map(|team| view.roster(team).iter().map(move |player| (team, player)))
        .filter(|(_, player)| player.has_stats())
        .sorted_by(|(_, a), (_, b)| b.goals.cmp(&a.goals).then(b.assists.cmp(&a.assists)))
        .collect_vec();

    if contributors.is_empty() {
        lines.push("Brak statystyk".to_string());
    } else {
        lines.extend(
            contributors
                .into_iter()
                .map(|(team, player)| player_line(team, player)),
        );
    }

    lines.join("\n")
}

fn action_line(action: &GameAction) -> String {
    let team = action.team.label();
    match action.kind {
        ActionKind::Goal => match &action.assistant {
            Some(assistant) => format!(
                "{} - Gol: {} ({team}), Asysta: {assistant}",
                action.timestamp, action.scorer
            ),
            None => format!("{} - Gol: {} ({team})", action.timestamp, action.scorer),
        },
        ActionKind::OwnGoal => format!("{} - Samobój ({team})", action.timestamp),
    }
}

fn player_line(team: Team, player: &Player) -> String {
    format!(
        "{} ({}): {} {}, {} {}",
        player.name,
        team.label(),
        player.goals,
        goals_word(player.goals),
        player.assists,
        assists_word(player.assists)
    )
}

fn goals_word(count: u32) -> &'static str {
    if count == 1 {
        "gol"
    } else {
        "gole"
    }
}

fn assists_word(count: u32) -> &'static str {
    if count == 1 {
        "asysta"
    } else {
        "asysty"
    }
}
