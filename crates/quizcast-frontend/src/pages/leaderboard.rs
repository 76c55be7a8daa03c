use yew::prelude::*;

use quizcast::data::{ClientEvent, Player, ServerEvent};

use crate::components::{BarChart, ChartSeries, HeartMeter};
use crate::hooks::{use_server_event, use_socket};

// Keep the chart readable when the room is crowded
const CHART_LIMIT: usize = 8;

#[function_component(LeaderboardPage)]
pub fn leaderboard_page() -> Html {
    let socket = use_socket();
    let players = use_state(Vec::<Player>::new);

    {
        let send = socket.send.clone();
        use_effect_with((), move |_| send.emit(ClientEvent::GetPlayers));
    }

    {
        let players = players.clone();
        use_server_event(move |event| {
            if let ServerEvent::PlayersList { players: roster } = event {
                let mut ranking = roster.clone();
                ranking.sort_by(|a, b| b.points.cmp(&a.points));
                players.set(ranking);
            }
        });
    }

    let chart_players: Vec<&Player> = players.iter().take(CHART_LIMIT).collect();
    let labels: Vec<AttrValue> = chart_players
        .iter()
        .map(|player| AttrValue::from(player.name.clone()))
        .collect();
    let scores = ChartSeries {
        name: AttrValue::from("Points"),
        fill: AttrValue::from("#2563eb"),
        values: chart_players
            .iter()
            .map(|player| player.points.max(0) as u32)
            .collect(),
    };

    html! {
        <div class="p-8 max-w-2xl mx-auto">
            <h1 class="text-3xl font-bold mb-6">{ "Leaderboard" }</h1>

            {
                if players.is_empty() {
                    html! { <p class="text-gray-500">{ "No players yet." }</p> }
                } else {
                    html! {
                        <>
                            <div class="mb-8 overflow-x-auto">
                                <BarChart labels={labels} series={vec![scores]} />
                            </div>

                            <ol class="space-y-2">
                                {
                                    players.iter().enumerate().map(|(rank, player)| html! {
                                        <li class="flex items-center justify-between px-4 py-3 bg-gray-50 border border-gray-200 rounded">
                                            <span class="font-medium">
                                                { format!("{}. {}", rank + 1, player.name) }
                                            </span>
                                            <span class="flex items-center space-x-4">
                                                <HeartMeter total={player.hearts.max(1)} left={player.hearts} />
                                                <span class="text-lg font-bold">
                                                    { format!("{} pts", player.points) }
                                                </span>
                                            </span>
                                        </li>
                                    }).collect::<Html>()
                                }
                            </ol>
                        </>
                    }
                }
            }
        </div>
    }
}
