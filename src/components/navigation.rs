use super::GameContext;
use crate::state::nav_entries;
use yew::prelude::*;

#[function_component]
pub fn Navigation() -> Html {
    let Some(game) = use_context::<GameContext>() else {
        return html! {};
    };
    let state = game.state();
    let entries = nav_entries(state);

    let dots = entries
        .into_iter()
        .map(|entry| {
            let onclick = {
                let game = game.clone();
                let level = entry.level;
                Callback::from(move |_| {
                    game.request_level(level);
                })
            };
            let color = if entry.active {
                "#f0883e"
            } else if entry.unlocked {
                "#58a6ff"
            } else {
                "#30363d"
            };
            let scale = if entry.active { "scale(1.5)" } else { "scale(1)" };
            html! {
                <button
                    key={entry.label.clone()}
                    title={entry.tooltip()}
                    disabled={!entry.unlocked}
                    onclick={onclick}
                    style={format!("width:12px; height:12px; padding:0; border:none; border-radius:50%; background:{}; transform:{}; cursor:{};", color, scale, if entry.unlocked { "pointer" } else { "not-allowed" })}
                />
            }
        })
        .collect::<Html>();

    html! {<nav style="position:fixed; bottom:48px; left:50%; transform:translateX(-50%); z-index:50;">
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:999px; padding:14px 28px; display:flex; align-items:center; gap:22px;">
            { dots }
            <div style="height:16px; width:1px; background:#30363d;" />
            <div style="font-size:10px; font-family:monospace; font-weight:700; color:#58a6ff;">
                { format!("LVL {}", state.current_level.index() + 1) }
            </div>
        </div>
    </nav>}
}
