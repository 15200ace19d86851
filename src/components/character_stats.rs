use super::progress_bar::ProgressBar;
use super::GameContext;
use crate::content::{ACHIEVEMENTS, PERSONAL};
use crate::model::{ActionId, Level};
use yew::prelude::*;

#[function_component]
pub fn CharacterStats() -> Html {
    let Some(game) = use_context::<GameContext>() else {
        return html! {};
    };
    let state = game.state();
    let stats = PERSONAL.stats;
    let revealed = state.completed_with_prefix(ActionId::STAT_PREFIX);
    let progress = state.level_progress(Level::About, stats.len());
    let all_revealed = progress.is_complete();

    let row_style = "display:flex; align-items:center; gap:8px; padding:10px 14px; border:1px solid #30363d; border-radius:8px; cursor:pointer;";
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style = "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";

    let rows = stats
        .iter()
        .map(|stat| {
            let shown = revealed.contains(&stat.label);
            let onclick = {
                let game = game.clone();
                let label = stat.label;
                Callback::from(move |_| game.complete(ActionId::RevealStat(label.to_string())))
            };
            let value = if shown {
                stat.value.to_string()
            } else {
                "??".to_string()
            };
            html! {
                <div key={stat.label} style={row_style} onclick={onclick}>
                    <span style={icon_style}>{ stat.icon }</span>
                    <span style={label_style}>
                        { stat.label }
                        { if shown { html!{ <div style="font-size:11px; opacity:0.6;">{ stat.description }</div> } } else { html!{} } }
                    </span>
                    <span style={format!("{} color:{};", value_style, if shown { "#3fb950" } else { "#8b949e" })}>{ value }</span>
                </div>
            }
        })
        .collect::<Html>();

    let next_btn = {
        let game = game.clone();
        Callback::from(move |_| game.advance())
    };
    let title = if all_revealed {
        "LEVEL 99 ARCHITECT".to_string()
    } else {
        format!("LEVEL {} DEVELOPER", PERSONAL.level)
    };

    html! {
        <section style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:18px; padding:32px 16px 128px;">
            <h2 style="margin:0; color:#58a6ff;">{ Level::About.title() }</h2>
            <div style="text-align:center;">
                <div style="font-size:22px; font-weight:700;">{ PERSONAL.name }</div>
                <div style="font-size:12px; font-family:monospace; opacity:0.6;">{ title }</div>
                <div style="font-size:12px; opacity:0.6;">{ format!("{} · {}", PERSONAL.location, PERSONAL.languages.join(", ")) }</div>
            </div>
            <p style="max-width:560px; font-size:14px; line-height:1.5; opacity:0.85;">{ PERSONAL.bio }</p>
            <ProgressBar progress={progress} label={"XP"} color={"#3fb950"} />
            <div style="display:flex; flex-direction:column; gap:8px; width:100%; max-width:480px;">{ rows }</div>
            { if all_revealed {
                html!{
                    <>
                        <ul style="margin:0; max-width:480px; font-size:12px; opacity:0.75;">
                            { for ACHIEVEMENTS.iter().map(|a| html!{ <li>{ *a }</li> }) }
                        </ul>
                        <button onclick={next_btn}>{"ENTER SKILL TREE ▶"}</button>
                    </>
                }
            } else {
                html!{ <div style="font-size:11px; opacity:0.6;">{"Click a stat to reveal it."}</div> }
            } }
        </section>
    }
}
