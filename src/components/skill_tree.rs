use super::progress_bar::ProgressBar;
use super::GameContext;
use crate::content::{self, SKILLS};
use crate::model::{ActionId, Level};
use yew::prelude::*;

fn unlock_all(game: &GameContext, names: Vec<&'static str>) {
    for name in names {
        game.complete(ActionId::UnlockSkill(name.to_string()));
    }
}

#[function_component]
pub fn SkillTree() -> Html {
    let Some(game) = use_context::<GameContext>() else {
        return html! {};
    };
    let state = game.state();
    let unlocked = state.completed_with_prefix(ActionId::SKILL_PREFIX);
    let total = content::all_skills().len();
    let progress = state.level_progress(Level::Skills, total);
    let fully_unlocked = progress.is_complete();

    let scan_btn = {
        let game = game.clone();
        Callback::from(move |_| unlock_all(&game, content::neural_scan()))
    };
    let next_btn = {
        let game = game.clone();
        Callback::from(move |_| game.advance())
    };

    let branches = SKILLS
        .iter()
        .map(|cat| {
            let branch_btn = {
                let game = game.clone();
                let category = cat.category;
                let first = cat.items.first().map(|s| s.name);
                Callback::from(move |_| {
                    if let Some(first) = first {
                        unlock_all(&game, content::skill_cascade(category, first));
                    }
                })
            };
            let nodes = cat
                .items
                .iter()
                .map(|skill| {
                    let open = unlocked.contains(&skill.name);
                    let onclick = {
                        let game = game.clone();
                        let category = cat.category;
                        let name = skill.name;
                        Callback::from(move |_| {
                            unlock_all(&game, content::skill_cascade(category, name))
                        })
                    };
                    html! {
                        <button key={skill.name} onclick={onclick}
                            style={format!("display:flex; justify-content:space-between; gap:12px; padding:6px 10px; border:1px solid {}; background:{}; color:inherit; border-radius:6px;", if open { "#3fb950" } else { "#30363d" }, if open { "#12261e" } else { "#161b22" })}>
                            <span>{ if open { skill.name } else { "???" } }</span>
                            <span style="font-variant-numeric:tabular-nums; opacity:0.7;">{ if open { format!("{}%", skill.proficiency) } else { "🔒".to_string() } }</span>
                        </button>
                    }
                })
                .collect::<Html>();
            html! {
                <div key={cat.category} style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px; min-width:220px; display:flex; flex-direction:column; gap:6px;">
                    <div style="display:flex; justify-content:space-between; align-items:center;">
                        <span style="font-weight:600;">{ cat.category }</span>
                        <button onclick={branch_btn} style="font-size:11px; padding:2px 6px;">{"Unlock"}</button>
                    </div>
                    { nodes }
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:18px; padding:32px 16px 128px;">
            <h2 style="margin:0; color:#58a6ff;">{ Level::Skills.title() }</h2>
            { if !fully_unlocked { html!{ <button onclick={scan_btn}>{"⚡ NEURAL SCAN"}</button> } } else { html!{} } }
            <div style="display:flex; flex-wrap:wrap; gap:12px; justify-content:center;">{ branches }</div>
            <ProgressBar progress={progress} label={"SKILLS DISCOVERED"} />
            { if fully_unlocked { html!{ <button onclick={next_btn}>{"ENTER PROJECT BATTLES ▶"}</button> } } else { html!{} } }
        </section>
    }
}
