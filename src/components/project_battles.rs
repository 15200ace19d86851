use super::progress_bar::ProgressBar;
use super::GameContext;
use crate::content::PROJECTS;
use crate::model::{ActionId, Level};
use yew::prelude::*;

#[function_component]
pub fn ProjectBattles() -> Html {
    let selected = use_state(|| None::<usize>);
    let Some(game) = use_context::<GameContext>() else {
        return html! {};
    };
    let state = game.state();
    let progress = state.level_progress(Level::Projects, PROJECTS.len());
    let all_defeated = progress.is_complete();
    let defeated_set: Vec<usize> = state
        .actions()
        .filter_map(|a| match a {
            ActionId::DefeatProject(i) => Some(i),
            _ => None,
        })
        .collect();

    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let defeated = defeated_set.contains(&i);
            let onclick = {
                let game = game.clone();
                let selected = selected.clone();
                Callback::from(move |_| {
                    selected.set(Some(i));
                    game.complete(ActionId::DefeatProject(i));
                })
            };
            html! {
                <div key={i} onclick={onclick} style={format!("cursor:pointer; background:#161b22; border:1px solid {}; border-radius:8px; padding:12px 14px; width:260px; display:flex; flex-direction:column; gap:6px;", if defeated { "#3fb950" } else { "#30363d" })}>
                    <div style="font-weight:600;">{ p.title }</div>
                    <div style="font-size:12px; opacity:0.7;">{ p.role }</div>
                    <div style="font-size:11px; font-family:monospace; color:#d29922;">{ p.status }</div>
                    <div style="font-size:11px; opacity:0.6;">{ if defeated { "DEFEATED" } else { "ENGAGE ▶" } }</div>
                </div>
            }
        })
        .collect::<Html>();

    let detail = match *selected {
        Some(i) if i < PROJECTS.len() => {
            let p = &PROJECTS[i];
            let close = {
                let selected = selected.clone();
                Callback::from(move |_| selected.set(None))
            };
            html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:60;">
                <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; max-width:560px; display:flex; flex-direction:column; gap:10px;">
                    <div style="display:flex; justify-content:space-between; align-items:center; gap:12px;">
                        <h3 style="margin:0;">{ p.title }</h3>
                        <button onclick={close}>{"Close"}</button>
                    </div>
                    <p style="margin:0; font-size:14px; line-height:1.5;">{ p.description }</p>
                    <ul style="margin:0; font-size:13px;">{ for p.features.iter().map(|f| html!{ <li>{ *f }</li> }) }</ul>
                    <div style="font-size:12px; font-family:monospace; opacity:0.7;">{ p.tech_stack.join(" · ") }</div>
                    { if let Some(url) = p.github.or(p.link) { html!{ <a href={url} target="_blank" style="color:#58a6ff;">{"View source"}</a> } } else { html!{} } }
                </div>
            </div>}
        }
        _ => html! {},
    };

    let next_btn = {
        let game = game.clone();
        Callback::from(move |_| game.advance())
    };

    html! {
        <section style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:18px; padding:32px 16px 128px;">
            <h2 style="margin:0; color:#58a6ff;">{ Level::Projects.title() }</h2>
            <div style="display:flex; flex-wrap:wrap; gap:12px; justify-content:center;">{ cards }</div>
            <ProgressBar progress={progress} label={"CHALLENGES DEFEATED"} color={"#f85149"} />
            { if all_defeated && selected.is_none() { html!{ <button onclick={next_btn}>{"ENTER TIMELINE ▶"}</button> } } else { html!{} } }
            { detail }
        </section>
    }
}
