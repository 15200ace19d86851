use super::progress_bar::ProgressBar;
use super::GameContext;
use crate::content::{self, Milestone};
use crate::model::{ActionId, Level};
use yew::prelude::*;

fn milestone_body(m: &Milestone) -> Html {
    match m {
        Milestone::Education(e) => html! {<>
            <div style="font-size:13px;">{ format!("CGPA: {}", e.cgpa) }</div>
            <div style="font-size:12px; opacity:0.7;">{ e.coursework }</div>
        </>},
        Milestone::Experience(e) => html! {<>
            <div style="font-size:12px; opacity:0.7;">{ e.location }</div>
            <ul style="margin:0; font-size:13px;">{ for e.responsibilities.iter().map(|r| html!{ <li>{ *r }</li> }) }</ul>
            <div style="font-size:12px; font-family:monospace; opacity:0.7;">{ e.tech_stack.join(" · ") }</div>
        </>},
    }
}

#[function_component]
pub fn Timeline() -> Html {
    let selected = use_state(|| None::<usize>);
    let Some(game) = use_context::<GameContext>() else {
        return html! {};
    };
    let state = game.state();
    let milestones = content::milestones();
    let progress = state.level_progress(Level::Experience, milestones.len());
    let all_visited = progress.is_complete();
    let visited_set: Vec<usize> = state
        .actions()
        .filter_map(|a| match a {
            ActionId::VisitCheckpoint(i) => Some(i),
            _ => None,
        })
        .collect();

    let checkpoints = milestones
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let visited = visited_set.contains(&i);
            let onclick = {
                let game = game.clone();
                let selected = selected.clone();
                Callback::from(move |_| {
                    selected.set(Some(i));
                    game.complete(ActionId::VisitCheckpoint(i));
                })
            };
            html! {
                <div key={i} onclick={onclick} style="cursor:pointer; display:flex; align-items:center; gap:12px;">
                    <span style={format!("width:14px; height:14px; border-radius:50%; background:{};", if visited { "#3fb950" } else { "#30363d" })} />
                    <div>
                        <div style="font-weight:600;">{ m.title() }</div>
                        <div style="font-size:12px; opacity:0.7;">{ format!("{} · {}", m.sub(), m.duration()) }</div>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    let detail = match (*selected).and_then(|i| milestones.get(i)) {
        Some(m) => {
            let close = {
                let selected = selected.clone();
                Callback::from(move |_| selected.set(None))
            };
            html! {<div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:14px 18px; max-width:560px; display:flex; flex-direction:column; gap:8px;">
                <div style="display:flex; justify-content:space-between; gap:12px;">
                    <h3 style="margin:0;">{ m.title() }</h3>
                    <button onclick={close}>{"Close"}</button>
                </div>
                { milestone_body(m) }
            </div>}
        }
        None => html! {},
    };

    let next_btn = {
        let game = game.clone();
        Callback::from(move |_| game.advance())
    };

    html! {
        <section style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:18px; padding:32px 16px 128px;">
            <h2 style="margin:0; color:#58a6ff;">{ Level::Experience.title() }</h2>
            <ProgressBar progress={progress} label={"WAYPOINTS FOUND"} />
            { if progress.done == 0 { html!{ <div style="font-size:11px; opacity:0.6;">{"Click a checkpoint to explore it."}</div> } } else { html!{} } }
            <div style="display:flex; flex-direction:column; gap:14px;">{ checkpoints }</div>
            { detail }
            { if all_visited && selected.is_none() { html!{ <button onclick={next_btn}>{"FACE THE FINAL BOSS ▶"}</button> } } else { html!{} } }
        </section>
    }
}
