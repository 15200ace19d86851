use super::progress_bar::ProgressBar;
use super::GameContext;
use crate::content::{self, PERSONAL};
use crate::model::{ActionId, Level};
use crate::util::cwarn;
use yew::prelude::*;

#[function_component]
pub fn ContactBoss() -> Html {
    let Some(game) = use_context::<GameContext>() else {
        return html! {};
    };
    let state = game.state();
    let channels = content::contact_channels();
    let unlocked = state.completed_with_prefix(ActionId::CONTACT_PREFIX);
    let progress = state.level_progress(Level::Contact, channels.len());
    let victory = progress.is_complete();

    let buttons = channels
        .into_iter()
        .map(|ch| {
            let open = unlocked.contains(&ch.id);
            let onclick = {
                let game = game.clone();
                let id = ch.id;
                let link = ch.link.clone();
                Callback::from(move |_| {
                    game.complete(ActionId::UnlockChannel(id.to_string()));
                    if let (Some(win), Some(link)) = (web_sys::window(), &link) {
                        if win.open_with_url_and_target(link, "_blank").is_err() {
                            cwarn(&format!("contact: could not open {}", link));
                        }
                    }
                })
            };
            html! {
                <button key={ch.id} onclick={onclick}
                    style={format!("display:flex; align-items:center; gap:8px; padding:10px 16px; border:1px solid {};", if open { "#3fb950" } else { "#30363d" })}>
                    <span>{ ch.icon }</span>
                    <span>{ ch.label }</span>
                    <span>{ if open { "🔓" } else { "🔒" } }</span>
                </button>
            }
        })
        .collect::<Html>();

    let reset_cb = {
        let game = game.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if win
                    .confirm_with_message("This will wipe your progress and restart from the boot screen. Are you sure?")
                    .unwrap_or(false)
                {
                    game.reset();
                }
            } else {
                game.reset();
            }
        })
    };

    html! {
        <section style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:18px; padding:32px 16px 128px;">
            <h2 style="margin:0; color:#f85149;">{ if victory { "VICTORY REACHED!" } else { Level::Contact.title() } }</h2>
            <p style="margin:0; opacity:0.75; text-align:center; max-width:480px;">
                { if victory {
                    format!("All channels open. Reach {} at {}.", PERSONAL.name, PERSONAL.email)
                } else {
                    "Unlock every communication channel to defeat the boss.".to_string()
                } }
            </p>
            <ProgressBar progress={progress} label={"CHANNELS UNLOCKED"} color={"#f85149"} />
            <div style="display:flex; flex-wrap:wrap; gap:10px; justify-content:center;">{ buttons }</div>
            <button onclick={reset_cb} style="background:#f85149; border:1px solid #b62324; color:#fff;">{"NEW GAME (Reset Progress)"}</button>
        </section>
    }
}
