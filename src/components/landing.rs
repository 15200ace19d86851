use super::GameContext;
use crate::content::{BOOT_LOGS, PERSONAL};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const BOOT_STEP_MS: i32 = 600;

#[function_component(Landing)]
pub fn landing() -> Html {
    let game = use_context::<GameContext>();
    let boot_phase = use_state(|| 0usize);
    let counter = use_mut_ref(|| 0usize);

    // Reveal one boot line per tick
    {
        let boot_phase = boot_phase.clone();
        use_effect_with((), move |_| {
            let tick = Closure::<dyn FnMut()>::new(move || {
                let mut c = counter.borrow_mut();
                if *c < BOOT_LOGS.len() {
                    *c += 1;
                    boot_phase.set(*c);
                }
            });
            let handle = web_sys::window().and_then(|win| {
                win.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    BOOT_STEP_MS,
                )
                .ok()
            });
            move || {
                if let (Some(win), Some(id)) = (web_sys::window(), handle) {
                    win.clear_interval_with_handle(id);
                }
                drop(tick);
            }
        });
    }

    let booted = *boot_phase >= BOOT_LOGS.len();
    let start_btn = {
        let game = game.clone();
        Callback::from(move |_| {
            if let Some(game) = &game {
                game.advance();
            }
        })
    };

    html! {
        <section style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:24px; padding:16px; text-align:center;">
            <div style="font-family:monospace; font-size:13px; color:#3fb950; text-align:left; min-height:90px;">
                { for BOOT_LOGS.iter().take(*boot_phase).map(|line| html!{ <div>{ *line }</div> }) }
            </div>
            <h1 style="margin:0; font-size:40px; color:#58a6ff;">{ PERSONAL.name }</h1>
            <p style="margin:0; opacity:0.85;">{ PERSONAL.role }</p>
            <p style="margin:0; max-width:520px; opacity:0.7; font-size:14px;">{ PERSONAL.intro }</p>
            <button
                onclick={start_btn}
                disabled={!booted}
                style={format!("padding:12px 28px; font-size:16px; font-weight:700; letter-spacing:2px; opacity:{};", if booted { 1.0 } else { 0.0 })}
            >{"PRESS START"}</button>
        </section>
    }
}
