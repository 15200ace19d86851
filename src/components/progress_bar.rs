use crate::model::LevelProgress;
use crate::util::format_percent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressBarProps {
    pub progress: LevelProgress,
    pub label: String,
    #[prop_or("#58a6ff".to_string())]
    pub color: String,
}

#[function_component]
pub fn ProgressBar(props: &ProgressBarProps) -> Html {
    let pct = props.progress.percent();
    html! {<div style="display:flex; flex-direction:column; gap:4px; width:100%; max-width:480px;">
        <div style="display:flex; justify-content:space-between; font-size:11px; font-family:monospace; opacity:0.8;">
            <span>{ format!("{}: {} / {}", props.label, props.progress.done, props.progress.total) }</span>
            <span>{ format_percent(pct) }</span>
        </div>
        <div style="height:6px; background:#21262d; border-radius:3px; overflow:hidden;">
            <div style={format!("height:100%; width:{:.1}%; background:{};", pct, props.color)} />
        </div>
    </div>}
}
