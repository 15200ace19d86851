use super::{
    character_stats::CharacterStats, contact_boss::ContactBoss, landing::Landing,
    navigation::Navigation, project_battles::ProjectBattles, skill_tree::SkillTree,
    timeline::Timeline,
};
use crate::model::{ActionId, Level, ProgressionAction, ProgressionState};
use crate::state::{controller, BrowserSlot, PortfolioStore, Screen};
use yew::prelude::*;

/// Store handle shared with every screen (no prop drilling).
#[derive(Clone, PartialEq)]
pub struct GameContext {
    pub store: UseReducerHandle<PortfolioStore>,
}

impl GameContext {
    pub fn state(&self) -> &ProgressionState {
        self.store.state()
    }

    pub fn complete(&self, action: ActionId) {
        self.store
            .dispatch(ProgressionAction::CompleteAction(action.key()));
    }

    /// Gated navigation; false when `target` is still locked.
    pub fn request_level(&self, target: Level) -> bool {
        if !self.state().is_unlocked(target) {
            return false;
        }
        self.store.dispatch(ProgressionAction::RequestLevel(target));
        true
    }

    pub fn advance(&self) {
        self.store.dispatch(ProgressionAction::Advance);
    }

    pub fn reset(&self) {
        self.store.dispatch(ProgressionAction::Reset);
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(|| PortfolioStore::load(BrowserSlot::detect()));

    // Count sessions in the free-form stats map
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            let sessions = store.state().stat("sessions").unwrap_or(0.0);
            store.dispatch(ProgressionAction::UpdateStat {
                key: "sessions".to_string(),
                value: sessions + 1.0,
            });
            store.dispatch(ProgressionAction::UpdateStat {
                key: "last_visit_ms".to_string(),
                value: js_sys::Date::now(),
            });
            || ()
        });
    }

    let ctx = GameContext {
        store: store.clone(),
    };
    let level = store.state().current_level;
    let content = match controller::screen_for(level) {
        Screen::Landing => html! { <Landing /> },
        Screen::CharacterStats => html! { <CharacterStats /> },
        Screen::SkillTree => html! { <SkillTree /> },
        Screen::ProjectBattles => html! { <ProjectBattles /> },
        Screen::Timeline => html! { <Timeline /> },
        Screen::ContactBoss => html! { <ContactBoss /> },
    };
    let nav = if controller::show_navigation(level) {
        html! { <Navigation /> }
    } else {
        html! {}
    };

    html! {
        <ContextProvider<GameContext> context={ctx}>
            <main style="min-height:100vh; background:#0d1117; color:#c9d1d9; font-family:system-ui, sans-serif; overflow-x:hidden;">
                { content }
                { nav }
            </main>
        </ContextProvider<GameContext>>
    }
}
