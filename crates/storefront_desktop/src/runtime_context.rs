//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the surface slots
//! rendered by the window layer, and host bootstrap wiring. UI composition stays in
//! [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;
use storefront_host::HostServices;

use crate::{
    apps::AppRegistry,
    components::surfaces::{self, SurfaceSlot},
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, DesktopEnv, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Long-lived reactive owner for surfaces that must outlive the effect that created them.
    pub owner: Owner,
    /// App registry and route classifier consulted by the reducer.
    pub env: StoredValue<DesktopEnv>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Mounted window surfaces in creation order.
    pub surfaces: RwSignal<Vec<SurfaceSlot>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    effect_executor::install(runtime);
    surfaces::install(runtime);
    runtime.host.get_value().install_boot(runtime.dispatch);
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots stored settings.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// App catalog; defaults to the built-in `apps.toml` registry.
    #[prop(optional)]
    apps: Option<AppRegistry>,
    children: Children,
) -> impl IntoView {
    let Some(owner) = Owner::current() else {
        logging::warn!("DesktopProvider rendered without a reactive owner");
        return children().into_view();
    };

    let env = store_value(DesktopEnv::new(
        apps.unwrap_or_else(AppRegistry::builtin),
        host_services.routes.clone(),
    ));
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let surfaces = create_rw_signal(Vec::<SurfaceSlot>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let new_effects =
            env.with_value(|env| reduce_desktop(&mut desktop, &mut ui, env, action));

        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        owner,
        env,
        state,
        interaction,
        effects,
        surfaces,
        dispatch,
    };

    provide_context(runtime.clone());

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
