//! Host-side runtime helpers for executing reducer effects against injected host services.
//!
//! The reducer stays pure; everything that touches timers, the network, storage or the address bar
//! goes through [`DesktopHostContext`], which wraps the [`HostServices`] bundle chosen by the entry
//! layer.

mod boot;
mod content_effects;
mod effects;

use std::rc::Rc;

use leptos::Callback;
use storefront_host::{HostServices, RouteClassifier};

use crate::{
    cleanup::CleanupRegistry,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle plus per-window cleanup hooks for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
    cleanup: CleanupRegistry,
}

impl DesktopHostContext {
    pub fn new(services: HostServices) -> Self {
        Self {
            services,
            cleanup: CleanupRegistry::default(),
        }
    }

    pub fn services(&self) -> &HostServices {
        &self.services
    }

    /// Returns the configured protected-route classifier.
    pub fn routes(&self) -> Rc<dyn RouteClassifier> {
        self.services.routes.clone()
    }

    /// Returns the shared cleanup-hook registry.
    pub fn cleanup(&self) -> CleanupRegistry {
        self.cleanup.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Installs boot hydration: viewport and motion facts, stored settings, then the deep link.
    pub fn install_boot(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }
}

impl std::fmt::Debug for DesktopHostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopHostContext")
            .field("services", &self.services)
            .field("cleanup", &self.cleanup)
            .finish()
    }
}
