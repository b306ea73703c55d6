//! Keyed application registry and the built-in storefront catalog.

use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{AppId, LaunchContext, OpenWindowRequest, WindowSource};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));
}

/// Launch routine: turns launch context into the window to open.
pub type LaunchFn = Rc<dyn Fn(&LaunchContext) -> OpenWindowRequest>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("app catalog decode failed: {0}")]
    Decode(String),
}

/// One entry of `apps.toml` as emitted by the build script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppManifest {
    pub app_id: String,
    pub label: String,
    pub icon: String,
    pub title: String,
    pub url: Option<String>,
    pub html: Option<String>,
    pub accepts_context: bool,
    pub single_instance: bool,
    pub show_on_desktop: bool,
    pub show_in_start_menu: bool,
    #[serde(default)]
    pub menu_group: Option<String>,
}

impl AppManifest {
    /// Flyout labels from the start menu root down to this app.
    pub fn menu_path(&self) -> Vec<String> {
        self.menu_group
            .as_deref()
            .map(|group| group.split('/').map(|level| level.trim().to_string()).collect())
            .unwrap_or_default()
    }

    /// Window request for this app. Apps that accept context let `url`/`title` override defaults.
    pub fn open_request(&self, context: &LaunchContext) -> OpenWindowRequest {
        let (title, url) = if self.accepts_context {
            (
                context.title.clone().unwrap_or_else(|| self.title.clone()),
                context.url.clone().or_else(|| self.url.clone()),
            )
        } else {
            (self.title.clone(), self.url.clone())
        };
        let source = match (url, &self.html) {
            (Some(url), _) => WindowSource::Url(url),
            (None, Some(html)) => WindowSource::Inline(html.clone()),
            (None, None) => WindowSource::Empty,
        };
        OpenWindowRequest {
            title: Some(title),
            app_id: Some(AppId::new(self.app_id.clone())),
            source,
        }
    }
}

/// Parses the build-time catalog.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] when the generated JSON does not match [`AppManifest`].
pub fn builtin_manifests() -> Result<Vec<AppManifest>, CatalogError> {
    serde_json::from_str(generated::APP_CATALOG_JSON)
        .map_err(|err| CatalogError::Decode(err.to_string()))
}

/// Registered application with its launcher presentation.
#[derive(Clone)]
pub struct AppDefinition {
    pub app_id: AppId,
    pub label: String,
    pub icon: String,
    pub single_instance: bool,
    pub show_on_desktop: bool,
    pub show_in_start_menu: bool,
    /// Flyout labels the start menu nests this app under. Empty means top level.
    pub menu_path: Vec<String>,
    pub launch: LaunchFn,
}

/// One row of the cascading start menu.
#[derive(Debug, Clone)]
pub enum StartMenuNode {
    App(AppDefinition),
    Group {
        label: String,
        children: Vec<StartMenuNode>,
    },
}

impl StartMenuNode {
    pub fn label(&self) -> &str {
        match self {
            Self::App(app) => &app.label,
            Self::Group { label, .. } => label,
        }
    }
}

fn insert_menu_node(nodes: &mut Vec<StartMenuNode>, path: &[String], app: AppDefinition) {
    let Some((head, rest)) = path.split_first() else {
        nodes.push(StartMenuNode::App(app));
        return;
    };
    let existing = nodes.iter().position(
        |node| matches!(node, StartMenuNode::Group { label, .. } if label == head),
    );
    let index = existing.unwrap_or_else(|| {
        nodes.push(StartMenuNode::Group {
            label: head.clone(),
            children: Vec::new(),
        });
        nodes.len() - 1
    });
    if let StartMenuNode::Group { children, .. } = &mut nodes[index] {
        insert_menu_node(children, rest, app);
    }
}

impl std::fmt::Debug for AppDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppDefinition")
            .field("app_id", &self.app_id)
            .field("label", &self.label)
            .field("single_instance", &self.single_instance)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppRegistry {
    apps: Vec<AppDefinition>,
}

impl AppRegistry {
    /// Registry holding every app from `apps.toml`.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        match builtin_manifests() {
            Ok(manifests) => {
                for manifest in manifests {
                    registry.register_manifest(manifest);
                }
            }
            Err(err) => leptos::logging::warn!("{err}"),
        }
        registry
    }

    /// Registers (or replaces) a multi-instance app.
    pub fn register(
        &mut self,
        app_id: impl Into<AppId>,
        launch: impl Fn(&LaunchContext) -> OpenWindowRequest + 'static,
    ) {
        let app_id = app_id.into();
        let label = app_id.to_string();
        self.insert(AppDefinition {
            icon: "app".to_string(),
            app_id,
            label,
            single_instance: false,
            show_on_desktop: false,
            show_in_start_menu: false,
            menu_path: Vec::new(),
            launch: Rc::new(launch),
        });
    }

    /// Registers (or replaces) an app that reuses its existing window on relaunch.
    pub fn register_single_instance(
        &mut self,
        app_id: impl Into<AppId>,
        launch: impl Fn(&LaunchContext) -> OpenWindowRequest + 'static,
    ) {
        self.register(app_id, launch);
        if let Some(last) = self.apps.last_mut() {
            last.single_instance = true;
        }
    }

    pub fn register_manifest(&mut self, manifest: AppManifest) {
        let definition = AppDefinition {
            app_id: AppId::new(manifest.app_id.clone()),
            label: manifest.label.clone(),
            icon: manifest.icon.clone(),
            single_instance: manifest.single_instance,
            show_on_desktop: manifest.show_on_desktop,
            show_in_start_menu: manifest.show_in_start_menu,
            menu_path: manifest.menu_path(),
            launch: Rc::new(move |context: &LaunchContext| manifest.open_request(context)),
        };
        self.insert(definition);
    }

    pub fn get(&self, app_id: &AppId) -> Option<&AppDefinition> {
        self.apps.iter().find(|app| &app.app_id == app_id)
    }

    pub fn desktop_apps(&self) -> Vec<AppDefinition> {
        self.apps
            .iter()
            .filter(|app| app.show_on_desktop)
            .cloned()
            .collect()
    }

    /// Start menu entries nested by their flyout path, in registration order.
    pub fn start_menu(&self) -> Vec<StartMenuNode> {
        let mut nodes = Vec::new();
        for app in self.apps.iter().filter(|app| app.show_in_start_menu) {
            insert_menu_node(&mut nodes, &app.menu_path, app.clone());
        }
        nodes
    }

    fn insert(&mut self, definition: AppDefinition) {
        self.apps.retain(|app| app.app_id != definition.app_id);
        self.apps.push(definition);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_catalog_has_every_storefront_app() {
        let registry = AppRegistry::builtin();
        for id in [
            "storefront",
            "collections",
            "search",
            "cart",
            "support",
            "system",
            "tools",
            "vault",
            "compressor",
        ] {
            assert!(registry.get(&AppId::from(id)).is_some(), "missing {id}");
        }
        let compressor = registry.get(&AppId::from("compressor")).expect("compressor");
        assert!(compressor.single_instance);
        assert!(!registry.get(&AppId::from("cart")).expect("cart").single_instance);
    }

    #[test]
    fn context_overrides_apply_only_to_apps_that_accept_them() {
        let registry = AppRegistry::builtin();
        let context = LaunchContext {
            url: Some("/collections/mugs".to_string()),
            title: Some("Mugs".to_string()),
        };

        let storefront = registry.get(&AppId::from("storefront")).expect("storefront");
        let request = (storefront.launch)(&context);
        assert_eq!(request.title.as_deref(), Some("Mugs"));
        assert_eq!(request.source, WindowSource::Url("/collections/mugs".to_string()));

        let cart = registry.get(&AppId::from("cart")).expect("cart");
        let request = (cart.launch)(&context);
        assert_eq!(request.title.as_deref(), Some("Cart"));
        assert_eq!(request.source, WindowSource::Url("/cart".to_string()));
        assert_eq!(request.app_id, Some(AppId::from("cart")));
    }

    #[test]
    fn system_defaults_to_the_account_page() {
        let registry = AppRegistry::builtin();
        let system = registry.get(&AppId::from("system")).expect("system");
        let request = (system.launch)(&LaunchContext::default());
        assert_eq!(request.title.as_deref(), Some("Account"));
        assert_eq!(request.source, WindowSource::Url("/account".to_string()));
    }

    #[test]
    fn vault_is_an_inline_hub_with_account_buttons() {
        let registry = AppRegistry::builtin();
        let vault = registry.get(&AppId::from("vault")).expect("vault");
        match (vault.launch)(&LaunchContext::default()).source {
            WindowSource::Inline(html) => {
                assert!(html.contains("data-open-url=\"/account\""));
                assert!(html.contains("data-open-url=\"/account/orders\""));
            }
            other => panic!("expected inline vault, got {other:?}"),
        }
    }

    #[test]
    fn re_registering_replaces_the_launch_routine() {
        let mut registry = AppRegistry::default();
        registry.register("notes", |_| OpenWindowRequest::inline("Old", ""));
        registry.register_single_instance("notes", |_| OpenWindowRequest::inline("New", ""));

        let notes = registry.get(&AppId::from("notes")).expect("notes");
        assert!(notes.single_instance);
        assert_eq!(
            (notes.launch)(&LaunchContext::default()).title.as_deref(),
            Some("New")
        );
    }

    fn outline(nodes: &[StartMenuNode]) -> Vec<String> {
        let mut lines = Vec::new();
        for node in nodes {
            match node {
                StartMenuNode::App(app) => lines.push(app.app_id.to_string()),
                StartMenuNode::Group { label, children } => {
                    lines.push(format!("{label} >"));
                    lines.extend(outline(children).into_iter().map(|line| format!("  {line}")));
                }
            }
        }
        lines
    }

    #[test]
    fn start_menu_cascades_by_group_path() {
        let menu = AppRegistry::builtin().start_menu();
        assert_eq!(
            outline(&menu),
            vec![
                "Shop >",
                "  storefront",
                "  collections",
                "  search",
                "  cart",
                "support",
                "Account >",
                "  system",
                "  vault",
                "Tools >",
                "  Image >",
                "    compressor",
                "  tools",
            ]
        );
    }

    #[test]
    fn ungrouped_registrations_stay_at_the_top_level() {
        let mut registry = AppRegistry::default();
        registry.register("notes", |_| OpenWindowRequest::inline("Notes", ""));
        if let Some(notes) = registry.apps.last_mut() {
            notes.show_in_start_menu = true;
        }
        let menu = registry.start_menu();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].label(), "notes");
    }
}
