use leptos::{create_effect, logging, on_cleanup, spawn_local, Callable, Callback};
use storefront_host::{DisplayEnvironment, Unsubscribe};

use crate::{deep_link, host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let services = host.services().clone();

        let viewport = services.environment.viewport();
        dispatch.call(DesktopAction::SetViewport {
            width: viewport.width,
            height: viewport.height,
        });
        dispatch.call(DesktopAction::SetSystemReducedMotion {
            reduced: services.environment.prefers_reduced_motion(),
        });
        let motion_watch =
            watch_system_motion(services.environment.as_ref(), move |action| dispatch.call(action));
        if let Some(unsubscribe) = motion_watch {
            on_cleanup(unsubscribe);
        }

        let location = services.navigation.current_location();
        let link = deep_link::resolve(&location, services.routes.as_ref());

        spawn_local(async move {
            let boot = persistence::load_boot_settings(services.prefs.as_ref()).await;
            dispatch.call(DesktopAction::HydrateSettings {
                settings: boot.settings,
                status: boot.status,
            });

            // Settings first, so the deep-linked window opens with the stored motion preference.
            if let Some(link) = link {
                logging::log!("boot deep link: {link:?}");
                dispatch.call(DesktopAction::ApplyDeepLink(link));
            }
        });
    });
}

/// Forwards host reduced-motion changes for the "system" setting.
fn watch_system_motion(
    environment: &dyn DisplayEnvironment,
    dispatch: impl Fn(DesktopAction) + 'static,
) -> Option<Unsubscribe> {
    environment.watch_reduced_motion(Box::new(move |reduced| {
        dispatch(DesktopAction::SetSystemReducedMotion { reduced })
    }))
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;
    use storefront_host::{FixedDisplayEnvironment, ViewportSize};

    use super::*;

    type Listener = Rc<RefCell<Option<Box<dyn Fn(bool)>>>>;

    #[derive(Default)]
    struct WatchableEnvironment {
        listener: Listener,
    }

    impl DisplayEnvironment for WatchableEnvironment {
        fn viewport(&self) -> ViewportSize {
            ViewportSize::default()
        }

        fn prefers_reduced_motion(&self) -> bool {
            false
        }

        fn watch_reduced_motion(&self, on_change: Box<dyn Fn(bool)>) -> Option<Unsubscribe> {
            *self.listener.borrow_mut() = Some(on_change);
            let listener = self.listener.clone();
            Some(Box::new(move || {
                listener.borrow_mut().take();
            }))
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<DesktopAction>>>, impl Fn(DesktopAction) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |action| sink.borrow_mut().push(action))
    }

    #[test]
    fn host_motion_changes_dispatch_until_unsubscribed() {
        let environment = WatchableEnvironment::default();
        let (seen, dispatch) = recorder();
        let unsubscribe = watch_system_motion(&environment, dispatch).expect("watch");

        if let Some(listener) = environment.listener.borrow().as_ref() {
            listener(true);
            listener(false);
        }
        assert_eq!(
            *seen.borrow(),
            vec![
                DesktopAction::SetSystemReducedMotion { reduced: true },
                DesktopAction::SetSystemReducedMotion { reduced: false },
            ]
        );

        unsubscribe();
        assert!(environment.listener.borrow().is_none());
    }

    #[test]
    fn hosts_without_change_events_are_not_watched() {
        let (seen, dispatch) = recorder();
        assert!(watch_system_motion(&FixedDisplayEnvironment::default(), dispatch).is_none());
        assert!(seen.borrow().is_empty());
    }
}
