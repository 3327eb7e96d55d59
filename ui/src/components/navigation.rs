use dioxus::router::Navigator;

use super::app::Route;

/// Something that can move the app to another route.
pub trait Navigate {
    fn navigate(&self, to: Route);
}

impl Navigate for Navigator {
    fn navigate(&self, to: Route) {
        self.push(to);
    }
}

/// Empty-state action: back to the storefront root.
pub fn continue_shopping(nav: &impl Navigate) {
    tracing::debug!("Continue shopping from empty order history");
    nav.navigate(Route::Storefront {});
}

/// Click handler for the empty-state button.
pub fn on_continue_shopping(nav: impl Navigate + 'static) -> impl FnMut(()) + 'static {
    move |_| continue_shopping(&nav)
}
