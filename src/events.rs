// Listener wiring: select `change` loads a film, field `input` validates and re-renders.
// Closures live for the page, so they are leaked with `forget`.

use std::rc::Rc;

use tracing::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

use crate::catalog::CatalogSource;
use crate::controller::FormController;
use crate::dom::EventTargets;
use crate::error::CrawlError;
use crate::view::CrawlView;

pub fn bind_events<S, V>(
    controller: &Rc<FormController<S, V>>,
    targets: &EventTargets,
) -> Result<(), CrawlError>
where
    S: CatalogSource + 'static,
    V: CrawlView + 'static,
{
    let change_controller = Rc::clone(controller);
    let change_cb = Closure::wrap(Box::new(move |_event: Event| {
        let controller = Rc::clone(&change_controller);
        spawn_local(async move {
            if let Err(err) = controller.on_selection_change().await {
                error!(error = %err, "film change handler failed");
            }
        });
    }) as Box<dyn FnMut(_)>);
    targets
        .film_select
        .add_event_listener_with_callback("change", change_cb.as_ref().unchecked_ref())
        .map_err(CrawlError::dom)?;
    change_cb.forget();

    for field in &targets.fields {
        let input_controller = Rc::clone(controller);
        let input_cb = Closure::wrap(Box::new(move |_event: Event| {
            if let Err(err) = input_controller.on_field_input() {
                error!(error = %err, "field input handler failed");
            }
        }) as Box<dyn FnMut(_)>);
        field
            .add_event_listener_with_callback("input", input_cb.as_ref().unchecked_ref())
            .map_err(CrawlError::dom)?;
        input_cb.forget();
    }

    Ok(())
}
