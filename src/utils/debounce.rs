use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;

/// Creates a debounced resize listener that delays execution until after a period of inactivity.
///
/// Resize events fire dozens of times per second while a window is dragged; each chart panel
/// re-measures itself only once `delay_ms` has passed with no new event.
///
/// Returns `None` when there is no window to listen on. The listener is removed when dropped,
/// so keep it alive for the component's lifetime.
///
/// # Example
///
/// ```rust,ignore
/// use_effect_with(container_ref.clone(), move |container_ref| {
///     let listener = create_debounced_resize_listener(move || remeasure(), 150);
///
///     move || drop(listener)
/// });
/// ```
pub fn create_debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let timeout_handle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    window().map(|window| {
        EventListener::new(&window, "resize", move |_| {
            // Dropping a pending timeout cancels it
            timeout_handle.borrow_mut().take();

            let cb = callback.clone();
            let handle = Timeout::new(delay_ms, move || cb());
            *timeout_handle.borrow_mut() = Some(handle);
        })
    })
}
