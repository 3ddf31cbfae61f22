//! Automatic logout after a period without user activity

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::context::{do_logout, use_auth};

pub const WARNING_AFTER_MS: f64 = 50.0 * 60.0 * 1000.0;
pub const LOGOUT_AFTER_MS: f64 = 55.0 * 60.0 * 1000.0;
const CHECK_EVERY_MS: u32 = 15_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InactivityPhase {
    Active,
    /// Logout is near; carries the whole minutes left
    Warning(u32),
    Expired,
}

impl InactivityPhase {
    pub fn for_idle(idle_ms: f64) -> Self {
        if idle_ms >= LOGOUT_AFTER_MS {
            InactivityPhase::Expired
        } else if idle_ms >= WARNING_AFTER_MS {
            let left = ((LOGOUT_AFTER_MS - idle_ms) / 60_000.0).ceil() as u32;
            InactivityPhase::Warning(left)
        } else {
            InactivityPhase::Active
        }
    }
}

/// Watches keyboard/mouse activity and signs the user out when idle.
///
/// Mounted once inside the authenticated layout.
#[component]
pub fn InactivityWatcher() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let last_activity = RwSignal::new(js_sys::Date::now());
    let phase = RwSignal::new(InactivityPhase::Active);

    let touch = move || {
        last_activity.set(js_sys::Date::now());
        if phase.get_untracked() != InactivityPhase::Active {
            phase.set(InactivityPhase::Active);
        }
    };
    let handles = vec![
        window_event_listener(ev::mousemove, move |_| touch()),
        window_event_listener(ev::keydown, move |_| touch()),
        window_event_listener(ev::click, move |_| touch()),
        window_event_listener(ev::scroll, move |_| touch()),
    ];

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        spawn_local(async move {
            while alive.load(Ordering::Relaxed) {
                TimeoutFuture::new(CHECK_EVERY_MS).await;
                if !alive.load(Ordering::Relaxed) {
                    break;
                }
                let idle = js_sys::Date::now() - last_activity.get_untracked();
                let next = InactivityPhase::for_idle(idle);
                if next == InactivityPhase::Expired {
                    log::info!("session closed after inactivity");
                    do_logout(auth_state, set_auth_state).await;
                    break;
                }
                phase.set(next);
            }
        });
    }

    on_cleanup(move || {
        alive.store(false, Ordering::Relaxed);
        for handle in handles {
            handle.remove();
        }
    });

    view! {
        {move || match phase.get() {
            InactivityPhase::Warning(minutes) => Some(view! {
                <div class="alert alert--warning inactivity-warning">
                    {format!(
                        "Su sesión se cerrará en {} minuto(s) por inactividad. Mueva el mouse o presione una tecla para continuar.",
                        minutes
                    )}
                </div>
            }),
            _ => None,
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases() {
        let minute = 60_000.0;
        assert_eq!(InactivityPhase::for_idle(0.0), InactivityPhase::Active);
        assert_eq!(InactivityPhase::for_idle(49.0 * minute), InactivityPhase::Active);
        assert_eq!(InactivityPhase::for_idle(50.0 * minute), InactivityPhase::Warning(5));
        assert_eq!(InactivityPhase::for_idle(54.5 * minute), InactivityPhase::Warning(1));
        assert_eq!(InactivityPhase::for_idle(55.0 * minute), InactivityPhase::Expired);
    }
}
