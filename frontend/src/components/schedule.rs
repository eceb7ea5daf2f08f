//! Weekly class schedule with per-slot enrollment toggles.

use std::collections::HashSet;

use chrono::Local;
use jjx_shared::ClassScheduleItem;
use jjx_shared::schedule::{
    SlotAction, apply_toggle, format_week_range, group_by_day, slot_action, week_range,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::schedule::SharedScheduleApi;

#[component]
pub fn ScheduleView() -> impl IntoView {
    // Parking the handle in local storage gives the view closures a Copy
    // handle they can capture freely.
    let schedule_api = StoredValue::new_local(
        use_context::<SharedScheduleApi>().expect("ScheduleApi should be provided"),
    );

    let (items, set_items) = signal(Vec::<ClassScheduleItem>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    // Slots with an update in flight; each slot serializes its own toggles.
    let (updating, set_updating) = signal(HashSet::<String>::new());

    let load_schedule = move || {
        set_loading.set(true);
        set_error_msg.set(None);
        let api = schedule_api.get_value();
        spawn_local(async move {
            match api.load_schedule().await {
                Ok(data) => set_items.set(data),
                Err(err) => set_error_msg.set(Some(err)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_schedule();
    });

    let on_toggle = move |id: String| {
        let enroll = items.with(|list| {
            list.iter()
                .find(|c| c.id == id)
                .map(|c| !c.is_enrolled)
                .unwrap_or(false)
        });
        set_updating.update(|pending| {
            pending.insert(id.clone());
        });

        let api = schedule_api.get_value();
        spawn_local(async move {
            // Optimistic: the local count moves by one once the call
            // resolves, with no reconciliation against the server.
            if api.set_enrollment(&id, enroll).await.is_ok() {
                set_items.update(|list| {
                    if let Some(slot) = list.iter_mut().find(|c| c.id == id) {
                        apply_toggle(slot);
                    }
                });
            }
            set_updating.update(|pending| {
                pending.remove(&id);
            });
        });
    };

    let week_heading = move || {
        let (monday, sunday) = week_range(Local::now().date_naive());
        format!("Week of {}", format_week_range(monday, sunday))
    };

    let slot_row = move |class: ClassScheduleItem| {
        let id = class.id.clone();
        let action = slot_action(&class);
        let busy = {
            let id = id.clone();
            move || updating.with(|pending| pending.contains(&id))
        };
        let busy_label = busy.clone();
        view! {
            <div class="class-card">
                <div class="class-info">
                    <span class="class-time">{class.time.clone()}</span>
                    <span class="class-name">{class.name.clone()}</span>
                    {class
                        .instructor
                        .clone()
                        .map(|coach| view! { <span class="class-instructor">{coach}</span> })}
                    <span class="class-capacity-small">
                        {class.enrolled} "/" {class.capacity} " enrolled"
                    </span>
                </div>
                <button
                    class=match action {
                        SlotAction::Drop => "btn-small btn-drop",
                        SlotAction::SignUp => "btn-small btn-enroll",
                        SlotAction::Full => "btn-small btn-full",
                    }
                    disabled=move || busy() || !action.is_enabled()
                    on:click=move |_| on_toggle(id.clone())
                >
                    {move || if busy_label() { "Updating..." } else { action.label() }}
                </button>
            </div>
        }
    };

    view! {
        <div class="schedule-section">
            <h2>"Weekly Class Schedule"</h2>
            <p class="schedule-week">{week_heading}</p>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="schedule-loading">
                            <p>"Loading class schedule..."</p>
                            <div class="spinner"></div>
                        </div>
                    }
                }
            >
                <Show
                    when=move || error_msg.get().is_none()
                    fallback=move || {
                        view! {
                            <div class="error">
                                {move || error_msg.get().unwrap_or_default()}
                                <button class="btn-small" on:click=move |_| load_schedule()>
                                    "Retry"
                                </button>
                            </div>
                        }
                    }
                >
                    {move || {
                        group_by_day(&items.get())
                            .into_iter()
                            .map(|(day, classes)| {
                                view! {
                                    <div class="schedule-day">
                                        <h3 class="schedule-day-name">{day.label()}</h3>
                                        {classes
                                            .into_iter()
                                            .map(slot_row)
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </Show>
            </Show>
        </div>
    }
}
