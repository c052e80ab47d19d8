use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Visual flavor of a toast.
#[derive(Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub message: String,
    pub kind: NotificationKind,
    pub on_dismiss: Callback<()>,
}

/// Slide-in toast in the top-right corner. Auto-dismisses after five
/// seconds by asking its owner to stop rendering it.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let entered = use_state(|| false);

    {
        let entered = entered.clone();
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                // Let the element paint off-screen first so the slide-in
                // transition actually runs.
                Timeout::new(100, move || entered.set(true)).forget();
                Timeout::new(5000, move || on_dismiss.emit(())).forget();
                || ()
            },
            (),
        );
    }

    let kind_class = match props.kind {
        NotificationKind::Success => "notification-success",
        NotificationKind::Error => "notification-error",
        NotificationKind::Info => "notification-info",
    };

    let transform = if *entered {
        "transform: translateX(0);"
    } else {
        "transform: translateX(120%);"
    };

    html! {
        <div class={classes!("notification", kind_class)} style={transform}>
            {&props.message}
            <style>
                {r#"
                    .notification {
                        position: fixed;
                        top: 100px;
                        right: 20px;
                        padding: 15px 20px;
                        border-radius: 8px;
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
                        z-index: 10000;
                        font-weight: 600;
                        transition: transform 0.3s ease;
                    }
                    .notification-success {
                        background: #00ff88;
                        color: #000;
                    }
                    .notification-error {
                        background: #ff4444;
                        color: #000;
                    }
                    .notification-info {
                        background: #333;
                        color: #fff;
                    }
                "#}
            </style>
        </div>
    }
}
