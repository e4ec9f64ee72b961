use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::HttpActivityApi;
use crate::components::{ActivityCard, SignupForm};
use crate::config::{BoardConfig, MESSAGE_TTL_MS};
use crate::controller::{self, BoardView};
use crate::state::{
    BoardAction, BoardState, Flash, LoadState, MessageAction, MessageState, RemovalKey,
};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: BoardConfig,
}

#[derive(Clone)]
struct YewBoardView {
    board: UseReducerDispatcher<BoardState>,
    message: UseReducerDispatcher<MessageState>,
    // Ticket source for message ids; shared across renders.
    tickets: Rc<Cell<u64>>,
    on_reset: Callback<()>,
}

impl BoardView for YewBoardView {
    fn dispatch(&self, action: BoardAction) {
        self.board.dispatch(action);
    }

    fn show_message(&self, flash: Flash) {
        let id = self.tickets.get() + 1;
        self.tickets.set(id);
        self.message.dispatch(MessageAction::Show { id, flash });

        let message = self.message.clone();
        let (delay, expire) = MessageAction::expiry(id, MESSAGE_TTL_MS);
        Timeout::new(delay, move || message.dispatch(expire)).forget();
    }

    fn reset_form(&self) {
        self.on_reset.emit(());
    }

    fn alert(&self, text: &str) {
        gloo::dialogs::alert(text);
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let api = {
        let base = props.config.api_base.clone();
        use_state(move || HttpActivityApi::new(base))
    };
    let board = use_reducer(BoardState::default);
    let message = use_reducer(MessageState::default);
    let tickets = use_memo((), |_| Cell::new(0u64));

    let email = use_state(String::new);
    let activity = use_state(String::new);

    let view = {
        let email = email.clone();
        let activity = activity.clone();
        YewBoardView {
            board: board.dispatcher(),
            message: message.dispatcher(),
            tickets: tickets.clone(),
            on_reset: Callback::from(move |_| {
                email.set(String::new());
                activity.set(String::new());
            }),
        }
    };

    // Initial load.
    {
        let api = (*api).clone();
        let view = view.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                controller::load_activities(&api, &view).await;
            });
            || ()
        });
    }

    let on_remove = {
        let api = (*api).clone();
        let view = view.clone();
        Callback::from(move |key: RemovalKey| {
            let api = api.clone();
            let view = view.clone();
            spawn_local(async move {
                controller::remove_participant(&api, &view, key).await;
            });
        })
    };

    let on_submit = {
        let api = (*api).clone();
        let view = view.clone();
        let board = board.clone();
        let email = email.clone();
        let activity = activity.clone();
        Callback::from(move |_: ()| {
            let email = email.trim().to_string();
            let activity = (*activity).clone();
            if email.is_empty() || board.activity(&activity).is_none() {
                log::debug!("Ignoring signup for {activity:?} with email {email:?}");
                return;
            }

            let api = api.clone();
            let view = view.clone();
            spawn_local(async move {
                controller::submit_signup(&api, &view, &activity, &email).await;
            });
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |v: String| email.set(v))
    };

    let on_activity = {
        let activity = activity.clone();
        Callback::from(move |v: String| activity.set(v))
    };

    html! {
        <main class="board">
            <section id="activities-container">
                <h3>{ "Available Activities" }</h3>
                { activity_list(&board, &on_remove) }
            </section>

            <section id="signup-container">
                <h3>{ "Sign Up for an Activity" }</h3>
                <SignupForm
                    email={(*email).clone()}
                    activity={(*activity).clone()}
                    activity_names={board.activity_names()}
                    busy={board.signup_in_flight}
                    {on_email}
                    {on_activity}
                    {on_submit}
                />
                <div id="message" class={message.class()} role="status">
                    { message.text().to_string() }
                </div>
            </section>
        </main>
    }
}

fn activity_list(board: &BoardState, on_remove: &Callback<RemovalKey>) -> Html {
    let content = match &board.load {
        LoadState::Loading => html! { <p>{ "Loading activities..." }</p> },
        LoadState::Failed => {
            html! { <p>{ "Failed to load activities. Please try again later." }</p> }
        }
        LoadState::Ready(catalog) => catalog
            .iter()
            .map(|(name, activity)| {
                html! {
                    <ActivityCard
                        key={name.to_string()}
                        name={name.to_string()}
                        activity={activity.clone()}
                        removing={board.removing_in(name)}
                        on_remove={on_remove.clone()}
                    />
                }
            })
            .collect::<Html>(),
    };

    html! { <div id="activities-list">{ content }</div> }
}
