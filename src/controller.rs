//! The board's request flows: load, remove, sign up.
//!
//! Each flow talks to an [`ActivityService`] and reports back through a
//! [`BoardView`]. Nothing here touches the DOM directly.

use crate::api::ActivityService;
use crate::state::{BoardAction, Flash, RemovalKey};

pub const REMOVE_REJECTED_TEXT: &str = "Failed to remove participant";
pub const REMOVE_FAILED_TEXT: &str = "Failed to remove participant. Please try again.";
pub const SIGNUP_REJECTED_TEXT: &str = "An error occurred";
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";

pub trait BoardView {
    fn dispatch(&self, action: BoardAction);

    /// Replaces whatever message is showing and restarts its hide timer.
    fn show_message(&self, flash: Flash);

    fn reset_form(&self);

    fn alert(&self, text: &str);
}

pub async fn load_activities<S, V>(api: &S, view: &V)
where
    S: ActivityService,
    V: BoardView,
{
    match api.list_activities().await {
        Ok(catalog) => {
            if catalog.is_empty() {
                log::warn!("Server returned no activities");
            } else {
                log::info!("Loaded {} activities", catalog.len());
            }
            view.dispatch(BoardAction::Loaded(catalog));
        }
        Err(e) => {
            log::error!("Error fetching activities: {e:?}");
            view.dispatch(BoardAction::LoadFailed);
        }
    }
}

pub async fn remove_participant<S, V>(api: &S, view: &V, key: RemovalKey)
where
    S: ActivityService,
    V: BoardView,
{
    view.dispatch(BoardAction::RemovalStarted(key.clone()));

    match api.unregister(&key.activity, &key.email).await {
        Ok(()) => {
            log::info!("Removed {} from {}", key.email, key.activity);
            view.dispatch(BoardAction::RemovalConfirmed(key));
        }
        Err(e) => {
            if e.is_transport() {
                log::error!("Error removing participant: {e:?}");
            } else {
                log::warn!("Removal of {} from {} rejected: {e:?}", key.email, key.activity);
            }
            view.alert(&e.user_message(REMOVE_REJECTED_TEXT, REMOVE_FAILED_TEXT));
            view.dispatch(BoardAction::RemovalFailed(key));
        }
    }
}

pub async fn submit_signup<S, V>(api: &S, view: &V, activity: &str, email: &str)
where
    S: ActivityService,
    V: BoardView,
{
    view.dispatch(BoardAction::SignupStarted);
    let result = api.sign_up(activity, email).await;
    view.dispatch(BoardAction::SignupFinished);

    match result {
        Ok(receipt) => {
            log::info!("Signed {email} up for {activity}");
            view.show_message(Flash::success(receipt.message));
            view.reset_form();
            load_activities(api, view).await;
        }
        Err(e) => {
            if e.is_transport() {
                log::error!("Error signing up: {e:?}");
            } else {
                log::warn!("Signup of {email} for {activity} rejected: {e:?}");
            }
            view.show_message(Flash::error(
                e.user_message(SIGNUP_REJECTED_TEXT, SIGNUP_FAILED_TEXT),
            ));
        }
    }
}
