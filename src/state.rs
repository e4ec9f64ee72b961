use std::collections::HashSet;
use std::rc::Rc;

use yew::Reducible;

use crate::model::{Activity, Catalog};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Catalog),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemovalKey {
    pub activity: String,
    pub email: String,
}

impl RemovalKey {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    Loaded(Catalog),
    LoadFailed,
    RemovalStarted(RemovalKey),
    RemovalConfirmed(RemovalKey),
    RemovalFailed(RemovalKey),
    SignupStarted,
    SignupFinished,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub load: LoadState,
    removing: HashSet<RemovalKey>,
    pub signup_in_flight: bool,
}

impl BoardState {
    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.load {
            LoadState::Ready(c) => Some(c),
            _ => None,
        }
    }

    pub fn activity(&self, name: &str) -> Option<&Activity> {
        self.catalog().and_then(|c| c.get(name))
    }

    /// Emails of `activity` whose removal request is still in flight.
    pub fn removing_in(&self, activity: &str) -> Vec<String> {
        self.removing
            .iter()
            .filter(|k| k.activity == activity)
            .map(|k| k.email.clone())
            .collect()
    }

    pub fn activity_names(&self) -> Vec<String> {
        self.catalog()
            .map(|c| c.names().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BoardAction::Loaded(catalog) => next.load = LoadState::Ready(catalog),
            BoardAction::LoadFailed => next.load = LoadState::Failed,
            BoardAction::RemovalStarted(key) => {
                next.removing.insert(key);
            }
            BoardAction::RemovalConfirmed(key) => {
                next.removing.remove(&key);
                if let LoadState::Ready(catalog) = &mut next.load {
                    if !catalog.remove_participant(&key.activity, &key.email) {
                        log::debug!(
                            "{} was already gone from {} locally",
                            key.email,
                            key.activity
                        );
                    }
                }
            }
            BoardAction::RemovalFailed(key) => {
                next.removing.remove(&key);
            }
            BoardAction::SignupStarted => next.signup_in_flight = true,
            BoardAction::SignupFinished => next.signup_in_flight = false,
        }
        Rc::new(next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub text: String,
    pub kind: MessageKind,
}

impl Flash {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageAction {
    /// `id` must grow with every call; it ties the hide timer to this message.
    Show { id: u64, flash: Flash },
    Expire { id: u64 },
}

impl MessageAction {
    /// Delay and action for the hide timer that belongs to message `id`.
    pub fn expiry(id: u64, ttl_ms: u32) -> (u32, MessageAction) {
        (ttl_ms, MessageAction::Expire { id })
    }
}

/// The single message slot under the signup form. New messages overwrite old ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageState {
    pub flash: Option<Flash>,
    pub visible: bool,
    id: u64,
}

impl MessageState {
    pub fn class(&self) -> String {
        let kind = self.flash.as_ref().map(|f| f.kind.class());
        match (kind, self.visible) {
            (Some(kind), true) => kind.to_string(),
            (Some(kind), false) => format!("{kind} hidden"),
            (None, _) => "hidden".to_string(),
        }
    }

    pub fn text(&self) -> &str {
        self.flash.as_ref().map(|f| f.text.as_str()).unwrap_or_default()
    }
}

impl Reducible for MessageState {
    type Action = MessageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            MessageAction::Show { id, flash } => Rc::new(MessageState {
                flash: Some(flash),
                visible: true,
                id,
            }),
            // A timer from an older message must not hide a newer one.
            MessageAction::Expire { id } if id == self.id && self.visible => {
                Rc::new(MessageState {
                    visible: false,
                    ..(*self).clone()
                })
            }
            MessageAction::Expire { .. } => self,
        }
    }
}
