use yew::prelude::*;

use crate::model::Activity;
use crate::state::RemovalKey;

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub name: String,
    pub activity: Activity,
    /// Participants whose remove button is waiting on the server.
    #[prop_or_default]
    pub removing: Vec<String>,
    pub on_remove: Callback<RemovalKey>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let a = &props.activity;

    let rows = if a.participants.is_empty() {
        html! { <li class="no-participants">{ "No participants yet" }</li> }
    } else {
        a.participants
            .iter()
            .map(|email| {
                let onclick = {
                    let on_remove = props.on_remove.clone();
                    let key = RemovalKey::new(props.name.clone(), email.clone());
                    Callback::from(move |_: MouseEvent| on_remove.emit(key.clone()))
                };
                let busy = props.removing.iter().any(|e| e == email);

                html! {
                    <li class="participant-item">
                        <span class="participant-email">{ email.clone() }</span>
                        <button
                            type="button"
                            class="delete-btn"
                            aria-label={format!("Remove {email}")}
                            disabled={busy}
                            {onclick}
                        >
                            { "✖" }
                        </button>
                    </li>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="activity-card">
            <h4>{ props.name.clone() }</h4>
            <p>{ a.description.clone() }</p>
            <p><strong>{ "Schedule:" }</strong>{ format!(" {}", a.schedule) }</p>
            <p class="availability">
                <strong>{ "Availability:" }</strong>{ format!(" {}", a.availability_label()) }
            </p>
            <div class="participants-list">
                <h5>{ "Participants" }</h5>
                <ul>{ rows }</ul>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use yew::ServerRenderer;

    use super::*;

    fn chess_club(participants: &[&str]) -> Activity {
        Activity {
            description: "Learn strategies and compete in chess tournaments".into(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".into(),
            max_participants: 2,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[function_component(EmptyChessCard)]
    fn empty_chess_card() -> Html {
        html! {
            <ActivityCard
                name="Chess Club"
                activity={chess_club(&[])}
                on_remove={Callback::noop()}
            />
        }
    }

    #[function_component(BusyChessCard)]
    fn busy_chess_card() -> Html {
        html! {
            <ActivityCard
                name="Chess Club"
                activity={chess_club(&["a@x.com", "b@x.com"])}
                removing={vec!["a@x.com".to_string()]}
                on_remove={Callback::noop()}
            />
        }
    }

    #[tokio::test]
    async fn empty_list_renders_placeholder_row() {
        let html = ServerRenderer::<EmptyChessCard>::new().render().await;

        assert!(html.contains(r#"<li class="no-participants">No participants yet</li>"#));
        assert!(html.contains("2 spots left"));
        assert!(!html.contains("participant-item"));
    }

    #[tokio::test]
    async fn participants_replace_placeholder_and_busy_row_is_disabled() {
        let html = ServerRenderer::<BusyChessCard>::new().render().await;

        assert!(!html.contains("No participants yet"));
        assert!(html.contains("0 spots left"));

        let row = |email: &str| {
            let start = html
                .find(&format!(r#"aria-label="Remove {email}""#))
                .unwrap_or_else(|| panic!("no remove button for {email}"));
            let end = start + html[start..].find('>').unwrap();
            html[start..end].to_string()
        };
        assert!(row("a@x.com").contains("disabled"));
        assert!(!row("b@x.com").contains("disabled"));
    }
}
