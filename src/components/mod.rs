mod activity_card;
mod signup_form;

pub use activity_card::ActivityCard;
pub use signup_form::SignupForm;
