pub mod app_bar;
pub mod profile_card;
pub mod user_details;
pub mod users_list;
