pub mod about;
pub mod coin;
pub mod compare;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
pub mod watchlist;
