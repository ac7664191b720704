pub mod helpers;
pub mod login;
pub mod roster;
