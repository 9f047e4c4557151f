//! Model → entity mappers

mod community;
mod post;
mod user;
