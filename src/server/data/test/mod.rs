mod category;
mod content;
mod genre;
mod sponsor;
mod user;
