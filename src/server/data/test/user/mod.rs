use crate::server::{
    data::user::UserRepository,
    model::user::{NewUser, UserChanges},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find;
mod update;
