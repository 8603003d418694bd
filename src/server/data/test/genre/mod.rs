use crate::server::{
    data::genre::GenreRepository,
    model::genre::{CreateGenreParams, UpdateGenreParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
mod search;
