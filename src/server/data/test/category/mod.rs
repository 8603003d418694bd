use crate::server::{
    data::category::CategoryRepository,
    model::category::{CreateCategoryParams, UpdateCategoryParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
