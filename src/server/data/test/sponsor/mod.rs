use crate::{
    model::sponsor::SponsorStatus,
    server::{
        data::sponsor::SponsorRepository,
        error::AppError,
        model::sponsor::{CreateSponsorParams, UpdateSponsorParams},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod crud;
